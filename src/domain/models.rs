use std::collections::HashSet;
use std::path::PathBuf;

pub const DEFAULT_EXTENSIONS: &[&str] = &[".cs", ".csproj", ".sln", ".md", ".json"];
pub const DEFAULT_IGNORE_DIRS: &[&str] = &["bin", "obj", ".git", ".vs", ".idea"];

#[derive(Debug, Clone)]
pub struct BundleConfig {
    pub extensions: HashSet<String>,
    pub ignore_dirs: HashSet<String>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BundleConfig {
    pub fn includes_file(&self, file_name: &str) -> bool {
        let ext = file_extension(file_name);
        !ext.is_empty() && self.extensions.contains(ext)
    }

    pub fn is_ignored_dir(&self, dir_name: &str) -> bool {
        self.ignore_dirs.contains(dir_name)
    }
}

/// Suffix from the last `.` to the end of `file_name`, or `""`.
///
/// Leading dots do not start an extension, so `.md` and `..json` have none.
/// Case is preserved: `notes.MD` yields `.MD`.
pub fn file_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if file_name[..idx].chars().any(|c| c != '.') => &file_name[idx..],
        _ => "",
    }
}

#[derive(Debug, Clone)]
pub struct BundleEntry {
    pub relative_path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub relative_path: PathBuf,
    pub reason: String,
}

#[derive(Debug)]
pub struct Bundle {
    pub text: String,
    pub char_count: usize,
    pub files_included: usize,
    pub skipped: Vec<SkippedFile>,
}
