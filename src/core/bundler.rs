use crate::domain::models::{Bundle, BundleConfig, BundleEntry, SkippedFile};
use crate::infra::file_system::{DirListing, FileSystem};
use crate::infra::logger::SKIPPED_FILE_TARGET;
use crate::infra::output::OutputWriter;
use anyhow::Context;
use log::{debug, info, trace, warn};
use std::path::Path;

/// Ordered text fragments of one bundle, in traversal order.
pub struct BundleBuilder {
    fragments: Vec<String>,
    files_included: usize,
    skipped: Vec<SkippedFile>,
}

impl BundleBuilder {
    pub fn new(root_name: &str) -> Self {
        Self {
            fragments: vec![format!("Project Context for: {}\n", root_name)],
            files_included: 0,
            skipped: Vec::new(),
        }
    }

    pub fn push_entry(&mut self, entry: BundleEntry) {
        let path = entry.relative_path.display().to_string();
        self.fragments.push(format!("\n--- START FILE: {} ---\n", path));
        self.fragments.push(entry.content);
        self.fragments.push(format!("\n--- END FILE: {} ---\n", path));
        self.files_included += 1;
    }

    pub fn push_skipped(&mut self, skipped: SkippedFile) {
        self.skipped.push(skipped);
    }

    pub fn finish(self) -> Bundle {
        let text = self.fragments.concat();
        let char_count = text.chars().count();
        Bundle {
            text,
            char_count,
            files_included: self.files_included,
            skipped: self.skipped,
        }
    }
}

pub fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn build_bundle<F: FileSystem + ?Sized>(
    fs: &F,
    config: &BundleConfig,
    root: &Path,
) -> anyhow::Result<Bundle> {
    info!("Bundling project files under {}", root.display());
    debug!("Extensions: {:?}", config.extensions);
    debug!("Ignored directories: {:?}", config.ignore_dirs);

    let listing = fs
        .list(root)
        .with_context(|| format!("Failed to list project root {}", root.display()))?;

    let mut builder = BundleBuilder::new(&root_name(root));
    visit_dir(fs, config, root, Path::new(""), listing, &mut builder);
    let bundle = builder.finish();

    info!(
        "Bundled {} files ({} skipped), {} characters",
        bundle.files_included,
        bundle.skipped.len(),
        bundle.char_count
    );
    Ok(bundle)
}

fn visit_dir<F: FileSystem + ?Sized>(
    fs: &F,
    config: &BundleConfig,
    dir: &Path,
    rel_dir: &Path,
    listing: DirListing,
    builder: &mut BundleBuilder,
) {
    for name in &listing.files {
        if !config.includes_file(&name.to_string_lossy()) {
            trace!("Extension not bundled: {}", rel_dir.join(name).display());
            continue;
        }

        let relative_path = rel_dir.join(name);
        match fs.read_text(&dir.join(name)) {
            Ok(content) => {
                debug!("Adding file {}", relative_path.display());
                builder.push_entry(BundleEntry {
                    relative_path,
                    content,
                });
            }
            Err(e) => {
                warn!(
                    target: SKIPPED_FILE_TARGET,
                    "Skipping {}: {}",
                    relative_path.display(),
                    e
                );
                builder.push_skipped(SkippedFile {
                    relative_path,
                    reason: e.to_string(),
                });
            }
        }
    }

    for name in &listing.subdirs {
        let rel_subdir = rel_dir.join(name);
        if config.is_ignored_dir(&name.to_string_lossy()) {
            debug!("Skipping ignored directory {}", rel_subdir.display());
            continue;
        }

        let subdir = dir.join(name);
        match fs.list(&subdir) {
            Ok(sub_listing) => visit_dir(fs, config, &subdir, &rel_subdir, sub_listing, builder),
            Err(e) => warn!("Cannot list directory {}: {}", rel_subdir.display(), e),
        }
    }
}

/// Builds the bundle for `root` and hands it to `writer`.
pub fn run<F, W>(fs: &F, writer: &W, config: &BundleConfig, root: &Path) -> anyhow::Result<Bundle>
where
    F: FileSystem + ?Sized,
    W: OutputWriter + ?Sized,
{
    let bundle = build_bundle(fs, config, root)?;
    writer
        .write(&bundle.text)
        .context("Failed to copy bundle to clipboard")?;
    Ok(bundle)
}
