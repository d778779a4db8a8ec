//! External copy tools for Linux and other X11/Wayland desktops.
//!
//! The selection owned by an in-process clipboard context vanishes when the
//! process exits. `wl-copy`, `xclip` and `xsel` fork a helper that keeps
//! serving it, so they are tried before the in-process backend.

use anyhow::Context;
use log::debug;
use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyCommand {
    WlCopy,
    Xclip,
    Xsel,
}

impl CopyCommand {
    pub fn program(self) -> &'static str {
        match self {
            Self::WlCopy => "wl-copy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
        }
    }

    fn args(self) -> &'static [&'static str] {
        match self {
            Self::WlCopy => &[],
            Self::Xclip => &["-selection", "clipboard", "-in"],
            Self::Xsel => &["--clipboard", "--input"],
        }
    }

    pub fn copy(self, content: &str) -> anyhow::Result<()> {
        pipe_to_command(self.program(), self.args(), content)
    }
}

/// Copy tools to try, best first, limited to those `exists` accepts.
pub fn copy_commands(wayland: bool, exists: impl Fn(&str) -> bool) -> Vec<CopyCommand> {
    let mut candidates = Vec::with_capacity(3);
    if wayland {
        candidates.push(CopyCommand::WlCopy);
    }
    candidates.extend([CopyCommand::Xclip, CopyCommand::Xsel]);

    candidates
        .into_iter()
        .filter(|command| exists(command.program()))
        .collect()
}

pub fn command_on_path(program: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
        .unwrap_or(false)
}

pub fn detected_copy_commands() -> Vec<CopyCommand> {
    let wayland = env::var_os("WAYLAND_DISPLAY").is_some();
    let commands = copy_commands(wayland, command_on_path);
    debug!("Clipboard commands available: {:?}", commands);
    commands
}

fn pipe_to_command(program: &str, args: &[&str], content: &str) -> anyhow::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to spawn {}", program))?;

    {
        // stdin must close before waiting or the tool never finishes reading
        let mut stdin = child
            .stdin
            .take()
            .with_context(|| format!("Failed to open stdin for {}", program))?;
        stdin
            .write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to {}", program))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {}", program))?;
    if !status.success() {
        anyhow::bail!("{} exited with status: {}", program, status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_commands_prefers_wayland() {
        let all = copy_commands(true, |_| true);
        assert_eq!(
            all,
            vec![CopyCommand::WlCopy, CopyCommand::Xclip, CopyCommand::Xsel]
        );

        let x11 = copy_commands(false, |_| true);
        assert_eq!(x11, vec![CopyCommand::Xclip, CopyCommand::Xsel]);
    }

    #[test]
    fn test_copy_commands_skips_missing_tools() {
        let only_xsel = copy_commands(true, |program| program == "xsel");
        assert_eq!(only_xsel, vec![CopyCommand::Xsel]);

        assert!(copy_commands(true, |_| false).is_empty());
    }

    #[test]
    fn test_command_on_path() {
        assert!(command_on_path("sh"));
        assert!(!command_on_path("context-paste-no-such-tool"));
    }

    #[test]
    fn test_pipe_to_command_success() {
        pipe_to_command("sh", &["-c", "cat > /dev/null"], "Project Context for: demo\n").unwrap();
    }

    #[test]
    fn test_pipe_to_command_reports_exit_status() {
        let err = pipe_to_command("sh", &["-c", "cat > /dev/null; exit 3"], "x").unwrap_err();
        assert!(err.to_string().starts_with("sh exited with status"));
    }

    #[test]
    fn test_pipe_to_command_missing_program() {
        let err = pipe_to_command("context-paste-no-such-tool", &[], "x").unwrap_err();
        assert!(err.to_string().contains("Failed to spawn"));
    }
}
