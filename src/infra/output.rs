use crate::domain::models::Bundle;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info, warn};
use std::io::Write;

pub trait OutputWriter {
    fn write(&self, content: &str) -> anyhow::Result<()>;
}

pub struct ClipboardWriter;

impl OutputWriter for ClipboardWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing output to clipboard");

        #[cfg(all(unix, not(target_os = "macos")))]
        for command in crate::infra::copy_command::detected_copy_commands() {
            match command.copy(content) {
                Ok(()) => {
                    info!(
                        "Output copied to clipboard via {} (size: {} bytes)",
                        command.program(),
                        content.len()
                    );
                    return Ok(());
                }
                Err(e) => debug!("{} failed, trying next backend: {:#}", command.program(), e),
            }
        }

        copy_in_process(content)
    }
}

#[cfg(feature = "clipboard-support")]
fn copy_in_process(content: &str) -> anyhow::Result<()> {
    use clipboard::{ClipboardContext, ClipboardProvider};

    let mut ctx = <ClipboardContext as ClipboardProvider>::new().map_err(|e| {
        warn!("Failed to access clipboard: {}", e);
        anyhow::anyhow!("Failed to access clipboard: {}", e)
    })?;

    ctx.set_contents(content.to_owned()).map_err(|e| {
        warn!("Failed to copy to clipboard: {}", e);
        anyhow::anyhow!("Failed to copy to clipboard: {}", e)
    })?;

    info!("Output copied to clipboard (size: {} bytes)", content.len());
    Ok(())
}

#[cfg(not(feature = "clipboard-support"))]
fn copy_in_process(_content: &str) -> anyhow::Result<()> {
    warn!("No clipboard command found and in-process support was not compiled in");
    anyhow::bail!("context-paste was built without the `clipboard-support` feature")
}

pub fn print_summary<W: Write>(out: &mut W, bundle: &Bundle) -> anyhow::Result<()> {
    out.execute(SetForegroundColor(Color::Green))?;
    writeln!(
        out,
        "Bundled {} characters from project to CLIPBOARD.",
        bundle.char_count
    )?;
    out.execute(ResetColor)?;
    Ok(())
}
