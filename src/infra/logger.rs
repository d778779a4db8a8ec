use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

pub const LOG_LEVEL_ENV: &str = "CONTEXT_PASTE_LOG_LEVEL";

/// Log target for skipped-file diagnostics. Always enabled at `warn`,
/// whatever `CONTEXT_PASTE_LOG_LEVEL` says for everything else.
pub const SKIPPED_FILE_TARGET: &str = "context_paste::skipped";

pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn configure(builder: &mut Builder) -> &mut Builder {
    builder
        .filter_module(SKIPPED_FILE_TARGET, LevelFilter::Warn)
        .format(|buf, record| {
            let level_color = match record.level() {
                Level::Error => "31", // Red
                Level::Warn => "33",  // Yellow
                Level::Info => "32",  // Green
                Level::Debug => "36", // Cyan
                Level::Trace => "35", // Magenta
            };

            writeln!(
                buf,
                "\x1B[{}m[{}]\x1B[0m [{}] {}",
                level_color,
                record.level(),
                buf.timestamp(),
                record.args()
            )
        })
        .format_timestamp_secs()
}

pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let env = env_logger::Env::default().filter_or(LOG_LEVEL_ENV, level_for_verbosity(verbosity));

    configure(&mut Builder::from_env(env)).try_init()
}
