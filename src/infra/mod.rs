#[cfg(all(unix, not(target_os = "macos")))]
pub mod copy_command;
pub mod file_system;
pub mod logger;
pub mod output;

#[cfg(test)]
pub mod memory_fs;
