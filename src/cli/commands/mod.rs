pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod process;
pub mod show;
