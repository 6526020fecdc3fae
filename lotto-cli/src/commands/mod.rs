//! CLI Commands

pub mod check;
pub mod init_config;
pub mod play;
