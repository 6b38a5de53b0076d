//! CLI command implementations

pub mod init;
pub mod player;
pub mod rules;
pub mod simulate;
pub mod status;
