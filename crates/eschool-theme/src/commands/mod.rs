//! CLI command implementations.

pub mod check;
pub mod css;
pub mod init;
pub mod resolve;
pub mod scan;
pub mod watch;
