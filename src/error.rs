use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("{} directory not found", .0.display())]
    MissingRootDirectory(PathBuf),

    #[error("Could not bind port {port}: {reason}")]
    Bind { port: u16, reason: String },
}
