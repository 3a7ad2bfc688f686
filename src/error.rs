use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Res<T> = Result<T, ConvertError>;

/// Every way a conversion run can fail. All of them are fatal.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", .path.display())]
    ParseInput {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize set: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    /// The set name cannot be used as a file name inside the output directory.
    #[error("set name {0:?} is not a usable output file name")]
    InvalidSetName(String),

    #[error("unable to locate the program directory: {0}")]
    ProgramDir(io::Error),
}
