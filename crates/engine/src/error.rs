// crates/engine/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to open file '{path}': {source}")]
    FileOpen {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{input}': {source}")]
    Read {
        input: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
impl EngineError {
    /// True when the failure means the named input does not exist.
    pub(crate) fn is_not_found(&self) -> bool {
        match self {
            Self::FileOpen { source, .. } | Self::Read { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
