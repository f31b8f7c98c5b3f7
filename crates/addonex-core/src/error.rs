use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid record key: {0}")]
    InvalidRecordKey(String),

    #[error("Plugin {plugin} requires master {master}, which is not loaded")]
    MissingMaster { plugin: String, master: String },

    #[error("Record {0} appears more than once in the store")]
    DuplicateRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
