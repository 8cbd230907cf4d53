#[derive(Debug, thiserror::Error)]
pub enum ConsentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("wire error: {0}")]
    Wire(#[from] consent_wire::WireError),

    #[error("failed to fetch files: {0}")]
    Fetch(String),

    #[error("file is not shown on this panel: {0}")]
    UnknownFile(String),

    #[error("{action} is not permitted on file {file_id}")]
    ActionNotPermitted {
        file_id: String,
        action: &'static str,
    },

    #[error("deletion is not offered for consent record {0}")]
    DeleteNotOffered(String),
}

pub type ConsentResult<T> = std::result::Result<T, ConsentError>;
