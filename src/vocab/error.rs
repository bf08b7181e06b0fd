use thiserror::Error;

/// Why an imported document was refused.
///
/// Both kinds leave the store untouched and stay distinguishable to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Could not read the file: it is not valid JSON ({0})")]
    MalformedDocument(String),

    #[error("Invalid file format: expected a JSON list of vocabulary entries ({0})")]
    InvalidShape(String),
}

impl ImportError {
    /// The fixed notification shown to the user for this kind of failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            ImportError::MalformedDocument(_) => "Could not read the file: it is not valid JSON.",
            ImportError::InvalidShape(_) => {
                "Invalid file format: expected a JSON list of vocabulary entries."
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, VocabError>;
