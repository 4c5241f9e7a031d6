use std::path::PathBuf;

/// Failures while building the knowledge base or the program catalog.
///
/// These are startup errors: the process refuses to serve with a table that
/// would silently answer every question with the same topic.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("topic `{topic}` has an invalid keyword configuration: {reason}")]
    InvalidKeywordConfiguration { topic: String, reason: &'static str },

    #[error("topic `{0}` has an empty answer")]
    EmptyAnswer(String),

    #[error("topic id `{0}` is registered more than once")]
    DuplicateTopic(String),

    #[error("catalog number `{0}` is used by more than one program")]
    DuplicateProgramNumber(String),

    #[error("program `{number}` has an unrecognised age range `{text}`")]
    InvalidAgeRange { number: String, text: String },

    #[error("program `{number}` has a malformed occupational code `{code}`")]
    InvalidOccupationalCode { number: String, code: String },

    #[error("failed to read knowledge base file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse knowledge base file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
