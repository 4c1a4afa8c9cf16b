//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Task text was empty or whitespace-only after trimming
    #[error("task text is empty")]
    EmptyTask,

    /// Due date did not match the `YYYY-MM-DD` shape
    #[error("invalid due date format: {0}")]
    InvalidDateFormat(String),

    /// Caller-supplied position outside the current task list
    #[error("task position out of range: {0}")]
    IndexOutOfRange(usize),

    /// Persisted record is missing the required `text` field or has a
    /// field of the wrong type
    #[error("malformed task record: {0}")]
    MalformedRecord(String),

    /// I/O or parse failure while reading or writing the storage file
    #[error("storage error: {0}")]
    Persistence(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Persistence(err.to_string())
    }
}
