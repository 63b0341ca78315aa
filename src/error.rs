use thiserror::Error;

#[derive(Error, Debug)]
pub enum T9Error {
    /// No child exists for this input at the current node. The cursor stays put.
    #[error("invalid input: no transition for {}", .0)]
    InvalidInput(u8),

    #[error("failed to read words source: {}", .0)]
    SourceRead(#[from] std::io::Error),
}

impl T9Error {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, T9Error::InvalidInput(_))
    }
}
