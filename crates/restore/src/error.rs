/// Error type for the Restore module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error when reading the target source file
    #[error("Read error: {0}")]
    ReadError(String),
    /// Generic internal error that may occur during restoration
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
