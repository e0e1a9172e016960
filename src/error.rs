/// Failures the game core reports to its caller.
///
/// The core never retries and never swallows these; the HTTP layer maps
/// them onto status codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Submitted choice is not one of rock, paper, scissors.
    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),
    /// Statistics store could not complete a read or write.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

#[cfg(feature = "database")]
impl From<tokio_postgres::Error> for Error {
    fn from(e: tokio_postgres::Error) -> Self {
        Self::StoreUnavailable(e.to_string())
    }
}
