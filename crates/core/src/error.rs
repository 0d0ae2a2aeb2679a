/// Domain-level errors shared across the workspace.
///
/// Not-found is deliberately absent: a well-formed request whose target
/// does not exist is an `Option::None`, never an error.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Caller-supplied data failed a precondition. Always detected before
    /// any database call; maps to a 400 at the HTTP boundary.
    #[error("{0}")]
    Validation(String),
}
