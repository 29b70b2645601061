/// Errors that can occur during a local search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("objective error: {0}")]
    Objective(Box<dyn std::error::Error + Send + Sync>),

    #[error("starting point is not finite")]
    NonFiniteStart,
}
