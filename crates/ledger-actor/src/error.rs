//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, plus a carrier for the hosted ledger's own
//! error so it can travel back over the reply channel.

/// Errors that can occur within the ledger runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("{0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the ledger's own error from a [`FrameworkError::Rejected`].
    ///
    /// Returns `Err(self)` for plumbing failures or when the boxed error is of another type.
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::Rejected(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::Rejected),
            other => Err(other),
        }
    }
}
