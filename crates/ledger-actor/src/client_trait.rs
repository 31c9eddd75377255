//! # LedgerHandle Trait
//!
//! Common interface for ledger-specific clients: provides `send` and `snapshot` on top of a
//! generic `LedgerClient`, translating framework errors into the ledger's own error type.
use crate::{FrameworkError, Ledger, LedgerClient};
use async_trait::async_trait;

/// Trait for ledger-specific clients to inherit the generic operations.
///
/// # Example
///
/// ```rust
/// use ledger_actor::{FrameworkError, Ledger, LedgerClient, LedgerHandle};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)]
/// struct Tally { total: u32 }
/// #[derive(Debug)] enum TallyCommand { Add(u32) }
///
/// #[derive(Debug, thiserror::Error)]
/// enum TallyError {
///     #[error("overflow")]
///     Overflow,
///     #[error("actor communication error: {0}")]
///     Communication(String),
/// }
///
/// #[async_trait]
/// impl Ledger for Tally {
///     type Command = TallyCommand; type Reply = u32; type Context = (); type Error = TallyError;
///     async fn handle(&mut self, c: TallyCommand, _: &()) -> Result<u32, TallyError> {
///         let TallyCommand::Add(n) = c;
///         self.total = self.total.checked_add(n).ok_or(TallyError::Overflow)?;
///         Ok(self.total)
///     }
/// }
///
/// struct TallyClient { inner: LedgerClient<Tally> }
///
/// #[async_trait]
/// impl LedgerHandle<Tally> for TallyClient {
///     type Error = TallyError;
///     fn inner(&self) -> &LedgerClient<Tally> { &self.inner }
///     fn map_error(e: FrameworkError) -> TallyError {
///         e.downcast::<TallyError>()
///             .unwrap_or_else(|e| TallyError::Communication(e.to_string()))
///     }
/// }
///
/// async fn usage(client: TallyClient) {
///     // send() and snapshot() are provided automatically
///     let _ = client.send(TallyCommand::Add(1)).await;
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait LedgerHandle<L: Ledger>: Send + Sync {
    /// The ledger-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic LedgerClient.
    fn inner(&self) -> &LedgerClient<L>;

    /// Map framework errors to the ledger-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Apply one command.
    #[tracing::instrument(skip(self))]
    async fn send(&self, command: L::Command) -> Result<L::Reply, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().execute(command).await.map_err(Self::map_error)
    }

    /// Fetch a copy of the whole ledger.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<L, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
