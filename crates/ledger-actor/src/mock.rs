//! # Mocking Ledgers in Tests
//!
//! `MockClient<L>` hands out a real [`LedgerClient<L>`] whose requests are answered from a
//! queue of scripted expectations instead of a running ledger. Use it to test code that sits
//! *around* a ledger (typed client wrappers, the coordinator) without the ledger's state.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | none, scripted replies | the real ledger |
//! | **Error injection** | `return_err` | needs a crafted state |
//! | **Use case** | logic around the client | the ledger itself or the whole system |
//!
//! ## Fluent expectations
//!
//! ```rust
//! use ledger_actor::mock::MockClient;
//! use ledger_actor::{FrameworkError, Ledger};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, Default)] struct Tally { total: u32 }
//! #[derive(Debug)] enum TallyCommand { Add(u32) }
//! #[derive(Debug, thiserror::Error)] #[error("overflow")] struct Overflow;
//!
//! #[async_trait]
//! impl Ledger for Tally {
//!     type Command = TallyCommand; type Reply = u32; type Context = (); type Error = Overflow;
//!     async fn handle(&mut self, _: TallyCommand, _: &()) -> Result<u32, Overflow> { Ok(0) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tally>::new();
//!     mock.expect_execute().return_ok(7);
//!     mock.expect_execute().return_rejected(Overflow);
//!
//!     let client = mock.client();
//!     assert_eq!(client.execute(TallyCommand::Add(7)).await.unwrap(), 7);
//!     assert!(matches!(
//!         client.execute(TallyCommand::Add(1)).await,
//!         Err(FrameworkError::Rejected(_))
//!     ));
//!
//!     mock.verify();
//!     assert_eq!(mock.received().len(), 2);
//! }
//! ```
//!
//! ## Raw channel helpers
//!
//! [`create_mock_client`] returns a client plus the receiving end of its channel, so a test
//! can inspect each request and answer it by hand with [`expect_execute`] /
//! [`expect_snapshot`].

use crate::client::LedgerClient;
use crate::error::FrameworkError;
use crate::ledger::Ledger;
use crate::message::LedgerRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<L: Ledger> {
    Execute {
        response: Result<L::Reply, FrameworkError>,
    },
    Snapshot {
        response: Result<L, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next expectation
/// (or arrives when none is left) panics the background task, which surfaces in the test as
/// an `ActorDropped` error on the caller side.
pub struct MockClient<L: Ledger> {
    client: LedgerClient<L>,
    expectations: Arc<Mutex<VecDeque<Expectation<L>>>>,
    received: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<L: Ledger> Default for MockClient<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Ledger> MockClient<L> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<LedgerRequest<L>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        LedgerRequest::Execute {
                            command,
                            respond_to,
                        },
                        Some(Expectation::Execute { response }),
                    ) => {
                        received_clone.lock().unwrap().push(format!("{command:?}"));
                        let _ = respond_to.send(response);
                    }
                    (LedgerRequest::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
                        received_clone.lock().unwrap().push("Snapshot".to_string());
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: LedgerClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> LedgerClient<L> {
        self.client.clone()
    }

    /// Expects an `execute` call.
    pub fn expect_execute(&mut self) -> ExecuteExpectationBuilder<L> {
        ExecuteExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` call.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<L> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// `Debug` renderings of the requests answered so far, in arrival order.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `execute` expectations.
pub struct ExecuteExpectationBuilder<L: Ledger> {
    expectations: Arc<Mutex<VecDeque<Expectation<L>>>>,
}

impl<L: Ledger> ExecuteExpectationBuilder<L> {
    /// Answers with a successful reply.
    pub fn return_ok(self, reply: L::Reply) {
        self.push(Ok(reply));
    }

    /// Answers as if the ledger rejected the command with `error`.
    pub fn return_rejected(self, error: L::Error) {
        self.push(Err(FrameworkError::Rejected(Box::new(error))));
    }

    /// Answers with a plumbing error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<L::Reply, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Execute { response });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<L: Ledger> {
    expectations: Arc<Mutex<VecDeque<Expectation<L>>>>,
}

impl<L: Ledger> SnapshotExpectationBuilder<L> {
    /// Answers with a copy of `ledger`.
    pub fn return_ok(self, ledger: L) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot {
                response: Ok(ledger),
            });
    }

    /// Answers with a plumbing error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot {
                response: Err(error),
            });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls each request off `receiver`, asserts on it and answers
/// through the contained responder.
pub fn create_mock_client<L: Ledger>(
    buffer_size: usize,
) -> (LedgerClient<L>, mpsc::Receiver<LedgerRequest<L>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerClient::new(sender), receiver)
}

/// Returns the next request if it is an `Execute`.
pub async fn expect_execute<L: Ledger>(
    receiver: &mut mpsc::Receiver<LedgerRequest<L>>,
) -> Option<(L::Command, oneshot::Sender<Result<L::Reply, FrameworkError>>)> {
    match receiver.recv().await {
        Some(LedgerRequest::Execute {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Returns the responder of the next request if it is a `Snapshot`.
pub async fn expect_snapshot<L: Ledger>(
    receiver: &mut mpsc::Receiver<LedgerRequest<L>>,
) -> Option<oneshot::Sender<Result<L, FrameworkError>>> {
    match receiver.recv().await {
        Some(LedgerRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Shelf {
        jars: u32,
    }

    #[derive(Debug, PartialEq)]
    enum ShelfCommand {
        Stack(u32),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("shelf is full")]
    struct ShelfFull;

    #[async_trait]
    impl Ledger for Shelf {
        type Command = ShelfCommand;
        type Reply = u32;
        type Context = ();
        type Error = ShelfFull;

        async fn handle(&mut self, command: ShelfCommand, _ctx: &()) -> Result<u32, ShelfFull> {
            let ShelfCommand::Stack(n) = command;
            self.jars += n;
            Ok(self.jars)
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Shelf>(10);

        let task = tokio::spawn(async move { client.execute(ShelfCommand::Stack(3)).await });

        let (command, responder) = expect_execute(&mut receiver)
            .await
            .expect("Expected Execute request");
        assert_eq!(command, ShelfCommand::Stack(3));
        responder.send(Ok(3)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_mock_client_snapshot_helper() {
        let (client, mut receiver) = create_mock_client::<Shelf>(10);

        let task = tokio::spawn(async move { client.snapshot().await });

        let responder = expect_snapshot(&mut receiver)
            .await
            .expect("Expected Snapshot request");
        responder.send(Ok(Shelf { jars: 9 })).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), Shelf { jars: 9 });
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_execute().return_ok(4);
        mock.expect_execute().return_rejected(ShelfFull);
        mock.expect_snapshot().return_ok(Shelf { jars: 4 });

        let client = mock.client();
        assert_eq!(client.execute(ShelfCommand::Stack(4)).await.unwrap(), 4);

        let rejected = client.execute(ShelfCommand::Stack(100)).await.unwrap_err();
        assert!(rejected.downcast::<ShelfFull>().is_ok());

        assert_eq!(client.snapshot().await.unwrap().jars, 4);

        mock.verify();
        assert_eq!(
            mock.received(),
            vec!["Stack(4)", "Stack(100)", "Snapshot"]
        );
    }
}
