use async_trait::async_trait;
use ledger_actor::{FrameworkError, Ledger, LedgerActor};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

// --- Test Ledger ---

#[derive(Clone, Debug, Default, PartialEq)]
struct Queue {
    items: Vec<String>,
}

#[derive(Debug)]
enum QueueCommand {
    Push(String),
    Pop,
}

#[derive(Debug, PartialEq)]
enum QueueReply {
    Pushed(usize),
    Popped(String),
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum QueueError {
    #[error("queue is empty")]
    Empty,
}

/// Counts hook invocations so the test can observe them from outside the actor.
#[derive(Default)]
struct Hooks {
    started: AtomicU32,
    stopped: AtomicU32,
}

#[async_trait]
impl Ledger for Queue {
    type Command = QueueCommand;
    type Reply = QueueReply;
    type Context = Arc<Hooks>;
    type Error = QueueError;

    async fn on_start(&mut self, ctx: &Arc<Hooks>) -> Result<(), QueueError> {
        ctx.started.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn handle(
        &mut self,
        command: QueueCommand,
        _ctx: &Arc<Hooks>,
    ) -> Result<QueueReply, QueueError> {
        match command {
            QueueCommand::Push(item) => {
                self.items.push(item);
                Ok(QueueReply::Pushed(self.items.len()))
            }
            QueueCommand::Pop => {
                if self.items.is_empty() {
                    return Err(QueueError::Empty);
                }
                Ok(QueueReply::Popped(self.items.remove(0)))
            }
        }
    }

    async fn on_stop(&mut self, ctx: &Arc<Hooks>) -> Result<(), QueueError> {
        ctx.stopped.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// --- Tests ---

#[tokio::test]
async fn test_ledger_full_lifecycle() {
    let hooks = Arc::new(Hooks::default());
    let (actor, client) = LedgerActor::new(Queue::default(), 10);
    let handle = tokio::spawn(actor.run(hooks.clone()));

    // 1. Commands apply in order
    assert_eq!(
        client.execute(QueueCommand::Push("a".into())).await.unwrap(),
        QueueReply::Pushed(1)
    );
    assert_eq!(
        client.execute(QueueCommand::Push("b".into())).await.unwrap(),
        QueueReply::Pushed(2)
    );
    assert_eq!(
        client.execute(QueueCommand::Pop).await.unwrap(),
        QueueReply::Popped("a".into())
    );

    // 2. Snapshot reflects the state without changing it
    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.items, vec!["b".to_string()]);

    // 3. Rejections come back as the ledger's own error
    client.execute(QueueCommand::Pop).await.unwrap();
    let err = client.execute(QueueCommand::Pop).await.unwrap_err();
    assert_eq!(err.downcast::<QueueError>().unwrap(), QueueError::Empty);

    // 4. Dropping the last client stops the actor and runs on_stop
    drop(client);
    handle.await.unwrap();
    assert_eq!(hooks.started.load(Ordering::SeqCst), 1);
    assert_eq!(hooks.stopped.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_concurrent_clients_are_serialized() {
    let (actor, client) = LedgerActor::new(Queue::default(), 4);
    tokio::spawn(actor.run(Arc::new(Hooks::default())));

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.execute(QueueCommand::Push(format!("item_{i}"))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 20);
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = LedgerActor::new(Queue::default(), 1);
    drop(actor);

    let result = client.execute(QueueCommand::Pop).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
