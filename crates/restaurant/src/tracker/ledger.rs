//! [`Ledger`] implementation for [`OrderTracker`], so one actor task owns the tracker.

use super::commands::{TrackerCommand, TrackerReply};
use crate::tracker::{OrderTracker, TrackerError};
use async_trait::async_trait;
use ledger_actor::Ledger;
use tracing::debug;

#[async_trait]
impl Ledger for OrderTracker {
    type Command = TrackerCommand;
    type Reply = TrackerReply;
    type Context = ();
    type Error = TrackerError;

    async fn handle(
        &mut self,
        command: TrackerCommand,
        _ctx: &(),
    ) -> Result<TrackerReply, TrackerError> {
        let reply = match command {
            TrackerCommand::Place(order) => TrackerReply::Place(self.place(order)?),
            TrackerCommand::Accept(id) => TrackerReply::Accept(self.accept(id)?),
            TrackerCommand::MarkPrepared(id) => TrackerReply::MarkPrepared(self.mark_prepared(id)?),
            TrackerCommand::Retrieve(id) => TrackerReply::Retrieve(self.retrieve(id)?),
            TrackerCommand::ConfirmCompleted(order) => {
                TrackerReply::ConfirmCompleted(self.confirm_completed(order)?)
            }
            TrackerCommand::Find { order, stage } => {
                TrackerReply::Find(self.find(order, stage)?.clone())
            }
            TrackerCommand::ChooseNext => TrackerReply::ChooseNext(self.choose_next().cloned()),
        };
        debug!(?reply, "Tracker updated");
        Ok(reply)
    }
}
