use std::time::Duration;

use crossterm::event::EventStream;
use futures_util::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use crate::event::DomainEvent;
use crate::nav::TransitionTicket;

pub(crate) struct EventBusRuntime {
    tx: UnboundedSender<DomainEvent>,
    input_task: Option<JoinHandle<()>>,
    commit_tasks: Vec<JoinHandle<()>>,
}

impl EventBusRuntime {
    pub(crate) fn spawn() -> (
        UnboundedSender<DomainEvent>,
        UnboundedReceiver<DomainEvent>,
        Self,
    ) {
        let (tx, rx) = unbounded_channel();
        let input_task = Some(spawn_input_task(tx.clone()));
        let runtime = Self {
            tx: tx.clone(),
            input_task,
            commit_tasks: Vec::new(),
        };
        (tx, rx, runtime)
    }

    /// Sends `TransitionElapsed(ticket)` back into the loop after `delay`.
    pub(crate) fn schedule_commit(&mut self, ticket: TransitionTicket, delay: Duration) {
        self.commit_tasks.retain(|task| !task.is_finished());
        let tx = self.tx.clone();
        self.commit_tasks.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(DomainEvent::TransitionElapsed(ticket));
        }));
    }

    pub(crate) fn shutdown(&mut self) {
        if let Some(task) = self.input_task.take() {
            task.abort();
        }
        for task in self.commit_tasks.drain(..) {
            task.abort();
        }
    }
}

fn spawn_input_task(tx: UnboundedSender<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut input_stream = EventStream::new();
        while let Some(event) = input_stream.next().await {
            let loop_event = match event {
                Ok(event) => DomainEvent::Input(event),
                Err(err) => DomainEvent::InputError(err.to_string()),
            };
            if tx.send(loop_event).is_err() {
                return;
            }
        }
    })
}
