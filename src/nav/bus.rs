use flume::{Receiver, Sender, TryRecvError};

use crate::event::PageChangedEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Receiving end of a page-changed subscription.
///
/// Dropping it ends the subscription; the publisher prunes the sender on the
/// next publish.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    rx: Receiver<PageChangedEvent>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn try_next(&self) -> Option<PageChangedEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Pending events, oldest first.
    pub fn drain(&self) -> Vec<PageChangedEvent> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}

/// One-writer, many-reader fan-out of page-changed notifications.
#[derive(Debug, Default)]
pub struct PageEvents {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Sender<PageChangedEvent>)>,
}

impl PageEvents {
    pub fn subscribe(&mut self) -> Subscription {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let (tx, rx) = flume::unbounded();
        self.subscribers.push((id, tx));
        tracing::trace!(subscription = id.0, "page events subscribed");
        Subscription { id, rx }
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        before != self.subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Delivers a copy of `event` to every live subscriber and returns how
    /// many received it.
    pub fn publish(&mut self, event: PageChangedEvent) -> usize {
        self.subscribers.retain(|(id, tx)| {
            let delivered = tx.send(event).is_ok();
            if !delivered {
                tracing::debug!(subscription = id.0, "pruned dropped page events subscriber");
            }
            delivered
        });
        self.subscribers.len()
    }
}
