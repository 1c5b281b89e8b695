use crossterm::event::Event;

use crate::command::Command;
use crate::nav::TransitionTicket;
use crate::page::PageId;

/// Broadcast once per committed page switch. Subscribers get copies only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChangedEvent {
    pub previous: PageId,
    pub page: PageId,
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    TransitionElapsed(TransitionTicket),
    RedrawTick,
}
