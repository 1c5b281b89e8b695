use crate::page::PageId;

/// Identifies one accepted transition. Only the matching ticket commits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionTicket {
    id: u64,
    target: PageId,
}

impl TransitionTicket {
    pub(crate) fn new(id: u64, target: PageId) -> Self {
        Self { id, target }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn target(&self) -> PageId {
        self.target
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Idle,
    Transitioning {
        ticket: TransitionTicket,
        from: PageId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub(crate) active: PageId,
    pub(crate) phase: Phase,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: PageId::Home,
            phase: Phase::Idle,
        }
    }
}

impl NavigationState {
    pub fn active(&self) -> PageId {
        self.active
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn pending(&self) -> Option<TransitionTicket> {
        match self.phase {
            Phase::Idle => None,
            Phase::Transitioning { ticket, .. } => Some(ticket),
        }
    }
}
