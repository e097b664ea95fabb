use std::cell::Cell;
use std::rc::Rc;

use crate::content::key::ContentKey;

/// Handed out by [`RequestTracker::begin`]; only the latest one is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    key: ContentKey,
}

impl Ticket {
    pub fn key(&self) -> &ContentKey {
        &self.key
    }
}

/// Remembers the most recently requested key so results of superseded
/// requests can be dropped before they reach the render target. Clones share
/// the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Rc<Cell<u64>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, key: &ContentKey) -> Ticket {
        let generation = self.latest.get() + 1;
        self.latest.set(generation);
        Ticket {
            generation,
            key: key.clone(),
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.latest.get()
    }
}
