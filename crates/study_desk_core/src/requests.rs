//! crates/study_desk_core/src/requests.rs
//!
//! Tracks outstanding requests per logical slot so that a result arriving after
//! a newer one was applied can be recognised and discarded.

/// The logical slots that can have a request in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    MaterialsList,
    Chat,
}

/// Identifies one request issued in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    slot: SlotKind,
    generation: u64,
}

impl RequestTicket {
    pub fn slot(&self) -> SlotKind {
        self.slot
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Hands out tickets for one slot and remembers the newest one whose result
/// was applied. A failed request never makes older ones stale.
#[derive(Debug, Clone)]
pub struct RequestSlot {
    kind: SlotKind,
    issued: u64,
    applied: u64,
}

impl RequestSlot {
    pub fn new(kind: SlotKind) -> Self {
        Self {
            kind,
            issued: 0,
            applied: 0,
        }
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket {
            slot: self.kind,
            generation: self.issued,
        }
    }

    /// Marks the result of `ticket` as applied. Returns `false`, and records
    /// nothing, when a newer ticket of this slot has already been applied.
    pub fn accept(&mut self, ticket: RequestTicket) -> bool {
        if ticket.slot != self.kind || ticket.generation <= self.applied {
            return false;
        }
        self.applied = ticket.generation;
        true
    }
}
