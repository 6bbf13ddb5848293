//! Generation-checked asset slots.
//!
//! A slot hands out a [`LoadTicket`] when a load begins. The ticket is the only way to fill the
//! slot, and only the most recently issued ticket is honored: completions from earlier loads are
//! reported as [`SlotUpdate::Stale`] and dropped, whatever order they arrive in.

/// Which session slot a ticket belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Vehicle template (and its mask).
    Template,
    /// User pattern.
    Pattern,
}

/// Proof that a load was started; redeemed once when the load completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use = "a load ticket must be passed back when the load completes"]
pub struct LoadTicket {
    /// Slot the load targets.
    pub slot: SlotKind,
    /// Generation the slot had when the load began.
    pub generation: u64,
}

/// Outcome of completing a load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotUpdate {
    /// The value was stored.
    Applied,
    /// The load completed with an error; the slot is left absent.
    Failed,
    /// A newer load (or a clear) superseded this one; the result was discarded.
    Stale,
}

/// A single-valued slot guarded by a monotonically increasing generation.
#[derive(Clone, Debug)]
pub(crate) struct AssetSlot<T> {
    kind: SlotKind,
    generation: u64,
    /// Bumped whenever the held value changes; tickets alone never change it.
    revision: u64,
    value: Option<T>,
}

impl<T> AssetSlot<T> {
    pub(crate) fn new(kind: SlotKind) -> Self {
        Self {
            kind,
            generation: 0,
            revision: 0,
            value: None,
        }
    }

    /// Identity of the current value, or `None` when the slot is empty.
    pub(crate) fn revision(&self) -> Option<u64> {
        self.value.as_ref().map(|_| self.revision)
    }

    pub(crate) fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.value.is_some()
    }

    /// Start a load. Any ticket issued earlier becomes stale; the current value stays visible
    /// until the new load completes.
    pub(crate) fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            slot: self.kind,
            generation: self.generation,
        }
    }

    pub(crate) fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.slot == self.kind && ticket.generation == self.generation
    }

    /// Redeem `ticket`. `Some(value)` stores it, `None` marks a failed load and clears the slot.
    pub(crate) fn complete(&mut self, ticket: LoadTicket, value: Option<T>) -> SlotUpdate {
        if !self.is_current(ticket) {
            return SlotUpdate::Stale;
        }
        self.revision += 1;
        match value {
            Some(v) => {
                self.value = Some(v);
                SlotUpdate::Applied
            }
            None => {
                self.value = None;
                SlotUpdate::Failed
            }
        }
    }

    /// Store `value` immediately, superseding any in-flight load.
    pub(crate) fn set(&mut self, value: T) {
        self.generation += 1;
        self.revision += 1;
        self.value = Some(value);
    }

    /// Drop the value and supersede any in-flight load.
    pub(crate) fn clear(&mut self) {
        self.generation += 1;
        if self.value.take().is_some() {
            self.revision += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/slot.rs"]
mod tests;
