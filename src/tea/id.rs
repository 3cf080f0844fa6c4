//! Identifier assignment for new teas.

use crate::types::{Tea, TeaId};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of fresh tea identifiers. Must never repeat a value.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> TeaId;
}

/// Reuse the id of an existing tea, otherwise draw a fresh one.
pub fn assign_id(existing: Option<&Tea>, generator: &dyn IdGenerator) -> TeaId {
    match existing {
        Some(tea) => tea.id,
        None => generator.next_id(),
    }
}

type Clock = Box<dyn Fn() -> TeaId + Send + Sync>;

fn unix_millis() -> TeaId {
    TeaId::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Millisecond wall-clock ids, bumped past the last issued id when the clock
/// has not advanced (or went backwards).
pub struct ClockIdGenerator {
    clock: Clock,
    last: Mutex<Option<TeaId>>,
}

impl ClockIdGenerator {
    pub fn new() -> Self {
        Self::with_clock(unix_millis)
    }

    pub fn with_clock(clock: impl Fn() -> TeaId + Send + Sync + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: Mutex::new(None),
        }
    }
}

impl Default for ClockIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for ClockIdGenerator {
    fn next_id(&self) -> TeaId {
        let now = (self.clock)();
        let mut last = self.last.lock();
        let id = match *last {
            Some(prev) if now <= prev => prev.saturating_add(1),
            _ => now,
        };
        *last = Some(id);
        id
    }
}

/// Counter-based ids starting at a fixed value.
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn starting_at(first: TeaId) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> TeaId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
