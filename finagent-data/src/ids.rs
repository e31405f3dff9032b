//! Identifier sources for new applications.

use chrono::Utc;

use crate::applications::ApplicationId;

/// Source of fresh application ids
///
/// The registry asks for a new id each time an application is added.
/// Implementations should never hand out the same id twice.
pub trait IdGenerator {
    fn next_id(&mut self) -> ApplicationId;
}

/// Ids derived from the wall clock (Unix milliseconds)
///
/// Two calls within the same millisecond (or a clock that steps backwards)
/// still produce strictly increasing ids: the previous id plus one wins
/// whenever it is larger than the current timestamp.
#[derive(Clone, Debug, Default)]
pub struct ClockIds {
    last: Option<ApplicationId>,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_from(&mut self, now_millis: i64) -> ApplicationId {
        let now = u64::try_from(now_millis).unwrap_or(0);
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        id
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> ApplicationId {
        self.next_from(Utc::now().timestamp_millis())
    }
}

/// Deterministic counter, handy for tests and reproducible sessions
#[derive(Clone, Debug)]
pub struct SequentialIds {
    next: ApplicationId,
}

impl SequentialIds {
    pub fn starting_at(first: ApplicationId) -> Self {
        Self { next: first }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ApplicationId {
        let id = self.next;
        self.next += 1;
        id
    }
}
