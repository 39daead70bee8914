//! Sessions that already received an injected summary.

use std::collections::HashSet;

/// Caller-owned record of sessions that were injected into.
///
/// One cache per process gives "at most once per session per process".
#[derive(Clone, Debug, Default)]
pub struct InjectionCache {
    sessions: HashSet<String>,
}

impl InjectionCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `session_id` was already injected.
    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains(session_id)
    }

    /// Record an injection. Returns `false` if the session was already marked.
    pub fn mark(&mut self, session_id: &str) -> bool {
        self.sessions.insert(session_id.to_string())
    }

    /// Forget every session.
    pub fn reset(&mut self) {
        self.sessions.clear();
    }

    /// Number of marked sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// True when no session is marked.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
