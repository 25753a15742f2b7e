//! The live state of one level playthrough attempt.

use bevy::prelude::*;

use super::events::TransitionRequest;

/// Counters and level index of the running session.
///
/// Replaced wholesale on every entry into `LevelPhase::Initializing`, so the
/// counters only ever grow within one attempt.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct LevelSession {
    pub level: usize,
    pub coins: u32,
    pub has_key: bool,
}

impl LevelSession {
    pub fn new(level: usize) -> Self {
        Self {
            level,
            coins: 0,
            has_key: false,
        }
    }

    pub fn collect_coin(&mut self) {
        self.coins += 1;
    }

    pub fn collect_key(&mut self) {
        self.has_key = true;
    }
}

/// The level index the next session should load. Outlives sessions.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCursor {
    pub requested: usize,
}

impl LevelCursor {
    /// Point the cursor at the level a transition request leads to.
    pub fn retarget(&mut self, request: TransitionRequest, current: usize) {
        self.requested = match request {
            TransitionRequest::Restart => current,
            TransitionRequest::Advance => current + 1,
        };
    }

    /// The level index to load, wrapped into the available levels.
    pub fn select(&self, level_count: usize) -> Option<usize> {
        (level_count > 0).then(|| self.requested % level_count)
    }
}

/// Marker for everything owned by the current session, despawned at teardown.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SessionEntity;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn door_exits_wrap_around_level_count() {
        let mut cursor = LevelCursor::default();
        let mut visited = Vec::new();

        let mut current = cursor.select(2).unwrap();
        for _ in 0..3 {
            cursor.retarget(TransitionRequest::Advance, current);
            current = cursor.select(2).unwrap();
            visited.push(current);
        }

        assert_eq!(visited, vec![1, 0, 1]);
    }

    #[test]
    fn restart_keeps_level_index() {
        let mut cursor = LevelCursor { requested: 5 };
        let current = cursor.select(3).unwrap();

        cursor.retarget(TransitionRequest::Restart, current);

        assert_eq!(cursor.select(3), Some(2));
    }

    #[test]
    fn no_levels_selects_nothing() {
        assert_eq!(LevelCursor::default().select(0), None);
    }

    #[test]
    fn new_session_starts_empty() {
        let mut session = LevelSession::new(1);
        session.collect_coin();
        session.collect_key();
        assert_eq!((session.coins, session.has_key), (1, true));

        assert_eq!(LevelSession::new(1), LevelSession { level: 1, coins: 0, has_key: false });
    }
}
