//! Bookkeeping for script callbacks that must only ever fire once.

use bevy_ecs::prelude::Resource;
use hashbrown::HashSet;

/// Remembers which named callbacks have already run.
#[derive(Resource, Debug, Default, Clone)]
pub struct CallOnceRegistry {
    called: HashSet<String>,
}

impl CallOnceRegistry {
    /// Runs `callback` unless `key` has been used before.
    ///
    /// Returns `true` when the callback ran.
    pub fn call_once<F>(&mut self, key: &str, callback: F) -> bool
    where
        F: FnOnce(),
    {
        if self.called.contains(key) {
            return false;
        }
        self.called.insert(key.to_owned());
        callback();
        true
    }

    /// Whether `key` has already been used.
    #[must_use]
    pub fn was_called(&self, key: &str) -> bool {
        self.called.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn callback_runs_only_the_first_time() {
        let mut registry = CallOnceRegistry::default();
        let mut runs = 0;
        assert!(registry.call_once("reinforcements", || runs += 1));
        assert!(!registry.call_once("reinforcements", || runs += 1));
        assert_eq!(runs, 1);
        assert!(registry.was_called("reinforcements"));
    }

    #[rstest]
    fn keys_are_independent() {
        let mut registry = CallOnceRegistry::default();
        assert!(registry.call_once("a", || {}));
        assert!(registry.call_once("b", || {}));
        assert!(!registry.was_called("c"));
    }
}
