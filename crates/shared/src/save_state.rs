//! Save-state tracking for the form.
//!
//! Submissions are asynchronous and the user can keep typing while one is in
//! flight. Every edit bumps a version counter and every submission gets a
//! sequence number; a response only moves the state if its token still
//! matches, so a late "saved" never overwrites a fresher "unsaved".

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveState {
    /// Nothing edited since the page was (re)shown.
    #[default]
    Unmodified,
    Unsaved,
    Saving,
    Saved,
}

impl SaveState {
    /// State shown by the save indicator, which does not distinguish
    /// `Unmodified` from `Unsaved`.
    pub fn icon_state(self) -> SaveState {
        match self {
            SaveState::Unmodified => SaveState::Unsaved,
            other => other,
        }
    }

    /// Whether leaving the page should ask for confirmation.
    pub fn warns_on_unload(self) -> bool {
        matches!(self, SaveState::Unsaved | SaveState::Saving)
    }
}

/// Issued when a save starts; handed back when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveToken {
    edit_version: u64,
    submission: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveTracker {
    state: SaveState,
    edit_version: u64,
    submission: u64,
}

impl SaveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SaveState {
        self.state
    }

    pub fn mark_edited(&mut self) {
        self.edit_version += 1;
        self.state = SaveState::Unsaved;
    }

    pub fn begin_save(&mut self) -> SaveToken {
        self.submission += 1;
        self.state = SaveState::Saving;
        SaveToken {
            edit_version: self.edit_version,
            submission: self.submission,
        }
    }

    /// Whether `token` belongs to the most recent submission.
    pub fn is_current(&self, token: SaveToken) -> bool {
        token.submission == self.submission
    }

    /// Mark the draft saved if nothing changed since `token` was issued.
    ///
    /// Returns `false` when an edit or a newer submission got in first, in
    /// which case the state is left alone.
    pub fn save_succeeded(&mut self, token: SaveToken) -> bool {
        let fresh = self.is_current(token)
            && token.edit_version == self.edit_version
            && self.state == SaveState::Saving;
        if fresh {
            self.state = SaveState::Saved;
        }
        fresh
    }

    /// Revert to unsaved. A failure of a superseded submission is ignored.
    pub fn save_failed(&mut self, token: SaveToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.state = SaveState::Unsaved;
        true
    }

    /// Page came back from the back/forward cache.
    pub fn restore_from_history(&mut self) {
        self.state = SaveState::Unmodified;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_save_succeed() {
        let mut tracker = SaveTracker::new();
        assert_eq!(tracker.state(), SaveState::Unmodified);
        tracker.mark_edited();
        assert_eq!(tracker.state(), SaveState::Unsaved);
        let token = tracker.begin_save();
        assert_eq!(tracker.state(), SaveState::Saving);
        assert!(tracker.save_succeeded(token));
        assert_eq!(tracker.state(), SaveState::Saved);
    }

    #[test]
    fn edit_during_save_wins_over_success() {
        let mut tracker = SaveTracker::new();
        tracker.mark_edited();
        let token = tracker.begin_save();
        tracker.mark_edited();
        assert!(!tracker.save_succeeded(token));
        assert_eq!(tracker.state(), SaveState::Unsaved);
    }

    #[test]
    fn stale_failure_does_not_clobber_newer_save() {
        let mut tracker = SaveTracker::new();
        tracker.mark_edited();
        let first = tracker.begin_save();
        tracker.mark_edited();
        let second = tracker.begin_save();

        assert!(!tracker.save_failed(first));
        assert_eq!(tracker.state(), SaveState::Saving);
        assert!(tracker.save_succeeded(second));
        assert_eq!(tracker.state(), SaveState::Saved);
    }

    #[test]
    fn failure_reverts_to_unsaved() {
        let mut tracker = SaveTracker::new();
        let token = tracker.begin_save();
        assert!(tracker.save_failed(token));
        assert_eq!(tracker.state(), SaveState::Unsaved);
    }

    #[test]
    fn history_restore_resets_any_state() {
        for prepare in [
            (|_: &mut SaveTracker| {}) as fn(&mut SaveTracker),
            |t| t.mark_edited(),
            |t| {
                t.begin_save();
            },
            |t| {
                let token = t.begin_save();
                t.save_succeeded(token);
            },
        ] {
            let mut tracker = SaveTracker::new();
            prepare(&mut tracker);
            tracker.restore_from_history();
            assert_eq!(tracker.state(), SaveState::Unmodified);
        }
    }

    #[test]
    fn icon_and_unload_views_differ_for_unmodified() {
        assert_eq!(SaveState::Unmodified.icon_state(), SaveState::Unsaved);
        assert!(!SaveState::Unmodified.warns_on_unload());
        assert!(SaveState::Unsaved.warns_on_unload());
        assert!(SaveState::Saving.warns_on_unload());
        assert!(!SaveState::Saved.warns_on_unload());
    }
}
