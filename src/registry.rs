//! In-memory shortcut registry.
//!
//! Entries are kept sorted by `(group, target)` after every mutation so that
//! [`Registry::index_of`] can binary search. A character is unique within its
//! group only; the same character can trigger different targets in different
//! groups.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Result, ShortkeysError};
use crate::types::{Entry, FALLBACK_POOL, RESERVED_SHORTCUT};

#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Entry>,
    dirty: bool,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from previously persisted entries.
    ///
    /// The result is sorted, validated and clean.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        let mut registry = Registry {
            entries,
            dirty: false,
        };
        registry.sort();
        registry.validate()?;
        registry.check_unique_targets()?;
        Ok(registry)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the registry holds changes that were never persisted.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Target mapped to `short` in `group`, if any.
    pub fn resolve(&self, short: char, group: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.short == short && e.group == group)
            .map(|e| e.target.as_str())
    }

    /// Position of the entry for `(target, group)`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the entries are not sorted. Every mutator
    /// re-sorts before returning, so this only fires on a registry bug.
    pub fn index_of(&self, target: &str, group: &str) -> Option<usize> {
        debug_assert!(
            self.entries
                .is_sorted_by(|a, b| a.cmp_key(b) != std::cmp::Ordering::Greater),
            "registry entries must be sorted by (group, target): {:?}",
            self.entries
        );
        self.entries
            .binary_search_by(|e| e.cmp_probe(target, group))
            .ok()
    }

    /// Character currently assigned to `(target, group)`.
    pub fn shortcut_for(&self, target: &str, group: &str) -> Option<char> {
        self.index_of(target, group).map(|i| self.entries[i].short)
    }

    /// True if at least one entry carries `group`.
    pub fn has_group(&self, group: &str) -> bool {
        self.entries.iter().any(|e| e.group == group)
    }

    /// Distinct group labels in storage order.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = self.entries.iter().map(|e| e.group.as_str()).collect();
        groups.dedup();
        groups
    }

    /// Entries of a single group, in target order.
    pub fn entries_in<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |e| e.group == group)
    }

    /// Give `target` a shortcut, preferring letters of its own name.
    ///
    /// Candidates are tried in order: the target's characters lowercased, the
    /// same characters uppercased, then [`FALLBACK_POOL`]. Already assigned
    /// targets keep their character and leave the registry untouched.
    pub fn auto_assign(&mut self, target: &str, group: &str) -> Result<char> {
        if let Some(short) = self.shortcut_for(target, group) {
            return Ok(short);
        }

        let lower = target.chars().flat_map(char::to_lowercase);
        let upper = target.chars().flat_map(char::to_uppercase);
        let assigned = self
            .try_assign(lower, target, group)
            .or_else(|| self.try_assign(upper, target, group))
            .or_else(|| self.try_assign(FALLBACK_POOL.chars(), target, group));

        match assigned {
            Some(short) => {
                self.dirty = true;
                self.sort();
                debug!(%short, mapping = target, group, "auto-assigned shortcut");
                Ok(short)
            }
            None => Err(ShortkeysError::Exhausted {
                target: target.to_string(),
                group: group.to_string(),
            }),
        }
    }

    /// Give `target` the shortcut `short` if it is free in `group`.
    ///
    /// A taken (or reserved) character falls back to [`Registry::auto_assign`]
    /// instead of failing. Already assigned targets are left alone.
    pub fn assign(&mut self, short: char, target: &str, group: &str) -> Result<char> {
        if let Some(existing) = self.shortcut_for(target, group) {
            return Ok(existing);
        }
        if short == RESERVED_SHORTCUT || self.resolve(short, group).is_some() {
            debug!(
                %short,
                mapping = target,
                group,
                "shortcut unavailable, falling back to auto-assign"
            );
            return self.auto_assign(target, group);
        }

        self.entries.push(Entry::new(short, target, group));
        self.dirty = true;
        self.sort();
        Ok(short)
    }

    /// Check that no character maps to two targets within one group.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashMap<(char, &str), &str> = HashMap::new();
        for entry in &self.entries {
            if let Some(first) = seen.insert((entry.short, entry.group.as_str()), &entry.target) {
                return Err(ShortkeysError::DuplicateShortcut {
                    short: entry.short,
                    group: entry.group.clone(),
                    first: first.to_string(),
                    second: entry.target.clone(),
                });
            }
        }
        Ok(())
    }

    /// Reject a `(target, group)` pair that appears more than once.
    ///
    /// Requires sorted entries, so repeats are neighbours.
    fn check_unique_targets(&self) -> Result<()> {
        for pair in self.entries.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.group == next.group && prev.target == next.target {
                return Err(ShortkeysError::DuplicateTarget {
                    target: next.target.clone(),
                    group: next.group.clone(),
                    first: prev.short,
                    second: next.short,
                });
            }
        }
        Ok(())
    }

    /// Append `(candidate, target, group)` for the first free candidate.
    ///
    /// Leaves ordering to the caller.
    fn try_assign(
        &mut self,
        candidates: impl IntoIterator<Item = char>,
        target: &str,
        group: &str,
    ) -> Option<char> {
        let short = candidates
            .into_iter()
            .filter(|&c| c != RESERVED_SHORTCUT)
            .find(|&c| self.resolve(c, group).is_none())?;
        self.entries.push(Entry::new(short, target, group));
        Some(short)
    }

    fn sort(&mut self) {
        self.entries.sort_by(Entry::cmp_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_is_group_scoped() {
        let mut keys = Registry::new();
        keys.auto_assign("a", "g1").unwrap();
        keys.auto_assign("b", "g1").unwrap();
        keys.auto_assign("c", "g2").unwrap();
        keys.auto_assign("d", "g2").unwrap();

        assert!(keys.index_of("a", "g1").is_some());
        assert!(keys.index_of("b", "g1").is_some());
        assert!(keys.index_of("c", "g1").is_none());
        assert!(keys.index_of("d", "g1").is_none());

        assert!(keys.index_of("a", "g2").is_none());
        assert!(keys.index_of("b", "g2").is_none());
        assert!(keys.index_of("c", "g2").is_some());
        assert!(keys.index_of("d", "g2").is_some());

        for target in ["a", "b", "c", "d"] {
            assert!(keys.index_of(target, "").is_none());
        }

        assert_eq!(keys.resolve('a', "g1"), Some("a"));
        assert_eq!(keys.resolve('a', "g2"), None);
        assert_eq!(keys.resolve('a', ""), None);
    }

    #[test]
    fn test_best_effort_assign() {
        let mut keys = Registry::new();
        keys.auto_assign("a", "g1").unwrap();
        keys.auto_assign("c", "g2").unwrap();

        // 'a' is taken in g1, so "e" gets its own letter instead.
        assert_eq!(keys.assign('a', "e", "g1").unwrap(), 'e');
        assert_eq!(keys.resolve('e', "g1"), Some("e"));

        // 'a' is free in g2.
        assert_eq!(keys.assign('a', "f", "g2").unwrap(), 'a');
        assert_eq!(keys.resolve('a', "g2"), Some("f"));

        keys.validate().unwrap();
    }

    #[test]
    fn test_auto_assign_prefers_target_letters() {
        let mut keys = Registry::new();
        assert_eq!(keys.auto_assign("apple", "g1").unwrap(), 'a');
        assert_eq!(keys.auto_assign("avocado", "g1").unwrap(), 'v');
        assert_eq!(keys.auto_assign("Apricot", "g1").unwrap(), 'p');
    }

    #[test]
    fn test_auto_assign_falls_to_uppercase_then_pool() {
        let mut keys = Registry::new();
        keys.assign('a', "first", "").unwrap();
        assert_eq!(keys.auto_assign("aa", "").unwrap(), 'A');
        assert_eq!(keys.auto_assign("a", "").unwrap(), '0');
        assert_eq!(keys.auto_assign("", "").unwrap(), '1');
    }

    #[test]
    fn test_auto_assign_skips_space() {
        let mut keys = Registry::new();
        assert_eq!(keys.auto_assign(" x", "").unwrap(), 'x');
    }

    #[test]
    fn test_auto_assign_is_idempotent() {
        let mut keys = Registry::new();
        let first = keys.auto_assign("save", "file").unwrap();
        assert!(keys.is_dirty());

        keys.mark_clean();
        let second = keys.auto_assign("save", "file").unwrap();
        assert_eq!(first, second);
        assert!(!keys.is_dirty());
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_assign_existing_target_is_noop() {
        let mut keys = Registry::new();
        keys.assign('q', "quit", "").unwrap();
        keys.mark_clean();

        assert_eq!(keys.assign('x', "quit", "").unwrap(), 'q');
        assert!(!keys.is_dirty());
        assert_eq!(keys.resolve('x', ""), None);
    }

    #[test]
    fn test_assign_taken_char_falls_back() {
        let mut keys = Registry::new();
        keys.auto_assign("apple", "g1").unwrap();
        let short = keys.assign('a', "exotic", "g1").unwrap();
        assert_ne!(short, 'a');
        assert_eq!(short, 'e');
        assert_eq!(keys.resolve('a', "g1"), Some("apple"));
        assert_eq!(keys.resolve(short, "g1"), Some("exotic"));
    }

    #[test]
    fn test_assign_space_falls_back() {
        let mut keys = Registry::new();
        assert_eq!(keys.assign(' ', "run", "").unwrap(), 'r');
    }

    #[test]
    fn test_exhaustion_is_an_error() {
        let mut keys = Registry::new();
        let pool_size = FALLBACK_POOL.chars().count();
        for i in 0..pool_size {
            keys.auto_assign(&format!("{i:03}"), "").unwrap();
        }
        keys.mark_clean();

        let err = keys.auto_assign("999", "").unwrap_err();
        assert!(matches!(err, ShortkeysError::Exhausted { ref target, .. } if target == "999"));
        assert_eq!(keys.len(), pool_size);
        assert!(!keys.is_dirty());
    }

    #[test]
    fn test_entries_stay_sorted() {
        let mut keys = Registry::new();
        keys.auto_assign("zoom", "view").unwrap();
        keys.auto_assign("open", "file").unwrap();
        keys.auto_assign("close", "file").unwrap();
        keys.auto_assign("help", "").unwrap();

        let order: Vec<(&str, &str)> = keys
            .entries()
            .iter()
            .map(|e| (e.group.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![("", "help"), ("file", "close"), ("file", "open"), ("view", "zoom")]
        );
        assert_eq!(keys.groups(), vec!["", "file", "view"]);
    }

    #[test]
    fn test_from_entries_sorts_and_validates() {
        let keys = Registry::from_entries(vec![
            Entry::new('o', "open", "file"),
            Entry::new('c', "close", "file"),
        ])
        .unwrap();
        assert_eq!(keys.index_of("close", "file"), Some(0));
        assert!(!keys.is_dirty());

        let err = Registry::from_entries(vec![
            Entry::new('x', "exit", "menu"),
            Entry::new('x', "export", "menu"),
        ])
        .unwrap_err();
        assert!(matches!(err, ShortkeysError::DuplicateShortcut { short: 'x', .. }));
    }

    #[test]
    fn test_from_entries_rejects_target_with_two_shortcuts() {
        let err = Registry::from_entries(vec![
            Entry::new('a', "open", ""),
            Entry::new('h', "help", ""),
            Entry::new('b', "open", ""),
        ])
        .unwrap_err();
        match err {
            ShortkeysError::DuplicateTarget {
                target,
                group,
                first,
                second,
            } => {
                assert_eq!(target, "open");
                assert_eq!(group, "");
                assert_eq!((first, second), ('a', 'b'));
            }
            other => panic!("expected DuplicateTarget, got {other:?}"),
        }

        // The same target in two groups is fine.
        Registry::from_entries(vec![
            Entry::new('a', "open", ""),
            Entry::new('b', "open", "file"),
        ])
        .unwrap();
    }

    #[test]
    fn test_validate_allows_reuse_across_groups() {
        let keys = Registry::from_entries(vec![
            Entry::new('x', "exit", "menu"),
            Entry::new('x', "export", "file"),
            Entry::new('x', "expand", ""),
        ])
        .unwrap();
        assert!(keys.validate().is_ok());
    }

    #[test]
    fn test_has_group() {
        let mut keys = Registry::new();
        assert!(!keys.has_group(""));
        keys.auto_assign("help", "").unwrap();
        assert!(keys.has_group(""));
        assert!(!keys.has_group("file"));
    }

    #[test]
    fn test_entries_in_group() {
        let mut keys = Registry::new();
        keys.auto_assign("open", "file").unwrap();
        keys.auto_assign("help", "").unwrap();
        keys.auto_assign("close", "file").unwrap();

        let targets: Vec<&str> = keys.entries_in("file").map(|e| e.target.as_str()).collect();
        assert_eq!(targets, vec!["close", "open"]);
    }
}
