//! Who is in which channel, as far as the bot has been told.
//!
//! Channel names and nicks are stored folded.

use std::collections::{HashMap, HashSet};

use slircbot_proto::nick::strip_membership_prefix;

use crate::text::{fold, supertrim};

/// Per-channel sets of folded nicks.
#[derive(Debug, Default, Clone)]
pub struct Membership {
    channels: HashMap<String, HashSet<String>>,
}

impl Membership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a channel's set with a complete NAMES list.
    ///
    /// Leading status symbols (`~&@%+`) are stripped from each entry.
    pub fn replace<I, S>(&mut self, channel: &str, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = names
            .into_iter()
            .map(|n| fold(strip_membership_prefix(supertrim(n.as_ref()))))
            .filter(|n| !n.is_empty())
            .collect();
        self.channels.insert(fold(channel), set);
    }

    pub fn join(&mut self, channel: &str, nick: &str) {
        self.channels
            .entry(fold(channel))
            .or_default()
            .insert(fold(nick));
    }

    pub fn part(&mut self, channel: &str, nick: &str) {
        if let Some(set) = self.channels.get_mut(&fold(channel)) {
            set.remove(&fold(nick));
        }
    }

    pub fn remove_channel(&mut self, channel: &str) {
        self.channels.remove(&fold(channel));
    }

    /// Remove a nick from every channel.
    pub fn quit(&mut self, nick: &str) {
        let nick = fold(nick);
        for set in self.channels.values_mut() {
            set.remove(&nick);
        }
    }

    /// Apply a nick change in every channel the old nick was in.
    pub fn rename(&mut self, old: &str, new: &str) {
        let (old, new) = (fold(old), fold(new));
        for set in self.channels.values_mut() {
            if set.remove(&old) {
                set.insert(new.clone());
            }
        }
    }

    /// Members of a channel, or `None` if the bot knows nothing about it.
    pub fn members(&self, channel: &str) -> Option<&HashSet<String>> {
        self.channels.get(&fold(channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(m: &Membership, channel: &str) -> Vec<String> {
        let mut v: Vec<_> = m
            .members(channel)
            .map(|s| s.iter().cloned().collect())
            .unwrap_or_default();
        v.sort();
        v
    }

    #[test]
    fn test_replace_strips_status_and_folds() {
        let mut m = Membership::new();
        m.replace("#Rust", ["@Alice", "+bob", "~&Carol", ""]);
        assert_eq!(sorted(&m, "#rust"), vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_replace_discards_previous_list() {
        let mut m = Membership::new();
        m.replace("#a", ["alice", "bob"]);
        m.replace("#a", ["carol"]);
        assert_eq!(sorted(&m, "#a"), vec!["carol"]);
    }

    #[test]
    fn test_join_part() {
        let mut m = Membership::new();
        m.join("#a", "Alice");
        m.join("#a", "bob");
        m.part("#A", "ALICE");
        assert_eq!(sorted(&m, "#a"), vec!["bob"]);
        m.part("#unknown", "bob");
        assert!(m.members("#unknown").is_none());
    }

    #[test]
    fn test_quit_and_rename_span_channels() {
        let mut m = Membership::new();
        m.replace("#a", ["alice", "bob"]);
        m.replace("#b", ["alice", "carol"]);
        m.rename("Alice", "Alicia");
        assert_eq!(sorted(&m, "#a"), vec!["alicia", "bob"]);
        assert_eq!(sorted(&m, "#b"), vec!["alicia", "carol"]);
        m.quit("alicia");
        assert_eq!(sorted(&m, "#a"), vec!["bob"]);
        assert_eq!(sorted(&m, "#b"), vec!["carol"]);
    }

    #[test]
    fn test_rename_does_not_add_to_other_channels() {
        let mut m = Membership::new();
        m.replace("#a", ["alice"]);
        m.replace("#b", ["bob"]);
        m.rename("alice", "al");
        assert_eq!(sorted(&m, "#b"), vec!["bob"]);
    }

    #[test]
    fn test_remove_channel() {
        let mut m = Membership::new();
        m.replace("#a", ["alice"]);
        m.remove_channel("#A");
        assert!(m.members("#a").is_none());
    }
}
