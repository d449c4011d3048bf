//! Case-insensitive command table.
//!
//! Every name maps to exactly one [`CommandEntry`]: a direct responder or a
//! synonym group. Both live in one table, so a name can never be both.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::{Request, Responder};
use crate::text::fold;

/// What a command name is bound to.
#[derive(Clone)]
pub enum CommandEntry {
    /// Invoke this responder.
    Direct(Arc<dyn Responder>),
    /// Invoke each of these direct commands in order.
    Synonym(Vec<String>),
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct(_) => f.write_str("Direct(..)"),
            Self::Synonym(targets) => f.debug_tuple("Synonym").field(targets).finish(),
        }
    }
}

/// Result of looking up a command name.
#[derive(Clone, Copy)]
pub enum Resolution<'a> {
    NotFound,
    Direct(&'a Arc<dyn Responder>),
    Synonym(&'a [String]),
}

/// Registry of command responders and synonym groups.
#[derive(Debug, Default, Clone)]
pub struct CommandRegistry {
    entries: HashMap<String, CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to a responder, replacing whatever was there.
    pub fn register_direct(&mut self, name: &str, responder: Arc<dyn Responder>) {
        self.entries
            .insert(fold(name), CommandEntry::Direct(responder));
    }

    /// Bind `name` to a synonym group, replacing whatever was there.
    ///
    /// Targets are folded on the way in.
    pub fn register_synonym<I, S>(&mut self, name: &str, targets: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let targets = targets.into_iter().map(|t| fold(t.as_ref())).collect();
        self.entries.insert(fold(name), CommandEntry::Synonym(targets));
    }

    /// Remove `name`, returning its entry.
    pub fn remove(&mut self, name: &str) -> Option<CommandEntry> {
        self.entries.remove(&fold(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&fold(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up a command name.
    pub fn resolve(&self, name: &str) -> Resolution<'_> {
        match self.entries.get(&fold(name)) {
            None => Resolution::NotFound,
            Some(CommandEntry::Direct(responder)) => Resolution::Direct(responder),
            Some(CommandEntry::Synonym(targets)) => Resolution::Synonym(targets),
        }
    }

    /// Invoke `name` and collect its non-empty replies.
    ///
    /// A synonym expands exactly one level: each target must be a direct
    /// command, anything else (missing, or another synonym) is skipped.
    pub fn invoke(&self, name: &str, request: &Request<'_>) -> Vec<String> {
        match self.resolve(name) {
            Resolution::NotFound => Vec::new(),
            Resolution::Direct(responder) => non_empty(responder.respond(request)),
            Resolution::Synonym(targets) => targets
                .iter()
                .filter_map(|target| match self.resolve(target) {
                    Resolution::Direct(responder) => Some(responder.respond(request)),
                    _ => {
                        debug!(synonym = %name, target = %target, "Skipping non-direct synonym target");
                        None
                    }
                })
                .filter(|reply| !reply.is_empty())
                .collect(),
        }
    }
}

fn non_empty(reply: String) -> Vec<String> {
    if reply.is_empty() {
        Vec::new()
    } else {
        vec![reply]
    }
}
