//! Single-slot, single-use authentication for privileged commands.
//!
//! ```text
//! Unauthenticated --authenticate(ok)--> Authenticated(user) --consume(user)--> Unauthenticated
//! ```
//!
//! A successful `authenticate` overwrites any outstanding token; a failed
//! one leaves it alone.

use parking_lot::Mutex;
use subtle::ConstantTimeEq;
use tracing::{debug, info};

use crate::text::{fold, supertrim};

/// Holds the admin password and at most one outstanding token.
pub struct AuthGate {
    password: String,
    token: Mutex<Option<String>>,
}

impl AuthGate {
    /// Create a gate; the password is supertrimmed once here.
    pub fn new(password: &str) -> Self {
        Self {
            password: supertrim(password).to_owned(),
            token: Mutex::new(None),
        }
    }

    /// Check `supplied` and, on a match, make `user` the token holder.
    pub fn authenticate(&self, user: &str, supplied: &str) -> bool {
        let matches: bool = self
            .password
            .as_bytes()
            .ct_eq(supplied.as_bytes())
            .into();

        if matches {
            let user = fold(user);
            info!(user = %user, "Authenticated for one privileged command");
            *self.token.lock() = Some(user);
        } else {
            debug!(user = %user, "Authentication rejected");
        }
        matches
    }

    /// Spend the token if `user` holds it.
    pub fn consume(&self, user: &str) -> bool {
        let user = fold(user);
        let mut token = self.token.lock();
        if token.as_deref() == Some(user.as_str()) {
            *token = None;
            true
        } else {
            false
        }
    }

    /// Current token holder, if any.
    pub fn holder(&self) -> Option<String> {
        self.token.lock().clone()
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("holder", &self.holder())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_single_use() {
        let gate = AuthGate::new("secret");
        assert!(gate.authenticate("Alice", "secret"));
        assert!(!gate.authenticate("Bob", "wrong"));
        assert!(gate.consume("Alice"));
        assert!(!gate.consume("Alice"));
    }

    #[test]
    fn test_consume_is_case_insensitive() {
        let gate = AuthGate::new("secret");
        assert!(gate.authenticate("ALICE", "secret"));
        assert_eq!(gate.holder().as_deref(), Some("alice"));
        assert!(gate.consume("aLiCe"));
    }

    #[test]
    fn test_new_auth_overwrites_old() {
        let gate = AuthGate::new("secret");
        assert!(gate.authenticate("alice", "secret"));
        assert!(gate.authenticate("bob", "secret"));
        assert!(!gate.consume("alice"));
        assert!(gate.consume("bob"));
    }

    #[test]
    fn test_wrong_user_does_not_spend_token() {
        let gate = AuthGate::new("secret");
        assert!(gate.authenticate("alice", "secret"));
        assert!(!gate.consume("mallory"));
        assert!(gate.consume("alice"));
    }

    #[test]
    fn test_password_trimmed_at_construction() {
        let gate = AuthGate::new("  secret\t\n");
        assert!(gate.authenticate("alice", "secret"));
        assert!(!gate.authenticate("alice", " secret"));
        assert!(!gate.authenticate("alice", "secre"));
    }

    #[test]
    fn test_nothing_to_consume_initially() {
        let gate = AuthGate::new("secret");
        assert!(!gate.consume("alice"));
        assert_eq!(gate.holder(), None);
    }
}
