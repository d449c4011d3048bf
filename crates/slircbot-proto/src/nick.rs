//! Nickname character classes.
//!
//! # Reference
//! - RFC 2812 Section 2.3.1: Message format (nickname definition)

/// Check if a character is a "special" character allowed in nicknames.
///
/// Per RFC 2812: `[ ] \ ` ^ _ { | }`
#[inline]
pub fn is_special(c: char) -> bool {
    matches!(c, '[' | ']' | '\\' | '`' | '_' | '^' | '{' | '|' | '}')
}

/// Letters, digits and specials.
///
/// Hyphen is not included, so `alice-bob` scans as two words.
#[inline]
pub fn is_nick_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_special(c)
}

/// Channel status symbols a server may put in front of a nick in `RPL_NAMREPLY`.
pub const MEMBERSHIP_PREFIXES: &[char] = &['~', '&', '@', '%', '+'];

/// Strip leading membership prefixes (`@op`, `+voice`, `@+both`) from a NAMES entry.
pub fn strip_membership_prefix(entry: &str) -> &str {
    entry.trim_start_matches(MEMBERSHIP_PREFIXES)
}
