//! Text normalization shared by every part of the dispatch pipeline.
//!
//! Two operations matter: [`fold`] for every key comparison (commands,
//! nicks, channels) and [`supertrim`] for every value taken from a user
//! or the configuration.

/// Whitespace or control: Unicode space separators (Zs, Zl, Zp) plus
/// every Cc character.
///
/// `char::is_whitespace` covers the separators and a few controls;
/// `char::is_control` covers the rest.
#[inline]
pub fn is_space_or_control(c: char) -> bool {
    c.is_whitespace() || c.is_control()
}

/// Case-fold a key.
///
/// Uses the Unicode default lowercase mapping, which does not depend on the
/// process locale.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Trim whitespace and control characters from both ends.
pub fn supertrim(s: &str) -> &str {
    s.trim_matches(is_space_or_control)
}

/// Split off the first word.
///
/// The head runs up to the first whitespace-or-control character; the rest
/// starts after the whole run of them. Neither part is otherwise trimmed.
pub fn split_first_word(s: &str) -> (&str, &str) {
    match s.find(is_space_or_control) {
        Some(start) => {
            let rest = s[start..].trim_start_matches(is_space_or_control);
            (&s[..start], rest)
        }
        None => (s, ""),
    }
}

/// Build the `"a, b, c: "` prefix for a reply; empty when nobody was mentioned.
pub fn mention_prefix<S: AsRef<str>>(mentions: &[S]) -> String {
    if mentions.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = mentions.iter().map(AsRef::as_ref).collect();
    format!("{}: ", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_supertrim_wide_class() {
        assert_eq!(supertrim("  hello  "), "hello");
        assert_eq!(supertrim("\u{3000}\u{a0}hi\u{2028}\u{85}"), "hi");
        assert_eq!(supertrim("\x01\x02bold\x03\x7f"), "bold");
        assert_eq!(supertrim("in  side"), "in  side");
    }

    #[test]
    fn test_supertrim_degenerate() {
        assert_eq!(supertrim(""), "");
        assert_eq!(supertrim(" \t\r\n\u{2029}\0"), "");
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("FooBAR"), "foobar");
        assert_eq!(fold("İstanbul"), "i\u{307}stanbul");
        assert_eq!(fold("[Nick]"), "[nick]");
    }

    #[test]
    fn test_split_first_word() {
        assert_eq!(split_first_word("auth  secret pass"), ("auth", "secret pass"));
        assert_eq!(split_first_word("time"), ("time", ""));
        assert_eq!(split_first_word(""), ("", ""));
        assert_eq!(split_first_word("echo\u{3000}\x01x"), ("echo", "x"));
        assert_eq!(split_first_word("echo "), ("echo", ""));
    }

    #[test]
    fn test_mention_prefix() {
        assert_eq!(mention_prefix::<String>(&[]), "");
        assert_eq!(mention_prefix(&["a"]), "a: ");
        assert_eq!(mention_prefix(&["a", "b", "c"]), "a, b, c: ");
    }

    proptest! {
        #[test]
        fn supertrim_is_idempotent(s in any::<String>()) {
            let once = supertrim(&s);
            prop_assert_eq!(supertrim(once), once);
        }

        #[test]
        fn supertrim_leaves_no_edge_space(s in any::<String>()) {
            let t = supertrim(&s);
            prop_assert!(!t.starts_with(is_space_or_control));
            prop_assert!(!t.ends_with(is_space_or_control));
        }

        #[test]
        fn fold_is_idempotent(s in any::<String>()) {
            let once = fold(&s);
            prop_assert_eq!(fold(&once), once);
        }
    }
}
