//! Mention detection against a channel's live membership.

use std::collections::HashSet;

use slircbot_proto::nick::is_nick_char;

use crate::text::fold;

/// Nicks from `members` that appear as words in `text`.
///
/// Words are maximal runs of nick characters. Each word is folded and kept
/// if it is a member; the result is in order of first appearance with no
/// repeats. `members` must already hold folded nicks.
pub fn resolve(members: &HashSet<String>, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split(|c: char| !is_nick_char(c))
        .filter(|word| !word.is_empty())
        .map(fold)
        .filter(|word| members.contains(word))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(nicks: &[&str]) -> HashSet<String> {
        nicks.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn test_resolve_basic() {
        let m = members(&["alice", "bob"]);
        assert_eq!(resolve(&m, "hey alice, ignore carol"), vec!["alice"]);
    }

    #[test]
    fn test_resolve_order_and_dedup() {
        let m = members(&["alice", "bob"]);
        assert_eq!(
            resolve(&m, "Bob: ask ALICE or alice or bob"),
            vec!["bob", "alice"]
        );
    }

    #[test]
    fn test_resolve_special_chars() {
        let m = members(&["[away]", "x|y", "d`o_t^"]);
        assert_eq!(
            resolve(&m, "<[Away]> ping X|Y and d`o_t^!"),
            vec!["[away]", "x|y", "d`o_t^"]
        );
    }

    #[test]
    fn test_resolve_hyphen_splits() {
        let m = members(&["alice", "alice-bob"]);
        assert_eq!(resolve(&m, "alice-bob"), vec!["alice"]);
    }

    #[test]
    fn test_resolve_empty() {
        assert!(resolve(&members(&[]), "alice bob").is_empty());
        assert!(resolve(&members(&["alice"]), "").is_empty());
        assert!(resolve(&members(&["alice"]), " ,;: ").is_empty());
    }
}
