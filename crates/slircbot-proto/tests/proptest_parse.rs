//! Property-based tests for IRC message parsing.
//!
//! 1. Parsing never panics on arbitrary input
//! 2. Outgoing PRIVMSGs re-parse to the same target and text
//! 3. Serialized output is always exactly one line

use proptest::prelude::*;
use slircbot_proto::{Message, Prefix};

fn nickname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z\\[\\]\\\\^_`{|}][a-zA-Z0-9\\-\\[\\]\\\\^_`{|}]{0,8}")
        .expect("valid regex")
}

fn channel_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[#&][a-zA-Z0-9_\\-]{1,49}").expect("valid regex")
}

/// Message text that doesn't contain CR/LF (which would break IRC protocol)
fn message_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\r\n\0]{0,400}").expect("valid regex")
}

proptest! {
    #[test]
    fn parse_never_panics(line in ".{0,600}") {
        let _ = line.parse::<Message>();
    }

    #[test]
    fn privmsg_reparses(target in channel_strategy(), text in message_text_strategy()) {
        let serialized = Message::privmsg(target.clone(), text.clone()).to_string();
        let parsed: Message = serialized.parse().expect("serialized PRIVMSG should parse");

        prop_assert_eq!(parsed.command.as_str(), "PRIVMSG");
        prop_assert_eq!(parsed.param(0), Some(target.as_str()));
        prop_assert_eq!(parsed.param(1), Some(text.as_str()));
    }

    #[test]
    fn serialized_is_one_line(nick in nickname_strategy(), text in ".{0,200}") {
        let msg = Message::notice(nick, text).with_prefix(Prefix::new_from_str("bot!b@host"));
        let serialized = msg.to_string();

        prop_assert!(serialized.ends_with("\r\n"));
        let body = &serialized[..serialized.len() - 2];
        prop_assert!(!body.contains('\r') && !body.contains('\n'));
    }
}
