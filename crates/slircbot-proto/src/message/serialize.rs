use std::fmt::{self, Display, Formatter};

use super::Message;

/// Everything before the first line break.
fn first_line(s: &str) -> &str {
    s.find(['\r', '\n']).map_or(s, |end| &s[..end])
}

fn needs_colon(param: &str) -> bool {
    param.is_empty() || param.contains(' ') || param.starts_with(':')
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(ref prefix) = self.prefix {
            write!(f, ":{} ", prefix)?;
        }

        write!(f, "{}", self.command)?;

        if let Some((last, middle)) = self.params.split_last() {
            for param in middle {
                write!(f, " {}", first_line(param))?;
            }
            let last = first_line(last);
            if needs_colon(last) {
                write!(f, " :{}", last)?;
            } else {
                write!(f, " {}", last)?;
            }
        }

        write!(f, "\r\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::Prefix;

    #[test]
    fn test_serialize_privmsg() {
        assert_eq!(
            Message::privmsg("#rust", "hello world").to_string(),
            "PRIVMSG #rust :hello world\r\n"
        );
    }

    #[test]
    fn test_serialize_single_word_has_no_colon() {
        assert_eq!(Message::join("#rust").to_string(), "JOIN #rust\r\n");
        assert_eq!(Message::pong("token").to_string(), "PONG token\r\n");
    }

    #[test]
    fn test_serialize_user() {
        assert_eq!(
            Message::user("bot", "Command Bot").to_string(),
            "USER bot 0 * :Command Bot\r\n"
        );
    }

    #[test]
    fn test_serialize_part_without_reason() {
        assert_eq!(Message::part("#a", None).to_string(), "PART #a\r\n");
        assert_eq!(
            Message::part("#a", Some("bye now")).to_string(),
            "PART #a :bye now\r\n"
        );
    }

    #[test]
    fn test_serialize_cuts_line_breaks() {
        assert_eq!(
            Message::privmsg("bob", "first\r\nQUIT :injected").to_string(),
            "PRIVMSG bob first\r\n"
        );
    }

    #[test]
    fn test_serialize_with_prefix() {
        let msg = Message::notice("bob", "hi there").with_prefix(Prefix::new_from_str("bot!b@h"));
        assert_eq!(msg.to_string(), ":bot!b@h NOTICE bob :hi there\r\n");
    }

    #[test]
    fn test_serialize_empty_and_colon_params() {
        assert_eq!(Message::quit("").to_string(), "QUIT :\r\n");
        assert_eq!(
            Message::privmsg("#a", ":)").to_string(),
            "PRIVMSG #a ::)\r\n"
        );
    }
}
