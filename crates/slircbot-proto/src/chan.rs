//! Channel name utilities.
//!
//! # Reference
//! - RFC 2812 Section 1.3: Channel names

/// Extension trait for checking if a string is a valid IRC channel name.
pub trait ChannelExt {
    /// Check if this string is a valid IRC channel name.
    ///
    /// Valid channel names:
    /// - Start with '#', '&', '+', or '!'
    /// - Do not contain space, comma, BEL (0x07), or NUL
    /// - Are at most 50 characters long
    fn is_channel_name(&self) -> bool;
}

impl ChannelExt for &str {
    fn is_channel_name(&self) -> bool {
        let mut chars = self.chars();

        match chars.next() {
            Some('#' | '&' | '+' | '!') => {}
            _ => return false,
        }

        if self.chars().count() > 50 {
            return false;
        }

        chars.all(|c| c != ' ' && c != ',' && !c.is_control())
    }
}

impl ChannelExt for String {
    fn is_channel_name(&self) -> bool {
        self.as_str().is_channel_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_channels() {
        assert!("#rust".is_channel_name());
        assert!("&local".is_channel_name());
        assert!("+modeless".is_channel_name());
        assert!("!12345safe".is_channel_name());
    }

    #[test]
    fn test_invalid_channels() {
        assert!(!"".is_channel_name());
        assert!(!"rust".is_channel_name());
        assert!(!"#has space".is_channel_name());
        assert!(!"#a,b".is_channel_name());
        assert!(!"#bell\x07".is_channel_name());
        assert!(!format!("#{}", "x".repeat(50)).is_channel_name());
    }
}
