//! Numeric replies the client reacts to.
//!
//! Only the handful a command bot needs; everything else is ignored.

/// `001` - registration complete.
pub const RPL_WELCOME: &str = "001";
/// `353` - one chunk of a NAMES list.
pub const RPL_NAMREPLY: &str = "353";
/// `366` - end of a NAMES list.
pub const RPL_ENDOFNAMES: &str = "366";
/// `432` - nickname rejected by the server's grammar.
pub const ERR_ERRONEUSNICKNAME: &str = "432";
/// `433` - nickname already taken.
pub const ERR_NICKNAMEINUSE: &str = "433";
