use crate::color::Color;

/// One seat at a game: display name, bearer token, and the transport's
/// current connection handle.
///
/// Players are created on first join and never removed individually; only the
/// whole game is reaped. Reconnecting replaces `connection_id` and nothing
/// else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub token: String,
    pub connection_id: String,
    pub color: Color,
}
