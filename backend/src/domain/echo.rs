//! Echo reply used by the WebSocket server.

use crate::domain::ports::MessageResponder;

/// Prefix prepended to every echoed frame.
pub const ECHO_PREFIX: &str = "Echo: ";

/// Replies with the inbound text, verbatim, after [`ECHO_PREFIX`].
///
/// # Examples
/// ```
/// use marketplace::domain::EchoResponder;
/// use marketplace::domain::ports::MessageResponder;
///
/// assert_eq!(EchoResponder.respond("ping"), "Echo: ping");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoResponder;

impl MessageResponder for EchoResponder {
    fn respond(&self, text: &str) -> String {
        format!("{ECHO_PREFIX}{text}")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ping", "Echo: ping")]
    #[case("", "Echo: ")]
    #[case("  spaced  ", "Echo:   spaced  ")]
    #[case("héllo ✓", "Echo: héllo ✓")]
    fn echoes_text_verbatim(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(EchoResponder.respond(input), expected);
    }

    #[test]
    fn large_text_is_not_truncated() {
        let input = "x".repeat(64 * 1024);
        let reply = EchoResponder.respond(&input);

        assert_eq!(reply.len(), ECHO_PREFIX.len() + input.len());
        assert!(reply.ends_with(&input));
    }
}
