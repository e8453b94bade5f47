//! Relay-server directive parsing.
//!
//! Operators hand relay (TURN) credentials to the player as a compact
//! directive string, one entry per server:
//!
//! ```text
//! turn:<username>:<credential>@<host>:<port>[,turn:...]
//! ```
//!
//! The directive is free text typed into a deployment environment, so the
//! parser is permissive: entries that do not match the grammar are dropped,
//! and a directive that parses to zero entries means "no custom relay
//! servers", never a failure.

use serde::{Deserialize, Serialize};

/// One parsed relay-server credential, ready for the session configuration
/// bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IceServerDirective {
    /// Relay URL in `turn:<host>:<port>` form.
    pub urls: String,
    pub username: String,
    pub credential: String,
}

/// Parse a comma-separated relay-server directive.
///
/// Output order preserves directive order among well-formed entries.
/// Malformed entries are skipped without error; empty input yields an empty
/// list.
pub fn parse_directive(directive: &str) -> Vec<IceServerDirective> {
    directive.split(',').filter_map(|entry| parse_entry(entry.trim())).collect()
}

/// Validate a single directive entry against the grammar.
///
/// Grammar: `turn:<username>:<credential>@<host>:<port>` where username,
/// credential, and host are non-empty tokens without whitespace and port is
/// a decimal integer. The username takes the longer prefix when the
/// credential block contains extra `:` separators.
fn parse_entry(entry: &str) -> Option<IceServerDirective> {
    let rest = entry.strip_prefix("turn:")?;
    // Credentials may themselves contain `@`; the host part cannot, so the
    // last `@` is the separator.
    let (credentials, endpoint) = rest.rsplit_once('@')?;
    let (username, credential) = credentials.rsplit_once(':')?;
    let (host, port) = endpoint.rsplit_once(':')?;

    if !is_token(username) || !is_token(credential) || !is_token(host) {
        return None;
    }
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(IceServerDirective {
        urls: format!("turn:{host}:{port}"),
        username: username.to_string(),
        credential: credential.to_string(),
    })
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn two_entries_parse_in_order() {
        let servers = parse_directive("turn:u1:p1@host1:3478,turn:u2:p2@host2:3479");
        assert_eq!(
            servers,
            vec![
                IceServerDirective {
                    urls: "turn:host1:3478".to_string(),
                    username: "u1".to_string(),
                    credential: "p1".to_string(),
                },
                IceServerDirective {
                    urls: "turn:host2:3479".to_string(),
                    username: "u2".to_string(),
                    credential: "p2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn empty_directive_is_empty_list() {
        assert!(parse_directive("").is_empty());
    }

    #[test]
    fn malformed_directive_is_empty_list() {
        assert!(parse_directive("not-a-valid-entry").is_empty());
    }

    #[test]
    fn malformed_entries_are_skipped_preserving_order() {
        let servers = parse_directive("turn:u:p@h:1,garbage,turn:u2:p2@h2:2");
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].urls, "turn:h:1");
        assert_eq!(servers[1].urls, "turn:h2:2");
    }

    #[test]
    fn missing_pieces_are_rejected() {
        assert!(parse_directive("turn:u:p@h").is_empty()); // no port
        assert!(parse_directive("turn:u@h:1").is_empty()); // no credential
        assert!(parse_directive("turn:u:p@:1").is_empty()); // empty host
        assert!(parse_directive("turn:u:p@h:").is_empty()); // empty port
        assert!(parse_directive("stun:u:p@h:1").is_empty()); // wrong scheme
        assert!(parse_directive("turn:u:p@h:12ab").is_empty()); // non-decimal port
    }

    #[test]
    fn extra_colons_bind_to_the_username() {
        // Matches the greedy-username reading of the original pattern.
        let servers = parse_directive("turn:user:extra:secret@relay:3478");
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].username, "user:extra");
        assert_eq!(servers[0].credential, "secret");
    }

    #[test]
    fn at_signs_in_the_credential_bind_left_of_the_host() {
        let servers = parse_directive("turn:u:p@ss@relay:3478");
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].username, "u");
        assert_eq!(servers[0].credential, "p@ss");
        assert_eq!(servers[0].urls, "turn:relay:3478");
    }

    #[test]
    fn surrounding_whitespace_is_tolerated_inner_whitespace_is_not() {
        let servers = parse_directive(" turn:u:p@h:1 , turn:a b:p@h:2 ");
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].username, "u");
    }

    proptest! {
        #[test]
        fn well_formed_entries_always_parse(
            usernames in prop::collection::vec("[a-zA-Z0-9_-]{1,12}", 1..6),
            credential in "[a-zA-Z0-9_-]{1,16}",
            host in "[a-z0-9.-]{1,20}",
            port in 1u16..,
        ) {
            let directive = usernames
                .iter()
                .map(|u| format!("turn:{u}:{credential}@{host}:{port}"))
                .collect::<Vec<_>>()
                .join(",");

            let servers = parse_directive(&directive);

            // Every well-formed entry is emitted, in directive order
            prop_assert_eq!(servers.len(), usernames.len());
            for (server, username) in servers.iter().zip(&usernames) {
                prop_assert_eq!(&server.username, username);
                prop_assert_eq!(&server.credential, &credential);
                prop_assert_eq!(&server.urls, &format!("turn:{host}:{port}"));
            }
        }

        #[test]
        fn garbage_between_entries_never_aborts_parsing(
            garbage in "[^,@]{0,20}",
        ) {
            let directive = format!("turn:u:p@h:1,{garbage},turn:u2:p2@h2:2");
            let servers = parse_directive(&directive);

            // The garbage entry cannot match (no `@`), so exactly the two
            // well-formed anchors survive, in order
            prop_assert_eq!(servers.len(), 2);
            prop_assert_eq!(&servers[0].urls, "turn:h:1");
            prop_assert_eq!(&servers[1].urls, "turn:h2:2");
        }
    }
}
