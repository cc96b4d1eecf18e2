//! Curl command generation
//!
//! Converts a [`Request`] into an equivalent curl command for sharing and
//! debugging. The output is a token sequence that is safe to paste into a
//! POSIX shell or to hand to a process-spawning API without re-parsing.

use bytes::Bytes;
use tracing::debug;

use crate::errors::{CurlifyError, Result};
use crate::escape::{shell_escape, shell_escape_bytes};
use crate::request::Request;

/// An exec-compatible token sequence plus string rendering
///
/// Immutable once built; the first token is always `curl` and the last is
/// the target URL. Tokens are raw bytes so a request body that is not valid
/// UTF-8 survives unchanged; everything except the body token is plain
/// ASCII-or-UTF-8 by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurlCommand {
    tokens: Vec<Bytes>,
}

impl CurlCommand {
    fn new() -> Self {
        CurlCommand { tokens: Vec::new() }
    }

    fn push(&mut self, token: impl Into<Bytes>) {
        self.tokens.push(token.into());
    }

    /// The raw token sequence, for spawning the command directly
    pub fn tokens(&self) -> &[Bytes] {
        &self.tokens
    }

    /// Iterate over the tokens without consuming the command
    pub fn iter(&self) -> std::slice::Iter<'_, Bytes> {
        self.tokens.iter()
    }

    fn join(&self, separator: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                out.extend_from_slice(separator);
            }
            out.extend_from_slice(token);
        }
        out
    }

    /// The full command as bytes, tokens joined with single spaces
    ///
    /// Unlike [`Display`](std::fmt::Display), this reproduces a non-UTF-8
    /// body token byte-exactly.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.join(b" ")
    }

    /// Render with one token per line, joined by backslash continuations
    ///
    /// Easier to read than the single-line form when the request carries
    /// many headers.
    pub fn to_multiline_string(&self) -> String {
        String::from_utf8_lossy(&self.join(b" \\\n  ")).into_owned()
    }
}

/// Joins the tokens with single spaces into a ready-to-paste command
///
/// Body tokens that are not valid UTF-8 render with replacement characters
/// here; use [`CurlCommand::to_bytes`] or [`CurlCommand::tokens`] when the
/// exact bytes matter.
impl std::fmt::Display for CurlCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.to_bytes()))
    }
}

impl IntoIterator for CurlCommand {
    type Item = Bytes;
    type IntoIter = std::vec::IntoIter<Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a CurlCommand {
    type Item = &'a Bytes;
    type IntoIter = std::slice::Iter<'a, Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Generate an equivalent curl command from the request
///
/// Token order is fixed: `curl`, `-k` for https URLs, `-X <method>`,
/// `-d <body>` when a drained body is non-empty, one `-H '<key>: <values>'`
/// pair per header key in lexicographic key order, and the URL last. Every
/// argument token is shell-escaped; multiple values under one header key are
/// joined with single spaces.
///
/// The request is consumed because its body can only be read once. A body
/// that drains to zero bytes produces the same output as no body at all.
/// Body bytes are emitted as-is, whether or not they form valid UTF-8.
///
/// Note: `-k` disables certificate verification in the replayed command.
/// This is deliberate, so that commands captured against self-signed test
/// endpoints replay without ceremony, but it weakens the TLS guarantees of
/// whatever the command is pasted into.
///
/// The only failure is [`CurlifyError::BodyRead`], when draining the body
/// stream fails; no partial command is returned.
///
/// # Examples
/// ```
/// use curlify::{generate_curl_command, Request};
///
/// let req = Request::new("POST", "http://foo.com/cats")
///     .unwrap()
///     .header("Api_key", "123")
///     .body("age=10&name=Hudson");
/// let cmd = generate_curl_command(req).unwrap();
/// assert_eq!(
///     cmd.to_string(),
///     "curl -X 'POST' -d 'age=10&name=Hudson' -H 'Api_key: 123' 'http://foo.com/cats'",
/// );
/// ```
pub fn generate_curl_command(request: Request) -> Result<CurlCommand> {
    let (method, url, headers, body) = request.into_parts();

    let mut command = CurlCommand::new();
    command.push("curl");

    if url.scheme() == "https" {
        command.push("-k");
    }

    command.push("-X");
    command.push(shell_escape(&method));

    if let Some(body) = body {
        let content = body.drain().map_err(CurlifyError::BodyRead)?;
        if !content.is_empty() {
            command.push("-d");
            command.push(shell_escape_bytes(&content));
        }
    }

    // Header iteration order follows the map, which is not part of the
    // contract; sort by key so output is reproducible.
    let mut keys: Vec<&String> = headers.keys().collect();
    keys.sort();
    for key in keys {
        command.push("-H");
        command.push(shell_escape(&format!("{}: {}", key, headers[key].join(" "))));
    }

    command.push(shell_escape(url.as_str()));

    debug!(tokens = command.tokens.len(), "generated curl command");
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_order() {
        let req = Request::new("POST", "https://example.com/x")
            .unwrap()
            .header("A", "1")
            .body("data");
        let cmd = generate_curl_command(req).unwrap();
        assert_eq!(
            cmd.tokens(),
            &["curl", "-k", "-X", "'POST'", "-d", "'data'", "-H", "'A: 1'", "'https://example.com/x'"],
        );
    }

    #[test]
    fn test_insecure_flag_only_for_https() {
        let req = Request::new("GET", "http://example.com").unwrap();
        let cmd = generate_curl_command(req).unwrap();
        assert!(!cmd.iter().any(|t| t == "-k"));

        let req = Request::new("GET", "https://example.com").unwrap();
        let cmd = generate_curl_command(req).unwrap();
        assert_eq!(cmd.tokens()[1], "-k");
    }

    #[test]
    fn test_headers_sorted_by_key() {
        let req = Request::new("GET", "http://example.com")
            .unwrap()
            .header("Zulu", "z")
            .header("Alpha", "a")
            .header("Mike", "m");
        let cmd = generate_curl_command(req).unwrap();
        assert_eq!(
            cmd.tokens(),
            &[
                "curl",
                "-X",
                "'GET'",
                "-H",
                "'Alpha: a'",
                "-H",
                "'Mike: m'",
                "-H",
                "'Zulu: z'",
                "'http://example.com/'",
            ],
        );
    }

    #[test]
    fn test_empty_body_matches_no_body() {
        let without = generate_curl_command(Request::new("PUT", "http://example.com").unwrap());
        let with_empty = generate_curl_command(
            Request::new("PUT", "http://example.com").unwrap().body(""),
        );
        assert_eq!(without.unwrap(), with_empty.unwrap());
    }

    #[test]
    fn test_non_utf8_body_bytes_preserved() {
        let raw = vec![0xFF, 0xFE, b'a'];
        let req = Request::new("POST", "http://example.com/")
            .unwrap()
            .body(raw.clone());
        let cmd = generate_curl_command(req).unwrap();

        let mut expected = vec![b'\''];
        expected.extend_from_slice(&raw);
        expected.push(b'\'');
        assert_eq!(cmd.tokens()[4], expected);
    }

    #[test]
    fn test_body_read_failure() {
        struct FailingReader;
        impl std::io::Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("stream torn down"))
            }
        }

        let req = Request::new("POST", "http://example.com")
            .unwrap()
            .body(crate::Body::reader(FailingReader));
        let err = generate_curl_command(req).unwrap_err();
        assert!(matches!(err, CurlifyError::BodyRead(_)));
    }

    #[test]
    fn test_display_joins_with_spaces() {
        let req = Request::new("GET", "http://example.com/").unwrap();
        let cmd = generate_curl_command(req).unwrap();
        assert_eq!(cmd.to_string(), "curl -X 'GET' 'http://example.com/'");
    }

    #[test]
    fn test_to_bytes_matches_display_for_utf8() {
        let req = Request::new("GET", "http://example.com/").unwrap();
        let cmd = generate_curl_command(req).unwrap();
        assert_eq!(cmd.to_bytes(), cmd.to_string().into_bytes());
    }

    #[test]
    fn test_multiline_rendering() {
        let req = Request::new("GET", "http://example.com/").unwrap();
        let cmd = generate_curl_command(req).unwrap();
        assert_eq!(
            cmd.to_multiline_string(),
            "curl \\\n  -X \\\n  'GET' \\\n  'http://example.com/'",
        );
    }
}
