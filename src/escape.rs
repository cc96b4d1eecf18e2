//! POSIX shell escaping
//!
//! Quoting rules for embedding arbitrary strings in a shell command line.

/// Escape a string for safe inclusion in a POSIX shell command
///
/// The value is wrapped in single quotes and any literal single quote is
/// replaced with `'\''` (close quote, escaped quote, reopen quote). Inside
/// single quotes the shell treats every other character literally, so this
/// survives spaces, double quotes, `$`, backticks, and newlines.
///
/// Quoting is unconditional. Minimal quoting would also be correct, but the
/// only property callers rely on is that unescaping reproduces the exact
/// original bytes.
///
/// # Examples
/// ```
/// use curlify::escape::shell_escape;
/// assert_eq!(shell_escape("POST"), "'POST'");
/// assert_eq!(shell_escape("O'Neill"), r"'O'\''Neill'");
/// ```
pub fn shell_escape(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Escape raw bytes for safe inclusion in a POSIX shell command
///
/// Same quoting rule as [`shell_escape`], applied to arbitrary bytes. The
/// rewrite only touches the `'` byte, so content that is not valid UTF-8
/// passes through untouched and can be reproduced byte-exactly.
pub fn shell_escape_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + 2);
    out.push(b'\'');
    for &b in bytes {
        if b == b'\'' {
            out.extend_from_slice(br"'\''");
        } else {
            out.push(b);
        }
    }
    out.push(b'\'');
    out
}
