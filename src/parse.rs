//! Splits raw input lines into the command invocation handed to the dispatcher.
//!
//! Lines are handled as bytes. Tokens reach external programs exactly as they
//! were typed, whether or not they are valid UTF-8.

use std::ffi::{OsStr, OsString};

/// Bytes that separate tokens: space, tab, carriage return, newline and bell.
pub const DELIMITERS: [u8; 5] = [b' ', b'\t', b'\r', b'\n', 0x07];

/// Split a line on runs of [`DELIMITERS`], dropping empty fields.
///
/// No quoting, escaping or expansion is recognised; a quote character is just
/// another byte of the token it appears in.
pub fn tokenize(line: &[u8]) -> Vec<Vec<u8>> {
    line.split(|byte| DELIMITERS.contains(byte))
        .filter(|field| !field.is_empty())
        .map(<[u8]>::to_vec)
        .collect()
}

/// A tokenized line viewed as a command name followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    tokens: Vec<OsString>,
}

impl Invocation {
    /// Tokenize `line` into an invocation.
    pub fn parse(line: impl AsRef<[u8]>) -> Self {
        Self {
            tokens: tokenize(line.as_ref())
                .into_iter()
                .map(os_string_from_bytes)
                .collect(),
        }
    }

    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// True for a blank line.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token 0, if the line was not blank.
    pub fn program(&self) -> Option<&OsStr> {
        self.tokens.first().map(OsString::as_os_str)
    }

    /// Token 0 as text. `None` for a blank line or a name that is not UTF-8,
    /// neither of which can match a builtin.
    pub fn name(&self) -> Option<&str> {
        self.program().and_then(OsStr::to_str)
    }

    /// Tokens 1..n.
    pub fn args(&self) -> &[OsString] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    /// The full argument vector, name included, as passed to an external program.
    pub fn argv(&self) -> &[OsString] {
        &self.tokens
    }
}

#[cfg(unix)]
fn os_string_from_bytes(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn os_string_from_bytes(bytes: Vec<u8>) -> OsString {
    String::from_utf8_lossy(&bytes).into_owned().into()
}
