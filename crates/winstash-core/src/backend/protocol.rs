//! Argv construction and reply parsing for the window backend.
//!
//! The backend is reached through `gdbus call` on the GNOME Shell "Windows"
//! extension. Replies are GVariant text such as `('[{"id":1}]',)`, so the JSON
//! payload is recovered by scanning for the outermost brackets rather than
//! parsing from offset 0. A title containing `]` or `}` outside the payload
//! would confuse this; the backend offers no cleaner transport.
//!
//! gdbus single-quotes the string and escapes `'` and `\` inside it, so the
//! payload is unescaped before it reaches the JSON parser.

use std::borrow::Cow;
use std::fmt;

use serde::de::DeserializeOwned;

use super::errors::BackendError;
use super::types::{WindowDetails, WindowRecord};

/// Fixed argv prefix identifying the extension's D-Bus object.
pub const COMMAND_PREFIX: [&str; 8] = [
    "gdbus",
    "call",
    "-e",
    "-d",
    "org.gnome.Shell",
    "-o",
    "/org/gnome/Shell/Extensions/Windows",
    "--method",
];

pub const INTERFACE: &str = "org.gnome.Shell.Extensions.Windows";

/// Stops gdbus from reading a leading negative number as an option flag.
pub const NEGATIVE_ESCAPE: &str = "~~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    List,
    Details,
    Minimize,
    Unminimize,
    Maximize,
    Unmaximize,
    Move,
    Resize,
    MoveResize,
    MoveToWorkspace,
    Activate,
    Close,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::List => "List",
            Method::Details => "Details",
            Method::Minimize => "Minimize",
            Method::Unminimize => "Unminimize",
            Method::Maximize => "Maximize",
            Method::Unmaximize => "Unmaximize",
            Method::Move => "Move",
            Method::Resize => "Resize",
            Method::MoveResize => "MoveResize",
            Method::MoveToWorkspace => "MoveToWorkspace",
            Method::Activate => "Activate",
            Method::Close => "Close",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positional backend parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Unsigned(u64),
    Signed(i64),
}

impl Param {
    pub fn is_negative(&self) -> bool {
        matches!(self, Param::Signed(value) if *value < 0)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Unsigned(value) => write!(f, "{}", value),
            Param::Signed(value) => write!(f, "{}", value),
        }
    }
}

impl From<u64> for Param {
    fn from(value: u64) -> Self {
        Param::Unsigned(value)
    }
}

impl From<u32> for Param {
    fn from(value: u32) -> Self {
        Param::Unsigned(value.into())
    }
}

impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Param::Signed(value.into())
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Signed(value)
    }
}

/// Build the full argv for one backend call.
///
/// When any parameter is negative the escape token is inserted once, ahead of
/// all parameters.
pub fn build_command(method: Method, params: &[Param]) -> Vec<String> {
    let mut argv: Vec<String> = COMMAND_PREFIX.iter().map(|s| s.to_string()).collect();
    argv.push(format!("{}.{}", INTERFACE, method.as_str()));

    if params.iter().any(Param::is_negative) {
        argv.push(NEGATIVE_ESCAPE.to_string());
    }
    argv.extend(params.iter().map(|p| p.to_string()));

    argv
}

/// Slice from the first `open` to the last `close`, inclusive.
pub fn extract_payload(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Undo GVariant string escaping (`\'` and `\\`) in one left-to-right pass.
///
/// Other escapes are left as-is.
pub fn unescape_gvariant(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next @ ('\'' | '\\')) => out.push(next),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

fn parse_payload<T: DeserializeOwned>(
    text: &str,
    method: Method,
    open: char,
    close: char,
) -> Result<T, BackendError> {
    let payload = extract_payload(text, open, close).ok_or_else(|| BackendError::Unparseable {
        method: method.to_string(),
        message: format!("no '{}...{}' payload in backend output", open, close),
    })?;

    serde_json::from_str(&unescape_gvariant(payload)).map_err(|e| BackendError::Unparseable {
        method: method.to_string(),
        message: e.to_string(),
    })
}

/// Parse the output of a `List` call.
pub fn parse_window_list(text: &str) -> Result<Vec<WindowRecord>, BackendError> {
    parse_payload(text, Method::List, '[', ']')
}

/// Parse the output of a `Details` call.
pub fn parse_window_details(text: &str) -> Result<WindowDetails, BackendError> {
    parse_payload(text, Method::Details, '{', '}')
}
