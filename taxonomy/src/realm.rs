//! The structural view shared by every copy of the taxonomy.
//!
//! Two copies of this crate linked into one program (a duplicated dependency,
//! two semver-incompatible versions) produce distinct Rust types for the same
//! kinds. Classification therefore never looks at the concrete type: a value
//! belongs to the taxonomy when it reports [`REALM_MARKER`], and its kind is
//! whatever name it declares.

use crate::kind;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt;

/// Marker reported by values built by any conformant copy of the taxonomy.
/// Part of the cross-copy contract: it must never change between versions.
pub const REALM_MARKER: &str = "serious-error-types/realm";

/// A stack trace as carried by an error value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stack {
    /// One opaque multi-line trace.
    Raw(String),
    /// Already split into frames.
    Frames(Vec<String>),
}

impl Stack {
    /// Capture the current backtrace. `None` when capturing is disabled
    /// (see `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`).
    pub fn capture() -> Option<Stack> {
        let backtrace = Backtrace::capture();
        match backtrace.status() {
            BacktraceStatus::Captured => Some(Stack::Raw(backtrace.to_string())),
            _ => None,
        }
    }

    /// The trace as a sequence of frame strings.
    pub fn frames(&self) -> Vec<String> {
        match self {
            Stack::Raw(raw) => raw.lines().map(str::to_string).collect(),
            Stack::Frames(frames) => frames.clone(),
        }
    }
}

impl From<String> for Stack {
    fn from(raw: String) -> Self {
        Stack::Raw(raw)
    }
}

impl From<&str> for Stack {
    fn from(raw: &str) -> Self {
        Stack::Raw(raw.to_string())
    }
}

impl From<Vec<String>> for Stack {
    fn from(frames: Vec<String>) -> Self {
        Stack::Frames(frames)
    }
}

/// Anything that can be classified against the taxonomy.
///
/// Implemented by this crate's own error types, by [`Foreign`] for ordinary
/// Rust errors, and by whatever another copy of the taxonomy hands across.
/// `Display` is the value's stringified form.
pub trait ErrorLike: fmt::Display {
    /// The realm marker, if the value carries one.
    fn realm(&self) -> Option<&str>;

    /// Most specific kind the value declares itself to be.
    fn kind_name(&self) -> Option<&str>;

    /// Name of whatever produced the value (a constructor or type name).
    fn type_name(&self) -> &str;

    /// Parent of `kind_name` in the value's *own* declared hierarchy.
    ///
    /// Defaults to this copy's registry; a value from a copy that knows
    /// kinds this one does not should answer from its own table.
    fn parent_kind(&self, kind_name: &str) -> Option<&str> {
        kind::parent_name(kind_name)
    }

    fn name(&self) -> Option<&str> {
        None
    }

    fn message(&self) -> Option<&str> {
        None
    }

    fn stack(&self) -> Option<&Stack> {
        None
    }

    /// HTTP status, for values of the HTTP kinds.
    fn status(&self) -> Option<u16> {
        None
    }
}

/// Adapter presenting an unrelated Rust error as an untagged [`ErrorLike`].
#[derive(Clone, Copy)]
pub struct Foreign<'a> {
    source: &'a (dyn StdError + 'a),
    name: &'a str,
}

impl<'a> Foreign<'a> {
    pub fn new(source: &'a (dyn StdError + 'a)) -> Self {
        Self {
            source,
            name: "Error",
        }
    }

    /// Same as [`Foreign::new`] with an explicit type name.
    pub fn named(source: &'a (dyn StdError + 'a), name: &'a str) -> Self {
        Self { source, name }
    }
}

impl fmt::Debug for Foreign<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Foreign")
            .field("name", &self.name)
            .field("source", &self.source.to_string())
            .finish()
    }
}

impl fmt::Display for Foreign<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.source, f)
    }
}

impl ErrorLike for Foreign<'_> {
    fn realm(&self) -> Option<&str> {
        None
    }

    fn kind_name(&self) -> Option<&str> {
        None
    }

    fn type_name(&self) -> &str {
        self.name
    }
}
