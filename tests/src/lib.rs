//! Shared fixtures for the cross-crate tests.

use std::collections::HashMap;
use std::fmt;
use taxonomy::{ErrorLike, Stack, REALM_MARKER};

/// An error value as another copy of the taxonomy would build it: same
/// marker and kind names, but a type this copy knows nothing about, and its
/// own idea of the hierarchy.
#[derive(Debug, Clone)]
pub struct OtherCopyError {
    marker: Option<String>,
    kind: String,
    message: String,
    status: Option<u16>,
    stack: Option<Stack>,
    parents: HashMap<String, String>,
}

impl OtherCopyError {
    pub fn new(kind: &str, message: &str) -> Self {
        Self {
            marker: Some(REALM_MARKER.to_string()),
            kind: kind.to_string(),
            message: message.to_string(),
            status: None,
            stack: None,
            parents: HashMap::new(),
        }
    }

    /// Same shape without the realm marker.
    pub fn untagged(mut self) -> Self {
        self.marker = None;
        self
    }

    pub fn with_marker(mut self, marker: &str) -> Self {
        self.marker = Some(marker.to_string());
        self
    }

    /// Declare a parent link. Once any link is declared, the value answers
    /// only from its own table.
    pub fn with_parent(mut self, child: &str, parent: &str) -> Self {
        self.parents.insert(child.to_string(), parent.to_string());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_stack(mut self, stack: &str) -> Self {
        self.stack = Some(Stack::from(stack));
        self
    }
}

impl fmt::Display for OtherCopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}( {} )]", self.kind, self.message)
    }
}

impl std::error::Error for OtherCopyError {}

impl ErrorLike for OtherCopyError {
    fn realm(&self) -> Option<&str> {
        self.marker.as_deref()
    }

    fn kind_name(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }

    fn type_name(&self) -> &str {
        "Error"
    }

    fn parent_kind(&self, kind_name: &str) -> Option<&str> {
        if self.parents.is_empty() {
            taxonomy::parent_name(kind_name)
        } else {
            self.parents.get(kind_name).map(String::as_str)
        }
    }

    fn name(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }

    fn message(&self) -> Option<&str> {
        Some(self.message.as_str())
    }

    fn stack(&self) -> Option<&Stack> {
        self.stack.as_ref()
    }

    fn status(&self) -> Option<u16> {
        self.status
    }
}
