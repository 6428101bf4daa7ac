use crate::realm::Stack;
use serde::Serialize;

/// Plain structured form of an error, ready for any serde serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorJson {
    pub error: String,
    pub message: Option<String>,
    /// Frame strings; present only when debug output was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<Vec<String>>,
}

impl ErrorJson {
    /// Build the record, keeping the stack only when `debug` is set.
    pub fn new(
        error: impl Into<String>,
        message: Option<&str>,
        stack: Option<&Stack>,
        debug: bool,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.map(str::to_string),
            stack: if debug { stack.map(Stack::frames) } else { None },
        }
    }
}
