use crate::status::{self, INTERNAL_SERVER_ERROR};
use serde::Serialize;
use std::fmt;
use taxonomy::{ErrorJson, ErrorLike, Kind, Stack, REALM_MARKER};
use tracing::warn;

/// Methods a method-not-allowed error always permits.
pub const ALWAYS_ALLOWED: [&str; 2] = ["GET", "HEAD"];

/// Canonical HTTP-facing error, and the value type of every HTTP kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    kind: Kind,
    status: u16,
    status_name: &'static str,
    name: String,
    message: Option<String>,
    stack: Option<Stack>,
    allowed: Option<Vec<String>>,
}

/// Serialized form: status fields ahead of the base error fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpErrorJson {
    pub status: u16,
    pub status_name: String,
    #[serde(flatten)]
    pub base: ErrorJson,
}

/// Builder for [`HttpError`] in pass-through mode: every field explicit.
#[derive(Debug, Clone)]
pub struct HttpErrorBuilder {
    kind: Kind,
    status: u16,
    name: Option<String>,
    message: Option<String>,
    stack: Option<Stack>,
    capture_stack: bool,
}

impl HttpErrorBuilder {
    pub fn new(status: u16) -> Self {
        Self {
            kind: Kind::Http,
            status,
            name: None,
            message: None,
            stack: None,
            capture_stack: true,
        }
    }

    /// Set the kind. Only kinds of the HTTP branch are accepted.
    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        if kind.is_a(Kind::Http) {
            self.kind = kind;
        } else {
            warn!(kind = kind.name(), "ignoring non-HTTP kind for an HTTP error");
        }
        self
    }

    /// Mark the error as request-side.
    #[must_use]
    pub fn request(self) -> Self {
        self.kind(Kind::HttpRequest)
    }

    /// Mark the error as response-side.
    #[must_use]
    pub fn response(self) -> Self {
        self.kind(Kind::HttpResponse)
    }

    #[must_use]
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn stack<S: Into<Stack>>(mut self, stack: S) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Skip backtrace capture when no stack was given.
    #[must_use]
    pub fn no_stack(mut self) -> Self {
        self.capture_stack = false;
        self
    }

    /// Resolve the reason phrase and fill whatever is still missing.
    ///
    /// With both name and message given they are kept. Otherwise the name
    /// becomes the reason phrase and the message is whichever of the two was
    /// given, or `None`.
    pub fn build(self) -> HttpError {
        let status_name = status::status_name(self.status);
        let (name, message) = match (self.name, self.message) {
            (Some(name), Some(message)) => (name, Some(message)),
            (name, message) => (status_name.to_string(), name.or(message)),
        };
        let stack = match self.stack {
            Some(stack) => Some(stack),
            None if self.capture_stack => Stack::capture(),
            None => None,
        };

        HttpError {
            kind: self.kind,
            status: self.status,
            status_name,
            name,
            message,
            stack,
            allowed: None,
        }
    }
}

impl Default for HttpErrorBuilder {
    fn default() -> Self {
        Self::new(INTERNAL_SERVER_ERROR)
    }
}

impl HttpError {
    /// Create a new builder
    pub fn builder(status: u16) -> HttpErrorBuilder {
        HttpErrorBuilder::new(status)
    }

    /// A bare `HTTPError` for `status`.
    pub fn new(status: u16) -> Self {
        Self::builder(status).build()
    }

    /// A request-side error with a message.
    pub fn request<S: Into<String>>(status: u16, message: S) -> Self {
        Self::builder(status).request().message(message).build()
    }

    /// A response-side error with a message.
    pub fn response<S: Into<String>>(status: u16, message: S) -> Self {
        Self::builder(status).response().message(message).build()
    }

    /// 404 for a path and method nothing is routed to.
    pub fn not_found<P: fmt::Display, M: fmt::Display>(path: P, method: M) -> Self {
        Self::builder(404)
            .kind(Kind::NotFound)
            .message(format!("Could not find any resource for {method} {path}"))
            .build()
    }

    /// 405 for a path that exists but rejects `method`.
    ///
    /// `allowed` is `GET`, `HEAD`, then the uppercased `methods`, without
    /// duplicates and in that order.
    pub fn method_not_allowed<P, M, S>(path: P, method: M, methods: &[S]) -> Self
    where
        P: fmt::Display,
        M: fmt::Display,
        S: AsRef<str>,
    {
        let mut err = Self::builder(405)
            .kind(Kind::MethodNotAllowed)
            .message(format!("{path} does not support HTTP request method {method}"))
            .build();
        err.allowed = Some(allowed_methods(methods));
        err
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_name(&self) -> &'static str {
        self.status_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn stack(&self) -> Option<&Stack> {
        self.stack.as_ref()
    }

    /// Permitted methods, set only on method-not-allowed errors.
    pub fn allowed(&self) -> Option<&[String]> {
        self.allowed.as_deref()
    }

    /// Whether this error is of `kind` or one of its subkinds.
    pub fn is(&self, kind: Kind) -> bool {
        self.kind.is_a(kind)
    }

    #[must_use]
    pub fn without_stack(mut self) -> Self {
        self.stack = None;
        self
    }

    pub fn to_json(&self, debug: bool) -> HttpErrorJson {
        HttpErrorJson {
            status: self.status,
            status_name: self.status_name.to_string(),
            base: ErrorJson::new(
                self.name.as_str(),
                self.message.as_deref(),
                self.stack.as_ref(),
                debug,
            ),
        }
    }
}

fn allowed_methods<S: AsRef<str>>(methods: &[S]) -> Vec<String> {
    let mut allowed: Vec<String> = ALWAYS_ALLOWED.iter().map(|m| m.to_string()).collect();
    for method in methods {
        let method = method.as_ref().to_uppercase();
        if !allowed.contains(&method) {
            allowed.push(method);
        }
    }
    allowed
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}( {} )]",
            self.kind.name(),
            self.message.as_deref().unwrap_or("null")
        )
    }
}

impl std::error::Error for HttpError {}

impl ErrorLike for HttpError {
    fn realm(&self) -> Option<&str> {
        Some(REALM_MARKER)
    }

    fn kind_name(&self) -> Option<&str> {
        Some(self.kind.name())
    }

    fn type_name(&self) -> &str {
        self.kind.name()
    }

    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn stack(&self) -> Option<&Stack> {
        self.stack.as_ref()
    }

    fn status(&self) -> Option<u16> {
        Some(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_with_message() {
        let err = HttpError::response(404, "You are lost");
        assert_eq!(err.kind(), Kind::HttpResponse);
        assert_eq!(err.status(), 404);
        assert_eq!(err.name(), "Not Found");
        assert_eq!(err.message(), Some("You are lost"));
        assert!(err.is(Kind::Http));
        assert!(!err.is(Kind::HttpRequest));
    }

    #[test]
    fn test_name_and_message_kept_when_both_given() {
        let err = HttpError::builder(409)
            .name("VersionConflict")
            .message("Row was updated concurrently")
            .build();
        assert_eq!(err.name(), "VersionConflict");
        assert_eq!(err.message(), Some("Row was updated concurrently"));
        assert_eq!(err.status_name(), "Conflict");
    }

    #[test]
    fn test_lone_name_becomes_message() {
        let err = HttpError::builder(400).name("Bad payload").build();
        assert_eq!(err.name(), "Bad Request");
        assert_eq!(err.message(), Some("Bad payload"));
    }

    #[test]
    fn test_bare_status_defaults() {
        let err = HttpError::new(599);
        assert_eq!(err.status_name(), "Custom Status Code");
        assert_eq!(err.name(), "Custom Status Code");
        assert_eq!(err.message(), None);
        assert_eq!(err.to_string(), "[HTTPError( null )]");

        let default = HttpErrorBuilder::default().build();
        assert_eq!(default.status(), 500);
        assert_eq!(default.name(), "Internal Server Error");
    }

    #[test]
    fn test_builder_rejects_foreign_kind() {
        let err = HttpError::builder(400).kind(Kind::Input).build();
        assert_eq!(err.kind(), Kind::Http);
    }

    #[test]
    fn test_not_found() {
        let err = HttpError::not_found("/api/users", "GET");
        assert_eq!(err.kind(), Kind::NotFound);
        assert_eq!(err.status(), 404);
        assert_eq!(err.name(), "Not Found");
        assert_eq!(
            err.message(),
            Some("Could not find any resource for GET /api/users")
        );
        assert_eq!(err.allowed(), None);
    }

    #[test]
    fn test_method_not_allowed_unions_methods() {
        let err = HttpError::method_not_allowed("/api/users", "DELETE", &["post"]);
        assert_eq!(err.status(), 405);
        assert_eq!(
            err.message(),
            Some("/api/users does not support HTTP request method DELETE")
        );
        assert_eq!(
            err.allowed(),
            Some(&["GET".to_string(), "HEAD".to_string(), "POST".to_string()][..])
        );
    }

    #[test]
    fn test_method_not_allowed_dedupes() {
        let err = HttpError::method_not_allowed("/", "PATCH", &["get", "Put", "PUT", "head"]);
        assert_eq!(
            err.allowed().unwrap(),
            &["GET".to_string(), "HEAD".to_string(), "PUT".to_string()]
        );

        let none: [&str; 0] = [];
        let err = HttpError::method_not_allowed("/", "PATCH", &none);
        assert_eq!(err.allowed().unwrap().len(), 2);
    }

    #[test]
    fn test_json_field_order() {
        let err = HttpError::response(404, "You are lost").without_stack();
        let json = serde_json::to_string(&err.to_json(true)).unwrap();
        assert_eq!(
            json,
            r#"{"status":404,"status_name":"Not Found","error":"Not Found","message":"You are lost"}"#
        );
    }

    #[test]
    fn test_json_stack_only_in_debug() {
        let err = HttpError::builder(500)
            .stack("Error: boom\n    at main")
            .build();

        let plain = serde_json::to_value(err.to_json(false)).unwrap();
        assert!(plain.get("stack").is_none());

        let debug = serde_json::to_value(err.to_json(true)).unwrap();
        assert_eq!(debug["stack"], serde_json::json!(["Error: boom", "    at main"]));
        assert_eq!(debug["message"], serde_json::Value::Null);
    }
}
