//! Concrete error values for the root, Input, Database and Auth kinds.
//!
//! HTTP kinds carry a status code and live in the `http-error` crate.

use crate::json::ErrorJson;
use crate::kind::Kind;
use crate::realm::{ErrorLike, Stack, REALM_MARKER};
use std::fmt;

const DEFAULT_AUTHENTICATION_MESSAGE: &str = "Credential verification failed";
const UNKNOWN_TABLE: &str = "unknown";

/// A database query as seen by the database kinds: its `Display` form is the
/// SQL text, and it may know which table it targets.
pub trait Query: fmt::Display {
    fn table(&self) -> Option<&str> {
        None
    }
}

/// Minimal [`Query`] for callers without a query builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInfo {
    sql: String,
    table: Option<String>,
}

impl QueryInfo {
    pub fn new<S: Into<String>>(sql: S) -> Self {
        Self {
            sql: sql.into(),
            table: None,
        }
    }

    /// A `select *` over one table.
    pub fn for_table<S: Into<String>>(table: S) -> Self {
        let table = table.into();
        Self {
            sql: format!("select * from `{table}`"),
            table: Some(table),
        }
    }

    #[must_use]
    pub fn on_table<S: Into<String>>(mut self, table: S) -> Self {
        self.table = Some(table.into());
        self
    }
}

impl fmt::Display for QueryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl Query for QueryInfo {
    fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }
}

/// Kind-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    None,
    MissingInput {
        context: String,
        input_name: String,
    },
    InvalidInput {
        context: String,
        input_name: String,
        given: String,
        expected: String,
    },
    MissingArgument {
        position: usize,
        position_name: String,
    },
    InvalidArgument {
        position: usize,
        position_name: String,
        given: String,
        expected: String,
    },
    Database {
        table: String,
        /// SQL text, `None` when no query was supplied.
        query: Option<String>,
    },
}

/// One occurrence of a serious error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriousError {
    kind: Kind,
    message: String,
    stack: Option<Stack>,
    detail: Detail,
}

impl SeriousError {
    /// An error of any kind with a free-form message. Branch kinds such as
    /// `InputError` or `AuthError` are built this way.
    pub fn new<S: Into<String>>(kind: Kind, message: S) -> Self {
        Self::with_detail(kind, message.into(), Detail::None)
    }

    fn with_detail(kind: Kind, message: String, detail: Detail) -> Self {
        Self {
            kind,
            message,
            stack: Stack::capture(),
            detail,
        }
    }

    pub fn missing_input<C: Into<String>, N: Into<String>>(context: C, name: N) -> Self {
        let context = context.into();
        let input_name = name.into();
        let message = format!("Missing required input {context} ({input_name})");
        Self::with_detail(
            Kind::MissingInput,
            message,
            Detail::MissingInput {
                context,
                input_name,
            },
        )
    }

    pub fn invalid_input<C, N, G, E>(context: C, name: N, given: G, expected: E) -> Self
    where
        C: Into<String>,
        N: Into<String>,
        G: Into<String>,
        E: Into<String>,
    {
        let context = context.into();
        let input_name = name.into();
        let given = given.into();
        let expected = expected.into();
        let message =
            format!("Invalid {context} ({input_name}) type '{given}', expected type {expected}");
        Self::with_detail(
            Kind::InvalidInput,
            message,
            Detail::InvalidInput {
                context,
                input_name,
                given,
                expected,
            },
        )
    }

    pub fn missing_argument<N: Into<String>>(position: usize, name: N) -> Self {
        let position_name = name.into();
        let message = format!("Missing required argument {position} ({position_name})");
        Self::with_detail(
            Kind::MissingArgument,
            message,
            Detail::MissingArgument {
                position,
                position_name,
            },
        )
    }

    pub fn invalid_argument<N, G, E>(position: usize, name: N, given: G, expected: E) -> Self
    where
        N: Into<String>,
        G: Into<String>,
        E: Into<String>,
    {
        let position_name = name.into();
        let given = given.into();
        let expected = expected.into();
        let message = format!(
            "Invalid argument {position} ({position_name}) type '{given}', expected type {expected}"
        );
        Self::with_detail(
            Kind::InvalidArgument,
            message,
            Detail::InvalidArgument {
                position,
                position_name,
                given,
                expected,
            },
        )
    }

    /// Generic database failure. The message names the table and quotes the
    /// query; both fields are kept on the error.
    pub fn database<S: Into<String>>(message: S, query: Option<&dyn Query>) -> Self {
        Self::database_kind(Kind::Database, &message.into(), query)
    }

    /// A query that failed to execute.
    pub fn database_query<S: Into<String>>(message: S, query: Option<&dyn Query>) -> Self {
        Self::database_kind(Kind::DatabaseQuery, &message.into(), query)
    }

    /// A lookup that returned zero rows.
    pub fn item_not_found(query: Option<&dyn Query>) -> Self {
        Self::database_kind(Kind::ItemNotFound, "Found 0 results", query)
    }

    fn database_kind(kind: Kind, message: &str, query: Option<&dyn Query>) -> Self {
        let sql = query.map(|q| q.to_string());
        let table = query
            .and_then(|q| q.table())
            .unwrap_or(UNKNOWN_TABLE)
            .to_string();
        let message = format!(
            "{message} for '{table}' using query:\n\n    {}\n",
            sql.as_deref().unwrap_or("null")
        );
        Self::with_detail(kind, message, Detail::Database { table, query: sql })
    }

    pub fn authentication() -> Self {
        Self::authentication_with(DEFAULT_AUTHENTICATION_MESSAGE)
    }

    pub fn authentication_with<S: Into<String>>(message: S) -> Self {
        Self::new(Kind::Authentication, message)
    }

    pub fn authorization() -> Self {
        Self::new(Kind::Authorization, "Insufficient permissions")
    }

    /// Replace the captured stack.
    #[must_use]
    pub fn with_stack<S: Into<Stack>>(mut self, stack: S) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn without_stack(mut self) -> Self {
        self.stack = None;
        self
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The error name, which is always its kind name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stack(&self) -> Option<&Stack> {
        self.stack.as_ref()
    }

    pub fn detail(&self) -> &Detail {
        &self.detail
    }

    /// Table of a database error.
    pub fn table(&self) -> Option<&str> {
        match &self.detail {
            Detail::Database { table, .. } => Some(table),
            _ => None,
        }
    }

    /// SQL text of a database error.
    pub fn query(&self) -> Option<&str> {
        match &self.detail {
            Detail::Database { query, .. } => query.as_deref(),
            _ => None,
        }
    }

    /// Whether this error is of `kind` or one of its subkinds.
    pub fn is(&self, kind: Kind) -> bool {
        self.kind.is_a(kind)
    }

    pub fn to_json(&self, debug: bool) -> ErrorJson {
        ErrorJson::new(self.name(), Some(self.message.as_str()), self.stack.as_ref(), debug)
    }
}

impl fmt::Display for SeriousError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}( {} )]", self.kind.name(), self.message)
    }
}

impl std::error::Error for SeriousError {}

impl ErrorLike for SeriousError {
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
        Some(self.kind.name())
    }

    fn message(&self) -> Option<&str> {
        Some(self.message.as_str())
    }

    fn stack(&self) -> Option<&Stack> {
        self.stack.as_ref()
    }
}
