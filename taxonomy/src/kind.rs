//! The fixed tree of error kinds.
//!
//! Kinds form a single-rooted tree. Parent links are a static table keyed by
//! the variant; "is a descendant of" is table traversal over names, never
//! type-system inheritance.

use crate::error::{Result, TaxonomyError};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Name → kind lookup, built once on first use and never written again.
static REGISTRY: Lazy<HashMap<&'static str, Kind>> =
    Lazy::new(|| Kind::ALL.iter().map(|kind| (kind.name(), *kind)).collect());

/// Every kind of the taxonomy: the root, the category branches and the leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Serious,

    Input,
    MissingInput,
    InvalidInput,
    MissingArgument,
    InvalidArgument,

    Database,
    DatabaseQuery,
    ItemNotFound,

    Auth,
    Authentication,
    Authorization,

    Http,
    HttpRequest,
    NotFound,
    MethodNotAllowed,
    HttpResponse,
}

impl Kind {
    pub const ROOT: Kind = Kind::Serious;

    /// All kinds, parents listed before their children.
    pub const ALL: [Kind; 17] = [
        Kind::Serious,
        Kind::Input,
        Kind::MissingInput,
        Kind::InvalidInput,
        Kind::MissingArgument,
        Kind::InvalidArgument,
        Kind::Database,
        Kind::DatabaseQuery,
        Kind::ItemNotFound,
        Kind::Auth,
        Kind::Authentication,
        Kind::Authorization,
        Kind::Http,
        Kind::HttpRequest,
        Kind::NotFound,
        Kind::MethodNotAllowed,
        Kind::HttpResponse,
    ];

    /// The kind name shared by every copy of the taxonomy.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Serious => "SeriousError",
            Kind::Input => "InputError",
            Kind::MissingInput => "MissingInputError",
            Kind::InvalidInput => "InvalidInputError",
            Kind::MissingArgument => "MissingArgumentError",
            Kind::InvalidArgument => "InvalidArgumentError",
            Kind::Database => "DatabaseError",
            Kind::DatabaseQuery => "DatabaseQueryError",
            Kind::ItemNotFound => "ItemNotFoundError",
            Kind::Auth => "AuthError",
            Kind::Authentication => "AuthenticationError",
            Kind::Authorization => "AuthorizationError",
            Kind::Http => "HTTPError",
            Kind::HttpRequest => "HTTPRequestError",
            Kind::NotFound => "NotFoundError",
            Kind::MethodNotAllowed => "MethodNotAllowedError",
            Kind::HttpResponse => "HTTPResponseError",
        }
    }

    /// Direct parent, `None` only for the root.
    pub fn parent(self) -> Option<Kind> {
        match self {
            Kind::Serious => None,
            Kind::Input | Kind::Database | Kind::Auth | Kind::Http => Some(Kind::Serious),
            Kind::MissingInput
            | Kind::InvalidInput
            | Kind::MissingArgument
            | Kind::InvalidArgument => Some(Kind::Input),
            Kind::DatabaseQuery | Kind::ItemNotFound => Some(Kind::Database),
            Kind::Authentication | Kind::Authorization => Some(Kind::Auth),
            Kind::HttpRequest | Kind::HttpResponse => Some(Kind::Http),
            Kind::NotFound | Kind::MethodNotAllowed => Some(Kind::HttpRequest),
        }
    }

    /// Look a kind up by its name.
    pub fn from_name(name: &str) -> Option<Kind> {
        REGISTRY.get(name).copied()
    }

    /// Strict ancestors, nearest first, ending at the root.
    pub fn ancestors(self) -> Ancestors {
        Ancestors { next: self.parent() }
    }

    /// The kind itself followed by its ancestors.
    pub fn lineage(self) -> Ancestors {
        Ancestors { next: Some(self) }
    }

    /// Direct children in declaration order.
    pub fn children(self) -> impl Iterator<Item = Kind> {
        Kind::ALL
            .into_iter()
            .filter(move |kind| kind.parent() == Some(self))
    }

    pub fn is_root(self) -> bool {
        self == Kind::ROOT
    }

    /// A leaf kind has no subkinds.
    pub fn is_leaf(self) -> bool {
        self.children().next().is_none()
    }

    /// True when `self` is `other` or lies below it in the tree.
    pub fn is_a(self, other: Kind) -> bool {
        self.lineage().any(|kind| kind == other)
    }

    /// The category branch directly under the root, `None` for the root itself.
    pub fn category(self) -> Option<Kind> {
        self.lineage().find(|kind| kind.parent() == Some(Kind::ROOT))
    }

    /// Depth below the root (the root is 0).
    pub fn depth(self) -> usize {
        self.ancestors().count()
    }
}

/// Parent name of a registered kind name. Unknown names have no parent.
pub fn parent_name(name: &str) -> Option<&'static str> {
    Kind::from_name(name)
        .and_then(Kind::parent)
        .map(Kind::name)
}

/// Iterator over a kind's parent chain.
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<Kind>,
}

impl Iterator for Ancestors {
    type Item = Kind;

    fn next(&mut self) -> Option<Kind> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

// Kind-level string form, distinct from the instance form `[Name( message )]`.
impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {{}}]", self.name())
    }
}

impl FromStr for Kind {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self> {
        Kind::from_name(s).ok_or_else(|| TaxonomyError::UnknownKind {
            name: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique_and_registered() {
        let names: HashSet<&str> = Kind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), Kind::ALL.len());

        for kind in Kind::ALL {
            assert_eq!(Kind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(Kind::from_name("TypeError"), None);
    }

    #[test]
    fn test_every_chain_terminates_at_root() {
        for kind in Kind::ALL {
            let chain: Vec<Kind> = kind.lineage().take(Kind::ALL.len() + 1).collect();
            assert!(chain.len() <= Kind::ALL.len(), "{} has a cyclic chain", kind.name());
            assert_eq!(chain.last(), Some(&Kind::ROOT));
        }
    }

    #[test]
    fn test_parents_precede_children_in_all() {
        for (index, kind) in Kind::ALL.iter().enumerate() {
            if let Some(parent) = kind.parent() {
                let parent_index = Kind::ALL.iter().position(|k| *k == parent).unwrap();
                assert!(parent_index < index);
            }
        }
    }

    #[test]
    fn test_leaves_and_branches() {
        assert!(Kind::MethodNotAllowed.is_leaf());
        assert!(Kind::Authentication.is_leaf());
        assert!(Kind::HttpResponse.is_leaf());
        assert!(!Kind::HttpRequest.is_leaf());
        assert!(!Kind::Serious.is_leaf());

        let categories: Vec<Kind> = Kind::ROOT.children().collect();
        assert_eq!(
            categories,
            vec![Kind::Input, Kind::Database, Kind::Auth, Kind::Http]
        );
    }

    #[test]
    fn test_ancestry() {
        let chain: Vec<&str> = Kind::NotFound.ancestors().map(Kind::name).collect();
        assert_eq!(chain, vec!["HTTPRequestError", "HTTPError", "SeriousError"]);

        assert!(Kind::ItemNotFound.is_a(Kind::Database));
        assert!(Kind::ItemNotFound.is_a(Kind::ItemNotFound));
        assert!(!Kind::ItemNotFound.is_a(Kind::NotFound));
        assert_eq!(Kind::MethodNotAllowed.category(), Some(Kind::Http));
        assert_eq!(Kind::Serious.category(), None);
        assert_eq!(Kind::MethodNotAllowed.depth(), 3);
    }

    #[test]
    fn test_parent_name_lookup() {
        assert_eq!(parent_name("AuthorizationError"), Some("AuthError"));
        assert_eq!(parent_name("SeriousError"), None);
        assert_eq!(parent_name("RateLimitError"), None);
    }

    #[test]
    fn test_kind_display_and_parse() {
        assert_eq!(Kind::Http.to_string(), "[HTTPError {}]");
        assert_eq!("InputError".parse::<Kind>().unwrap(), Kind::Input);

        let err = "Nope".parse::<Kind>().unwrap_err();
        assert!(err.to_string().contains("Nope"));
    }
}
