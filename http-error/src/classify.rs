//! Classification of caught values ahead of normalization.
//!
//! Everything the normalizer branches on is decided here, once, into a closed
//! type; normalization then matches on it exhaustively.

use taxonomy::{is_tagged, matches_kind, ErrorLike, Kind};

/// Category that decides a status, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Already an HTTP error: its own status is reused.
    Http,
    Auth,
    Input,
    /// The "zero results" database leaf.
    ItemNotFound,
    /// Part of the taxonomy, but nothing above.
    Other,
}

impl Category {
    /// Kinds probed, highest priority first.
    const PROBES: [(Kind, Category); 4] = [
        (Kind::Http, Category::Http),
        (Kind::Auth, Category::Auth),
        (Kind::Input, Category::Input),
        (Kind::ItemNotFound, Category::ItemNotFound),
    ];
}

/// Outcome of classifying a caught value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified<'a> {
    Recognized {
        kind_name: &'a str,
        category: Category,
        status: Option<u16>,
    },
    Unrecognized,
}

/// Classify a candidate against the status-bearing categories.
///
/// # Errors
/// Propagates a corrupt-chain failure from the matcher.
pub fn classify(candidate: &dyn ErrorLike) -> taxonomy::Result<Classified<'_>> {
    if !is_tagged(candidate) {
        return Ok(Classified::Unrecognized);
    }

    let mut category = Category::Other;
    for (kind, probe) in Category::PROBES {
        if matches_kind(candidate, kind)? {
            category = probe;
            break;
        }
    }

    Ok(Classified::Recognized {
        kind_name: candidate
            .kind_name()
            .unwrap_or_else(|| candidate.type_name()),
        category,
        status: candidate.status(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxonomy::{Foreign, QueryInfo, SeriousError};

    fn category_of(candidate: &dyn ErrorLike) -> Option<Category> {
        match classify(candidate).unwrap() {
            Classified::Recognized { category, .. } => Some(category),
            Classified::Unrecognized => None,
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            category_of(&SeriousError::authorization()),
            Some(Category::Auth)
        );
        assert_eq!(
            category_of(&SeriousError::missing_input("query", "page")),
            Some(Category::Input)
        );
        assert_eq!(
            category_of(&SeriousError::item_not_found(Some(&QueryInfo::for_table("users")))),
            Some(Category::ItemNotFound)
        );
        assert_eq!(
            category_of(&SeriousError::database_query("boom", None)),
            Some(Category::Other)
        );
        assert_eq!(
            category_of(&SeriousError::new(Kind::Serious, "generic")),
            Some(Category::Other)
        );
    }

    #[test]
    fn test_recognized_fields() {
        let err = SeriousError::authentication();
        assert_eq!(
            classify(&err).unwrap(),
            Classified::Recognized {
                kind_name: "AuthenticationError",
                category: Category::Auth,
                status: None,
            }
        );
    }

    #[test]
    fn test_untagged_is_unrecognized() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "nope");
        assert_eq!(classify(&Foreign::new(&io)).unwrap(), Classified::Unrecognized);
    }
}
