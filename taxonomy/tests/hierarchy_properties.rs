//! Classification properties checked across the whole kind set.

use taxonomy::{matches, Kind, QueryInfo, SeriousError};

fn instance_of(kind: Kind) -> SeriousError {
    match kind {
        Kind::MissingInput => SeriousError::missing_input("body", "email"),
        Kind::InvalidInput => SeriousError::invalid_input("body", "email", "number", "string"),
        Kind::MissingArgument => SeriousError::missing_argument(1, "name"),
        Kind::InvalidArgument => SeriousError::invalid_argument(0, "id", "string", "number"),
        Kind::DatabaseQuery => {
            SeriousError::database_query("Query failed", Some(&QueryInfo::for_table("users")))
        }
        Kind::ItemNotFound => SeriousError::item_not_found(Some(&QueryInfo::for_table("users"))),
        Kind::Authentication => SeriousError::authentication(),
        Kind::Authorization => SeriousError::authorization(),
        other => SeriousError::new(other, "generic"),
    }
}

#[test]
fn test_instance_matches_own_lineage() {
    for kind in Kind::ALL {
        let err = instance_of(kind);
        for ancestor in kind.lineage() {
            assert!(
                matches(&err, ancestor.name()).unwrap(),
                "{} should match {}",
                kind.name(),
                ancestor.name()
            );
        }
        assert!(matches(&err, "SeriousError").unwrap());
    }
}

#[test]
fn test_instance_rejects_unrelated_kinds() {
    for kind in Kind::ALL.into_iter().filter(|k| k.is_leaf()) {
        let err = instance_of(kind);
        for other in Kind::ALL {
            if kind.is_a(other) {
                continue;
            }
            assert!(
                !matches(&err, other.name()).unwrap(),
                "{} must not match {}",
                kind.name(),
                other.name()
            );
        }
    }
}

#[test]
fn test_kind_and_instance_string_forms() {
    for kind in Kind::ALL {
        assert_eq!(kind.to_string(), format!("[{} {{}}]", kind.name()));
        assert!(instance_of(kind)
            .to_string()
            .starts_with(&format!("[{}(", kind.name())));
    }
}

#[test]
fn test_json_never_leaks_stack_without_debug() {
    for kind in Kind::ALL {
        let err = instance_of(kind).with_stack("frame one\nframe two");

        let plain = serde_json::to_value(err.to_json(false)).unwrap();
        assert!(plain.get("stack").is_none());
        assert_eq!(plain["error"], kind.name());

        let debug = serde_json::to_value(err.to_json(true)).unwrap();
        assert_eq!(debug["stack"], serde_json::json!(["frame one", "frame two"]));
    }
}
