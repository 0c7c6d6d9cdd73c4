//! Navigation over the element model: fields, methods, constructors,
//! packages, and the capability gates between selection kinds.

mod helpers;

use annoquery::query::{Probe, QueryError, SelectionKind, query};
use helpers::{Deprecated, Required, PERSON};

#[test]
fn field_selects_the_declared_field() {
    let cursor = query(&*PERSON).field("name").unwrap();
    assert_eq!(cursor.selection_kind(), SelectionKind::Field);
    assert_eq!(cursor.describe(), "field `demo::people::Person::name`");
}

#[test]
fn missing_field_is_element_not_found() {
    let err = query(&*PERSON).field("missing").unwrap_err();
    assert!(matches!(
        err,
        QueryError::ElementNotFound { kind: "field", .. }
    ));
}

#[test]
fn nullary_method_form_matches_the_empty_signature() {
    let cursor = query(&*PERSON).method("get_name").unwrap();
    assert_eq!(cursor.selection_kind(), SelectionKind::Method);
    // get_name has no zero-argument overload problem; set_name does not
    // exist without parameters.
    assert!(matches!(
        query(&*PERSON).method("set_name"),
        Err(QueryError::ElementNotFound { kind: "method", .. })
    ));
}

#[test]
fn method_overloads_resolve_by_exact_signature() {
    assert!(query(&*PERSON).method_with("set_name", &["String"]).is_ok());
    assert!(query(&*PERSON).method_with("set_name", &["String", "String"]).is_ok());
    assert!(matches!(
        query(&*PERSON).method_with("set_name", &["Integer"]),
        Err(QueryError::ElementNotFound { kind: "method", .. })
    ));
}

#[test]
fn constructor_lookup_sees_only_public_constructors() {
    assert!(query(&*PERSON).constructor(&["String", "Integer"]).is_ok());
    assert!(query(&*PERSON).constructor(&[]).is_ok());
    // The private (String) constructor is declared but not accessible.
    assert!(matches!(
        query(&*PERSON).constructor(&["String"]),
        Err(QueryError::ElementNotFound { kind: "constructor", .. })
    ));
}

#[test]
fn package_of_a_type_carries_its_own_decorations() {
    let package = query(&*PERSON).package().unwrap();
    assert_eq!(package.selection_kind(), SelectionKind::Package);
    assert!(package.has::<helpers::Audited>());
}

#[test]
fn fields_wraps_each_declared_field_in_order() {
    let fields = query(&*PERSON).fields().unwrap();
    let names: Vec<String> = fields.iter().map(|c| c.describe()).collect();
    assert_eq!(
        names,
        [
            "field `demo::people::Person::name`",
            "field `demo::people::Person::age`",
            "field `demo::people::Person::nickname`",
        ]
    );
}

#[test]
fn fields_where_filters_on_the_per_field_cursor() {
    let required = query(&*PERSON)
        .fields_where(|cursor| cursor.has::<Required>())
        .unwrap();
    assert_eq!(required.len(), 1);
    assert_eq!(required[0].describe(), "field `demo::people::Person::name`");

    let none = query(&*PERSON)
        .fields_where(|cursor| cursor.has::<helpers::Max>())
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn a_method_selection_cannot_navigate_to_members() {
    let method = query(&*PERSON).method("get_name").unwrap();
    assert!(matches!(
        method.field("name"),
        Err(QueryError::InvalidNavigation { .. })
    ));
    assert!(matches!(
        method.method("get_name"),
        Err(QueryError::InvalidNavigation { .. })
    ));
    assert!(matches!(
        method.constructor(&["String", "Integer"]),
        Err(QueryError::InvalidNavigation { .. })
    ));
    assert!(matches!(
        method.fields(),
        Err(QueryError::InvalidNavigation { .. })
    ));
}

#[test]
fn identical_chains_yield_equal_results() {
    let first = query(&*PERSON)
        .constructor(&["String", "Integer"])
        .unwrap()
        .param("age")
        .unwrap()
        .instance::<helpers::Max>()
        .unwrap();
    let second = query(&*PERSON)
        .constructor(&["String", "Integer"])
        .unwrap()
        .param("age")
        .unwrap()
        .instance::<helpers::Max>()
        .unwrap();
    assert_eq!(*first, *second);

    let kinds = |listed: Vec<annoquery::Decoration>| {
        listed.iter().map(|d| d.kind()).collect::<Vec<_>>()
    };
    let first = kinds(query(&*PERSON).field("name").unwrap().annotations().unwrap().list().unwrap());
    let second = kinds(query(&*PERSON).field("name").unwrap().annotations().unwrap().list().unwrap());
    assert_eq!(first, second);
}

#[test]
fn a_cursor_survives_being_reused_after_navigation() {
    let root = query(&*PERSON);
    let _field = root.field("name").unwrap();
    // The original cursor is a value, not a session: it still selects the
    // type and can navigate again.
    assert_eq!(root.selection_kind(), SelectionKind::Type);
    assert!(root.method("get_name").is_ok());
}

#[test]
fn independent_chains_run_concurrently_without_coordination() {
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..50 {
                    assert!(query(&*PERSON).field("name").has::<Required>());
                    assert!(query(&*PERSON).method("get_name").has::<Deprecated>());
                    let max = query(&*PERSON)
                        .constructor(&["String", "Integer"])
                        .unwrap()
                        .arg(1)
                        .unwrap()
                        .instance::<helpers::Max>()
                        .unwrap();
                    assert_eq!(max.value, 20);
                }
            });
        }
    });
}
