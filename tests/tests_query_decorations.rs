//! Decoration queries: single-kind search, full sequences, typed terminal
//! unwraps, and the non-throwing probe family.

mod helpers;

use annoquery::query::{Probe, QueryError, query};
use annoquery::DecorationKind;
use helpers::{Column, Deprecated, Entity, Max, Required, Transient, PERSON};

#[test]
fn type_decoration_materializes_with_its_payload() {
    let entity = query(&*PERSON).annotation::<Entity>().unwrap().get::<Entity>().unwrap();
    assert_eq!(entity.name, "person");

    // The combined convenience form returns the same payload.
    let entity = query(&*PERSON).instance::<Entity>().unwrap();
    assert_eq!(entity.name, "person");
}

#[test]
fn field_decorations_list_in_declaration_order() {
    let listed = query(&*PERSON)
        .field("name")
        .unwrap()
        .annotations()
        .unwrap()
        .list()
        .unwrap();
    let kinds: Vec<DecorationKind> = listed.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [DecorationKind::of::<Column>(), DecorationKind::of::<Required>()]
    );

    let column = listed[0].downcast::<Column>().unwrap();
    assert_eq!(column.name, "NAME");
}

#[test]
fn method_and_constructor_decorations_are_reachable() {
    let listed = query(&*PERSON)
        .method("get_name")
        .unwrap()
        .annotations()
        .unwrap()
        .list()
        .unwrap();
    assert!(listed.iter().any(|d| d.is::<Deprecated>()));
    assert!(listed.iter().any(|d| d.is::<Transient>()));

    let deprecated = query(&*PERSON)
        .constructor(&["String", "Integer"])
        .unwrap()
        .instance::<Deprecated>();
    assert!(deprecated.is_ok());
}

#[test]
fn undecorated_elements_fail_the_all_kinds_search() {
    let err = query(&*PERSON)
        .field("nickname")
        .unwrap()
        .annotations()
        .unwrap_err();
    assert!(matches!(err, QueryError::DecorationNotFound { kind: None, .. }));

    let err = query(&*PERSON).constructor(&[]).unwrap().annotations().unwrap_err();
    assert!(matches!(err, QueryError::DecorationNotFound { kind: None, .. }));
}

#[test]
fn single_kind_and_all_kinds_searches_agree() {
    // If annotation::<T>() succeeds, T appears in the annotations() list.
    let field = query(&*PERSON).field("name").unwrap();
    assert!(field.annotation::<Required>().is_ok());
    let kinds: Vec<DecorationKind> = field
        .annotations()
        .unwrap()
        .list()
        .unwrap()
        .iter()
        .map(|d| d.kind())
        .collect();
    assert!(kinds.contains(&DecorationKind::of::<Required>()));

    // If annotations() fails, annotation::<T>() fails for every kind.
    let bare = query(&*PERSON).field("nickname").unwrap();
    assert!(bare.annotations().is_err());
    assert!(bare.annotation::<Required>().is_err());
    assert!(bare.annotation::<Column>().is_err());
    assert!(bare.annotation::<Max>().is_err());
}

#[test]
fn decoration_miss_names_the_kind_and_the_element() {
    let err = query(&*PERSON).field("age").unwrap().annotation::<Required>().unwrap_err();
    assert!(matches!(
        err,
        QueryError::DecorationNotFound { kind: Some("Required"), .. }
    ));
}

#[test]
fn list_is_only_valid_on_a_sequence_selection() {
    assert!(matches!(
        query(&*PERSON).list(),
        Err(QueryError::InvalidSelection { operation: "list", .. })
    ));
    let single = query(&*PERSON).annotation::<Entity>().unwrap();
    assert!(matches!(
        single.list(),
        Err(QueryError::InvalidSelection { operation: "list", .. })
    ));
}

#[test]
fn probe_matches_what_annotation_would_do() {
    let cases = [
        ("name", true),
        ("age", false),
        ("nickname", false),
    ];
    for (field, expected) in cases {
        let probed = query(&*PERSON).field(field).has::<Required>();
        let searched = query(&*PERSON)
            .field(field)
            .unwrap()
            .annotation::<Required>()
            .is_ok();
        assert_eq!(probed, expected);
        assert_eq!(probed, searched);
    }
}

#[test]
fn is_present_reports_the_result_boundary() {
    assert!(query(&*PERSON).field("name").is_present());
    assert!(!query(&*PERSON).field("missing").is_present());
    assert!(query(&*PERSON).field("name").unwrap().is_present());
    assert!(
        query(&*PERSON)
            .field("name")
            .unwrap()
            .annotation::<Required>()
            .is_present()
    );
    assert!(
        !query(&*PERSON)
            .field("name")
            .unwrap()
            .annotation::<Max>()
            .is_present()
    );
}

#[test]
fn probes_never_fail_even_on_illegal_chains() {
    // Every failure kind collapses to false: missing element, illegal
    // navigation, illegal selection, missing decoration.
    assert!(!query(&*PERSON).field("missing").has::<Required>());
    assert!(!query(&*PERSON).method("get_name").unwrap().field("x").has::<Required>());
    assert!(!query(&*PERSON).annotation::<Entity>().unwrap().has::<Entity>());
    assert!(!query(&*PERSON).field("nickname").has::<Required>());
}
