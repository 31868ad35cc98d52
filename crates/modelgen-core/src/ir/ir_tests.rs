#![allow(non_snake_case)]

use super::*;

// FieldList tests

#[test]
fn FieldList___insert___preserves_insertion_order() {
    let mut fields = FieldList::new();
    fields.insert("name", "str");
    fields.insert("age", "int");
    fields.insert("email", "str");

    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(names, vec!["name", "age", "email"]);
}

#[test]
fn FieldList___insert___duplicate_replaces_type_in_place() {
    let mut fields = FieldList::new();
    fields.insert("name", "str");
    fields.insert("age", "int");
    fields.insert("name", "Optional[str]");

    assert_eq!(fields.len(), 2);
    assert_eq!(fields.iter().next().unwrap().name, "name");
    assert_eq!(fields.get("name"), Some("Optional[str]"));
}

#[test]
fn FieldList___from_iter___builds_from_pairs() {
    let fields: FieldList = [("a", "int"), ("b", "float")].into_iter().collect();

    assert_eq!(fields.len(), 2);
    assert_eq!(fields.get("b"), Some("float"));
    assert_eq!(fields.get("c"), None);
}

#[test]
fn FieldList___new___is_empty() {
    assert!(FieldList::new().is_empty());
}

// ColumnSpec tests

#[test]
fn ColumnSpec___new___defaults_to_nullable_non_key() {
    let column = ColumnSpec::new("email", "VARCHAR");

    assert!(column.is_nullable);
    assert!(!column.is_primary_key);
    assert!(column.default.is_none());
}

#[test]
fn ColumnSpec___builders___set_flags() {
    let column = ColumnSpec::new("id", "INTEGER").primary_key().not_null();

    assert!(column.is_primary_key);
    assert!(!column.is_nullable);
}

// DatabaseSchema tests

#[test]
fn DatabaseSchema___table___finds_by_exact_name() {
    let schema = DatabaseSchema::new(vec![
        TableSchema::new("customers", vec![]),
        TableSchema::new("loans", vec![]),
    ]);

    assert!(schema.table("loans").is_some());
    assert!(schema.table("Loans").is_none());
    assert!(schema.table("missing").is_none());
}

#[test]
fn DatabaseSchema___table_names___keeps_reflection_order() {
    let schema = DatabaseSchema::new(vec![
        TableSchema::new("zeta", vec![]),
        TableSchema::new("alpha", vec![]),
    ]);

    let names: Vec<&str> = schema.table_names().collect();

    assert_eq!(names, vec!["zeta", "alpha"]);
}
