#![allow(non_snake_case)]

use super::*;
use proptest::prelude::*;
use std::io::Cursor;

// emit tests

#[test]
fn emit___customer_example___matches_expected_text() {
    let fields: FieldList = [("name", "str"), ("age", "int")].into_iter().collect();

    let code = emit("Customer", &fields);

    assert_eq!(
        code,
        "from pydantic import BaseModel\n\nclass Customer(BaseModel):\n    name: str\n    age: int"
    );
}

#[test]
fn emit___empty_fields___body_is_single_pass() {
    let code = emit("Empty", &FieldList::new());

    let body: Vec<&str> = code.lines().skip(3).collect();

    assert_eq!(body, vec!["    pass"]);
}

#[test]
fn emit___invalid_identifiers___passed_through_verbatim() {
    let fields: FieldList = [("first name", "not a type")].into_iter().collect();

    let code = emit("my class", &fields);

    assert!(code.contains("class my class(BaseModel):"));
    assert!(code.contains("    first name: not a type"));
}

#[test]
fn emit___no_trailing_newline() {
    let fields: FieldList = [("id", "int")].into_iter().collect();

    assert!(!emit("Row", &fields).ends_with('\n'));
}

proptest! {
    /// Property: one body line per field, in input order, `<4 spaces><name>: <type>`
    #[test]
    fn proptest_emit_preserves_field_order(
        names in prop::collection::hash_set("[a-z_][a-z0-9_]{0,8}", 1..12),
        ty in "[A-Za-z\\[\\]]{1,10}",
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let fields: FieldList = names.iter().map(|n| (n.clone(), ty.clone())).collect();

        let code = emit("Model", &fields);
        let body: Vec<&str> = code.lines().skip(3).collect();

        prop_assert_eq!(body.len(), names.len());
        for (line, name) in body.iter().zip(&names) {
            prop_assert_eq!(*line, format!("    {name}: {ty}"));
        }
    }
}

// parse_field_line tests

#[test]
fn parse_field_line___splits_and_trims() {
    let spec = parse_field_line("  email :  str ").unwrap();

    assert_eq!(spec, FieldSpec::new("email", "str"));
}

#[test]
fn parse_field_line___splits_on_first_colon_only() {
    let spec = parse_field_line("mapping:dict[str, int]:extra").unwrap();

    assert_eq!(spec.name, "mapping");
    assert_eq!(spec.declared_type, "dict[str, int]:extra");
}

#[test]
fn parse_field_line___missing_colon___returns_error() {
    let err = parse_field_line("email str").unwrap_err();

    assert_eq!(err, FieldLineError::MissingSeparator("email str".into()));
}

// prompt tests

#[test]
fn prompt_class_name___returns_trimmed_line() {
    let mut input = Cursor::new("  Customer \n");
    let mut output = Vec::new();

    let name = prompt_class_name(&mut input, &mut output).unwrap();

    assert_eq!(name.as_deref(), Some("Customer"));
    assert_eq!(String::from_utf8(output).unwrap(), "Enter class name: ");
}

#[test]
fn prompt_class_name___end_of_input___returns_none() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();

    assert_eq!(prompt_class_name(&mut input, &mut output).unwrap(), None);
}

#[test]
fn prompt_fields___stops_at_done_case_insensitive() {
    let mut input = Cursor::new("name:str\nage:int\nDONE\nignored:bool\n");
    let mut output = Vec::new();

    let fields = prompt_fields(&mut input, &mut output).unwrap();

    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["name", "age"]);
}

#[test]
fn prompt_fields___malformed_line___prints_notice_and_continues() {
    let mut input = Cursor::new("name:str\nbogus\nage:int\ndone\n");
    let mut output = Vec::new();

    let fields = prompt_fields(&mut input, &mut output).unwrap();

    let printed = String::from_utf8(output).unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(printed.matches(INVALID_FIELD_NOTICE).count(), 1);
}

#[test]
fn prompt_fields___end_of_input___keeps_collected_fields() {
    let mut input = Cursor::new("name:str\n");
    let mut output = Vec::new();

    let fields = prompt_fields(&mut input, &mut output).unwrap();

    assert_eq!(fields.get("name"), Some("str"));
}

#[test]
fn prompt_fields___repeated_name___last_type_wins_first_position_kept() {
    let mut input = Cursor::new("a:int\nb:str\na:float\ndone\n");
    let mut output = Vec::new();

    let fields = prompt_fields(&mut input, &mut output).unwrap();

    let code = emit("M", &fields);
    assert!(code.ends_with("    a: float\n    b: str"));
}
