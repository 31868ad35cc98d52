#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn literal(raw: &str) -> PyLiteral {
    match ColumnDefault::from_sql(raw) {
        Some(ColumnDefault::Literal(literal)) => literal,
        other => panic!("expected literal for {raw:?}, got {other:?}"),
    }
}

// ColumnDefault::from_sql tests

#[test_case("0", PyLiteral::Int(0))]
#[test_case("42", PyLiteral::Int(42))]
#[test_case("-7", PyLiteral::Int(-7))]
#[test_case("1.5", PyLiteral::Float(1.5))]
#[test_case("'active'", PyLiteral::Str("active".into()))]
#[test_case("'it''s'", PyLiteral::Str("it's".into()))]
#[test_case("''", PyLiteral::Str(String::new()))]
#[test_case("TRUE", PyLiteral::Bool(true))]
#[test_case("false", PyLiteral::Bool(false))]
#[test_case("(0)", PyLiteral::Int(0))]
#[test_case("(('x'))", PyLiteral::Str("x".into()))]
#[test_case("'pending'::character varying", PyLiteral::Str("pending".into()))]
#[test_case("'-1'::integer", PyLiteral::Int(-1))]
#[test_case("'-2.5'::numeric", PyLiteral::Float(-2.5))]
#[test_case("'0.5'::numeric(4,2)", PyLiteral::Float(0.5))]
#[test_case("('-10'::bigint)", PyLiteral::Int(-10))]
#[test_case("'-0.25'::double precision", PyLiteral::Float(-0.25))]
#[test_case("'123'::character varying", PyLiteral::Str("123".into()))]
#[test_case("'-1'::text", PyLiteral::Str("-1".into()))]
#[test_case("'abc'::integer", PyLiteral::Str("abc".into()))]
#[test_case("99999999999999999999", PyLiteral::BigInt("99999999999999999999".into()))]
#[test_case("-0099999999999999999999", PyLiteral::BigInt("-99999999999999999999".into()))]
fn ColumnDefault___from_sql___parses_literals(raw: &str, expected: PyLiteral) {
    assert_eq!(literal(raw), expected);
}

#[test_case("CURRENT_TIMESTAMP")]
#[test_case("now()")]
#[test_case("nextval('users_id_seq'::regclass)")]
#[test_case("(datetime('now'))")]
#[test_case("'a' || 'b'")]
#[test_case("1-2")]
fn ColumnDefault___from_sql___keeps_expressions_verbatim(raw: &str) {
    assert_eq!(
        ColumnDefault::from_sql(raw),
        Some(ColumnDefault::Expression(raw.to_string()))
    );
}

#[test_case("")]
#[test_case("   ")]
#[test_case("NULL")]
#[test_case("null")]
#[test_case("NULL::character varying")]
fn ColumnDefault___from_sql___null_or_empty_is_none(raw: &str) {
    assert_eq!(ColumnDefault::from_sql(raw), None);
}

// ColumnDefault::from_unquoted tests

#[test]
fn ColumnDefault___from_unquoted___text_becomes_string_literal() {
    let default = ColumnDefault::from_unquoted("guest", false);

    assert_eq!(default, ColumnDefault::Literal(PyLiteral::Str("guest".into())));
}

#[test]
fn ColumnDefault___from_unquoted___numbers_stay_numeric() {
    assert_eq!(
        ColumnDefault::from_unquoted("10", false),
        ColumnDefault::Literal(PyLiteral::Int(10))
    );
    assert_eq!(
        ColumnDefault::from_unquoted("0.25", false),
        ColumnDefault::Literal(PyLiteral::Float(0.25))
    );
}

#[test]
fn ColumnDefault___from_unquoted___flagged_expression_is_kept_raw() {
    let default = ColumnDefault::from_unquoted("CURRENT_TIMESTAMP", true);

    assert_eq!(default, ColumnDefault::Expression("CURRENT_TIMESTAMP".into()));
    assert!(default.literal().is_none());
}

// PyLiteral::to_python tests

#[test_case(PyLiteral::Str("abc".into()), "'abc'")]
#[test_case(PyLiteral::Str("it's".into()), "\"it's\"")]
#[test_case(PyLiteral::Str("both ' and \"".into()), "'both \\' and \"'")]
#[test_case(PyLiteral::Str("a\\b".into()), "'a\\\\b'")]
#[test_case(PyLiteral::Str("line\nbreak".into()), "'line\\nbreak'")]
#[test_case(PyLiteral::Int(-3), "-3")]
#[test_case(PyLiteral::Float(2.0), "2.0")]
#[test_case(PyLiteral::Float(0.1), "0.1")]
#[test_case(PyLiteral::Float(-0.0), "-0.0")]
#[test_case(PyLiteral::Float(0.0001), "0.0001")]
#[test_case(PyLiteral::Float(1.5e-7), "1.5e-07")]
#[test_case(PyLiteral::Float(1e15), "1000000000000000.0")]
#[test_case(PyLiteral::Float(1e16), "1e+16")]
#[test_case(PyLiteral::Float(-2.5e20), "-2.5e+20")]
#[test_case(PyLiteral::Float(1e100), "1e+100")]
#[test_case(PyLiteral::Float(f64::INFINITY), "inf")]
#[test_case(PyLiteral::BigInt("99999999999999999999".into()), "99999999999999999999")]
#[test_case(PyLiteral::Bool(true), "True")]
#[test_case(PyLiteral::Bool(false), "False")]
fn PyLiteral___to_python___matches_python_repr(value: PyLiteral, expected: &str) {
    assert_eq!(value.to_python(), expected);
}
