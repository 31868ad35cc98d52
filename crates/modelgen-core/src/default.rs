//! Column default values.
//!
//! Databases report defaults as SQL text. Only plain literals are turned into Python
//! values; anything else (`CURRENT_TIMESTAMP`, `nextval('seq')`, `(datetime('now'))`)
//! is kept verbatim as [`ColumnDefault::Expression`] and never evaluated. The
//! SQLAlchemy emitter renders literals and skips expressions.

/// A Python literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum PyLiteral {
    Str(String),
    Int(i64),
    /// An integer outside the `i64` range, as decimal digits.
    BigInt(String),
    Float(f64),
    Bool(bool),
}

impl PyLiteral {
    /// Render the value the way Python's `repr()` would.
    pub fn to_python(&self) -> String {
        match self {
            PyLiteral::Str(s) => python_str_repr(s),
            PyLiteral::Int(i) => i.to_string(),
            PyLiteral::BigInt(digits) => digits.clone(),
            PyLiteral::Float(f) => python_float_repr(*f),
            PyLiteral::Bool(true) => "True".to_string(),
            PyLiteral::Bool(false) => "False".to_string(),
        }
    }
}

/// A column's declared default.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnDefault {
    /// A literal value, rendered as `default=<repr>`.
    Literal(PyLiteral),

    /// A server-side expression, kept as raw SQL text.
    Expression(String),
}

impl ColumnDefault {
    /// Parse a default as SQL text (SQLite `dflt_value`, PostgreSQL `column_default`).
    ///
    /// Returns `None` for an empty or `NULL` default.
    pub fn from_sql(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let inner = strip_outer_parens(trimmed);
        let (value, cast) = split_cast(inner);

        if value.eq_ignore_ascii_case("null") {
            return None;
        }

        if let Some(s) = parse_quoted(value) {
            // PostgreSQL quotes negative numbers: '-1'::integer
            if cast.is_some_and(is_numeric_type) {
                if let Some(number) = parse_numeric(&s) {
                    return Some(ColumnDefault::Literal(number));
                }
            }
            return Some(ColumnDefault::Literal(PyLiteral::Str(s)));
        }

        if let Some(literal) = parse_bare(value) {
            return Some(ColumnDefault::Literal(literal));
        }

        Some(ColumnDefault::Expression(trimmed.to_string()))
    }

    /// Build a default from an unquoted value (MySQL `COLUMN_DEFAULT`).
    ///
    /// MySQL reports string defaults without quotes and flags expression defaults
    /// separately, so the caller says which one it has.
    pub fn from_unquoted(raw: &str, is_expression: bool) -> Self {
        if is_expression {
            return ColumnDefault::Expression(raw.to_string());
        }
        match parse_numeric(raw.trim()) {
            Some(literal) => ColumnDefault::Literal(literal),
            None => ColumnDefault::Literal(PyLiteral::Str(raw.to_string())),
        }
    }

    /// The literal value, if this default is one.
    pub fn literal(&self) -> Option<&PyLiteral> {
        match self {
            ColumnDefault::Literal(literal) => Some(literal),
            ColumnDefault::Expression(_) => None,
        }
    }
}

/// Remove balanced wrapping parentheses: `((0))` -> `0`.
fn strip_outer_parens(mut s: &str) -> &str {
    while s.starts_with('(') && s.ends_with(')') && wraps_whole(s) {
        s = s[1..s.len() - 1].trim();
    }
    s
}

/// True when the opening paren at index 0 closes at the last character.
fn wraps_whole(s: &str) -> bool {
    let mut depth = 0usize;
    let mut in_quote = false;
    for (i, c) in s.char_indices() {
        match c {
            '\'' => in_quote = !in_quote,
            '(' if !in_quote => depth += 1,
            ')' if !in_quote => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i == s.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

/// Split off a trailing PostgreSQL cast: `'abc'::character varying` -> (`'abc'`, `character varying`).
fn split_cast(s: &str) -> (&str, Option<&str>) {
    let mut in_quote = false;
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'\'' => in_quote = !in_quote,
            b':' if !in_quote && bytes.get(i + 1) == Some(&b':') => {
                return (s[..i].trim_end(), Some(s[i + 2..].trim()));
            }
            _ => {}
        }
    }
    (s, None)
}

const NUMERIC_TYPES: &[&str] = &[
    "smallint",
    "integer",
    "bigint",
    "int2",
    "int4",
    "int8",
    "numeric",
    "decimal",
    "real",
    "double precision",
    "float4",
    "float8",
];

fn is_numeric_type(cast: &str) -> bool {
    let base = cast.split('(').next().unwrap_or_default().trim();
    NUMERIC_TYPES.iter().any(|t| base.eq_ignore_ascii_case(t))
}

/// Parse a single-quoted SQL string literal, `''` being an escaped quote.
fn parse_quoted(s: &str) -> Option<String> {
    let body = s.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\'' {
            // A lone quote inside means the text was not one literal
            if chars.next_if_eq(&'\'').is_none() {
                return None;
            }
        }
        out.push(c);
    }
    Some(out)
}

fn parse_bare(s: &str) -> Option<PyLiteral> {
    if s.eq_ignore_ascii_case("true") {
        return Some(PyLiteral::Bool(true));
    }
    if s.eq_ignore_ascii_case("false") {
        return Some(PyLiteral::Bool(false));
    }
    parse_numeric(s)
}

fn parse_numeric(s: &str) -> Option<PyLiteral> {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.is_empty()
        || !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        || !digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+'))
    {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(PyLiteral::Int(i));
    }
    if digits.chars().all(|c| c.is_ascii_digit()) {
        return Some(PyLiteral::BigInt(big_int_text(s)));
    }
    s.parse::<f64>().ok().map(PyLiteral::Float)
}

/// Canonical decimal text of an integer too wide for `i64`.
fn big_int_text(s: &str) -> String {
    let negative = s.starts_with('-');
    let digits = s.trim_start_matches(['-', '+']).trim_start_matches('0');
    match (negative, digits.is_empty()) {
        (_, true) => "0".to_string(),
        (true, false) => format!("-{digits}"),
        (false, false) => digits.to_string(),
    }
}

fn python_str_repr(s: &str) -> String {
    // Python prefers single quotes unless the text has one and no double quote
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Shortest round-trip digits, in exponent form outside `1e-4 <= |f| < 1e16`.
fn python_float_repr(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{f:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if f != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let plain = f.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

#[cfg(test)]
#[path = "default/default_tests.rs"]
mod default_tests;
