//! SQL identifier quoting utilities
//!
//! Provides safe quoting for the identifiers the journal splices into its
//! statements. Values never go through here; they are always bound.

use sha2::{Digest, Sha256};

/// Quote a SQL identifier to prevent injection.
///
/// Wraps the identifier in double quotes and escapes any embedded double quotes
/// by doubling them, following the SQL standard.
///
/// # Examples
/// ```
/// use ll_core::sql_utils::quote_ident;
/// assert_eq!(quote_ident("SchemaVersions"), r#""SchemaVersions""#);
/// assert_eq!(quote_ident(r#"my"table"#), r#""my""table""#);
/// ```
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Render a `(schema, table)` pair as a qualified, quoted identifier.
///
/// A missing or empty schema degrades to the bare quoted table identifier.
/// Dots inside either part are kept literally, never treated as separators.
///
/// # Examples
/// ```
/// use ll_core::sql_utils::quote_qualified;
/// assert_eq!(quote_qualified(Some("ops"), "SchemaVersions"), r#""ops"."SchemaVersions""#);
/// assert_eq!(quote_qualified(None, "SchemaVersions"), r#""SchemaVersions""#);
/// assert_eq!(quote_qualified(Some(""), "SchemaVersions"), r#""SchemaVersions""#);
/// ```
pub fn quote_qualified(schema: Option<&str>, table: &str) -> String {
    match schema.filter(|s| !s.is_empty()) {
        Some(schema) => format!("{}.{}", quote_ident(schema), quote_ident(table)),
        None => quote_ident(table),
    }
}

/// Quote a value as a single-quoted SQL string literal.
///
/// Only for places where the grammar demands a literal rather than a
/// parameter, such as the sequence name argument of `nextval`.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Derive an identifier made only of ASCII letters, digits and `_`.
///
/// The result needs no quoting anywhere, including inside a string literal
/// that DuckDB later parses as a name (`nextval('...')`). Names that are
/// already plain come back unchanged. Otherwise every other character
/// becomes `_` and the first 8 hex digits of the SHA-256 of the original
/// are appended, so `ta"ble` and `ta_ble` stay distinct.
///
/// # Examples
/// ```
/// use ll_core::sql_utils::plain_ident;
/// assert_eq!(plain_ident("SchemaVersions_Id_seq"), "SchemaVersions_Id_seq");
/// assert!(plain_ident(r#"ta"ble"#).starts_with("ta_ble_"));
/// ```
pub fn plain_ident(name: &str) -> String {
    let plain: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if plain == name {
        return plain;
    }
    let digest = format!("{:x}", Sha256::digest(name.as_bytes()));
    format!("{plain}_{}", &digest[..8])
}
