/// Primary keys in the portfolio schema are MySQL signed integers.
pub type DbId = i64;

/// A pass-through record keyed by column name.
///
/// Used for tables the API serves verbatim (skills, education, internships).
pub type Record = serde_json::Map<String, serde_json::Value>;
