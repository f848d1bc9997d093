//! Rule-name aliases.

/// Map short rule aliases to their canonical name; identity otherwise.
pub fn normalize(name: &str) -> &str {
    match name {
        "int" => "integer",
        "bool" => "boolean",
        other => other,
    }
}
