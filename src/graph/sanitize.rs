//! Mermaid-safe identifiers for namespaced model names.

/// Namespace separator used by the host's model names
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Replace every `::` with a single `_` so the name is a valid Mermaid entity id.
///
/// No other characters are touched.
pub fn sanitize(name: &str) -> String {
    name.replace(NAMESPACE_SEPARATOR, "_")
}
