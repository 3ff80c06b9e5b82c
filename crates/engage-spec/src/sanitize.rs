use crate::values::FieldValue;

/// Strips `<` and `>` and trims surrounding whitespace.
///
/// This blunts markup injection in free text; it is not a substitute for
/// output-context encoding by whatever renders the value later.
pub fn sanitize(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    stripped.trim().to_string()
}

/// Applies [`sanitize`] to text values; flags pass through unchanged.
pub fn sanitize_value(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(text) => FieldValue::Text(sanitize(&text)),
        flag @ FieldValue::Flag(_) => flag,
    }
}
