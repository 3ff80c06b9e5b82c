use crate::spec::category::Category;
use crate::spec::field::{FieldKind, fields_for};
use crate::values::{FieldValue, FieldValues};

/// Generates a plausible example value per field of the active field set.
/// The output passes [`crate::validate`] for the same category.
pub fn generate(category: Option<Category>) -> FieldValues {
    let mut values = FieldValues::new();
    for field in fields_for(category) {
        let example = match field.kind {
            FieldKind::Email => "vous@exemple.fr".to_string(),
            FieldKind::Phone => "0612345678".to_string(),
            FieldKind::Numeric => "50.00".to_string(),
            FieldKind::Choice(choices) => choices
                .first()
                .map(|choice| choice.to_string())
                .unwrap_or_default(),
            FieldKind::LongText | FieldKind::FreeText => {
                "Exemple de message suffisamment détaillé.".to_string()
            }
            FieldKind::ShortText => format!("exemple-{}", field.name),
        };
        values.insert(field.name.to_string(), FieldValue::Text(example));
    }
    values
}
