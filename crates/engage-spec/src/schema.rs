use serde_json::{Map, Value, json};

use crate::spec::category::Category;
use crate::spec::field::{FieldDescriptor, FieldKind, fields_for};

/// JSON Schema for the active field set: one string property per field,
/// `enum` for choice fields, a `required` array, and no extra properties.
/// `None` yields a schema accepting only the empty object.
pub fn fields_schema(category: Option<Category>) -> Value {
    let fields = fields_for(category);

    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in fields {
        properties.insert(field.name.to_string(), property_schema(field));
        if field.required {
            required.push(Value::String(field.name.to_string()));
        }
    }

    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("object".into()));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".into(), Value::Array(required));
    }
    schema.insert("additionalProperties".into(), Value::Bool(false));
    Value::Object(schema)
}

fn property_schema(field: &FieldDescriptor) -> Value {
    let mut prop = Map::new();
    prop.insert("type".into(), Value::String("string".into()));
    prop.insert("title".into(), Value::String(field.label.to_string()));
    match field.kind {
        FieldKind::Email => {
            prop.insert("format".into(), Value::String("email".into()));
        }
        FieldKind::Choice(choices) => {
            prop.insert(
                "enum".into(),
                Value::Array(
                    choices
                        .iter()
                        .map(|choice| Value::String(choice.to_string()))
                        .collect(),
                ),
            );
        }
        _ => {}
    }
    if let Some(placeholder) = field.placeholder {
        prop.insert("examples".into(), json!([placeholder]));
    }
    Value::Object(prop)
}
