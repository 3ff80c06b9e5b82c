//! JSON transport over the form engine.
//!
//! Every function takes and returns strings so the engine can sit behind any
//! UI shell. Errors never panic; they come back as `{"error": ...}`.

use serde_json::{Map, Value, json};
use thiserror::Error;

use engage_spec::{
    Category, ConfirmationBundle, FieldValues, FormController, FormError, SubmissionRecord,
    SubmitOutcome, build_confirmation, example_values, fields_for, fields_schema,
    render_json_ui, validate,
};

#[derive(Debug, Error)]
enum ComponentError {
    #[error("failed to parse fields: {0}")]
    FieldsParse(#[source] serde_json::Error),
    #[error("failed to parse record: {0}")]
    RecordParse(#[source] serde_json::Error),
    #[error("json encode error: {0}")]
    JsonEncode(#[source] serde_json::Error),
    #[error("form state error: {0}")]
    Form(#[from] FormError),
}

/// An empty or unrecognized label behaves like no selection at all: the
/// selector yields no fields and the validator reports the category error.
fn parse_category(raw: &str) -> Option<Category> {
    raw.trim().parse().ok()
}

fn parse_fields(fields_json: &str) -> Result<FieldValues, ComponentError> {
    if fields_json.trim().is_empty() {
        return Ok(FieldValues::new());
    }
    serde_json::from_str(fields_json).map_err(ComponentError::FieldsParse)
}

fn respond(result: Result<Value, ComponentError>) -> String {
    match result {
        Ok(value) => serde_json::to_string(&value).unwrap_or_else(|error| {
            json!({"error": format!("json encode: {}", error)}).to_string()
        }),
        Err(err) => json!({ "error": err.to_string() }).to_string(),
    }
}

fn descriptor_json(field: &engage_spec::FieldDescriptor) -> Value {
    let mut map = Map::new();
    map.insert("name".into(), Value::String(field.name.to_string()));
    map.insert("kind".into(), Value::String(field.kind.label().to_string()));
    map.insert("required".into(), Value::Bool(field.required));
    map.insert("label".into(), Value::String(field.label.to_string()));
    if let Some(placeholder) = field.placeholder {
        map.insert("placeholder".into(), Value::String(placeholder.to_string()));
    }
    if let Some(choices) = field.kind.choices() {
        map.insert(
            "choices".into(),
            Value::Array(
                choices
                    .iter()
                    .map(|choice| Value::String(choice.to_string()))
                    .collect(),
            ),
        );
    }
    Value::Object(map)
}

/// Category label and ordered field descriptors. An unknown category comes
/// back with an empty field list, never an error.
pub fn describe(category: &str) -> String {
    let category = parse_category(category);
    let fields = fields_for(category)
        .iter()
        .map(descriptor_json)
        .collect::<Vec<_>>();
    respond(Ok(json!({
        "category": category.map(|c| c.as_str()),
        "label": category.map(|c| c.label()),
        "fields": fields,
    })))
}

/// JSON Schema of the category's field set.
pub fn field_schema(category: &str) -> String {
    respond(Ok(fields_schema(parse_category(category))))
}

/// Example field values that pass validation for the category.
pub fn example_fields(category: &str) -> String {
    let result = serde_json::to_value(example_values(parse_category(category)))
        .map_err(ComponentError::JsonEncode);
    respond(result)
}

/// Validates a field map; `{"valid": bool, "errors": {field: message}}`.
pub fn validate_fields(category: &str, fields_json: &str) -> String {
    let result = parse_fields(fields_json).map(|values| {
        let errors = validate(parse_category(category), &values);
        json!({
            "valid": errors.is_empty(),
            "errors": errors,
        })
    });
    respond(result)
}

/// Drives a full controller session over the given fields and returns either
/// the submission record or the validation errors. The embedding shell owns
/// any simulated delay; here the pending submission completes immediately.
pub fn submit(category: &str, fields_json: &str) -> String {
    let result = parse_fields(fields_json).and_then(|values| {
        let outcome = run_session(parse_category(category), values)?;
        match outcome {
            SessionOutcome::Submitted(record) => {
                let record = serde_json::to_value(&record).map_err(ComponentError::JsonEncode)?;
                Ok(json!({ "status": "submitted", "record": record }))
            }
            SessionOutcome::Invalid(errors) => Ok(json!({
                "status": "invalid",
                "errors": errors,
            })),
        }
    });
    respond(result)
}

enum SessionOutcome {
    Submitted(SubmissionRecord),
    Invalid(engage_spec::ErrorMap),
}

fn run_session(
    category: Option<Category>,
    values: FieldValues,
) -> Result<SessionOutcome, ComponentError> {
    let Some(category) = category else {
        return Ok(SessionOutcome::Invalid(validate(None, &values)));
    };
    let mut controller = FormController::new();
    controller.select_category(category)?;
    for (name, value) in values {
        controller.edit_field(&name, value)?;
    }
    match controller.submit()? {
        SubmitOutcome::Rejected => Ok(SessionOutcome::Invalid(controller.errors().clone())),
        SubmitOutcome::Accepted => Ok(SessionOutcome::Submitted(
            controller.complete_submission()?,
        )),
    }
}

/// Confirmation payload for a previously produced submission record.
pub fn confirmation(record_json: &str) -> String {
    let result = serde_json::from_str::<SubmissionRecord>(record_json)
        .map_err(ComponentError::RecordParse)
        .map(|record| render_json_ui(&build_confirmation(&record)));
    respond(result)
}

/// Static confirmation copy for a category label, with the contact fallback.
pub fn confirmation_copy(category: &str) -> String {
    let bundle = ConfirmationBundle::for_raw(category);
    respond(Ok(json!({
        "title": bundle.title,
        "impact": bundle.impact,
        "project": bundle.project,
    })))
}
