use chrono::{TimeZone, Utc};
use engage_spec::{
    Category, ConfirmationBundle, FieldValue, FieldValues, SubmissionRecord,
    build_confirmation, fields_for, fields_schema, format_amount, render_json_ui, render_text,
};

fn fields(entries: &[(&str, &str)]) -> FieldValues {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), FieldValue::text(*value)))
        .collect()
}

fn don_record() -> SubmissionRecord {
    SubmissionRecord {
        category: Category::Don,
        fields: fields(&[
            ("nom", "Marie"),
            ("email", "marie@ex.com"),
            ("montant", "25"),
            ("recurrence", "mensuel"),
        ]),
        submitted_at_utc: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn field_sets_match_the_category_table() {
    let names = |category| {
        Category::field_set(category)
            .iter()
            .map(|field| field.name)
            .collect::<Vec<_>>()
    };

    assert_eq!(
        names(Category::Contact),
        ["nom", "email", "telephone", "message"]
    );
    assert_eq!(
        names(Category::Don),
        ["nom", "email", "montant", "recurrence", "message"]
    );
    assert_eq!(
        names(Category::Benevolat),
        ["nom", "email", "telephone", "disponibilite", "competences", "message"]
    );
    assert_eq!(names(Category::Info), ["nom", "email", "sujet", "message"]);

    assert!(fields_for(None).is_empty());
}

#[test]
fn optional_fields_are_not_required() {
    let telephone = Category::Contact
        .field_set()
        .iter()
        .find(|field| field.name == "telephone")
        .unwrap();
    assert!(!telephone.required);

    let telephone = Category::Benevolat
        .field_set()
        .iter()
        .find(|field| field.name == "telephone")
        .unwrap();
    assert!(telephone.required);
}

#[test]
fn amount_formatting_follows_recurrence() {
    assert_eq!(
        format_amount(&fields(&[("montant", "25"), ("recurrence", "mensuel")])).as_deref(),
        Some("25.00€ par mois")
    );
    assert_eq!(
        format_amount(&fields(&[("montant", "50.00"), ("recurrence", "unique")])).as_deref(),
        Some("50.00€")
    );
    assert_eq!(
        format_amount(&fields(&[("montant", "10"), ("recurrence", "annuel")])).as_deref(),
        Some("10.00€ par an")
    );
    assert_eq!(format_amount(&fields(&[("recurrence", "mensuel")])), None);
    assert_eq!(format_amount(&fields(&[("montant", "abc")])), None);
}

#[test]
fn unknown_category_label_falls_back_to_contact_bundle() {
    assert_eq!(
        ConfirmationBundle::for_raw("inconnu").title,
        ConfirmationBundle::for_category(Category::Contact).title
    );
    assert_eq!(
        ConfirmationBundle::for_raw("don").title,
        "Merci pour votre générosité !"
    );
}

#[test]
fn donation_confirmation_embeds_the_amount() {
    let confirmation = build_confirmation(&don_record());
    assert_eq!(confirmation.title, "Merci pour votre générosité !");
    assert_eq!(confirmation.amount_display.as_deref(), Some("25.00€ par mois"));
    assert!(confirmation.impact.starts_with("Votre don de 25.00€ par mois"));
    assert_eq!(confirmation.year, 2024);
}

#[test]
fn non_donation_confirmation_keeps_static_impact() {
    let record = SubmissionRecord {
        category: Category::Info,
        fields: fields(&[
            ("nom", "Ana"),
            ("email", "ana@ex.com"),
            ("sujet", "Adhésion"),
            ("message", "Comment adhérer à l'association ?"),
        ]),
        submitted_at_utc: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    };
    let confirmation = build_confirmation(&record);
    assert!(confirmation.amount_display.is_none());
    assert_eq!(
        confirmation.impact,
        ConfirmationBundle::for_category(Category::Info).impact
    );
}

#[test]
fn render_text_lists_the_summary_lines() {
    let text = render_text(&build_confirmation(&don_record()));
    assert!(text.contains("Merci pour votre générosité !"));
    assert!(text.contains("Nom : Marie"));
    assert!(text.contains("Type d'action : Don"));
    assert!(text.contains("Montant : 25.00€ par mois"));
    assert!(text.contains("envoyé à marie@ex.com"));
}

#[test]
fn render_json_ui_exposes_structure() {
    let ui = render_json_ui(&build_confirmation(&don_record()));
    assert_eq!(ui["category"], "don");
    assert_eq!(ui["category_label"], "Don");
    assert_eq!(ui["amount_display"], "25.00€ par mois");
    assert_eq!(ui["year"], 2024);
}

#[test]
fn schema_contains_required_properties() {
    let schema = fields_schema(Some(Category::Don));
    let props = schema.get("properties").unwrap().as_object().unwrap();
    assert!(props.contains_key("montant"));
    assert!(props.contains_key("recurrence"));
    assert_eq!(
        props["recurrence"]["enum"],
        serde_json::json!(["unique", "mensuel", "trimestriel", "annuel"])
    );

    let required = schema.get("required").unwrap().as_array().unwrap();
    assert!(required.iter().any(|value| value.as_str() == Some("montant")));
    assert!(!required.iter().any(|value| value.as_str() == Some("message")));

    let empty = fields_schema(None);
    assert!(empty["properties"].as_object().unwrap().is_empty());
    assert!(empty.get("required").is_none());
}
