use engage_spec::{
    Category, FieldValue, FieldValues, example_values, sanitize, validate,
};

fn fields(entries: &[(&str, &str)]) -> FieldValues {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), FieldValue::text(*value)))
        .collect()
}

#[test]
fn missing_category_reports_only_category() {
    let errors = validate(None, &fields(&[("nom", "Marie"), ("email", "a@b.com")]));
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("category"));
}

#[test]
fn empty_fields_report_common_and_specific_requirements() {
    for category in Category::ALL {
        let errors = validate(Some(category), &FieldValues::new());
        assert!(errors.contains_key("nom"), "{category}: nom");
        assert!(errors.contains_key("email"), "{category}: email");
    }

    let contact = validate(Some(Category::Contact), &FieldValues::new());
    assert!(contact.contains_key("message"));

    let don = validate(Some(Category::Don), &FieldValues::new());
    assert!(don.contains_key("montant"));
    assert!(don.contains_key("recurrence"));

    let benevolat = validate(Some(Category::Benevolat), &FieldValues::new());
    assert!(benevolat.contains_key("telephone"));
    assert!(benevolat.contains_key("disponibilite"));

    let info = validate(Some(Category::Info), &FieldValues::new());
    assert!(info.contains_key("sujet"));
    assert!(info.contains_key("message"));
}

#[test]
fn email_shape_is_enforced() {
    let invalid = validate(
        Some(Category::Contact),
        &fields(&[
            ("nom", "Jo"),
            ("email", "bad"),
            ("message", "this is long enough"),
        ]),
    );
    assert!(invalid.contains_key("email"));
    assert_eq!(invalid.len(), 1);

    let valid = validate(
        Some(Category::Contact),
        &fields(&[
            ("nom", "Jo"),
            ("email", "a@b.com"),
            ("message", "this is long enough"),
        ]),
    );
    assert!(valid.is_empty());
}

#[test]
fn french_phone_shapes() {
    let base = |telephone: &str| {
        fields(&[
            ("nom", "Luc"),
            ("email", "luc@exemple.fr"),
            ("telephone", telephone),
            ("disponibilite", "weekend"),
        ])
    };

    assert!(!validate(Some(Category::Benevolat), &base("0612345678")).contains_key("telephone"));
    assert!(!validate(Some(Category::Benevolat), &base("+33612345678")).contains_key("telephone"));
    assert!(
        !validate(Some(Category::Benevolat), &base("06 12 34 56 78")).contains_key("telephone"),
        "spaces are stripped before matching"
    );
    assert!(validate(Some(Category::Benevolat), &base("12345")).contains_key("telephone"));
    assert!(validate(Some(Category::Benevolat), &base("0012345678")).contains_key("telephone"));
}

#[test]
fn donation_amount_must_be_positive() {
    let base = |montant: &str| {
        fields(&[
            ("nom", "Marie"),
            ("email", "marie@ex.com"),
            ("montant", montant),
            ("recurrence", "unique"),
        ])
    };

    assert!(validate(Some(Category::Don), &base("0")).contains_key("montant"));
    assert!(validate(Some(Category::Don), &base("-5")).contains_key("montant"));
    assert!(validate(Some(Category::Don), &base("abc")).contains_key("montant"));
    assert!(validate(Some(Category::Don), &base("50.00")).is_empty());
}

#[test]
fn recurrence_must_be_an_enumerated_value() {
    let submission = fields(&[
        ("nom", "Marie"),
        ("email", "marie@ex.com"),
        ("montant", "25"),
        ("recurrence", "hebdomadaire"),
    ]);
    assert!(validate(Some(Category::Don), &submission).contains_key("recurrence"));
}

#[test]
fn availability_must_be_an_enumerated_value() {
    let submission = fields(&[
        ("nom", "Luc"),
        ("email", "luc@exemple.fr"),
        ("telephone", "0612345678"),
        ("disponibilite", "jamais"),
    ]);
    assert!(validate(Some(Category::Benevolat), &submission).contains_key("disponibilite"));
}

#[test]
fn info_requires_subject_and_message_lengths() {
    let submission = fields(&[
        ("nom", "Ana"),
        ("email", "ana@ex.com"),
        ("sujet", "ab"),
        ("message", "too short"),
    ]);
    let errors = validate(Some(Category::Info), &submission);
    assert!(errors.contains_key("sujet"));
    assert!(errors.contains_key("message"));
}

#[test]
fn validation_is_pure_and_idempotent() {
    let submission = fields(&[("nom", "J"), ("email", "bad")]);
    let first = validate(Some(Category::Contact), &submission);
    let second = validate(Some(Category::Contact), &submission);
    assert_eq!(first, second);
}

#[test]
fn sanitize_strips_markup_and_whitespace() {
    assert_eq!(sanitize("<script>"), "script");
    assert_eq!(sanitize(" hello "), "hello");
    assert_eq!(sanitize("  <b>gras</b>  "), "bgras/b");
}

#[test]
fn example_values_pass_validation() {
    for category in Category::ALL {
        let values = example_values(Some(category));
        assert!(!values.is_empty());
        let errors = validate(Some(category), &values);
        assert!(errors.is_empty(), "{category}: {errors:?}");
    }
    assert!(example_values(None).is_empty());
}
