use regex::Regex;

use crate::spec::category::{Availability, Category, Recurrence};
use crate::values::{ErrorMap, FieldValues, text};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
// Optional +33 or leading 0, then a digit 1-9 and four groups of two digits.
const PHONE_PATTERN: &str = r"^(\+33|0)[1-9](\d{2}){4}$";

/// Validates the field map for a category and returns one message per
/// violated field. An empty map means the submission is valid.
///
/// All rules are evaluated; there is no short-circuit past the category
/// gate. Fields not covered by a rule are never validated.
pub fn validate(category: Option<Category>, values: &FieldValues) -> ErrorMap {
    let mut errors = ErrorMap::new();

    let Some(category) = category else {
        errors.insert(
            "category".into(),
            "Veuillez sélectionner un type d'action".into(),
        );
        return errors;
    };

    if !text(values, "nom").is_some_and(|nom| nom.trim().chars().count() >= 2) {
        errors.insert(
            "nom".into(),
            "Le nom doit contenir au moins 2 caractères".into(),
        );
    }

    if !text(values, "email").is_some_and(is_valid_email) {
        errors.insert(
            "email".into(),
            "Veuillez entrer une adresse email valide".into(),
        );
    }

    match category {
        Category::Contact => {
            check_min_message(values, &mut errors);
        }
        Category::Don => {
            if !text(values, "montant").is_some_and(is_valid_amount) {
                errors.insert("montant".into(), "Veuillez entrer un montant valide".into());
            }
            let recurrence = text(values, "recurrence")
                .and_then(|raw| raw.parse::<Recurrence>().ok());
            if recurrence.is_none() {
                errors.insert(
                    "recurrence".into(),
                    "Veuillez sélectionner une récurrence".into(),
                );
            }
        }
        Category::Benevolat => {
            if !text(values, "telephone").is_some_and(is_valid_phone) {
                errors.insert(
                    "telephone".into(),
                    "Veuillez entrer un numéro de téléphone valide (format français)".into(),
                );
            }
            let availability = text(values, "disponibilite")
                .and_then(|raw| raw.parse::<Availability>().ok());
            if availability.is_none() {
                errors.insert(
                    "disponibilite".into(),
                    "Veuillez sélectionner une disponibilité".into(),
                );
            }
        }
        Category::Info => {
            if !text(values, "sujet").is_some_and(|sujet| sujet.trim().chars().count() >= 3) {
                errors.insert(
                    "sujet".into(),
                    "Le sujet doit contenir au moins 3 caractères".into(),
                );
            }
            check_min_message(values, &mut errors);
        }
    }

    errors
}

fn check_min_message(values: &FieldValues, errors: &mut ErrorMap) {
    if !text(values, "message").is_some_and(|message| message.trim().chars().count() >= 10) {
        errors.insert(
            "message".into(),
            "Le message doit contenir au moins 10 caractères".into(),
        );
    }
}

fn is_valid_email(email: &str) -> bool {
    matches_pattern(EMAIL_PATTERN, email)
}

fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    matches_pattern(PHONE_PATTERN, &cleaned)
}

fn is_valid_amount(raw: &str) -> bool {
    raw.trim()
        .parse::<f64>()
        .map(|amount| amount.is_finite() && amount > 0.0)
        .unwrap_or(false)
}

fn matches_pattern(pattern: &str, value: &str) -> bool {
    Regex::new(pattern)
        .map(|regex| regex.is_match(value))
        .unwrap_or(false)
}
