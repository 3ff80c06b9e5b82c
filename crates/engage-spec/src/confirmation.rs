use chrono::Datelike;
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::{Value, json};

use crate::spec::category::{Category, Recurrence};
use crate::submission::SubmissionRecord;
use crate::values::{FieldValues, text};

/// Static message copy shown on the confirmation view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationBundle {
    pub title: &'static str,
    pub impact: &'static str,
    pub project: &'static str,
}

const CONTACT_BUNDLE: ConfirmationBundle = ConfirmationBundle {
    title: "Merci pour votre message !",
    impact: "Votre message a été reçu et sera traité dans les plus brefs délais. Notre équipe vous répondra sous 48 heures.",
    project: "Cette année, nous nous concentrons sur l'amélioration de notre communication et de notre réactivité avec nos partenaires et supporters.",
};

const DON_BUNDLE: ConfirmationBundle = ConfirmationBundle {
    title: "Merci pour votre générosité !",
    impact: "Votre don contribue directement à nos projets et permet de faire une réelle différence dans la vie de nombreuses personnes.",
    project: "En 2024, nous avons pour objectif de financer 10 nouveaux projets d'aide sociale et d'éducation. Votre contribution nous rapproche de cet objectif.",
};

const BENEVOLAT_BUNDLE: ConfirmationBundle = ConfirmationBundle {
    title: "Merci pour votre engagement !",
    impact: "Votre volonté de nous aider en tant que bénévole est précieuse. Nous vous contacterons très prochainement pour discuter des opportunités disponibles.",
    project: "En 2024, nous développons de nouveaux programmes de bénévolat dans les domaines de l'éducation, de l'environnement et de l'aide sociale. Votre participation est essentielle.",
};

const INFO_BUNDLE: ConfirmationBundle = ConfirmationBundle {
    title: "Votre demande a été reçue !",
    impact: "Nous avons bien reçu votre demande d'information et nous vous répondrons dans les plus brefs délais avec toutes les informations demandées.",
    project: "En 2024, nous renforçons notre transparence et notre communication pour mieux informer nos partenaires et le public sur nos actions et nos projets.",
};

const DON_IMPACT_TEMPLATE: &str = "Votre don de {{amount}} contribue directement à nos projets et permet de faire une réelle différence dans la vie de nombreuses personnes.";

impl ConfirmationBundle {
    pub fn for_category(category: Category) -> &'static ConfirmationBundle {
        match category {
            Category::Contact => &CONTACT_BUNDLE,
            Category::Don => &DON_BUNDLE,
            Category::Benevolat => &BENEVOLAT_BUNDLE,
            Category::Info => &INFO_BUNDLE,
        }
    }

    /// Bundle lookup on an untyped category label; unrecognized labels fall
    /// back to the contact bundle.
    pub fn for_raw(raw: &str) -> &'static ConfirmationBundle {
        raw.parse::<Category>()
            .map(Self::for_category)
            .unwrap_or(&CONTACT_BUNDLE)
    }
}

/// Fixed-point euro amount with a recurrence suffix for recurring donations,
/// e.g. `25.00€ par mois`. `None` when the amount is absent or not numeric.
pub fn format_amount(fields: &FieldValues) -> Option<String> {
    let amount = text(fields, "montant")?.trim().parse::<f64>().ok()?;
    let mut display = format!("{:.2}€", amount);
    if let Some(suffix) = text(fields, "recurrence")
        .and_then(|raw| raw.parse::<Recurrence>().ok())
        .and_then(|recurrence| recurrence.suffix_label())
    {
        display.push(' ');
        display.push_str(suffix);
    }
    Some(display)
}

/// Payload consumed by the confirmation renderers.
#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    pub title: String,
    pub category: Category,
    pub category_label: &'static str,
    pub name: Option<String>,
    pub email: Option<String>,
    pub amount_display: Option<String>,
    pub impact: String,
    pub project: String,
    pub year: i32,
}

/// Builds the confirmation payload for a submission record.
///
/// For donations with a formatted amount, the impact sentence embeds the
/// amount; the template degrades to the static sentence if rendering fails.
pub fn build_confirmation(record: &SubmissionRecord) -> Confirmation {
    let bundle = ConfirmationBundle::for_category(record.category);
    let amount_display =
        (record.category == Category::Don).then(|| format_amount(&record.fields)).flatten();

    let impact = match &amount_display {
        Some(amount) => Handlebars::new()
            .render_template(DON_IMPACT_TEMPLATE, &json!({ "amount": amount }))
            .unwrap_or_else(|_| bundle.impact.to_string()),
        None => bundle.impact.to_string(),
    };

    Confirmation {
        title: bundle.title.to_string(),
        category: record.category,
        category_label: record.category.label(),
        name: text(&record.fields, "nom").map(str::to_string),
        email: text(&record.fields, "email").map(str::to_string),
        amount_display,
        impact,
        project: bundle.project.to_string(),
        year: record.submitted_at_utc.year(),
    }
}

/// Renders the confirmation as human-friendly text.
pub fn render_text(confirmation: &Confirmation) -> String {
    let mut lines = Vec::new();
    lines.push(confirmation.title.clone());
    if let Some(name) = &confirmation.name {
        lines.push(format!("Nom : {}", name));
    }
    lines.push(format!("Type d'action : {}", confirmation.category_label));
    if let Some(amount) = &confirmation.amount_display {
        lines.push(format!("Montant : {}", amount));
    }
    lines.push(format!("Votre impact : {}", confirmation.impact));
    lines.push(format!(
        "Suivi du projet {} : {}",
        confirmation.year, confirmation.project
    ));
    let email = confirmation
        .email
        .as_deref()
        .unwrap_or("votre adresse email");
    lines.push(format!(
        "Un email de confirmation a été envoyé à {}",
        email
    ));
    lines.join("\n")
}

/// Renders the confirmation as a structured JSON-friendly value.
pub fn render_json_ui(confirmation: &Confirmation) -> Value {
    json!({
        "title": confirmation.title,
        "category": confirmation.category.as_str(),
        "category_label": confirmation.category_label,
        "name": confirmation.name,
        "email": confirmation.email,
        "amount_display": confirmation.amount_display,
        "impact": confirmation.impact,
        "project": confirmation.project,
        "year": confirmation.year,
    })
}
