use serde::Serialize;

use crate::spec::category::Category;

/// Input kind for a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    ShortText,
    LongText,
    Email,
    Phone,
    Numeric,
    /// Single choice from an enumerated option list.
    Choice(&'static [&'static str]),
    FreeText,
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::ShortText => "short_text",
            FieldKind::LongText => "long_text",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Numeric => "numeric",
            FieldKind::Choice(_) => "choice",
            FieldKind::FreeText => "free_text",
        }
    }

    pub fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            FieldKind::Choice(choices) => Some(choices),
            _ => None,
        }
    }
}

/// Describes one field of a category's field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
}

pub const RECURRENCE_CHOICES: &[&str] = &["unique", "mensuel", "trimestriel", "annuel"];
pub const AVAILABILITY_CHOICES: &[&str] = &["weekend", "semaine", "flexible"];

const NOM: FieldDescriptor = FieldDescriptor {
    name: "nom",
    kind: FieldKind::ShortText,
    required: true,
    label: "Nom",
    placeholder: Some("Votre nom"),
};

const EMAIL: FieldDescriptor = FieldDescriptor {
    name: "email",
    kind: FieldKind::Email,
    required: true,
    label: "Email",
    placeholder: Some("votre@email.com"),
};

const CONTACT_FIELDS: &[FieldDescriptor] = &[
    NOM,
    EMAIL,
    FieldDescriptor {
        name: "telephone",
        kind: FieldKind::Phone,
        required: false,
        label: "Téléphone",
        placeholder: Some("+33 6 12 34 56 78"),
    },
    FieldDescriptor {
        name: "message",
        kind: FieldKind::LongText,
        required: true,
        label: "Message",
        placeholder: Some("Votre message..."),
    },
];

const DON_FIELDS: &[FieldDescriptor] = &[
    NOM,
    EMAIL,
    FieldDescriptor {
        name: "montant",
        kind: FieldKind::Numeric,
        required: true,
        label: "Montant (€)",
        placeholder: Some("50.00"),
    },
    FieldDescriptor {
        name: "recurrence",
        kind: FieldKind::Choice(RECURRENCE_CHOICES),
        required: true,
        label: "Récurrence",
        placeholder: None,
    },
    FieldDescriptor {
        name: "message",
        kind: FieldKind::FreeText,
        required: false,
        label: "Message (optionnel)",
        placeholder: Some("Un message pour nous..."),
    },
];

const BENEVOLAT_FIELDS: &[FieldDescriptor] = &[
    NOM,
    EMAIL,
    FieldDescriptor {
        name: "telephone",
        kind: FieldKind::Phone,
        required: true,
        label: "Téléphone",
        placeholder: Some("+33 6 12 34 56 78"),
    },
    FieldDescriptor {
        name: "disponibilite",
        kind: FieldKind::Choice(AVAILABILITY_CHOICES),
        required: true,
        label: "Disponibilité",
        placeholder: None,
    },
    FieldDescriptor {
        name: "competences",
        kind: FieldKind::FreeText,
        required: false,
        label: "Compétences / Domaines d'intérêt",
        placeholder: Some("Décrivez vos compétences ou domaines d'intérêt..."),
    },
    FieldDescriptor {
        name: "message",
        kind: FieldKind::FreeText,
        required: false,
        label: "Message (optionnel)",
        placeholder: Some("Votre message..."),
    },
];

const INFO_FIELDS: &[FieldDescriptor] = &[
    NOM,
    EMAIL,
    FieldDescriptor {
        name: "sujet",
        kind: FieldKind::ShortText,
        required: true,
        label: "Sujet",
        placeholder: Some("Sujet de votre demande"),
    },
    FieldDescriptor {
        name: "message",
        kind: FieldKind::LongText,
        required: true,
        label: "Message",
        placeholder: Some("Votre demande d'information..."),
    },
];

impl Category {
    /// The ordered field set for this category. Each match arm owns exactly
    /// its own schema, so a field/category mismatch cannot be constructed.
    pub fn field_set(self) -> &'static [FieldDescriptor] {
        match self {
            Category::Contact => CONTACT_FIELDS,
            Category::Don => DON_FIELDS,
            Category::Benevolat => BENEVOLAT_FIELDS,
            Category::Info => INFO_FIELDS,
        }
    }
}

/// Field set for an optional category; no fields are rendered until a
/// category is chosen.
pub fn fields_for(category: Option<Category>) -> &'static [FieldDescriptor] {
    category.map(Category::field_set).unwrap_or(&[])
}

/// Looks up a single descriptor within a category's field set.
pub fn descriptor(category: Category, name: &str) -> Option<&'static FieldDescriptor> {
    category.field_set().iter().find(|field| field.name == name)
}
