use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Discriminant selecting which form variant is active.
///
/// Selecting a new category resets all field values and errors; a
/// [`crate::SubmissionRecord`] keeps its category forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Contact,
    Don,
    Benevolat,
    Info,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Contact,
        Category::Don,
        Category::Benevolat,
        Category::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Contact => "contact",
            Category::Don => "don",
            Category::Benevolat => "benevolat",
            Category::Info => "info",
        }
    }

    /// User-facing label, as shown in the category selector.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Contact => "Contact",
            Category::Don => "Don",
            Category::Benevolat => "Bénévolat",
            Category::Info => "Demande d'information",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "contact" => Ok(Category::Contact),
            "don" => Ok(Category::Don),
            "benevolat" => Ok(Category::Benevolat),
            "info" => Ok(Category::Info),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// Donation recurrence options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Unique,
    Mensuel,
    Trimestriel,
    Annuel,
}

impl Recurrence {
    pub const ALL: [Recurrence; 4] = [
        Recurrence::Unique,
        Recurrence::Mensuel,
        Recurrence::Trimestriel,
        Recurrence::Annuel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::Unique => "unique",
            Recurrence::Mensuel => "mensuel",
            Recurrence::Trimestriel => "trimestriel",
            Recurrence::Annuel => "annuel",
        }
    }

    /// Suffix appended to a formatted amount; one-off donations carry none.
    pub fn suffix_label(&self) -> Option<&'static str> {
        match self {
            Recurrence::Unique => None,
            Recurrence::Mensuel => Some("par mois"),
            Recurrence::Trimestriel => Some("par trimestre"),
            Recurrence::Annuel => Some("par an"),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "unique" => Ok(Recurrence::Unique),
            "mensuel" => Ok(Recurrence::Mensuel),
            "trimestriel" => Ok(Recurrence::Trimestriel),
            "annuel" => Ok(Recurrence::Annuel),
            other => Err(format!("unknown recurrence '{}'", other)),
        }
    }
}

/// Volunteer availability options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Weekend,
    Semaine,
    Flexible,
}

impl Availability {
    pub const ALL: [Availability; 3] = [
        Availability::Weekend,
        Availability::Semaine,
        Availability::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Weekend => "weekend",
            Availability::Semaine => "semaine",
            Availability::Flexible => "flexible",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "weekend" => Ok(Availability::Weekend),
            "semaine" => Ok(Availability::Semaine),
            "flexible" => Ok(Availability::Flexible),
            other => Err(format!("unknown availability '{}'", other)),
        }
    }
}
