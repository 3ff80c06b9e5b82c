use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::spec::category::Category;
use crate::values::FieldValues;

/// Immutable result of a completed form fill. Created only after validation
/// passed; consumed by the confirmation renderer, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub category: Category,
    pub fields: FieldValues,
    pub submitted_at_utc: DateTime<Utc>,
}

impl SubmissionRecord {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>, serde_cbor::Error> {
        serde_cbor::to_vec(self)
    }
}
