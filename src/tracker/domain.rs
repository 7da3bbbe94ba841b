use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// Fixed classification buckets an application can land in. Derived from the
/// record's free-text label, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Submitted,
    Interview,
    OnlineAssessment,
    Rejected,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Submitted => "Submitted",
            Stage::Interview => "Interview",
            Stage::OnlineAssessment => "Online assessment",
            Stage::Rejected => "Rejected",
        };
        f.write_str(name)
    }
}

/// One application entry as returned by the remote classification service.
/// Read-only on this side; `id` is the only identity we rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default, rename = "predicted_label")]
    pub raw_label: Option<String>,
}

impl ApplicationRecord {
    /// Company display name with the placeholder applied.
    pub fn company_display(&self) -> &str {
        match self.company.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "Unknown company",
        }
    }
}

/// Coerce a fetched JSON body into records.
///
/// A non-array body becomes the empty list rather than an error; individual
/// items that fail validation (not an object, missing or empty `id`) are
/// skipped so one malformed entry cannot poison the whole response.
pub fn records_from_value(body: Value) -> Vec<ApplicationRecord> {
    let Value::Array(items) = body else {
        warn!("tracker payload was not an array; treating as empty");
        return Vec::new();
    };

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<ApplicationRecord>(item) {
            Ok(record) if record.id.trim().is_empty() => {
                warn!("skipping tracker record with empty id");
            }
            Ok(record) => records.push(record),
            Err(err) => {
                warn!("skipping malformed tracker record: {err}");
            }
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_non_array_body_to_empty() {
        assert!(records_from_value(json!({})).is_empty());
        assert!(records_from_value(json!("applied")).is_empty());
        assert!(records_from_value(Value::Null).is_empty());
    }

    #[test]
    fn parses_well_formed_items() {
        let records = records_from_value(json!([
            {
                "id": "1",
                "company": "Acme",
                "date": "2024-01-01",
                "predicted_label": "Applied",
                "role": "Backend Engineer"
            }
        ]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].company.as_deref(), Some("Acme"));
        assert_eq!(records[0].role.as_deref(), Some("Backend Engineer"));
        assert_eq!(records[0].raw_label.as_deref(), Some("Applied"));
    }

    #[test]
    fn skips_items_without_usable_id() {
        let records = records_from_value(json!([
            { "company": "Acme", "date": "2024-01-01", "predicted_label": "Applied" },
            { "id": "  ", "company": "Beta", "date": "2024-01-02" },
            { "id": "3", "company": "Gamma", "date": "2024-01-03" }
        ]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "3");
    }

    #[test]
    fn skips_non_object_items_but_keeps_the_rest() {
        let records = records_from_value(json!([
            "not a record",
            { "id": "7", "company": "Delta", "date": "2024-02-01" }
        ]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "7");
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let records = records_from_value(json!([{ "id": "9" }]));
        assert_eq!(records.len(), 1);
        assert!(records[0].company.is_none());
        assert!(records[0].role.is_none());
        assert!(records[0].raw_label.is_none());
        assert_eq!(records[0].date, "");
    }

    #[test]
    fn company_display_falls_back_to_placeholder() {
        let records = records_from_value(json!([
            { "id": "1", "date": "2024-01-01" },
            { "id": "2", "company": "   ", "date": "2024-01-02" },
            { "id": "3", "company": "Acme", "date": "2024-01-03" }
        ]));
        assert_eq!(records[0].company_display(), "Unknown company");
        assert_eq!(records[1].company_display(), "Unknown company");
        assert_eq!(records[2].company_display(), "Acme");
    }
}
