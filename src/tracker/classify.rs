use super::domain::Stage;
use std::collections::HashMap;
use std::sync::OnceLock;

static STAGE_SYNONYMS: OnceLock<HashMap<&'static str, Stage>> = OnceLock::new();

/// Map a record's free-text classification label to a stage.
///
/// Comparison is case-insensitive; labels outside the synonym table
/// (including absent and empty ones) map to no stage at all.
pub fn classify(raw_label: Option<&str>) -> Option<Stage> {
    let label = raw_label?;
    stage_synonyms()
        .get(label.to_ascii_lowercase().as_str())
        .copied()
}

fn stage_synonyms() -> &'static HashMap<&'static str, Stage> {
    STAGE_SYNONYMS.get_or_init(|| {
        const SYNONYM_TO_STAGE: &[(&str, Stage)] = &[
            ("applied", Stage::Submitted),
            ("submitted", Stage::Submitted),
            ("application received", Stage::Submitted),
            ("interview", Stage::Interview),
            ("oa", Stage::OnlineAssessment),
            ("online assessment", Stage::OnlineAssessment),
            ("rejected", Stage::Rejected),
        ];

        let mut map = HashMap::with_capacity(SYNONYM_TO_STAGE.len());
        for (synonym, stage) in SYNONYM_TO_STAGE {
            map.insert(*synonym, *stage);
        }
        map
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_synonym_regardless_of_case() {
        let cases = [
            ("applied", Stage::Submitted),
            ("APPLIED", Stage::Submitted),
            ("Submitted", Stage::Submitted),
            ("Application Received", Stage::Submitted),
            ("interview", Stage::Interview),
            ("Interview", Stage::Interview),
            ("oa", Stage::OnlineAssessment),
            ("OA", Stage::OnlineAssessment),
            ("Online Assessment", Stage::OnlineAssessment),
            ("rejected", Stage::Rejected),
            ("Rejected", Stage::Rejected),
            ("REJECTED", Stage::Rejected),
        ];
        for (label, expected) in cases {
            assert_eq!(classify(Some(label)), Some(expected), "label {label:?}");
        }
    }

    #[test]
    fn unknown_labels_map_to_no_stage() {
        assert_eq!(classify(Some("ghosted")), None);
        assert_eq!(classify(Some("")), None);
        assert_eq!(classify(None), None);
    }

    #[test]
    fn does_not_trim_surrounding_whitespace() {
        // Only case folding is applied; the producer controls its vocabulary.
        assert_eq!(classify(Some(" applied ")), None);
    }
}
