use super::classify::classify;
use super::domain::{ApplicationRecord, Stage};

/// The three display columns of the board, each preserving the relative
/// order of the fetched records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedApplications {
    pub submitted: Vec<ApplicationRecord>,
    pub interview_and_assessment: Vec<ApplicationRecord>,
    pub rejected: Vec<ApplicationRecord>,
}

impl GroupedApplications {
    pub fn total(&self) -> usize {
        self.submitted.len() + self.interview_and_assessment.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Partition records into the display columns.
///
/// `Interview` and `OnlineAssessment` share a column; the distinct stage
/// stays derivable per record via [`classify`]. Records whose label matches
/// no synonym are excluded from every column, and that drop is the single
/// policy for unclassifiable records throughout the board (the card badge
/// re-derives the stage instead of falling back to `Submitted`).
pub fn group(records: impl IntoIterator<Item = ApplicationRecord>) -> GroupedApplications {
    let mut grouped = GroupedApplications::default();
    for record in records {
        match classify(record.raw_label.as_deref()) {
            Some(Stage::Submitted) => grouped.submitted.push(record),
            Some(Stage::Interview) | Some(Stage::OnlineAssessment) => {
                grouped.interview_and_assessment.push(record)
            }
            Some(Stage::Rejected) => grouped.rejected.push(record),
            None => {}
        }
    }
    grouped
}
