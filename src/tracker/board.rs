use super::classify::classify;
use super::domain::ApplicationRecord;
use super::fetch::{FetchError, TrackerClient, ViewScope};
use super::group::{group, GroupedApplications};
use chrono::{DateTime, Local};
use std::fmt::Write;
use tracing::error;

/// Display states of the board, mirroring loading / error / data.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardState {
    Loading,
    Loaded {
        grouped: GroupedApplications,
        /// Count before grouping, so dropped records still show in the total.
        fetched: usize,
        fetched_at: DateTime<Local>,
    },
    Failed(String),
}

/// One mounted board view: owns its transient state and the liveness scope
/// for its single fetch. A failed fetch is terminal until a fresh view is
/// mounted.
#[derive(Debug)]
pub struct BoardView {
    client: TrackerClient,
    scope: ViewScope,
    state: BoardState,
}

impl BoardView {
    pub fn new(client: TrackerClient) -> Self {
        Self {
            client,
            scope: ViewScope::new(),
            state: BoardState::Loading,
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Run the fetch-and-group flow once.
    ///
    /// A cancelled scope leaves the state untouched: an unmounted view
    /// applies neither data nor error.
    pub async fn mount(&mut self) {
        match self.client.fetch(&self.scope).await {
            Ok(records) => {
                let fetched = records.len();
                self.state = BoardState::Loaded {
                    grouped: group(records),
                    fetched,
                    fetched_at: Local::now(),
                };
            }
            Err(FetchError::Cancelled) => {}
            Err(err) => {
                error!("failed to fetch classifications: {err}");
                self.state = BoardState::Failed(err.to_string());
            }
        }
    }

    /// Render the board as plain text. `display_name` comes from the
    /// session; `None` greets a guest.
    pub fn render(&self, display_name: Option<&str>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Welcome, {}", display_name.unwrap_or("Guest"));

        match &self.state {
            BoardState::Loading => {
                out.push_str("Loading classifications...\n");
            }
            BoardState::Failed(message) => {
                let _ = writeln!(out, "Error: {message}");
            }
            BoardState::Loaded {
                grouped,
                fetched,
                fetched_at,
            } => {
                let _ = writeln!(
                    out,
                    "Last updated: {}",
                    fetched_at.format("%d %b %Y %H:%M:%S")
                );
                out.push('\n');
                let _ = writeln!(out, "Submitted: {}", grouped.submitted.len());
                let _ = writeln!(
                    out,
                    "Interview / assessment: {}",
                    grouped.interview_and_assessment.len()
                );
                let _ = writeln!(out, "Rejected: {}", grouped.rejected.len());
                let _ = writeln!(out, "Total fetched: {fetched}");

                render_column(&mut out, "Applications Submitted", &grouped.submitted);
                render_column(
                    &mut out,
                    "Interview & Assessment",
                    &grouped.interview_and_assessment,
                );
                render_column(&mut out, "Rejected", &grouped.rejected);
            }
        }
        out
    }
}

fn render_column(out: &mut String, title: &str, records: &[ApplicationRecord]) {
    let _ = writeln!(out, "\n{title} ({})", records.len());
    for record in records {
        // Every grouped record classifies; the badge re-derives the stage
        // instead of defaulting, keeping one policy for unknown labels.
        let badge = classify(record.raw_label.as_deref())
            .map(|stage| stage.to_string())
            .unwrap_or_default();
        let mut line = format!("  - {} [{badge}]", record.company_display());
        if let Some(role) = record.role.as_deref() {
            let _ = write!(line, " {role}");
        }
        if !record.date.is_empty() {
            let _ = write!(line, " ({})", record.date);
        }
        let _ = writeln!(out, "{line}");
    }
}

/// The sign-in affordance shown while no session exists. "Add Application"
/// style mutations stay out of this build entirely.
pub fn render_sign_in() -> String {
    let mut out = String::new();
    out.push_str("JobJourney\n");
    out.push_str("Automatically track your job applications.\n\n");
    out.push_str("Sign in with your identity provider to continue:\n");
    out.push_str("  jobjourney board --credential <token>\n");
    out.push_str("(or set JOBJOURNEY_CREDENTIAL in the environment)\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, company: Option<&str>, label: Option<&str>) -> ApplicationRecord {
        ApplicationRecord {
            id: id.to_string(),
            company: company.map(str::to_string),
            role: None,
            date: "2024-01-01".to_string(),
            raw_label: label.map(str::to_string),
        }
    }

    fn loaded_view(records: Vec<ApplicationRecord>) -> BoardView {
        let mut view = BoardView::new(TrackerClient::new("http://127.0.0.1:5050"));
        let fetched = records.len();
        view.state = BoardState::Loaded {
            grouped: group(records),
            fetched,
            fetched_at: Local::now(),
        };
        view
    }

    #[test]
    fn greets_guest_without_a_session() {
        let view = BoardView::new(TrackerClient::new("http://127.0.0.1:5050"));
        let rendered = view.render(None);
        assert!(rendered.starts_with("Welcome, Guest\n"));
        assert!(rendered.contains("Loading classifications..."));
    }

    #[test]
    fn renders_columns_with_badges_and_placeholder() {
        let view = loaded_view(vec![
            record("1", Some("Acme"), Some("Applied")),
            record("2", None, Some("oa")),
            record("3", Some("Beta"), Some("rejected")),
        ]);
        let rendered = view.render(Some("Jordan"));
        assert!(rendered.contains("Welcome, Jordan"));
        assert!(rendered.contains("Applications Submitted (1)"));
        assert!(rendered.contains("- Acme [Submitted]"));
        assert!(rendered.contains("Interview & Assessment (1)"));
        assert!(rendered.contains("- Unknown company [Online assessment]"));
        assert!(rendered.contains("Rejected (1)"));
        assert!(rendered.contains("- Beta [Rejected]"));
    }

    #[test]
    fn failed_state_renders_error_only() {
        let mut view = BoardView::new(TrackerClient::new("http://127.0.0.1:5050"));
        view.state = BoardState::Failed("tracker service answered HTTP 500".to_string());
        let rendered = view.render(None);
        assert!(rendered.contains("Error: tracker service answered HTTP 500"));
        assert!(!rendered.contains("Applications Submitted"));
    }

    #[test]
    fn total_counts_dropped_records_too() {
        let view = loaded_view(vec![
            record("1", Some("Acme"), Some("Applied")),
            record("2", Some("Beta"), Some("ghosted")),
        ]);
        let rendered = view.render(None);
        assert!(rendered.contains("Total fetched: 2"));
        assert!(rendered.contains("Submitted: 1"));
        assert!(!rendered.contains("Beta"));
    }
}
