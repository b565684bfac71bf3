//! Output formats: plain text and Markdown.

pub mod markdown;
pub mod text;

pub use markdown::MarkdownFormatter;
pub use text::PlainTextFormatter;

use crate::plan::DerivedPlan;
use crate::weights::ScenarioId;

/// Note heading the evidence-pack manifest, which stands in for an archive.
pub const MANIFEST_PLACEHOLDER_NOTE: &str =
    "Plain-text manifest placeholder. No archive is generated.";

/// `Label: value` lines describing the plan's input snapshot.
pub(crate) fn scope_lines(plan: &DerivedPlan) -> Vec<(&'static str, String)> {
    let scope = &plan.input.scope;
    let mut lines = vec![
        (
            "Industry",
            scope
                .industry
                .map(|i| i.label().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Regions", scope.regions().to_string()),
        ("Frameworks", join_labels(scope.frameworks.iter().map(|f| f.label()))),
        ("AI systems", scope.agents().to_string()),
        ("Data sensitivity", scope.sensitivity.label().to_string()),
    ];
    if !scope.integrations.is_empty() {
        lines.push((
            "Integrations",
            join_labels(scope.integrations.iter().map(|i| i.label())),
        ));
    }
    lines
}

/// `Label: value` lines for the operating model, only for the managed service.
pub(crate) fn operating_lines(plan: &DerivedPlan) -> Vec<(&'static str, String)> {
    if plan.scenario != ScenarioId::ManagedServiceComposer {
        return Vec::new();
    }
    let op = &plan.input.operating;
    vec![
        ("Coverage", op.coverage.label().to_string()),
        ("Triage SLA", op.triage_sla.label().to_string()),
        ("Change SLA", op.change_sla.label().to_string()),
        ("DSAR SLA", op.dsar_sla.label().to_string()),
        ("Reporting SLA", op.reporting_sla.label().to_string()),
    ]
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    let joined = labels.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}
