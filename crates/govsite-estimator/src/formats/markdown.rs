//! Markdown output format.

use std::fmt::Write;

use super::{operating_lines, scope_lines, MANIFEST_PLACEHOLDER_NOTE};
use crate::plan::DerivedPlan;
use crate::weights::ScenarioId;

/// Markdown formatter for derived plans.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format a plan as Markdown.
    pub fn format(&self, plan: &DerivedPlan) -> String {
        let mut md = String::new();
        let _ = self.write(&mut md, plan);
        md
    }

    fn write(&self, md: &mut String, plan: &DerivedPlan) -> std::fmt::Result {
        writeln!(md, "# {}\n", escape_markdown_header(&plan.title))?;
        if plan.scenario == ScenarioId::EvidencePackBuilder {
            writeln!(md, "> {MANIFEST_PLACEHOLDER_NOTE}\n")?;
        }

        writeln!(md, "## Scope\n")?;
        for (label, value) in scope_lines(plan) {
            writeln!(md, "- **{label}:** {value}")?;
        }
        md.push('\n');

        let operating = operating_lines(plan);
        if !operating.is_empty() {
            writeln!(md, "## Operating model\n")?;
            for (label, value) in operating {
                writeln!(md, "- **{label}:** {value}")?;
            }
            md.push('\n');
        }

        writeln!(md, "## Estimate\n")?;
        writeln!(md, "| Metric | Value |")?;
        writeln!(md, "|---|---|")?;
        writeln!(md, "| Duration | {} {} |", plan.duration, plan.unit)?;
        writeln!(md, "| Complexity multiplier | {:.2} |", plan.multiplier)?;
        writeln!(md, "| Band | {} |", plan.band)?;
        md.push('\n');

        writeln!(md, "### Drivers\n")?;
        for factor in &plan.factors {
            let mark = if factor.triggered { "x" } else { " " };
            writeln!(md, "- [{mark}] {} (×{})", factor.name, factor.multiplier)?;
        }
        md.push('\n');

        writeln!(md, "## Team\n")?;
        writeln!(md, "| Role | Allocation |")?;
        writeln!(md, "|---|---|")?;
        for role in &plan.roster {
            writeln!(md, "| {} | {} {} |", role.role, role.amount, role.unit)?;
        }
        md.push('\n');

        writeln!(md, "## {}\n", escape_markdown_header(&plan.deliverables_heading))?;
        for (i, item) in plan.deliverables.iter().enumerate() {
            writeln!(md, "{}. {item}", i + 1)?;
        }

        if !plan.evidence.is_empty() {
            writeln!(md, "\n## Evidence checklist\n")?;
            for control in &plan.evidence {
                writeln!(
                    md,
                    "- **{}** {} _({})_",
                    control.framework.label(),
                    control.reference,
                    control.status.name()
                )?;
            }
        }
        Ok(())
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape markdown injection in headers.
fn escape_markdown_header(s: &str) -> String {
    s.replace('#', "\\#").replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_header_escaping() {
        let escaped = escape_markdown_header("## Injected Header\n\nMalicious");
        assert!(!escaped.contains('\n'));
        assert!(escaped.contains("\\#\\# Injected Header"));
    }
}
