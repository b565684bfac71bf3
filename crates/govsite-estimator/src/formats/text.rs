//! Plain-text output format.

use std::fmt::Write;

use super::{operating_lines, scope_lines, MANIFEST_PLACEHOLDER_NOTE};
use crate::plan::DerivedPlan;
use crate::weights::ScenarioId;

/// Plain-text formatter for derived plans.
pub struct PlainTextFormatter;

impl PlainTextFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format a plan as plain text.
    pub fn format(&self, plan: &DerivedPlan) -> String {
        let mut out = String::new();
        // fmt::Write into a String is infallible.
        let _ = self.write(&mut out, plan);
        out
    }

    fn write(&self, out: &mut String, plan: &DerivedPlan) -> std::fmt::Result {
        writeln!(out, "{}", plan.title)?;
        writeln!(out, "{}", "=".repeat(plan.title.chars().count()))?;
        if plan.scenario == ScenarioId::EvidencePackBuilder {
            writeln!(out, "{MANIFEST_PLACEHOLDER_NOTE}")?;
        }
        writeln!(out)?;

        for (label, value) in scope_lines(plan).into_iter().chain(operating_lines(plan)) {
            writeln!(out, "{label}: {value}")?;
        }
        writeln!(out)?;

        writeln!(out, "Estimated duration: {} {}", plan.duration, plan.unit)?;
        writeln!(out, "Complexity multiplier: {:.2}", plan.multiplier)?;
        writeln!(out, "Band: {}", plan.band)?;

        let triggered: Vec<&str> = plan.triggered_factors().collect();
        if !triggered.is_empty() {
            writeln!(out, "Drivers: {}", triggered.join(", "))?;
        }
        writeln!(out)?;

        writeln!(out, "Team")?;
        for role in &plan.roster {
            writeln!(out, "- {}: {} {}", role.role, role.amount, role.unit)?;
        }
        writeln!(out)?;

        writeln!(out, "{}", plan.deliverables_heading)?;
        for item in &plan.deliverables {
            writeln!(out, "- {item}")?;
        }

        if !plan.evidence.is_empty() {
            writeln!(out)?;
            writeln!(out, "Evidence checklist")?;
            for control in &plan.evidence {
                writeln!(
                    out,
                    "- [{}] {}: {}",
                    control.status.name(),
                    control.framework.label(),
                    control.reference
                )?;
            }
        }
        Ok(())
    }
}

impl Default for PlainTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}
