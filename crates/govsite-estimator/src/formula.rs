//! The shared estimate formula: weight table + input snapshot → derived plan.

use smallvec::SmallVec;

use crate::evidence;
use crate::input::EstimatorInput;
use crate::plan::{AppliedFactor, Band, DerivedPlan, RoleAllocation, RosterUnit};
use crate::weights::{
    BandThresholds, FactorRule, Metric, RosterRule, RosterScale, ScenarioWeights, ScoreRule,
};

/// Multiplicative scenario estimate.
///
/// ```text
/// multiplier = Π factor_i        (untriggered factors count ×1)
/// duration   = ceil(base × multiplier)
/// roster     = ceil(duration × fraction)          (Fractions)
///            | ceil(base_fte × Π scales)          (Scaled)
/// band       = score < low_below    → Low
///              score < medium_below → Medium
///              otherwise            → High
/// ```
///
/// Pure: the same table and input always yield the same plan. Arithmetic is
/// plain IEEE-754 `f64`, rounded up with `ceil`.
pub fn estimate(weights: &ScenarioWeights, input: &EstimatorInput) -> DerivedPlan {
    let factors = evaluate_factors(weights.factors, input);
    let multiplier = factors
        .iter()
        .filter(|f| f.triggered)
        .fold(1.0, |acc, f| acc * f.multiplier);

    let duration = (weights.base * multiplier).ceil() as u32;

    let roster: SmallVec<[RoleAllocation; 4]> = match weights.roster {
        RosterRule::Fractions(roles) => roles
            .iter()
            .map(|&(role, fraction)| RoleAllocation {
                role: role.to_string(),
                amount: (duration as f64 * fraction).ceil() as u32,
                unit: RosterUnit::Duration(weights.unit),
            })
            .collect(),
        RosterRule::Scaled(roles) => roles
            .iter()
            .map(|role| {
                let scale = role
                    .scale_by
                    .iter()
                    .fold(1.0, |acc, s| acc * roster_scale(*s, input));
                RoleAllocation {
                    role: role.role.to_string(),
                    amount: (role.base * scale).ceil() as u32,
                    unit: RosterUnit::Fte,
                }
            })
            .collect(),
    };

    let score = match weights.score {
        ScoreRule::Multiplier => multiplier,
        ScoreRule::MultiplierWithCoverage => multiplier * input.operating.coverage.multiplier(),
    };

    let evidence = if weights.evidence_checklist {
        evidence::checklist(&input.scope)
    } else {
        Vec::new()
    };

    DerivedPlan {
        scenario: weights.id,
        title: weights.title.to_string(),
        input: input.clone(),
        factors,
        multiplier,
        duration,
        unit: weights.unit,
        roster,
        score,
        band: band_for(score, weights.thresholds),
        deliverables_heading: weights.deliverables_heading.to_string(),
        deliverables: weights.deliverables.iter().map(|d| d.to_string()).collect(),
        evidence,
    }
}

/// Evaluate every factor of the table against the input.
pub fn evaluate_factors(rules: &[FactorRule], input: &EstimatorInput) -> Vec<AppliedFactor> {
    rules
        .iter()
        .map(|rule| {
            let triggered = match *rule {
                FactorRule::Above {
                    metric, threshold, ..
                } => metric_value(metric, input) > threshold,
                FactorRule::SensitivityIs { tier, .. } => input.scope.sensitivity == tier,
            };
            AppliedFactor {
                name: rule.name().to_string(),
                multiplier: rule.multiplier(),
                triggered,
            }
        })
        .collect()
}

/// Bucket a score into a band.
pub fn band_for(score: f64, thresholds: BandThresholds) -> Band {
    if score < thresholds.low_below {
        Band::Low
    } else if score < thresholds.medium_below {
        Band::Medium
    } else {
        Band::High
    }
}

fn metric_value(metric: Metric, input: &EstimatorInput) -> u32 {
    let scope = &input.scope;
    match metric {
        Metric::FrameworkCount => scope.frameworks.len() as u32,
        Metric::Regions => scope.regions(),
        Metric::Agents => scope.agents(),
        Metric::IntegrationCount => scope.integrations.len() as u32,
    }
}

fn roster_scale(scale: RosterScale, input: &EstimatorInput) -> f64 {
    match scale {
        RosterScale::Coverage => input.operating.coverage.multiplier(),
        RosterScale::Sla(stream) => input.operating.sla(stream).multiplier(),
        RosterScale::RegionsAbove {
            threshold,
            multiplier,
        } => {
            if input.scope.regions() > threshold {
                multiplier
            } else {
                1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: BandThresholds = BandThresholds {
        low_below: 1.5,
        medium_below: 2.5,
    };

    #[test]
    fn test_band_boundaries() {
        assert_eq!(band_for(1.0, THRESHOLDS), Band::Low);
        assert_eq!(band_for(1.4999, THRESHOLDS), Band::Low);
        assert_eq!(band_for(1.5, THRESHOLDS), Band::Medium);
        assert_eq!(band_for(2.4999, THRESHOLDS), Band::Medium);
        assert_eq!(band_for(2.5, THRESHOLDS), Band::High);
        assert_eq!(band_for(9.0, THRESHOLDS), Band::High);
    }

    #[test]
    fn test_threshold_is_strictly_greater_than() {
        let rules = [FactorRule::Above {
            name: "regions",
            metric: Metric::Regions,
            threshold: 2,
            multiplier: 1.3,
        }];
        let mut input = EstimatorInput::default();
        input.scope.set_regions(2);
        assert!(!evaluate_factors(&rules, &input)[0].triggered);
        input.scope.set_regions(3);
        assert!(evaluate_factors(&rules, &input)[0].triggered);
    }
}
