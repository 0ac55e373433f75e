//! Command implementations.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::report::{
    CompactnessSummary, ConsensusOutput, ConsensusSection, PlanScoreReport, RankingEntry,
    RankingOutput, ScoreOutput, ValidationOutput, ValidationReport,
};
use redistrict_compactness::{rank_by_compactness, score};
use redistrict_consensus::ConsensusBuilder;
use redistrict_grid::{check_dimensions, validate_plan};
use redistrict_survey::{district_winners, PlanGroup, PlanRecord, SeatTally, Survey, VoteGrid};
use tracing::{debug, info};

/// Build a consensus map for each requested group.
///
/// With no group, builds one for every reported group and skips groups
/// that have no plans.
pub fn consensus(config: &Config, survey: &Survey, group: Option<PlanGroup>) -> Result<ConsensusOutput> {
    let groups = match group {
        Some(group) => vec![group],
        None => PlanGroup::REPORTED.to_vec(),
    };
    let builder = ConsensusBuilder::with_rules(config.rules);

    let mut sections = Vec::with_capacity(groups.len());
    for group in groups {
        let grids = survey.grids(group);
        if grids.is_empty() {
            info!(group = group.title(), "no plans in group, skipping");
            continue;
        }

        let consensus = builder.build(&grids)?;
        let report = score(consensus.grid());
        info!(
            group = group.title(),
            plans = grids.len(),
            cut_edges = report.cut_edges,
            "consensus built"
        );

        sections.push(ConsensusSection {
            title: format!("{} (n={})", group.title(), grids.len()),
            plans: grids.len(),
            relaxed_districts: consensus.relaxed_districts().to_vec(),
            compactness: CompactnessSummary::from(&report),
            consensus: consensus.into_grid(),
        });
    }

    if sections.is_empty() {
        return Err(CliError::NoPlans("build a consensus from"));
    }
    Ok(ConsensusOutput { consensus: sections })
}

/// Compactness of every plan, in input order.
pub fn score_plans(survey: &Survey) -> Result<ScoreOutput> {
    if survey.is_empty() {
        return Err(CliError::NoPlans("score"));
    }

    let plans = survey
        .plans()
        .iter()
        .map(|plan| PlanScoreReport {
            name: plan.name.clone(),
            kind: plan.kind,
            compactness: CompactnessSummary::from(&score(&plan.districts)),
        })
        .collect();
    Ok(ScoreOutput { plans })
}

/// Plans ordered from most to least compact.
pub fn rank(survey: &Survey) -> Result<RankingOutput> {
    if survey.is_empty() {
        return Err(CliError::NoPlans("rank"));
    }

    let rankings = rank_by_compactness(survey.plans().iter().map(|p| (&p.districts, p)))
        .into_iter()
        .map(|r| RankingEntry {
            rank: r.rank,
            name: r.metadata.name.clone(),
            kind: r.metadata.kind,
            cut_edges: r.cut_edges,
            avg_pp: (r.average_score * 1000.0).round() / 1000.0,
        })
        .collect();
    Ok(RankingOutput { rankings })
}

/// Check every plan against the district rules and, for valid plans on
/// the reference board, report who wins each district.
pub fn validate(config: &Config, survey: &Survey) -> Result<ValidationOutput> {
    if survey.is_empty() {
        return Err(CliError::NoPlans("validate"));
    }

    let votes = VoteGrid::reference();
    let plans = survey
        .plans()
        .iter()
        .map(|plan| validate_record(config, plan, &votes))
        .collect();
    Ok(ValidationOutput { plans })
}

fn validate_record(config: &Config, plan: &PlanRecord, votes: &VoteGrid) -> ValidationReport {
    let mut report = ValidationReport {
        name: plan.name.clone(),
        valid: false,
        errors: Vec::new(),
        winners: None,
        hearts_won: None,
        clubs_won: None,
    };

    if let Err(e) = check_dimensions(plan.districts.dims(), config.rules) {
        report.errors.push(e.to_string());
        return report;
    }
    if let Err(violations) = validate_plan(&plan.districts, config.rules) {
        report.errors = violations.iter().map(ToString::to_string).collect();
        return report;
    }

    report.valid = true;
    match district_winners(&plan.districts, votes) {
        Ok(winners) => {
            let tally: SeatTally = winners.values().copied().collect();
            report.hearts_won = Some(tally.hearts);
            report.clubs_won = Some(tally.clubs);
            report.winners = Some(winners);
        }
        Err(e) => debug!(plan = %plan.name, error = %e, "no reference votes for this board"),
    }
    report
}
