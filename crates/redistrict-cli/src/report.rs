//! Command output in text and JSON form.
//!
//! Every output type serializes to the JSON shape printed by `--format json`
//! and implements `Display` for the default text form. Scores are rounded to
//! three decimals in both.

use crate::cli::Format;
use crate::error::Result;
use redistrict_compactness::CompactnessReport;
use redistrict_grid::{Grid, Label};
use redistrict_survey::{Party, PlanKind};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::io::Write;

/// District colours, matching the tab10 palette used when plans are drawn.
pub const PALETTE: [&str; 10] = [
    "Blue",
    "Orange",
    "Green",
    "Red",
    "Purple",
    "Brown",
    "Pink",
    "Gray",
    "Yellow-Green",
    "Cyan",
];

/// Colour name for a district label.
pub fn color_name(label: Label) -> &'static str {
    usize::try_from(label)
        .ok()
        .and_then(|i| PALETTE.get(i))
        .copied()
        .unwrap_or("Unknown Color")
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

const RULE: &str = "============================================================";

/// Write `output` to `w` in the requested format.
pub fn emit<T>(output: &T, format: Format, w: &mut impl Write) -> Result<()>
where
    T: Serialize + Display,
{
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *w, output)?;
            writeln!(w)?;
        }
        Format::Text => write!(w, "{}", output)?,
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictSummary {
    pub district: Label,
    pub color: &'static str,
    pub polsby_popper: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompactnessSummary {
    pub cut_edges: usize,
    pub districts: Vec<DistrictSummary>,
    pub avg_polsby_popper: f64,
}

impl From<&CompactnessReport> for CompactnessSummary {
    fn from(report: &CompactnessReport) -> Self {
        Self {
            cut_edges: report.cut_edges,
            districts: report
                .districts
                .iter()
                .map(|d| DistrictSummary {
                    district: d.label,
                    color: color_name(d.label),
                    polsby_popper: round3(d.polsby_popper),
                })
                .collect(),
            avg_polsby_popper: round3(report.average_score),
        }
    }
}

impl Display for CompactnessSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Cut edges: {}", self.cut_edges)?;
        writeln!(f, "  Polsby–Popper per district:")?;
        for d in &self.districts {
            writeln!(f, "    District {} ({}): {:.3}", d.district, d.color, d.polsby_popper)?;
        }
        writeln!(f, "  Average Polsby–Popper: {:.3}", self.avg_polsby_popper)
    }
}

/// One consensus map with its compactness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusSection {
    pub title: String,
    pub plans: usize,
    pub consensus: Grid,
    pub relaxed_districts: Vec<Label>,
    pub compactness: CompactnessSummary,
}

impl Display for ConsensusSection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "CONSENSUS MAP: {}", self.title)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "{}", self.consensus)?;
        writeln!(f, "Number of districts: {}", self.consensus.labels().len())?;
        if !self.relaxed_districts.is_empty() {
            let relaxed: Vec<String> = self.relaxed_districts.iter().map(|l| l.to_string()).collect();
            writeln!(f, "Relaxed districts (may not be contiguous): {}", relaxed.join(", "))?;
        }
        writeln!(f)?;
        writeln!(f, "Compactness metrics:")?;
        write!(f, "{}", self.compactness)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusOutput {
    pub consensus: Vec<ConsensusSection>,
}

impl Display for ConsensusOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, section) in self.consensus.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

/// Compactness of one plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanScoreReport {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PlanKind,
    pub compactness: CompactnessSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOutput {
    pub plans: Vec<PlanScoreReport>,
}

impl Display for ScoreOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, plan) in self.plans.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "Compactness metrics for {} ({}):", plan.name, plan.kind)?;
            write!(f, "{}", plan.compactness)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PlanKind,
    pub cut_edges: usize,
    pub avg_pp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingOutput {
    pub rankings: Vec<RankingEntry>,
}

impl Display for RankingOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Ranking of plans by compactness (higher avg Polsby–Popper, fewer cut edges = better):"
        )?;
        for r in &self.rankings {
            writeln!(
                f,
                "{}. {} [{}]: avg PP = {:.3}, cut edges = {}",
                r.rank, r.name, r.kind, r.avg_pp, r.cut_edges
            )?;
        }
        Ok(())
    }
}

/// Validation result for one plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub name: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winners: Option<BTreeMap<Label, Party>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hearts_won: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clubs_won: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationOutput {
    pub plans: Vec<ValidationReport>,
}

impl Display for ValidationOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for plan in &self.plans {
            if plan.valid {
                write!(f, "{}: valid", plan.name)?;
                if let (Some(hearts), Some(clubs)) = (plan.hearts_won, plan.clubs_won) {
                    write!(f, " (Hearts {}, Clubs {})", hearts, clubs)?;
                }
                writeln!(f)?;
                for (label, party) in plan.winners.iter().flatten() {
                    writeln!(f, "  District {} ({}): {}", label, color_name(*label), party)?;
                }
            } else {
                writeln!(f, "{}: invalid", plan.name)?;
                for error in &plan.errors {
                    writeln!(f, "  {}", error)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redistrict_compactness::score;

    fn stripes() -> Grid {
        Grid::from([
            [0, 0, 0, 0, 0],
            [1, 1, 1, 1, 1],
            [2, 2, 2, 2, 2],
            [3, 3, 3, 3, 3],
            [4, 4, 4, 4, 4],
        ])
    }

    #[test]
    fn palette_names() {
        assert_eq!(color_name(0), "Blue");
        assert_eq!(color_name(8), "Yellow-Green");
        assert_eq!(color_name(10), "Unknown Color");
        assert_eq!(color_name(-1), "Unknown Color");
    }

    #[test]
    fn summary_rounds_scores() {
        let summary = CompactnessSummary::from(&score(&stripes()));
        assert_eq!(summary.cut_edges, 20);
        assert_eq!(summary.avg_polsby_popper, 0.436);
        assert_eq!(summary.districts[4].color, "Purple");
        assert_eq!(summary.districts[4].polsby_popper, 0.436);
    }

    #[test]
    fn summary_text() {
        let text = CompactnessSummary::from(&score(&stripes())).to_string();
        assert!(text.starts_with("  Cut edges: 20\n"));
        assert!(text.contains("    District 1 (Orange): 0.436\n"));
        assert!(text.ends_with("  Average Polsby–Popper: 0.436\n"));
    }

    #[test]
    fn consensus_section_json_shape() {
        let section = ConsensusSection {
            title: "All Plans (n=1)".into(),
            plans: 1,
            consensus: stripes(),
            relaxed_districts: vec![],
            compactness: CompactnessSummary::from(&score(&stripes())),
        };
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["consensus"][1], serde_json::json!([1, 1, 1, 1, 1]));
        assert_eq!(value["compactness"]["cut_edges"], 20);
        assert_eq!(value["compactness"]["districts"][0]["color"], "Blue");
    }

    #[test]
    fn emit_json_and_text() {
        let output = RankingOutput {
            rankings: vec![RankingEntry {
                rank: 1,
                name: "Base Plan 6".into(),
                kind: PlanKind::Neutral,
                cut_edges: 20,
                avg_pp: 0.436,
            }],
        };

        let mut text = Vec::new();
        emit(&output, Format::Text, &mut text).unwrap();
        let text = String::from_utf8(text).unwrap();
        assert!(text.contains("1. Base Plan 6 [neutral]: avg PP = 0.436, cut edges = 20"));

        let mut json = Vec::new();
        emit(&output, Format::Json, &mut json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["rankings"][0]["type"], "neutral");
        assert_eq!(value["rankings"][0]["avg_pp"], 0.436);
    }

    #[test]
    fn invalid_plan_text_lists_errors() {
        let output = ValidationOutput {
            plans: vec![ValidationReport {
                name: "Mine".into(),
                valid: false,
                errors: vec!["Must have exactly 5 districts. Found 3.".into()],
                winners: None,
                hearts_won: None,
                clubs_won: None,
            }],
        };
        assert_eq!(
            output.to_string(),
            "Mine: invalid\n  Must have exactly 5 districts. Found 3.\n"
        );
    }
}
