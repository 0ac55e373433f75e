use clap::{Parser, Subcommand, ValueEnum};
use redistrict_survey::{PlanGroup, PlanKind};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "redistrict")]
#[command(
    author,
    version,
    about = "Consensus district maps and compactness scores for 5x5 districting plans"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON file of plan records (defaults to the built-in survey)
    #[arg(long, global = true, env = "REDISTRICT_PLANS")]
    pub plans: Option<PathBuf>,

    /// Number of districts each plan must have
    #[arg(long, global = true, env = "REDISTRICT_DISTRICTS", default_value_t = redistrict_grid::DISTRICT_COUNT)]
    pub districts: usize,

    /// Number of cells in each district
    #[arg(long, global = true, env = "REDISTRICT_CELLS_PER_DISTRICT", default_value_t = redistrict_grid::CELLS_PER_DISTRICT)]
    pub cells_per_district: usize,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build consensus maps and report their compactness
    Consensus(ConsensusArgs),

    /// Report compactness for every plan
    Score,

    /// Rank plans by compactness
    Rank,

    /// Validate plans and show district winners
    Validate,
}

#[derive(Parser, Debug, Clone)]
pub struct ConsensusArgs {
    /// Only build the consensus for this group (default: all, neutral and hearts)
    #[arg(long, value_enum)]
    pub group: Option<GroupArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupArg {
    All,
    Neutral,
    HeartsRepresentative,
}

impl From<GroupArg> for PlanGroup {
    fn from(arg: GroupArg) -> Self {
        match arg {
            GroupArg::All => PlanGroup::All,
            GroupArg::Neutral => PlanGroup::Only(PlanKind::Neutral),
            GroupArg::HeartsRepresentative => PlanGroup::Only(PlanKind::HeartsRepresentative),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["redistrict", "rank"]).unwrap();
        assert!(matches!(cli.command, Commands::Rank));
        assert_eq!(cli.districts, 5);
        assert_eq!(cli.cells_per_district, 5);
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn parses_consensus_group_and_globals() {
        let cli = Cli::try_parse_from([
            "redistrict",
            "consensus",
            "--group",
            "hearts-representative",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Consensus(args) => {
                assert_eq!(args.group, Some(GroupArg::HeartsRepresentative))
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn group_maps_to_plan_group() {
        assert_eq!(PlanGroup::from(GroupArg::All), PlanGroup::All);
        assert_eq!(
            PlanGroup::from(GroupArg::Neutral),
            PlanGroup::Only(PlanKind::Neutral)
        );
    }
}
