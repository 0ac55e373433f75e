//! Resolved run configuration.

use crate::cli::{Cli, Format};
use crate::error::{CliError, Result};
use redistrict_grid::DistrictRules;
use redistrict_survey::Survey;
use std::path::{Path, PathBuf};

/// Where plans come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSource {
    Builtin,
    File(PathBuf),
}

impl PlanSource {
    /// Load the plans.
    pub fn load(&self) -> Result<Survey> {
        match self {
            PlanSource::Builtin => Ok(Survey::builtin()),
            PlanSource::File(path) => load_file(path),
        }
    }
}

fn load_file(path: &Path) -> Result<Survey> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::ReadPlans {
        path: path.to_path_buf(),
        source: e,
    })?;
    let survey = Survey::from_json(&content)?;
    tracing::debug!(path = %path.display(), plans = survey.len(), "loaded plan file");
    Ok(survey)
}

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PlanSource,
    pub rules: DistrictRules,
    pub format: Format,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let source = cli
            .plans
            .clone()
            .map(PlanSource::File)
            .unwrap_or(PlanSource::Builtin);

        Self {
            source,
            rules: DistrictRules::new(cli.districts, cli.cells_per_district),
            format: cli.format,
        }
    }
}
