//! Implementation of the `cfeed teams` command.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use cfeed_core::{FeedConfig, ResolvedTeam, Standings, TeamIdentityTable};

use super::util::load_standings;

/// Resolves every eligible ranklist row, in ranklist order.
pub fn resolve_roster(standings: &Standings, config: &FeedConfig) -> Result<Vec<ResolvedTeam>> {
    let parties: Vec<_> = standings
        .rows
        .iter()
        .map(|row| &row.party)
        .filter(|party| config.participant_allowed(party.participant_type))
        .collect();

    let table = TeamIdentityTable::populate(parties.iter().copied())
        .context("failed to build team identity table")?;

    parties
        .into_iter()
        .map(|party| table.resolve(party).map_err(anyhow::Error::from))
        .collect()
}

/// Formats the roster as an aligned table.
pub fn format_teams(teams: &[ResolvedTeam]) -> String {
    if teams.is_empty() {
        return "No teams in ranklist.\n".to_string();
    }

    let id_width = teams.iter().map(|t| t.id.len()).max().unwrap_or(0).max(2);
    let name_width = teams.iter().map(|t| t.name.len()).max().unwrap_or(0).max(4);

    let mut out = format!("{:<id_width$}  {:<name_width$}  FULL NAME\n", "ID", "NAME");
    for team in teams {
        out.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {}\n",
            team.id, team.name, team.full_name
        ));
    }
    out
}

/// Run the teams command.
pub fn run<W: Write>(
    writer: &mut W,
    config: &FeedConfig,
    standings_file: &Path,
    json: bool,
) -> Result<()> {
    let standings = load_standings(standings_file)?;
    let teams = resolve_roster(&standings, config)?;

    if json {
        for team in &teams {
            serde_json::to_writer(&mut *writer, team).context("failed to serialize team")?;
            writeln!(writer)?;
        }
    } else {
        write!(writer, "{}", format_teams(&teams))?;
    }

    Ok(())
}
