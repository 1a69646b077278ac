// Table builder - Flattens decoded provider records into rows
use crate::application::football_repository::{RawScorerEntry, RawStandingEntry};
use crate::domain::standings::{ScorerRow, StandingsRow};

pub fn build_standings_table(raw_teams: &[RawStandingEntry]) -> Vec<StandingsRow> {
    raw_teams
        .iter()
        .map(|t| StandingsRow {
            team_name: t.team.name.clone(),
            played: t.played_games,
            won: t.won,
            draw: t.draw,
            lost: t.lost,
            points: t.points,
            goals_scored: t.goals_for,
            goals_conceded: t.goals_against,
            goal_difference: t.goal_difference,
        })
        .collect()
}

pub fn build_scorers_table(raw_scorers: &[RawScorerEntry]) -> Vec<ScorerRow> {
    raw_scorers
        .iter()
        .map(|s| ScorerRow {
            player_name: s.player.name.clone(),
            team_name: s.team.name.clone(),
            goals: s.goals.unwrap_or(0),
        })
        .collect()
}
