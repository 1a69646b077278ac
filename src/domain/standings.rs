// League table and scorer domain models
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub points: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub goal_difference: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerRow {
    pub player_name: String,
    pub team_name: String,
    /// Zero when the provider reported no goal count
    pub goals: u32,
}

/// Flat table handed to the rendering surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Rows that know how to lay themselves out as table cells
pub trait TableRow {
    fn columns() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl Table {
    pub fn from_rows<R: TableRow>(rows: &[R]) -> Self {
        Self {
            columns: R::columns().iter().map(|c| c.to_string()).collect(),
            rows: rows.iter().map(TableRow::cells).collect(),
        }
    }
}

impl TableRow for StandingsRow {
    fn columns() -> &'static [&'static str] {
        &[
            "Team Name",
            "Played",
            "Won",
            "Draw",
            "Lost",
            "Points",
            "Goals Scored",
            "Goals Conceded",
            "Goal Difference",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.team_name.clone(),
            self.played.to_string(),
            self.won.to_string(),
            self.draw.to_string(),
            self.lost.to_string(),
            self.points.to_string(),
            self.goals_scored.to_string(),
            self.goals_conceded.to_string(),
            self.goal_difference.to_string(),
        ]
    }
}

impl TableRow for ScorerRow {
    fn columns() -> &'static [&'static str] {
        &["Player Name", "Team", "Goals"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.player_name.clone(),
            self.team_name.clone(),
            self.goals.to_string(),
        ]
    }
}
