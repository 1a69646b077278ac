// Chart builders - Turn league tables into declarative chart specs
use crate::domain::chart::{BarMode, ChartKind, ChartSpec, HierarchyNode, MarkerPoint, Series};
use crate::domain::standings::{ScorerRow, StandingsRow};

pub const SCATTER_TITLE: &str = "Goals Scored vs. Goals Conceded";
pub const SUNBURST_TITLE: &str = "Top Scorers and Their Teams";
pub const BARS_TITLE: &str = "Win/Draw/Loss Distribution by Team";

const SUNBURST_COLOR_SCALE: &str = "RdYlGn";
const SUNBURST_HOVER: &str =
    "<br>Player = %{customdata[0]}<br>Club = %{customdata[1]}<br>Goals = %{customdata[2]}";

/// Bar series name, fixed color and the count it plots
const RESULT_SERIES: [(&str, &str, fn(&StandingsRow) -> u32); 3] = [
    ("Win", "green", |r| r.won),
    ("Draw", "gray", |r| r.draw),
    ("Loss", "red", |r| r.lost),
];

/// One marker series per team so each team gets its own color
pub fn build_goals_scatter(rows: &[StandingsRow]) -> ChartSpec {
    let series = rows
        .iter()
        .map(|r| Series::Markers {
            name: r.team_name.clone(),
            points: vec![MarkerPoint::new(
                r.goals_scored as f64,
                r.goals_conceded as f64,
                r.points as f64,
            )],
        })
        .collect();

    ChartSpec::new(ChartKind::Scatter, SCATTER_TITLE, series)
        .with_axes("Goals Scored", "Goals Conceded")
        .with_legend_title("Team Name")
}

/// Team -> player hierarchy sized by goals. `None` when no player has scored.
pub fn build_scorers_sunburst(rows: &[ScorerRow]) -> Option<ChartSpec> {
    let scoring: Vec<&ScorerRow> = rows.iter().filter(|r| r.goals > 0).collect();
    if scoring.is_empty() {
        return None;
    }

    // Teams in order of first appearance
    let mut teams: Vec<&str> = Vec::new();
    for row in &scoring {
        if !teams.contains(&row.team_name.as_str()) {
            teams.push(&row.team_name);
        }
    }

    let mut nodes = Vec::with_capacity(scoring.len() + teams.len());

    for row in &scoring {
        nodes.push(HierarchyNode {
            id: format!("{}/{}", row.team_name, row.player_name),
            label: row.player_name.clone(),
            parent: Some(row.team_name.clone()),
            value: row.goals as f64,
            color_value: row.goals as f64,
            custom_data: vec![
                row.player_name.clone(),
                row.team_name.clone(),
                row.goals.to_string(),
            ],
        });
    }

    for team in teams {
        let goals: Vec<f64> = scoring
            .iter()
            .filter(|r| r.team_name == team)
            .map(|r| r.goals as f64)
            .collect();
        let total: f64 = goals.iter().sum();
        // Goal-weighted mean keeps the parent color in line with its children
        let color_value = goals.iter().map(|g| g * g).sum::<f64>() / total;

        nodes.push(HierarchyNode {
            id: team.to_string(),
            label: team.to_string(),
            parent: None,
            value: total,
            color_value,
            custom_data: vec![String::new(), team.to_string(), total.to_string()],
        });
    }

    let series = vec![Series::Hierarchy {
        nodes,
        color_scale: SUNBURST_COLOR_SCALE.to_string(),
        color_label: "Goals".to_string(),
        hover_template: SUNBURST_HOVER.to_string(),
    }];

    Some(ChartSpec::new(ChartKind::Sunburst, SUNBURST_TITLE, series))
}

/// Stacked win, draw and loss counts per team
pub fn build_win_draw_loss_bars(rows: &[StandingsRow]) -> ChartSpec {
    let categories: Vec<String> = rows.iter().map(|r| r.team_name.clone()).collect();

    let series = RESULT_SERIES
        .iter()
        .map(|(name, color, count)| {
            let values = rows.iter().map(|r| count(r) as f64).collect();

            Series::Bars {
                name: name.to_string(),
                color: color.to_string(),
                categories: categories.clone(),
                values,
            }
        })
        .collect();

    ChartSpec::new(ChartKind::Bar, BARS_TITLE, series)
        .with_axes("Team", "Matches")
        .with_legend_title("variable")
        .with_bar_mode(BarMode::Relative)
}
