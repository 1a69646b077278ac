// Dashboard service - Use case for loading the league dashboard
use crate::application::chart_builder::{
    build_goals_scatter, build_scorers_sunburst, build_win_draw_loss_bars,
};
use crate::application::football_repository::FootballRepository;
use crate::application::table_builder::{build_scorers_table, build_standings_table};
use crate::domain::dashboard::{Dashboard, Panel, Row, SidePanel};
use crate::domain::standings::Table;
use crate::infrastructure::config::DashboardSettings;
use std::sync::Arc;

pub const STANDINGS_FETCH_FAILED: &str = "Failed to fetch standings.";
pub const SCORERS_FETCH_FAILED: &str = "Failed to fetch top scorers data.";
pub const NO_SCORER_DATA: &str = "No data available for players with goals.";

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn FootballRepository>,
    settings: DashboardSettings,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn FootballRepository>, settings: DashboardSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Runs one full fetch-and-build pass. Holds no state between calls.
    pub async fn load(&self) -> Dashboard {
        let generated_at = chrono::Utc::now().to_rfc3339();
        let mut dashboard = Dashboard::new(self.settings.title.clone(), generated_at);

        let raw_standings = match self.repository.fetch_standings().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(resource = e.resource(), "Standings unavailable: {}", e);
                dashboard.rows.push(Row::FullWidth(Panel::error(STANDINGS_FETCH_FAILED)));
                return dashboard;
            }
        };

        let standings = build_standings_table(&raw_standings);
        tracing::debug!("Built standings table with {} teams", standings.len());

        dashboard.side_panel = Some(SidePanel {
            heading: self.settings.standings_heading.clone(),
            table: Table::from_rows(&standings),
            note_heading: self.settings.note_heading.clone(),
            note: self.settings.note.clone(),
        });

        // Scorer failures only cost the scorer-derived views
        let scorer_panel = match self.repository.fetch_scorers().await {
            Ok(raw_scorers) => {
                let scorers = build_scorers_table(&raw_scorers);
                tracing::debug!("Built scorers table with {} players", scorers.len());

                match build_scorers_sunburst(&scorers) {
                    Some(chart) => Panel::Chart(chart),
                    None => {
                        tracing::info!("No scorer has goals yet, skipping sunburst");
                        Panel::info(NO_SCORER_DATA)
                    }
                }
            }
            Err(e) => {
                tracing::warn!(resource = e.resource(), "Top scorers unavailable: {}", e);
                Panel::error(SCORERS_FETCH_FAILED)
            }
        };

        let scatter = Panel::Chart(build_goals_scatter(&standings));
        dashboard.rows.push(Row::TwoColumn(scatter, scorer_panel));

        dashboard
            .rows
            .push(Row::FullWidth(Panel::Chart(build_win_draw_loss_bars(&standings))));

        dashboard
    }
}
