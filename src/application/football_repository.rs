// Repository trait for league data access
use async_trait::async_trait;
use serde::Deserialize;

/// Named reference as the provider nests it (`{"name": ...}`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

/// One team's line in the league table, as decoded from the provider
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStandingEntry {
    pub team: NamedRef,
    pub played_games: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

/// One entry of the provider's scorer list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawScorerEntry {
    pub player: NamedRef,
    pub team: NamedRef,
    #[serde(default)]
    pub goals: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to fetch {resource}: HTTP {status}")]
    Status { resource: &'static str, status: u16 },

    #[error("failed to fetch {resource}: {source}")]
    Transport {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected {resource} response: {message}")]
    Decode {
        resource: &'static str,
        message: String,
    },
}

impl FetchError {
    pub fn resource(&self) -> &'static str {
        match self {
            FetchError::Status { resource, .. }
            | FetchError::Transport { resource, .. }
            | FetchError::Decode { resource, .. } => resource,
        }
    }
}

#[async_trait]
pub trait FootballRepository: Send + Sync {
    /// Current league table in ranking order
    async fn fetch_standings(&self) -> Result<Vec<RawStandingEntry>, FetchError>;

    /// Scorer list as capped by the provider
    async fn fetch_scorers(&self) -> Result<Vec<RawScorerEntry>, FetchError>;
}
