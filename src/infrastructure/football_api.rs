// football-data.org repository implementation
use crate::application::football_repository::{
    FetchError, FootballRepository, RawScorerEntry, RawStandingEntry,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const STANDINGS: &str = "standings";
const SCORERS: &str = "top scorers";

#[derive(Debug, Clone)]
pub struct FootballDataRepository {
    base_url: String,
    token: String,
    competition: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct StandingsResponse {
    standings: Vec<StandingsGroup>,
}

#[derive(Debug, Deserialize)]
struct StandingsGroup {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    table: Vec<RawStandingEntry>,
}

#[derive(Debug, Deserialize)]
struct ScorersResponse {
    scorers: Vec<RawScorerEntry>,
}

impl FootballDataRepository {
    pub fn new(base_url: String, token: String, competition: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            competition,
            client: reqwest::Client::new(),
        }
    }

    fn build_url(&self, resource_path: &str) -> String {
        format!(
            "{}/competitions/{}/{}",
            self.base_url,
            urlencoding::encode(&self.competition),
            resource_path
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource_path: &str,
        resource: &'static str,
    ) -> Result<T, FetchError> {
        let url = self.build_url(resource_path);
        tracing::debug!("Fetching {} from {}", resource, url);

        let response = self
            .client
            .get(&url)
            .header("X-Auth-Token", &self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Transport { resource, source })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("{} request failed with status {}", resource, status);
            return Err(FetchError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { resource, source })?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            resource,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl FootballRepository for FootballDataRepository {
    async fn fetch_standings(&self) -> Result<Vec<RawStandingEntry>, FetchError> {
        let response: StandingsResponse = self.get_json("standings", STANDINGS).await?;
        let table = select_total_table(response.standings)?;

        tracing::debug!("Decoded {} standings entries", table.len());
        Ok(table)
    }

    async fn fetch_scorers(&self) -> Result<Vec<RawScorerEntry>, FetchError> {
        let response: ScorersResponse = self.get_json("scorers", SCORERS).await?;

        tracing::debug!("Decoded {} scorer entries", response.scorers.len());
        Ok(response.scorers)
    }
}

/// Picks the overall table; home/away splits are ignored
fn select_total_table(groups: Vec<StandingsGroup>) -> Result<Vec<RawStandingEntry>, FetchError> {
    let index = groups
        .iter()
        .position(|g| g.kind.as_deref() == Some("TOTAL"))
        .unwrap_or(0);

    groups
        .into_iter()
        .nth(index)
        .map(|g| g.table)
        .ok_or_else(|| FetchError::Decode {
            resource: STANDINGS,
            message: "no standings table in response".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::get,
        Router,
    };
    use serde_json::json;

    const TOKEN: &str = "test-token";

    fn standings_body() -> serde_json::Value {
        let team = |name: &str, won: u32, draw: u32, lost: u32, gf: u32, ga: u32| {
            let played = won + draw + lost;
            let points = won * 3 + draw;
            let difference = gf as i32 - ga as i32;
            json!({
                "position": 1,
                "team": { "id": 57, "name": name, "shortName": name, "tla": "XXX" },
                "playedGames": played,
                "form": null,
                "won": won,
                "draw": draw,
                "lost": lost,
                "points": points,
                "goalsFor": gf,
                "goalsAgainst": ga,
                "goalDifference": difference
            })
        };

        json!({
            "competition": { "code": "PL" },
            "standings": [
                { "stage": "REGULAR_SEASON", "type": "HOME", "table": [team("Home Only FC", 1, 0, 0, 2, 0)] },
                { "stage": "REGULAR_SEASON", "type": "TOTAL", "table": [
                    team("Liverpool FC", 7, 1, 1, 18, 5),
                    team("Manchester City FC", 6, 2, 1, 20, 9),
                ]}
            ]
        })
    }

    fn scorers_body() -> serde_json::Value {
        json!({
            "count": 2,
            "scorers": [
                {
                    "player": { "id": 38101, "name": "Erling Haaland" },
                    "team": { "id": 65, "name": "Manchester City FC" },
                    "playedMatches": 9,
                    "goals": 11,
                    "assists": null,
                    "penalties": 1
                },
                {
                    "player": { "id": 3754, "name": "Mohamed Salah" },
                    "team": { "id": 64, "name": "Liverpool FC" },
                    "goals": null
                }
            ]
        })
    }

    /// Stub provider: `/ok/...` serves fixtures, `/status/{code}/...` fails, `/junk/...` is malformed
    async fn spawn_stub() -> String {
        async fn ok(
            Path((_, resource)): Path<(String, String)>,
            headers: HeaderMap,
        ) -> impl IntoResponse {
            if headers.get("x-auth-token").and_then(|v| v.to_str().ok()) != Some(TOKEN) {
                return (StatusCode::UNAUTHORIZED, "missing token").into_response();
            }
            let body = match resource.as_str() {
                "standings" => standings_body(),
                _ => scorers_body(),
            };
            axum::Json(body).into_response()
        }

        async fn fail(Path((code, _, _)): Path<(u16, String, String)>) -> StatusCode {
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }

        async fn junk() -> impl IntoResponse {
            axum::Json(json!({ "standings": [ { "table": [ { "team": {} } ] } ], "scorers": "nope" }))
        }

        let router = Router::new()
            .route("/ok/competitions/:code/:resource", get(ok))
            .route("/status/:status/competitions/:code/:resource", get(fail))
            .route("/junk/competitions/:code/:resource", get(junk))
            .route(
                "/empty/competitions/:code/:resource",
                get(|| async { axum::Json(json!({ "standings": [] })) }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn repo(base: String, prefix: &str, token: &str) -> FootballDataRepository {
        FootballDataRepository::new(format!("{}/{}/", base, prefix), token.to_string(), "PL".to_string())
    }

    #[test]
    fn test_build_url() {
        let repo = FootballDataRepository::new(
            "https://api.football-data.org/v4/".to_string(),
            TOKEN.to_string(),
            "PL".to_string(),
        );
        assert_eq!(
            repo.build_url("standings"),
            "https://api.football-data.org/v4/competitions/PL/standings"
        );
    }

    #[tokio::test]
    async fn test_fetch_standings_selects_total_table() {
        let base = spawn_stub().await;
        let table = repo(base, "ok", TOKEN).fetch_standings().await.unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table[0].team.name, "Liverpool FC");
        assert_eq!(table[0].played_games, 9);
        assert_eq!(table[1].goal_difference, 11);
    }

    #[tokio::test]
    async fn test_fetch_scorers_allows_missing_goals() {
        let base = spawn_stub().await;
        let scorers = repo(base, "ok", TOKEN).fetch_scorers().await.unwrap();

        assert_eq!(scorers.len(), 2);
        assert_eq!(scorers[0].player.name, "Erling Haaland");
        assert_eq!(scorers[0].goals, Some(11));
        assert_eq!(scorers[1].goals, None);
    }

    #[tokio::test]
    async fn test_wrong_token_is_status_error() {
        let base = spawn_stub().await;
        let err = repo(base, "ok", "wrong").fetch_standings().await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 401, .. }));
        assert_eq!(err.resource(), "standings");
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let base = spawn_stub().await;
        let err = repo(base, "status/500", TOKEN).fetch_scorers().await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 500, .. }));
        assert!(err.to_string().contains("top scorers"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let base = spawn_stub().await;
        let repo = repo(base, "junk", TOKEN);

        assert!(matches!(
            repo.fetch_standings().await,
            Err(FetchError::Decode { resource: "standings", .. })
        ));
        assert!(matches!(
            repo.fetch_scorers().await,
            Err(FetchError::Decode { resource: "top scorers", .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_standings_is_decode_error() {
        let base = spawn_stub().await;
        let err = repo(base, "empty", TOKEN).fetch_standings().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let repo = FootballDataRepository::new(format!("http://{}", addr), TOKEN.to_string(), "PL".to_string());
        let err = repo.fetch_standings().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let body = json!({
            "team": { "name": "Broken FC" },
            "playedGames": -1, "won": 0, "draw": 0, "lost": 0, "points": 0,
            "goalsFor": 0, "goalsAgainst": 0, "goalDifference": 0
        });
        assert!(serde_json::from_value::<RawStandingEntry>(body).is_err());
    }
}
