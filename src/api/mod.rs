//! HTTP client for the roster service
mod error;
pub mod wire;

pub use error::ApiError;

use tracing::{debug, warn};

use crate::config::RosterSource;
use crate::model::{Player, Team, Transaction};

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and return the body of a 2xx response
    async fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    pub async fn teams(&self) -> Result<Vec<Team>, ApiError> {
        let body = self.get_text("/api/teams", &[]).await?;
        wire::parse_teams(&body)
    }

    pub async fn all_players(&self) -> Result<Vec<Player>, ApiError> {
        let body = self.get_text("/api/players", &[]).await?;
        wire::parse_players(&body)
    }

    pub async fn team_players(
        &self,
        abbreviation: &str,
        source: RosterSource,
    ) -> Result<Vec<Player>, ApiError> {
        let body = match source {
            RosterSource::Players => {
                let path = format!("/api/players/team/{}", abbreviation);
                self.get_text(&path, &[]).await?
            }
            RosterSource::Rosters => {
                self.get_text("/api/rosters/players", &[("team_abbr", abbreviation)])
                    .await?
            }
        };
        wire::parse_players(&body)
    }

    pub async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let body = self.get_text("/api/transactions/nba-movement", &[]).await?;
        wire::parse_transactions(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = Client::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
