//! HTTP client for The Blue Alliance v3 API.

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use std::cell::OnceCell;

use crate::{
    cli::types::{EventKey, MatchKey, TeamKey},
    error::FrcError,
    tba::types::{Event, Match, Team},
    Result,
};


/// Base path for the TBA v3 read API.
pub const TBA_BASE_URL: &str = "https://www.thebluealliance.com/api/v3";

/// Header TBA reads the read-API key from.
pub const AUTH_HEADER: &str = "x-tba-auth-key";

/// Everything the commands need from the API.
///
/// Failures of any kind come back as [`FrcError::Remote`]; callers don't get to
/// tell a missing record from a network error.
#[allow(async_fn_in_trait)]
pub trait TbaApi {
    async fn fetch_team(&self, key: &TeamKey) -> Result<Team>;

    async fn fetch_event(&self, key: &EventKey) -> Result<Event>;

    async fn fetch_match(&self, key: &MatchKey) -> Result<Match>;

    async fn fetch_event_matches(&self, event: &EventKey) -> Result<Vec<Match>>;

    async fn fetch_team_event_matches(&self, team: &TeamKey, event: &EventKey)
        -> Result<Vec<Match>>;
}

/// reqwest-backed [`TbaApi`].
#[derive(Debug, Clone)]
pub struct TbaClient {
    client: Client,
    base_url: String,
}

impl TbaClient {
    pub fn new(auth_key: &str) -> Result<Self> {
        Self::with_base_url(auth_key, TBA_BASE_URL)
    }

    /// Point the client somewhere other than thebluealliance.com (mirrors, tests).
    pub fn with_base_url(auth_key: &str, base_url: impl Into<String>) -> Result<Self> {
        let mut auth = HeaderValue::from_str(auth_key).map_err(|_| {
            FrcError::invalid("auth key contains characters not allowed in an HTTP header")
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(AUTH_HEADER), auth);

        let client = Client::builder()
            .user_agent(concat!("frc-cli/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let res = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }
}

impl TbaApi for TbaClient {
    async fn fetch_team(&self, key: &TeamKey) -> Result<Team> {
        self.get(&format!("team/{key}")).await
    }

    async fn fetch_event(&self, key: &EventKey) -> Result<Event> {
        self.get(&format!("event/{key}")).await
    }

    async fn fetch_match(&self, key: &MatchKey) -> Result<Match> {
        self.get(&format!("match/{key}")).await
    }

    async fn fetch_event_matches(&self, event: &EventKey) -> Result<Vec<Match>> {
        self.get(&format!("event/{event}/matches")).await
    }

    async fn fetch_team_event_matches(
        &self,
        team: &TeamKey,
        event: &EventKey,
    ) -> Result<Vec<Match>> {
        self.get(&format!("team/{team}/event/{event}/matches"))
            .await
    }
}

/// [`TbaApi`] that builds its [`TbaClient`] on the first request.
///
/// Settings failures (no auth key, unreadable config) only surface once a
/// command has validated its input and actually needs the network.
pub struct LazyClient<F> {
    connect: F,
    client: OnceCell<TbaClient>,
}

impl<F> LazyClient<F>
where
    F: Fn() -> Result<TbaClient>,
{
    pub fn new(connect: F) -> Self {
        Self {
            connect,
            client: OnceCell::new(),
        }
    }

    fn client(&self) -> Result<&TbaClient> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = (self.connect)()?;
        Ok(self.client.get_or_init(|| client))
    }
}

impl<F> TbaApi for LazyClient<F>
where
    F: Fn() -> Result<TbaClient>,
{
    async fn fetch_team(&self, key: &TeamKey) -> Result<Team> {
        self.client()?.fetch_team(key).await
    }

    async fn fetch_event(&self, key: &EventKey) -> Result<Event> {
        self.client()?.fetch_event(key).await
    }

    async fn fetch_match(&self, key: &MatchKey) -> Result<Match> {
        self.client()?.fetch_match(key).await
    }

    async fn fetch_event_matches(&self, event: &EventKey) -> Result<Vec<Match>> {
        self.client()?.fetch_event_matches(event).await
    }

    async fn fetch_team_event_matches(
        &self,
        team: &TeamKey,
        event: &EventKey,
    ) -> Result<Vec<Match>> {
        self.client()?.fetch_team_event_matches(team, event).await
    }
}
