use anyhow::{bail, Context};
use scoring::match_data::{InsertMatchData, MatchData};

pub const SERVER_URL_ENV: &str = "MATCH_SERVER_URL";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:9080";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> ApiClient {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        ApiClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_env() -> ApiClient {
        let base_url = std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_owned());
        ApiClient::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn match_data_url(&self) -> String {
        format!("{}/api/match-data", self.base_url)
    }

    pub async fn list(&self) -> anyhow::Result<Vec<MatchData>> {
        let response = self.http.get(self.match_data_url()).send().await.context("could not reach match server")?;
        let response = check_status(response).await?;
        Ok(response.json::<Vec<MatchData>>().await?)
    }

    pub async fn insert(&self, data: &InsertMatchData) -> anyhow::Result<MatchData> {
        let response = self.http.post(self.match_data_url()).json(data).send().await.context("could not reach match server")?;
        let response = check_status(response).await?;
        Ok(response.json::<MatchData>().await?)
    }

    pub async fn clear(&self) -> anyhow::Result<()> {
        let response = self.http.delete(self.match_data_url()).send().await.context("could not reach match server")?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> anyhow::Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    bail!("match server answered {status}: {body}")
}
