//! Blocking HTTP client shared by every archive.

use crate::config::AqcConfig;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("aqc/", env!("CARGO_PKG_VERSION"));
const ERROR_BODY_LIMIT: usize = 300;
const PING_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ArchiveClient {
    agent: ureq::Agent,
    ping_agent: ureq::Agent,
    row_limit: usize,
    ads_token: Option<String>,
}

impl ArchiveClient {
    pub fn new(config: &AqcConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .user_agent(USER_AGENT)
            .build();
        let ping_agent = ureq::AgentBuilder::new()
            .timeout(PING_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();
        Self {
            agent,
            ping_agent,
            row_limit: config.row_limit(),
            ads_token: config.ads_token.clone(),
        }
    }

    /// Server-side row cap applied to catalog queries
    pub fn row_limit(&self) -> usize {
        self.row_limit
    }

    pub fn ads_token(&self) -> Option<&str> {
        self.ads_token.as_deref()
    }

    fn request(&self, method: &str, url: &str, query: &[(&str, String)]) -> ureq::Request {
        let mut request = self.agent.request(method, url);
        for (key, value) in query {
            request = request.query(key, value);
        }
        request
    }

    /// GET with query parameters, returning the body as text.
    pub fn get_text(&self, url: &str, query: &[(&str, String)]) -> Result<String> {
        tracing::debug!("GET {} {:?}", url, query);
        let response = self.request("GET", url, query).call();
        read_text(url, response)
    }

    /// GET with extra headers, returning the body as text.
    pub fn get_text_with_headers(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &[(&str, String)],
    ) -> Result<String> {
        tracing::debug!("GET {} {:?}", url, query);
        let mut request = self.request("GET", url, query);
        for (name, value) in headers {
            request = request.set(name, value);
        }
        read_text(url, request.call())
    }

    /// GET that hands back the status and body of any HTTP response.
    ///
    /// For APIs that answer with a meaningful non-2xx body (JPL SBDB uses
    /// 300 for ambiguous names).
    pub fn get_text_any_status(&self, url: &str, query: &[(&str, String)]) -> Result<(u16, String)> {
        tracing::debug!("GET {} {:?}", url, query);
        let resp = match self.request("GET", url, query).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(ureq::Error::Transport(err)) => return Err(Error::Transport(err.to_string())),
        };
        let status = resp.status();
        let body = resp
            .into_string()
            .map_err(|err| Error::Transport(format!("failed to read response body: {}", err)))?;
        Ok((status, body))
    }

    /// Build an [`Error::Http`] for a response body that was already read.
    pub fn http_error(status: u16, url: &str, body: &str) -> Error {
        Error::Http {
            status,
            url: url.to_string(),
            message: excerpt(body),
        }
    }

    pub fn get_json<R>(&self, url: &str, query: &[(&str, String)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let body = self.get_text(url, query)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST an `application/x-www-form-urlencoded` body, returning text.
    pub fn post_form(&self, url: &str, form: &[(&str, String)]) -> Result<String> {
        tracing::debug!("POST {} {:?}", url, form);
        let pairs: Vec<(&str, &str)> = form.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let response = self.agent.post(url).send_form(&pairs);
        read_text(url, response)
    }

    /// One GET with a short timeout. Any HTTP response counts as reachable.
    pub fn ping(&self, url: &str) -> std::result::Result<(u16, Duration), String> {
        let started = Instant::now();
        match self.ping_agent.get(url).call() {
            Ok(resp) => Ok((resp.status(), started.elapsed())),
            Err(ureq::Error::Status(code, _)) => Ok((code, started.elapsed())),
            Err(ureq::Error::Transport(err)) => Err(err.to_string()),
        }
    }
}

fn read_text(url: &str, response: std::result::Result<ureq::Response, ureq::Error>) -> Result<String> {
    match response {
        Ok(resp) => resp
            .into_string()
            .map_err(|err| Error::Transport(format!("failed to read response body: {}", err))),
        Err(ureq::Error::Status(status, resp)) => {
            let body = resp.into_string().unwrap_or_default();
            Err(Error::Http {
                status,
                url: url.to_string(),
                message: excerpt(&body),
            })
        }
        Err(ureq::Error::Transport(err)) => Err(Error::Transport(err.to_string())),
    }
}

/// First few hundred characters of an error body, on one line.
fn excerpt(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= ERROR_BODY_LIMIT {
        return flat;
    }
    let mut out: String = flat.chars().take(ERROR_BODY_LIMIT).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("  bad\n request  "), "bad request");
        let long = "x".repeat(ERROR_BODY_LIMIT + 10);
        assert_eq!(excerpt(&long).chars().count(), ERROR_BODY_LIMIT + 3);
    }

    #[test]
    fn test_client_uses_config() {
        let config = AqcConfig {
            row_limit: Some(42),
            ads_token: Some("token".into()),
            ..AqcConfig::default()
        };
        let client = ArchiveClient::new(&config);
        assert_eq!(client.row_limit(), 42);
        assert_eq!(client.ads_token(), Some("token"));
    }
}
