use super::Error;
use crate::config::Secret;
use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder, Response,
};

pub const AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub trait Headers {
    fn default_headers(self, token: &Secret) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &Secret) -> RequestBuilder {
        self.bearer_auth(token.expose())
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, AGENT)
    }
}

/// Turns a sent request into its body text, treating non-2xx statuses as
/// errors.
#[async_trait]
pub trait ResponseHandler {
    async fn handle(self, url: &str) -> Result<String, Error>;
}

#[async_trait]
impl ResponseHandler for Result<Response, reqwest::Error> {
    async fn handle(self, url: &str) -> Result<String, Error> {
        let request_error = |cause| Error::Request {
            url: url.to_owned(),
            cause,
        };

        let response = self.map_err(request_error)?;
        let status = response.status();
        let body = response.text().await.map_err(request_error)?;

        if !status.is_success() {
            log::debug!("{} responded with {}: {}", url, status, body);
            return Err(Error::Status {
                url: url.to_owned(),
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}
