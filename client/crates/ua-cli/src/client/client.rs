use crate::{CliClientResult, ClientError, UsersApi};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url};
use serde::Deserialize;
use ua_core::{ListQuery, NewUser, User, UserDraft};

/// Path of the users resource below the server root.
const USERS_RESOURCE: [&str; 2] = ["api", "users"];

#[derive(Debug, Deserialize)]
struct UserListResponse {
    #[serde(default)]
    users: Option<Vec<User>>,
}

/// HTTP client for the users REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// URL of the users resource with `segments` appended, each one
    /// percent-encoded. An empty last segment leaves a trailing slash.
    pub fn users_url<S: AsRef<str>>(&self, segments: &[S]) -> CliClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::invalid_url(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(USERS_RESOURCE)
            .extend(segments);

        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    /// Send the request and read the whole body
    async fn send(&self, req: reqwest::RequestBuilder) -> CliClientResult<(StatusCode, Vec<u8>)> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok((status, body.to_vec()))
    }
}

/// Body of a success response; other statuses become errors located at the
/// calling API method.
#[track_caller]
fn check((status, body): (StatusCode, Vec<u8>)) -> CliClientResult<Vec<u8>> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(ClientError::from_status(status.as_u16(), &body))
    }
}

#[async_trait]
impl UsersApi for Client {
    async fn list_users(&self, query: &ListQuery) -> CliClientResult<Vec<User>> {
        let segments = query.path_segments();
        let url = self.users_url(segments.as_slice())?;
        let body = check(self.send(self.request(Method::GET, url)).await?)?;
        let response: UserListResponse = serde_json::from_slice(&body)?;
        Ok(response.users.unwrap_or_default())
    }

    async fn create_user(&self, user: &NewUser) -> CliClientResult<User> {
        let url = self.users_url(&[""])?;
        let req = self.request(Method::POST, url).json(user);
        let body = check(self.send(req).await?)?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn update_user(&self, id: i64, draft: &UserDraft) -> CliClientResult<User> {
        let url = self.users_url(&[id.to_string()])?;
        let req = self.request(Method::PUT, url).json(draft);
        let body = check(self.send(req).await?)?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn delete_user(&self, id: i64) -> CliClientResult<()> {
        let url = self.users_url(&[id.to_string()])?;
        check(self.send(self.request(Method::DELETE, url)).await?)?;
        Ok(())
    }
}
