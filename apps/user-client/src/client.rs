//! Client for the user API

use entities::{NewUser, User, UserUpdate};
use reqwest::{Response, StatusCode};
use thiserror::Error;
use tracing::debug;

/// Client for the user API
#[derive(Debug, Clone)]
pub struct UserClient {
    /// Server URL
    server_url: String,
    /// HTTP client
    http_client: reqwest::Client,
}

impl UserClient {
    /// Create a new client for the server at `server_url`
    pub fn new(server_url: &str) -> Self {
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    fn users_url(&self) -> String {
        format!("{}/api/users", self.server_url)
    }

    fn user_url(&self, id: i64) -> String {
        format!("{}/api/users/{}", self.server_url, id)
    }

    /// List all users
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        debug!("Listing users");
        let response = self.send(self.http_client.get(self.users_url())).await?;
        decode(response).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: i64) -> Result<User, ClientError> {
        debug!(user_id = id, "Fetching user");
        let response = self.send(self.http_client.get(self.user_url(id))).await?;
        decode(response).await
    }

    /// Create a user
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ClientError> {
        validate_fields(&user.name, &user.email)?;
        debug!("Creating user");
        let request = self.http_client.post(self.users_url()).json(user);
        decode(self.send(request).await?).await
    }

    /// Replace a user's name and email
    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User, ClientError> {
        validate_fields(&update.name, &update.email)?;
        debug!(user_id = id, "Updating user");
        let request = self.http_client.put(self.user_url(id)).json(update);
        decode(self.send(request).await?).await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: i64) -> Result<(), ClientError> {
        debug!(user_id = id, "Deleting user");
        self.send(self.http_client.delete(self.user_url(id))).await?;
        Ok(())
    }

    /// Check server health
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let url = format!("{}/health", self.server_url);
        self.send(self.http_client.get(url)).await?;
        Ok(())
    }

    /// Send a request and turn any non-2xx status into an error
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        match error_for_status(response.status()) {
            Some(err) => Err(err),
            None => Ok(response),
        }
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    response
        .json()
        .await
        .map_err(|e| ClientError::Deserialization(e.to_string()))
}

/// Maps a response status to the error it represents, if any
fn error_for_status(status: StatusCode) -> Option<ClientError> {
    if status.is_success() {
        None
    } else if status == StatusCode::NOT_FOUND {
        Some(ClientError::NotFound)
    } else {
        Some(ClientError::Server {
            status: status.as_u16(),
        })
    }
}

/// Rejects empty names and emails before anything is sent
pub fn validate_fields(name: &str, email: &str) -> Result<(), ClientError> {
    if name.trim().is_empty() {
        return Err(ClientError::InvalidInput("name must not be empty".to_string()));
    }
    if email.trim().is_empty() {
        return Err(ClientError::InvalidInput("email must not be empty".to_string()));
    }
    Ok(())
}

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or no response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered 404.
    #[error("User not found")]
    NotFound,

    /// The server answered with any other non-2xx status.
    #[error("Server returned status {status}")]
    Server { status: u16 },

    /// The response body was not the expected JSON.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// A required field was empty; nothing was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
