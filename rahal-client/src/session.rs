//! Auth session guard
//!
//! The credential is the stored username itself; every protected page load
//! re-verifies it against the server. A rejected verification clears the
//! stored identity so the next load lands on the login page.

use shared::models::{LoginRequest, LoginResponse, UserProfile, VerifyRequest, VerifyResponse};
use shared::response::Ack;

use crate::endpoints;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use crate::storage::ClientStorage;

/// Admin session backed by the local store
#[derive(Debug, Clone)]
pub struct Session {
    http: HttpClient,
    storage: ClientStorage,
}

impl Session {
    pub fn new(http: HttpClient, storage: ClientStorage) -> Self {
        Self { http, storage }
    }

    /// Login and persist the identity on success
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<UserProfile> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp: LoginResponse = self.http.post(endpoints::AUTH_LOGIN, &req).await?;

        if !resp.success {
            return Err(ClientError::Rejected(
                resp.message.unwrap_or_else(|| "login failed".to_string()),
            ));
        }

        let profile = resp.user.unwrap_or(UserProfile {
            username: username.to_string(),
            display_name: None,
            role: None,
        });

        self.storage.set_username(&profile.username)?;
        self.storage.set_profile(&profile)?;
        Ok(profile)
    }

    /// Verify the stored identity against the server.
    ///
    /// Called on every protected page load. A missing username or a server
    /// rejection clears storage and yields `Unauthorized`; the caller
    /// redirects to login. Transport failures propagate untouched so a flaky
    /// connection does not log the admin out.
    pub async fn verify(&self) -> ClientResult<UserProfile> {
        let Some(username) = self.storage.username() else {
            return Err(ClientError::Unauthorized);
        };

        let req = VerifyRequest { username };
        let resp: ClientResult<VerifyResponse> = self.http.post(endpoints::AUTH_VERIFY, &req).await;

        match resp {
            Ok(v) if v.valid => {
                let profile = v.user.or_else(|| self.storage.profile()).ok_or(
                    ClientError::InvalidResponse("verify returned no profile".to_string()),
                )?;
                self.storage.set_profile(&profile)?;
                Ok(profile)
            }
            Ok(_) | Err(ClientError::Unauthorized) | Err(ClientError::Rejected(_)) => {
                self.storage.clear_identity()?;
                Err(ClientError::Unauthorized)
            }
            Err(e) => Err(e),
        }
    }

    /// Logout server-side, then clear the stored identity regardless
    pub async fn logout(&self) -> ClientResult<()> {
        let result: ClientResult<Ack> = self.http.post_empty(endpoints::AUTH_LOGOUT).await;
        self.storage.clear_identity()?;
        result.map(|_| ())
    }

    /// Whether an identity is stored (not yet re-verified)
    pub fn has_identity(&self) -> bool {
        self.storage.username().is_some()
    }
}
