//! Client context for communicating with the hbnb backend.

use crate::{
    context,
    error::{WebError, WebResult},
    token::{self, SessionToken},
};
use hbnb_api::{request as req, response as res};
use reqwasm::http::{Request, Response};
use std::sync::OnceLock;

/// Compile-time configured backend address; empty means same-origin
/// relative URLs.
static BACKEND_ADDRESS: OnceLock<&'static str> = OnceLock::new();

pub(super) fn set_backend_address(addr: &'static str) {
    let _ = BACKEND_ADDRESS.set(addr);
}

#[derive(Clone, Copy)]
pub struct Client {
    base: &'static str,
}

/// Non-API methods
impl Client {
    pub(super) fn new() -> Self {
        Self {
            base: BACKEND_ADDRESS.get().copied().unwrap_or(""),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    fn network_error(err: reqwasm::Error) -> WebError {
        WebError::new(format!(
            "Could not reach the server, check that the backend is running: {err}"
        ))
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }

    async fn assert_success(&self, res: &Response) -> WebResult<()> {
        match res.status() {
            200..=299 => Ok(()),
            401 => {
                tracing::warn!("Server rejected the session token");
                // not logged in according to the server, re-read our state
                context::refresh_session();
                Err(WebError::http(401, "Unauthorized"))
            }
            404 => Err(WebError::http(
                404,
                "Not found: the API route does not exist, check the server or proxy configuration",
            )),
            code @ (502 | 503 | 504) => Err(WebError::http(
                code,
                "The API is unavailable, check that the backend process is up",
            )),
            code => {
                let bytes = res.binary().await.unwrap_or_default();
                let message = match serde_json::from_slice::<res::Error>(&bytes) {
                    Ok(error) => error.error,
                    Err(_) => {
                        let body = String::from_utf8_lossy(&bytes);
                        if body.trim().is_empty() {
                            format!("HTTP {code} {}", res.status_text())
                        } else {
                            body.into_owned()
                        }
                    }
                };
                Err(WebError::http(code, message))
            }
        }
    }
}

/// API methods
impl Client {
    pub async fn list_places(&self) -> WebResult<Vec<res::Place>> {
        tracing::info!("Fetching places");

        let mut request = Request::get(&self.url("/api/v1/places/"));
        if let Some(token) = token::load() {
            request = request.header("Authorization", &Self::bearer(&token.raw));
        }
        let res = request.send().await.map_err(Self::network_error)?;
        self.assert_success(&res).await?;
        // a non-JSON body degrades to an empty list rather than erroring
        let places = res.json().await.unwrap_or_default();

        tracing::info!("Fetched places");
        Ok(places)
    }

    /// Fetches a single listing; `Ok(None)` on a non-2xx so the caller can
    /// render a not-found notice. A 401 still goes through `assert_success`
    /// so the session state gets refreshed.
    pub async fn get_place(&self, id: &str) -> WebResult<Option<res::Place>> {
        tracing::info!("Fetching place {id}");

        let mut request = Request::get(&self.url(&format!("/api/v1/places/{id}")));
        if let Some(token) = token::load() {
            request = request.header("Authorization", &Self::bearer(&token.raw));
        }
        let res = request.send().await.map_err(Self::network_error)?;
        if res.status() == 401 {
            self.assert_success(&res).await?;
        }
        if !(200..=299).contains(&res.status()) {
            tracing::warn!("Fetching place {id} failed: HTTP {}", res.status());
            return Ok(None);
        }
        let place = res.json().await.ok();

        tracing::info!("Fetched place {id}");
        Ok(place)
    }

    /// The review collection is not listing-scoped on the server, the
    /// caller filters by place id.
    pub async fn list_reviews(&self) -> WebResult<Vec<res::Review>> {
        tracing::info!("Fetching reviews");

        let res = Request::get(&self.url("/api/v1/reviews/"))
            .send()
            .await
            .map_err(Self::network_error)?;
        self.assert_success(&res).await?;
        let reviews = res.json().await.unwrap_or_default();

        tracing::info!("Fetched reviews");
        Ok(reviews)
    }

    /// Logs in and returns the bearer token; the caller persists it.
    pub async fn login(&self, email: &str, password: &str) -> WebResult<String> {
        tracing::info!("Logging in as {email}");

        let login = req::Login {
            email: email.into(),
            password: password.into(),
        };
        let json = serde_json::to_string(&login).map_err(WebError::from)?;
        let res = Request::post(&self.url("/api/v1/auth/login"))
            .body(json)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(Self::network_error)?;
        self.assert_success(&res).await?;
        let auth: res::Auth = res.json().await.unwrap_or_default();
        let token = auth
            .access_token
            .ok_or_else(|| WebError::new("The server did not return an access token"))?;

        tracing::info!("Logged in as {email}");
        Ok(token)
    }

    /// Registers an account and returns the bearer token; same contract
    /// as `login`.
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> WebResult<String> {
        tracing::info!("Registering {email}");

        let register = req::Register {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
        };
        let json = serde_json::to_string(&register).map_err(WebError::from)?;
        let res = Request::post(&self.url("/api/v1/auth/register"))
            .body(json)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(Self::network_error)?;
        self.assert_success(&res).await?;
        let auth: res::Auth = res.json().await.unwrap_or_default();
        let token = auth
            .access_token
            .ok_or_else(|| WebError::new("The server did not return an access token"))?;

        tracing::info!("Registered {email}");
        Ok(token)
    }

    /// Submits a review. The request body needs the subject id from the
    /// token claims, so a token that does not decode fails locally without
    /// issuing a request.
    pub async fn submit_review(
        &self,
        token: &SessionToken,
        place_id: &str,
        text: &str,
        rating: i32,
    ) -> WebResult<()> {
        let Some(user_id) = token.user_id() else {
            return Err(WebError::new("Invalid session."));
        };
        tracing::info!("Submitting review for place {place_id}");

        let review = req::NewReview {
            text: text.into(),
            rating,
            user_id: user_id.into(),
            place_id: place_id.into(),
        };
        let json = serde_json::to_string(&review).map_err(WebError::from)?;
        let res = Request::post(&self.url("/api/v1/reviews/"))
            .header("Authorization", &Self::bearer(&token.raw))
            .body(json)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(Self::network_error)?;
        self.assert_success(&res).await?;

        tracing::info!("Submitted review for place {place_id}");
        Ok(())
    }

    pub async fn delete_place(&self, id: &str, token: &SessionToken) -> WebResult<()> {
        tracing::info!("Deleting place {id}");

        let res = Request::delete(&self.url(&format!("/api/v1/places/{id}")))
            .header("Authorization", &Self::bearer(&token.raw))
            .send()
            .await
            .map_err(Self::network_error)?;
        self.assert_success(&res).await?;

        tracing::info!("Deleted place {id}");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use futures_util::FutureExt;

    #[test]
    fn review_with_undecodable_token_is_rejected_without_a_request() {
        let client = Client { base: "" };
        let token = SessionToken::new("garbage".to_string());

        // resolving on the first poll proves no request was awaited
        let result = client
            .submit_review(&token, "place-1", "Nice place", 5)
            .now_or_never()
            .expect("failed to resolve without a request");

        let err = result.expect_err("expected a local rejection");
        assert_eq!(err.status, 0);
        assert_eq!(err.message, "Invalid session.");
    }
}
