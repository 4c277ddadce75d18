use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::error::{authentication_error, validation_error, ClientResult, Error};
use crate::models::{
    Event, EventPatch, EventQuery, LoginResponse, NewEvent, Page, PagePatch, Place, PlaceEvents,
    SetupCredentials, User,
};

/// Client for the Gancio API.
///
/// Holds the base URL of a Gancio instance and an optional bearer token.
/// The token can be supplied up front with [`GancioClient::with_access_token`]
/// or obtained by calling [`GancioClient::login`]; operations that mutate
/// server state refuse to run without one.
///
/// Every method performs a single blocking HTTP request; nothing is cached
/// between calls and nothing is retried.
#[derive(Debug, Clone)]
pub struct GancioClient {
    base_url: String,
    access_token: Option<String>,
    refresh_token: Option<String>,
    http: HttpClient,
}

impl GancioClient {
    /// Create a client for the Gancio instance at `base_url`.
    ///
    /// A deployment that serves the API under a prefix (e.g. `/api`)
    /// includes that prefix in the base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: None,
            refresh_token: None,
            http: HttpClient::new(),
        }
    }

    /// Use a pre-existing access token for authenticated requests.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The access token currently attached to the session, if any
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// The refresh token returned by the last login, if any
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Log in and store the returned tokens for future requests.
    ///
    /// Any non-2xx response means the credentials were rejected.
    pub fn login(&mut self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let url = self.endpoint("/auth/login")?;
        debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(authentication_error(&format!(
                "Login failed: HTTP {} - {}",
                status.as_u16(),
                body
            )));
        }

        let data: LoginResponse = parse_json(response)?;
        self.access_token = Some(data.access_token.clone());
        self.refresh_token = data.refresh_token.clone();
        info!(
            "Logged in as '{}' @ {}",
            data.username.as_deref().unwrap_or(email),
            self.base_url
        );
        Ok(data)
    }

    /// Fetch the currently authenticated user.
    pub fn get_user(&self) -> ClientResult<User> {
        self.require_token()?;
        let url = self.endpoint("/user")?;
        let response = self.send(self.request(Method::GET, url))?;
        parse_json(response)
    }

    /// Fetch events matching the given filters, in server order.
    pub fn get_events(&self, query: &EventQuery) -> ClientResult<Vec<Event>> {
        let mut url = self.endpoint("/events")?;
        query.append_to(&mut url);
        let response = self.send(self.request(Method::GET, url))?;
        parse_json(response)
    }

    /// Fetch one event by its slug or id.
    pub fn get_event(&self, slug_or_id: &str) -> ClientResult<Event> {
        let url = self.endpoint(&format!("/event/{}", slug_or_id))?;
        let response = self.send(self.request(Method::GET, url))?;
        parse_json(response)
    }

    /// Create a new event and return it as stored by the server.
    ///
    /// `title` and `start_datetime` must be set; when either is missing the
    /// call fails with a validation error before any request is made.
    pub fn create_event(&self, event: &NewEvent) -> ClientResult<Event> {
        self.require_token()?;
        if event.title.trim().is_empty() {
            return Err(validation_error("Event title must not be empty"));
        }
        if event.start_datetime <= 0 {
            return Err(validation_error("Event start_datetime must be set"));
        }

        let url = self.endpoint("/event")?;
        let response = self.send(self.request(Method::POST, url).json(event))?;
        let created: Event = parse_json(response)?;
        info!("Created event '{}' (id {})", created.title, created.id);
        Ok(created)
    }

    /// Apply a partial update to an event and return the updated event.
    pub fn update_event(&self, event_id: u64, patch: &EventPatch) -> ClientResult<Event> {
        self.require_token()?;
        let url = self.endpoint(&format!("/event/{}", event_id))?;
        let response = self.send(self.request(Method::PUT, url).json(patch))?;
        let updated: Event = parse_json(response)?;
        info!("Updated event {}", event_id);
        Ok(updated)
    }

    /// Delete an event. Deleting an id the server no longer knows fails
    /// with a not-found error.
    pub fn delete_event(&self, event_id: u64) -> ClientResult<()> {
        self.require_token()?;
        let url = self.endpoint(&format!("/event/{}", event_id))?;
        self.send(self.request(Method::DELETE, url))?;
        info!("Deleted event {}", event_id);
        Ok(())
    }

    /// Confirm a pending event so it becomes visible.
    pub fn confirm_event(&self, event_id: u64) -> ClientResult<()> {
        self.require_token()?;
        let url = self.endpoint(&format!("/event/confirm/{}", event_id))?;
        self.send(self.request(Method::PUT, url))?;
        info!("Confirmed event {}", event_id);
        Ok(())
    }

    /// Search places by name. An empty result is not an error.
    pub fn search_place(&self, query: &str) -> ClientResult<Vec<Place>> {
        let mut url = self.endpoint("/place")?;
        url.query_pairs_mut().append_pair("search", query);
        let response = self.send(self.request(Method::GET, url))?;
        parse_json(response)
    }

    /// Find a place by name, returning the first match.
    pub fn get_place(&self, name: &str) -> ClientResult<Option<Place>> {
        let mut results = self.search_place(name)?;
        if results.is_empty() {
            Ok(None)
        } else {
            Ok(Some(results.remove(0)))
        }
    }

    /// Fetch a place and its upcoming events, or `None` when the server
    /// does not know the place.
    pub fn get_place_events(&self, name: &str) -> ClientResult<Option<PlaceEvents>> {
        let url = self.endpoint(&format!("/place/{}", name))?;
        match self.send(self.request(Method::GET, url)) {
            Ok(response) => Ok(Some(parse_json(response)?)),
            Err(Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Configure the database during first-run setup.
    ///
    /// `storage` is the SQLite database path and only applies when
    /// `dialect` is `"sqlite"`.
    pub fn setup_db(&self, dialect: &str, storage: Option<&str>) -> ClientResult<()> {
        let mut db = serde_json::json!({ "dialect": dialect });
        if dialect == "sqlite" {
            db["storage"] = serde_json::json!(storage.unwrap_or("/opt/gancio/db.sqlite"));
        }

        let url = self.endpoint("/setup/db")?;
        self.send(
            self.request(Method::POST, url)
                .json(&serde_json::json!({ "db": db })),
        )?;
        Ok(())
    }

    /// Complete first-run setup, creating an admin user and restarting the
    /// instance. Returns the generated admin credentials.
    pub fn setup_restart(&self) -> ClientResult<SetupCredentials> {
        let url = self.endpoint("/setup/restart")?;
        let response = self.send(self.request(Method::POST, url))?;
        parse_json(response)
    }

    /// Apply a partial update to a page and return the updated page.
    pub fn update_page(&self, page_id: u64, patch: &PagePatch) -> ClientResult<Page> {
        self.require_token()?;
        let url = self.endpoint(&format!("/pages/{}", page_id))?;
        let response = self.send(self.request(Method::PUT, url).json(patch))?;
        let page: Page = parse_json(response)?;
        info!("Updated page {}", page_id);
        Ok(page)
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| validation_error(&format!("Invalid URL for '{}': {}", path, e)))
    }

    /// Build a request for `url`, attaching the bearer token when present.
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url);
        let mut request = self.http.request(method, url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Send a request, mapping transport failures and error statuses.
    fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().map_err(|e| Error::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let path = response.url().path().to_string();
        let body = response.text().unwrap_or_default();
        Err(error_for_status(&path, status, body))
    }

    /// Fail fast when an operation needs a token and none is set.
    fn require_token(&self) -> ClientResult<()> {
        if self.access_token.is_none() {
            return Err(authentication_error(
                "No access token set; log in or supply one with with_access_token()",
            ));
        }
        Ok(())
    }
}

fn parse_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    response
        .json()
        .map_err(|e| Error::Serialization(e.to_string()))
}

/// Map an error status to the matching error variant
fn error_for_status(path: &str, status: StatusCode, body: String) -> Error {
    let detail = format!("{} -> {}: {}", path, status.as_u16(), body);
    match status.as_u16() {
        401 | 403 => Error::Authentication(detail),
        400 | 422 => Error::Validation(detail),
        404 => Error::NotFound(detail),
        _ => Error::Server {
            status: status.as_u16(),
            body,
        },
    }
}
