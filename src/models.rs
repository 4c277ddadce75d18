use serde::{Deserialize, Serialize};
use url::Url;

/// A venue attached to events, searchable by name
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Place {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// An image attached to an event
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Media {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A calendar event as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Event {
    pub id: u64,
    pub title: String,
    /// URL slug assigned by the server on creation
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Start time as a Unix timestamp
    pub start_datetime: i64,
    /// End time as a Unix timestamp
    #[serde(default)]
    pub end_datetime: Option<i64>,
    #[serde(default)]
    pub multidate: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub place: Option<Place>,
    #[serde(default)]
    pub media: Vec<Media>,
    #[serde(default)]
    pub online_locations: Vec<String>,
    /// Visibility status; unconfirmed events are hidden
    #[serde(default)]
    pub is_visible: Option<bool>,
    #[serde(default)]
    pub recurrent: Option<serde_json::Value>,
}

/// A place together with its upcoming events
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlaceEvents {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// The currently authenticated user
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct User {
    #[serde(default)]
    pub id: Option<u64>,
    pub email: String,
    #[serde(default)]
    pub settings: serde_json::Value,
}

/// An editable static page
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Page {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub visible: Option<bool>,
}

/// Tokens returned by a successful login
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Admin credentials generated by first-run setup
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SetupCredentials {
    pub email: String,
    pub password: String,
}

/// Payload for creating an event.
///
/// `title` and `start_datetime` are required; unset optional fields are
/// omitted from the request body.
#[derive(Debug, Clone, Serialize, Default)]
pub struct NewEvent {
    pub title: String,
    /// Start time as a Unix timestamp
    pub start_datetime: i64,
    pub place_name: String,
    pub place_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_datetime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multidate: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub online_locations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrent: Option<serde_json::Value>,
}

/// Partial update for an event.
///
/// Only provided fields are transmitted; omitted fields remain unchanged on
/// the server. A provided `tags` list replaces the existing tags.
#[derive(Debug, Clone, Serialize, Default)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_datetime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_datetime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multidate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrent: Option<serde_json::Value>,
}

/// Partial update for a page
#[derive(Debug, Clone, Serialize, Default)]
pub struct PagePatch {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// Filters for listing events.
///
/// All fields are optional; unset fields are omitted from the request. When
/// nothing is set the server returns upcoming events in its own order.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    /// Only return events starting after this Unix timestamp
    pub start: Option<i64>,
    /// Only return events starting before this Unix timestamp
    pub end: Option<i64>,
    /// Filter by tag names
    pub tags: Vec<String>,
    /// Filter by place names
    pub places: Vec<String>,
    /// Free-text search query
    pub query: Option<String>,
    /// Maximum number of events to return
    pub max: Option<u32>,
    /// Page number for pagination
    pub page: Option<u32>,
    /// Include recurring events
    pub show_recurrent: Option<bool>,
    /// Include multi-day events
    pub show_multidate: Option<bool>,
}

impl EventQuery {
    /// The set filters as query parameters. List filters are sent
    /// comma-joined in a single parameter.
    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start {
            pairs.push(("start", start.to_string()));
        }
        if let Some(end) = self.end {
            pairs.push(("end", end.to_string()));
        }
        if !self.tags.is_empty() {
            pairs.push(("tags", self.tags.join(",")));
        }
        if !self.places.is_empty() {
            pairs.push(("places", self.places.join(",")));
        }
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        if let Some(max) = self.max {
            pairs.push(("max", max.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(show_recurrent) = self.show_recurrent {
            pairs.push(("show_recurrent", show_recurrent.to_string()));
        }
        if let Some(show_multidate) = self.show_multidate {
            pairs.push(("show_multidate", show_multidate.to_string()));
        }
        pairs
    }

    /// Append the set filters to `url`. Leaves the URL untouched when no
    /// filter is set.
    pub(crate) fn append_to(&self, url: &mut Url) {
        let pairs = self.pairs();
        if pairs.is_empty() {
            return;
        }
        url.query_pairs_mut().extend_pairs(pairs);
    }
}
