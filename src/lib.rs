//! Client library for the [Gancio](https://gancio.org) shared-agenda
//! platform.
//!
//! [`GancioClient`] wraps the platform's HTTP API: authentication, event
//! CRUD and moderation, place search, and first-run setup. Each method
//! performs one blocking request and maps the response to a typed result or
//! a typed [`Error`].
//!
//! # Example
//!
//! ```no_run
//! use gancio_client::{GancioClient, NewEvent};
//!
//! fn main() -> miette::Result<()> {
//!     let mut client = GancioClient::new("https://gancio.example.org/api");
//!     client.login("admin@example.org", "password")?;
//!
//!     let event = client.create_event(&NewEvent {
//!         title: "Repair café".to_string(),
//!         start_datetime: 1767225600,
//!         place_name: "Town hall".to_string(),
//!         place_address: "1 Main Street".to_string(),
//!         tags: vec!["diy".to_string()],
//!         ..Default::default()
//!     })?;
//!     println!("created event {}", event.slug.unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::GancioClient;
pub use config::Config;
pub use error::{ClientResult, Error};
pub use models::{
    Event, EventPatch, EventQuery, LoginResponse, Media, NewEvent, Page, PagePatch, Place,
    PlaceEvents, SetupCredentials, User,
};
