//! CampusConnect dashboard core.
//!
//! Five feature areas (feed, marketplace, events, services, Q&A) share one
//! filter engine ([`collection`]) and one in-memory store ([`store`]). The
//! [`routes`] module exposes them as a local JSON surface for the view layer.

pub mod auth;
pub mod collection;
pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod seed;
pub mod states;
pub mod store;

pub use config::Config;
pub use routes::router;
pub use states::AppState;
