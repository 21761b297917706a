//! # apod-registry
//!
//! A small web service that shows NASA's Astronomy Picture of the Day and
//! keeps a persisted registry of visitor names.
//!
//! ## Architecture
//!
//! ```text
//! Browser (web/index.html)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── NameService (service/) ──► NameStore (persistence/) ──► PostgreSQL
//!     │
//!     └── ApodClient (service/)  ──► api.nasa.gov/planetary/apod
//! ```
//!
//! The two halves share nothing but the router: a failing astronomy fetch
//! never affects the registry.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
