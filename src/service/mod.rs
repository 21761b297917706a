//! Service layer: business logic orchestration.
//!
//! [`NameService`] validates and records visitor names through a
//! [`crate::persistence::NameStore`]; [`ApodClient`] fetches the daily
//! astronomy entry from the external endpoint.

pub mod apod_client;
pub mod name_service;

pub use apod_client::ApodClient;
pub use name_service::NameService;
