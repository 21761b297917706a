//! Data Transfer Objects for REST request/response serialization.

pub mod name_dto;

pub use name_dto::*;
