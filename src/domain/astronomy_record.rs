//! Astronomy Picture of the Day records.
//!
//! The provider answers in snake_case ([`ApodPayload`]); clients of this
//! service receive camelCase ([`AstronomyRecord`]). Values pass through
//! untouched and are never stored.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw APOD response body as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ApodPayload {
    /// Publication date (`YYYY-MM-DD`).
    pub date: String,
    /// Entry title.
    pub title: String,
    /// Long-form description.
    pub explanation: String,
    /// Standard resolution media URL; absent for `"other"` media.
    #[serde(default)]
    pub url: Option<String>,
    /// High resolution image URL; absent for videos.
    #[serde(default)]
    pub hdurl: Option<String>,
    /// `"image"`, `"video"` or another provider-defined kind.
    pub media_type: String,
    /// Provider API version.
    #[serde(default)]
    pub service_version: Option<String>,
    /// Credit line; absent for public-domain entries.
    #[serde(default)]
    pub copyright: Option<String>,
}

/// Today's astronomy entry as served by `GET /api/apod`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AstronomyRecord {
    /// Publication date (`YYYY-MM-DD`).
    pub date: String,
    /// Entry title.
    pub title: String,
    /// Long-form description.
    pub explanation: String,
    /// Standard resolution media URL; absent for `"other"` media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// High resolution image URL; absent for videos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    /// Media kind reported by the provider.
    pub media_type: String,
    /// Provider API version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_version: Option<String>,
    /// Credit line; absent for public-domain entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl From<ApodPayload> for AstronomyRecord {
    fn from(p: ApodPayload) -> Self {
        Self {
            date: p.date,
            title: p.title,
            explanation: p.explanation,
            url: p.url,
            hdurl: p.hdurl,
            media_type: p.media_type,
            service_version: p.service_version,
            copyright: p.copyright,
        }
    }
}
