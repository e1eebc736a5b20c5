//! Postal address value object and its single-line display form.
//!
//! A `formatted` string, when present, is authoritative: it is how free-text
//! legacy addresses that do not decompose into parts survive a round trip.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

impl Location {
    /// Build a location from its parts; the state code is upper-cased
    pub fn new(
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            address: Some(address.into()),
            city: Some(city.into()),
            state: Some(state.into().trim().to_uppercase()),
            zip: Some(zip.into()),
            formatted: None,
        }
    }

    /// A location known only by its display text
    pub fn from_formatted(text: impl Into<String>) -> Self {
        Self {
            formatted: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_formatted(mut self, text: impl Into<String>) -> Self {
        self.formatted = Some(text.into());
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

/// Single-line display string for a location.
///
/// `formatted` is returned verbatim when set. Otherwise the non-empty parts are
/// joined with `", "`, with state and zip sharing one segment.
pub fn format_location(location: Option<&Location>) -> String {
    let Some(location) = location else {
        return String::new();
    };
    if let Some(formatted) = non_empty(&location.formatted) {
        return formatted.to_string();
    }

    let state_zip = match (non_empty(&location.state), non_empty(&location.zip)) {
        (Some(state), Some(zip)) => Some(format!("{} {}", state, zip)),
        (Some(state), None) => Some(state.to_string()),
        (None, Some(zip)) => Some(zip.to_string()),
        (None, None) => None,
    };

    [
        non_empty(&location.address).map(str::to_string),
        non_empty(&location.city).map(str::to_string),
        state_zip,
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}

fn state_zip_pattern() -> &'static Regex {
    static STATE_ZIP_RE: OnceLock<Regex> = OnceLock::new();
    STATE_ZIP_RE.get_or_init(|| {
        Regex::new(r"^([A-Z]{2})\s+(\d{5}(?:-\d{4})?)$").expect("state/zip pattern is valid")
    })
}

/// Parse `"123 Main St, City, ST 12345"` into parts.
///
/// Never fails: text that does not decompose yields a location carrying only
/// `formatted`.
pub fn parse_location(text: &str) -> Location {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        return Location::from_formatted(text);
    }

    let Some(captures) = state_zip_pattern().captures(parts[parts.len() - 1]) else {
        log::debug!("Address '{}' kept as free text", text);
        return Location::from_formatted(text);
    };

    Location {
        address: Some(parts[..parts.len() - 2].join(", ")),
        city: Some(parts[parts.len() - 2].to_string()),
        state: Some(captures[1].to_string()),
        zip: Some(captures[2].to_string()),
        formatted: Some(text.to_string()),
    }
}

/// Maps search URL and the address string it searches for
pub fn maps_url(location: &Location) -> (String, String) {
    let address = match non_empty(&location.formatted) {
        Some(formatted) => formatted.to_string(),
        None => format!(
            "{} {} {}, {}",
            location.address.as_deref().unwrap_or_default().to_lowercase(),
            location.city.as_deref().unwrap_or_default().to_lowercase(),
            location.state.as_deref().unwrap_or_default().to_uppercase(),
            location.zip.as_deref().unwrap_or_default(),
        ),
    };

    let url = format!("{}{}", MAPS_SEARCH_URL, urlencoding::encode(&address));
    (url, address)
}
