use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::filter::Filter;
use crate::models::schedule_item::ScheduleItem;

/// Every state change the schedule store accepts
#[derive(Debug, Clone)]
pub enum ScheduleAction {
    /// Replace the local mirror with a fresh snapshot from the service
    SyncFromSource(Arc<[ScheduleItem]>),
    /// Set the filter for a column, replacing any existing one
    FilterChange(Filter),
    /// Drop the filter for one column, or every filter when `None`
    ClearFilter(Option<String>),
    MarkColumnsHidden,
    ResetHiddenFlag,
}

impl ScheduleAction {
    pub const KINDS: [&'static str; 5] = [
        "syncFromSource",
        "filterChange",
        "clearFilter",
        "markColumnsHidden",
        "resetHiddenFlag",
    ];

    pub fn sync(items: Vec<ScheduleItem>) -> Self {
        ScheduleAction::SyncFromSource(Arc::from(items))
    }

    pub fn filter(id: impl Into<String>, value: impl Into<String>) -> Self {
        ScheduleAction::FilterChange(Filter::new(id, value))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ScheduleAction::SyncFromSource(_) => "syncFromSource",
            ScheduleAction::FilterChange(_) => "filterChange",
            ScheduleAction::ClearFilter(_) => "clearFilter",
            ScheduleAction::MarkColumnsHidden => "markColumnsHidden",
            ScheduleAction::ResetHiddenFlag => "resetHiddenFlag",
        }
    }
}

/// Action in its string-tagged form, `{ "type": ..., "payload": ... }`
#[derive(Debug, Clone, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl RawAction {
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unknown action type: {0}")]
    UnknownAction(String),
    #[error("Malformed payload for {kind}: {source}")]
    MalformedPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

fn payload<T: serde::de::DeserializeOwned>(raw: RawAction) -> Result<T, StoreError> {
    serde_json::from_value(raw.payload).map_err(|source| StoreError::MalformedPayload {
        kind: raw.kind,
        source,
    })
}

impl TryFrom<RawAction> for ScheduleAction {
    type Error = StoreError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            "syncFromSource" => {
                let items: Vec<ScheduleItem> = payload(raw)?;
                Ok(ScheduleAction::sync(items))
            }
            "filterChange" => Ok(ScheduleAction::FilterChange(payload(raw)?)),
            "clearFilter" => Ok(ScheduleAction::ClearFilter(payload(raw)?)),
            "markColumnsHidden" => Ok(ScheduleAction::MarkColumnsHidden),
            "resetHiddenFlag" => Ok(ScheduleAction::ResetHiddenFlag),
            _ => Err(StoreError::UnknownAction(raw.kind)),
        }
    }
}
