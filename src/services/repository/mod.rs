//! Contract for the service that owns schedule data.
//!
//! The dashboard never talks to storage directly; these four calls are its
//! whole read and mutation surface. Timeouts and retries, if any, are the
//! implementation's business.

mod memory;

pub use memory::InMemoryScheduleRepository;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::schedule_item::{FieldValue, NewScheduleItem, ScheduleItem};

/// Acknowledgement returned by a patch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait ScheduleRepository {
    /// Every item, ordered by start date; no items is an empty list
    fn fetch_all(&self) -> Result<Vec<ScheduleItem>>;

    /// Store a candidate; the service assigns id and timestamps
    fn create(&self, candidate: NewScheduleItem) -> Result<ScheduleItem>;

    /// Update exactly one field of one item
    fn patch_field(&self, item_id: i64, field_id: String, value: FieldValue)
        -> Result<ApiResponse>;

    /// Remove a batch of items; succeeds or fails as a whole
    fn delete_many(&self, item_ids: Vec<i64>) -> Result<()>;
}
