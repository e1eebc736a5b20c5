// Column filter model
// One entry per filterable column, keyed by column id

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub id: String,
    pub value: String,
}

impl Filter {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    /// A blank filter value matches every row
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}
