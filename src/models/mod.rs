// Module exports for models

pub mod filter;
pub mod location;
pub mod schedule_item;
pub mod settings;
