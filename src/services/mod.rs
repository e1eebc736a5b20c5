// Service module exports

pub mod calendar_grid;
pub mod edit_coordinator;
pub mod notification;
pub mod repository;
pub mod schedule_store;
pub mod settings;
pub mod table_view;
