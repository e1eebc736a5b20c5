// Schedule dashboard library
// Client-side state engine for the schedule calendar and table views

pub mod models;
pub mod services;
pub mod utils;
