//! DndRpg Engine - all server-side code.

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;
