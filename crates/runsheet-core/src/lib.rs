pub mod clock;
pub mod commands;
pub mod drag;
pub mod error;
pub mod planner;
pub mod selection;
pub mod timeline;
