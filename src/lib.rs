pub mod app;
pub mod command;
pub mod config;
pub mod content;
pub mod effects;
pub mod error;
pub mod event;
pub mod input;
pub mod logging;
pub mod nav;
pub mod page;
pub mod ui;
