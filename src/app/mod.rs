mod core;
mod document;
mod event_bus;
mod event_loop;
mod input_ops;
mod render_ops;
mod state;
pub(crate) mod terminal_session;


pub use core::{App, EffectSubsystem, Navigator};
pub use document::PageDocument;
pub use state::{AppState, Mode, StatusState};
