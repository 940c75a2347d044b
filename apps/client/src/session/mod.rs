//! Per-connection session state and its event loop.

pub mod context;
pub mod input;
pub mod overlay;
pub mod runner;


pub use context::{Button, ClickTarget, LookupError, Notice, SessionContext};
pub use input::{Command, InputError, HELP};
pub use overlay::{modal_title, ContextMenu, Frame, PileModal, Point};
pub use runner::run;
