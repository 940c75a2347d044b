//! Painters turn frames into pixels (or, here, lines of text).

pub mod terminal;

use crate::error::ClientError;
use crate::session::overlay::Frame;

pub use terminal::{render_frame, TerminalPainter};

/// Output side of the client. Every method repaints from scratch.
pub trait Painter: Send {
    fn loading(&mut self) -> Result<(), ClientError>;

    /// Replaces the loading indicator when the bootstrap fetch fails.
    fn loading_failed(&mut self, err: &ClientError) -> Result<(), ClientError>;

    fn paint(&mut self, frame: &Frame) -> Result<(), ClientError>;

    /// Blocking alert. Shown verbatim.
    fn alert(&mut self, message: &str) -> Result<(), ClientError>;

    fn confirm_prompt(&mut self, question: &str) -> Result<(), ClientError>;

    /// Non-modal feedback such as help text or a bad command.
    fn info(&mut self, message: &str) -> Result<(), ClientError>;
}
