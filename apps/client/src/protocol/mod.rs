pub mod bootstrap;
pub mod events;

pub use bootstrap::BootstrapResponse;
pub use events::{InboundEvent, OutboundEvent, ServerError};
