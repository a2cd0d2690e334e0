pub mod resolver;
pub mod window;

pub use resolver::{is_federation_managed, resolve_display_status};
pub use window::{FederationPhase, FederationWindow};
