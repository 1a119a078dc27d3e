//! Player state: the explicit session value and the platform container

pub mod platform;
pub mod session;

pub use platform::Platform;
pub use session::{Screen, SessionState};
