mod clock;
mod config;
mod errors;
mod service;
mod types;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
pub use errors::SessionError;
pub use service::SessionService;
pub use types::{NewSession, SessionLookup, SessionRecord};
