//! Wire models exchanged with the signup service.

pub mod activity;
pub mod auth;
pub mod errors;

pub use activity::{Activity, ActivityMap};
pub use auth::{LoginResponse, MeResponse, MessageResponse};
pub use errors::{ApiError, ErrorDetail};
