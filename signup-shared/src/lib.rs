//! Shared models and the client-side engine for the Mergington Activities
//! signup service.
//!
//! The engine is split along the two stateful concerns of the client:
//! [`session::SessionManager`] owns the authentication token lifecycle and
//! [`roster::RosterSync`] owns the activity snapshot and the
//! fetch-and-render reconciliation cycle. Both are platform independent:
//! the browser frontend plugs in its own transport ([`api::SignupApi`]),
//! token persistence ([`session::TokenStore`]), and view
//! ([`roster::RenderTarget`]) implementations, and the same seams let the
//! engine run under native tests.

pub mod api;
pub mod message;
pub mod models;
pub mod roster;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;
