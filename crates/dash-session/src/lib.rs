//! Session state for the dashboard client.
//!
//! [`SessionManager`] owns who is logged in, the auth token, the comments
//! posted during this run and the error the UI should show. Each operation
//! makes at most one call to the auth service and mirrors the outcome into
//! the durable store on a best-effort basis. Failures never escape as error
//! values: they are logged and turned into a display string plus a `bool`.

pub(crate) mod hydration;
pub(crate) mod session_manager;
pub(crate) mod session_state;

#[cfg(test)]
mod tests;

pub use session_manager::SessionManager;
pub use session_state::SessionState;
