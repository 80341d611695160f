//! Learner Portal - student dashboard state model
//!
//! Facade crate: re-exports the domain layer (`portal-core`) and the
//! dashboard state machine (`portal-app`), plus the session report
//! used by the `lportal` binary.

pub mod report;

pub use portal_app::{update, DashboardState, Message, Tab, UpdateAction, UpdateResult};
pub use portal_core::{load_snapshot, Error, PortalSnapshot, Result};
