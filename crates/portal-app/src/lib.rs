//! # portal-app - Dashboard State Machine
//!
//! TEA-style state machine for the Learner Portal dashboard:
//! [`DashboardState`] is the model, [`Message`] the event vocabulary,
//! and [`update`] the single transition function. Side effects leave
//! the loop as [`UpdateAction`]s dispatched to the collaborator traits
//! in [`services`].
//!
//! ## Modules
//! - `state`: the dashboard model and panel-reset rules
//! - `message`: all user intents
//! - `handler`: `update()` and the per-area handlers
//! - `tabs`, `modal`, `module_list`, `qubits`, `trainer`: UI-local state
//! - `actions`: status-to-action mapping tables
//! - `config`: `.lportal/config.toml` settings
//! - `services`: collaborator traits and their logging stubs

pub mod actions;
pub mod config;
pub mod handler;
pub mod message;
pub mod modal;
pub mod module_list;
pub mod qubits;
pub mod services;
pub mod state;
pub mod tabs;
pub mod trainer;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use handler::{update, UpdateAction, UpdateResult};
pub use message::Message;
pub use state::DashboardState;
pub use tabs::Tab;
