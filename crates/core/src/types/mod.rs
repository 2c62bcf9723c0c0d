//! Core types for Orderdesk.
//!
//! This module provides type-safe wrappers for the domain concepts shared
//! between the panel service and the CLI.

pub mod contact;
pub mod email;
pub mod order;
pub mod summary;
pub mod view;

pub use contact::Contact;
pub use email::{Email, EmailError};
pub use order::OrderRecord;
pub use summary::OrderSummary;
pub use view::ViewModel;
