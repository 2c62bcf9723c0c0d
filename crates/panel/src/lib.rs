//! Orderdesk Panel library.
//!
//! This crate provides the panel functionality as a library, allowing the
//! load-cycle pipeline to be tested and reused (the CLI drives it without a
//! server).
//!
//! # Pipeline
//!
//! An activation carries a host-context snapshot. One load cycle resolves the
//! customer from that snapshot ([`identity`]), fetches and decodes the order
//! collection ([`orders::source`]), then runs the pure stages: filter by the
//! resolved email, summarize, sort for display, and compose the view model.
//! The [`cycle::Session`] guards the displayed result against overlapping
//! activations.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod cycle;
pub mod error;
pub mod identity;
pub mod middleware;
pub mod orders;
pub mod routes;
pub mod state;
