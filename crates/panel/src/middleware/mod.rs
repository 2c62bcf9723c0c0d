//! HTTP middleware for the panel service.

pub mod request_id;
