//! Networking modules for the analysis service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `reply` turns raw bodies into typed results
//! or controller errors, and `types` defines the wire schema.

pub mod api;
pub mod reply;
pub mod types;
