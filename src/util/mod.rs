//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser side effects (dialogs, scrolling) and presentation formatting live
//! here so state models stay free of web-sys glue.

pub mod confidence;
pub mod notify;
pub mod scroll;
