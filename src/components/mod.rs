//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the two page sections and own their browser side
//! effects (requests, dialogs, scrolling), reading and writing the state
//! models provided through Leptos context.

pub mod adaptive_panel;
pub mod confidence_card;
pub mod query_panel;
pub mod tab_bar;
