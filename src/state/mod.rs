//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by page section (`query`, `recommend`) plus the shared
//! panel switcher (`ui`). Models are plain structs wrapped in `RwSignal`
//! contexts by the app, which keeps every transition testable natively.

pub mod difficulty;
pub mod query;
pub mod recommend;
pub mod seq;
pub mod ui;
