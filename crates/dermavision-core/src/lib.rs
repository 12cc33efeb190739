//! dermavision-core
//!
//! Pure domain types, label naming, risk thresholds and credential sources.
//! No HTTP dependency. This is the shared vocabulary of the DermaVision
//! backend and the source of the web client's TypeScript bindings.

pub mod credentials;
pub mod error;
pub mod labels;
pub mod models;
pub mod thresholds;
