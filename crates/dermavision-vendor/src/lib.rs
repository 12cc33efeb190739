//! dermavision-vendor
//!
//! Client for the third-party vision API and normalization of its
//! responses into [`dermavision_core::models::prediction::Prediction`].

pub mod client;
pub mod error;
pub mod normalize;
pub mod request;
