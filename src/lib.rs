//! Translation relay backend.
//!
//! A thin axum service that fronts an external translation provider, plus the
//! client-side controller for the translate page: text in, translated text
//! out, with optional speech capture and playback through injected platform
//! capabilities.

pub mod config;
pub mod controller;
pub mod routes;
pub mod speech;
pub mod state;
pub mod translate;
