//! E-Insurance Customer Portal
//!
//! Headless front-end core with an MVVM-style split: view models own the
//! per-screen state, spawn network calls on the tokio runtime, and report
//! back to the UI thread through [`events::AppEvent`]. Rendering, routing
//! and styling live outside this crate.

pub mod config;
pub mod events;
pub mod telemetry;
pub mod viewmodel;
