//! Data models for the dashboard
//!
//! This module contains the record types the dashboard renders:
//! - Stat cards and progress bars for the headline numbers
//! - Sprint progress rows feeding the bar chart
//! - Activity entries feeding the timeline

pub mod activity;
pub mod sprint;
pub mod stat;

// Re-exports for convenient access
pub use activity::{Activity, ActivityKind};
pub use sprint::SprintProgress;
pub use stat::{ProgressBar, StatCard};
