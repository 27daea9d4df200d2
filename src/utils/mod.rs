//! Utility modules for browser access, formatting, and logging.
//!
//! Provides:
//! - [`dom`] - Window access and smooth scrolling
//! - [`format`] - Display helpers for labels and positions
//! - [`logger`] - `log` facade backend writing to the browser console
//! - [`timer`] - Cancellable timeout and interval slots

pub mod dom;
pub mod format;
pub mod logger;
pub mod timer;
