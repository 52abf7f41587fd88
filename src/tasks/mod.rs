//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod display_printer;
pub mod stopwatch_loop;

// Re-export main functions
pub use display_printer::display_printer_task;
pub use stopwatch_loop::{spawn_stopwatch_loop, stopwatch_loop_task, QueueScheduler, StopwatchHandle};
