//! Service layer
//!
//! Ties the build, render, and deliver steps together the way an application
//! UI invokes them.

pub mod reports;

pub use reports::ReportService;
