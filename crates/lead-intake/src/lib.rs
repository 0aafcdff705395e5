//! Lead intake workflow for the chapter marketing site.
//!
//! The site's lead-capture form posts here; the workflow writes each lead to
//! the external record store and sends best-effort notification emails.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
