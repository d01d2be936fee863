//! `crewdesk-api` — HTTP surface for the employee directory.

pub mod app;
pub mod context;
pub mod middleware;
