//! Lunaris - next period prediction service
//!
//! This crate serves a single prediction form: it checks the submitted cycle
//! profile, asks a trained regression model for the days until the next
//! period and turns the estimate into a dated range with notices.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
