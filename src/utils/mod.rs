//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Short identifier generation
//! - [`url_validator`] - Absolute URL checks for incoming links
//! - [`db_error`] - SQLx error classification

pub mod db_error;
pub mod id_generator;
pub mod url_validator;
