//! Common utilities, constants, and resources used across the unflatten codebase.
//!
//! This crate provides shared functionality for the unflatten toolkit, including
//! identifier and string handling and general utility functions.

/// Constants used throughout the unflatten codebase.
pub mod constants;

/// General utility functions and types for common tasks.
pub mod utils;
