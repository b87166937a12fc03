//! Shared helpers.

pub mod persistence;
