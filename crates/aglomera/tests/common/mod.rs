//! Shared helpers for the integration tests.

#![allow(dead_code)]

pub mod checks;
pub mod data_gen;
