//! Shared fixtures for the integration tests.

#![allow(dead_code)]

pub mod symbol_assertions;
pub mod workspace;
