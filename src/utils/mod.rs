//! Logging setup and cross-module tests

pub mod logger;
