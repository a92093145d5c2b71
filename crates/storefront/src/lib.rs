//! Tech House storefront library.
//!
//! This crate provides the terminal storefront as a library, allowing it to
//! be tested and driven by other binaries.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod flows;
pub mod models;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod terminal;
