//! Kikaku Studio - Interactive Proposal Worksheet Backend
//!
//! This crate implements an eight-stage business-proposal worksheet with a
//! hierarchical category/industry/service selection that is reconciled on
//! every interaction while the whole view is recomputed.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
