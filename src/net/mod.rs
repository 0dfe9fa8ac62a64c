//! Networking modules for the backend HTTP contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the `/upload` and `/run_plan` requests, `types` defines the
//! wire schema those endpoints speak, and `error` is the closed set of
//! failure kinds the run flow matches on to decide retry and display.

pub mod api;
pub mod error;
pub mod types;
