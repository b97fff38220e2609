//! Battleplan library.
//!
//! Exposes the army representation, matchup resolution, arrangement
//! search, configuration, and text protocol modules for use by integration
//! tests and the binary entry point.

pub mod board;
pub mod config;
pub mod protocol;
pub mod resolve;
pub mod search;
