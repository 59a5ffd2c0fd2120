//! GPS router CLI library.
//!
//! Command handlers and output formatting for the `gps-router` binary. The
//! handlers only talk to the core through `gps_router_lib`'s public entry
//! points.

pub mod commands;
pub mod output;
