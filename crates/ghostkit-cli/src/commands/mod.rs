//! CLI command implementations for ghostkit.
//!
//! Each module corresponds to a subcommand (`ghostkit <command>`).

pub mod build;
