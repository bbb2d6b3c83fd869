//! Subcommand handlers for the hubmount binary

pub mod pull;
pub mod resolve;
