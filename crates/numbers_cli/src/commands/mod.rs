//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod draws;
pub mod odds;
pub mod show;
