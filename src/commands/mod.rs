//! Server Read Commands
//!
//! GET wrappers around the JSON list and detail endpoints, organized by
//! domain. Writes go through `form_gateway` submissions instead.

mod employees;
mod projects;
mod tasks;

pub use employees::*;
pub use projects::*;
pub use tasks::*;
