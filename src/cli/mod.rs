//! Command-line front end for the `dsalab` binary.

pub mod commands;
