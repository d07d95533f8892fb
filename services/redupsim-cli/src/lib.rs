//! Redupsim CLI library
//!
//! Command-line front end for the redupsim similarity kernel: corpus
//! analysis against a reference language and single-word classification.

pub mod commands;
pub mod output;
