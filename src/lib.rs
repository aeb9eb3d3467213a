//! lognav
//!
//! Session reconstruction and navigation-graph analysis over device log
//! files. Raw log lines are partitioned into app sessions, screen
//! transitions are extracted into a weighted navigation graph, and the graph
//! is laid out hierarchically for rendering.
//!
//! The analysis core is pure and synchronous; everything that talks to the
//! outside world sits behind the `service` traits, with `source` providing
//! local file ingestion and `state` owning the mutable view of one analysis.

pub mod config;
pub mod cursor;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod model;
pub mod parser;
pub mod service;
pub mod session;
pub mod source;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests;
