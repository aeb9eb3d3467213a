//! Internal test modules - whitebox tests with crate access
//!
//! Cross-module scenarios that exercise the full pipeline (file lines to
//! sessions to graph to layout) and property-based tests over the pure
//! analysis functions.

mod pipeline_scenarios;
