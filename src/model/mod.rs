//! Domain model types (pure data, serde round-trippable).

pub mod error;
pub mod graph;
pub mod log_line;
pub mod session;

pub use error::{AppError, ConfigError, InputError, ServiceError};
pub use graph::{
    DependencyTreeData, FlowchartPayload, GraphMetadata, NavEdge, NavGraph, NavNode,
    ScreenRelation,
};
pub use log_line::{LogLevel, LogLine};
pub use session::Session;
