pub mod config_service;
pub mod http;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::http::{AppApiClient, BrainstormApiClient};
pub use crate::paths::BrainstormPaths;
pub use crate::storage::{FileKeyValueStore, MemoryKeyValueStore, StorageOp};
