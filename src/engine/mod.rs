mod async_engine;
mod errors;

pub use async_engine::AsyncEngine;
pub use errors::EngineError;
