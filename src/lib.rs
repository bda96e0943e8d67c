//! Blockfall (workspace facade crate).
//!
//! This package keeps a stable `blockfall::{config,core,trace,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use blockfall_config as config;
pub use blockfall_core as core;
pub use blockfall_trace as trace;
pub use blockfall_types as types;
