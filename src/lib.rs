//! Apprenticeship-law FAQ assistant: keyword-scored knowledge base, CONAP
//! program catalog and the dispatcher that combines them.

pub mod accounts;
pub mod agents;
pub mod assistant;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod knowledge;
pub mod search;

pub use assistant::{Assistant, Reply, Resolution};
pub use error::BuildError;
