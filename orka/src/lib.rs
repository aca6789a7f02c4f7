// orka/src/lib.rs

//! Orka: named-step async pipelines.
//!
//! A [`Pipeline`] is an ordered list of named steps. Each step carries `before`, `on`
//! and `after` handlers that receive a shared [`ContextData`] and answer with a
//! [`PipelineControl`]. Any handler may stop the run early; any error aborts it.
//! The [`Orka`] registry keys pipelines by their context type so callers only need
//! to build a context and hand it over.

pub mod core;
pub mod error;
pub mod pipeline;
pub mod registry;

// --- Re-exports for the Public API ---

pub use crate::core::context::Handler;
pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::step::{SkipCondition, StepDef};

pub use crate::pipeline::definition::Pipeline;

pub use crate::error::{OrkaError, OrkaResult};

pub use crate::registry::Orka;
