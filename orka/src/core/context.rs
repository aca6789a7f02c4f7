// orka/src/core/context.rs

//! The boxed handler type every step phase stores.

use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use std::future::Future;
use std::pin::Pin;

/// A pipeline step handler.
///
/// Receives a clone of the run's `ContextData<TData>` and resolves to the control signal
/// for the pipeline, or to the pipeline's error type `Err`.
///
/// Lock guards taken on the context must be dropped before the handler awaits anything.
pub type Handler<TData, Err> = Box<
  dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>
    + Send
    + Sync,
>;
