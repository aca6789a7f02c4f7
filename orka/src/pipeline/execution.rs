// orka/src/pipeline/execution.rs

//! `Pipeline::run`: walks the steps in order and drives each phase's handlers.

use crate::core::context_data::ContextData;
use crate::core::control::{PipelineControl, PipelineResult};
use crate::core::step::StepDef;
use crate::error::OrkaError;
use crate::pipeline::definition::Pipeline;
use tracing::{event, info_span, instrument, Instrument, Level};

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<OrkaError> + Send + Sync + 'static,
{
  /// Executes every step against `ctx_data`.
  ///
  /// A non-optional step with no handlers at all fails the run with
  /// [`OrkaError::HandlerMissing`], converted into `Err`.
  #[instrument(
    name = "Pipeline::run",
    skip_all,
    fields(
      pipeline_context_data_type = %std::any::type_name::<TData>(),
      num_steps = self.steps.len(),
    ),
    err(Display)
  )]
  pub async fn run(&self, ctx_data: ContextData<TData>) -> Result<PipelineResult, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_span = info_span!(
        "pipeline_step_execution",
        step_name = %step_def.name,
        step_index = step_idx,
        optional = step_def.optional
      );
      let control = self.run_step(step_def, ctx_data.clone()).instrument(step_span).await?;
      if control == PipelineControl::Stop {
        return Ok(PipelineResult::Stopped);
      }
    }

    event!(Level::DEBUG, "Pipeline execution completed successfully.");
    Ok(PipelineResult::Completed)
  }

  async fn run_step(&self, step_def: &StepDef<TData>, ctx_data: ContextData<TData>) -> Result<PipelineControl, Err> {
    if let Some(skip_cond_fn) = &step_def.skip_if {
      if skip_cond_fn(ctx_data.clone()) {
        event!(Level::INFO, "Step skipped due to 'skip_if' condition.");
        return Ok(PipelineControl::Continue);
      }
    }

    let phases = [
      ("before", self.before.get(&step_def.name)),
      ("on", self.on.get(&step_def.name)),
      ("after", self.after.get(&step_def.name)),
    ];

    if phases.iter().all(|(_, handlers)| handlers.map_or(true, |h| h.is_empty())) {
      if step_def.optional {
        event!(Level::DEBUG, "Optional step has no handlers, skipping.");
        return Ok(PipelineControl::Continue);
      }
      event!(Level::ERROR, "Non-optional step has no handlers.");
      return Err(Err::from(OrkaError::HandlerMissing {
        step_name: step_def.name.clone(),
      }));
    }

    for (phase, handlers) in phases {
      for (handler_idx, handler_fn) in handlers.into_iter().flatten().enumerate() {
        match handler_fn(ctx_data.clone()).await {
          Ok(PipelineControl::Continue) => {}
          Ok(PipelineControl::Stop) => {
            event!(Level::INFO, phase, handler_index = handler_idx, "Pipeline stopped by a handler.");
            return Ok(PipelineControl::Stop);
          }
          Err(e) => {
            event!(Level::ERROR, phase, handler_index = handler_idx, error = %e, "Handler failed.");
            return Err(e);
          }
        }
      }
    }

    event!(Level::DEBUG, "Step processing finished successfully.");
    Ok(PipelineControl::Continue)
  }
}
