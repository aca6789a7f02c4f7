// orka/src/pipeline/definition.rs

//! The `Pipeline<TData, Err>` struct and its structural edits.

use crate::core::context::Handler;
use crate::core::step::{SkipCondition, StepDef};
use crate::error::{OrkaError, OrkaResult};
use std::collections::HashMap;

/// An ordered list of named steps over the context data `TData`.
///
/// `Err` is what the handlers fail with. It must absorb [`OrkaError`] so that
/// framework failures (a required step with no handlers) surface the same way.
pub struct Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<OrkaError> + Send + Sync + 'static,
{
  pub(crate) steps: Vec<StepDef<TData>>,

  pub(crate) before: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) after: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<OrkaError> + Send + Sync + 'static,
{
  /// Builds a pipeline from `(name, optional, skip_if)` triples, in execution order.
  pub fn new(step_defs: &[(&str, bool, Option<SkipCondition<TData>>)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(name, optional, skip_cond_opt)| StepDef {
        name: (*name).to_string(),
        optional: *optional,
        skip_if: skip_cond_opt.clone(),
      })
      .collect();

    Self {
      steps,
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    }
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  fn position(&self, step_name: &str) -> OrkaResult<usize> {
    self
      .steps
      .iter()
      .position(|s| s.name == step_name)
      .ok_or_else(|| OrkaError::StepNotFound {
        step_name: step_name.to_string(),
      })
  }

  /// Handlers may only be attached to declared steps; a typo here is a setup bug.
  pub(crate) fn ensure_step_exists(&self, step_name: &str) {
    if !self.steps.iter().any(|s| s.name == step_name) {
      panic!("Orka setup error: Step '{}' not found in pipeline definition.", step_name);
    }
  }

  fn ensure_step_not_exists(&self, step_name: &str) -> OrkaResult<()> {
    if self.steps.iter().any(|s| s.name == step_name) {
      return Err(OrkaError::ConfigurationError {
        step_name: step_name.to_string(),
        message: "step already exists in pipeline definition".to_string(),
      });
    }
    Ok(())
  }

  pub fn insert_before_step(
    &mut self,
    existing_step_name: &str,
    new_step_name: impl Into<String>,
    optional: bool,
    skip_if: Option<SkipCondition<TData>>,
  ) -> OrkaResult<()> {
    let idx = self.position(existing_step_name)?;
    let name: String = new_step_name.into();
    self.ensure_step_not_exists(&name)?;
    self.steps.insert(idx, StepDef { name, optional, skip_if });
    Ok(())
  }

  pub fn insert_after_step(
    &mut self,
    existing_step_name: &str,
    new_step_name: impl Into<String>,
    optional: bool,
    skip_if: Option<SkipCondition<TData>>,
  ) -> OrkaResult<()> {
    let idx = self.position(existing_step_name)?;
    let name: String = new_step_name.into();
    self.ensure_step_not_exists(&name)?;
    self.steps.insert(idx + 1, StepDef { name, optional, skip_if });
    Ok(())
  }

  /// Removes the step and every handler attached to it.
  pub fn remove_step(&mut self, step_name: &str) -> OrkaResult<()> {
    let idx = self.position(step_name)?;
    self.steps.remove(idx);
    self.before.remove(step_name);
    self.on.remove(step_name);
    self.after.remove(step_name);
    Ok(())
  }

  pub fn set_optional(&mut self, step_name: &str, optional: bool) -> OrkaResult<()> {
    let idx = self.position(step_name)?;
    self.steps[idx].optional = optional;
    Ok(())
  }

  pub fn set_skip_condition(&mut self, step_name: &str, skip_if: Option<SkipCondition<TData>>) -> OrkaResult<()> {
    let idx = self.position(step_name)?;
    self.steps[idx].skip_if = skip_if;
    Ok(())
  }
}
