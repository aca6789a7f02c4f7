// orka/tests/pipeline_execution_tests.rs
mod common;

use common::*;
use orka::{ContextData, OrkaError, Pipeline, PipelineControl, PipelineResult};
use std::sync::Arc;

fn three_step_pipeline() -> Pipeline<TestContext, TestError> {
  let mut p = Pipeline::<TestContext, TestError>::new(&[("first", false, None), ("middle", false, None), ("last", false, None)]);
  for step in ["first", "middle", "last"] {
    p.on_root(step, recording_handler(step));
  }
  p
}

#[tokio::test]
async fn test_steps_run_in_declared_order() {
  setup_tracing();
  let p = three_step_pipeline();
  let ctx = ContextData::new(TestContext::default());

  let result = p.run(ctx.clone()).await.unwrap();

  assert_eq!(result, PipelineResult::Completed);
  assert_eq!(ctx.read().steps_executed, vec!["first", "middle", "last"]);
}

#[tokio::test]
async fn test_before_on_after_phases_order() {
  setup_tracing();
  let mut p = Pipeline::<TestContext, TestError>::new(&[("only", false, None)]);
  p.after_root("only", recording_handler("after"));
  p.on_root("only", recording_handler("on"));
  p.before_root("only", recording_handler("before"));
  let ctx = ContextData::new(TestContext::default());

  p.run(ctx.clone()).await.unwrap();

  assert_eq!(ctx.read().steps_executed, vec!["before", "on", "after"]);
}

#[tokio::test]
async fn test_stop_halts_remaining_steps() {
  setup_tracing();
  let p = three_step_pipeline();
  let ctx = ContextData::new(TestContext {
    should_stop_at: Some("middle".to_string()),
    ..Default::default()
  });

  let result = p.run(ctx.clone()).await.unwrap();

  assert_eq!(result, PipelineResult::Stopped);
  assert_eq!(ctx.read().steps_executed, vec!["first", "middle"]);
}

#[tokio::test]
async fn test_handler_error_aborts_run() {
  setup_tracing();
  let mut p = Pipeline::<TestContext, TestError>::new(&[("boom", false, None), ("never", false, None)]);
  p.on_root("boom", |_ctx: ContextData<TestContext>| {
    Box::pin(async move { Err::<PipelineControl, TestError>(TestError::Handler("disk full".to_string())) })
  });
  p.on_root("never", recording_handler("never"));
  let ctx = ContextData::new(TestContext::default());

  let result = p.run(ctx.clone()).await;

  assert_eq!(result, Err(TestError::Handler("disk full".to_string())));
  assert!(ctx.read().steps_executed.is_empty());
}

#[tokio::test]
async fn test_external_failure_surfaces_as_handler_error() {
  setup_tracing();
  let mut p = Pipeline::<TestContext, TestError>::new(&[("read_file", false, None)]);
  p.on_root("read_file", |_ctx: ContextData<TestContext>| {
    Box::pin(async move {
      let source = anyhow::anyhow!("users.json unreadable");
      Err::<PipelineControl, OrkaError>(source.into())
    })
  });

  let result = p.run(ContextData::new(TestContext::default())).await;

  match result {
    Err(TestError::Orka(s)) => {
      assert!(s.contains("HandlerError"), "got {}", s);
      assert!(s.contains("users.json unreadable"), "got {}", s);
    }
    other => panic!("expected HandlerError, got {:?}", other),
  }
}

#[tokio::test]
async fn test_missing_handler_on_required_step_fails() {
  setup_tracing();
  let p = Pipeline::<TestContext, TestError>::new(&[("unwired", false, None)]);

  let result = p.run(ContextData::new(TestContext::default())).await;

  match result {
    Err(TestError::Orka(s)) => assert!(s.contains("HandlerMissing"), "got {}", s),
    other => panic!("expected HandlerMissing, got {:?}", other),
  }
}

#[tokio::test]
async fn test_optional_step_without_handlers_is_skipped() {
  setup_tracing();
  let mut p = Pipeline::<TestContext, TestError>::new(&[("maybe", true, None), ("last", false, None)]);
  p.on_root("last", recording_handler("last"));
  let ctx = ContextData::new(TestContext::default());

  let result = p.run(ctx.clone()).await.unwrap();

  assert_eq!(result, PipelineResult::Completed);
  assert_eq!(ctx.read().steps_executed, vec!["last"]);
}

#[tokio::test]
async fn test_skip_if_condition_bypasses_step() {
  setup_tracing();
  let mut p = three_step_pipeline();
  p.set_skip_condition("middle", Some(Arc::new(|ctx: ContextData<TestContext>| ctx.read().skip_middle)))
    .unwrap();
  let ctx = ContextData::new(TestContext {
    skip_middle: true,
    ..Default::default()
  });

  p.run(ctx.clone()).await.unwrap();

  assert_eq!(ctx.read().steps_executed, vec!["first", "last"]);
}

#[tokio::test]
async fn test_insert_and_remove_steps() {
  setup_tracing();
  let mut p = three_step_pipeline();
  p.insert_after_step("first", "audit", false, None).unwrap();
  p.on_root("audit", recording_handler("audit"));
  p.remove_step("last").unwrap();

  assert_eq!(p.step_names(), vec!["first", "audit", "middle"]);

  let ctx = ContextData::new(TestContext::default());
  p.run(ctx.clone()).await.unwrap();
  assert_eq!(ctx.read().steps_executed, vec!["first", "audit", "middle"]);
}

#[test]
fn test_structural_edits_on_unknown_step_fail() {
  let mut p = three_step_pipeline();

  assert!(matches!(p.remove_step("nope"), Err(OrkaError::StepNotFound { .. })));
  assert!(matches!(p.set_optional("nope", true), Err(OrkaError::StepNotFound { .. })));
  assert!(matches!(
    p.insert_before_step("first", "middle", false, None),
    Err(OrkaError::ConfigurationError { .. })
  ));
}

#[test]
#[should_panic(expected = "Step 'ghost' not found")]
fn test_attaching_handler_to_unknown_step_panics() {
  let mut p = three_step_pipeline();
  p.on_root("ghost", recording_handler("ghost"));
}
