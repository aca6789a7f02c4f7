// orka/tests/common/mod.rs
#![allow(dead_code)]

use once_cell::sync::Lazy;
use orka::{ContextData, OrkaError, PipelineControl};

#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
  pub skip_middle: bool,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Orka framework error: {0}")]
  Orka(String),

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<OrkaError> for TestError {
  fn from(oe: OrkaError) -> Self {
    TestError::Orka(format!("{:?}", oe))
  }
}

/// Records `label` and stops if the context asks for it.
pub fn recording_handler(label: &'static str) -> impl Fn(ContextData<TestContext>) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<PipelineControl, TestError>> + Send>> + Send + Sync + 'static {
  move |ctx: ContextData<TestContext>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.steps_executed.push(label.to_string());
      if guard.should_stop_at.as_deref() == Some(label) {
        return Ok(PipelineControl::Stop);
      }
      Ok(PipelineControl::Continue)
    })
  }
}

static TRACING: Lazy<()> = Lazy::new(|| {
  let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "orka=debug".into());
  let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING);
}
