// apps/ticketapp/src/web/render.rs

//! Tera-backed page renderer.

use parking_lot::RwLock;
use std::error::Error as StdError;
use std::path::{Path, PathBuf};
use tera::Tera;
use tracing::{debug, info, instrument, warn};

use crate::errors::{AppError, Result};

pub struct Renderer {
  templates_dir: PathBuf,
  reload: bool,
  tera: RwLock<Tera>,
}

impl Renderer {
  /// Loads every `*.html` under `templates_dir`. Template names are relative to it,
  /// e.g. `pages/login.html`.
  ///
  /// A missing directory is not fatal: rendering then reports the missing template.
  pub fn new(templates_dir: impl Into<PathBuf>, reload: bool) -> Result<Self> {
    let templates_dir = templates_dir.into();
    let tera = if templates_dir.is_dir() {
      let tera = Tera::new(&glob_for(&templates_dir)).map_err(|e| AppError::Internal(describe(&e)))?;
      info!(
        templates_dir = %templates_dir.display(),
        count = tera.get_template_names().count(),
        "Templates loaded."
      );
      tera
    } else {
      warn!(templates_dir = %templates_dir.display(), "Templates directory not found.");
      Tera::default()
    };

    Ok(Self {
      templates_dir,
      reload,
      tera: RwLock::new(tera),
    })
  }

  pub fn pages_dir(&self) -> PathBuf {
    self.templates_dir.join("pages")
  }

  #[instrument(name = "Renderer::render", skip(self, ctx), err(Display))]
  pub fn render(&self, template: &str, ctx: &tera::Context) -> Result<String> {
    if self.reload {
      self.reload_templates()?;
    }

    let rendered = self.tera.read().render(template, ctx);
    match rendered {
      Ok(html) => {
        debug!(bytes = html.len(), "Template rendered.");
        Ok(html)
      }
      Err(e) => match &e.kind {
        tera::ErrorKind::TemplateNotFound(_) => Err(self.missing_template(template, &e)),
        _ => Err(AppError::Internal(describe(&e))),
      },
    }
  }

  fn reload_templates(&self) -> Result<()> {
    if !self.templates_dir.is_dir() {
      return Ok(());
    }
    let mut guard = self.tera.write();
    if guard.get_template_names().next().is_none() {
      *guard = Tera::new(&glob_for(&self.templates_dir)).map_err(|e| AppError::Internal(describe(&e)))?;
      return Ok(());
    }
    guard.full_reload().map_err(|e| AppError::Internal(describe(&e)))
  }

  fn missing_template(&self, template: &str, err: &tera::Error) -> AppError {
    let pages_dir = self.pages_dir();
    AppError::Template {
      message: describe(err),
      template: template.to_string(),
      pages_dir: pages_dir.display().to_string(),
      available: list_files(&pages_dir),
    }
  }
}

fn glob_for(dir: &Path) -> String {
  format!("{}/**/*.html", dir.display())
}

/// Sorted file names in `dir`, or `None` if it cannot be read.
fn list_files(dir: &Path) -> Option<Vec<String>> {
  let entries = std::fs::read_dir(dir).ok()?;
  let mut names: Vec<String> = entries
    .filter_map(|entry| entry.ok())
    .map(|entry| entry.file_name().to_string_lossy().into_owned())
    .collect();
  names.sort();
  Some(names)
}

/// Tera keeps the useful part of a failure in the source chain.
fn describe(err: &tera::Error) -> String {
  let mut message = err.to_string();
  let mut source = err.source();
  while let Some(cause) = source {
    message.push_str(": ");
    message.push_str(&cause.to_string());
    source = cause.source();
  }
  message
}
