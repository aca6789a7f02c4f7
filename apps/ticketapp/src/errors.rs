// apps/ticketapp/src/errors.rs

use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use orka::OrkaError;
use ticketapp_core::CoreError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Page not found")]
  NotFound,

  /// Not really a failure: the visitor has to sign in first.
  #[error("Authentication required")]
  AuthRequired,

  #[error("Template Error: {message}")]
  Template {
    message: String,
    template: String,
    pages_dir: String,
    /// `None` when the pages directory itself is missing.
    available: Option<Vec<String>>,
  },

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("{0}")]
  Core(#[from] CoreError),

  #[error("Orka Workflow Error: {source}")]
  Workflow {
    #[from]
    source: OrkaError,
  },

  #[error("{0}")]
  Internal(String),
}

impl From<actix_web::error::BlockingError> for AppError {
  fn from(err: actix_web::error::BlockingError) -> Self {
    AppError::Internal(format!("Blocking task failed: {}", err))
  }
}

impl AppError {
  /// Plain-text body for the template diagnostic page.
  fn template_diagnostic(&self) -> Option<String> {
    let AppError::Template {
      message,
      template,
      pages_dir,
      available,
    } = self
    else {
      return None;
    };

    let mut body = format!("Template Error: {}\n\nTemplate path: {}\n", message, template);
    match available {
      Some(files) => {
        body.push_str(&format!("Available templates in {}:\n", pages_dir));
        for file in files {
          body.push_str(&format!("- {}\n", file));
        }
      }
      None => body.push_str(&format!("Pages directory not found: {}\n", pages_dir)),
    }
    Some(body)
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::NotFound => StatusCode::NOT_FOUND,
      AppError::AuthRequired => StatusCode::FOUND,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    match self {
      AppError::NotFound => HttpResponse::NotFound()
        .content_type(mime_text())
        .body("Page not found"),
      AppError::AuthRequired => HttpResponse::Found()
        .insert_header((header::LOCATION, "/login"))
        .finish(),
      AppError::Template { .. } => {
        tracing::error!(application_error = %self, "Responding with template diagnostic");
        HttpResponse::InternalServerError()
          .content_type(mime_text())
          .body(self.template_diagnostic().unwrap_or_default())
      }
      other => {
        // Log the full error when it's turned into a response
        tracing::error!(application_error = ?other, "Responding with error");
        HttpResponse::InternalServerError()
          .content_type(mime_text())
          .body(format!("Application Error: {}", other))
      }
    }
  }
}

fn mime_text() -> &'static str {
  "text/plain; charset=utf-8"
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
