use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use service::errors::ServiceError;
use tera::{Context, Tera};
use tracing::error;

use crate::errors::status_for;

const BUNDLED_TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Compiled tera templates. Names are given without the `.html.tera` suffix.
pub struct Views {
    tera: Tera,
}

/// A rendered `error` page with its status code.
#[derive(Debug)]
pub struct PageError {
    pub status: StatusCode,
    pub body: String,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, Html(self.body)).into_response()
    }
}

impl Views {
    /// Load every `*.tera` file under `dir`, or the bundled templates when `None`.
    pub fn load(dir: Option<&str>) -> Result<Self, tera::Error> {
        let dir = dir.unwrap_or(BUNDLED_TEMPLATES).trim_end_matches('/');
        let mut tera = Tera::new(&format!("{dir}/**/*.tera"))?;
        tera.autoescape_on(vec![".html.tera"]);
        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, ctx: &Context) -> Result<Html<String>, tera::Error> {
        self.tera.render(&format!("{template}.html.tera"), ctx).map(Html)
    }

    /// Render `template` for a page route; failures become a 500 page.
    pub fn page(&self, template: &str, ctx: &Context) -> Result<Html<String>, PageError> {
        self.render(template, ctx).map_err(|e| {
            error!(template, error = %e, "template render failed");
            PageError { status: StatusCode::INTERNAL_SERVER_ERROR, body: "Template error".to_string() }
        })
    }

    /// Render the `error` view for a failed service call.
    pub fn error_page(&self, err: ServiceError) -> PageError {
        let status = status_for(&err);
        let message = match &err {
            ServiceError::Validation(m) | ServiceError::NotFound(m) => m.clone(),
            _ => {
                error!(error = %err, "page request failed");
                "Internal Server Error".to_string()
            }
        };
        let mut ctx = Context::new();
        ctx.insert("status", &status.as_u16());
        ctx.insert("error", &message);
        let body = self.render("error", &ctx).map(|h| h.0).unwrap_or(message);
        PageError { status, body }
    }
}
