//! Handler for the home page.
//!
//! Renders a small HTML shell; the page itself reads the flag over
//! `/get-state`, so the rendered output is cacheable.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

#[instrument(skip_all)]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = tera::Context::new();
    context.insert("site_name", &state.config.ui.site_name);
    context.insert("version", &state.config.ui.version);

    let html = state.tera.render("index.html", &context)?;
    Ok(Html(html))
}
