//! Template engine module for rendering the forecast page
//!
//! Uses the Tera templating engine with templates embedded at compile time.
//! Templates ending in `.html` are auto-escaped.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{ForecastPageData, TemplateEngine};
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_forecast_page(&ForecastPageData {
//!     rows: table.rows().to_vec(),
//!     last_observation: Some("2024-03-27".to_string()),
//! })?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use domain::ForecastRecord;
use serde::Serialize;
use tera::{Context, Tera, Value};
use thiserror::Error;
use tracing::debug;

/// Name of the forecast page template
pub const FORECAST_PAGE: &str = "forecast/index.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }
}

/// Forecast page template data
#[derive(Debug, Clone, Serialize)]
pub struct ForecastPageData {
    /// Forecast rows in date order
    pub rows: Vec<ForecastRecord>,
    /// Date of the last historical observation
    pub last_observation: Option<String>,
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const FORECAST_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Weather Forecast</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 2em; }
        table { border-collapse: collapse; }
        th, td { border: 1px solid #ccc; padding: 4px 10px; text-align: right; }
        th { background: #f0f0f0; }
    </style>
</head>
<body>
    <h1>7-Day Weather Forecast</h1>
    {% if last_observation %}<p>Based on observations up to {{ last_observation }}.</p>{% endif %}
    <table>
        <thead>
            <tr>
                <th>Date</th><th>Month</th><th>TMIN</th><th>TMAX</th><th>PRCP</th><th>SNOW</th><th>AWND</th>
            </tr>
        </thead>
        <tbody>
        {% for row in rows %}
            <tr>
                <td>{{ row.DATE }}</td>
                <td>{{ row.MONTH_NAME }}</td>
                <td>{{ row.TMIN | one_decimal }}</td>
                <td>{{ row.TMAX | one_decimal }}</td>
                <td>{{ row.PRCP | one_decimal }}</td>
                <td>{{ row.SNOW | one_decimal }}</td>
                <td>{{ row.AWND | one_decimal }}</td>
            </tr>
        {% endfor %}
        </tbody>
    </table>

    <h2>Look up a date</h2>
    <form method="post" action="/view-data">
        <input type="date" name="date" required>
        <button type="submit">View data</button>
    </form>
</body>
</html>
"#;
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a template engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);
        tera.register_filter("one_decimal", one_decimal_filter);

        tera.add_raw_template(FORECAST_PAGE, embedded::FORECAST_INDEX)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        debug!(templates = tera.get_template_names().count(), "Loaded embedded templates");
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render the forecast page
    pub fn render_forecast_page(&self, data: &ForecastPageData) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("rows", &data.rows);
        ctx.insert("last_observation", &data.last_observation);
        self.render(FORECAST_PAGE, &ctx)
    }
}

/// Custom filter: format a number with exactly one decimal
fn one_decimal_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let n = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg("one_decimal requires a number"))?;
    Ok(Value::String(format!("{n:.1}")))
}
