use crate::config::Config;
use crate::errors::AppResult;
use crate::filter;
use crate::io;
use handlebars::Handlebars;
use serde_json::Value as Json;
use std::path::Path;
use tracing::info;

/// Template host with the wrap helper registered.
///
/// The registry is built once and only read afterwards, so a renderer can be
/// shared between threads.
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        let mut registry = Handlebars::new();
        filter::register(&mut registry, config);

        Self { registry }
    }

    pub fn registry(&self) -> &Handlebars<'static> {
        &self.registry
    }

    /// Renders a template string against `data`.
    pub fn render_str(&self, template: &str, data: &Json) -> AppResult<String> {
        Ok(self.registry.render_template(template, data)?)
    }

    /// Reads a template file and renders it against `data`.
    pub fn render_file(&self, path: &Path, data: &Json) -> AppResult<String> {
        let template = io::read_file(path)?;
        info!(template = %path.display(), "rendering template");
        self.render_str(&template, data)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
