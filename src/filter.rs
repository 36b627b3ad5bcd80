//! Template helper that exposes [`TextWrapper::wrap`] to handlebars.
//!
//! The helper is registered once per registry, usually at startup:
//!
//! ```text
//! {{wrapText page.body}}      groups of the configured default (50)
//! {{wrapText page.body 40}}   groups of 40 words
//! ```
//!
//! Output is written raw so the `<br>` markers reach the page as markup.

use crate::config::Config;
use crate::text::{validate_words_per_line, TextWrapper, WrapError, DEFAULT_WORDS_PER_LINE};
use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
    RenderErrorReason,
};
use serde_json::Value as Json;
use std::borrow::Cow;
use tracing::debug;

/// Name the helper is registered under unless configured otherwise.
pub const DEFAULT_FILTER_NAME: &str = "wrapText";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapTextHelper {
    default_words_per_line: usize,
}

impl WrapTextHelper {
    pub fn new(default_words_per_line: usize) -> Self {
        Self {
            default_words_per_line,
        }
    }

    pub fn default_words_per_line(&self) -> usize {
        self.default_words_per_line
    }
}

impl Default for WrapTextHelper {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_PER_LINE)
    }
}

/// Textual form of a template value. `null` (and missing paths, which
/// handlebars resolves to `null`) is the absent input.
pub fn input_text(value: &Json) -> Option<Cow<'_, str>> {
    match value {
        Json::Null => None,
        Json::String(text) => Some(Cow::Borrowed(text)),
        Json::Bool(flag) => Some(Cow::Owned(flag.to_string())),
        Json::Number(number) => Some(Cow::Owned(number.to_string())),
        Json::Array(_) | Json::Object(_) => Some(Cow::Owned(value.to_string())),
    }
}

/// Reads the words-per-line argument. Only positive integers are accepted.
pub fn words_per_line_arg(value: &Json) -> Result<usize, WrapError> {
    match value {
        Json::Number(number) => {
            if let Some(signed) = number.as_i64() {
                validate_words_per_line(signed)
            } else if let Some(unsigned) = number.as_u64() {
                usize::try_from(unsigned).map_err(|_| {
                    WrapError::InvalidArgument(format!(
                        "words per line is out of range: {}",
                        unsigned
                    ))
                })
            } else {
                Err(WrapError::InvalidArgument(format!(
                    "words per line must be an integer, got {}",
                    number
                )))
            }
        }
        other => Err(WrapError::InvalidArgument(format!(
            "words per line must be an integer, got {}",
            other
        ))),
    }
}

fn helper_error(name: &str, err: WrapError) -> RenderError {
    RenderErrorReason::Other(format!("{}: {}", name, err)).into()
}

impl HelperDef for WrapTextHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let input = h.param(0).ok_or_else(|| {
            RenderError::from(RenderErrorReason::Other(format!(
                "{}: missing text argument",
                h.name()
            )))
        })?;

        let Some(text) = input_text(input.value()) else {
            debug!(helper = h.name(), "absent input, nothing to wrap");
            return Ok(());
        };

        let words_per_line = match h.param(1) {
            Some(param) => {
                words_per_line_arg(param.value()).map_err(|e| helper_error(h.name(), e))?
            }
            None => self.default_words_per_line,
        };

        let wrapped = TextWrapper::wrap(Some(text.as_ref()), Some(words_per_line))
            .map_err(|e| helper_error(h.name(), e))?;

        debug!(
            helper = h.name(),
            words_per_line,
            input_len = text.len(),
            output_len = wrapped.len(),
            "wrapped text"
        );

        out.write(&wrapped)?;
        Ok(())
    }
}

/// Registers the helper under the configured name and default width.
pub fn register(registry: &mut Handlebars<'_>, config: &Config) {
    debug!(
        name = %config.filter_name,
        words_per_line = config.words_per_line,
        "registering wrap helper"
    );
    registry.register_helper(
        &config.filter_name,
        Box::new(WrapTextHelper::new(config.words_per_line)),
    );
}

/// Registers the helper as `wrapText` with the default width of 50.
pub fn register_default(registry: &mut Handlebars<'_>) {
    registry.register_helper(DEFAULT_FILTER_NAME, Box::new(WrapTextHelper::default()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> Handlebars<'static> {
        let mut registry = Handlebars::new();
        register_default(&mut registry);
        registry
    }

    #[test]
    fn test_default_helper_width() {
        assert_eq!(WrapTextHelper::default().default_words_per_line(), 50);
        assert_eq!(WrapTextHelper::new(7).default_words_per_line(), 7);
    }

    #[test]
    fn test_input_text_coercion() {
        assert_eq!(input_text(&json!(null)), None);
        assert_eq!(input_text(&json!("a b")).as_deref(), Some("a b"));
        assert_eq!(input_text(&json!(42)).as_deref(), Some("42"));
        assert_eq!(input_text(&json!(true)).as_deref(), Some("true"));
        assert_eq!(input_text(&json!(["x", "y"])).as_deref(), Some(r#"["x","y"]"#));
    }

    #[test]
    fn test_words_per_line_arg() {
        assert_eq!(words_per_line_arg(&json!(40)).unwrap(), 40);
        assert!(words_per_line_arg(&json!(0)).is_err());
        assert!(words_per_line_arg(&json!(-2)).is_err());
        assert!(words_per_line_arg(&json!(2.5)).is_err());
        assert!(words_per_line_arg(&json!("40")).is_err());
        assert!(words_per_line_arg(&json!(null)).is_err());
        assert!(words_per_line_arg(&json!(false)).is_err());
    }

    #[test]
    fn test_helper_wraps_context_value() {
        let rendered = registry()
            .render_template("{{wrapText body 2}}", &json!({"body": "a b c d e"}))
            .unwrap();
        assert_eq!(rendered, "a b<br>c d<br>e");
    }

    #[test]
    fn test_helper_uses_default_width() {
        let body = vec!["w"; 51].join(" ");
        let rendered = registry()
            .render_template("{{wrapText body}}", &json!({ "body": body }))
            .unwrap();
        assert_eq!(rendered.matches("<br>").count(), 1);
        assert!(rendered.ends_with("<br>w"));
    }

    #[test]
    fn test_helper_missing_value_renders_nothing() {
        let rendered = registry()
            .render_template("[{{wrapText missing 3}}]", &json!({}))
            .unwrap();
        assert_eq!(rendered, "[]");
    }

    #[test]
    fn test_helper_null_ignores_bad_width() {
        let rendered = registry()
            .render_template("[{{wrapText body 0}}]", &json!({"body": null}))
            .unwrap();
        assert_eq!(rendered, "[]");
    }

    #[test]
    fn test_helper_rejects_zero_width() {
        let result = registry().render_template("{{wrapText body 0}}", &json!({"body": "a b"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_helper_rejects_string_width() {
        let result =
            registry().render_template(r#"{{wrapText body "x"}}"#, &json!({"body": "a b"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_register_uses_config() {
        let config = Config {
            words_per_line: 2,
            filter_name: "wrap".to_string(),
        };
        let mut registry = Handlebars::new();
        register(&mut registry, &config);

        let rendered = registry
            .render_template("{{wrap body}}", &json!({"body": "a b c"}))
            .unwrap();
        assert_eq!(rendered, "a b<br>c");
    }
}
