//! Placeholder substitution for file paths and contents.
//!
//! Patterns use `{{key}}` placeholders resolved against a flat map of
//! collected parameter values. Substitution is literal: no HTML escaping is
//! applied to values. A pattern author writes `\{{key}}` to keep a literal
//! placeholder in the output.
//!
//! By default a placeholder naming an unknown key renders as empty text. This
//! hides misspelled keys; [`Renderer::strict`] turns it into an error instead.

use crate::template::error::{RenderError, RenderResult};
use crate::template::ParamValues;
use handlebars::Handlebars;

/// Compiles patterns against parameter values.
///
/// Rendering is pure: the same pattern and values always give the same text.
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("strict", &self.is_strict())
            .finish()
    }
}

impl Renderer {
    /// Create a permissive renderer: unknown placeholders become empty text.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { handlebars }
    }

    /// Create a renderer that fails on placeholders naming unknown keys.
    pub fn strict() -> Self {
        let mut renderer = Self::new();
        renderer.handlebars.set_strict_mode(true);
        renderer
    }

    /// Create a renderer in the given mode.
    pub fn with_strict_mode(strict: bool) -> Self {
        if strict {
            Self::strict()
        } else {
            Self::new()
        }
    }

    pub fn is_strict(&self) -> bool {
        self.handlebars.strict_mode()
    }

    /// Render `pattern` with `context`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Pattern`] if the pattern is malformed (for
    /// example an unclosed `{{`), or, in strict mode, if it names a key that
    /// is not in `context`.
    ///
    /// # Example
    ///
    /// ```
    /// use sk_core::template::{render::Renderer, ParamValues};
    ///
    /// let mut values = ParamValues::new();
    /// values.insert("a".to_string(), "1".to_string());
    /// values.insert("b".to_string(), "2".to_string());
    ///
    /// let renderer = Renderer::new();
    /// assert_eq!(renderer.render("{{a}}-{{b}}", &values).unwrap(), "1-2");
    /// assert_eq!(renderer.render("Hello {{x}}!", &ParamValues::new()).unwrap(), "Hello !");
    /// ```
    pub fn render(&self, pattern: &str, context: &ParamValues) -> RenderResult<String> {
        self.handlebars
            .render_template(pattern, context)
            .map_err(|e| RenderError::Pattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Render `pattern` with a permissive [`Renderer`].
pub fn render(pattern: &str, context: &ParamValues) -> RenderResult<String> {
    Renderer::new().render(pattern, context)
}
