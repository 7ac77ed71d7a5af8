//! Fluent request builder.
//!
//! [`Iconics`] collects the fonts and overlay styles for a request, then
//! targets either a string ([`Iconics::on`]) or anything implementing
//! [`TextTarget`] ([`Iconics::on_target`]). The accumulated settings are a
//! plain [`RequestConfig`]; building a request just hands them to the
//! resolver.
//!
//! # Example
//!
//! ```rust
//! use iconics::{FontAwesome, Iconics, OutputMode};
//! use console::Style;
//!
//! let styled = Iconics::new()
//!     .font(FontAwesome::new())
//!     .style(Style::new().blue())
//!     .on("{icon-faw-star} Starred")
//!     .build();
//!
//! assert_eq!(styled.text(), "\u{f005} Starred");
//! assert_eq!(styled.styles().len(), 1);
//! assert_eq!(styled.render(OutputMode::TermDebug), "[faw]\u{f005}[/faw] Starred");
//! ```

use console::Style;
use log::warn;
use std::sync::Arc;

use crate::font::Typeface;
use crate::markup::resolve;
use crate::registry::FontRegistry;
use crate::styled::StyledText;

/// Something holding text that can be replaced by its resolved form.
///
/// Implement this for widgets, labels, buffers or any other text-bearing
/// value that should have its markup resolved in place.
pub trait TextTarget {
    /// Current text, including any markup.
    fn text(&self) -> String;

    /// Stores the resolved result.
    fn set_styled(&mut self, styled: StyledText);
}

impl TextTarget for String {
    fn text(&self) -> String {
        self.clone()
    }

    fn set_styled(&mut self, styled: StyledText) {
        *self = styled.into_text();
    }
}

impl TextTarget for StyledText {
    fn text(&self) -> String {
        StyledText::text(self).to_string()
    }

    fn set_styled(&mut self, styled: StyledText) {
        *self = styled;
    }
}

/// Fonts and overlay styles for one request.
///
/// An empty `fonts` list means every font in the registry is active.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub fonts: Vec<Arc<dyn Typeface>>,
    pub styles: Vec<Style>,
}

impl RequestConfig {
    /// Resolves `text` with this configuration against `registry`.
    pub fn resolve(&self, registry: &FontRegistry, text: &str) -> StyledText {
        let fonts = registry.active_set(&self.fonts);
        resolve(text, &fonts).with_styles(self.styles.clone())
    }
}

/// Builder for icon resolution requests.
#[derive(Debug, Clone)]
pub struct Iconics<'r> {
    registry: &'r FontRegistry,
    config: RequestConfig,
}

impl Iconics<'static> {
    /// Starts a request against the global registry.
    pub fn new() -> Self {
        Self::with_registry(FontRegistry::global())
    }
}

impl Default for Iconics<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Iconics<'r> {
    /// Starts a request against an explicit registry.
    pub fn with_registry(registry: &'r FontRegistry) -> Self {
        Self {
            registry,
            config: RequestConfig::default(),
        }
    }

    /// Restricts the request to `font` (plus any other fonts added).
    pub fn font<F: Typeface + 'static>(self, font: F) -> Self {
        self.font_arc(Arc::new(font))
    }

    /// Adds a shared font to the request.
    pub fn font_arc(mut self, font: Arc<dyn Typeface>) -> Self {
        self.config.fonts.push(font);
        self
    }

    /// Adds the registry's font for `prefix` to the request.
    ///
    /// Unknown prefixes are skipped with a warning.
    pub fn font_key(self, prefix: &str) -> Self {
        match self.registry.find(prefix) {
            Some(font) => self.font_arc(font),
            None => {
                warn!("no icon font registered for prefix '{}'", prefix);
                self
            }
        }
    }

    /// Adds an overlay style applied to every resolved glyph.
    pub fn style(mut self, style: Style) -> Self {
        self.config.styles.push(style);
        self
    }

    /// The configuration accumulated so far.
    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Targets a string.
    pub fn on(self, text: impl Into<String>) -> IconicsRequest<'r> {
        IconicsRequest {
            registry: self.registry,
            config: self.config,
            text: text.into(),
        }
    }

    /// Targets a text-bearing value, updated in place on build.
    pub fn on_target<'t, T: TextTarget + ?Sized>(
        self,
        target: &'t mut T,
    ) -> TargetRequest<'r, 't, T> {
        TargetRequest {
            registry: self.registry,
            config: self.config,
            target,
        }
    }
}

/// A request targeting a string.
#[derive(Debug, Clone)]
pub struct IconicsRequest<'r> {
    registry: &'r FontRegistry,
    config: RequestConfig,
    text: String,
}

impl IconicsRequest<'_> {
    /// Resolves the markup.
    pub fn build(self) -> StyledText {
        self.config.resolve(self.registry, &self.text)
    }
}

/// A request targeting a [`TextTarget`].
pub struct TargetRequest<'r, 't, T: TextTarget + ?Sized> {
    registry: &'r FontRegistry,
    config: RequestConfig,
    target: &'t mut T,
}

impl<T: TextTarget + ?Sized> TargetRequest<'_, '_, T> {
    /// Resolves the target's markup and writes the result back.
    pub fn build(self) {
        let text = self.target.text();
        let styled = self.config.resolve(self.registry, &text);
        self.target.set_styled(styled);
    }
}
