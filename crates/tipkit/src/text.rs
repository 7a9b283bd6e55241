//! Tooltip text sources.

use std::{error::Error as StdError, fmt, rc::Rc};

use tracing::debug;

/// Error type returned by dynamic text providers.
pub type BoxError = Box<dyn StdError + 'static>;

/// Provider for [`TipText::Dynamic`].
pub type TextFn = Rc<dyn Fn() -> Result<String, BoxError>>;

/// Where the tooltip's text comes from.
#[derive(Clone)]
pub enum TipText {
    /// Fixed text.
    Static(String),
    /// Fixed lines, joined with newlines.
    Lines(Vec<String>),
    /// Computed each time the tooltip is shown.
    Dynamic(TextFn),
}

impl TipText {
    /// Text from a closure, evaluated at show time.
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn() -> Result<String, BoxError> + 'static,
    {
        Self::Dynamic(Rc::new(f))
    }

    /// Produce the text to display. A failing provider yields an empty string.
    pub fn resolve(&self) -> String {
        match self {
            Self::Static(s) => s.clone(),
            Self::Lines(lines) => lines.join("\n"),
            Self::Dynamic(f) => f().unwrap_or_else(|e| {
                debug!(error = %e, "tooltip text provider failed");
                String::new()
            }),
        }
    }
}

impl Default for TipText {
    fn default() -> Self {
        Self::Static(String::new())
    }
}

impl fmt::Debug for TipText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Self::Lines(lines) => f.debug_tuple("Lines").field(lines).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&str> for TipText {
    fn from(s: &str) -> Self {
        Self::Static(s.to_string())
    }
}

impl From<String> for TipText {
    fn from(s: String) -> Self {
        Self::Static(s)
    }
}

impl From<Vec<String>> for TipText {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn static_and_lines() {
        assert_eq!(TipText::from("hello").resolve(), "hello");
        let lines = TipText::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(lines.resolve(), "a\nb");
        assert_eq!(TipText::default().resolve(), "");
    }

    #[test]
    fn dynamic_is_evaluated_each_time() {
        let n = Rc::new(Cell::new(0));
        let c = Rc::clone(&n);
        let text = TipText::dynamic(move || {
            c.set(c.get() + 1);
            Ok(format!("call {}", c.get()))
        });
        assert_eq!(text.resolve(), "call 1");
        assert_eq!(text.resolve(), "call 2");
        assert_eq!(format!("{text:?}"), "Dynamic(..)");
    }

    #[test]
    fn failing_provider_yields_empty() {
        let text = TipText::dynamic(|| Err("no data".into()));
        assert_eq!(text.resolve(), "");
    }
}
