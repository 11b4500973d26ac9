//! Input field bookkeeping: value ownership, focus, floating label, and
//! supporting text.
//!
//! # Design
//! - Value ownership is chosen once, at construction, via [`ValueSource`].
//! - The floating-label flag is derived on demand and never stored.
//! - Error text always wins over helper text.
//! - Element ids come from a process-wide counter so two fields never collide.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_FIELD: AtomicU64 = AtomicU64::new(1);

/// Who owns the displayed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueSource {
    /// The caller owns the value and pushes every update in.
    Controlled(String),
    /// The field owns the value, starting from the given default.
    Uncontrolled(String),
}

impl Default for ValueSource {
    fn default() -> Self {
        Self::Uncontrolled(String::new())
    }
}

/// Per-instance input field state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputFieldState {
    focused: bool,
    source: ValueSource,
}

impl InputFieldState {
    /// State for the given value source, unfocused.
    #[must_use]
    pub const fn new(source: ValueSource) -> Self {
        Self {
            focused: false,
            source,
        }
    }

    /// Record that the field gained focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Record that the field lost focus.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Record user input. Only an uncontrolled field tracks it; a controlled
    /// field waits for the caller to push the new value back in.
    pub fn input(&mut self, value: String) {
        if let ValueSource::Uncontrolled(current) = &mut self.source {
            *current = value;
        }
    }

    /// Push the caller's value into a controlled field. Ignored when uncontrolled.
    pub fn sync_controlled(&mut self, value: &str) {
        if let ValueSource::Controlled(current) = &mut self.source
            && current != value
        {
            value.clone_into(current);
        }
    }

    /// Current displayed value.
    #[must_use]
    pub fn value(&self) -> &str {
        match &self.source {
            ValueSource::Controlled(value) | ValueSource::Uncontrolled(value) => value,
        }
    }

    /// Whether the field currently has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the label sits above the input.
    #[must_use]
    pub fn label_floating(&self) -> bool {
        label_floats(self.focused, self.value())
    }
}

/// The label floats when the field is focused or holds a value.
#[must_use]
pub const fn label_floats(focused: bool, value: &str) -> bool {
    focused || !value.is_empty()
}

/// Text shown under the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupportText<'a> {
    /// Error message; announced assertively and marks the input invalid.
    Error(&'a str),
    /// Helper text; no alert semantics.
    Helper(&'a str),
    /// Nothing to show.
    Hidden,
}

impl<'a> SupportText<'a> {
    /// Pick what to show. Empty strings count as absent.
    #[must_use]
    pub fn resolve(error: Option<&'a str>, helper: Option<&'a str>) -> Self {
        match (
            error.filter(|text| !text.is_empty()),
            helper.filter(|text| !text.is_empty()),
        ) {
            (Some(error), _) => Self::Error(error),
            (None, Some(helper)) => Self::Helper(helper),
            (None, None) => Self::Hidden,
        }
    }

    /// Whether the input should carry `aria-invalid="true"`.
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// ARIA role for the text element.
    #[must_use]
    pub const fn role(self) -> Option<&'static str> {
        match self {
            Self::Error(_) => Some("alert"),
            Self::Helper(_) | Self::Hidden => None,
        }
    }

    /// The text, if any.
    #[must_use]
    pub const fn text(self) -> Option<&'a str> {
        match self {
            Self::Error(text) | Self::Helper(text) => Some(text),
            Self::Hidden => None,
        }
    }
}

/// DOM ids linking an input to its supporting text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldIds {
    /// Id of the `<input>`; the label's `for` points here.
    pub input: String,
    /// Id of the helper text element.
    pub helper: String,
    /// Id of the error text element.
    pub error: String,
}

impl FieldIds {
    /// Allocate a fresh, unique id set.
    #[must_use]
    pub fn allocate() -> Self {
        let seq = NEXT_FIELD.fetch_add(1, Ordering::Relaxed);
        Self {
            input: format!("happy-field-{seq}"),
            helper: format!("happy-field-{seq}-helper"),
            error: format!("happy-field-{seq}-error"),
        }
    }

    /// Id the input's `aria-describedby` should reference for `text`.
    #[must_use]
    pub fn described_by(&self, text: SupportText<'_>) -> Option<&str> {
        match text {
            SupportText::Error(_) => Some(&self.error),
            SupportText::Helper(_) => Some(&self.helper),
            SupportText::Hidden => None,
        }
    }
}

/// Keys that activate a focusable non-button control (Enter or Space).
#[must_use]
pub fn activates_control(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncontrolled_field_tracks_input() {
        let mut field = InputFieldState::new(ValueSource::Uncontrolled("seed".to_string()));
        assert_eq!(field.value(), "seed");
        field.input("typed".to_string());
        assert_eq!(field.value(), "typed");
        field.sync_controlled("ignored");
        assert_eq!(field.value(), "typed");
    }

    #[test]
    fn controlled_field_only_follows_the_caller() {
        let mut field = InputFieldState::new(ValueSource::Controlled("a".to_string()));
        field.input("typed".to_string());
        assert_eq!(field.value(), "a");
        field.sync_controlled("pushed");
        assert_eq!(field.value(), "pushed");
    }

    #[test]
    fn label_floats_on_focus_or_value() {
        let mut field = InputFieldState::default();
        assert!(!field.label_floating());
        field.focus();
        assert!(field.label_floating());
        field.blur();
        assert!(!field.label_floating());
        field.input("x".to_string());
        assert!(field.label_floating());
        field.input(String::new());
        assert!(!field.label_floating());
    }

    #[test]
    fn error_takes_priority_over_helper() {
        let both = SupportText::resolve(Some("bad"), Some("hint"));
        assert_eq!(both, SupportText::Error("bad"));
        assert!(both.is_invalid());
        assert_eq!(both.role(), Some("alert"));

        let helper = SupportText::resolve(Some(""), Some("hint"));
        assert_eq!(helper, SupportText::Helper("hint"));
        assert!(!helper.is_invalid());
        assert_eq!(helper.role(), None);

        assert_eq!(SupportText::resolve(None, Some("")), SupportText::Hidden);
        assert_eq!(SupportText::Hidden.text(), None);
    }

    #[test]
    fn field_ids_are_unique_and_linked() {
        let first = FieldIds::allocate();
        let second = FieldIds::allocate();
        assert_ne!(first.input, second.input);
        assert!(first.error.starts_with(&first.input));
        assert_eq!(
            first.described_by(SupportText::Error("bad")),
            Some(first.error.as_str())
        );
        assert_eq!(
            first.described_by(SupportText::Helper("hint")),
            Some(first.helper.as_str())
        );
        assert_eq!(first.described_by(SupportText::Hidden), None);
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(activates_control("Enter"));
        assert!(activates_control(" "));
        assert!(!activates_control("Tab"));
        assert!(!activates_control("Escape"));
    }
}
