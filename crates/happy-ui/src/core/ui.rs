//! Visual variants shared by the atoms and their class mapping.

/// Button emphasis levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Solid primary fill.
    #[default]
    Filled,
    /// Transparent with a primary border.
    Outlined,
    /// Text only.
    Text,
}

impl ButtonVariant {
    /// All variants in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Filled, Self::Outlined, Self::Text]
    }

    /// Variant classes; disabled buttons get the muted palette.
    #[must_use]
    pub const fn as_class(self, disabled: bool) -> &'static str {
        match (self, disabled) {
            (Self::Filled, false) => "btn-filled",
            (Self::Filled, true) => "btn-filled btn-muted",
            (Self::Outlined, false) => "btn-outlined",
            (Self::Outlined, true) => "btn-outlined btn-muted",
            (Self::Text, false) => "btn-text",
            (Self::Text, true) => "btn-text btn-muted",
        }
    }

    /// Ripple fill: light on filled buttons, tinted primary elsewhere.
    #[must_use]
    pub const fn ripple_color(self) -> &'static str {
        match self {
            Self::Filled => "rgba(255, 255, 255, 0.3)",
            Self::Outlined | Self::Text => "rgba(124, 58, 237, 0.2)",
        }
    }
}

/// Input field container styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputVariant {
    /// Bordered on all sides.
    #[default]
    Outlined,
    /// Tinted background with a bottom border.
    Filled,
}

impl InputVariant {
    /// Container class for the variant.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Outlined => "field-outlined",
            Self::Filled => "field-filled",
        }
    }

    /// Label position class for the resting and floating states.
    #[must_use]
    pub const fn label_class(self, floating: bool) -> &'static str {
        match (self, floating) {
            (Self::Outlined, true) => "label-float-outlined",
            (Self::Filled, true) => "label-float-filled",
            (Self::Outlined | Self::Filled, false) => "label-rest",
        }
    }
}

/// Interaction state used to pick border and label colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldTone {
    /// Input disabled.
    Disabled,
    /// Error message present.
    Error,
    /// Focused and valid.
    Focused,
    /// Resting.
    Idle,
}

impl FieldTone {
    /// Tone for the given flags; disabled wins over error, error over focus.
    #[must_use]
    pub const fn from_flags(disabled: bool, has_error: bool, focused: bool) -> Self {
        if disabled {
            Self::Disabled
        } else if has_error {
            Self::Error
        } else if focused {
            Self::Focused
        } else {
            Self::Idle
        }
    }

    /// Class suffix.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Disabled => "tone-disabled",
            Self::Error => "tone-error",
            Self::Focused => "tone-focused",
            Self::Idle => "tone-idle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ButtonVariant, FieldTone, InputVariant};

    #[test]
    fn every_button_variant_has_distinct_classes() {
        let enabled: Vec<_> = ButtonVariant::all()
            .iter()
            .map(|variant| variant.as_class(false))
            .collect();
        assert_eq!(enabled, vec!["btn-filled", "btn-outlined", "btn-text"]);
        for variant in ButtonVariant::all() {
            assert!(variant.as_class(true).ends_with("btn-muted"));
        }
    }

    #[test]
    fn ripple_tint_depends_on_fill() {
        assert_eq!(
            ButtonVariant::Filled.ripple_color(),
            "rgba(255, 255, 255, 0.3)"
        );
        assert_eq!(
            ButtonVariant::Outlined.ripple_color(),
            ButtonVariant::Text.ripple_color()
        );
    }

    #[test]
    fn label_rests_the_same_in_both_variants() {
        assert_eq!(InputVariant::Outlined.label_class(false), "label-rest");
        assert_eq!(InputVariant::Filled.label_class(false), "label-rest");
        assert_ne!(
            InputVariant::Outlined.label_class(true),
            InputVariant::Filled.label_class(true)
        );
    }

    #[test]
    fn tone_precedence() {
        assert_eq!(FieldTone::from_flags(true, true, true), FieldTone::Disabled);
        assert_eq!(FieldTone::from_flags(false, true, true), FieldTone::Error);
        assert_eq!(FieldTone::from_flags(false, false, true), FieldTone::Focused);
        assert_eq!(FieldTone::from_flags(false, false, false), FieldTone::Idle);
    }
}
