//! Design-system color tokens (Material 3 roles) for the Happy Creations UI.
//!
//! # Design
//! - Tokens are static, read-only tables; nothing here is mutable at runtime.
//! - System schemes map role names to hex values per theme mode.
//! - Reference palettes hold the tonal ramps the schemes are derived from.
//! - Extended palettes cover semantic feedback colors (success, warning, info).

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Role or tone identifier (e.g. `"on-primary"` or `"40"`).
    pub name: &'static str,
    /// Hex RGB value.
    pub hex: &'static str,
}

const fn token(name: &'static str, hex: &'static str) -> ColorToken {
    ColorToken { name, hex }
}

/// Collection of related tokens (a scheme, a tonal ramp, or a semantic group).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier.
    pub id: &'static str,
    /// Ordered tokens.
    pub shades: &'static [ColorToken],
}

impl Palette {
    /// Look up a token's hex value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.shades
            .iter()
            .find(|shade| shade.name == name)
            .map(|shade| shade.hex)
    }
}

/// Light theme system scheme.
pub const LIGHT_SCHEME: Palette = Palette {
    id: "light",
    shades: &[
        token("primary", "#6750A4"),
        token("on-primary", "#FFFFFF"),
        token("primary-container", "#EADDFF"),
        token("on-primary-container", "#21005D"),
        token("secondary", "#625B71"),
        token("on-secondary", "#FFFFFF"),
        token("secondary-container", "#E8DEF8"),
        token("on-secondary-container", "#1D192B"),
        token("tertiary", "#7D5260"),
        token("on-tertiary", "#FFFFFF"),
        token("tertiary-container", "#FFD8E4"),
        token("on-tertiary-container", "#31111D"),
        token("error", "#B3261E"),
        token("on-error", "#FFFFFF"),
        token("error-container", "#F9DEDC"),
        token("on-error-container", "#410E0B"),
        token("surface", "#FFFBFE"),
        token("on-surface", "#1C1B1F"),
        token("surface-variant", "#E7E0EC"),
        token("on-surface-variant", "#49454F"),
        token("surface-container-lowest", "#FFFFFF"),
        token("surface-container-low", "#F7F2FA"),
        token("surface-container", "#F3EDF7"),
        token("surface-container-high", "#ECE6F0"),
        token("surface-container-highest", "#E6E0E9"),
        token("outline", "#79747E"),
        token("outline-variant", "#CAC4D0"),
        token("inverse-surface", "#313033"),
        token("inverse-on-surface", "#F4EFF4"),
        token("inverse-primary", "#D0BCFF"),
        token("scrim", "#000000"),
        token("shadow", "#000000"),
    ],
};

/// Dark theme system scheme.
pub const DARK_SCHEME: Palette = Palette {
    id: "dark",
    shades: &[
        token("primary", "#D0BCFF"),
        token("on-primary", "#381E72"),
        token("primary-container", "#4F378B"),
        token("on-primary-container", "#EADDFF"),
        token("secondary", "#CCC2DC"),
        token("on-secondary", "#332D41"),
        token("secondary-container", "#4A4458"),
        token("on-secondary-container", "#E8DEF8"),
        token("tertiary", "#EFB8C8"),
        token("on-tertiary", "#492532"),
        token("tertiary-container", "#633B48"),
        token("on-tertiary-container", "#FFD8E4"),
        token("error", "#F2B8B5"),
        token("on-error", "#601410"),
        token("error-container", "#8C1D18"),
        token("on-error-container", "#F9DEDC"),
        token("surface", "#1C1B1F"),
        token("on-surface", "#E6E1E5"),
        token("surface-variant", "#49454F"),
        token("on-surface-variant", "#CAC4D0"),
        token("surface-container-lowest", "#0F0D13"),
        token("surface-container-low", "#1D1B20"),
        token("surface-container", "#211F26"),
        token("surface-container-high", "#2B2930"),
        token("surface-container-highest", "#36343B"),
        token("outline", "#938F99"),
        token("outline-variant", "#49454F"),
        token("inverse-surface", "#E6E1E5"),
        token("inverse-on-surface", "#313033"),
        token("inverse-primary", "#6750A4"),
        token("scrim", "#000000"),
        token("shadow", "#000000"),
    ],
};

/// Primary reference palette (purple/violet).
pub const REF_PRIMARY: Palette = Palette {
    id: "primary",
    shades: &[
        token("0", "#000000"),
        token("10", "#21005D"),
        token("20", "#381E72"),
        token("30", "#4F378B"),
        token("40", "#6750A4"),
        token("50", "#7F67BE"),
        token("60", "#9A82DB"),
        token("70", "#B69DF8"),
        token("80", "#D0BCFF"),
        token("90", "#EADDFF"),
        token("95", "#F6EDFF"),
        token("99", "#FFFBFE"),
        token("100", "#FFFFFF"),
    ],
};

/// Secondary reference palette.
pub const REF_SECONDARY: Palette = Palette {
    id: "secondary",
    shades: &[
        token("0", "#000000"),
        token("10", "#1D192B"),
        token("20", "#332D41"),
        token("30", "#4A4458"),
        token("40", "#625B71"),
        token("50", "#7A7289"),
        token("60", "#958DA5"),
        token("70", "#B0A7C0"),
        token("80", "#CCC2DC"),
        token("90", "#E8DEF8"),
        token("95", "#F6EDFF"),
        token("99", "#FFFBFE"),
        token("100", "#FFFFFF"),
    ],
};

/// Tertiary reference palette.
pub const REF_TERTIARY: Palette = Palette {
    id: "tertiary",
    shades: &[
        token("0", "#000000"),
        token("10", "#31111D"),
        token("20", "#492532"),
        token("30", "#633B48"),
        token("40", "#7D5260"),
        token("50", "#986977"),
        token("60", "#B58392"),
        token("70", "#D29DAC"),
        token("80", "#EFB8C8"),
        token("90", "#FFD8E4"),
        token("95", "#FFECF1"),
        token("99", "#FFFBFA"),
        token("100", "#FFFFFF"),
    ],
};

/// Neutral reference palette.
pub const REF_NEUTRAL: Palette = Palette {
    id: "neutral",
    shades: &[
        token("0", "#000000"),
        token("10", "#1C1B1F"),
        token("20", "#313033"),
        token("30", "#484649"),
        token("40", "#605D62"),
        token("50", "#787579"),
        token("60", "#939094"),
        token("70", "#AEAAAE"),
        token("80", "#C9C5CA"),
        token("90", "#E6E1E5"),
        token("95", "#F4EFF4"),
        token("99", "#FFFBFE"),
        token("100", "#FFFFFF"),
    ],
};

/// Neutral-variant reference palette.
pub const REF_NEUTRAL_VARIANT: Palette = Palette {
    id: "neutral-variant",
    shades: &[
        token("0", "#000000"),
        token("10", "#1D1A22"),
        token("20", "#322F37"),
        token("30", "#49454F"),
        token("40", "#605D66"),
        token("50", "#79747E"),
        token("60", "#938F99"),
        token("70", "#AEA9B4"),
        token("80", "#CAC4D0"),
        token("90", "#E7E0EC"),
        token("95", "#F5EFF7"),
        token("99", "#FFFBFE"),
        token("100", "#FFFFFF"),
    ],
};

/// Error reference palette.
pub const REF_ERROR: Palette = Palette {
    id: "error",
    shades: &[
        token("0", "#000000"),
        token("10", "#410E0B"),
        token("20", "#601410"),
        token("30", "#8C1D18"),
        token("40", "#B3261E"),
        token("50", "#DC362E"),
        token("60", "#E46962"),
        token("70", "#EC928E"),
        token("80", "#F2B8B5"),
        token("90", "#F9DEDC"),
        token("95", "#FCEEEE"),
        token("99", "#FFFBF9"),
        token("100", "#FFFFFF"),
    ],
};

/// All reference palettes in declaration order.
pub const REFERENCE_PALETTES: [Palette; 6] = [
    REF_PRIMARY,
    REF_SECONDARY,
    REF_TERTIARY,
    REF_NEUTRAL,
    REF_NEUTRAL_VARIANT,
    REF_ERROR,
];

/// Success feedback colors.
pub const SUCCESS: Palette = Palette {
    id: "success",
    shades: &[
        token("base", "#2E7D32"),
        token("on", "#FFFFFF"),
        token("container", "#C8E6C9"),
        token("on-container", "#1B5E20"),
    ],
};

/// Warning feedback colors.
pub const WARNING: Palette = Palette {
    id: "warning",
    shades: &[
        token("base", "#F57C00"),
        token("on", "#FFFFFF"),
        token("container", "#FFE0B2"),
        token("on-container", "#E65100"),
    ],
};

/// Informational feedback colors.
pub const INFO: Palette = Palette {
    id: "info",
    shades: &[
        token("base", "#0288D1"),
        token("on", "#FFFFFF"),
        token("container", "#B3E5FC"),
        token("on-container", "#01579B"),
    ],
};

/// Extended semantic palettes.
pub const EXTENDED: [Palette; 3] = [SUCCESS, WARNING, INFO];

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored identifier, falling back to light for unknown values.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        match value {
            "dark" | "happy-dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// System scheme for this mode.
    #[must_use]
    pub const fn scheme(self) -> Palette {
        match self {
            Self::Light => LIGHT_SCHEME,
            Self::Dark => DARK_SCHEME,
        }
    }
}

/// Render every token as CSS custom properties.
///
/// The light scheme is bound to `:root` and `[data-theme="light"]`, the dark
/// scheme to `[data-theme="dark"]`. Reference and extended palettes are
/// theme-independent and live on `:root`.
#[must_use]
pub fn css_custom_properties() -> String {
    let mut css = String::new();
    css.push_str(":root {\n");
    for palette in REFERENCE_PALETTES {
        for shade in palette.shades {
            push_property(&mut css, &format!("md-ref-{}{}", palette.id, shade.name), shade.hex);
        }
    }
    for palette in EXTENDED {
        for shade in palette.shades {
            push_property(&mut css, &format!("md-ext-{}-{}", palette.id, shade.name), shade.hex);
        }
    }
    css.push_str("}\n");

    for (selector, mode) in [
        (":root,\n[data-theme=\"light\"]", ThemeMode::Light),
        ("[data-theme=\"dark\"]", ThemeMode::Dark),
    ] {
        css.push_str(&format!("{selector} {{\n"));
        for shade in mode.scheme().shades {
            push_property(&mut css, &format!("md-sys-color-{}", shade.name), shade.hex);
        }
        css.push_str("}\n");
    }
    css
}

fn push_property(css: &mut String, name: &str, hex: &str) {
    css.push_str(&format!("  --{name}: {hex};\n"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes_cover_the_same_roles() {
        assert_eq!(LIGHT_SCHEME.shades.len(), DARK_SCHEME.shades.len());
        for (light, dark) in LIGHT_SCHEME.shades.iter().zip(DARK_SCHEME.shades) {
            assert_eq!(light.name, dark.name);
        }
    }

    #[test]
    fn reference_palettes_have_thirteen_tones() {
        for palette in REFERENCE_PALETTES {
            assert_eq!(palette.shades.len(), 13, "palette {}", palette.id);
            assert_eq!(palette.get("0"), Some("#000000"));
            assert_eq!(palette.get("100"), Some("#FFFFFF"));
        }
    }

    #[test]
    fn lookup_resolves_roles_per_mode() {
        assert_eq!(ThemeMode::Light.scheme().get("primary"), Some("#6750A4"));
        assert_eq!(ThemeMode::Dark.scheme().get("primary"), Some("#D0BCFF"));
        assert_eq!(ThemeMode::Dark.scheme().get("inverse-primary"), Some("#6750A4"));
        assert_eq!(LIGHT_SCHEME.get("missing"), None);
        assert_eq!(INFO.get("base"), Some("#0288D1"));
    }

    #[test]
    fn hex_values_are_well_formed() {
        let mut all = vec![LIGHT_SCHEME, DARK_SCHEME];
        all.extend(REFERENCE_PALETTES);
        all.extend(EXTENDED);
        for palette in all {
            for shade in palette.shades {
                assert_eq!(shade.hex.len(), 7, "{}:{}", palette.id, shade.name);
                assert!(shade.hex.starts_with('#'));
                assert!(shade.hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn theme_mode_round_trips_storage_values() {
        assert_eq!(ThemeMode::from_stored("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored("garbage"), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn css_output_contains_every_section() {
        let css = css_custom_properties();
        assert!(css.contains("--md-ref-primary40: #6750A4;"));
        assert!(css.contains("--md-ref-neutral-variant50: #79747E;"));
        assert!(css.contains("--md-ext-warning-container: #FFE0B2;"));
        assert!(css.contains("[data-theme=\"dark\"] {\n  --md-sys-color-primary: #D0BCFF;"));
        assert!(css.contains("--md-sys-color-primary: #6750A4;"));
    }
}
