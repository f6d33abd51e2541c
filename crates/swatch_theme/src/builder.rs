//! Theme token set builder
//!
//! Every token in [`ThemeToken::ALL`] is resolved, in declaration order:
//!
//! 1. the source config's own value for the token
//! 2. for opaque tokens in dark mode, the light source's value
//! 3. the token's [`Fallback`]
//!
//! Color values are normalized to OKLCH on the way out. Opaque values (font
//! stacks, lengths) are copied verbatim.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use swatch_color::{convert_with, detect_format, ColorFormat, OklchStyle};

use crate::set::{ColorScheme, ThemeBundle, ThemeTokenSet};
use crate::token::ThemeToken;

/// Flat token name → value map, as stored by a theme registry.
pub type SourceConfig = IndexMap<String, String>;

/// Read access to a source config, whatever map type holds it.
pub trait TokenSource {
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> TokenSource for IndexMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<S: BuildHasher> TokenSource for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl TokenSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Mid-gray used when a token has nothing else to fall back to.
const NEUTRAL: &str = "oklch(55.6% 0 0)";

/// What a token resolves to when the source does not define it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// The already-resolved value of an earlier token.
    Token(ThemeToken),
    /// A fixed default per color scheme.
    Default {
        light: &'static str,
        dark: &'static str,
    },
    /// Last resort: neutral mid-gray.
    Neutral,
}

impl Fallback {
    const fn fixed(value: &'static str) -> Self {
        Self::Default {
            light: value,
            dark: value,
        }
    }

    /// Fallback rule for each token.
    pub fn of(token: ThemeToken) -> Self {
        use ThemeToken as T;

        match token {
            T::Background => Self::Default {
                light: "#ffffff",
                dark: "#0a0a0a",
            },
            T::Foreground => Self::Default {
                light: "#0a0a0a",
                dark: "#fafafa",
            },
            T::Card => Self::Token(T::Background),
            T::CardForeground => Self::Token(T::Foreground),
            T::Popover => Self::Token(T::Card),
            T::PopoverForeground => Self::Token(T::CardForeground),

            T::Primary => Self::Neutral,
            T::PrimaryForeground => Self::Token(T::Background),
            T::Secondary => Self::Neutral,
            T::SecondaryForeground => Self::Token(T::Foreground),
            T::Muted => Self::Token(T::Secondary),
            T::MutedForeground => Self::Neutral,
            T::Accent => Self::Token(T::Secondary),
            T::AccentForeground => Self::Token(T::SecondaryForeground),
            T::Destructive => Self::Default {
                light: "#ef4444",
                dark: "#7f1d1d",
            },
            T::DestructiveForeground => Self::fixed("#fafafa"),

            T::Border => Self::Default {
                light: "#e5e5e5",
                dark: "#262626",
            },
            T::Input => Self::Token(T::Border),
            T::Ring => Self::Token(T::Primary),

            T::Chart1 => Self::Token(T::Primary),
            T::Chart2 => Self::Default {
                light: "#2a9d90",
                dark: "#2eb88a",
            },
            T::Chart3 => Self::Default {
                light: "#274754",
                dark: "#e88c30",
            },
            T::Chart4 => Self::Default {
                light: "#e8c468",
                dark: "#af57db",
            },
            T::Chart5 => Self::Default {
                light: "#f4a462",
                dark: "#e23670",
            },

            T::Sidebar => Self::Token(T::Background),
            T::SidebarForeground => Self::Token(T::Foreground),
            T::SidebarPrimary => Self::Token(T::Primary),
            T::SidebarPrimaryForeground => Self::Token(T::PrimaryForeground),
            T::SidebarAccent => Self::Token(T::Accent),
            T::SidebarAccentForeground => Self::Token(T::AccentForeground),
            T::SidebarBorder => Self::Token(T::Border),
            T::SidebarRing => Self::Token(T::Ring),

            T::FontSans => Self::fixed("ui-sans-serif, system-ui, sans-serif"),
            T::FontSerif => Self::fixed("ui-serif, Georgia, serif"),
            T::FontMono => Self::fixed("ui-monospace, SFMono-Regular, monospace"),
            T::LetterSpacing => Self::fixed("0em"),
            T::Radius => Self::fixed("0.625rem"),
            T::Spacing => Self::fixed("0.25rem"),

            T::ShadowColor => Self::fixed("#000000"),
            T::ShadowOpacity => Self::Default {
                light: "0.1",
                dark: "0.3",
            },
            T::ShadowBlur => Self::fixed("3px"),
            T::ShadowSpread => Self::fixed("0px"),
            T::ShadowOffsetX => Self::fixed("0"),
            T::ShadowOffsetY => Self::fixed("1px"),
        }
    }
}

/// Builds complete light/dark token sets from source configs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeTokenSetBuilder {
    oklch_style: OklchStyle,
}

impl ThemeTokenSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit colors as `oklch(L% C H)` (default) or bare `L C H`.
    pub fn oklch_style(mut self, style: OklchStyle) -> Self {
        self.oklch_style = style;
        self
    }

    /// Build both modes. Missing tokens are filled from fallbacks, so the
    /// result is always complete.
    pub fn build<L, D>(&self, light: &L, dark: &D) -> ThemeBundle
    where
        L: TokenSource + ?Sized,
        D: TokenSource + ?Sized,
    {
        ThemeBundle::new(
            self.build_scheme(ColorScheme::Light, light, None::<&L>),
            self.build_scheme(ColorScheme::Dark, dark, Some(light)),
        )
    }

    /// Build one mode. `shared` supplies opaque tokens (fonts, radius,
    /// shadow geometry) the source leaves out.
    pub fn build_scheme<S, F>(
        &self,
        scheme: ColorScheme,
        source: &S,
        shared: Option<&F>,
    ) -> ThemeTokenSet
    where
        S: TokenSource + ?Sized,
        F: TokenSource + ?Sized,
    {
        let mut values: Vec<String> = Vec::with_capacity(ThemeToken::ALL.len());

        for &token in ThemeToken::ALL {
            let value = match lookup(source, token) {
                Some(raw) => self.normalize(token, raw),
                None => match shared.filter(|_| !token.is_color()).and_then(|s| lookup(s, token)) {
                    Some(raw) => raw.to_string(),
                    None => self.fallback(token, scheme, &values),
                },
            };
            tracing::trace!(token = token.key(), %value, ?scheme, "resolved theme token");
            values.push(value);
        }

        ThemeTokenSet::from_values(scheme, values)
    }

    fn normalize(&self, token: ThemeToken, raw: &str) -> String {
        if !token.is_color() {
            return raw.to_string();
        }
        if detect_format(raw).is_none() {
            tracing::debug!(token = token.key(), raw, "color token is not a color, passing through");
        }
        convert_with(raw, ColorFormat::Oklch, self.oklch_style)
    }

    fn fallback(&self, token: ThemeToken, scheme: ColorScheme, resolved: &[String]) -> String {
        match Fallback::of(token) {
            // Declaration order guarantees the referenced token is resolved
            Fallback::Token(earlier) => resolved[earlier.index()].clone(),
            Fallback::Default { light, dark } => {
                let value = match scheme {
                    ColorScheme::Light => light,
                    ColorScheme::Dark => dark,
                };
                self.normalize(token, value)
            }
            Fallback::Neutral => self.normalize(token, NEUTRAL),
        }
    }
}

/// Present and non-blank source value.
fn lookup<S: TokenSource + ?Sized>(source: &S, token: ThemeToken) -> Option<&str> {
    source
        .lookup(token.key())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pairs: &[(&str, &str)]) -> SourceConfig {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn token_fallbacks_only_point_backwards() {
        for &token in ThemeToken::ALL {
            if let Fallback::Token(earlier) = Fallback::of(token) {
                assert!(earlier < token, "{token} falls back to later {earlier}");
            }
        }
    }

    #[test]
    fn every_token_has_a_fallback_that_resolves() {
        let bundle = ThemeTokenSetBuilder::new().build(&SourceConfig::new(), &SourceConfig::new());
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let set = bundle.for_scheme(scheme);
            for &token in ThemeToken::ALL {
                assert!(!set.get(token).is_empty(), "{token} empty in {scheme:?}");
            }
        }
    }

    #[test]
    fn fallback_chain_follows_earlier_tokens() {
        let light = source(&[("background", "#ffffff"), ("foreground", "#0a0a0a")]);
        let set = ThemeTokenSetBuilder::new().build_scheme(
            ColorScheme::Light,
            &light,
            None::<&SourceConfig>,
        );
        assert_eq!(set.get(ThemeToken::Card), set.get(ThemeToken::Background));
        assert_eq!(set.get(ThemeToken::Popover), set.get(ThemeToken::Background));
        assert_eq!(
            set.get(ThemeToken::PopoverForeground),
            set.get(ThemeToken::Foreground)
        );
    }

    #[test]
    fn source_value_beats_fallback() {
        let light = source(&[("card", "#f5f5f5"), ("background", "#ffffff")]);
        let set = ThemeTokenSetBuilder::new().build_scheme(
            ColorScheme::Light,
            &light,
            None::<&SourceConfig>,
        );
        assert_eq!(set.get(ThemeToken::Card), "oklch(97.0% 0.000 0)");
        // popover follows the card's resolved value
        assert_eq!(set.get(ThemeToken::Popover), "oklch(97.0% 0.000 0)");
    }

    #[test]
    fn blank_values_count_as_missing() {
        let light = source(&[("primary", "   ")]);
        let set = ThemeTokenSetBuilder::new().build_scheme(
            ColorScheme::Light,
            &light,
            None::<&SourceConfig>,
        );
        assert_eq!(set.get(ThemeToken::Primary), "oklch(55.6% 0.000 0)");
    }

    #[test]
    fn opaque_tokens_are_copied_verbatim() {
        let light = source(&[("font-sans", "Inter, sans-serif"), ("radius", "0.5rem")]);
        let set = ThemeTokenSetBuilder::new().build_scheme(
            ColorScheme::Light,
            &light,
            None::<&SourceConfig>,
        );
        assert_eq!(set.get(ThemeToken::FontSans), "Inter, sans-serif");
        assert_eq!(set.get(ThemeToken::Radius), "0.5rem");
    }

    #[test]
    fn dark_mode_shares_opaque_tokens_from_light() {
        let light = source(&[("radius", "1rem"), ("primary", "#3b82f6")]);
        let bundle = ThemeTokenSetBuilder::new().build(&light, &SourceConfig::new());
        let dark = bundle.for_scheme(ColorScheme::Dark);

        assert_eq!(dark.get(ThemeToken::Radius), "1rem");
        // colors are never shared across modes
        assert_eq!(dark.get(ThemeToken::Primary), "oklch(55.6% 0.000 0)");
    }

    #[test]
    fn mode_specific_defaults() {
        let bundle = ThemeTokenSetBuilder::new().build(&SourceConfig::new(), &SourceConfig::new());
        assert_eq!(bundle.light.get(ThemeToken::ShadowOpacity), "0.1");
        assert_eq!(bundle.dark.get(ThemeToken::ShadowOpacity), "0.3");
        assert_ne!(
            bundle.light.get(ThemeToken::Chart2),
            bundle.dark.get(ThemeToken::Chart2)
        );
    }

    #[test]
    fn bare_style() {
        let light = source(&[("primary", "#3b82f6")]);
        let set = ThemeTokenSetBuilder::new()
            .oklch_style(OklchStyle::Bare)
            .build_scheme(ColorScheme::Light, &light, None::<&SourceConfig>);
        assert_eq!(set.get(ThemeToken::Primary), "62.3 0.188 260");
    }

    #[test]
    fn accepts_other_map_types() {
        let mut light: HashMap<String, String> = HashMap::new();
        light.insert("primary".into(), "#3b82f6".into());
        let dark: BTreeMap<String, String> = BTreeMap::new();

        let bundle = ThemeTokenSetBuilder::new().build(&light, &dark);
        assert_eq!(bundle.light.get(ThemeToken::Primary), "oklch(62.3% 0.188 260)");
    }

    #[test]
    fn non_color_in_color_slot_passes_through() {
        let light = source(&[("ring", "transparent")]);
        let set = ThemeTokenSetBuilder::new().build_scheme(
            ColorScheme::Light,
            &light,
            None::<&SourceConfig>,
        );
        assert_eq!(set.get(ThemeToken::Ring), "transparent");
    }
}
