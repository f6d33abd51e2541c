//! Theme token catalog

use std::fmt::{Display, Formatter};

/// Whether a token holds a color or an opaque string (font stack, length).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TokenKind {
    Color,
    Opaque,
}

macro_rules! theme_tokens {
    ($( $kind:ident $variant:ident => $key:literal, )*) => {
        /// Semantic theme token keys.
        ///
        /// Declaration order is resolution order: a token only ever falls
        /// back to tokens declared before it.
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
        pub enum ThemeToken {
            $( $variant, )*
        }

        impl ThemeToken {
            /// Every token, in declaration order.
            pub const ALL: &'static [ThemeToken] = &[ $( ThemeToken::$variant, )* ];

            /// Key used in source configs and as the CSS variable name.
            pub fn key(self) -> &'static str {
                match self {
                    $( ThemeToken::$variant => $key, )*
                }
            }

            pub fn kind(self) -> TokenKind {
                match self {
                    $( ThemeToken::$variant => TokenKind::$kind, )*
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $( $key => Some(ThemeToken::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

theme_tokens! {
    // Surfaces
    Color Background => "background",
    Color Foreground => "foreground",
    Color Card => "card",
    Color CardForeground => "card-foreground",
    Color Popover => "popover",
    Color PopoverForeground => "popover-foreground",

    // Brand
    Color Primary => "primary",
    Color PrimaryForeground => "primary-foreground",
    Color Secondary => "secondary",
    Color SecondaryForeground => "secondary-foreground",
    Color Muted => "muted",
    Color MutedForeground => "muted-foreground",
    Color Accent => "accent",
    Color AccentForeground => "accent-foreground",
    Color Destructive => "destructive",
    Color DestructiveForeground => "destructive-foreground",

    // Controls
    Color Border => "border",
    Color Input => "input",
    Color Ring => "ring",

    // Charts
    Color Chart1 => "chart-1",
    Color Chart2 => "chart-2",
    Color Chart3 => "chart-3",
    Color Chart4 => "chart-4",
    Color Chart5 => "chart-5",

    // Sidebar
    Color Sidebar => "sidebar",
    Color SidebarForeground => "sidebar-foreground",
    Color SidebarPrimary => "sidebar-primary",
    Color SidebarPrimaryForeground => "sidebar-primary-foreground",
    Color SidebarAccent => "sidebar-accent",
    Color SidebarAccentForeground => "sidebar-accent-foreground",
    Color SidebarBorder => "sidebar-border",
    Color SidebarRing => "sidebar-ring",

    // Typography
    Opaque FontSans => "font-sans",
    Opaque FontSerif => "font-serif",
    Opaque FontMono => "font-mono",
    Opaque LetterSpacing => "letter-spacing",

    // Geometry
    Opaque Radius => "radius",
    Opaque Spacing => "spacing",

    // Shadows
    Color ShadowColor => "shadow-color",
    Opaque ShadowOpacity => "shadow-opacity",
    Opaque ShadowBlur => "shadow-blur",
    Opaque ShadowSpread => "shadow-spread",
    Opaque ShadowOffsetX => "shadow-offset-x",
    Opaque ShadowOffsetY => "shadow-offset-y",
}

impl ThemeToken {
    pub fn is_color(self) -> bool {
        self.kind() == TokenKind::Color
    }

    /// Position in [`ThemeToken::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Display for ThemeToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
