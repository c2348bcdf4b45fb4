// Copyright 2026 the SF Symbols Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties that select a symbol font.

use core::{fmt, str::FromStr};

/// Error returned when parsing a descriptor property from its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseDescriptorError {
    property: &'static str,
}

impl ParseDescriptorError {
    const fn new(property: &'static str) -> Self {
        Self { property }
    }

    /// Returns the name of the property that failed to parse.
    pub const fn property(self) -> &'static str {
        self.property
    }
}

impl fmt::Display for ParseDescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} label", self.property)
    }
}

impl core::error::Error for ParseDescriptorError {}

/// Implements label lookup, `Display` and `FromStr` for a closed set of
/// labelled values.
macro_rules! labelled {
    ($ty:ident, $property:literal, [$($variant:ident => $label:literal),+ $(,)?]) => {
        impl $ty {
            /// All values in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the label of this value.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Parses a value from its label, ignoring ASCII case and
            /// surrounding whitespace.
            pub fn parse(s: &str) -> Option<Self> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.label().eq_ignore_ascii_case(s))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = ParseDescriptorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or(ParseDescriptorError::new($property))
            }
        }
    };
}

/// Symbol font family.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub enum Family {
    /// The default family.
    #[default]
    Pro,
    /// The narrower family designed for small displays.
    Compact,
}

labelled!(Family, "family", [Pro => "SF Pro", Compact => "SF Compact"]);

/// Optical variant within a family.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub enum Variant {
    /// Tuned for large point sizes.
    #[default]
    Display,
    /// Tuned for small point sizes.
    Text,
    /// Rounded terminals.
    Rounded,
}

labelled!(
    Variant,
    "variant",
    [Display => "Display", Text => "Text", Rounded => "Rounded"]
);

/// One of the nine weights a symbol font is drawn in.
///
/// Weights are ordered from lightest to heaviest.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub enum Weight {
    /// Weight 100.
    UltraLight,
    /// Weight 200.
    Thin,
    /// Weight 300.
    Light,
    /// Weight 400.
    #[default]
    Regular,
    /// Weight 500.
    Medium,
    /// Weight 600.
    Semibold,
    /// Weight 700.
    Bold,
    /// Weight 800.
    Heavy,
    /// Weight 900.
    Black,
}

labelled!(
    Weight,
    "weight",
    [
        UltraLight => "ultralight",
        Thin => "thin",
        Light => "light",
        Regular => "regular",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
        Heavy => "heavy",
        Black => "black",
    ]
);

impl Weight {
    /// Returns the weight on the OpenType `usWeightClass` scale, from
    /// `100.0` to `900.0`.
    pub const fn value(self) -> f32 {
        match self {
            Self::UltraLight => 100.0,
            Self::Thin => 200.0,
            Self::Light => 300.0,
            Self::Regular => 400.0,
            Self::Medium => 500.0,
            Self::Semibold => 600.0,
            Self::Bold => 700.0,
            Self::Heavy => 800.0,
            Self::Black => 900.0,
        }
    }
}

/// Rendering size of a symbol glyph.
///
/// This is carried through to each [`Glyph`](crate::Glyph) untouched.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub enum GlyphSize {
    /// Small glyphs.
    Small,
    /// Medium glyphs.
    #[default]
    Medium,
    /// Large glyphs.
    Large,
}

labelled!(
    GlyphSize,
    "glyph size",
    [Small => "small", Medium => "medium", Large => "large"]
);

/// Full description of the symbol font to resolve.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FontDescriptor {
    /// Font family.
    pub family: Family,
    /// Optical variant.
    pub variant: Variant,
    /// Requested weight.
    pub weight: Weight,
    /// Point size of the font.
    pub point_size: f32,
    /// Size of the glyphs to build from the catalog.
    pub glyph_size: GlyphSize,
}

impl FontDescriptor {
    /// The point size used when none is specified.
    pub const DEFAULT_POINT_SIZE: f32 = 64.0;

    /// Creates a new descriptor.
    pub fn new(
        family: Family,
        variant: Variant,
        weight: Weight,
        point_size: f32,
        glyph_size: GlyphSize,
    ) -> Self {
        Self {
            family,
            variant,
            weight,
            point_size,
            glyph_size,
        }
    }

    /// Returns the name of the installed font family that matches this
    /// descriptor, such as `SF Pro Display`.
    pub fn family_name(&self) -> String {
        format!("{} {}", self.family, self.variant)
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new(
            Family::default(),
            Variant::default(),
            Weight::default(),
            Self::DEFAULT_POINT_SIZE,
            GlyphSize::default(),
        )
    }
}
