//! Color parsing and derivation helpers
//!
//! Template colors are stored as 6 hex digit RGB strings without a leading
//! `#`. Derived colors (table stripes, borders) are produced by moving each
//! channel linearly toward white.

use std::collections::HashMap;

/// An RGB color decoded from a 6 hex digit string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6 hex digit string (no leading `#`)
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !is_hex_color(hex) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Encode as lowercase 6 hex digits
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Move every channel toward 255 by `factor` (clamped to 0..=1)
    pub fn lighten(self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let lift = |c: u8| {
            let c = f64::from(c);
            (c + (255.0 - c) * factor).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: lift(self.r),
            g: lift(self.g),
            b: lift(self.b),
        }
    }
}

/// Check that a value is exactly 6 ASCII hex digits
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 6 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Lighten a hex color, returning `None` when the input is malformed
///
/// The result is always lowercase.
pub fn lighten(hex: &str, factor: f64) -> Option<String> {
    Rgb::from_hex(hex).map(|rgb| rgb.lighten(factor).to_hex())
}

/// Named slots of a DrawingML color scheme (`a:clrScheme`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeSlot {
    Dark1,
    Light1,
    Dark2,
    Light2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hyperlink,
    FollowedHyperlink,
}

impl SchemeSlot {
    /// All slots in declaration order
    pub const ALL: [SchemeSlot; 12] = [
        SchemeSlot::Dark1,
        SchemeSlot::Light1,
        SchemeSlot::Dark2,
        SchemeSlot::Light2,
        SchemeSlot::Accent1,
        SchemeSlot::Accent2,
        SchemeSlot::Accent3,
        SchemeSlot::Accent4,
        SchemeSlot::Accent5,
        SchemeSlot::Accent6,
        SchemeSlot::Hyperlink,
        SchemeSlot::FollowedHyperlink,
    ];

    /// Element local name used in theme XML
    pub fn local_name(self) -> &'static str {
        match self {
            SchemeSlot::Dark1 => "dk1",
            SchemeSlot::Light1 => "lt1",
            SchemeSlot::Dark2 => "dk2",
            SchemeSlot::Light2 => "lt2",
            SchemeSlot::Accent1 => "accent1",
            SchemeSlot::Accent2 => "accent2",
            SchemeSlot::Accent3 => "accent3",
            SchemeSlot::Accent4 => "accent4",
            SchemeSlot::Accent5 => "accent5",
            SchemeSlot::Accent6 => "accent6",
            SchemeSlot::Hyperlink => "hlink",
            SchemeSlot::FollowedHyperlink => "folHlink",
        }
    }

    /// Resolve an element local name; unknown names yield `None`
    pub fn from_local_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|slot| slot.local_name() == name)
    }
}

impl std::fmt::Display for SchemeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.local_name())
    }
}

/// Colors extracted from a theme's color scheme, keyed by slot
///
/// Only well-formed hex values are ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorScheme {
    name: Option<String>,
    slots: HashMap<SchemeSlot, String>,
}

impl ColorScheme {
    /// Create an empty scheme
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheme name from the `name` attribute, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the scheme name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Record a slot value; malformed values are ignored
    pub fn set(&mut self, slot: SchemeSlot, hex: &str) -> bool {
        if is_hex_color(hex) {
            self.slots.insert(slot, hex.to_string());
            true
        } else {
            false
        }
    }

    /// Get a slot value
    pub fn get(&self, slot: SchemeSlot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    /// Get a slot value, or an empty string when absent
    pub fn get_or_empty(&self, slot: SchemeSlot) -> &str {
        self.get(slot).unwrap_or("")
    }

    /// Number of resolved slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot resolved
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
