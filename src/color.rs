//! Colors: an 8-bit RGB value type with hex (de)serialization, and the
//! providers that hand out one color per bar series.

use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::BuildHasher;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `RRGGBB` or the short `#RGB` form.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        let channel = |i: usize, len: usize| u8::from_str_radix(hex.get(i..i + len)?, 16).ok();
        match hex.len() {
            6 => Some(Self::new(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            3 => {
                let (r, g, b) = (channel(0, 1)?, channel(1, 1)?, channel(2, 1)?);
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linear blend towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn mix(self, other: Rgb8, t: f64) -> Rgb8 {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb8::new(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb8::from_hex(&s).ok_or_else(|| format!("invalid color {s:?}, expected #RRGGBB"))
    }
}

impl From<Rgb8> for String {
    fn from(c: Rgb8) -> Self {
        c.to_hex()
    }
}

/// Microsoft Office (2013+) chart series palette.
const OFFICE10: [Rgb8; 10] = [
    Rgb8::new(68, 114, 196),  // blue      (#4472C4)
    Rgb8::new(237, 125, 49),  // orange    (#ED7D31)
    Rgb8::new(165, 165, 165), // gray      (#A5A5A5)
    Rgb8::new(255, 192, 0),   // gold      (#FFC000)
    Rgb8::new(91, 155, 213),  // light blue(#5B9BD5)
    Rgb8::new(112, 173, 71),  // green     (#70AD47)
    Rgb8::new(38, 68, 120),   // dark blue (#264478)
    Rgb8::new(158, 72, 14),   // dark org. (#9E480E)
    Rgb8::new(99, 99, 99),    // dark gray (#636363)
    Rgb8::new(153, 115, 0),   // brownish  (#997300)
];

/// Source of series colors for one render pass.
///
/// The renderer asks for exactly one color per series, in series order.
pub trait ColorProvider {
    fn next_color(&mut self) -> Rgb8;

    /// Draw `n` colors at once.
    fn take_colors(&mut self, n: usize) -> Vec<Rgb8> {
        (0..n).map(|_| self.next_color()).collect()
    }
}

/// Random `#RRGGBB` colors. Distinct-looking, not guaranteed unique.
#[derive(Clone, Debug)]
pub struct RandomColors {
    state: RandomState,
    counter: u64,
}

impl RandomColors {
    /// Randomly seeded; every instance yields a different sequence.
    pub fn new() -> Self {
        Self {
            state: RandomState::new(),
            counter: 0,
        }
    }

    /// Reproducible sequence for a given seed on the same machine and build.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: RandomState::with_seeds(seed, seed.rotate_left(17), !seed, seed ^ 0x9E37_79B9_7F4A_7C15),
            counter: 0,
        }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorProvider for RandomColors {
    fn next_color(&mut self) -> Rgb8 {
        let h = BuildHasher::hash_one(&self.state, self.counter);
        self.counter += 1;
        Rgb8::new((h >> 16) as u8, (h >> 8) as u8, h as u8)
    }
}

/// Cycles through the Office palette, starting at blue.
#[derive(Clone, Debug, Default)]
pub struct PaletteColors {
    idx: usize,
}

impl ColorProvider for PaletteColors {
    fn next_color(&mut self) -> Rgb8 {
        let c = OFFICE10[self.idx % OFFICE10.len()];
        self.idx += 1;
        c
    }
}

/// Replays a fixed list of colors, cycling when it runs out.
///
/// Used to keep colors stable across repaints of the same render request and
/// to make tests deterministic.
#[derive(Clone, Debug)]
pub struct FixedColors {
    colors: Vec<Rgb8>,
    idx: usize,
}

impl FixedColors {
    pub fn new(colors: Vec<Rgb8>) -> Self {
        Self { colors, idx: 0 }
    }
}

impl ColorProvider for FixedColors {
    fn next_color(&mut self) -> Rgb8 {
        if self.colors.is_empty() {
            return Rgb8::BLACK;
        }
        let c = self.colors[self.idx % self.colors.len()];
        self.idx += 1;
        c
    }
}
