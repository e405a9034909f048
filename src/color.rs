use std::collections::BTreeMap;
use std::fmt::Display;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

// ---------------------------------------------------------------------------
// Sequential scale for numeric values
// ---------------------------------------------------------------------------

const VIRIDIS: [[u8; 3]; 5] = [
    [0x44, 0x01, 0x54],
    [0x3b, 0x52, 0x8b],
    [0x21, 0x91, 0x8c],
    [0x5e, 0xc9, 0x62],
    [0xfd, 0xe7, 0x25],
];

/// Maps a value inside `[min, max]` onto the viridis gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialScale {
    pub min: f64,
    pub max: f64,
}

impl SequentialScale {
    pub fn new(min: f64, max: f64) -> Self {
        SequentialScale { min, max }
    }

    /// Position of `value` in the domain, clamped to [0, 1].
    pub fn normalize(&self, value: f64) -> f32 {
        let range = self.max - self.min;
        if range.abs() < f64::EPSILON || !value.is_finite() {
            return 0.5;
        }
        ((value - self.min) / range).clamp(0.0, 1.0) as f32
    }

    pub fn color_for(&self, value: f64) -> Color32 {
        viridis(self.normalize(value))
    }
}

/// Viridis colour at `t` in [0, 1], interpolated in linear RGB.
pub fn viridis(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (VIRIDIS.len() - 1) as f32;
    let lower = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let factor = scaled - lower as f32;

    let stop = |[r, g, b]: [u8; 3]| -> LinSrgb { Srgb::new(r, g, b).into_format::<f32>().into_linear() };
    let mixed = stop(VIRIDIS[lower]).mix(stop(VIRIDIS[lower + 1]), factor);
    to_color32(Srgb::from_linear(mixed))
}

// ---------------------------------------------------------------------------
// Categorical mapping: key → Color32
// ---------------------------------------------------------------------------

/// Maps the distinct values of a categorical field to distinct colours.
#[derive(Debug, Clone)]
pub struct ColorMap<K: Ord> {
    mapping: BTreeMap<K, Color32>,
    default_color: Color32,
}

impl<K: Ord + Clone + Display> ColorMap<K> {
    /// Build a colour map from the distinct values, in their sorted order.
    pub fn new<'a>(values: impl IntoIterator<Item = &'a K>) -> Self
    where
        K: 'a,
    {
        let keys: Vec<K> = values
            .into_iter()
            .cloned()
            .collect::<std::collections::BTreeSet<K>>()
            .into_iter()
            .collect();
        let palette = generate_palette(keys.len());
        let mapping: BTreeMap<K, Color32> = keys.into_iter().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given value.
    pub fn color_for(&self, value: &K) -> Color32 {
        self.mapping.get(value).copied().unwrap_or(self.default_color)
    }

    /// Return the legend entries (value label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping.iter().map(|(v, c)| (v.to_string(), *c)).collect()
    }
}
