use std::collections::HashMap;

use palette::Srgb;

use crate::error::SamplesError;

/// Side length of the RGB cube the class colours are drawn from.
const CUBE_SIDE: u32 = 255;

/// Colour used for classes that were never assigned one.
pub const DEFAULT_COLOR: Srgb<u8> = Srgb::new(0, 0, 0);

// ---------------------------------------------------------------------------
// Spaced colour generator
// ---------------------------------------------------------------------------

/// Generates `n` colours by cutting the RGB cube (`255³` values) into `n`
/// evenly sized integer steps.
///
/// Step `i` is `i * floor(255³ / n)`, read as a `0xRRGGBB` value. The steps
/// are strictly increasing, so the colours come out in increasing order and
/// the first one is always black.
pub fn generate_spaced_colors(n: usize) -> Result<Vec<Srgb<u8>>, SamplesError> {
    if n == 0 {
        return Err(SamplesError::NoClasses);
    }
    let volume = u64::from(CUBE_SIDE).pow(3);
    let interval = volume / n as u64;

    Ok((0..n as u64)
        .map(|i| {
            let step = i * interval;
            Srgb::new(
                ((step >> 16) & 0xff) as u8,
                ((step >> 8) & 0xff) as u8,
                (step & 0xff) as u8,
            )
        })
        .collect())
}

/// Format a colour as `#rrggbb`.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Parse `#rrggbb` (or `rrggbb`) back into a colour.
pub fn parse_hex_color(hex: &str) -> Option<Srgb<u8>> {
    hex.trim().parse::<Srgb<u8>>().ok()
}

// ---------------------------------------------------------------------------
// Class colours: class name → colour
// ---------------------------------------------------------------------------

/// One distinct colour per class, assigned in the order the classes are given.
#[derive(Debug, Clone)]
pub struct ClassColors {
    mapping: HashMap<String, Srgb<u8>>,
    default_color: Srgb<u8>,
}

impl ClassColors {
    /// Build the mapping for the given class names (first-seen order).
    pub fn new<S: AsRef<str>>(classes: &[S]) -> Result<Self, SamplesError> {
        let palette = generate_spaced_colors(classes.len())?;
        let mapping = classes
            .iter()
            .zip(palette)
            .map(|(class, color)| (class.as_ref().to_string(), color))
            .collect();

        Ok(ClassColors {
            mapping,
            default_color: DEFAULT_COLOR,
        })
    }

    /// The colour of `class_name`, or black if the class is unknown.
    pub fn color_for(&self, class_name: &str) -> Srgb<u8> {
        self.mapping
            .get(class_name)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// The colour of `class_name` as a `#rrggbb` string.
    pub fn hex_for(&self, class_name: &str) -> String {
        to_hex(self.color_for(class_name))
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
