use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Brand palette
// ---------------------------------------------------------------------------

/// A plain RGB triple. Chart specs carry these so the data layer stays free
/// of any UI-framework color type; the egui layer converts at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// 211 brand blue (#005191) – hourly volume bars, first pie slice.
pub const DEEP_BLUE: Rgb = Rgb::new(0x00, 0x51, 0x91);
/// Lighter brand blue (#539ED0) – center volume bars, second pie slice.
pub const SKY_BLUE: Rgb = Rgb::new(0x53, 0x9E, 0xD0);
/// Accent red (#FF443B) – repeat-caller histogram bars.
pub const CORAL: Rgb = Rgb::new(0xFF, 0x44, 0x3B);

/// Fixed two-color palette for the repeat/one-time pie.
pub const PIE_PALETTE: [Rgb; 2] = [DEEP_BLUE, SKY_BLUE];

// ---------------------------------------------------------------------------
// Generated palettes
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Rgb::new(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Palette for a pie with `n` slices: the fixed brand pair first, generated
/// hues for any further categories in the source data.
pub fn pie_palette(n: usize) -> Vec<Rgb> {
    if n <= PIE_PALETTE.len() {
        return PIE_PALETTE[..n].to_vec();
    }
    PIE_PALETTE
        .iter()
        .copied()
        .chain(generate_palette(n - PIE_PALETTE.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_palette_starts_with_brand_colors() {
        assert_eq!(pie_palette(2), vec![DEEP_BLUE, SKY_BLUE]);
        assert_eq!(pie_palette(1), vec![DEEP_BLUE]);

        let five = pie_palette(5);
        assert_eq!(five.len(), 5);
        assert_eq!(&five[..2], &PIE_PALETTE);
    }

    #[test]
    fn generated_palette_has_requested_size_and_distinct_hues() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(6);
        assert_eq!(colors.len(), 6);
        assert_ne!(colors[0], colors[3]);
    }
}
