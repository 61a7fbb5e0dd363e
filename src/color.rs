use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Dashboard theme
// ---------------------------------------------------------------------------

/// Fixed dashboard palette, shared by panels and plots.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color32,
    pub text: Color32,
    /// Scatter points and the spend histogram.
    pub primary: Color32,
    /// Trendline and the sales histogram.
    pub secondary: Color32,
}

impl Theme {
    pub const fn dashboard() -> Self {
        Theme {
            background: Color32::from_rgb(0xf8, 0xf9, 0xfa),
            text: Color32::from_rgb(0x2c, 0x3e, 0x50),
            primary: Color32::from_rgb(0x34, 0x98, 0xdb),
            secondary: Color32::from_rgb(0xe7, 0x4c, 0x3c),
        }
    }
}

// ---------------------------------------------------------------------------
// Color helpers
// ---------------------------------------------------------------------------

/// Apply an alpha in [0, 1] to an opaque colour.
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Raise a colour's lightness, for softer bar fills under a solid stroke.
pub fn lighten(color: Color32, amount: f32) -> Color32 {
    let srgb = Srgb::new(
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
    );
    let mut hsl: Hsl = srgb.into_color();
    hsl.lightness = (hsl.lightness + amount).min(1.0);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_preserves_rgb() {
        let base = Theme::dashboard().primary;
        let faded = with_opacity(base, 0.7);
        assert_eq!((faded.r(), faded.g(), faded.b()), (base.r(), base.g(), base.b()));
        assert_eq!(faded.a(), 178);
    }

    #[test]
    fn lighten_moves_toward_white() {
        let base = Theme::dashboard().secondary;
        let light = lighten(base, 0.2);
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(sum(light) > sum(base));
    }
}
