// Simple color struct with an alpha channel.
// Particles and links carry their own opacity, so the alpha channel is
// combined with it when the color is turned into a canvas style string.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const GOLD: Color = Color::rgb(212, 175, 55);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    // Effective alpha once the per-draw opacity is applied, clamped to [0, 1]
    pub fn alpha_with(&self, opacity: f64) -> f64 {
        let alpha = (self.a as f64 / 255.0) * opacity;
        alpha.max(0.0).min(1.0)
    }

    pub fn to_css(&self, opacity: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.alpha_with(opacity)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translucent_color_scales_opacity() {
        let c = Color { r: 212, g: 175, b: 55, a: 0x66 };
        assert!((c.alpha_with(0.5) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_css_string() {
        assert_eq!(Color::GOLD.to_css(0.5), "rgba(212, 175, 55, 0.5)");
        assert_eq!(Color::WHITE.to_css(1.0), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn test_negative_opacity_is_transparent() {
        assert_eq!(Color::WHITE.alpha_with(-0.2), 0.0);
        assert_eq!(Color::WHITE.to_css(-0.2), "rgba(255, 255, 255, 0)");
    }
}
