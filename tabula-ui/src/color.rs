use palette::{IntoColor, Oklch, Srgb};

/// A display color: perceptual OKLCH or plain sRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Builds an sRGB color from `0xRRGGBB`.
    pub fn hex(value: u32) -> Self {
        Self::Rgb {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } => Rgb::new(r, g, b),
            Self::Oklch { l, c, h } => oklch_to_rgb(l, c, h),
        }
    }

    /// `#rrggbb` form, for hosts that speak CSS.
    pub fn to_hex(&self) -> String {
        let Rgb { r, g, b } = self.to_rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        assert_eq!(Color::hex(0xA277FF).to_hex(), "#a277ff");
        assert_eq!(Color::hex(0x6E5494).to_rgb(), Rgb::new(0x6E, 0x54, 0x94));
    }

    #[test]
    fn test_oklch_extremes() {
        assert_eq!(Color::oklch(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
        assert_eq!(Color::oklch(1.0, 0.0, 0.0).to_hex(), "#ffffff");
    }
}
