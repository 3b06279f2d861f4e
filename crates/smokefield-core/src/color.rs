/// Warm burgundy/gold tones used by the backdrop smoke.
pub const BRAND_PALETTE: [[u8; 3]; 8] = [
    [139, 30, 63],   // burgundy
    [107, 24, 50],   // dark burgundy
    [80, 15, 40],    // deep burgundy
    [160, 43, 75],   // mid burgundy
    [212, 175, 55],  // gold accent
    [180, 140, 40],  // dark gold
    [220, 195, 140], // warm cream
    [100, 40, 60],   // muted plum
];

pub const GOLD: [u8; 3] = [212, 175, 55];

/// Particle color fixed at birth. Opacity is supplied separately when the
/// color is serialized, since it changes every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// Hue in degrees, saturation and lightness in percent.
    Hsl { h: f32, s: f32, l: f32 },
    Rgb([u8; 3]),
}

impl Color {
    /// CSS color string with the given alpha, e.g. `hsla(42.0,50.0%,60.0%,0.4200)`.
    pub fn css(&self, alpha: f32) -> String {
        let a = alpha.clamp(0.0, 1.0);
        match *self {
            Color::Hsl { h, s, l } => format!("hsla({h:.1},{s:.1}%,{l:.1}%,{a:.4})"),
            Color::Rgb([r, g, b]) => format!("rgba({r},{g},{b},{a:.4})"),
        }
    }
}
