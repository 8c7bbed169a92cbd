use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Reorder-probability colour ramp
// ---------------------------------------------------------------------------

/// Hue for probability 0 (red) and 1 (green), in degrees.
const LOW_HUE: f32 = 0.0;
const HIGH_HUE: f32 = 120.0;

/// Map a reorder probability onto a red → amber → green ramp.
/// Values outside `[0, 1]` (and NaN) are clamped to the nearest end.
pub fn probability_color(p: f64) -> Color32 {
    let t = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) as f32 };
    let hue = LOW_HUE + t * (HIGH_HUE - LOW_HUE);
    let hsl = Hsl::new(hue, 0.65, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
