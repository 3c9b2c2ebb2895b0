use super::hex::Color;

/// HSL components: hue in degrees [0,360), saturation and lightness in [0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Standard max/min/delta RGB -> HSL. Achromatic colors get hue 0, saturation 0.
pub fn rgb_to_hsl(color: Color) -> Hsl {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h * 60.0, s, l }
}

/// `hsl(H,S%,L%)` with each component rounded to the nearest integer.
pub fn format_hsl(color: Color) -> String {
    let hsl = rgb_to_hsl(color);
    // 359.5..360 rounds up to a full turn
    let hue = hsl.h.round() as u32 % 360;
    format!(
        "hsl({},{}%,{}%)",
        hue,
        (hsl.s * 100.0).round() as u32,
        (hsl.l * 100.0).round() as u32
    )
}
