use super::hex::Color;
use super::wcag::contrast_ratio;
use crate::error::ContrastError;

/// Mix `from` toward `to` by `t` in [0,1], per channel in sRGB.
fn mix(from: Color, to: Color, t: f64) -> Color {
    let lerp = |a: u8, b: u8| {
        let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
        v.round().clamp(0.0, 255.0) as u8
    };
    Color::new(lerp(from.r, to.r), lerp(from.g, to.g), lerp(from.b, to.b))
}

/// Smallest shift of `fg` toward `anchor` that reaches `target` against `bg`.
///
/// Along the path luminance moves monotonically toward the anchor, so once the
/// ratio starts passing it keeps passing: binary search applies.
fn shift_toward(fg: Color, bg: Color, anchor: Color, target: f64) -> Option<(f64, Color)> {
    if contrast_ratio(anchor, bg) < target {
        return None;
    }
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..32 {
        let mid = (lo + hi) * 0.5;
        if contrast_ratio(mix(fg, anchor, mid), bg) >= target {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Some((hi, mix(fg, anchor, hi)))
}

/// Nudge a foreground color until it reaches `target` contrast against `bg`.
///
/// Returns `fg` unchanged if it already passes, otherwise the closer of the
/// darkened and lightened candidates. `None` if even black or white on `bg`
/// cannot reach the target. Targets outside [1, 21] are rejected.
pub fn suggest_foreground(
    fg: Color,
    bg: Color,
    target: f64,
) -> Result<Option<Color>, ContrastError> {
    if !(1.0..=21.0).contains(&target) {
        return Err(ContrastError::InvalidPolicy(format!(
            "target ratio {target} is outside [1, 21]"
        )));
    }
    if contrast_ratio(fg, bg) >= target {
        return Ok(Some(fg));
    }
    let darker = shift_toward(fg, bg, Color::BLACK, target);
    let lighter = shift_toward(fg, bg, Color::WHITE, target);
    Ok(match (darker, lighter) {
        (Some((td, d)), Some((tl, l))) => Some(if td <= tl { d } else { l }),
        (Some((_, d)), None) => Some(d),
        (None, Some((_, l))) => Some(l),
        (None, None) => None,
    })
}
