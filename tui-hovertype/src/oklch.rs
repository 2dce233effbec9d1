//! Just enough Oklch to build perceptually even brightness ramps.
//!
//! Weight ramps interpolate in Oklch so that equal weight steps read as
//! equal brightness steps, which naive sRGB interpolation does not give.

/// Perceptually uniform lightness, chroma, and hue (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

pub fn from_srgb(r: u8, g: u8, b: u8) -> Oklch {
    let lin = [
        decode_gamma(r as f32 / 255.0),
        decode_gamma(g as f32 / 255.0),
        decode_gamma(b as f32 / 255.0),
    ];

    let [l, a, b] = oklab_from_linear(lin);
    let c = (a * a + b * b).sqrt();
    let h = if c < 1e-8 { 0.0 } else { b.atan2(a) };

    Oklch { l, c, h }
}

pub fn to_srgb(lch: Oklch) -> (u8, u8, u8) {
    let lab = [lch.l, lch.c * lch.h.cos(), lch.c * lch.h.sin()];
    let [r, g, b] = linear_from_oklab(lab);

    let quantize = |c: f32| (encode_gamma(c.clamp(0.0, 1.0)) * 255.0 + 0.5) as u8;

    (quantize(r), quantize(g), quantize(b))
}

pub fn to_color(lch: Oklch) -> ratatui::style::Color {
    let (r, g, b) = to_srgb(lch);
    ratatui::style::Color::Rgb(r, g, b)
}

/// Componentwise interpolation; hue takes the shortest arc.
pub fn lerp(a: Oklch, b: Oklch, t: f32) -> Oklch {
    use std::f32::consts::PI;

    let mut dh = b.h - a.h;

    if dh > PI {
        dh -= 2.0 * PI;
    } else if dh < -PI {
        dh += 2.0 * PI;
    }

    Oklch {
        l: a.l + (b.l - a.l) * t,
        c: a.c + (b.c - a.c) * t,
        h: a.h + dh * t,
    }
}

fn decode_gamma(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn encode_gamma(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn oklab_from_linear([r, g, b]: [f32; 3]) -> [f32; 3] {
    let l = (0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b).cbrt();
    let m = (0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b).cbrt();
    let s = (0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b).cbrt();

    [
        0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
        1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
        0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
    ]
}

fn linear_from_oklab([l, a, b]: [f32; 3]) -> [f32; 3] {
    let l_ = (l + 0.3963377774 * a + 0.2158037573 * b).powi(3);
    let m_ = (l - 0.1055613458 * a - 0.0638541728 * b).powi(3);
    let s_ = (l - 0.0894841775 * a - 1.2914855480 * b).powi(3);

    [
        4.0767416621 * l_ - 3.3077115913 * m_ + 0.2309699292 * s_,
        -1.2684380046 * l_ + 2.6097574011 * m_ - 0.3413193965 * s_,
        -0.0041960863 * l_ - 0.7034186147 * m_ + 1.7076147010 * s_,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trip(r: u8, g: u8, b: u8) {
        let lch = from_srgb(r, g, b);
        let (r2, g2, b2) = to_srgb(lch);

        assert!(
            (r as i16 - r2 as i16).unsigned_abs() <= 1
                && (g as i16 - g2 as i16).unsigned_abs() <= 1
                && (b as i16 - b2 as i16).unsigned_abs() <= 1,
            "({r}, {g}, {b}) came back as ({r2}, {g2}, {b2})"
        );
    }

    #[test]
    fn round_trips_within_one_step() {
        let samples = [
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (110, 110, 110),
            (240, 240, 240),
            (30, 200, 140),
        ];

        for (r, g, b) in samples {
            assert_round_trip(r, g, b);
        }
    }

    #[test]
    fn lightness_spans_black_to_white() {
        assert!(from_srgb(0, 0, 0).l.abs() < 1e-6);
        assert!((from_srgb(255, 255, 255).l - 1.0).abs() < 0.01);
    }

    #[test]
    fn grays_carry_no_chroma() {
        for v in [0u8, 64, 128, 192, 255] {
            let lch = from_srgb(v, v, v);
            assert!(lch.c < 1e-4, "gray {v} had chroma {}", lch.c);
        }
    }

    #[test]
    fn lerp_hits_both_endpoints() {
        let a = from_srgb(110, 110, 110);
        let b = from_srgb(255, 255, 255);

        assert!((lerp(a, b, 0.0).l - a.l).abs() < 1e-6);
        assert!((lerp(a, b, 1.0).l - b.l).abs() < 1e-6);
    }

    #[test]
    fn lerp_lightness_is_monotone() {
        let a = from_srgb(90, 90, 90);
        let b = from_srgb(250, 250, 250);
        let mut prev = lerp(a, b, 0.0).l;

        for i in 1..=20 {
            let l = lerp(a, b, i as f32 / 20.0).l;
            assert!(l >= prev);
            prev = l;
        }
    }
}
