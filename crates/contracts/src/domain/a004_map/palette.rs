//! HLS color palette for map markers: evenly spaced hues, fixed lightness and saturation.

const HUE_OFFSET: f64 = 0.01;
const LIGHTNESS: f64 = 0.6;
const SATURATION: f64 = 0.65;

/// `n` colors as lower-case `#rrggbb` strings.
pub fn hls_palette(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let hue = (i as f64 / n as f64 + HUE_OFFSET).rem_euclid(1.0);
            let (r, g, b) = hls_to_rgb(hue, LIGHTNESS, SATURATION);
            format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
        })
        .collect()
}

fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        channel(m1, m2, h + 1.0 / 3.0),
        channel(m1, m2, h),
        channel(m1, m2, h - 1.0 / 3.0),
    )
}

fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_first_color() {
        assert_eq!(hls_palette(1), vec!["#db5f57"]);
    }

    #[test]
    fn test_colors_are_distinct_hex() {
        let colors = hls_palette(8);
        assert_eq!(colors.len(), 8);
        assert_eq!(colors.iter().collect::<HashSet<_>>().len(), 8);
        assert!(colors.iter().all(|c| c.len() == 7 && c.starts_with('#')));
    }

    #[test]
    fn test_empty_palette() {
        assert!(hls_palette(0).is_empty());
    }
}
