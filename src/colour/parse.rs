use super::keywords;
use crate::models::Rgba;

/// Parses a CSS colour into RGBA.
///
/// Accepted forms:
/// * keywords (`red`, `rebeccapurple`, `transparent`, ...)
/// * `#rgb` and `#rrggbb`
/// * `rgb(r, g, b)` and `rgba(r, g, b, a)`, channels as integers or percentages
/// * `hsl(h, s, l)` and `hsla(h, s, l, a)`
///
/// Spaces are ignored and matching is case-insensitive. Byte channels are
/// rounded and clamped to 0..=255, alpha and saturation/lightness to [0, 1].
/// Returns `None` for anything else.
pub fn parse_colour(input: &str) -> Option<Rgba> {
    let s: String = input
        .chars()
        .filter(|c| *c != ' ')
        .collect::<String>()
        .to_ascii_lowercase();

    if let Some((rgb, alpha)) = keywords::lookup(&s) {
        return Some(Rgba::new(
            rgb[0] as f64,
            rgb[1] as f64,
            rgb[2] as f64,
            alpha,
        ));
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let open = s.find('(')?;
    let args = s[open + 1..].strip_suffix(')')?;
    if args.contains(')') {
        return None;
    }
    let name = &s[..open];
    let mut params: Vec<&str> = args.split(',').collect();

    match name {
        "rgba" | "rgb" => {
            let alpha = alpha_param(name == "rgba", &mut params)?;
            if params.len() != 3 {
                return None;
            }
            Some(Rgba::new(
                parse_css_int(params[0])?,
                parse_css_int(params[1])?,
                parse_css_int(params[2])?,
                alpha,
            ))
        }
        "hsla" | "hsl" => {
            let alpha = alpha_param(name == "hsla", &mut params)?;
            if params.len() != 3 {
                return None;
            }
            let h = ((parse_float_prefix(params[0])? % 360.0) + 360.0) % 360.0 / 360.0;
            let s = parse_css_float(params[1])?;
            let l = parse_css_float(params[2])?;
            let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
            let m1 = l * 2.0 - m2;
            Some(Rgba::new(
                clamp_css_byte(hue_to_rgb(m1, m2, h + 1.0 / 3.0) * 255.0),
                clamp_css_byte(hue_to_rgb(m1, m2, h) * 255.0),
                clamp_css_byte(hue_to_rgb(m1, m2, h - 1.0 / 3.0) * 255.0),
                alpha,
            ))
        }
        _ => None,
    }
}

/// Pops the trailing alpha parameter of the four-argument forms.
fn alpha_param(with_alpha: bool, params: &mut Vec<&str>) -> Option<f64> {
    if !with_alpha {
        return Some(1.0);
    }
    if params.len() != 4 {
        return None;
    }
    parse_css_float(params.pop()?)
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let iv = u32::from_str_radix(hex, 16).ok()?;
    let (r, g, b) = match hex.len() {
        3 => (
            ((iv & 0xf00) >> 4) | ((iv & 0xf00) >> 8),
            (iv & 0xf0) | ((iv & 0xf0) >> 4),
            (iv & 0xf) | ((iv & 0xf) << 4),
        ),
        6 => ((iv & 0xff0000) >> 16, (iv & 0xff00) >> 8, iv & 0xff),
        _ => return None,
    };
    Some(Rgba::new(r as f64, g as f64, b as f64, 1.0))
}

fn hue_to_rgb(m1: f64, m2: f64, mut h: f64) -> f64 {
    if h < 0.0 {
        h += 1.0;
    } else if h > 1.0 {
        h -= 1.0;
    }

    if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

/// Rounds half up, matching how CSS colour components are rounded in browsers.
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

fn clamp_css_byte(v: f64) -> f64 {
    round_half_up(v).clamp(0.0, 255.0)
}

fn clamp_css_float(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// A byte channel: `50%` scales to 0..=255, anything else is read as an integer.
fn parse_css_int(s: &str) -> Option<f64> {
    if let Some(pct) = s.strip_suffix('%') {
        return Some(clamp_css_byte(parse_float_prefix(pct)? / 100.0 * 255.0));
    }
    Some(clamp_css_byte(parse_int_prefix(s)?))
}

/// A unit-range value: `50%` is 0.5, a bare number is taken as is.
pub(crate) fn parse_css_float(s: &str) -> Option<f64> {
    if let Some(pct) = s.strip_suffix('%') {
        return Some(clamp_css_float(parse_float_prefix(pct)? / 100.0));
    }
    Some(clamp_css_float(parse_float_prefix(s)?))
}

/// Length of the leading `[+-]digits` run, or `None` without any digit.
fn scan_int(s: &[u8]) -> Option<usize> {
    let sign = matches!(s.first(), Some(b'+' | b'-')) as usize;
    let digits = s[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    (digits > 0).then_some(sign + digits)
}

fn parse_int_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let end = scan_int(s.as_bytes())?;
    s[..end].parse::<f64>().ok()
}

/// Reads the longest leading decimal number, ignoring whatever follows it.
pub(crate) fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = matches!(bytes.first(), Some(b'+' | b'-')) as usize;
    let int_digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        if let Some(exp) = scan_int(&bytes[end + 1..]) {
            end += 1 + exp;
        }
    }

    s[..end].parse::<f64>().ok()
}
