//! Parsing of the handful of CSS value forms the preview can paint.

use egui::{vec2, Color32, Vec2};

/// Points per `rem`
pub const REM: f32 = 16.0;

/// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()` and a few keywords
pub fn parse_color(value: &str) -> Option<Color32> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = function_args(value, "rgba").or_else(|| function_args(value, "rgb")) {
        return parse_rgb_args(args);
    }
    match value.to_ascii_lowercase().as_str() {
        "white" => Some(Color32::WHITE),
        "black" => Some(Color32::BLACK),
        "transparent" => Some(Color32::TRANSPARENT),
        _ => None,
    }
}

/// Formats a colour as `#rrggbb`, dropping alpha
pub fn format_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color32::from_rgb(digit(0)?, digit(1)?, digit(2)?)),
        4 => Some(Color32::from_rgba_unmultiplied(digit(0)?, digit(1)?, digit(2)?, digit(3)?)),
        6 => Some(Color32::from_rgb(pair(0)?, pair(2)?, pair(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
        _ => None,
    }
}

fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_rgb_args(args: &str) -> Option<Color32> {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let channel = |part: &str| -> Option<u8> {
        let value = match part.strip_suffix('%') {
            Some(percent) => percent.parse::<f32>().ok()? * 2.55,
            None => part.parse::<f32>().ok()?,
        };
        Some(value.round().clamp(0.0, 255.0) as u8)
    };
    let alpha = match parts.get(3) {
        Some(part) => {
            let value = match part.strip_suffix('%') {
                Some(percent) => percent.parse::<f32>().ok()? / 100.0,
                None => part.parse::<f32>().ok()?,
            };
            (value.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        None => 255,
    };

    Some(Color32::from_rgba_unmultiplied(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha,
    ))
}

/// Parses a `px`, `rem` or unitless length into points
pub fn parse_length(value: &str) -> Option<f32> {
    let value = value.trim();
    let (number, scale) = if let Some(number) = value.strip_suffix("rem") {
        (number, REM)
    } else if let Some(number) = value.strip_suffix("px") {
        (number, 1.0)
    } else {
        (value, 1.0)
    };
    number.trim().parse::<f32>().ok().map(|n| n * scale)
}

/// A single outer `box-shadow`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    pub offset: Vec2,
    pub blur: f32,
    pub spread: f32,
    pub color: Color32,
}

/// Parses `x y [blur [spread]] [color]`. Returns `None` for `none` or
/// anything the preview cannot draw, including inset shadows.
pub fn parse_box_shadow(value: &str) -> Option<BoxShadow> {
    let tokens = split_top_level(value.trim());
    if tokens.is_empty() || tokens.iter().any(|t| *t == "none" || *t == "inset") {
        return None;
    }

    let mut lengths = Vec::new();
    let mut color = None;
    for token in tokens {
        match parse_length(token) {
            Some(length) if color.is_none() => lengths.push(length),
            _ => color = Some(parse_color(token)?),
        }
    }
    if lengths.len() < 2 || lengths.len() > 4 {
        return None;
    }

    Some(BoxShadow {
        offset: vec2(lengths[0], lengths[1]),
        blur: lengths.get(2).copied().unwrap_or(0.0),
        spread: lengths.get(3).copied().unwrap_or(0.0),
        color: color.unwrap_or(Color32::from_black_alpha(64)),
    })
}

/// Number of column tracks in a `grid-template-columns` value. `repeat(n, ...)`
/// counts its tracks `n` times. Returns `None` for an empty value, `none`, or
/// an `auto-fit`/`auto-fill` repetition whose count depends on the width.
pub fn parse_track_count(value: &str) -> Option<usize> {
    let value = value.trim();
    if value == "none" {
        return None;
    }

    let mut count = 0usize;
    for token in split_top_level(value) {
        match function_args(token, "repeat") {
            Some(args) => {
                let (times, tracks) = args.split_once(',')?;
                let times = times.trim().parse::<usize>().ok()?;
                count += times * split_top_level(tracks.trim()).len();
            }
            None => count += 1,
        }
    }
    (count > 0).then_some(count)
}

/// Splits on whitespace outside parentheses
fn split_top_level(value: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (index, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(begin) = start.take() {
                    tokens.push(&value[begin..index]);
                }
                continue;
            }
            _ => {}
        }
        start.get_or_insert(index);
    }
    if let Some(begin) = start {
        tokens.push(&value[begin..]);
    }
    tokens
}
