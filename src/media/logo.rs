//! Square app-style icons from SVG logos.
//!
//! The logo's markup is kept verbatim and placed, centred and scaled, over a
//! rounded light background chosen to contrast with the logo's own colours.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use tracing::instrument;

use super::Error;

const SIZE: f64 = 128.0;
const CORNER_RADIUS: u32 = 16;

/// Fallback coordinate system for logos declaring neither a `viewBox` nor a size.
const DEFAULT_VIEW_BOX: [f64; 4] = [0.0, 0.0, 24.0, 24.0];

/// Candidate backgrounds, in order of preference.
const PALETTE: [&str; 7] = [
    "#ffffff", "#f0f0f0", "#e0f7fa", "#e3f2fd", "#fffde7", "#fce4ec", "#e8f5e9",
];

static ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<svg\b([^>]*)>").expect("root pattern is valid"));

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("attribute pattern is valid")
});

static PAINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:fill|stroke)=["']([^"']+)["']|(?:fill|stroke):\s*([^;"'\s]+)"#)
        .expect("paint pattern is valid")
});

type Rgb = [u8; 3];

fn parse_hex(colour: &str) -> Option<Rgb> {
    let hex = colour.trim_start_matches('#');
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |i: usize| {
        expanded
            .get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn luminance([r, g, b]: Rgb) -> f64 {
    let linear = |c: u8| f64::from(c) / 255.0;
    0.0722f64.mul_add(
        linear(b),
        0.2126f64.mul_add(linear(r), 0.7152 * linear(g)),
    )
}

fn contrast(a: Rgb, b: Rgb) -> f64 {
    let (a, b) = (luminance(a), luminance(b));
    (a.max(b) + 0.05) / (a.min(b) + 0.05)
}

/// Paint values used by the logo, excluding `none`, `transparent` and
/// `currentColor`.
fn paints(svg: &str) -> impl Iterator<Item = &str> {
    PAINT
        .captures_iter(svg)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .filter(|paint| {
            !["none", "transparent", "currentcolor"].contains(&paint.to_ascii_lowercase().as_str())
        })
}

/// Picks the palette colour that contrasts most with the logo's average hex
/// colour.
///
/// Logos without hex colours are treated as black.
#[must_use]
pub fn background_for(svg: &str) -> &'static str {
    let colours: Vec<Rgb> = paints(svg)
        .filter(|paint| paint.starts_with('#'))
        .filter_map(parse_hex)
        .collect();

    let average = if colours.is_empty() {
        [0, 0, 0]
    } else {
        let mean = |channel: usize| {
            let total: usize = colours.iter().map(|c| usize::from(c[channel])).sum();
            u8::try_from(total / colours.len()).unwrap_or(u8::MAX)
        };
        [mean(0), mean(1), mean(2)]
    };
    tracing::debug!("Average logo colour is {average:?}");

    let mut best = PALETTE[0];
    let mut best_contrast = 0.0;
    for candidate in PALETTE {
        let Some(rgb) = parse_hex(candidate) else {
            continue;
        };
        let ratio = contrast(average, rgb);
        if ratio > best_contrast {
            best = candidate;
            best_contrast = ratio;
        }
    }
    best
}

fn parse_length(value: &str) -> Option<f64> {
    let digits: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

fn parse_view_box(value: &str) -> Option<[f64; 4]> {
    let numbers = value
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<f64>, _>>()
        .ok()?;
    numbers.try_into().ok()
}

/// The root element's coordinate system and its inner markup.
fn split_root(svg: &str) -> Result<([f64; 4], &str), Error> {
    let root = ROOT
        .captures(svg)
        .ok_or(Error::InvalidSvg("no <svg> root element"))?;
    let attributes = root.get(1).map_or("", |m| m.as_str());
    let open_end = root.get(0).map_or(0, |m| m.end());

    let (mut width, mut height, mut view_box) = (None, None, None);
    for attribute in ATTRIBUTE.captures_iter(attributes) {
        let value = attribute
            .get(2)
            .or_else(|| attribute.get(3))
            .map_or("", |m| m.as_str());
        match &attribute[1] {
            "width" => width = parse_length(value),
            "height" => height = parse_length(value),
            "viewBox" => view_box = parse_view_box(value),
            _ => {}
        }
    }

    let view_box = match (view_box, width, height) {
        (Some(view_box), _, _) => view_box,
        (None, Some(width), Some(height)) if width > 0.0 && height > 0.0 => {
            [0.0, 0.0, width, height]
        }
        _ => DEFAULT_VIEW_BOX,
    };

    let children = if attributes.trim_end().ends_with('/') {
        ""
    } else {
        let close = svg
            .rfind("</svg>")
            .filter(|&close| close >= open_end)
            .ok_or(Error::InvalidSvg("unclosed <svg> element"))?;
        svg[open_end..close].trim()
    };

    Ok((view_box, children))
}

/// Restyles an SVG logo as a 128x128 rounded app icon.
///
/// The logo is scaled to fit its longer side and centred. A `viewBox` with a
/// non-zero origin is shifted back to the origin first.
///
/// # Errors
///
/// Returns [`Error::InvalidSvg`] if there is no `<svg>` root element, it is
/// never closed, or its `viewBox` has no area.
pub fn app_icon(svg: &str) -> Result<String, Error> {
    let background = background_for(svg);
    let ([x, y, width, height], children) = split_root(svg)?;

    let extent = width.max(height);
    if extent <= 0.0 {
        return Err(Error::InvalidSvg("viewBox has no area"));
    }
    let scale = SIZE / extent;
    let (scaled_width, scaled_height) = (width * scale, height * scale);
    let offset_x = (SIZE - scaled_width) / 2.0;
    let offset_y = (SIZE - scaled_height) / 2.0;
    tracing::debug!("Scaling logo by {scale:.3}, placed at ({offset_x:.1}, {offset_y:.1})");

    #[allow(clippy::float_cmp)]
    let children = if x == 0.0 && y == 0.0 {
        children.to_string()
    } else {
        format!(r#"<g transform="translate({}, {})">{children}</g>"#, -x, -y)
    };

    Ok(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{SIZE}" height="{SIZE}" viewBox="0 0 {SIZE} {SIZE}" xmlns="http://www.w3.org/2000/svg">
    <rect width="{SIZE}" height="{SIZE}" rx="{CORNER_RADIUS}" ry="{CORNER_RADIUS}" fill="{background}" />
    <g transform="translate({offset_x}, {offset_y}) scale({scale})">
        {children}
    </g>
</svg>
"#
    ))
}

/// The file an icon for `input` is written to: `<stem>_logo.svg` beside it.
#[must_use]
pub fn logo_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "logo".into(), |stem| stem.to_string_lossy());
    input.with_file_name(format!("{stem}_logo.svg"))
}

/// Reads an SVG logo, writes its app icon beside it and returns the icon's
/// path.
///
/// # Errors
///
/// Returns an error if the logo cannot be read or restyled, or the icon cannot
/// be written.
#[instrument(level = "debug")]
pub fn convert_logo(input: &Path) -> Result<PathBuf, Error> {
    let svg = std::fs::read_to_string(input)?;
    let icon = app_icon(&svg)?;

    let output = logo_output(input);
    std::fs::write(&output, icon)?;
    tracing::info!("Wrote app icon for {} to {}", input.display(), output.display());
    Ok(output)
}
