// src/glaze.rs
//! Glaze identifier helpers.
//!
//! Identifiers come in two shapes: dataset ids (`pc-24-sapphire-float`)
//! and display names scraped off the vendor site (`PC-24 Sapphire Float`).
//! Lookups always use the identifier as stored; these functions only
//! derive labels and URL slugs from it.

/// Display label for a glaze id.
///
/// `pc-24-sapphire-float` → `PC-24 Sapphire Float`
///
/// Segments are split on hyphens and whitespace. The first segment is
/// uppercased, later non-numeric segments are title-cased, numeric ones
/// are kept as-is. The first separator becomes a hyphen, the rest spaces.
/// Applying it to its own output changes nothing.
pub fn format_label(id: &str) -> String {
    let mut out = String::with_capacity(id.len());

    let segments = id
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|seg| !seg.is_empty());

    for (i, seg) in segments.enumerate() {
        match i {
            0 => {}
            1 => out.push('-'),
            _ => out.push(' '),
        }
        if is_numeric(seg) {
            out.push_str(seg);
        } else if i == 0 {
            out.push_str(&seg.to_uppercase());
        } else {
            out.push_str(&title_case(seg));
        }
    }
    out
}

/// URL slug for a display name: lowercase, words joined by hyphens.
///
/// `PC-24 Sapphire Float` → `pc-24-sapphire-float`
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Split a combination slug (`<top>-over-<bottom>`) into its glaze ids.
pub fn split_over_slug(slug: &str) -> Option<(&str, &str)> {
    let (top, bottom) = slug.split_once("-over-")?;
    if top.is_empty() || bottom.is_empty() {
        return None;
    }
    Some((top, bottom))
}

fn is_numeric(seg: &str) -> bool {
    seg.parse::<f64>().is_ok_and(f64::is_finite)
}

fn title_case(seg: &str) -> String {
    let mut chars = seg.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => s!(),
    }
}
