//! Per-tag style rules
//!
//! Every rule only fills attributes that are still unset, so applying the
//! rules from the innermost element outward leaves the most specific value
//! in place.

use crate::ast::{Attributes, Color, Fragment, Tag, TextStyle};
use crate::theme::Theme;

/// Relative font size applied to `<code>` runs.
pub const MONOSPACE_SIZE: f64 = 0.9;

/// Character spacing applied to `<code>` runs.
pub const MONOSPACE_CHARACTER_SPACING: f64 = -0.1;

/// Decorate `fragment` with the style implied by `tag`.
pub(crate) fn decorate(
    fragment: &mut Fragment,
    tag: &Tag,
    attributes: &Attributes,
    theme: &Theme,
) {
    match tag {
        Tag::Bold | Tag::Strong => add_style(fragment, TextStyle::Bold),
        Tag::Italic | Tag::Emphasis => add_style(fragment, TextStyle::Italic),
        Tag::Underline => add_style(fragment, TextStyle::Underline),
        Tag::Delete | Tag::Strikethrough => add_style(fragment, TextStyle::Strikethrough),
        Tag::Subscript => add_style(fragment, TextStyle::Subscript),
        Tag::Superscript => add_style(fragment, TextStyle::Superscript),
        Tag::Code => apply_code(fragment, theme),
        Tag::Color => apply_color(fragment, attributes),
        Tag::Font => apply_font(fragment, attributes),
        Tag::Anchor | Tag::Link => apply_link(fragment, attributes, theme),
        Tag::Span => apply_span(fragment, attributes),
        // Line breaks never wrap content; unknown tags are transparent.
        Tag::LineBreak | Tag::Other(_) => {}
    }
}

fn add_style(fragment: &mut Fragment, style: TextStyle) {
    fragment.styles.insert(style);
}

fn set_if_unset<T>(slot: &mut Option<T>, value: impl FnOnce() -> Option<T>) {
    if slot.is_none() {
        *slot = value();
    }
}

fn apply_code(fragment: &mut Fragment, theme: &Theme) {
    set_if_unset(&mut fragment.font, || {
        Some(theme.monospace_font_family.clone())
    });
    set_if_unset(&mut fragment.size, || Some(MONOSPACE_SIZE));
    set_if_unset(&mut fragment.character_spacing, || {
        Some(MONOSPACE_CHARACTER_SPACING)
    });
    set_if_unset(&mut fragment.color, || {
        theme.monospace_font_color.as_deref().map(Color::hex)
    });
}

fn apply_color(fragment: &mut Fragment, attributes: &Attributes) {
    set_if_unset(&mut fragment.color, || color_from_attributes(attributes));
}

/// Resolve the color of a `<color>` tag: `rgb`, then `r`/`g`/`b`, then
/// `c`/`m`/`y`/`k`. An empty `rgb` and incomplete or non-numeric channels
/// yield no color.
pub(crate) fn color_from_attributes(attributes: &Attributes) -> Option<Color> {
    if let Some(rgb) = attributes.get("rgb") {
        let hex = rgb.trim().trim_start_matches('#');
        return (!hex.is_empty()).then(|| Color::hex(hex));
    }

    let channel = |name: &str| attributes.get(name).map(|value| value.trim());

    if let (Some(r), Some(g), Some(b)) = (channel("r"), channel("g"), channel("b")) {
        let r = r.parse::<u8>().ok()?;
        let g = g.parse::<u8>().ok()?;
        let b = b.parse::<u8>().ok()?;
        return Some(Color::Hex(format!("{:02X}{:02X}{:02X}", r, g, b)));
    }

    if let (Some(c), Some(m), Some(y), Some(k)) =
        (channel("c"), channel("m"), channel("y"), channel("k"))
    {
        let parse = |value: &str| value.parse::<i32>().ok();
        return Some(Color::Cmyk([parse(c)?, parse(m)?, parse(y)?, parse(k)?]));
    }

    None
}

fn parse_number(attributes: &Attributes, name: &str) -> Option<f64> {
    attributes.get(name)?.trim().parse::<f64>().ok()
}

fn apply_font(fragment: &mut Fragment, attributes: &Attributes) {
    set_if_unset(&mut fragment.font, || attributes.get("name").cloned());
    set_if_unset(&mut fragment.size, || {
        parse_number(attributes, "size").filter(|size| *size > 0.0)
    });
    set_if_unset(&mut fragment.character_spacing, || {
        parse_number(attributes, "character_spacing")
    });
}

fn apply_link(fragment: &mut Fragment, attributes: &Attributes, theme: &Theme) {
    set_if_unset(&mut fragment.anchor, || attributes.get("anchor").cloned());
    set_if_unset(&mut fragment.link, || attributes.get("href").cloned());
    set_if_unset(&mut fragment.local, || attributes.get("local").cloned());
    set_if_unset(&mut fragment.color, || {
        Some(Color::hex(&theme.link_font_color))
    });
}

fn apply_span(fragment: &mut Fragment, attributes: &Attributes) {
    let Some(style) = attributes.get("style") else {
        return;
    };

    for declaration in parse_declarations(style) {
        match declaration {
            Declaration::Color(color) => set_if_unset(&mut fragment.color, || Some(color)),
            Declaration::Style(style) => add_style(fragment, style),
        }
    }
}

/// Inline CSS declaration recognized inside `<span style="...">`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Declaration {
    Color(Color),
    Style(TextStyle),
}

/// Parse `property: value; ...` keeping only the declarations that affect
/// fragments. Unknown properties and values are dropped.
pub(crate) fn parse_declarations(style: &str) -> Vec<Declaration> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let value = value.trim();
            match property.trim() {
                "color" => {
                    let color: String = value
                        .chars()
                        .filter(|ch| !ch.is_whitespace() && *ch != '#')
                        .collect();
                    (!color.is_empty()).then_some(Declaration::Color(Color::Hex(color)))
                }
                "font-weight" if value == "bold" => Some(Declaration::Style(TextStyle::Bold)),
                "font-style" if value == "italic" => Some(Declaration::Style(TextStyle::Italic)),
                _ => None,
            }
        })
        .collect()
}
