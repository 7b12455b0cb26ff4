//! Form controls offered for each editable property and the conversions
//! between widget values and stored property strings.

use egui::Color32;

use crate::css::values::{format_hex, parse_color};

/// How a property is edited
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlKind {
    Select(&'static [&'static str]),
    Range {
        min: f32,
        max: f32,
        step: f32,
        unit: &'static str,
    },
    Color,
    /// Checkbox storing `on` when checked and `off` otherwise
    Toggle { on: &'static str, off: &'static str },
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSpec {
    pub property: &'static str,
    pub label: &'static str,
    pub kind: ControlKind,
}

const fn range(min: f32, max: f32, step: f32, unit: &'static str) -> ControlKind {
    ControlKind::Range { min, max, step, unit }
}

pub const CONTROLS: &[ControlSpec] = &[
    ControlSpec {
        property: "display",
        label: "Display",
        kind: ControlKind::Select(&["block", "flex", "grid"]),
    },
    ControlSpec {
        property: "flex-direction",
        label: "Direction",
        kind: ControlKind::Select(&["row", "column"]),
    },
    ControlSpec {
        property: "justify-content",
        label: "Justify content",
        kind: ControlKind::Select(&[
            "flex-start",
            "center",
            "flex-end",
            "space-between",
            "space-around",
        ]),
    },
    ControlSpec {
        property: "align-items",
        label: "Align items",
        kind: ControlKind::Select(&["stretch", "flex-start", "center", "flex-end"]),
    },
    ControlSpec {
        property: "grid-template-columns",
        label: "Grid columns",
        kind: ControlKind::Text,
    },
    ControlSpec {
        property: "gap",
        label: "Gap",
        kind: range(0.0, 4.0, 0.25, "rem"),
    },
    ControlSpec {
        property: "padding",
        label: "Padding",
        kind: range(0.0, 4.0, 0.25, "rem"),
    },
    ControlSpec {
        property: "font-size",
        label: "Font size",
        kind: range(0.75, 2.5, 0.05, "rem"),
    },
    ControlSpec {
        property: "font-weight",
        label: "Font weight",
        kind: range(300.0, 900.0, 100.0, ""),
    },
    ControlSpec {
        property: "line-height",
        label: "Line height",
        kind: range(1.0, 2.2, 0.05, ""),
    },
    ControlSpec {
        property: "background-color",
        label: "Background",
        kind: ControlKind::Color,
    },
    ControlSpec {
        property: "color",
        label: "Text colour",
        kind: ControlKind::Color,
    },
    ControlSpec {
        property: "border-radius",
        label: "Corner radius",
        kind: range(0.0, 3.0, 0.05, "rem"),
    },
    ControlSpec {
        property: "border-width",
        label: "Border width",
        kind: range(0.0, 12.0, 1.0, "px"),
    },
    ControlSpec {
        property: "border-color",
        label: "Border colour",
        kind: ControlKind::Color,
    },
    ControlSpec {
        property: "box-shadow",
        label: "Shadow",
        kind: ControlKind::Toggle {
            on: "0 24px 48px rgba(15, 23, 42, 0.16)",
            off: "none",
        },
    },
];

impl ControlKind {
    /// Reads a stored range value back into a number, e.g. `"1.5rem"` to `1.5`.
    /// Falls back to the minimum when the value does not parse.
    pub fn range_value(&self, stored: &str) -> f32 {
        let ControlKind::Range { min, unit, .. } = *self else {
            return 0.0;
        };
        let numeric = stored.strip_suffix(unit).unwrap_or(stored);
        numeric.trim().parse().unwrap_or(min)
    }

    /// Stored string for a range position
    pub fn range_string(&self, value: f32) -> String {
        let unit = match self {
            ControlKind::Range { unit, .. } => *unit,
            _ => "",
        };
        format!("{}{unit}", round_to_hundredths(value))
    }

    pub fn toggle_string(&self, checked: bool) -> String {
        match self {
            ControlKind::Toggle { on, off } => {
                let value = if checked { on } else { off };
                value.to_string()
            }
            _ => String::new(),
        }
    }

    pub fn is_toggled(&self, stored: &str) -> bool {
        matches!(self, ControlKind::Toggle { on, .. } if *on == stored)
    }
}

/// Colour shown in a picker; empty or unparseable values show black
pub fn color_value(stored: &str) -> Color32 {
    parse_color(stored).unwrap_or(Color32::BLACK)
}

pub fn color_string(color: Color32) -> String {
    format_hex(color)
}

/// Human readable form of a stored range value
pub fn format_range_output(stored: &str, unit: &str) -> String {
    let numeric = stored.strip_suffix(unit).unwrap_or(stored);
    match (unit, numeric.trim().parse::<f32>()) {
        ("rem", Ok(value)) => format!("{value:.2} rem"),
        ("px", Ok(value)) => format!("{value} px"),
        _ => stored.to_string(),
    }
}

// Slider arithmetic leaves float noise like 1.2500001
fn round_to_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
