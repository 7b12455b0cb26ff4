use serde::{Deserialize, Serialize};

use super::rule::{inline_declarations, rule_markup};
use crate::property_map::PropertyMap;

/// Scope of the generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// An element with a `style` attribute
    Inline,
    /// A rule nested under the preview sandbox
    Scoped,
    /// A plain rule for the selector
    #[default]
    Global,
}

impl ExportMode {
    pub const ALL: [ExportMode; 3] = [ExportMode::Inline, ExportMode::Scoped, ExportMode::Global];

    pub fn label(&self) -> &'static str {
        match self {
            ExportMode::Inline => "Inline HTML",
            ExportMode::Scoped => "Scoped CSS",
            ExportMode::Global => "Global CSS",
        }
    }
}

const SANDBOX_SELECTOR: &str = ".preview-sandbox";

/// Generates exportable code for the modified properties
pub fn build_code(mode: ExportMode, selector: &str, modified: &PropertyMap) -> String {
    match mode {
        ExportMode::Inline => {
            if modified.is_empty() {
                return format!("<!-- No changes from the preset for {selector} -->");
            }
            format!(
                "<div class=\"{}\" style=\"{}\">…</div>",
                class_name(selector),
                inline_declarations(modified)
            )
        }
        ExportMode::Scoped => {
            if modified.is_empty() {
                return "/* No differences from the current preset */".to_string();
            }
            rule_markup(&format!("{SANDBOX_SELECTOR} {selector}"), modified)
        }
        ExportMode::Global => {
            if modified.is_empty() {
                return "/* Using the preset unchanged */".to_string();
            }
            rule_markup(selector, modified)
        }
    }
}

/// Derives a class attribute value from the first selector in a list
fn class_name(selector: &str) -> String {
    let primary = selector.split(',').next().unwrap_or_default().trim();
    match primary.strip_prefix('.') {
        Some(class) => class.to_string(),
        None => primary
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '-' })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modified() -> PropertyMap {
        PropertyMap::from([("gap", "2rem"), ("color", "#000000")])
    }

    #[test]
    fn test_global_rule() {
        assert_eq!(
            build_code(ExportMode::Global, ".preview-card", &modified()),
            ".preview-card {\n  gap: 2rem;\n  color: #000000;\n}"
        );
    }

    #[test]
    fn test_scoped_rule() {
        let code = build_code(ExportMode::Scoped, ".preview-card", &modified());
        assert!(code.starts_with(".preview-sandbox .preview-card {\n"));
    }

    #[test]
    fn test_inline_element() {
        assert_eq!(
            build_code(ExportMode::Inline, ".preview-card, .other", &modified()),
            "<div class=\"preview-card\" style=\"gap: 2rem; color: #000000;\">…</div>"
        );
        let code = build_code(ExportMode::Inline, "main > article", &modified());
        assert!(code.starts_with("<div class=\"main---article\""));
    }

    #[test]
    fn test_placeholders_when_unmodified() {
        let empty = PropertyMap::new();
        assert_eq!(
            build_code(ExportMode::Inline, ".card", &empty),
            "<!-- No changes from the preset for .card -->"
        );
        assert!(build_code(ExportMode::Scoped, ".card", &empty).starts_with("/*"));
        assert!(build_code(ExportMode::Global, ".card", &empty).starts_with("/*"));
    }
}
