use crate::property_map::PropertyMap;

/// Formats `properties` as a rule block, one indented declaration per line
pub fn rule_markup(selector: &str, properties: &PropertyMap) -> String {
    let lines: Vec<String> = properties
        .iter()
        .map(|(name, value)| format!("  {name}: {value};"))
        .collect();
    format!("{selector} {{\n{}\n}}", lines.join("\n"))
}

/// Formats `properties` for a `style` attribute
pub fn inline_declarations(properties: &PropertyMap) -> String {
    properties
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_markup() {
        let properties = PropertyMap::from([("gap", "2rem"), ("color", "#111827")]);
        assert_eq!(
            rule_markup(".preview-card", &properties),
            ".preview-card {\n  gap: 2rem;\n  color: #111827;\n}"
        );
    }

    #[test]
    fn test_inline_declarations() {
        let properties = PropertyMap::from([("gap", "2rem"), ("padding", "0")]);
        assert_eq!(inline_declarations(&properties), "gap: 2rem; padding: 0;");
    }
}
