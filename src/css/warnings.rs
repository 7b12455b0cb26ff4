use crate::property_map::PropertyMap;

/// A layout hint about modified properties that have no visible effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Warning {
    pub title: &'static str,
    pub description: &'static str,
}

const FLEX_ALIGNMENT: [&str; 3] = ["justify-content", "align-items", "flex-direction"];

pub fn collect_warnings(properties: &PropertyMap, modified: &PropertyMap) -> Vec<Warning> {
    let display = properties.get_or_empty("display");
    let is_set = |name: &str| !modified.get_or_empty(name).is_empty();
    let mut warnings = Vec::new();

    if FLEX_ALIGNMENT.iter().any(|&name| is_set(name)) && display != "flex" {
        warnings.push(Warning {
            title: "Flex properties active",
            description: "Set \"display: flex\" for flex alignment to take effect.",
        });
    }

    if is_set("grid-template-columns") && display != "grid" {
        warnings.push(Warning {
            title: "Grid template without grid",
            description: "Set \"display: grid\" to activate the column layout.",
        });
    }

    if is_set("gap") && display == "block" {
        warnings.push(Warning {
            title: "Gap without layout context",
            description: "Gap only has an effect inside flex or grid layouts.",
        });
    }

    if is_set("border-width") && !is_set("border-color") {
        warnings.push(Warning {
            title: "Border without colour",
            description: "Define a border colour to make the outline visible.",
        });
    }

    warnings
}
