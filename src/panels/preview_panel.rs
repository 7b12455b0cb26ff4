use egui::epaint::Shadow;
use egui::{Align, Color32, Layout, RichText, Stroke};

use crate::css::values::{parse_box_shadow, parse_color, parse_length, parse_track_count, REM};
use crate::property_map::PropertyMap;

/// Widest the template card is drawn
const CARD_MAX_WIDTH: f32 = 480.0;

/// Heading, paragraph and the action buttons
const CARD_CHILDREN: usize = 3;

// Base card stylesheet, used where a property is empty or cannot be drawn
const BASE_PADDING: f32 = 1.5 * REM;
const BASE_GAP: f32 = REM;
const BASE_RADIUS: f32 = 1.25 * REM;
const BASE_FILL: Color32 = Color32::WHITE;
const BASE_TEXT: Color32 = Color32::from_rgb(17, 24, 39);
const BASE_FONT_SIZE: f32 = REM;
const NORMAL_LINE_HEIGHT: f32 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    Column,
    Row,
    /// `display: grid` with a fixed number of column tracks
    Grid(usize),
    /// `display: grid` without a countable template, drawn as wrapping tiles
    Wrap,
    /// `display: block`, children stacked without gap
    Block,
}

/// `justify-content` along the main axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
}

/// `align-items` across the main axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignItems {
    Stretch,
    Start,
    Center,
    End,
}

/// Paint parameters for the template card, resolved from its properties
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewStyle {
    pub layout: CardLayout,
    pub justify: Justify,
    pub align: AlignItems,
    pub fill: Color32,
    pub text_color: Color32,
    pub padding: f32,
    pub gap: f32,
    pub rounding: f32,
    pub stroke: Stroke,
    pub shadow: Shadow,
    pub font_size: f32,
    /// Multiple of the font size
    pub line_height: f32,
    pub strong: bool,
}

impl PreviewStyle {
    pub fn from_properties(properties: &PropertyMap) -> Self {
        let layout = match properties.get_or_empty("display") {
            "grid" => match parse_track_count(properties.get_or_empty("grid-template-columns")) {
                Some(columns) => CardLayout::Grid(columns),
                None => CardLayout::Wrap,
            },
            "block" => CardLayout::Block,
            _ if properties.get_or_empty("flex-direction") == "row" => CardLayout::Row,
            _ => CardLayout::Column,
        };

        let text_color = color(properties, "color", BASE_TEXT);
        let border_width = length(properties, "border-width", 0.0);
        let stroke = if border_width > 0.0 {
            Stroke::new(border_width, color(properties, "border-color", text_color))
        } else {
            Stroke::NONE
        };

        let shadow = parse_box_shadow(properties.get_or_empty("box-shadow"))
            .map(|shadow| Shadow {
                offset: shadow.offset,
                blur: shadow.blur,
                spread: shadow.spread,
                color: shadow.color,
            })
            .unwrap_or(Shadow::NONE);

        let font_weight = properties
            .get_or_empty("font-weight")
            .parse::<u16>()
            .unwrap_or(400);
        let font_size = length(properties, "font-size", BASE_FONT_SIZE);

        Self {
            layout,
            justify: justify(properties.get_or_empty("justify-content")),
            align: align_items(properties.get_or_empty("align-items")),
            fill: color(properties, "background-color", BASE_FILL),
            text_color,
            padding: length(properties, "padding", BASE_PADDING),
            gap: length(properties, "gap", BASE_GAP),
            rounding: length(properties, "border-radius", BASE_RADIUS),
            stroke,
            shadow,
            font_size,
            line_height: line_height(properties.get_or_empty("line-height"), font_size),
            strong: font_weight >= 600,
        }
    }

    /// Layout of the card's children for the flex and block layouts
    pub fn flex_layout(&self) -> Layout {
        let layout = match self.layout {
            CardLayout::Row => Layout::left_to_right(Align::Min),
            _ => Layout::top_down(Align::Min),
        };
        if self.layout == CardLayout::Block {
            return layout.with_cross_justify(true);
        }

        let layout = match self.justify {
            Justify::Start => layout.with_main_align(Align::Min),
            Justify::Center => layout.with_main_align(Align::Center),
            Justify::End => layout.with_main_align(Align::Max),
            Justify::SpaceBetween | Justify::SpaceAround => {
                layout.with_main_align(Align::Center).with_main_justify(true)
            }
        };
        match self.align {
            AlignItems::Stretch => layout.with_cross_align(Align::Min).with_cross_justify(true),
            AlignItems::Start => layout.with_cross_align(Align::Min),
            AlignItems::Center => layout.with_cross_align(Align::Center),
            AlignItems::End => layout.with_cross_align(Align::Max),
        }
    }
}

fn justify(value: &str) -> Justify {
    match value {
        "" | "normal" | "flex-start" | "start" | "left" => Justify::Start,
        "center" => Justify::Center,
        "flex-end" | "end" | "right" => Justify::End,
        "space-between" => Justify::SpaceBetween,
        "space-around" | "space-evenly" => Justify::SpaceAround,
        other => {
            log::debug!("Preview cannot draw justify-content: {:?}", other);
            Justify::Start
        }
    }
}

fn align_items(value: &str) -> AlignItems {
    match value {
        "" | "normal" | "stretch" => AlignItems::Stretch,
        "flex-start" | "start" | "baseline" => AlignItems::Start,
        "center" => AlignItems::Center,
        "flex-end" | "end" => AlignItems::End,
        other => {
            log::debug!("Preview cannot draw align-items: {:?}", other);
            AlignItems::Stretch
        }
    }
}

/// Unitless values multiply the font size; `px`, `rem` and `%` are converted
fn line_height(value: &str, font_size: f32) -> f32 {
    let value = value.trim();
    if value.is_empty() || value == "normal" {
        return NORMAL_LINE_HEIGHT;
    }
    if let Ok(factor) = value.parse::<f32>() {
        return factor;
    }
    if let Some(percent) = value.strip_suffix('%').and_then(|p| p.trim().parse::<f32>().ok()) {
        return percent / 100.0;
    }
    match parse_length(value) {
        Some(points) if font_size > 0.0 => points / font_size,
        _ => {
            log::debug!("Preview cannot draw line-height: {:?}", value);
            NORMAL_LINE_HEIGHT
        }
    }
}

fn length(properties: &PropertyMap, name: &str, fallback: f32) -> f32 {
    let value = properties.get_or_empty(name);
    parse_length(value).unwrap_or_else(|| {
        if !value.is_empty() {
            log::debug!("Preview cannot draw {}: {:?}", name, value);
        }
        fallback
    })
}

fn color(properties: &PropertyMap, name: &str, fallback: Color32) -> Color32 {
    let value = properties.get_or_empty(name);
    parse_color(value).unwrap_or_else(|| {
        if !value.is_empty() {
            log::debug!("Preview cannot draw {}: {:?}", name, value);
        }
        fallback
    })
}

pub fn show(ui: &mut egui::Ui, style: &PreviewStyle) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);

        egui::Frame::none()
            .fill(style.fill)
            .stroke(style.stroke)
            .rounding(style.rounding)
            .inner_margin(style.padding)
            .shadow(style.shadow)
            .show(ui, |ui| {
                ui.set_max_width(CARD_MAX_WIDTH);
                let spacing = if style.layout == CardLayout::Block { 0.0 } else { style.gap };
                ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);

                match style.layout {
                    CardLayout::Grid(columns) => {
                        egui::Grid::new("preview_card_grid")
                            .num_columns(columns)
                            .spacing(egui::vec2(spacing, spacing))
                            .show(ui, |ui| {
                                for index in 0..CARD_CHILDREN {
                                    card_child(ui, style, index);
                                    if (index + 1) % columns == 0 {
                                        ui.end_row();
                                    }
                                }
                            });
                    }
                    CardLayout::Wrap => {
                        ui.horizontal_wrapped(|ui| card_contents(ui, style));
                    }
                    CardLayout::Column | CardLayout::Row | CardLayout::Block => {
                        ui.with_layout(style.flex_layout(), |ui| card_contents(ui, style));
                    }
                }
            });
    });
}

fn card_contents(ui: &mut egui::Ui, style: &PreviewStyle) {
    for index in 0..CARD_CHILDREN {
        card_child(ui, style, index);
    }
}

fn card_child(ui: &mut egui::Ui, style: &PreviewStyle, index: usize) {
    let text = |content: &str, size: f32| {
        let text = RichText::new(content)
            .size(size)
            .line_height(Some(size * style.line_height))
            .color(style.text_color);
        if style.strong { text.strong() } else { text }
    };

    match index {
        0 => {
            ui.label(text("Focus on productivity", style.font_size * 1.6).strong());
        }
        1 => {
            ui.label(text(
                "Design modular components and test CSS combinations in real time.",
                style.font_size,
            ));
        }
        _ => {
            ui.horizontal(|ui| {
                let primary = egui::Button::new(
                    RichText::new("Get started")
                        .size(style.font_size)
                        .color(Color32::WHITE),
                )
                .fill(Color32::from_rgb(79, 70, 229))
                .rounding(999.0);
                let secondary = egui::Button::new(
                    RichText::new("Documentation")
                        .size(style.font_size)
                        .color(Color32::from_rgb(55, 48, 163)),
                )
                .fill(Color32::from_rgba_unmultiplied(99, 102, 241, 26))
                .rounding(999.0);
                ui.add(primary);
                ui.add(secondary);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::PresetCatalog;

    fn starter() -> PropertyMap {
        let catalog = PresetCatalog::builtin().unwrap();
        catalog.lookup("starter").unwrap().properties.clone()
    }

    fn preset_style(id: &str) -> PreviewStyle {
        let catalog = PresetCatalog::builtin().unwrap();
        PreviewStyle::from_properties(&catalog.lookup(id).unwrap().properties)
    }

    fn starter_with(name: &str, value: &str) -> PreviewStyle {
        let mut properties = starter();
        properties.insert(name, value);
        PreviewStyle::from_properties(&properties)
    }

    #[test]
    fn test_starter_card() {
        let style = preset_style("starter");
        assert_eq!(style.layout, CardLayout::Column);
        assert_eq!(style.justify, Justify::Start);
        assert_eq!(style.align, AlignItems::Stretch);
        assert_eq!(style.fill, Color32::WHITE);
        assert_eq!(style.padding, 24.0);
        assert_eq!(style.gap, 16.0);
        assert_eq!(style.line_height, 1.5);
        assert_eq!(style.stroke, Stroke::NONE);
        assert_eq!(style.shadow.offset, egui::vec2(0.0, 24.0));
        assert!(!style.strong);
    }

    #[test]
    fn test_hero_and_grid_layouts() {
        let hero = preset_style("hero");
        assert_eq!(hero.layout, CardLayout::Row);
        assert_eq!(hero.justify, Justify::SpaceBetween);
        assert_eq!(hero.align, AlignItems::Center);
        assert_eq!(hero.shadow, Shadow::NONE);
        assert!(hero.strong);

        let grid = preset_style("feature-grid");
        assert_eq!(grid.layout, CardLayout::Wrap);
        assert_eq!(grid.stroke.width, 1.0);
    }

    #[test]
    fn test_justify_content_changes_main_axis() {
        let before = PreviewStyle::from_properties(&starter());
        let style = starter_with("justify-content", "space-between");
        assert_ne!(style, before);
        assert!(style.flex_layout().main_justify);

        let style = starter_with("justify-content", "flex-end");
        assert_eq!(style.flex_layout().main_align, Align::Max);
        assert!(!style.flex_layout().main_justify);
    }

    #[test]
    fn test_align_items_changes_cross_axis() {
        let before = PreviewStyle::from_properties(&starter());
        assert!(before.flex_layout().cross_justify);

        let style = starter_with("align-items", "center");
        assert_ne!(style, before);
        assert_eq!(style.flex_layout().cross_align, Align::Center);
        assert!(!style.flex_layout().cross_justify);
    }

    #[test]
    fn test_row_layout_runs_left_to_right() {
        let style = starter_with("flex-direction", "row");
        assert!(style.flex_layout().is_horizontal());
        assert!(!PreviewStyle::from_properties(&starter()).flex_layout().is_horizontal());
    }

    #[test]
    fn test_line_height() {
        let before = PreviewStyle::from_properties(&starter());
        let style = starter_with("line-height", "2.2");
        assert_ne!(style, before);
        assert_eq!(style.line_height, 2.2);

        assert_eq!(line_height("150%", 16.0), 1.5);
        assert_eq!(line_height("24px", 16.0), 1.5);
        assert_eq!(line_height("", 16.0), NORMAL_LINE_HEIGHT);
        assert_eq!(line_height("tall", 16.0), NORMAL_LINE_HEIGHT);
    }

    #[test]
    fn test_grid_template_columns() {
        let mut properties = starter();
        properties.insert("display", "grid");
        assert_eq!(PreviewStyle::from_properties(&properties).layout, CardLayout::Wrap);

        properties.insert("grid-template-columns", "1fr 1fr");
        assert_eq!(PreviewStyle::from_properties(&properties).layout, CardLayout::Grid(2));

        properties.insert("grid-template-columns", "repeat(3, 1fr)");
        assert_eq!(PreviewStyle::from_properties(&properties).layout, CardLayout::Grid(3));

        properties.insert("grid-template-columns", "repeat(auto-fit, minmax(120px, 1fr))");
        assert_eq!(PreviewStyle::from_properties(&properties).layout, CardLayout::Wrap);
    }

    #[test]
    fn test_empty_values_use_base_card() {
        let style = PreviewStyle::from_properties(&PropertyMap::new());
        assert_eq!(style.layout, CardLayout::Column);
        assert_eq!(style.padding, 24.0);
        assert_eq!(style.gap, 16.0);
        assert_eq!(style.rounding, 20.0);
        assert_eq!(style.fill, Color32::WHITE);
        assert_eq!(style.text_color, Color32::from_rgb(17, 24, 39));
        assert_eq!(style.font_size, 16.0);

        let style = starter_with("padding", "");
        assert_eq!(style.padding, 24.0);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let properties = PropertyMap::from([("padding", "auto"), ("color", "tomato-ish")]);
        let style = PreviewStyle::from_properties(&properties);
        assert_eq!(style.padding, 24.0);
        assert_eq!(style.text_color, BASE_TEXT);
        assert_eq!(style.font_size, 16.0);
    }

    #[test]
    fn test_border_defaults_to_text_color() {
        let properties = PropertyMap::from([("border-width", "2px"), ("color", "#0f172a")]);
        let style = PreviewStyle::from_properties(&properties);
        assert_eq!(style.stroke, Stroke::new(2.0, Color32::from_rgb(15, 23, 42)));
    }
}
