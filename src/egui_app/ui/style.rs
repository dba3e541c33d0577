use egui::{Color32, Stroke, Visuals, epaint::CornerRadius, style::WidgetVisuals};

/// Colours used by the dashboard panels and chart.
#[derive(Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub surface: Color32,
    pub control: Color32,
    pub outline: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub success: Color32,
}

pub fn palette() -> Palette {
    Palette {
        background: Color32::from_rgb(14, 17, 23),
        surface: Color32::from_rgb(22, 27, 36),
        control: Color32::from_rgb(34, 41, 54),
        outline: Color32::from_rgb(52, 61, 78),
        text: Color32::from_rgb(214, 220, 230),
        text_muted: Color32::from_rgb(138, 148, 166),
        accent: Color32::from_rgb(96, 165, 250),
        error: Color32::from_rgb(239, 118, 118),
        success: Color32::from_rgb(110, 200, 140),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.surface;
    visuals.extreme_bg_color = palette.surface;
    visuals.faint_bg_color = palette.surface;
    visuals.override_text_color = Some(palette.text);
    visuals.error_fg_color = palette.error;
    visuals.selection.bg_fill = palette.control;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        style_control(widget, palette);
    }
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.accent);
}

fn style_control(widget: &mut WidgetVisuals, palette: Palette) {
    widget.corner_radius = CornerRadius::same(3);
    widget.bg_fill = palette.control;
    widget.weak_bg_fill = palette.control;
    widget.bg_stroke = Stroke::new(1.0, palette.outline);
}

pub fn chart_bar_fill() -> Color32 {
    palette().accent
}

pub fn chart_axis() -> Stroke {
    Stroke::new(1.0, palette().outline)
}
