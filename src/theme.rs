use eframe::egui::{self, Color32, Context, Rounding};

/// Visual preset for the demo panel. Presets are built in; nothing is
/// read from or written to disk.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub panel: Color32,
    pub surface: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub border: Color32,
    pub radius: f32,
    pub font_size_base: f32,
}

pub fn presets() -> Vec<Theme> {
    vec![
        Theme {
            name: "classic_light".to_string(),
            panel: Color32::from_rgb(0xff, 0xff, 0xff),
            surface: Color32::from_rgb(0xf5, 0xf6, 0xfa),
            text: Color32::from_rgb(0x1f, 0x29, 0x33),
            muted_text: Color32::from_rgb(0x63, 0x75, 0x88),
            accent: Color32::from_rgb(0x2b, 0x78, 0xe4),
            accent_soft: Color32::from_rgb(0xdf, 0xe9, 0xff),
            border: Color32::from_rgb(0xd0, 0xd5, 0xdc),
            radius: 6.0,
            font_size_base: 16.0,
        },
        Theme {
            name: "chalkboard_dark".to_string(),
            panel: Color32::from_rgb(0x15, 0x20, 0x2b),
            surface: Color32::from_rgb(0x1f, 0x2a, 0x33),
            text: Color32::from_rgb(0xe5, 0xf0, 0xff),
            muted_text: Color32::from_rgb(0x9b, 0xb2, 0xc7),
            accent: Color32::from_rgb(0x4c, 0xaf, 0x50),
            accent_soft: Color32::from_rgb(0x23, 0x40, 0x2a),
            border: Color32::from_rgb(0x2e, 0x3c, 0x48),
            radius: 6.0,
            font_size_base: 16.0,
        },
        Theme {
            name: "high_contrast".to_string(),
            panel: Color32::from_rgb(0x0d, 0x0d, 0x0d),
            surface: Color32::BLACK,
            text: Color32::WHITE,
            muted_text: Color32::from_rgb(0xc7, 0xc7, 0xc7),
            accent: Color32::from_rgb(0xff, 0xcc, 0x00),
            accent_soft: Color32::from_rgb(0x4d, 0x3b, 0x00),
            border: Color32::WHITE,
            radius: 0.0,
            font_size_base: 18.0,
        },
    ]
}

pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name == name)
}

pub fn default_theme() -> Theme {
    find("classic_light").unwrap_or_else(|| presets().remove(0))
}

pub fn apply(theme: &Theme, ctx: &Context) {
    let mut style = (*ctx.style()).clone();
    let mut visuals = if is_dark(theme) {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.panel_fill = theme.panel;
    visuals.widgets.noninteractive.bg_fill = theme.surface;
    visuals.widgets.noninteractive.fg_stroke.color = theme.text;
    visuals.widgets.inactive.bg_fill = theme.surface;
    visuals.widgets.inactive.fg_stroke.color = theme.text;
    visuals.widgets.inactive.bg_stroke.color = theme.border;
    visuals.widgets.hovered.bg_fill = theme.accent_soft;
    visuals.widgets.hovered.bg_stroke.color = theme.accent;
    visuals.widgets.hovered.fg_stroke.color = theme.text;
    visuals.widgets.active.bg_fill = theme.accent_soft;
    visuals.widgets.active.bg_stroke.color = theme.accent;
    visuals.widgets.active.fg_stroke.color = theme.text;

    let rounding = Rounding::same(theme.radius);
    visuals.window_rounding = rounding;
    visuals.widgets.noninteractive.rounding = rounding;
    visuals.widgets.inactive.rounding = rounding;
    visuals.widgets.hovered.rounding = rounding;
    visuals.widgets.active.rounding = rounding;

    style.text_styles = [
        (
            egui::TextStyle::Small,
            egui::FontId::proportional(theme.font_size_base - 2.0),
        ),
        (
            egui::TextStyle::Body,
            egui::FontId::proportional(theme.font_size_base),
        ),
        (
            egui::TextStyle::Button,
            egui::FontId::proportional(theme.font_size_base),
        ),
        (
            egui::TextStyle::Heading,
            egui::FontId::proportional(theme.font_size_base + 6.0),
        ),
        (
            egui::TextStyle::Monospace,
            egui::FontId::monospace(theme.font_size_base - 1.0),
        ),
    ]
    .into();
    style.visuals = visuals;
    ctx.set_style(style);
}

fn is_dark(theme: &Theme) -> bool {
    let bg = theme.panel;
    // Simple luminance check; lower means darker.
    let luminance = 0.2126 * (bg.r() as f32) + 0.7152 * (bg.g() as f32) + 0.0722 * (bg.b() as f32);
    luminance < 128.0
}
