//! Theme system for the Ferry GUI

use egui::{Color32, Rounding, Stroke, Style, Visuals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Color scheme for the application
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub primary: Color32,
    pub background: Color32,
    pub panel_bg: Color32,
    pub text: Color32,
    pub text_weak: Color32,
    pub success: Color32,
    pub error: Color32,
}

/// Ferry application theme
#[derive(Debug, Clone)]
pub struct FerryTheme {
    pub mode: ThemeMode,
    pub colors: ColorScheme,
    pub rounding: f32,
    pub spacing: f32,
}

impl FerryTheme {
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            colors: ColorScheme {
                primary: Color32::from_rgb(13, 110, 253),
                background: Color32::from_gray(246),
                panel_bg: Color32::from_gray(237),
                text: Color32::from_gray(25),
                text_weak: Color32::from_gray(105),
                success: Color32::from_rgb(25, 135, 84),
                error: Color32::from_rgb(220, 53, 69),
            },
            rounding: 4.0,
            spacing: 8.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            colors: ColorScheme {
                primary: Color32::from_rgb(82, 148, 226),
                background: Color32::from_rgb(26, 28, 36),
                panel_bg: Color32::from_rgb(34, 37, 47),
                text: Color32::from_gray(230),
                text_weak: Color32::from_gray(155),
                success: Color32::from_rgb(72, 187, 120),
                error: Color32::from_rgb(235, 87, 87),
            },
            rounding: 6.0,
            spacing: 10.0,
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        matches!(self.mode, ThemeMode::Dark)
    }

    pub fn toggle(&mut self) {
        *self = match self.mode {
            ThemeMode::Light => Self::dark(),
            ThemeMode::Dark => Self::light(),
        };
    }

    /// Apply the theme to the egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        let mut visuals = if self.is_dark_mode() {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.window_fill = self.colors.background;
        visuals.panel_fill = self.colors.panel_bg;
        visuals.window_stroke = Stroke::new(1.0, self.colors.text_weak);
        visuals.window_rounding = Rounding::same(self.rounding);
        visuals.error_fg_color = self.colors.error;
        visuals.hyperlink_color = self.colors.primary;
        visuals.selection.bg_fill = self.colors.primary.linear_multiply(0.3);

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.colors.text);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.colors.primary);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.colors.primary);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(self.spacing, self.spacing);
        style.spacing.button_padding = egui::vec2(self.spacing, self.spacing / 2.0);

        ctx.set_style(style);
    }
}

impl Default for FerryTheme {
    fn default() -> Self {
        Self::dark()
    }
}
