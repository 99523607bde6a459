// SPDX-License-Identifier: MPL-2.0
//! Color tokens and window-theme resolution.

use crate::config::{BackgroundTheme, ThemeMode};
use iced::{Color, Theme};

/// Small fixed palette shared by the divider, toasts, and surfaces.
pub mod palette {
    use iced::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const GRAY_200: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);

    pub const SUCCESS_500: Color = Color::from_rgb(0.13, 0.65, 0.35);
    pub const INFO_500: Color = Color::from_rgb(0.18, 0.45, 0.85);
    pub const WARNING_500: Color = Color::from_rgb(0.92, 0.6, 0.1);
    pub const ERROR_500: Color = Color::from_rgb(0.85, 0.22, 0.2);
}

/// Divider line drawn over the image stack.
pub fn divider_line_color() -> Color {
    palette::WHITE
}

/// Filled handle knob at the middle of the divider.
pub fn divider_handle_color() -> Color {
    Color::from_rgb(0.25, 0.55, 0.95)
}

/// Outline around the handle knob, for contrast on light imagery.
pub fn divider_handle_border_color() -> Color {
    palette::GRAY_900
}

/// Surface color behind the images for the plain background themes.
pub fn pane_surface_color(theme: BackgroundTheme) -> Color {
    match theme {
        BackgroundTheme::Light => palette::GRAY_100,
        BackgroundTheme::Dark => palette::GRAY_900,
        BackgroundTheme::Checkerboard => palette::GRAY_100,
    }
}

pub fn is_checkerboard(theme: BackgroundTheme) -> bool {
    matches!(theme, BackgroundTheme::Checkerboard)
}

/// Resolves the window theme, following the OS preference in `System` mode.
pub fn window_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::Light,
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::System => {
            if let Ok(dark_light::Mode::Light) = dark_light::detect() {
                Theme::Light
            } else {
                Theme::Dark
            }
        }
    }
}
