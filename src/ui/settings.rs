//! This module defines the UI components for the application's settings view.
//! It provides language selection plus the compare-specific preferences:
//! how the divider is controlled and what is drawn behind the images.

use crate::app::{App, Message, Screen};
use crate::config::{BackgroundTheme, ControlMode};
use iced::{
    alignment::Horizontal,
    widget::{button, Button, Column, Row, Text},
    Element, Length,
};

pub fn view_settings(app: &App) -> Element<'_, Message> {
    let title = Text::new(app.i18n.tr("settings-title")).size(30);

    let mut language_selection_column = Column::new()
        .push(Text::new(app.i18n.tr("select-language-label")))
        .spacing(10);

    for locale in &app.i18n.available_locales {
        let display_name = locale.to_string(); // Fallback to string representation

        // Check for specific translation for the language name, e.g., "language-name-en-US"
        let translated_name_key = format!("language-name-{}", locale);
        let translated_name = app.i18n.tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone() // Use raw locale if translation missing
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current_locale = app.i18n.current_locale() == locale;
        let mut language_button =
            Button::new(Text::new(button_text)).on_press(Message::LanguageSelected(locale.clone()));

        if is_current_locale {
            language_button = language_button.style(button::primary); // Highlight current language
        } else {
            language_button = language_button.style(button::secondary);
        }

        language_selection_column = language_selection_column.push(language_button);
    }

    let mode_row = choice_row(
        ControlMode::ALL
            .iter()
            .map(|mode| {
                (
                    app.i18n.tr(mode.i18n_key()),
                    Message::ControlModeSelected(*mode),
                    *mode == app.control_mode(),
                )
            })
            .collect(),
    );

    let background_row = choice_row(
        BackgroundTheme::ALL
            .iter()
            .map(|theme| {
                (
                    app.i18n.tr(theme.i18n_key()),
                    Message::BackgroundThemeSelected(*theme),
                    *theme == app.background_theme(),
                )
            })
            .collect(),
    );

    let back_button = Button::new(Text::new(app.i18n.tr("settings-back-button")))
        .on_press(Message::SwitchScreen(Screen::Compare))
        .style(button::secondary);

    Column::new()
        .push(title)
        .push(language_selection_column)
        .push(Text::new(app.i18n.tr("control-mode-label")))
        .push(mode_row)
        .push(Text::new(app.i18n.tr("background-label")))
        .push(background_row)
        .push(back_button)
        .spacing(20)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

/// A row of mutually exclusive choice buttons, the active one highlighted.
fn choice_row(choices: Vec<(String, Message, bool)>) -> Element<'static, Message> {
    let mut row = Row::new().spacing(10);
    for (label, message, active) in choices {
        let mut choice_button = Button::new(Text::new(label)).on_press(message);
        choice_button = if active {
            choice_button.style(button::primary)
        } else {
            choice_button.style(button::secondary)
        };
        row = row.push(choice_button);
    }
    row.into()
}
