// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the compare and settings
//! views.
//!
//! The `App` struct wires together the domains (comparison, localization,
//! preferences, notifications) and translates component events into side
//! effects like config persistence, image loading, size measurement, and
//! save dialogs. Policy decisions (window sizing, persistence format, which
//! failures notify the user) stay close to the main update loop so
//! user-facing behavior is easy to audit.

use crate::config::{self, BackgroundTheme, ControlMode, ThemeMode};
use crate::i18n::fluent::I18n;
use crate::media::download::{self, DownloadError, DownloadResult};
use crate::media::source::{self, ImageSource};
use crate::media::{self, size};
use crate::ui::compare::{self, ViewContext};
use crate::ui::notifications::{self, Manager as Notifications, Notification, Toast};
use crate::ui::{settings, theme};
use iced::widget::Stack;
use iced::{time, window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Duration;
use unic_langid::LanguageIdentifier;

/// Root Iced application state bridging the compare component,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    compare: compare::State,
    notifications: Notifications,
    background_theme: BackgroundTheme,
    theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Screens the user can navigate between.
pub enum Screen {
    Compare,
    Settings,
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Compare(compare::Message),
    SwitchScreen(Screen),
    LanguageSelected(LanguageIdentifier),
    ControlModeSelected(ControlMode),
    BackgroundThemeSelected(BackgroundTheme),
    Notification(notifications::Message),
    OpenDialogResult(Option<PathBuf>),
    SaveDialogResult {
        source: ImageSource,
        path: Option<PathBuf>,
    },
    SaveFinished {
        file_name: String,
        result: DownloadResult<u64>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional left-side source (path or URL) to preload on startup.
    pub left: Option<String>,
    /// Optional right-side source; defaults to another discovered variant
    /// of the left source.
    pub right: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

const NOTIFICATION_TICK: Duration = Duration::from_millis(500);

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::Compare,
            compare: compare::State::default(),
            notifications: Notifications::new(),
            background_theme: config.background_theme.unwrap_or_default(),
            theme_mode: config.theme_mode.unwrap_or_default(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off asynchronous image
    /// loading and size measurement for any sources given on the CLI.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let control_mode = config.control_mode.unwrap_or_default();
        let divider_percent = config
            .divider_percent
            .map(config::clamp_divider_percent)
            .unwrap_or(config::DEFAULT_DIVIDER_PERCENT);

        let mut app = App {
            i18n,
            screen: Screen::Compare,
            compare: compare::State::new(control_mode, divider_percent),
            notifications: Notifications::new(),
            background_theme: config.background_theme.unwrap_or_default(),
            theme_mode: config.theme_mode.unwrap_or_default(),
        };

        let left = flags.left.as_deref().map(ImageSource::parse);
        let right = flags
            .right
            .as_deref()
            .map(ImageSource::parse)
            .or_else(|| left.as_ref().map(default_right_variant));

        let task = app.assign_and_load(left, right);
        (app, task)
    }

    pub fn control_mode(&self) -> ControlMode {
        self.compare.control_mode()
    }

    pub fn background_theme(&self) -> BackgroundTheme {
        self.background_theme
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        theme::window_theme(self.theme_mode)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Compare(msg) => {
                let event = self.compare.update(msg);
                self.handle_compare_event(event)
            }
            Message::SwitchScreen(screen) => {
                self.screen = screen;
                Task::none()
            }
            Message::LanguageSelected(locale) => self.apply_language_change(locale),
            Message::ControlModeSelected(mode) => {
                self.compare.set_control_mode(mode);
                self.persist_preferences();
                Task::none()
            }
            Message::BackgroundThemeSelected(background) => {
                self.background_theme = background;
                self.persist_preferences();
                Task::none()
            }
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::OpenDialogResult(None) => Task::none(),
            Message::OpenDialogResult(Some(path)) => {
                let left = ImageSource::Path(path);
                let right = default_right_variant(&left);
                self.assign_and_load(Some(left), Some(right))
            }
            Message::SaveDialogResult { path: None, .. } => Task::none(),
            Message::SaveDialogResult {
                source,
                path: Some(path),
            } => {
                let file_name = source.suggested_file_name();
                Task::perform(
                    async move {
                        let result = download::save_copy(&source, &path).await;
                        (file_name, result)
                    },
                    |(file_name, result)| Message::SaveFinished { file_name, result },
                )
            }
            Message::SaveFinished { file_name, result } => {
                let notification = match result {
                    Ok(_) => Notification::success("notify-save-success")
                        .with_arg("filename", file_name),
                    Err(error) => Notification::error(error.i18n_key())
                        .with_arg("filename", file_name)
                        .with_arg("reason", error.to_string()),
                };
                self.notifications.push(notification);
                Task::none()
            }
        }
    }

    /// Turns compare-component events into tasks and notifications.
    fn handle_compare_event(&mut self, event: compare::Event) -> Task<Message> {
        match event {
            compare::Event::None => Task::none(),
            compare::Event::SourceChanged { side, source } => {
                // Reload the changed side and refresh both sizes together.
                Task::batch([load_side_task(side, source), self.measure_task()])
            }
            compare::Event::MeasureSizes { left, right } => measure_pair_task(left, right),
            compare::Event::Save { source: None, .. } => {
                // Nothing to save: tell the user, issue no fetch.
                self.notifications
                    .push(Notification::error(DownloadError::NoSource.i18n_key()));
                Task::none()
            }
            compare::Event::Save {
                source: Some(source),
                ..
            } => {
                let file_name = source.suggested_file_name();
                Task::perform(
                    async move {
                        let path = rfd::AsyncFileDialog::new()
                            .set_file_name(&file_name)
                            .save_file()
                            .await
                            .map(|handle| handle.path().to_path_buf());
                        (source, path)
                    },
                    |(source, path)| Message::SaveDialogResult { source, path },
                )
            }
            compare::Event::OpenDialog => {
                let (filter_name, filter_ext) = media::extensions::IMAGE_OPEN_FILTER;
                Task::perform(
                    async move {
                        rfd::AsyncFileDialog::new()
                            .add_filter(filter_name, filter_ext)
                            .pick_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::OpenDialogResult,
                )
            }
            compare::Event::LoadFailed(error) => {
                self.notifications.push(
                    Notification::error("notify-load-failed")
                        .with_arg("reason", error.to_string()),
                );
                Task::none()
            }
            compare::Event::PersistPreferences => {
                self.persist_preferences();
                Task::none()
            }
        }
    }

    /// Assigns sources to the compare component and spawns the image loads
    /// plus the initial paired size measurement.
    fn assign_and_load(
        &mut self,
        left: Option<ImageSource>,
        right: Option<ImageSource>,
    ) -> Task<Message> {
        self.compare.assign_sources(left.clone(), right.clone());

        if !self.compare.has_content() {
            return Task::none();
        }

        let mut tasks = Vec::new();
        if let Some(left) = left {
            tasks.push(load_side_task(compare::Side::Left, left));
        }
        if let Some(right) = right {
            tasks.push(load_side_task(compare::Side::Right, right));
        }
        tasks.push(self.measure_task());

        Task::batch(tasks)
    }

    /// Measures both current sources jointly; the single resulting message
    /// carries both lengths so the status line is written exactly once.
    fn measure_task(&self) -> Task<Message> {
        let (left, right) = self.compare.sources();
        measure_pair_task(left, right)
    }

    /// Applies the newly selected locale and persists it to config.
    fn apply_language_change(&mut self, locale: LanguageIdentifier) -> Task<Message> {
        self.i18n.set_locale(locale.clone());

        let mut cfg = config::load().unwrap_or_default();
        cfg.language = Some(locale.to_string());

        if let Err(error) = config::save(&cfg) {
            eprintln!("Failed to save config: {:?}", error);
        }

        Task::none()
    }

    /// Persists the current compare + view preferences to disk.
    ///
    /// Guarded during tests to keep isolation: unit tests exercise the logic
    /// by calling the update functions directly.
    fn persist_preferences(&self) {
        if cfg!(test) {
            return;
        }

        let mut cfg = config::load().unwrap_or_default();
        cfg.control_mode = Some(self.compare.control_mode());
        cfg.divider_percent = Some(self.compare.slider_percent());
        cfg.background_theme = Some(self.background_theme);
        cfg.theme_mode = Some(self.theme_mode);

        if let Err(error) = config::save(&cfg) {
            eprintln!("Failed to save config: {:?}", error);
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match self.screen {
            Screen::Compare => {
                let toolbar = self.toolbar();
                let content = compare::view::render(
                    &self.compare,
                    ViewContext {
                        i18n: &self.i18n,
                        background_theme: self.background_theme,
                    },
                )
                .map(Message::Compare);

                iced::widget::Column::new()
                    .push(toolbar)
                    .push(content)
                    .into()
            }
            Screen::Settings => settings::view_settings(self),
        };

        let toasts = Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification);

        Stack::new().push(screen).push(toasts).into()
    }

    fn toolbar(&self) -> Element<'_, Message> {
        use iced::widget::{button, Row, Text};

        Row::new()
            .padding(8)
            .spacing(8)
            .align_y(iced::alignment::Vertical::Center)
            .push(
                iced::widget::container(Text::new(self.i18n.tr("window-title")).size(16))
                    .width(iced::Length::Fill),
            )
            .push(
                button(Text::new(self.i18n.tr("settings-button")))
                    .on_press(Message::SwitchScreen(Screen::Settings))
                    .style(button::secondary),
            )
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Only tick while something is on screen to dismiss.
        if self.notifications.has_visible() {
            time::every(NOTIFICATION_TICK)
                .map(|_| Message::Notification(notifications::Message::Tick))
        } else {
            Subscription::none()
        }
    }
}

/// Picks a default right-hand source: the first discovered variant that is
/// not the left source itself, falling back to the same source.
fn default_right_variant(left: &ImageSource) -> ImageSource {
    source::discover_variants(left)
        .into_iter()
        .map(|variant| variant.source)
        .find(|candidate| candidate != left)
        .unwrap_or_else(|| left.clone())
}

fn load_side_task(side: compare::Side, source: ImageSource) -> Task<Message> {
    Task::perform(
        async move { media::load_source(&source).await },
        move |result| Message::Compare(compare::Message::ImageLoaded(side, result)),
    )
}

fn measure_pair_task(left: Option<ImageSource>, right: Option<ImageSource>) -> Task<Message> {
    Task::perform(size::measure_pair(left, right), |(left, right)| {
        Message::Compare(compare::Message::SizesMeasured { left, right })
    })
}
