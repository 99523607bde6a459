// SPDX-License-Identifier: MPL-2.0
//! Compare component state and update logic.

use crate::config::{ControlMode, DEFAULT_DIVIDER_PERCENT};
use crate::error::Error;
use crate::media::source::{self, FormatVariant, ImageSource};
use crate::media::{size, ImageData};

/// Which rendition a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// i18n key for the side's heading.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Side::Left => "side-left",
            Side::Right => "side-right",
        }
    }
}

/// One side of the comparison.
#[derive(Debug, Clone, Default)]
pub struct SideState {
    pub source: Option<ImageSource>,
    pub variants: Vec<FormatVariant>,
    pub selected: Option<FormatVariant>,
    pub image: Option<ImageData>,
    /// Upper-cased extension label; empty until a source is assigned.
    pub label: String,
}

impl SideState {
    fn assign(&mut self, source: ImageSource) {
        self.label = source.extension_label();
        self.variants = source::discover_variants(&source);
        self.selected = self
            .variants
            .iter()
            .find(|v| v.source == source)
            .cloned();
        self.source = Some(source);
        // The image is replaced asynchronously; keep the old one visible
        // until the new one decodes.
    }
}

/// What the shared size line currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SizeStatus {
    /// Nothing loaded yet.
    #[default]
    Idle,
    /// A paired measurement is in flight.
    Measuring,
    /// Both measurements resolved; the exact combined line.
    Measured(String),
}

/// Messages emitted by the comparison widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Divider drag started at `x` within a pane `width` pixels wide.
    DragStarted { x: f32, width: f32 },
    /// Divider dragged to `x` (may lie outside the pane; it is clamped).
    DragMoved { x: f32, width: f32 },
    /// Drag session ended (release or cursor left the window).
    DragEnded,
    /// Slider moved to a value in `[0, 100]`.
    SliderChanged(f32),
    /// Slider released; a good moment to persist the position.
    SliderReleased,
    /// A format variant was picked for one side.
    FormatSelected(Side, FormatVariant),
    /// Async image decode finished for one side.
    ImageLoaded(Side, Result<ImageData, Error>),
    /// The paired size measurement resolved.
    SizesMeasured {
        left: Option<u64>,
        right: Option<u64>,
    },
    /// Explicit size refresh request.
    RefreshSizesRequested,
    /// Save-a-copy request for one side.
    SaveRequested(Side),
    /// Open-file request (empty state or toolbar).
    OpenRequested,
}

/// Side effects the application should perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Measure both sides and report back with `SizesMeasured`.
    MeasureSizes {
        left: Option<ImageSource>,
        right: Option<ImageSource>,
    },
    /// A source changed: load its image and re-measure both sides.
    SourceChanged { side: Side, source: ImageSource },
    /// Save a copy of the given source; `None` means there is nothing to
    /// save and the user must be told (no fetch may be issued).
    Save {
        side: Side,
        source: Option<ImageSource>,
    },
    /// Open the system file dialog.
    OpenDialog,
    /// An image failed to decode.
    LoadFailed(Error),
    /// The divider position or mode changed in a way worth persisting.
    PersistPreferences,
}

/// Compare component state.
#[derive(Debug)]
pub struct State {
    pub left: SideState,
    pub right: SideState,
    /// Reveal position as a fraction of the pane width in `[0, 1]`.
    reveal: f32,
    is_dragging: bool,
    control_mode: ControlMode,
    pub size_status: SizeStatus,
}

impl Default for State {
    fn default() -> Self {
        Self::new(ControlMode::default(), DEFAULT_DIVIDER_PERCENT)
    }
}

impl State {
    /// Creates the component with a control mode and an initial divider
    /// position in percent (applied once, like the original slider's
    /// initialization).
    pub fn new(control_mode: ControlMode, divider_percent: f32) -> Self {
        Self {
            left: SideState::default(),
            right: SideState::default(),
            reveal: divider_percent.clamp(0.0, 100.0) / 100.0,
            is_dragging: false,
            control_mode,
            size_status: SizeStatus::default(),
        }
    }

    pub fn control_mode(&self) -> ControlMode {
        self.control_mode
    }

    pub fn set_control_mode(&mut self, mode: ControlMode) {
        self.control_mode = mode;
        // A switch mid-drag would leave the session dangling.
        self.is_dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Divider position in percent, as shown by the slider.
    pub fn slider_percent(&self) -> f32 {
        self.reveal * 100.0
    }

    /// Overlay clip width in pixels for a pane of the given width.
    pub fn overlay_width(&self, pane_width: f32) -> f32 {
        clamp_to_width(self.reveal * pane_width, pane_width)
    }

    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Whether anything is loaded or loading; drives the empty state.
    pub fn has_content(&self) -> bool {
        self.left.source.is_some() || self.right.source.is_some()
    }

    /// Assigns both initial sources (CLI or open dialog), discovering
    /// variants and marking the size line as measuring. The caller is
    /// expected to spawn the load and measurement tasks.
    pub fn assign_sources(&mut self, left: Option<ImageSource>, right: Option<ImageSource>) {
        if let Some(left) = left {
            self.left.assign(left);
        }
        if let Some(right) = right {
            self.right.assign(right);
        }
        if self.has_content() {
            self.size_status = SizeStatus::Measuring;
        }
    }

    pub fn sources(&self) -> (Option<ImageSource>, Option<ImageSource>) {
        (self.left.source.clone(), self.right.source.clone())
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::DragStarted { x, width } => {
                self.is_dragging = true;
                self.apply_position(x, width);
                Event::None
            }
            Message::DragMoved { x, width } => {
                // Moves outside an active session are cheap no-ops.
                if self.is_dragging {
                    self.apply_position(x, width);
                }
                Event::None
            }
            Message::DragEnded => {
                if !self.is_dragging {
                    return Event::None;
                }
                self.is_dragging = false;
                Event::PersistPreferences
            }
            Message::SliderChanged(value) => {
                self.reveal = value.clamp(0.0, 100.0) / 100.0;
                Event::None
            }
            Message::SliderReleased => Event::PersistPreferences,
            Message::FormatSelected(side, variant) => {
                let changed = self.side(side).source.as_ref() != Some(&variant.source);
                if !changed {
                    return Event::None;
                }

                let state = self.side_mut(side);
                state.label = variant.source.extension_label();
                state.selected = Some(variant.clone());
                state.source = Some(variant.source.clone());

                // Any source change refreshes both sides' sizes.
                self.size_status = SizeStatus::Measuring;
                Event::SourceChanged {
                    side,
                    source: variant.source,
                }
            }
            Message::ImageLoaded(side, Ok(image)) => {
                self.side_mut(side).image = Some(image);
                Event::None
            }
            Message::ImageLoaded(_, Err(error)) => Event::LoadFailed(error),
            Message::SizesMeasured { left, right } => {
                self.size_status = SizeStatus::Measured(size::format_size_pair(left, right));
                Event::None
            }
            Message::RefreshSizesRequested => {
                if !self.has_content() {
                    return Event::None;
                }
                self.size_status = SizeStatus::Measuring;
                let (left, right) = self.sources();
                Event::MeasureSizes { left, right }
            }
            Message::SaveRequested(side) => Event::Save {
                side,
                source: self.side(side).source.clone(),
            },
            Message::OpenRequested => Event::OpenDialog,
        }
    }

    fn apply_position(&mut self, x: f32, width: f32) {
        self.reveal = if width > 0.0 {
            clamp_to_width(x, width) / width
        } else {
            0.0
        };
    }
}

/// Clamps a horizontal position to `[0, width]`; a degenerate width clamps
/// everything to zero.
pub fn clamp_to_width(x: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    x.max(0.0).min(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn variant(name: &str) -> FormatVariant {
        FormatVariant::new(ImageSource::Path(PathBuf::from(name)))
    }

    #[test]
    fn positions_left_of_the_pane_clamp_to_zero() {
        assert_eq!(clamp_to_width(-50.0, 400.0), 0.0);
        assert_eq!(clamp_to_width(-0.1, 400.0), 0.0);
    }

    #[test]
    fn positions_right_of_the_pane_clamp_to_width() {
        assert_eq!(clamp_to_width(401.0, 400.0), 400.0);
        assert_eq!(clamp_to_width(f32::MAX, 400.0), 400.0);
    }

    #[test]
    fn zero_width_pane_clamps_everything_to_zero() {
        assert_eq!(clamp_to_width(10.0, 0.0), 0.0);
        assert_eq!(clamp_to_width(-10.0, 0.0), 0.0);
    }

    #[test]
    fn drag_start_applies_position_immediately() {
        let mut state = State::default();
        state.update(Message::DragStarted { x: 100.0, width: 400.0 });

        assert!(state.is_dragging());
        assert_eq!(state.overlay_width(400.0), 100.0);
    }

    #[test]
    fn moves_outside_a_session_are_ignored() {
        let mut state = State::new(ControlMode::Handle, 50.0);
        state.update(Message::DragMoved { x: 390.0, width: 400.0 });

        assert_eq!(state.overlay_width(400.0), 200.0);
    }

    #[test]
    fn drag_end_clears_the_session_and_persists() {
        let mut state = State::default();
        state.update(Message::DragStarted { x: 10.0, width: 100.0 });
        let event = state.update(Message::DragEnded);

        assert!(!state.is_dragging());
        assert_eq!(event, Event::PersistPreferences);

        // A stray release without a session stays quiet.
        assert_eq!(state.update(Message::DragEnded), Event::None);
    }

    #[test]
    fn slider_value_maps_to_exact_percent() {
        let mut state = State::default();
        for value in [0.0_f32, 25.0, 50.0, 99.0, 100.0] {
            state.update(Message::SliderChanged(value));
            assert_eq!(state.slider_percent(), value);
            assert_eq!(state.overlay_width(1000.0), value * 10.0);
        }
    }

    #[test]
    fn slider_values_outside_range_are_clamped() {
        let mut state = State::default();
        state.update(Message::SliderChanged(150.0));
        assert_eq!(state.slider_percent(), 100.0);
        state.update(Message::SliderChanged(-3.0));
        assert_eq!(state.slider_percent(), 0.0);
    }

    #[test]
    fn format_selection_updates_label_and_requests_refresh() {
        let mut state = State::default();
        let webp = variant("photos/photo.webp");

        let event = state.update(Message::FormatSelected(Side::Left, webp.clone()));

        assert_eq!(state.left.label, "WEBP");
        assert_eq!(state.left.source, Some(webp.source.clone()));
        assert_eq!(state.size_status, SizeStatus::Measuring);
        assert_eq!(
            event,
            Event::SourceChanged {
                side: Side::Left,
                source: webp.source,
            }
        );
    }

    #[test]
    fn reselecting_the_same_variant_is_a_no_op() {
        let mut state = State::default();
        let png = variant("photo.png");
        state.update(Message::FormatSelected(Side::Right, png.clone()));
        state.update(Message::SizesMeasured { left: None, right: Some(1) });

        let event = state.update(Message::FormatSelected(Side::Right, png));
        assert_eq!(event, Event::None);
        assert!(matches!(state.size_status, SizeStatus::Measured(_)));
    }

    #[test]
    fn measured_sizes_render_the_exact_combined_line() {
        let mut state = State::default();
        state.update(Message::SizesMeasured {
            left: Some(1024),
            right: None,
        });

        assert_eq!(
            state.size_status,
            SizeStatus::Measured("Left: 1.0 KB | Right: unknown".to_string())
        );
    }

    #[test]
    fn save_without_a_source_reports_none() {
        let mut state = State::default();
        let event = state.update(Message::SaveRequested(Side::Left));
        assert_eq!(
            event,
            Event::Save {
                side: Side::Left,
                source: None,
            }
        );
    }

    #[test]
    fn refresh_without_content_is_ignored() {
        let mut state = State::default();
        assert_eq!(state.update(Message::RefreshSizesRequested), Event::None);
        assert_eq!(state.size_status, SizeStatus::Idle);
    }

    #[test]
    fn switching_mode_cancels_an_active_drag() {
        let mut state = State::default();
        state.update(Message::DragStarted { x: 5.0, width: 10.0 });
        state.set_control_mode(ControlMode::Slider);
        assert!(!state.is_dragging());
    }
}
