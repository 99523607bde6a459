// SPDX-License-Identifier: MPL-2.0
//! Divider overlay: the draggable reveal boundary drawn over the image stack.

use super::state::Message;
use crate::ui::theme;

/// Pixels around the divider within which the cursor grabs the handle.
const HANDLE_GRAB_RADIUS: f32 = 12.0;
/// Radius of the handle knob.
const HANDLE_RADIUS: f32 = 14.0;
const LINE_WIDTH: f32 = 2.0;

/// Canvas program translating pointer and touch gestures into drag messages
/// and drawing the divider line with its handle knob.
pub struct DividerOverlay {
    /// Divider position in pixels from the pane's left edge (pre-clamped).
    pub position: f32,
    /// Whether a drag session is active (drives the cursor shape).
    pub dragging: bool,
    /// Drag gestures are only consumed in handle mode; in slider mode the
    /// divider is purely visual.
    pub interactive: bool,
}

impl iced::widget::canvas::Program<Message> for DividerOverlay {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        if !self.interactive {
            return None;
        }

        match event {
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    return Some(
                        Action::publish(Message::DragStarted {
                            x: position.x,
                            width: bounds.width,
                        })
                        .and_capture(),
                    );
                }
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { .. }) => {
                // Track the absolute cursor so an active session keeps
                // following the pointer outside the pane; the state clamps
                // and ignores moves without a session.
                if let Some(position) = cursor.position() {
                    return Some(Action::publish(Message::DragMoved {
                        x: position.x - bounds.x,
                        width: bounds.width,
                    }));
                }
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left))
            | iced::Event::Mouse(iced::mouse::Event::CursorLeft) => {
                return Some(Action::publish(Message::DragEnded));
            }
            iced::Event::Touch(iced::touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(*position) {
                    return Some(
                        Action::publish(Message::DragStarted {
                            x: position.x - bounds.x,
                            width: bounds.width,
                        })
                        .and_capture(),
                    );
                }
            }
            iced::Event::Touch(iced::touch::Event::FingerMoved { position, .. }) => {
                return Some(
                    Action::publish(Message::DragMoved {
                        x: position.x - bounds.x,
                        width: bounds.width,
                    })
                    .and_capture(),
                );
            }
            iced::Event::Touch(iced::touch::Event::FingerLifted { .. })
            | iced::Event::Touch(iced::touch::Event::FingerLost { .. }) => {
                return Some(Action::publish(Message::DragEnded));
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<iced::widget::canvas::Geometry> {
        use iced::widget::canvas::{Frame, Path, Stroke};

        let mut frame = Frame::new(renderer, bounds.size());
        let x = self.position.clamp(0.0, bounds.width);

        let line = Path::line(
            iced::Point::new(x, 0.0),
            iced::Point::new(x, bounds.height),
        );
        frame.stroke(
            &line,
            Stroke::default()
                .with_width(LINE_WIDTH)
                .with_color(theme::divider_line_color()),
        );

        if self.interactive {
            let center = iced::Point::new(x, bounds.height / 2.0);
            let knob = Path::circle(center, HANDLE_RADIUS);
            frame.fill(&knob, theme::divider_handle_color());
            frame.stroke(
                &knob,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(theme::divider_handle_border_color()),
            );

            // Chevrons hinting at the drag directions.
            let arrow_reach = HANDLE_RADIUS * 0.45;
            for direction in [-1.0_f32, 1.0] {
                let tip = iced::Point::new(center.x + direction * arrow_reach, center.y);
                let top = iced::Point::new(center.x + direction * 2.0, center.y - arrow_reach);
                let bottom = iced::Point::new(center.x + direction * 2.0, center.y + arrow_reach);
                for end in [top, bottom] {
                    frame.stroke(
                        &Path::line(tip, end),
                        Stroke::default()
                            .with_width(1.5)
                            .with_color(theme::divider_line_color()),
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> iced::mouse::Interaction {
        if !self.interactive {
            return iced::mouse::Interaction::default();
        }

        // The page-wide dragging style of the original becomes the cursor
        // shape: resize arrows while dragging or hovering the divider.
        if self.dragging {
            return iced::mouse::Interaction::ResizingHorizontally;
        }

        if let Some(position) = cursor.position_in(bounds) {
            if (position.x - self.position).abs() <= HANDLE_GRAB_RADIUS {
                return iced::mouse::Interaction::ResizingHorizontally;
            }
        }

        iced::mouse::Interaction::default()
    }
}
