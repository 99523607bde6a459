// SPDX-License-Identifier: MPL-2.0
//! Checkerboard background for the compare pane.
//!
//! Formats with transparency (PNG, WebP, SVG) are a core comparison case;
//! the alternating tiles make the transparent regions of both renditions
//! readable. Tile colors follow the window theme so the pattern stays
//! subtle in dark mode.

use crate::ui::theme::palette;
use iced::widget::{canvas, Container, Stack};
use iced::{mouse, Color, Element, Length, Rectangle, Theme};

const TILE_SIZE: f32 = 16.0;

const LIGHT_TILES: (Color, Color) = (palette::GRAY_100, palette::GRAY_200);
const DARK_TILES: (Color, Color) = (
    Color::from_rgb(0.16, 0.16, 0.16),
    Color::from_rgb(0.22, 0.22, 0.22),
);

/// Checkerboard pattern widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checkerboard;

impl<Message> canvas::Program<Message> for Checkerboard {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let (even, odd) = if theme.extended_palette().is_dark {
            DARK_TILES
        } else {
            LIGHT_TILES
        };

        let cols = ((bounds.width / TILE_SIZE).ceil() as i32).max(1);
        let rows = ((bounds.height / TILE_SIZE).ceil() as i32).max(1);

        for row in 0..rows {
            for col in 0..cols {
                let color = if (row + col) % 2 == 0 { even } else { odd };
                let x = col as f32 * TILE_SIZE;
                let y = row as f32 * TILE_SIZE;
                let path = canvas::Path::rectangle(
                    iced::Point::new(x, y),
                    iced::Size::new(TILE_SIZE + 0.5, TILE_SIZE + 0.5),
                );
                frame.fill(&path, color);
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Helper to wrap the compare pane with a checkerboard background.
pub fn wrap<'a, Message: 'a>(content: Container<'a, Message>) -> Element<'a, Message> {
    Stack::new()
        .push(
            canvas::Canvas::new(Checkerboard)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(content)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_pairs_are_distinct() {
        assert_ne!(LIGHT_TILES.0, LIGHT_TILES.1);
        assert_ne!(DARK_TILES.0, DARK_TILES.1);
    }
}
