// SPDX-License-Identifier: MPL-2.0
//! The comparison component: two renditions of a picture stacked with a
//! clipped overlay, driven either by a draggable divider or a slider.
//!
//! The component follows the state/message/event split used across the
//! application: [`State::update`] mutates the component and returns an
//! [`Event`] describing side effects (image loads, size measurements,
//! dialogs) for the application root to perform.

pub mod overlay;
pub mod state;
pub mod view;

pub use state::{Event, Message, Side, SizeStatus, State};
pub use view::ViewContext;
