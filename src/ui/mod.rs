// SPDX-License-Identifier: MPL-2.0
//! UI modules: the compare component, settings view, notification toasts,
//! and shared visual helpers.

pub mod checkerboard;
pub mod compare;
pub mod notifications;
pub mod settings;
pub mod theme;
