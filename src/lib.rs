// SPDX-License-Identifier: MPL-2.0
//! `iced_compare` is a side-by-side image format comparison tool built with
//! the Iced GUI framework.
//!
//! Two renditions of a picture are stacked with a clipped overlay and a
//! draggable reveal divider (or a slider), with per-side format pickers,
//! byte-size inspection, and save-a-copy support. The crate also
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_compare/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
