// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `view` taking a context struct and, where it has input, an
//! `update` returning an event for the application.
//!
//! - [`navbar`] - Navigation buttons, go-to input, position and Save
//! - [`form`] - The eight metadata fields of the displayed item
//! - [`image_pane`] - Recto and verso scans with missing-file placeholders
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod form;
pub mod image_pane;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
