// SPDX-License-Identifier: MPL-2.0
//! `recto_verso` is a form editor for annotating paired document scans,
//! built with the Iced GUI framework.
//!
//! Each item of a collection is a front ("recto") and back ("verso") scan
//! with one JSON metadata document. The library exposes the record store,
//! the navigator and the editing session so they can be used and tested
//! without a window.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod navigation;
pub mod record;
pub mod session;
pub mod ui;
