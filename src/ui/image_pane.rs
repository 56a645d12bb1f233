// SPDX-License-Identifier: MPL-2.0
//! Recto and verso scan display.
//!
//! Each side is probed once when an item is loaded: the header is read to
//! get the pixel size, the pixels themselves are decoded later by the iced
//! image pipeline. Missing or unreadable scans render as a placeholder frame
//! with a caption instead of an error.

use crate::i18n::fluent::I18n;
use crate::record::{ImagePair, Section};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{image, text, Column, Container, Row};
use iced::{alignment, ContentFit, Element, Length};
use std::io;
use std::path::Path;

/// Display state of one scan.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loaded {
        handle: image::Handle,
        width: u32,
        height: u32,
    },
    Missing {
        file: String,
    },
    Unreadable {
        file: String,
    },
}

impl ImageSlot {
    pub fn load(path: &Path) -> Self {
        let file = file_label(path);
        let reader = match image_rs::ImageReader::open(path) {
            Ok(reader) => reader,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "scan not found");
                return Self::Missing { file };
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot open scan");
                return Self::Unreadable { file };
            }
        };

        let dimensions = reader
            .with_guessed_format()
            .map_err(image_rs::ImageError::from)
            .and_then(|reader| reader.into_dimensions());

        match dimensions {
            Ok((width, height)) if width > 0 && height > 0 => Self::Loaded {
                handle: image::Handle::from_path(path),
                width,
                height,
            },
            Ok(_) => Self::Unreadable { file },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot decode scan");
                Self::Unreadable { file }
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Height of the scan once scaled to `target_width`, keeping its aspect ratio.
    pub fn scaled_height(&self, target_width: u32) -> Option<f32> {
        match self {
            Self::Loaded { width, height, .. } => {
                Some(target_width as f32 * *height as f32 / *width as f32)
            }
            Self::Missing { .. } | Self::Unreadable { .. } => None,
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Both scans of the displayed item.
#[derive(Debug, Clone)]
pub struct ImagePanes {
    pub recto: ImageSlot,
    pub verso: ImageSlot,
}

impl ImagePanes {
    pub fn load(pair: &ImagePair) -> Self {
        Self {
            recto: ImageSlot::load(&pair.recto),
            verso: ImageSlot::load(&pair.verso),
        }
    }

    /// Slots that show a placeholder instead of a scan.
    pub fn problems(&self) -> impl Iterator<Item = &ImageSlot> {
        [&self.recto, &self.verso]
            .into_iter()
            .filter(|slot| !slot.is_loaded())
    }
}

/// Renders the two scans side by side, each scaled to `width` pixels.
pub fn view<'a, Message: 'a>(
    panes: &'a ImagePanes,
    i18n: &'a I18n,
    width: u32,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .push(side(&panes.recto, Section::Recto, i18n, width))
        .push(side(&panes.verso, Section::Verso, i18n, width))
        .into()
}

fn side<'a, Message: 'a>(
    slot: &'a ImageSlot,
    section: Section,
    i18n: &'a I18n,
    width: u32,
) -> Element<'a, Message> {
    let title = text(i18n.tr(section.i18n_key())).size(typography::TITLE_SM);
    let target_width = Length::Fixed(width as f32);

    let body: Element<'a, Message> = match slot {
        ImageSlot::Loaded { handle, .. } => {
            let height = slot
                .scaled_height(width)
                .unwrap_or(sizing::PLACEHOLDER_HEIGHT);
            image(handle.clone())
                .width(target_width)
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Contain)
                .into()
        }
        ImageSlot::Missing { file } | ImageSlot::Unreadable { file } => {
            let key = if matches!(slot, ImageSlot::Missing { .. }) {
                "image-missing"
            } else {
                "image-unreadable"
            };
            Container::new(text(i18n.tr_with_args(key, &[("file", file.as_str())])).size(typography::CAPTION))
                .width(target_width)
                .height(Length::Fixed(sizing::PLACEHOLDER_HEIGHT))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::image_placeholder)
                .into()
        }
    };

    Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(body)
        .into()
}
