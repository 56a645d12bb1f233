// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Collection**: directory names and file suffixes of a scan collection
//! - **Display**: scan preview width

// ==========================================================================
// Collection Defaults
// ==========================================================================

/// Directory holding the cropped scans.
pub const DEFAULT_IMAGES_DIR: &str = "cropped";

/// Directory holding the metadata documents.
pub const DEFAULT_METADATA_DIR: &str = "metadata";

/// File name suffix of front scans (`{n}_recto_cropped.jpg`).
pub const DEFAULT_RECTO_SUFFIX: &str = "_recto_cropped.jpg";

/// File name suffix of back scans (`{n}_verso_cropped.jpg`).
pub const DEFAULT_VERSO_SUFFIX: &str = "_verso_cropped.jpg";

/// File name suffix of metadata documents (`{n}_metadata.json`).
pub const DEFAULT_METADATA_SUFFIX: &str = "_metadata.json";

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Width scans are scaled to, in logical pixels.
pub const DEFAULT_IMAGE_WIDTH: u32 = 800;

/// Minimum scan preview width.
pub const MIN_IMAGE_WIDTH: u32 = 200;

/// Maximum scan preview width.
pub const MAX_IMAGE_WIDTH: u32 = 4000;
