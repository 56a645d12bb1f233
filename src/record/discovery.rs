// SPDX-License-Identifier: MPL-2.0
//! Counting the items of a collection.
//!
//! Every item contributes two scans to the image directory, so the item count
//! is the number of regular files there divided by two. The count is taken
//! once at startup and not refreshed during a session.

use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Counts the items whose scans live in `images_dir`.
///
/// Sub-directories are ignored. An odd file count rounds down.
pub fn count_items(images_dir: &Path) -> Result<usize> {
    let mut files = 0usize;
    for entry in fs::read_dir(images_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files += 1;
        }
    }

    debug!(dir = %images_dir.display(), files, "scanned image directory");
    Ok(files / 2)
}
