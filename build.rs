// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows, this embeds the product name and description into the
//! executable version info so it shows up in the file explorer.

fn main() {
    // Only run on Windows
    #[cfg(target_os = "windows")]
    {
        let mut res = winresource::WindowsResource::new();
        res.set("ProductName", "Recto Verso");
        res.set("FileDescription", "Recto/verso scan metadata editor");
        if let Err(err) = res.compile() {
            println!("cargo:warning=Failed to compile Windows resources: {err}");
        }
    }
}
