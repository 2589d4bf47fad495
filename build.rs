// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows, this embeds executable metadata and, when packaging has
//! produced one, the taskbar/file-explorer icon.

fn main() {
    // Only run on Windows
    #[cfg(target_os = "windows")]
    {
        let mut res = winresource::WindowsResource::new();
        res.set("ProductName", "SteinFolio");
        res.set("FileDescription", "Stein Architekten portfolio");
        // The .ico is rendered from assets/branding/iced_folio.svg at
        // packaging time and is not checked in.
        let icon = "assets/branding/iced_folio.ico";
        if std::path::Path::new(icon).exists() {
            res.set_icon(icon);
        }
        res.compile().expect("Failed to compile Windows resources");
    }
}
