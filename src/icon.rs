// SPDX-License-Identifier: MPL-2.0
//! Window icon built from the studio monogram.
//!
//! The monogram ships as an SVG embedded in the binary and is rasterized
//! once at startup. A window without an icon is cosmetic, so the public
//! entry point degrades to `None` instead of failing the boot.

use crate::error::{Error, Result};
use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon in pixels.
const ICON_SIZE: u32 = 128;

// Embedded so packaging does not need to locate assets on disk.
const MONOGRAM_SVG: &[u8] = include_bytes!("../assets/branding/iced_folio.svg");

/// Rasterizes the embedded monogram into the window icon.
pub fn load_window_icon() -> Option<Icon> {
    match build_window_icon() {
        Ok(icon) => Some(icon),
        Err(error) => {
            eprintln!("Window icon unavailable: {}", error);
            None
        }
    }
}

fn build_window_icon() -> Result<Icon> {
    let rgba = rasterize_monogram(ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).map_err(|e| Error::Svg(e.to_string()))
}

/// Renders the monogram SVG into a square RGBA buffer of `size` pixels.
///
/// # Errors
///
/// Returns [`Error::Svg`] if the SVG fails to parse, has empty
/// dimensions, or the target pixmap cannot be allocated.
fn rasterize_monogram(size: u32) -> Result<Vec<u8>> {
    let tree = usvg::Tree::from_data(MONOGRAM_SVG, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let source = tree.size();
    if source.width() <= 0.0 || source.height() <= 0.0 {
        return Err(Error::Svg("Monogram has empty dimensions".into()));
    }

    let transform = tiny_skia::Transform::from_scale(
        size as f32 / source.width(),
        size as f32 / source.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| Error::Svg("Failed to allocate icon pixmap".into()))?;

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap.data().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monogram_rasterizes_at_icon_size() {
        let rgba = rasterize_monogram(ICON_SIZE).expect("rasterize monogram");
        assert_eq!(rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
    }

    #[test]
    fn rasterized_monogram_is_not_blank() {
        let rgba = rasterize_monogram(64).expect("rasterize monogram");
        // The monogram draws white strokes on a dark plate, so both ends
        // of the value range must appear.
        assert!(rgba.chunks_exact(4).any(|px| px[0] > 200));
        assert!(rgba.chunks_exact(4).any(|px| px[0] < 50));
    }

    #[test]
    fn window_icon_builds_from_embedded_asset() {
        assert!(load_window_icon().is_some());
    }
}
