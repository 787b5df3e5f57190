//! Texture loading: image file decoding plus CPU mipmap chain generation.
//!
//! The renderer consumes [`TextureData`] and uploads every mip level; this
//! crate never touches the GPU, which keeps decode and mip logic testable
//! headless.
//!
//! # Invariants
//! - Pixels are always RGBA8, row-major, tightly packed.
//! - Only 3-channel (RGB) and 4-channel (RGBA) sources are accepted; any
//!   other channel count is a hard failure, not a fallback.
//! - A failed load produces no texture data.

use std::path::{Path, PathBuf};

/// Errors from texture loading.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("{path}: unsupported channel count {channels} (expected 3 or 4)")]
    UnsupportedChannels { path: PathBuf, channels: u8 },
}

/// A decoded image ready for GPU upload, always RGBA8.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Number of mip levels for a full chain down to 1x1.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// Decode an image file into RGBA8 pixel data.
///
/// RGB sources are expanded to RGBA; RGBA sources pass through. Grayscale
/// and gray+alpha sources are rejected with
/// [`TextureError::UnsupportedChannels`].
pub fn load_texture(path: impl AsRef<Path>) -> Result<TextureData, TextureError> {
    let path = path.as_ref();

    let reader = image::ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| TextureError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let decoded = reader.decode().map_err(|source| TextureError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let channels = decoded.color().channel_count();
    if channels != 3 && channels != 4 {
        return Err(TextureError::UnsupportedChannels {
            path: path.to_path_buf(),
            channels,
        });
    }

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(path = %path.display(), width, height, channels, "texture decoded");

    Ok(TextureData {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

impl TextureData {
    /// Number of mip levels for this image's full chain.
    pub fn mip_level_count(&self) -> u32 {
        mip_level_count(self.width, self.height)
    }

    /// Full mip chain, base level first, ending at 1x1.
    pub fn mip_chain(&self) -> Vec<TextureData> {
        let mut levels = vec![self.clone()];
        while levels
            .last()
            .is_some_and(|l| l.width > 1 || l.height > 1)
        {
            let next = levels[levels.len() - 1].downsample();
            levels.push(next);
        }
        levels
    }

    /// Box-filter this level down to the next mip size (dimensions halved,
    /// floored at 1). Odd edges clamp to the last row/column.
    fn downsample(&self) -> TextureData {
        let width = (self.width / 2).max(1);
        let height = (self.height / 2).max(1);
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);

        for y in 0..height {
            for x in 0..width {
                let x0 = (x * 2).min(self.width - 1);
                let x1 = (x * 2 + 1).min(self.width - 1);
                let y0 = (y * 2).min(self.height - 1);
                let y1 = (y * 2 + 1).min(self.height - 1);
                for c in 0..4 {
                    let sum = self.sample(x0, y0, c) as u32
                        + self.sample(x1, y0, c) as u32
                        + self.sample(x0, y1, c) as u32
                        + self.sample(x1, y1, c) as u32;
                    pixels.push((sum / 4) as u8);
                }
            }
        }

        TextureData {
            width,
            height,
            pixels,
        }
    }

    fn sample(&self, x: u32, y: u32, channel: u32) -> u8 {
        self.pixels[((y * self.width + x) * 4 + channel) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_image(
        pixels: &[u8],
        width: u32,
        height: u32,
        color: image::ColorType,
    ) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .unwrap();
        image::save_buffer(file.path(), pixels, width, height, color).unwrap();
        file
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_texture("no/such/texture.jpg").unwrap_err();
        assert!(matches!(err, TextureError::Io { .. }));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"not an image at all").unwrap();
        let err = load_texture(file.path()).unwrap_err();
        assert!(matches!(err, TextureError::Decode { .. }));
    }

    #[test]
    fn grayscale_is_rejected() {
        let file = write_image(&[0u8; 16], 4, 4, image::ColorType::L8);
        let err = load_texture(file.path()).unwrap_err();
        assert!(matches!(
            err,
            TextureError::UnsupportedChannels { channels: 1, .. }
        ));
    }

    #[test]
    fn gray_alpha_is_rejected() {
        let file = write_image(&[0u8; 32], 4, 4, image::ColorType::La8);
        let err = load_texture(file.path()).unwrap_err();
        assert!(matches!(
            err,
            TextureError::UnsupportedChannels { channels: 2, .. }
        ));
    }

    #[test]
    fn rgb_expands_to_rgba() {
        let rgb: Vec<u8> = (0..4 * 4).flat_map(|_| [10u8, 20, 30]).collect();
        let file = write_image(&rgb, 4, 4, image::ColorType::Rgb8);
        let tex = load_texture(file.path()).unwrap();
        assert_eq!((tex.width, tex.height), (4, 4));
        assert_eq!(tex.pixels.len(), 4 * 4 * 4);
        assert_eq!(&tex.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn rgba_passes_through() {
        let rgba: Vec<u8> = (0..2 * 2).flat_map(|_| [1u8, 2, 3, 4]).collect();
        let file = write_image(&rgba, 2, 2, image::ColorType::Rgba8);
        let tex = load_texture(file.path()).unwrap();
        assert_eq!(&tex.pixels, &rgba);
    }

    #[test]
    fn mip_level_counts() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(2, 2), 2);
        assert_eq!(mip_level_count(256, 256), 9);
        assert_eq!(mip_level_count(512, 256), 10);
        // non power of two floors
        assert_eq!(mip_level_count(300, 200), 9);
    }

    #[test]
    fn mip_chain_ends_at_one_by_one() {
        let tex = TextureData {
            width: 4,
            height: 4,
            pixels: vec![128; 4 * 4 * 4],
        };
        let chain = tex.mip_chain();
        assert_eq!(chain.len() as u32, tex.mip_level_count());
        let last = chain.last().unwrap();
        assert_eq!((last.width, last.height), (1, 1));
        assert_eq!(last.pixels.len(), 4);
    }

    #[test]
    fn box_filter_averages() {
        let tex = TextureData {
            width: 2,
            height: 2,
            pixels: vec![
                0, 0, 0, 255, //
                100, 0, 0, 255, //
                0, 200, 0, 255, //
                100, 200, 0, 255, //
            ],
        };
        let chain = tex.mip_chain();
        assert_eq!(chain.len(), 2);
        assert_eq!(&chain[1].pixels, &[50, 100, 0, 255]);
    }

    #[test]
    fn non_square_chain_floors_at_one() {
        let tex = TextureData {
            width: 8,
            height: 2,
            pixels: vec![0; 8 * 2 * 4],
        };
        let dims: Vec<_> = tex
            .mip_chain()
            .iter()
            .map(|l| (l.width, l.height))
            .collect();
        assert_eq!(dims, [(8, 2), (4, 1), (2, 1), (1, 1)]);
    }
}
