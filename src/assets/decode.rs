use anyhow::Context;

use crate::assets::raster::RasterAsset;
use crate::foundation::error::{WrapError, WrapResult};

/// Decode encoded image bytes (any format enabled in `image`) into a premultiplied [`RasterAsset`].
///
/// Failures map to [`WrapError::Decode`] so callers can treat them as a recoverable, absent asset.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_raster(bytes: &[u8]) -> WrapResult<RasterAsset> {
    let dyn_img = image::load_from_memory(bytes)
        .context("decode image from memory")
        .map_err(|e| WrapError::decode(format!("{e:#}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(WrapError::decode("decoded image has no pixels"));
    }
    RasterAsset::from_straight_rgba8(width, height, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
