use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::assets::catalog::VehicleId;
use crate::foundation::config::{
    DEFAULT_EXPORT_STEM, EXPORT_NAME_MAX_CHARS, EXPORT_SIZE_LIMIT_BYTES,
};
use crate::foundation::error::{WrapError, WrapResult};
use crate::render::buffer::OutputBuffer;

/// Non-fatal advisory attached to an export. The export always proceeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportWarning {
    /// The encoded file is larger than the target device accepts.
    SizeExceeded {
        /// Encoded size in bytes.
        bytes: usize,
        /// Advisory limit in bytes.
        limit: usize,
    },
    /// The suggested file name breaks the target device's naming rule.
    FileName {
        /// The offending file name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl std::fmt::Display for ExportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportWarning::SizeExceeded { bytes, limit } => write!(
                f,
                "design is {bytes} bytes, above the {limit}-byte limit for wrap images; \
                 try reducing pattern complexity or scale"
            ),
            ExportWarning::FileName { name, reason } => {
                write!(f, "file name '{name}' may be rejected: {reason}")
            }
        }
    }
}

/// An encoded export ready to be saved.
#[derive(Clone, Debug)]
pub struct ExportBlob {
    /// Suggested file name (`{vehicle}.png` or `custom_wrap.png`).
    pub file_name: String,
    /// PNG bytes.
    pub bytes: Vec<u8>,
    /// Advisories raised while exporting.
    pub warnings: Vec<ExportWarning>,
}

impl ExportBlob {
    /// Write the PNG to `path`, creating parent directories.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> WrapResult<PathBuf> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(path, &self.bytes)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(path.to_path_buf())
    }

    /// Write the PNG into `dir` under [`ExportBlob::file_name`].
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> WrapResult<PathBuf> {
        self.write_to_path(dir.as_ref().join(&self.file_name))
    }
}

/// Suggested export file name for the selected vehicle.
pub fn suggested_file_name(vehicle: Option<&VehicleId>) -> String {
    let stem = vehicle.map_or(DEFAULT_EXPORT_STEM, VehicleId::as_str);
    format!("{stem}.png")
}

/// Check a file stem against the device naming rule: at most [`EXPORT_NAME_MAX_CHARS`]
/// characters of ASCII alphanumerics, spaces, `_` or `-`.
pub fn file_stem_issue(stem: &str) -> Option<String> {
    let len = stem.chars().count();
    if len > EXPORT_NAME_MAX_CHARS {
        return Some(format!(
            "{len} characters, limit is {EXPORT_NAME_MAX_CHARS}"
        ));
    }
    if let Some(bad) = stem
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-')))
    {
        return Some(format!("unsupported character {bad:?}"));
    }
    None
}

/// Encode `buffer` as a straight-alpha RGBA PNG and collect advisories.
#[tracing::instrument(skip(buffer), fields(w = buffer.width, h = buffer.height))]
pub fn export_png(buffer: &OutputBuffer, vehicle: Option<&VehicleId>) -> WrapResult<ExportBlob> {
    let bytes = encode_png(buffer)?;
    let file_name = suggested_file_name(vehicle);

    let mut warnings = Vec::new();
    if bytes.len() > EXPORT_SIZE_LIMIT_BYTES {
        warnings.push(ExportWarning::SizeExceeded {
            bytes: bytes.len(),
            limit: EXPORT_SIZE_LIMIT_BYTES,
        });
    }
    let stem = file_name.strip_suffix(".png").unwrap_or(&file_name);
    if let Some(reason) = file_stem_issue(stem) {
        warnings.push(ExportWarning::FileName {
            name: file_name.clone(),
            reason,
        });
    }
    for w in &warnings {
        tracing::warn!(%w, "export advisory");
    }

    Ok(ExportBlob {
        file_name,
        bytes,
        warnings,
    })
}

fn encode_png(buffer: &OutputBuffer) -> WrapResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(buffer.width, buffer.height, buffer.to_straight_rgba8())
        .ok_or_else(|| WrapError::encode("output buffer does not match its dimensions"))?;
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| WrapError::encode(format!("encode png: {e}")))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
