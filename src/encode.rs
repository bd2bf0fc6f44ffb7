use std::{fs::File, io::BufWriter, path::Path};

use image::{
    ImageEncoder,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::{
    compose::MenuImage,
    error::{MenuError, MenuResult},
};

/// Encode a composited menu to `path` and return the file size in bytes.
///
/// Compression effort is maximized; this runs once, offline, so encode time
/// is cheap and the assets are fetched many times.
pub fn write_png(path: &Path, image: &MenuImage) -> MenuResult<u64> {
    let file = File::create(path)
        .map_err(|e| MenuError::encode(format!("create '{}': {e}", path.display())))?;
    let writer = BufWriter::new(file);

    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(
            &image.data,
            image.width,
            image.height,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| MenuError::encode(format!("encode '{}': {e}", path.display())))?;

    let meta = std::fs::metadata(path)
        .map_err(|e| MenuError::encode(format!("stat '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), bytes = meta.len(), "wrote menu asset");
    Ok(meta.len())
}
