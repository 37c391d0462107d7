use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::{error, info};

use crate::api::{self, DEFAULT_EXTENSION};
use crate::error::LsbError;
use crate::media::image::container::Container;
use crate::media::image::lsb_codec;
use crate::media::{CapacityReport, LsbCodecOptions};
use crate::result::Result;

/// Hides the file `input` in the image `container` and writes the result to `output`.
///
/// The extension of `input` travels with the payload, `bin` when it has none.
/// The codec of `output` follows its file extension, the container codec is kept
/// for unknown extensions.
pub fn embed(
    input: &Path,
    container: &Path,
    output: &Path,
    opts: &LsbCodecOptions,
) -> Result<()> {
    let payload = read(input)?;
    let extension = input
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or(DEFAULT_EXTENSION);

    let image = api::embed::prepare()
        .with_payload(payload)
        .with_extension(extension)
        .with_container(read(container)?)
        .use_output_format(ImageFormat::from_path(output).ok())
        .with_options(opts.clone())
        .execute()?;
    write(output, &image)?;
    info!("Hid {input:?} in {output:?}");

    Ok(())
}

/// Extracts the hidden file of `container` to `output`, with the embedded extension
/// replacing any extension of `output`. Returns the path written.
pub fn extract(container: &Path, output: &Path, opts: &LsbCodecOptions) -> Result<PathBuf> {
    let frame = api::extract::prepare()
        .with_image(read(container)?)
        .with_options(opts.clone())
        .execute()?;

    let target = output.with_extension(frame.extension());
    write(&target, frame.payload())?;
    info!("Extracted {} bytes to {target:?}", frame.payload().len());

    Ok(target)
}

/// unveil all raw data, no frame interpretation is happening.
/// Just a raw binary dump of the data gathered by the LSB algorithm.
pub fn extract_raw(container: &Path, output: &Path, opts: &LsbCodecOptions) -> Result<()> {
    let container = Container::from_file(container)?;
    let raw = lsb_codec::extract_raw(container.pixels(), opts)?;

    write(output, &raw)
}

/// How much `container` can take under `opts`
pub fn capacity(container: &Path, opts: &LsbCodecOptions) -> Result<CapacityReport> {
    let container = Container::from_file(container)?;

    CapacityReport::of(container.pixels(), opts)
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| {
        error!("Error reading {path:?}: {source}");
        LsbError::ReadError { source }
    })
}

fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| {
        error!("Error writing {path:?}: {source}");
        LsbError::WriteError { source }
    })
}
