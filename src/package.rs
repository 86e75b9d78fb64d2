//! Zip packaging of the finished output file

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::info;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;

use crate::error::{CollateError, Result};

/// Archive path for an output file: the output path with `.zip` appended.
pub fn archive_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".zip");
    PathBuf::from(name)
}

/// Write `<output>.zip` next to `output`, holding one deflated entry named
/// after the output's base name. Returns the archive path.
pub fn zip_output(output: &Path) -> Result<PathBuf> {
    let archive = archive_path(output);
    write_archive(output, &archive).map_err(|source| CollateError::Archive {
        output: output.to_path_buf(),
        source,
    })?;
    info!(path = %archive.display(), "created archive");
    Ok(archive)
}

fn write_archive(output: &Path, archive: &Path) -> std::result::Result<(), ZipError> {
    let entry_name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or(ZipError::FileNotFound)?;

    let mut source = BufReader::new(File::open(output)?);
    let mut zip = ZipWriter::new(BufWriter::new(File::create(archive)?));

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(entry_name, options)?;
    io::copy(&mut source, &mut zip)?;

    let mut inner = zip.finish()?;
    io::Write::flush(&mut inner)?;
    Ok(())
}
