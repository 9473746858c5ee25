use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::models::{Header, Record};

/// Write records in header order, with the header row first when
/// `write_header` is set. The target is replaced in one rename once the
/// whole file has been written, so a failed run never leaves it half done.
pub fn write_csv(
    path: &Path,
    header: &Header,
    write_header: bool,
    records: &[Record],
) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(ConvertError::MissingFile(parent.to_path_buf()));
    }
    debug!(file = %path.display(), rows = records.len(), write_header, "writing CSV file");

    let tmp = temp_file_for(path, parent)?;
    {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(std::io::BufWriter::new(tmp.as_file()));
        if write_header {
            wtr.write_record(header.columns())?;
        }
        for record in records {
            wtr.write_record(record.values())?;
        }
        wtr.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| ConvertError::Io(e.error))?;
    Ok(())
}

/// Temp file next to `path` that ends up with the mode a plain create or
/// truncate would give: the existing file's mode when overwriting, the
/// umask default otherwise.
fn temp_file_for(path: &Path, parent: &Path) -> Result<NamedTempFile> {
    let existing = std::fs::metadata(path).ok().map(|m| m.permissions());

    let mut builder = tempfile::Builder::new();
    builder.prefix(".mint-convert");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(parent)?;

    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms)?;
    }
    Ok(tmp)
}
