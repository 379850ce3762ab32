use crate::db::store::SheetStore;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::success;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the workbook database to `dest_file`. With `compress` the copy
    /// is written straight into `<dest_file stem>.zip` instead.
    /// Returns the path of the file written.
    pub fn backup<S: SheetStore + ?Sized>(
        store: &mut S,
        db_path: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = Path::new(db_path);
        if !src.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        let requested = Path::new(dest_file);
        let dest = if compress {
            requested.with_extension("zip")
        } else {
            requested.to_path_buf()
        };

        if dest == src {
            return Err(AppError::Other(
                "backup destination is the database itself".to_string(),
            ));
        }

        ensure_writable(&dest, force)?;

        if compress {
            let entry = src
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "workbook.sqlite".to_string());
            zip_single(src, &entry, &dest)?;
        } else {
            fs::copy(src, &dest)?;
        }

        success(format!("Backup created: {}", dest.display()));

        store.log(
            "backup",
            &dest.to_string_lossy(),
            if compress {
                "Compressed backup created"
            } else {
                "Backup created"
            },
        )?;

        Ok(dest)
    }
}

/// Deflate one file into a fresh zip archive.
fn zip_single(src: &Path, entry: &str, dest: &Path) -> AppResult<()> {
    let mut zip = ZipWriter::new(File::create(dest)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(entry, options).map_err(io::Error::other)?;
    io::copy(&mut File::open(src)?, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;
    Ok(())
}
