use super::{MarkerError, Result};
use motifcanvas::FileType;
use std::path::{Path, PathBuf};

/// Names the image after the input file: the file name up to its first
/// period, placed in `output_dir`.
pub fn derive_output_path(
    input_path: &Path,
    output_dir: &Path,
    file_type: FileType,
) -> Result<PathBuf> {
    let malformed = || MarkerError::MalformedHeader {
        path: input_path.to_path_buf(),
    };
    let file_name = input_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(malformed)?;
    let short_name = match file_name.split_once('.') {
        Some((short_name, _)) if !short_name.is_empty() => short_name,
        _ => return Err(malformed()),
    };
    Ok(output_dir.join(format!("{}.{}", short_name, file_type.extension())))
}
