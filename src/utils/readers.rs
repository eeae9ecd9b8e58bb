use super::{MarkerError, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufReader, Read as ioRead};
use std::path::Path;

/// Reads a whole text input, transparently decompressing gzipped files.
pub fn read_input(path: &Path) -> Result<String> {
    let mut reader = open_input_reader(path)?;
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| unreadable(path, e))?;
    Ok(text)
}

fn open_input_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MarkerError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => unreadable(path, e),
    })?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(MarkerError::FileUnreadable {
                path: path.to_path_buf(),
                reason: "invalid gzip header".to_string(),
            })
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

fn unreadable(path: &Path, err: io::Error) -> MarkerError {
    MarkerError::FileUnreadable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
