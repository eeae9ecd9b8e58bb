use crate::{pdf, png, svg, Drawing};
use std::path::Path;

pub fn generate(drawing: &Drawing, path: &Path) -> Result<(), String> {
    if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
        let svg_content = svg::generate_string(drawing);
        let bytes = match FileType::from_extension(extension) {
            Some(FileType::Svg) => svg_content.into_bytes(),
            Some(FileType::Png) => png::render_from_string(&svg_content)?,
            Some(FileType::Pdf) => pdf::render_from_string(&svg_content)?,
            None => return Err(format!("Unsupported file extension: {extension:?}")),
        };
        write_whole(path, &bytes)
    } else {
        Err(format!("Failed to get extension from path: {path:?}"))
    }
}

// A failed write must not leave a truncated image behind.
fn write_whole(path: &Path, bytes: &[u8]) -> Result<(), String> {
    if let Err(e) = std::fs::write(path, bytes) {
        let _ = std::fs::remove_file(path);
        return Err(e.to_string());
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileType {
    Svg,
    Png,
    Pdf,
}

impl FileType {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "svg" => Some(FileType::Svg),
            "png" => Some(FileType::Png),
            "pdf" => Some(FileType::Pdf),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Svg => "svg",
            FileType::Png => "png",
            FileType::Pdf => "pdf",
        }
    }
}
