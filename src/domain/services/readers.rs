//! Content readers
//!
//! Convert an uploaded file's bytes into inlinable content. Both readers are
//! pure: identical bytes always give identical output.

use base64::Engine;

use crate::domain::entities::uploaded_file::extension;
use crate::domain::entities::UploadedFile;
use crate::error::ReadError;

/// Decode the file as text (invalid UTF-8 sequences become U+FFFD)
pub fn read_as_text(file: &UploadedFile) -> Result<String, ReadError> {
    let bytes = file.bytes()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Encode the file as a `data:<media-type>;base64,...` URI
pub fn read_as_data_uri(file: &UploadedFile) -> Result<String, ReadError> {
    let bytes = file.bytes()?;
    Ok(format!(
        "data:{};base64,{}",
        media_type(&file.name),
        base64::engine::general_purpose::STANDARD.encode(&bytes)
    ))
}

/// Media type inferred from the file name's extension
pub fn media_type(name: &str) -> &'static str {
    match extension(name).as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("html") => "text/html",
        _ => "application/octet-stream",
    }
}
