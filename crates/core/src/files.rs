//! File metadata classification.
//!
//! Uploaded files are categorized server-side from their MIME type; the
//! category is stored alongside the metadata row and never trusted from
//! the caller.

/// File categories derived from MIME types.
pub const CATEGORY_VIDEO: &str = "video";
pub const CATEGORY_IMAGE: &str = "image";
pub const CATEGORY_AUDIO: &str = "audio";
pub const CATEGORY_DOCUMENT: &str = "document";
pub const CATEGORY_OTHER: &str = "other";

/// MIME types treated as documents beyond the `application/pdf` family.
const DOCUMENT_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "text/plain",
    "text/csv",
];

/// Derive the storage category for a file from its MIME type.
pub fn categorize_mime(mime_type: &str) -> &'static str {
    let mime = mime_type.trim().to_ascii_lowercase();
    if mime.starts_with("video/") {
        CATEGORY_VIDEO
    } else if mime.starts_with("image/") {
        CATEGORY_IMAGE
    } else if mime.starts_with("audio/") {
        CATEGORY_AUDIO
    } else if DOCUMENT_MIME_TYPES.contains(&mime.as_str()) {
        CATEGORY_DOCUMENT
    } else {
        CATEGORY_OTHER
    }
}

/// Validate the required fields of a new file metadata row.
pub fn validate_file(filename: &str, mime_type: &str) -> Result<(), String> {
    if filename.trim().is_empty() {
        return Err("Nome do arquivo é obrigatório".to_string());
    }
    if mime_type.trim().is_empty() {
        return Err("Tipo do arquivo é obrigatório".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_mime_types() {
        assert_eq!(categorize_mime("video/mp4"), CATEGORY_VIDEO);
        assert_eq!(categorize_mime("video/quicktime"), CATEGORY_VIDEO);
    }

    #[test]
    fn image_and_audio_mime_types() {
        assert_eq!(categorize_mime("image/png"), CATEGORY_IMAGE);
        assert_eq!(categorize_mime("audio/wav"), CATEGORY_AUDIO);
    }

    #[test]
    fn document_mime_types() {
        assert_eq!(categorize_mime("application/pdf"), CATEGORY_DOCUMENT);
        assert_eq!(categorize_mime("text/csv"), CATEGORY_DOCUMENT);
    }

    #[test]
    fn unknown_mime_falls_back_to_other() {
        assert_eq!(categorize_mime("application/octet-stream"), CATEGORY_OTHER);
        assert_eq!(categorize_mime(""), CATEGORY_OTHER);
    }

    #[test]
    fn categorization_is_case_insensitive() {
        assert_eq!(categorize_mime("VIDEO/MP4"), CATEGORY_VIDEO);
    }

    #[test]
    fn file_requires_name_and_mime() {
        assert!(validate_file("", "video/mp4").is_err());
        assert!(validate_file("raw.mp4", "").is_err());
        assert!(validate_file("raw.mp4", "video/mp4").is_ok());
    }
}
