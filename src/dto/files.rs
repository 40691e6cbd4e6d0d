use serde::Serialize;

use crate::domain::file::FileRecord;
use crate::domain::types::non_blank;
use crate::formatting::{format_date, format_file_size, truncate_hash};

const GENERIC_ICON: &str = "bi bi-file-earmark";

/// Ordered icon rules; the first rule with a matching needle wins.
const ICON_RULES: &[(&[&str], &str)] = &[
    (&["pdf"], "bi bi-file-pdf text-danger"),
    (&["image", "jpg", "png"], "bi bi-file-image text-primary"),
    (&["video", "mp4"], "bi bi-file-play text-info"),
    (&["audio", "mp3"], "bi bi-file-music text-success"),
    (&["zip", "rar"], "bi bi-file-zip text-warning"),
    (&["word", "doc"], "bi bi-file-word text-primary"),
    (&["excel", "xls"], "bi bi-file-excel text-success"),
];

/// Ordered label rules, checked the same way as [`ICON_RULES`].
const LABEL_RULES: &[(&[&str], &str)] = &[
    (&["pdf"], "PDF"),
    (&["jpeg", "jpg"], "JPEG"),
    (&["png"], "PNG"),
    (&["mp4"], "MP4"),
    (&["mp3"], "MP3"),
    (&["zip"], "ZIP"),
    (&["doc"], "DOC"),
];

pub const UNKNOWN_TYPE_LABEL: &str = "Desconocido";
pub const GENERIC_TYPE_LABEL: &str = "Archivo";

fn first_match(file_type: &str, rules: &[(&[&str], &'static str)]) -> Option<&'static str> {
    let lowered = file_type.to_lowercase();
    rules
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lowered.contains(n)))
        .map(|(_, value)| *value)
}

/// Icon classes for a MIME-like type string.
pub fn file_icon(file_type: Option<&str>) -> &'static str {
    match file_type.filter(|t| !t.is_empty()) {
        Some(t) => first_match(t, ICON_RULES).unwrap_or(GENERIC_ICON),
        None => GENERIC_ICON,
    }
}

/// Short label for a MIME-like type string.
///
/// Unrecognized types fall back to their upper-cased subtype
/// (`application/x-foo` → `X-FOO`).
pub fn file_type_label(file_type: Option<&str>) -> String {
    let Some(file_type) = file_type.filter(|t| !t.is_empty()) else {
        return UNKNOWN_TYPE_LABEL.to_string();
    };
    if let Some(label) = first_match(file_type, LABEL_RULES) {
        return label.to_string();
    }
    file_type
        .split('/')
        .nth(1)
        .filter(|subtype| !subtype.is_empty())
        .map(str::to_uppercase)
        .unwrap_or_else(|| GENERIC_TYPE_LABEL.to_string())
}

/// One row of the files table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRow {
    pub id: i64,
    pub filename: String,
    pub icon: &'static str,
    pub type_label: String,
    pub size: String,
    pub hash: String,
    /// Untruncated hash for the clipboard.
    pub full_hash: Option<String>,
    pub scraped_date: String,
    /// Present only when the file changed after it was scraped.
    pub modified_date: Option<String>,
}

impl From<&FileRecord> for FileRow {
    fn from(file: &FileRecord) -> Self {
        let file_type = file.file_type.as_deref();
        Self {
            id: file.id.get(),
            filename: file.filename.clone(),
            icon: file_icon(file_type),
            type_label: file_type_label(file_type),
            size: format_file_size(file.file_size),
            hash: truncate_hash(file.file_hash.as_deref()),
            full_hash: non_blank(file.file_hash.as_deref()).map(String::from),
            scraped_date: format_date(file.scraped_date.as_deref()),
            modified_date: file
                .was_modified()
                .then(|| format_date(file.last_modified.as_deref())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_in_any_case() {
        assert_eq!(file_icon(Some("application/PDF")), "bi bi-file-pdf text-danger");
        assert_eq!(file_type_label(Some("Application/Pdf")), "PDF");
    }

    #[test]
    fn unknown_subtype_becomes_label() {
        assert_eq!(file_type_label(Some("application/x-foo")), "X-FOO");
        assert_eq!(file_icon(Some("application/x-foo")), "bi bi-file-earmark");
    }

    #[test]
    fn missing_type_is_unknown() {
        assert_eq!(file_type_label(None), "Desconocido");
        assert_eq!(file_type_label(Some("")), "Desconocido");
        assert_eq!(file_icon(None), "bi bi-file-earmark");
        assert_eq!(file_icon(Some("")), "bi bi-file-earmark");
    }

    #[test]
    fn type_without_subtype_is_generic() {
        assert_eq!(file_type_label(Some("binary")), "Archivo");
        assert_eq!(file_type_label(Some("text/")), "Archivo");
    }

    #[test]
    fn rules_are_prioritized() {
        // "image/png" hits the image icon before anything else
        assert_eq!(file_icon(Some("image/png")), "bi bi-file-image text-primary");
        assert_eq!(file_type_label(Some("image/jpeg")), "JPEG");
        assert_eq!(file_icon(Some("video/mp4")), "bi bi-file-play text-info");
        assert_eq!(file_icon(Some("application/x-rar")), "bi bi-file-zip text-warning");
        assert_eq!(
            file_icon(Some("application/msword")),
            "bi bi-file-word text-primary"
        );
        assert_eq!(
            file_icon(Some("application/vnd.ms-excel")),
            "bi bi-file-excel text-success"
        );
        assert_eq!(file_type_label(Some("application/msword")), "MSWORD");
    }

    #[test]
    fn row_marks_modified_files() {
        let file: FileRecord = serde_json::from_value(serde_json::json!({
            "id": 1,
            "filename": "catalogo.pdf",
            "file_type": "application/pdf",
            "file_size": 1048576,
            "file_hash": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4",
            "scraped_date": "2024-01-15T10:30:00",
            "last_modified": "2024-02-01T08:00:00"
        }))
        .unwrap();

        let row = FileRow::from(&file);
        assert_eq!(row.size, "1 MB");
        assert_eq!(row.hash, "e3b0c44298fc1c14...");
        assert_eq!(
            row.full_hash.as_deref(),
            Some("e3b0c44298fc1c149afbf4c8996fb92427ae41e4")
        );
        assert_eq!(row.modified_date.as_deref(), Some("1 feb 2024, 08:00"));
    }
}
