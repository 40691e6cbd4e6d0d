use serde::Deserialize;

/// Query string of the files type filter (`?type=pdf`).
#[derive(Debug, Default, Deserialize)]
pub struct FileFilterQuery {
    #[serde(rename = "type")]
    pub file_type: Option<String>,
}

/// Outcome of a clipboard copy reported by the page (`?ok=true`).
#[derive(Debug, Deserialize)]
pub struct CopyNoticeQuery {
    pub ok: bool,
}
