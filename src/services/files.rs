use crate::domain::file::FileRecord;
use crate::dto::files::FileRow;
use crate::repository::FileReader;

use super::ServiceResult;

/// Type filter value that shows every file.
pub const ALL_TYPES: &str = "all";

/// State of the files section: the last successfully loaded file list.
#[derive(Debug, Default)]
pub struct FilesView {
    files: Vec<FileRecord>,
}

impl FilesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// Fetches the full file list and renders every row.
    pub async fn load_files<R>(&mut self, repo: &R) -> ServiceResult<Vec<FileRow>>
    where
        R: FileReader,
    {
        match repo.list_files().await {
            Ok(files) => {
                self.files = files;
                Ok(self.filter_files_by_type(None))
            }
            Err(e) => {
                log::error!("Failed to load files: {e}");
                Err(e.into())
            }
        }
    }

    /// Re-renders the cached list keeping files whose type contains
    /// `file_type`. Empty or `all` shows everything.
    pub fn filter_files_by_type(&self, file_type: Option<&str>) -> Vec<FileRow> {
        let needle = file_type
            .map(str::trim)
            .filter(|t| !t.is_empty() && *t != ALL_TYPES);

        self.files
            .iter()
            .filter(|file| needle.is_none_or(|n| file.type_contains(n)))
            .map(FileRow::from)
            .collect()
    }
}
