//! Fixture data for the demo

use notebook_common::{parse_file_records, FileRecord, NotebookId};

const FIXTURE_FILES: &str = include_str!("../fixtures/files.json");

pub fn demo_notebook_id() -> NotebookId {
    NotebookId::new("demo")
}

/// Files shown when the demo starts or is reset
pub fn demo_files() -> Vec<FileRecord> {
    match parse_file_records(FIXTURE_FILES) {
        Ok(files) => files,
        Err(e) => {
            tracing::error!("Failed to load fixture files: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notebook_common::check_unique_filenames;

    #[test]
    fn fixtures_parse_with_unique_filenames() {
        let files = demo_files();
        assert_eq!(files.len(), 5);
        check_unique_filenames(&files).unwrap();
    }
}
