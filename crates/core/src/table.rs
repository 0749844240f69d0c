//! The resume table: an immutable mapping from applicant id to resume text.
//!
//! Built once at startup from a tabular CSV source with two required columns
//! (identifier and content, names configurable) and never mutated afterwards,
//! so it is safe to share read-only across concurrent requests.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Stable, externally-assigned identifier for a resume record.
///
/// Ids come from the corpus source and are never generated, reused, or
/// mutated by this service.
pub type ApplicantId = String;

/// Errors raised while building or querying the resume table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Two rows in the source share the same applicant id.
    ///
    /// Construction fails fast rather than silently keeping the last row:
    /// a duplicate id means the corpus is corrupt, and overwriting would
    /// quietly drop a resume.
    #[error("duplicate applicant id '{0}' in resume source")]
    DuplicateId(ApplicantId),

    /// The requested applicant id is not present in the table.
    #[error("applicant id '{0}' not found")]
    NotFound(ApplicantId),

    /// The CSV header is missing a required column.
    #[error("resume source is missing required column '{0}'")]
    MissingColumn(String),

    /// The CSV source could not be parsed.
    #[error("failed to read resume source: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV file could not be opened.
    #[error("failed to open resume source: {0}")]
    Io(#[from] std::io::Error),
}

/// Immutable collection of (applicant id, resume content) pairs.
///
/// Lookup by id is O(1) expected; `ids` enumerates in source order.
#[derive(Debug, Clone)]
pub struct ResumeTable {
    entries: HashMap<ApplicantId, String>,
    order: Vec<ApplicantId>,
}

impl ResumeTable {
    /// Builds a table from (id, content) rows, failing on the first duplicate id.
    pub fn from_rows<I>(rows: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (ApplicantId, String)>,
    {
        let mut entries = HashMap::new();
        let mut order = Vec::new();
        for (id, content) in rows {
            if entries.contains_key(&id) {
                return Err(TableError::DuplicateId(id));
            }
            order.push(id.clone());
            entries.insert(id, content);
        }
        Ok(Self { entries, order })
    }

    /// Builds a table from CSV data with the given id and content columns.
    pub fn from_csv_reader<R: Read>(
        reader: R,
        id_column: &str,
        content_column: &str,
    ) -> Result<Self, TableError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?.clone();
        let id_idx = headers
            .iter()
            .position(|h| h == id_column)
            .ok_or_else(|| TableError::MissingColumn(id_column.to_string()))?;
        let content_idx = headers
            .iter()
            .position(|h| h == content_column)
            .ok_or_else(|| TableError::MissingColumn(content_column.to_string()))?;

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let id = record.get(id_idx).unwrap_or_default().to_string();
            let content = record.get(content_idx).unwrap_or_default().to_string();
            rows.push((id, content));
        }
        Self::from_rows(rows)
    }

    /// Builds a table from a CSV file on disk.
    pub fn from_csv_path(
        path: impl AsRef<Path>,
        id_column: &str,
        content_column: &str,
    ) -> Result<Self, TableError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file, id_column, content_column)
    }

    /// Returns the resume content for `id`.
    pub fn get(&self, id: &str) -> Result<&str, TableError> {
        self.entries
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| TableError::NotFound(id.to_string()))
    }

    /// Whether `id` is present in the table.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of resumes in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no resumes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All applicant ids, in source order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_rows() -> Vec<(String, String)> {
        vec![
            ("101".to_string(), "Senior Rust engineer, 8 years".to_string()),
            ("102".to_string(), "Data analyst, SQL and Python".to_string()),
            ("103".to_string(), "Frontend developer, React".to_string()),
        ]
    }

    #[test]
    fn test_from_rows_and_get() {
        let table = ResumeTable::from_rows(sample_rows()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("102").unwrap(), "Data analyst, SQL and Python");
    }

    #[test]
    fn test_get_missing_id() {
        let table = ResumeTable::from_rows(sample_rows()).unwrap();
        let err = table.get("999").unwrap_err();
        assert!(matches!(err, TableError::NotFound(id) if id == "999"));
    }

    #[test]
    fn test_duplicate_id_fails_fast() {
        let mut rows = sample_rows();
        rows.push(("101".to_string(), "duplicate".to_string()));
        let err = ResumeTable::from_rows(rows).unwrap_err();
        assert!(matches!(err, TableError::DuplicateId(id) if id == "101"));
    }

    #[test]
    fn test_ids_preserve_source_order() {
        let table = ResumeTable::from_rows(sample_rows()).unwrap();
        let ids: Vec<&str> = table.ids().collect();
        assert_eq!(ids, vec!["101", "102", "103"]);
    }

    #[test]
    fn test_from_csv_reader() {
        let csv = "ID,name,content\n1,Ann,Embedded C developer\n2,Bo,ML researcher\n";
        let table = ResumeTable::from_csv_reader(csv.as_bytes(), "ID", "content").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("1").unwrap(), "Embedded C developer");
        assert_eq!(table.get("2").unwrap(), "ML researcher");
    }

    #[test]
    fn test_from_csv_missing_column() {
        let csv = "ID,name\n1,Ann\n";
        let err = ResumeTable::from_csv_reader(csv.as_bytes(), "ID", "content").unwrap_err();
        assert!(matches!(err, TableError::MissingColumn(col) if col == "content"));
    }

    #[test]
    fn test_from_csv_duplicate_id() {
        let csv = "ID,content\n7,first\n7,second\n";
        let err = ResumeTable::from_csv_reader(csv.as_bytes(), "ID", "content").unwrap_err();
        assert!(matches!(err, TableError::DuplicateId(id) if id == "7"));
    }

    #[test]
    fn test_from_csv_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ID,content").unwrap();
        writeln!(file, "42,DevOps engineer").unwrap();
        file.flush().unwrap();
        let table = ResumeTable::from_csv_path(file.path(), "ID", "content").unwrap();
        assert_eq!(table.get("42").unwrap(), "DevOps engineer");
    }
}
