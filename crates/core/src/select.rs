//! Result selection: bounded top-N lookup and labeled rendering.
//!
//! Turns a fused ranking into the human-readable blocks handed to the answer
//! generator. Each block is the literal prefix `Applicant ID `, the id, a
//! newline, then the raw resume text — the answer prompts instruct the model
//! to reference applicants by that id.

use crate::table::ResumeTable;

/// Selects the top `limit` fused entries and renders each as a labeled block.
///
/// The fused ranking is already sorted best-first; output order follows it.
/// An id the oracle returned but the table does not contain is a consistency
/// violation between external collaborators: the entry is logged and skipped
/// rather than failing the whole request, so callers may receive fewer than
/// `limit` blocks. Fewer fused entries than `limit` is not an error either.
pub fn select_resumes(
    fused: &[(String, f32)],
    table: &ResumeTable,
    limit: usize,
) -> Vec<String> {
    let mut blocks = Vec::with_capacity(limit.min(fused.len()));
    for (id, score) in fused.iter().take(limit) {
        match table.get(id) {
            Ok(content) => blocks.push(format!("Applicant ID {id}\n{content}")),
            Err(_) => {
                tracing::warn!(
                    applicant_id = %id,
                    fused_score = score,
                    "similarity oracle returned an id absent from the resume table; skipping entry"
                );
            }
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ResumeTable {
        ResumeTable::from_rows(vec![
            ("1".to_string(), "Kernel developer".to_string()),
            ("2".to_string(), "QA engineer".to_string()),
            ("3".to_string(), "Site reliability engineer".to_string()),
        ])
        .unwrap()
    }

    fn fused(entries: &[(&str, f32)]) -> Vec<(String, f32)> {
        entries.iter().map(|(id, s)| (id.to_string(), *s)).collect()
    }

    #[test]
    fn test_select_respects_limit_and_order() {
        let ranking = fused(&[("3", 0.9), ("1", 0.5), ("2", 0.1)]);
        let blocks = select_resumes(&ranking, &table(), 2);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "Applicant ID 3\nSite reliability engineer");
        assert_eq!(blocks[1], "Applicant ID 1\nKernel developer");
    }

    #[test]
    fn test_select_fewer_entries_than_limit() {
        let ranking = fused(&[("2", 0.4)]);
        let blocks = select_resumes(&ranking, &table(), 5);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], "Applicant ID 2\nQA engineer");
    }

    #[test]
    fn test_select_skips_ids_missing_from_table() {
        let ranking = fused(&[("1", 0.9), ("ghost", 0.8), ("2", 0.7)]);
        let blocks = select_resumes(&ranking, &table(), 3);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("Applicant ID 1\n"));
        assert!(blocks[1].starts_with("Applicant ID 2\n"));
    }

    #[test]
    fn test_select_empty_ranking() {
        let blocks = select_resumes(&[], &table(), 5);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_select_zero_limit() {
        let ranking = fused(&[("1", 0.9)]);
        let blocks = select_resumes(&ranking, &table(), 0);
        assert!(blocks.is_empty());
    }
}
