//! Outcomes of cleanup runs. Actual and dry-run results live in separate
//! lists so callers can report either mode without branching.

/// What a cleanup run did, or would do in dry-run mode.
#[derive(Debug, Default)]
pub struct CleanupResult {
    /// Successfully removed backups.
    pub deleted: Vec<String>,
    /// Bytes reclaimed by deletion.
    pub freed: u64,
    /// Backups gzipped in place.
    pub compressed: Vec<String>,
    /// Bytes reclaimed by compression.
    pub compressed_saved: u64,
    /// Dry run: backups a real run would remove.
    pub would_delete: Vec<String>,
    /// Dry run: bytes a real run would reclaim by deletion.
    pub would_free: u64,
    /// Dry run: backups a real run would compress.
    pub would_compress: Vec<String>,
    /// Backups that could not be processed, with the reason.
    pub failed: Vec<(String, String)>,
}

impl CleanupResult {
    /// Backups processed, or that would be processed in dry-run mode.
    #[must_use]
    pub fn count(&self) -> usize {
        if self.deleted.is_empty() && self.compressed.is_empty() {
            self.would_delete.len() + self.would_compress.len()
        } else {
            self.deleted.len() + self.compressed.len()
        }
    }

    /// True when the run (or preview) touched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0 && self.failed.is_empty()
    }
}
