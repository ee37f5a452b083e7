//! Builds a translation table from the files of a workspace.

use std::collections::hash_map::Entry;
use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;

use crate::config::{
    ConfigManager,
    FileMatcher,
};
use crate::indexer::types::IndexerError;
use crate::input::translation::{
    TranslationFile,
    load_translation_file,
};
use crate::types::TranslationTable;

/// Collects translation files and merges them per locale.
#[derive(Clone, Debug, Default)]
pub struct TranslationIndexer {
    /// Files that failed to load during the last run.
    skipped: Vec<PathBuf>,
}

impl TranslationIndexer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `workspace_root` and returns one merged table.
    ///
    /// Files are loaded in path order; a key defined twice for the same
    /// locale keeps the value from the later file. Unloadable files are
    /// logged and skipped.
    ///
    /// # Errors
    /// Returns error if the root is not a directory or the configured
    /// patterns are invalid.
    pub fn index_workspace(
        &mut self,
        workspace_root: &Path,
        config_manager: &ConfigManager,
    ) -> Result<TranslationTable, IndexerError> {
        tracing::debug!(workspace_root = %workspace_root.display(), "Indexing workspace");
        if !workspace_root.is_dir() {
            return Err(IndexerError::InvalidRoot(workspace_root.to_path_buf()));
        }

        let settings = config_manager.get_settings();
        let matcher = FileMatcher::new(workspace_root.to_path_buf(), settings)?;

        self.skipped.clear();
        let mut table = TranslationTable::new();
        for path in Self::find_translation_files(&matcher) {
            match load_translation_file(&path, workspace_root, &settings.key_separator) {
                Ok(file) => merge_into(&mut table, file),
                Err(e) => {
                    tracing::warn!("Skipping translation file: {e}");
                    self.skipped.push(path);
                }
            }
        }

        tracing::debug!(locales = table.len(), skipped = self.skipped.len(), "Indexing finished");
        Ok(table)
    }

    /// Files that could not be loaded by the last [`Self::index_workspace`].
    #[must_use]
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    fn find_translation_files(matcher: &FileMatcher) -> Vec<PathBuf> {
        let root = matcher.workspace_root().to_path_buf();
        let prune_matcher = matcher.clone();

        let mut found_files = Vec::new();
        for result in WalkBuilder::new(&root)
            .hidden(false)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .follow_links(false)
            .filter_entry(move |entry| {
                !entry
                    .path()
                    .strip_prefix(prune_matcher.workspace_root())
                    .is_ok_and(|relative| prune_matcher.is_excluded_relative(relative))
            })
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            if matcher.is_translation_file(entry.path()) {
                found_files.push(entry.into_path());
            }
        }

        found_files.sort();
        found_files
    }
}

fn merge_into(table: &mut TranslationTable, file: TranslationFile) {
    let locale_keys = table.entry(file.locale.key().to_string()).or_default();

    for (key, value) in file.keys {
        match locale_keys.entry(key) {
            Entry::Occupied(mut existing) => {
                tracing::warn!(
                    locale = %file.locale,
                    key = %existing.key(),
                    file = %file.file_path.display(),
                    "Duplicate translation key, later file wins"
                );
                existing.insert(value);
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}
