use anyhow::{anyhow, Result};
use log::info;
use std::path::{Path, PathBuf};

use crate::config::SLIDES_FILENAME;
use crate::slides::template;
use crate::slides::{parse_slides, serialize_slides, Slide};

/// The active project: one `slides.md` plus its parsed slide sequence.
#[derive(Debug)]
pub struct Document {
    pub root_path: PathBuf,
    pub file_path: PathBuf,
    slides: Vec<Slide>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide_texts(&self) -> Vec<String> {
        self.slides.iter().map(|s| s.raw_text.clone()).collect()
    }
}

/// What `create` found at the target path.
#[derive(Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// A `slides.md` already existed; it was loaded, never overwritten.
    AlreadyExisted,
}

/// Owns the single active [`Document`]. All slide access goes through here,
/// bounds checked; callers only ever see transient references.
#[derive(Debug, Default)]
pub struct SlideStore {
    active: Option<Document>,
}

impl SlideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&Document> {
        self.active.as_ref()
    }

    fn active_mut(&mut self) -> Result<&mut Document> {
        self.active
            .as_mut()
            .ok_or_else(|| anyhow!("No active Slidev project. Please create or load one first."))
    }

    fn require_active(&self) -> Result<&Document> {
        self.active
            .as_ref()
            .ok_or_else(|| anyhow!("No active Slidev project. Please create or load one first."))
    }

    /// Load `slides.md` from `root`, replacing the active document wholesale.
    /// On any failure the previously active document is left untouched.
    pub fn load(&mut self, root: &Path) -> Result<()> {
        let file_path = root.join(SLIDES_FILENAME);
        if !file_path.exists() {
            return Err(anyhow!("No {} found at {}", SLIDES_FILENAME, root.display()));
        }
        let content = std::fs::read_to_string(&file_path)
            .map_err(|e| anyhow!("Failed to read {}: {}", file_path.display(), e))?;

        let slides = parse_slides(&content);
        info!("Loaded {} slides from {}", slides.len(), file_path.display());

        self.active = Some(Document {
            root_path: root.to_path_buf(),
            file_path,
            slides,
        });
        Ok(())
    }

    /// Serialize the active document back to its file. Full-file rewrite,
    /// staged through a temporary sibling and renamed into place so a crash
    /// mid-write cannot leave a half-written `slides.md`.
    pub fn save(&self) -> Result<()> {
        let doc = self.require_active()?;
        let content = serialize_slides(&doc.slides);

        let tmp = doc.file_path.with_extension("md.tmp");
        std::fs::write(&tmp, &content)
            .map_err(|e| anyhow!("Failed to write {}: {}", tmp.display(), e))?;
        std::fs::rename(&tmp, &doc.file_path)
            .map_err(|e| anyhow!("Failed to replace {}: {}", doc.file_path.display(), e))?;
        Ok(())
    }

    /// Create a project at `root`. If a `slides.md` already exists there this
    /// behaves like [`load`](Self::load) and reports it. Clears the active
    /// document up front so a failed create never leaves a stale project
    /// active.
    pub fn create(&mut self, root: &Path, title: &str, author: &str) -> Result<CreateOutcome> {
        self.active = None;

        let file_path = root.join(SLIDES_FILENAME);
        if file_path.exists() {
            self.load(root)?;
            return Ok(CreateOutcome::AlreadyExisted);
        }

        std::fs::create_dir_all(root)
            .map_err(|e| anyhow!("Failed to create {}: {}", root.display(), e))?;
        std::fs::write(&file_path, template::starter_document(title, author))
            .map_err(|e| anyhow!("Failed to write {}: {}", file_path.display(), e))?;
        info!("Created new project at {}", root.display());

        self.load(root)?;
        Ok(CreateOutcome::Created)
    }

    pub fn len(&self) -> usize {
        self.active.as_ref().map_or(0, |d| d.slides.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.require_active()?.slides.len();
        if index >= len {
            return Err(anyhow!("Invalid page index: {}", index));
        }
        Ok(())
    }

    pub fn page(&self, index: usize) -> Result<&str> {
        self.check_index(index)?;
        Ok(&self.require_active()?.slides[index].raw_text)
    }

    pub fn set_page(&mut self, index: usize, raw_text: String) -> Result<()> {
        self.check_index(index)?;
        self.active_mut()?.slides[index] = Slide { raw_text };
        Ok(())
    }

    /// Append a slide, returning its index.
    pub fn push_page(&mut self, raw_text: String) -> Result<usize> {
        let doc = self.active_mut()?;
        doc.slides.push(Slide { raw_text });
        Ok(doc.slides.len() - 1)
    }

    /// Replace the entire slide sequence, for bulk generation. The previous
    /// slides are discarded; the caller is expected to save afterwards.
    pub fn replace_pages(&mut self, texts: Vec<String>) -> Result<()> {
        let doc = self.active_mut()?;
        doc.slides = texts
            .into_iter()
            .map(|raw_text| Slide { raw_text })
            .collect();
        Ok(())
    }

    /// Overwrite slide 0, appending instead when the deck is empty. Length
    /// and every other index are unaffected.
    pub fn set_cover(&mut self, raw_text: String) -> Result<()> {
        let doc = self.active_mut()?;
        if doc.slides.is_empty() {
            doc.slides.push(Slide { raw_text });
        } else {
            doc.slides[0] = Slide { raw_text };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project(dir: &TempDir) -> PathBuf {
        dir.path().join("deck")
    }

    #[test]
    fn load_missing_file_fails_and_sets_nothing() {
        let dir = TempDir::new().unwrap();
        let mut store = SlideStore::new();
        assert!(store.load(dir.path()).is_err());
        assert!(store.active().is_none());
    }

    #[test]
    fn create_writes_starter_document_with_one_slide() {
        let dir = TempDir::new().unwrap();
        let mut store = SlideStore::new();
        let outcome = store.create(&project(&dir), "Intro", "Ada").unwrap();
        assert_eq!(outcome, CreateOutcome::Created);
        assert_eq!(store.len(), 1);
        let cover = store.page(0).unwrap();
        assert!(cover.contains("# Intro"));
        assert!(cover.contains("Ada"));
        assert!(cover.starts_with("---"));
    }

    #[test]
    fn create_on_existing_project_loads_without_overwriting() {
        let dir = TempDir::new().unwrap();
        let root = project(&dir);
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join(SLIDES_FILENAME), "# Keep me").unwrap();

        let mut store = SlideStore::new();
        let outcome = store.create(&root, "Other", "Someone").unwrap();
        assert_eq!(outcome, CreateOutcome::AlreadyExisted);
        assert_eq!(store.page(0).unwrap(), "# Keep me");
        let on_disk = std::fs::read_to_string(root.join(SLIDES_FILENAME)).unwrap();
        assert_eq!(on_disk, "# Keep me");
    }

    #[test]
    fn failed_create_clears_previous_project() {
        let dir = TempDir::new().unwrap();
        let mut store = SlideStore::new();
        store.create(&project(&dir), "Intro", "Ada").unwrap();
        assert!(store.active().is_some());

        // A root that cannot be a directory: path under a regular file.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        assert!(store.create(&blocker.join("nested"), "T", "A").is_err());
        assert!(store.active().is_none());
    }

    #[test]
    fn save_round_trips_through_load() {
        let dir = TempDir::new().unwrap();
        let root = project(&dir);
        let mut store = SlideStore::new();
        store.create(&root, "Intro", "Ada").unwrap();
        store.push_page("# Second".into()).unwrap();
        store.save().unwrap();

        let mut fresh = SlideStore::new();
        fresh.load(&root).unwrap();
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh.page(1).unwrap(), "# Second");
    }

    #[test]
    fn save_without_active_document_fails() {
        let store = SlideStore::new();
        assert!(store.save().is_err());
    }

    #[test]
    fn page_access_is_bounds_checked() {
        let dir = TempDir::new().unwrap();
        let mut store = SlideStore::new();
        store.create(&project(&dir), "Intro", "Ada").unwrap();
        assert!(store.page(1).is_err());
        assert!(store.set_page(1, "x".into()).is_err());
        assert!(store.page(0).is_ok());
    }

    #[test]
    fn push_page_returns_previous_length() {
        let dir = TempDir::new().unwrap();
        let mut store = SlideStore::new();
        store.create(&project(&dir), "Intro", "Ada").unwrap();
        for expected in 1..=3 {
            let idx = store.push_page(format!("# Page {}", expected)).unwrap();
            assert_eq!(idx, expected);
        }
        assert_eq!(store.len(), 4);
        assert_eq!(store.page(3).unwrap(), "# Page 3");
    }

    #[test]
    fn replace_pages_swaps_the_whole_deck() {
        let dir = TempDir::new().unwrap();
        let mut store = SlideStore::new();
        store.create(&project(&dir), "Intro", "Ada").unwrap();
        store.push_page("# Old body".into()).unwrap();

        store
            .replace_pages(vec!["# New cover".into(), "# A".into(), "# B".into()])
            .unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.page(0).unwrap(), "# New cover");
        assert_eq!(store.page(2).unwrap(), "# B");

        let mut empty = SlideStore::new();
        assert!(empty.replace_pages(vec!["# X".into()]).is_err());
    }

    #[test]
    fn set_cover_only_touches_index_zero() {
        let dir = TempDir::new().unwrap();
        let mut store = SlideStore::new();
        store.create(&project(&dir), "Intro", "Ada").unwrap();
        store.push_page("# Body".into()).unwrap();
        store.set_cover("# New cover".into()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.page(0).unwrap(), "# New cover");
        assert_eq!(store.page(1).unwrap(), "# Body");
    }
}
