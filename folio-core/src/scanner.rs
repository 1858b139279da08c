use std::path::{Path, PathBuf};

use log::info;
use walkdir::WalkDir;

#[derive(Debug)]
pub enum ScanError {
    Io(std::io::Error),
    InvalidPath(PathBuf),
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Io(err)
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        match err.into_io_error() {
            Some(e) => ScanError::Io(e),
            None => ScanError::Io(std::io::Error::other("filesystem loop")),
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::Io(e) => write!(f, "IO error: {}", e),
            ScanError::InvalidPath(p) => write!(f, "Invalid path: {}", p.display()),
        }
    }
}

impl std::error::Error for ScanError {}

/// One content category: the files found under a single subdirectory of
/// the content root, in discovery order.
#[derive(Debug)]
pub struct Category {
    pub name: String,
    pub files: Vec<PathBuf>,
}

pub struct ContentScanner {
    content_dir: PathBuf,
}

impl ContentScanner {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            content_dir: path.as_ref().to_path_buf(),
        }
    }

    /// Walks the content root and groups every file under the category named
    /// by its parent directory (relative to the root). `.DS_Store` artifacts
    /// are skipped, as are files sitting directly at the root, which belong
    /// to no category. Order is traversal order, not sorted.
    pub fn scan(&self) -> Result<Vec<Category>, ScanError> {
        info!("scanning {}", self.content_dir.display());

        let mut categories: Vec<Category> = Vec::new();
        // sorted traversal keeps discovery order stable across runs, so
        // re-runs emit identical pages
        for entry in WalkDir::new(&self.content_dir).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();

            if path.to_string_lossy().contains(".DS_Store") {
                continue;
            }
            if !entry.file_type().is_file() {
                continue;
            }

            let parent = path.parent().unwrap_or(Path::new(""));
            let relative = parent
                .strip_prefix(&self.content_dir)
                .map_err(|_| ScanError::InvalidPath(path.to_path_buf()))?;
            if relative.as_os_str().is_empty() {
                continue;
            }

            let name = relative.to_string_lossy().to_string();
            match categories.iter_mut().find(|c| c.name == name) {
                Some(category) => category.files.push(path.to_path_buf()),
                None => categories.push(Category {
                    name,
                    files: vec![path.to_path_buf()],
                }),
            }
        }

        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(path: &Path, contents: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    fn groups_files_by_category() {
        let root = tempfile::tempdir().unwrap();
        write_file(&root.path().join("home/index.md"), "# home");
        write_file(&root.path().join("my work/intro.md"), "# intro");
        write_file(&root.path().join("my work/project.md"), "# project");
        write_file(&root.path().join("writing/essay.md"), "# essay");

        let tree = ContentScanner::new(root.path()).scan().unwrap();

        assert_eq!(tree.len(), 3);
        let total: usize = tree.iter().map(|c| c.files.len()).sum();
        assert_eq!(total, 4);
        let my_work = tree.iter().find(|c| c.name == "my work").unwrap();
        assert_eq!(my_work.files.len(), 2);
    }

    #[test]
    fn nested_directories_form_their_own_category() {
        let root = tempfile::tempdir().unwrap();
        write_file(&root.path().join("extras/archive/old.md"), "# old");

        let tree = ContentScanner::new(root.path()).scan().unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree[0].name,
            format!("extras{}archive", std::path::MAIN_SEPARATOR)
        );
    }

    #[test]
    fn skips_ds_store_artifacts() {
        let root = tempfile::tempdir().unwrap();
        write_file(&root.path().join("home/index.md"), "# home");
        write_file(&root.path().join("home/.DS_Store"), "");

        let tree = ContentScanner::new(root.path()).scan().unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].files.len(), 1);
    }

    #[test]
    fn skips_files_at_the_root() {
        let root = tempfile::tempdir().unwrap();
        write_file(&root.path().join("stray.md"), "# stray");
        write_file(&root.path().join("home/index.md"), "# home");

        let tree = ContentScanner::new(root.path()).scan().unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name, "home");
    }

    #[test]
    fn missing_root_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("does-not-exist");

        assert!(ContentScanner::new(&missing).scan().is_err());
    }
}
