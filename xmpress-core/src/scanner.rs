use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub enum ScanError {
    IoError(std::io::Error),
    InvalidPath(PathBuf),
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::IoError(err)
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::IoError(e) => write!(f, "IO error: {}", e),
            ScanError::InvalidPath(p) => write!(f, "Invalid path: {}", p.display()),
        }
    }
}

impl std::error::Error for ScanError {}

/// Discovers source pages (`.html` shells carrying a literal-text block)
/// under a source directory. Paths are returned relative to it so the
/// output tree mirrors the source tree.
pub struct PageScanner {
    source_dir: PathBuf,
}

impl PageScanner {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            source_dir: path.as_ref().to_path_buf(),
        }
    }

    pub fn scan(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.source_dir.is_dir() {
            return Err(ScanError::InvalidPath(self.source_dir.clone()));
        }

        let mut pages = Vec::new();

        for entry in WalkDir::new(&self.source_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path().is_file()
                    && e.path()
                        .extension()
                        .map(|ext| ext == "html")
                        .unwrap_or(false)
            })
        {
            let relative = entry
                .path()
                .strip_prefix(&self.source_dir)
                .map_err(|_| ScanError::InvalidPath(entry.path().to_path_buf()))?;
            pages.push(relative.to_path_buf());
        }

        pages.sort();
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_only_html_pages_recursively() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("posts")).unwrap();
        std::fs::write(dir.path().join("index.html"), "<xmp>a</xmp>").unwrap();
        std::fs::write(dir.path().join("posts/one.html"), "<xmp>b</xmp>").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "skip").unwrap();

        let pages = PageScanner::new(dir.path()).scan().unwrap();
        assert_eq!(
            pages,
            vec![PathBuf::from("index.html"), PathBuf::from("posts/one.html")]
        );
    }

    #[test]
    fn missing_source_dir_is_an_error() {
        let result = PageScanner::new("/no/such/dir").scan();
        assert!(matches!(result, Err(ScanError::InvalidPath(_))));
    }
}
