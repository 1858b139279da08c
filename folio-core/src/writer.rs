use std::io;
use std::path::Path;

/// Persists one rendered page. Parent directories are not created here;
/// the orchestrator pre-creates the output tree.
pub fn write_page(html: &str, path: &Path) -> io::Result<()> {
    std::fs::write(path, html)
}
