use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Find all CSV fixture files in the given path.
///
/// If path is a file it is returned as is, otherwise the directory is searched recursively
/// for `.csv` files. The result is sorted so runs are reproducible.
pub fn find_all_csv_fixtures(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && e.path().extension() == Some("csv".as_ref()))
        .map(DirEntry::into_path)
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_checked_in_fixtures() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../precompile/tests/fixtures");
        let files = find_all_csv_fixtures(&dir);
        assert!(files.iter().any(|f| f.ends_with("g1_add.csv")));
        assert!(files.iter().all(|f| f.extension() == Some("csv".as_ref())));

        let single = dir.join("g1_add.csv");
        assert_eq!(find_all_csv_fixtures(&single), [single]);
    }

    #[test]
    fn missing_path_yields_nothing() {
        assert!(find_all_csv_fixtures(Path::new("does/not/exist")).is_empty());
    }
}
