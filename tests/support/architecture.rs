use std::fs;
use std::path::{Path, PathBuf};

/// `(relative file, 1-based line number, line)`.
pub type Hit = (String, usize, String);

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Every `.rs` file under `dir`, as `(relative path, contents)`, sorted.
fn rust_sources(dir: &Path) -> Vec<(String, String)> {
    let mut pending = vec![dir.to_path_buf()];
    let mut sources = Vec::new();

    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current).expect("read source dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let relative = path
                    .strip_prefix(manifest_dir())
                    .unwrap_or(&path)
                    .to_string_lossy()
                    .replace('\\', "/");
                let contents = fs::read_to_string(&path).expect("read source file");
                sources.push((relative, contents));
            }
        }
    }

    sources.sort();
    sources
}

fn hits_where(relative_dir: &str, mut keep: impl FnMut(&str, &str) -> bool) -> Vec<Hit> {
    rust_sources(&manifest_dir().join(relative_dir))
        .into_iter()
        .flat_map(|(file, contents)| {
            contents
                .lines()
                .enumerate()
                .filter(|(_, line)| keep(&file, line))
                .map(|(idx, line)| (file.clone(), idx + 1, line.to_string()))
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn find_lines_containing(relative_dir: &str, patterns: &[&str]) -> Vec<Hit> {
    hits_where(relative_dir, |_, line| patterns.iter().any(|p| line.contains(p)))
}

/// Lines in `mod.rs` files other than module declarations, re-exports,
/// attributes and comments.
pub fn find_non_export_lines_in_mod_files(relative_dir: &str) -> Vec<Hit> {
    const ALLOWED: [&str; 6] = ["//", "pub mod ", "mod ", "pub use ", "#[cfg", "#!["];

    hits_where(relative_dir, |file, line| {
        let line = line.trim();
        file.ends_with("/mod.rs")
            && !line.is_empty()
            && !ALLOWED.iter().any(|p| line.starts_with(p))
    })
}

pub fn path_exists(relative_path: &str) -> bool {
    manifest_dir().join(relative_path).exists()
}

pub fn read_relative(relative_path: &str) -> String {
    fs::read_to_string(manifest_dir().join(relative_path)).expect("read relative file")
}
