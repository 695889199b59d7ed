use std::fs;

use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use tracing::debug;

use crate::layout::Layout;

/// Ensure every directory in the layout exists, creating missing parents.
/// Pre-existing directories are left untouched; a pre-existing non-directory
/// at a target path is an error. Returns the absolute paths in input order.
///
/// Not transactional: on failure, entries created so far remain and later
/// entries are not attempted.
pub fn ensure_directories(layout: &Layout) -> Result<Vec<Utf8PathBuf>> {
    let mut processed = Vec::with_capacity(layout.subpaths().len());

    for subpath in layout.subpaths() {
        let target = layout.target(subpath);
        if target.exists() && !target.is_dir() {
            bail!("{} already exists and is not a directory", target);
        }
        fs::create_dir_all(target.as_std_path())
            .with_context(|| format!("creating directory {}", target))?;
        debug!("ensured {}", target);
        processed.push(target);
    }

    Ok(processed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> Utf8PathBuf {
        let mut dir = std::env::temp_dir();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        dir.push(format!("mkws-test-{ts}"));
        Utf8PathBuf::from_path_buf(dir).unwrap()
    }

    fn make_layout(root: &Utf8PathBuf, subpaths: &[&str]) -> Layout {
        Layout::new(
            root.clone(),
            subpaths.iter().map(|s| (*s).to_owned()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn creates_all_entries_including_root() {
        let root = unique_temp_dir();
        let layout = make_layout(&root, &["", "a", "a/b"]);

        let processed = ensure_directories(&layout).unwrap();

        assert_eq!(
            processed,
            vec![root.clone(), root.join("a"), root.join("a/b")]
        );
        for path in &processed {
            assert!(path.is_dir());
        }

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn creates_missing_intermediate_levels() {
        let root = unique_temp_dir();
        let layout = make_layout(&root, &["x/y/z"]);

        let processed = ensure_directories(&layout).unwrap();

        assert_eq!(processed, vec![root.join("x/y/z")]);
        assert!(root.join("x").is_dir());
        assert!(root.join("x/y").is_dir());

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn second_run_is_idempotent() {
        let root = unique_temp_dir();
        let layout = make_layout(&root, &["", "a", "a/b"]);

        let first = ensure_directories(&layout).unwrap();
        let second = ensure_directories(&layout).unwrap();

        assert_eq!(first, second);
        // Nothing beyond the requested entries appeared on the second pass.
        let entries: Vec<_> = fs::read_dir(root.as_std_path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn result_preserves_input_order() {
        let root = unique_temp_dir();
        let layout = make_layout(&root, &["zeta", "alpha", "mid/dle"]);

        let processed = ensure_directories(&layout).unwrap();

        assert_eq!(
            processed,
            vec![root.join("zeta"), root.join("alpha"), root.join("mid/dle")]
        );

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn file_collision_at_target_fails() {
        let root = unique_temp_dir();
        fs::create_dir_all(root.as_std_path()).unwrap();
        fs::write(root.join("f").as_std_path(), "not a directory").unwrap();
        let layout = make_layout(&root, &["f"]);

        let err = ensure_directories(&layout);

        assert!(err.is_err());
        assert!(root.join("f").is_file());

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn file_collision_at_ancestor_fails() {
        let root = unique_temp_dir();
        fs::create_dir_all(root.as_std_path()).unwrap();
        fs::write(root.join("a").as_std_path(), "blocks the subtree").unwrap();
        let layout = make_layout(&root, &["a/b"]);

        assert!(ensure_directories(&layout).is_err());

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn earlier_entries_survive_a_failure() {
        let root = unique_temp_dir();
        fs::create_dir_all(root.as_std_path()).unwrap();
        fs::write(root.join("blocked").as_std_path(), "").unwrap();
        let layout = make_layout(&root, &["first", "blocked", "never"]);

        assert!(ensure_directories(&layout).is_err());
        assert!(root.join("first").is_dir());
        assert!(!root.join("never").exists());

        let _ = fs::remove_dir_all(root.as_std_path());
    }
}
