//! Usage: Small filesystem helpers shared across domains (ensure/copy/remove directory trees).

use std::path::Path;

pub(crate) fn ensure_dir(dir: &Path) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("IO_ERROR: failed to create {}: {e}", dir.display()))
}

/// Copies `src` into `dst`, merging with whatever `dst` already holds. Files present in both
/// are overwritten by the `src` version.
pub(crate) fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<(), String> {
    ensure_dir(dst)?;

    let entries = std::fs::read_dir(src)
        .map_err(|e| format!("IO_ERROR: failed to read dir {}: {e}", src.display()))?;
    for entry in entries {
        let entry = entry
            .map_err(|e| format!("IO_ERROR: failed to read dir entry {}: {e}", src.display()))?;
        let path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if path.is_dir() {
            copy_dir_recursive(&path, &dst_path)?;
            continue;
        }

        std::fs::copy(&path, &dst_path).map_err(|e| {
            format!(
                "IO_ERROR: failed to copy {} -> {}: {e}",
                path.display(),
                dst_path.display()
            )
        })?;
    }

    Ok(())
}

/// Removes a directory tree. A missing path is not an error.
pub(crate) fn remove_dir_all_if_exists(dir: &Path) -> Result<(), String> {
    if !dir.exists() {
        return Ok(());
    }
    std::fs::remove_dir_all(dir)
        .map_err(|e| format!("IO_ERROR: failed to remove {}: {e}", dir.display()))
}

pub(crate) fn write_file_atomic(path: &Path, bytes: &[u8]) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let file_name = path.file_name().and_then(|v| v.to_str()).unwrap_or("file");
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));
    let backup_path = path.with_file_name(format!("{file_name}.bak"));

    std::fs::write(&tmp_path, bytes).map_err(|e| {
        format!(
            "IO_ERROR: failed to write temp file {}: {e}",
            tmp_path.display()
        )
    })?;

    if backup_path.exists() {
        let _ = std::fs::remove_file(&backup_path);
    }

    // Windows rename requires target not to exist.
    if path.exists() {
        std::fs::rename(path, &backup_path).map_err(|e| {
            format!("IO_ERROR: failed to back up {}: {e}", path.display())
        })?;
    }

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::rename(&backup_path, path);
        return Err(format!(
            "IO_ERROR: failed to finalize file {}: {e}",
            path.display()
        ));
    }

    if backup_path.exists() {
        let _ = std::fs::remove_file(&backup_path);
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TMP_DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

    pub(crate) fn unique_tmp_dir(prefix: &str) -> PathBuf {
        let seq = TMP_DIR_SEQ.fetch_add(1, Ordering::Relaxed);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let mut dir = std::env::temp_dir();
        dir.push(format!(
            "bezel_tray_{prefix}_{nanos}_{}_{}",
            std::process::id(),
            seq
        ));
        std::fs::create_dir_all(&dir).expect("create tmp dir");
        dir
    }
}
