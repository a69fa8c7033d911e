use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Serialize `value` as YAML and swap it into `path` in one rename, so a
/// reader never sees a half-written config.
pub fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let data = serde_yaml::to_string(value)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut staged = tempfile::Builder::new()
        .prefix(".config-")
        .suffix(".yaml")
        .tempfile_in(dir)?;
    staged.write_all(data.as_bytes())?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".submit/config.yaml");
        let value = BTreeMap::from([("editor", "vim")]);
        write_yaml(&path, &value).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "editor: vim\n");
    }

    #[test]
    fn replaces_existing_file_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "editor: nano\n").unwrap();

        write_yaml(&path, &BTreeMap::from([("editor", "vi")])).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "editor: vi\n");
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
