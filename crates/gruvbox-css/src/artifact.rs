//! Generated files and the output directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::BuildError;

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    file_name: String,
    contents: String,
}

impl Artifact {
    pub fn new(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}

/// Writes every artifact into `dir`, creating it if needed.
///
/// Stops at the first failure; files written before it are left in place.
pub fn write_all(dir: &Path, artifacts: &[Artifact]) -> Result<(), BuildError> {
    fs::create_dir_all(dir).map_err(|e| BuildError::io(dir, e))?;
    for artifact in artifacts {
        let path = artifact.path_in(dir);
        fs::write(&path, &artifact.contents).map_err(|e| BuildError::io(&path, e))?;
        info!(path = %path.display(), bytes = artifact.contents.len(), "wrote artifact");
    }
    Ok(())
}

/// Returns the artifacts whose file in `dir` is missing or differs.
pub fn stale_artifacts<'a>(
    dir: &Path,
    artifacts: &'a [Artifact],
) -> Result<Vec<&'a Artifact>, BuildError> {
    let mut stale = Vec::new();
    for artifact in artifacts {
        let path = artifact.path_in(dir);
        match fs::read_to_string(&path) {
            Ok(existing) if existing == artifact.contents => {
                debug!(path = %path.display(), "up to date");
            }
            Ok(_) => stale.push(artifact),
            Err(e) if e.kind() == ErrorKind::NotFound => stale.push(artifact),
            Err(e) => return Err(BuildError::io(&path, e)),
        }
    }
    Ok(stale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Artifact> {
        vec![
            Artifact::new("a.css", ":root{--a:1}"),
            Artifact::new("a.js", "export const A = \"--a\";"),
        ]
    }

    #[test]
    fn test_write_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist/css");
        write_all(&out, &sample()).unwrap();
        assert_eq!(
            fs::read_to_string(out.join("a.css")).unwrap(),
            ":root{--a:1}"
        );
        assert!(out.join("a.js").exists());
    }

    #[test]
    fn test_stale_detection() {
        let tmp = TempDir::new().unwrap();
        let artifacts = sample();
        assert_eq!(stale_artifacts(tmp.path(), &artifacts).unwrap().len(), 2);

        write_all(tmp.path(), &artifacts).unwrap();
        assert!(stale_artifacts(tmp.path(), &artifacts).unwrap().is_empty());

        fs::write(tmp.path().join("a.js"), "changed").unwrap();
        let stale = stale_artifacts(tmp.path(), &artifacts).unwrap();
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].file_name(), "a.js");
    }

    #[test]
    fn test_write_into_file_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let err = write_all(&blocker, &sample()).unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }
}
