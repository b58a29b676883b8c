use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;

use super::artifact::OutputArtifact;

/// Outcome of writing a set of artifacts.  Failed writes do not stop later ones.
#[derive(Debug, Default)]
pub struct WriteReport {
    written: Vec<PathBuf>,
    failures: Vec<(PathBuf, anyhow::Error)>,
}

impl WriteReport {
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
    pub fn failures(&self) -> &[(PathBuf, anyhow::Error)] {
        &self.failures
    }
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Write each artifact, resolving relative paths against `work_dir`.
/// Existing files are truncated.
pub fn write_artifacts(work_dir: &Path, artifacts: &[OutputArtifact]) -> WriteReport {
    let mut report = WriteReport::default();
    for a in artifacts {
        let path = work_dir.join(a.path());
        match write_artifact(&path, a) {
            Ok(()) => {
                debug!("Wrote {}", path.display());
                report.written.push(path)
            }
            Err(e) => {
                error!("{:#}", e);
                report.failures.push((path, e))
            }
        }
    }
    report
}

fn write_artifact(path: &Path, a: &OutputArtifact) -> anyhow::Result<()> {
    if a.make_parents() {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Error creating directory {}", dir.display()))?;
        }
    }
    let mut wrt = BufWriter::new(
        File::create(path).with_context(|| format!("Error creating {}", path.display()))?,
    );
    wrt.write_all(a.content().as_bytes())
        .and_then(|_| wrt.flush())
        .with_context(|| format!("Error writing to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_and_overwrite() -> Result<()> {
        let dir = TempDir::new()?;
        let arts = [OutputArtifact::new("a.vcf", "remapped eva variants\n")];

        fs::write(dir.path().join("a.vcf"), "old content that is longer\n")?;
        for _ in 0..2 {
            let report = write_artifacts(dir.path(), &arts);
            assert!(report.is_ok());
            assert_eq!(report.written(), &[dir.path().join("a.vcf")]);
        }
        assert_eq!(
            fs::read_to_string(dir.path().join("a.vcf"))?,
            "remapped eva variants\n"
        );
        Ok(())
    }

    #[test]
    fn test_failure_does_not_stop_later_writes() -> Result<()> {
        let dir = TempDir::new()?;
        let arts = [
            OutputArtifact::new("missing/a.vcf", "x\n"),
            OutputArtifact::new("b.vcf", "y\n"),
        ];
        let report = write_artifacts(dir.path(), &arts);

        assert!(!report.is_ok());
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].0, dir.path().join("missing/a.vcf"));
        assert!(report.failures()[0].1.to_string().contains("Error creating"));
        assert!(!dir.path().join("missing").exists());
        assert_eq!(report.written(), &[dir.path().join("b.vcf")]);
        assert_eq!(fs::read_to_string(dir.path().join("b.vcf"))?, "y\n");
        Ok(())
    }

    #[test]
    fn test_touch_with_parents() -> Result<()> {
        let dir = TempDir::new()?;
        let arts = [OutputArtifact::touch("x/y/z.fa").with_parents()];
        let report = write_artifacts(dir.path(), &arts);
        assert!(report.is_ok());
        let p = dir.path().join("x/y/z.fa");
        assert!(p.is_file());
        assert_eq!(fs::metadata(p)?.len(), 0);

        // Second run with the directory already present
        assert!(write_artifacts(dir.path(), &arts).is_ok());
        Ok(())
    }

    #[test]
    fn test_absolute_paths_ignore_work_dir() -> Result<()> {
        let dir = TempDir::new()?;
        let abs = dir.path().join("report.txt");
        let report = write_artifacts(Path::new("/nonexistent"), &[OutputArtifact::new(&abs, "z\n")]);
        assert!(report.is_ok());
        assert_eq!(fs::read_to_string(abs)?, "z\n");
        Ok(())
    }
}
