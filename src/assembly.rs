//! Stand-ins for the genome download and custom assembly scripts.  Both only
//! create empty files where the real tools would put their outputs.

use std::path::{Path, PathBuf};

use super::artifact::OutputArtifact;

#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub assembly_accession: String,
    pub species: String,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CustomAssemblyRequest {
    pub assembly_accession: String,
    pub fasta_file: PathBuf,
    pub report_file: PathBuf,
    pub no_rename: bool,
}

/// Directory name used for a species, e.g. `Homo sapiens` -> `homo_sapiens`
pub fn species_dir(species: &str) -> String {
    species.to_lowercase().replace(' ', "_")
}

pub fn plan_download(req: &DownloadRequest) -> Vec<OutputArtifact> {
    let dir = req
        .output_dir
        .join(species_dir(&req.species))
        .join(&req.assembly_accession);
    debug!("Genome download directory: {}", dir.display());
    let acc = &req.assembly_accession;
    vec![
        OutputArtifact::touch(dir.join(format!("{}.fa", acc))).with_parents(),
        OutputArtifact::touch(dir.join(format!("{}_assembly_report.txt", acc))).with_parents(),
    ]
}

pub fn plan_custom_assembly(req: &CustomAssemblyRequest) -> anyhow::Result<Vec<OutputArtifact>> {
    debug!(
        "Custom assembly for {} (no rename: {})",
        req.assembly_accession, req.no_rename
    );
    Ok(vec![
        OutputArtifact::touch(custom_path(&req.fasta_file, ".fa", "_custom.fa")?),
        OutputArtifact::touch(custom_path(&req.report_file, ".txt", "_custom.txt")?),
    ])
}

// Every occurrence of `from` in the path is replaced, not only the extension
fn custom_path(p: &Path, from: &str, to: &str) -> anyhow::Result<PathBuf> {
    let s = p
        .to_str()
        .ok_or_else(|| anyhow!("Path {} is not valid UTF-8", p.display()))?;
    Ok(PathBuf::from(s.replace(from, to)))
}
