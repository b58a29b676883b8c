use std::path::Path;

use super::{
    artifact::{echo_line, Invocation},
    assembly::{self, CustomAssemblyRequest, DownloadRequest},
    config::Config,
    output::{write_artifacts, WriteReport},
    pipeline,
};

/// The tool being impersonated, with the arguments it was called with
#[derive(Debug, Clone)]
pub enum Tool {
    Clustering(Vec<String>),
    Extraction(Vec<String>),
    ExtractionFasta(Vec<String>),
    GenomeDownloader(DownloadRequest),
    CustomAssembly(CustomAssemblyRequest),
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clustering(_) => "clustering",
            Self::Extraction(_) => "extraction",
            Self::ExtractionFasta(_) => "extraction-fasta",
            Self::GenomeDownloader(_) => "genome-downloader",
            Self::CustomAssembly(_) => "custom-assembly",
        }
    }

    /// Command line a jar stand-in reports before doing anything else
    pub fn echo(&self) -> Option<String> {
        match self {
            Self::Clustering(args) => Some(echo_line(pipeline::CLUSTERING_LABEL, args)),
            Self::Extraction(args) | Self::ExtractionFasta(args) => {
                Some(echo_line(pipeline::EXTRACTION_LABEL, args))
            }
            Self::GenomeDownloader(_) | Self::CustomAssembly(_) => None,
        }
    }

    /// Work out what the tool would print and write, without touching the filesystem
    pub fn plan(&self, work_dir: &Path) -> anyhow::Result<Invocation> {
        let artifacts = match self {
            Self::Clustering(_) => pipeline::plan_clustering(work_dir),
            Self::Extraction(args) => pipeline::plan_extraction(args)?,
            Self::ExtractionFasta(args) => pipeline::plan_extraction_fasta(args)?,
            Self::GenomeDownloader(req) => assembly::plan_download(req),
            Self::CustomAssembly(req) => assembly::plan_custom_assembly(req)?,
        };
        Ok(Invocation::new(self.echo(), artifacts))
    }
}

/// Run the selected tool.  The echo line is printed first, even if planning
/// then fails.  Only a planning error (e.g. a missing parameter) is returned as
/// an error; write failures are logged and left in the report.
pub fn run(cfg: &Config) -> anyhow::Result<WriteReport> {
    let tool = cfg.tool();
    info!("Running fake {}", tool.name());
    if let Some(s) = tool.echo() {
        println!("{}", s);
    }

    let inv = tool
        .plan(cfg.work_dir())
        .map_err(|e| e.context(format!("Cannot run fake {}", tool.name())))?;

    let report = write_artifacts(cfg.work_dir(), inv.artifacts());
    if report.is_ok() {
        info!("Wrote {} file(s)", report.written().len());
    } else {
        warn!(
            "Wrote {} file(s), {} failed",
            report.written().len(),
            report.failures().len()
        );
    }
    Ok(report)
}
