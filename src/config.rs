use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ArgMatches;

use super::{
    assembly::{CustomAssemblyRequest, DownloadRequest},
    cli::cli_model,
    tool::Tool,
    utils::init_log,
};

#[derive(Debug)]
pub struct Config {
    tool: Tool,
    // Directory relative output paths are resolved against.  Taken from the
    // current directory at startup.
    work_dir: PathBuf,
}

impl Config {
    pub fn new(tool: Tool, work_dir: &Path) -> Self {
        Self {
            tool,
            work_dir: work_dir.to_owned(),
        }
    }
    pub fn tool(&self) -> &Tool {
        &self.tool
    }
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }
}

pub fn handle_cli() -> anyhow::Result<Config> {
    // Get matches from command line
    let m = cli_model().get_matches();

    // Setup logging
    init_log(&m)?;

    debug!("Processing command line options");

    let tool = tool_from_matches(&m)?;
    let work_dir = std::env::current_dir().with_context(|| "Could not get current directory")?;

    Ok(Config::new(tool, &work_dir))
}

fn tool_from_matches(m: &ArgMatches) -> anyhow::Result<Tool> {
    let (name, sub) = m
        .subcommand()
        .ok_or_else(|| anyhow!("No tool selected"))?;

    let passthrough = || -> Vec<String> {
        sub.get_many::<String>("args")
            .map(|v| v.cloned().collect())
            .unwrap_or_default()
    };
    let accession = || -> anyhow::Result<String> {
        sub.get_one::<String>("assembly_accession")
            .cloned()
            .ok_or_else(|| anyhow!("Missing assembly accession"))
    };
    let path = |id: &str| -> anyhow::Result<PathBuf> {
        sub.get_one::<PathBuf>(id)
            .cloned()
            .ok_or_else(|| anyhow!("Missing {} option", id))
    };

    Ok(match name {
        "clustering" => Tool::Clustering(passthrough()),
        "extraction" => Tool::Extraction(passthrough()),
        "extraction-fasta" => Tool::ExtractionFasta(passthrough()),
        "genome-downloader" => Tool::GenomeDownloader(DownloadRequest {
            assembly_accession: accession()?,
            species: sub
                .get_one::<String>("species")
                .cloned()
                .ok_or_else(|| anyhow!("Missing species"))?,
            output_dir: path("output_directory")?,
        }),
        "custom-assembly" => Tool::CustomAssembly(CustomAssemblyRequest {
            assembly_accession: accession()?,
            fasta_file: path("fasta_file")?,
            report_file: path("report_file")?,
            no_rename: sub.get_flag("no_rename"),
        }),
        s => return Err(anyhow!("Unknown tool {}", s)),
    })
}
