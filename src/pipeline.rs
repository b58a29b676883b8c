//! Stand-ins for the clustering and extraction jars.
//!
//! Both echo the command line they were given and write one line of placeholder
//! text per output file.  Only `--parameters.fasta=` and `--parameters.taxonomy=`
//! are looked at; any other argument is echoed and otherwise ignored.

use std::path::Path;

use super::{
    artifact::OutputArtifact,
    params::{NamedParameters, ParamKey},
};

pub const CLUSTERING_LABEL: &str = "java -jar clustering.jar";
pub const EXTRACTION_LABEL: &str = "java -jar extraction.jar";

// The real pipeline takes this from its properties file
pub const RS_REPORT: &str = "GCA_0000001_to_GCA_0000002_rs_report.txt";

pub const CLUSTERED_CONTENT: &str = "clustered variants\n";
pub const DBSNP_CONTENT: &str = "remapped dbsnp variants\n";
pub const EVA_CONTENT: &str = "remapped eva variants\n";

/// Clustering always writes the same report into the work directory,
/// whatever arguments it is given
pub fn plan_clustering(work_dir: &Path) -> Vec<OutputArtifact> {
    let report = work_dir.join(RS_REPORT);
    debug!("Clustering report: {}", report.display());
    vec![OutputArtifact::new(report, CLUSTERED_CONTENT)]
}

/// Extraction taking both the fasta and the taxonomy: outputs are named
/// `<accession>_<taxonomy>_{dbsnp,eva}.vcf`
pub fn plan_extraction<S: AsRef<str>>(args: &[S]) -> anyhow::Result<Vec<OutputArtifact>> {
    let params = NamedParameters::parse(args);
    let accession = params.fasta_stem()?;
    let taxonomy = params.require(ParamKey::Taxonomy)?;
    debug!("Accession: {}, taxonomy: {}", accession, taxonomy);
    Ok(remapped_outputs(&format!("{}_{}", accession, taxonomy)))
}

/// Extraction taking only the fasta: outputs are named `<fasta-stem>_{dbsnp,eva}.vcf`
pub fn plan_extraction_fasta<S: AsRef<str>>(args: &[S]) -> anyhow::Result<Vec<OutputArtifact>> {
    let params = NamedParameters::parse(args);
    let stem = params.fasta_stem()?;
    debug!("Accession: {}", stem);
    Ok(remapped_outputs(stem))
}

fn remapped_outputs(prefix: &str) -> Vec<OutputArtifact> {
    vec![
        OutputArtifact::new(format!("{}_dbsnp.vcf", prefix), DBSNP_CONTENT),
        OutputArtifact::new(format!("{}_eva.vcf", prefix), EVA_CONTENT),
    ]
}
