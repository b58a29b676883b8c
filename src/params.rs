use std::{collections::HashMap, fmt};

/// Suffix appended to a FASTA file by the custom assembly step
pub const CUSTOM_FASTA_SUFFIX: &str = "_custom.fa";

/// Named parameters recognized in `--key=value` arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Fasta,
    Taxonomy,
}

impl ParamKey {
    pub const ALL: [ParamKey; 2] = [ParamKey::Fasta, ParamKey::Taxonomy];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Fasta => "parameters.fasta",
            Self::Taxonomy => "parameters.taxonomy",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Fasta => "--parameters.fasta=",
            Self::Taxonomy => "--parameters.taxonomy=",
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values of the recognized parameters found in an argument list.
/// Anything else in the list is ignored.
#[derive(Debug, Default)]
pub struct NamedParameters {
    values: HashMap<ParamKey, String>,
}

impl NamedParameters {
    /// Scan `args` in order.  If a key is repeated the last value wins.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let mut values = HashMap::new();
        for arg in args.iter().map(|s| s.as_ref()) {
            for k in ParamKey::ALL {
                if let Some(v) = arg.strip_prefix(k.prefix()) {
                    trace!("Found parameter {} = {}", k, v);
                    values.insert(k, v.to_owned());
                }
            }
        }
        Self { values }
    }

    pub fn get(&self, k: ParamKey) -> Option<&str> {
        self.values.get(&k).map(|s| s.as_str())
    }

    pub fn require(&self, k: ParamKey) -> anyhow::Result<&str> {
        self.get(k)
            .ok_or_else(|| anyhow!("Missing required argument {}<VALUE>", k.prefix()))
    }

    /// Accession taken from the fasta parameter, i.e. the file name without the
    /// custom assembly suffix.  A value without the suffix is used as is.
    pub fn fasta_stem(&self) -> anyhow::Result<&str> {
        let fasta = self.require(ParamKey::Fasta)?;
        Ok(match fasta.strip_suffix(CUSTOM_FASTA_SUFFIX) {
            Some(stem) => stem,
            None => {
                warn!(
                    "FASTA parameter {} does not end with {}",
                    fasta, CUSTOM_FASTA_SUFFIX
                );
                fasta
            }
        })
    }
}
