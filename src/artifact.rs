use std::path::{Path, PathBuf};

/// A file to produce and the exact text it should contain.  Empty content
/// just touches the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    path: PathBuf,
    content: &'static str,
    make_parents: bool,
}

impl OutputArtifact {
    pub fn new<P: Into<PathBuf>>(path: P, content: &'static str) -> Self {
        Self {
            path: path.into(),
            content,
            make_parents: false,
        }
    }

    pub fn touch<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(path, "")
    }

    /// Create any missing parent directories before writing
    pub fn with_parents(mut self) -> Self {
        self.make_parents = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn content(&self) -> &'static str {
        self.content
    }
    pub fn make_parents(&self) -> bool {
        self.make_parents
    }
}

/// What a single run of a fake tool does: the line echoed to stdout (if the
/// tool echoes its command line) and the files it leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    echo: Option<String>,
    artifacts: Vec<OutputArtifact>,
}

impl Invocation {
    pub fn new(echo: Option<String>, artifacts: Vec<OutputArtifact>) -> Self {
        Self { echo, artifacts }
    }

    pub fn echo(&self) -> Option<&str> {
        self.echo.as_deref()
    }
    pub fn artifacts(&self) -> &[OutputArtifact] {
        &self.artifacts
    }
}

/// Reproduce the command line a real tool would have been called with
pub fn echo_line<S: AsRef<str>>(label: &str, args: &[S]) -> String {
    args.iter().fold(label.to_owned(), |mut s, a| {
        s.push(' ');
        s.push_str(a.as_ref());
        s
    })
}
