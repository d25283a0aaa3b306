use crate::error::Result;
use crate::types::Graph;
use std::fs;
use std::path::{Path, PathBuf};

/// Destination for the rendered graph document.
///
/// Name resolution (uniqueness, versioning) lives behind this trait so
/// the transform stays testable without a real directory layout.
pub trait OutputSink {
    /// Write `contents` under the requested name, returning the path
    /// actually used.
    fn write(&self, name: &str, contents: &str) -> Result<PathBuf>;
}

/// Sink that never overwrites: the requested name if free, else
/// `<stem>_1.<ext>`, `<stem>_2.<ext>`, and so on.
pub struct VersionedDir {
    dir: PathBuf,
}

impl VersionedDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn next_available(&self, name: &str) -> PathBuf {
        let candidate = self.dir.join(name);
        if !candidate.exists() {
            return candidate;
        }

        let (stem, ext) = match name.rsplit_once('.') {
            Some((stem, ext)) => (stem, Some(ext)),
            None => (name, None),
        };
        for n in 1u32.. {
            let versioned = match ext {
                Some(ext) => format!("{stem}_{n}.{ext}"),
                None => format!("{stem}_{n}"),
            };
            let candidate = self.dir.join(versioned);
            if !candidate.exists() {
                return candidate;
            }
        }
        unreachable!("ran out of version numbers")
    }
}

impl OutputSink for VersionedDir {
    fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.next_available(name);
        fs::write(&path, contents)?;
        log::debug!("Wrote {}", path.display());
        Ok(path)
    }
}

/// Serialize `graph` as indented JSON (`nodes` before `links`, struct
/// field order throughout) and hand the full text to the sink in one
/// call. I/O failures propagate.
pub fn write_graph(graph: &Graph, sink: &dyn OutputSink, name: &str) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(graph)?;
    sink.write(name, &json)
}
