//! # Provmap Graph
//!
//! Turns tabular provenance records into the node-link document a
//! force-directed visualization consumes.
//!
//! ## Architecture
//!
//! ```text
//! EntityRow[] / ActivityRow[]   (RowSource)
//!     │
//!     ├──> Graph Builder
//!     │      ├─ Classify entity names (suffix -> group code)
//!     │      ├─ Renumber 1-based rows to 0-based node ids
//!     │      └─ Emit typed links (derivedFrom, generatedBy, ...)
//!     │
//!     └──> Writer (OutputSink)
//!            ├─ Pretty-printed JSON, `nodes` before `links`
//!            └─ Next-available file name (d3.json, d3_1.json, ...)
//! ```

mod builder;
mod classify;
mod error;
mod source;
mod types;
mod writer;

pub use builder::{ActivityOffset, GraphBuilder, ParsePolicy};
pub use classify::DocType;
pub use error::{GraphError, Result};
pub use source::{JsonRowSource, RowSource};
pub use types::{ActivityRow, EntityRow, Graph, GraphLink, GraphNode, LinkKind};
pub use writer::{write_graph, OutputSink, VersionedDir};
