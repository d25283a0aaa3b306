use serde::{Deserialize, Serialize};

/// Entity row as exported from the provenance table.
///
/// Ids arrive 1-based and string-encoded; the builder renumbers them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRow {
    /// 1-based id, string-encoded as supplied.
    pub id: String,

    /// Path-like location (e.g., "run1.mdl"); drives classification.
    pub name: String,

    /// 1-based ids of the entities this one was derived from.
    #[serde(default)]
    pub derived_from: Vec<String>,

    /// 1-based ids of the activities that generated this entity.
    #[serde(default)]
    pub generated_by: Vec<String>,
}

/// Activity row as exported from the provenance table.
///
/// Activities are numbered independently from entities, also 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRow {
    /// 1-based id, string-encoded as supplied.
    pub id: String,

    /// Display name of the process.
    pub process: String,

    /// 1-based entity ids consumed by this activity.
    #[serde(default)]
    pub input_entities: Vec<String>,

    /// 1-based entity ids produced by this activity.
    #[serde(default)]
    pub output_entities: Vec<String>,

    /// 1-based id of the activity this one depends on. A blank cell
    /// exports as an empty string, which counts as absent.
    #[serde(default)]
    pub dependency_activity_id: Option<String>,

    /// Fallback dependency reference, consulted only when
    /// `dependency_activity_id` is absent.
    #[serde(default)]
    pub related_activity_id: Option<String>,
}

/// Relation a link was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    DerivedFrom,
    GeneratedBy,
    ActivityInput,
    ActivityOutput,
    Dependency,
}

impl LinkKind {
    /// Fixed link-type code consumed by the visualization layer.
    pub const fn value(self) -> u32 {
        match self {
            LinkKind::DerivedFrom => 0,
            LinkKind::GeneratedBy => 1,
            LinkKind::ActivityInput => 2,
            LinkKind::ActivityOutput => 3,
            LinkKind::Dependency => 4,
        }
    }
}

/// Node in the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: String,

    /// Category code 0-5; 5 marks an activity.
    pub group: u32,

    /// Dense zero-based node id.
    pub id: i64,
}

/// Link in the output document. Endpoints are node ids, not indices;
/// nothing checks that they resolve to an emitted node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: i64,
    pub target: i64,

    /// Link-type code 0-4, see [`LinkKind`].
    pub value: u32,
}

/// The node-link document. Field order is load-bearing: the serialized
/// object lists `nodes` before `links`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl Graph {
    /// Get node count
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get link count
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
