use crate::classify::DocType;
use crate::error::{GraphError, Result};
use crate::types::{ActivityRow, EntityRow, Graph, GraphLink, GraphNode, LinkKind};

/// Group code for activity nodes; entity groups come from
/// [`DocType::group`].
const ACTIVITY_GROUP: u32 = 5;

/// How activity node ids are offset past the entity id range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityOffset {
    /// Offset by the number of entity rows, computed independently of
    /// the entity loop. Yields dense node ids whenever entity ids
    /// occupy `1..=N`.
    #[default]
    EntityCount,

    /// Offset by the zero-based id of the last entity row processed.
    /// This is what the legacy exporter did by reusing its entity loop
    /// counter; it drifts by the size of the gap when entity ids are
    /// non-contiguous.
    TrailingEntityId,
}

/// What to do when an id string fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Fail the whole build.
    Propagate,
    /// Drop the link that needed the id and carry on.
    Ignore,
}

/// Builds the node-link graph from entity rows followed by activity
/// rows, both in input order.
///
/// Link endpoints are emitted as given: a reference to an id with no
/// corresponding node produces a dangling link in the output, exactly
/// as the rows describe it.
pub struct GraphBuilder {
    offset_mode: ActivityOffset,
    nodes: Vec<GraphNode>,
    links: Vec<GraphLink>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::with_offset(ActivityOffset::default())
    }

    pub fn with_offset(offset_mode: ActivityOffset) -> Self {
        Self {
            offset_mode,
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Build the graph. Consumes the builder; the result is the only
    /// artifact.
    pub fn build(mut self, entities: &[EntityRow], activities: &[ActivityRow]) -> Result<Graph> {
        // Zero-based id of the last entity processed; the legacy
        // offset mode reads this after the loop.
        let mut trailing = 0i64;

        for row in entities {
            let id = parse_id("entity", &row.id)? - 1;
            trailing = id;

            self.nodes.push(GraphNode {
                name: row.name.clone(),
                group: DocType::of(&row.name).group(),
                id,
            });

            for r in &row.derived_from {
                let source = parse_id("derivedFrom", r)? - 1;
                self.push_link(source, id, LinkKind::DerivedFrom);
            }
            for r in &row.generated_by {
                let source = parse_id("generatedBy", r)? - 1;
                self.push_link(source, id, LinkKind::GeneratedBy);
            }
        }

        let offset = match self.offset_mode {
            ActivityOffset::EntityCount => entities.len() as i64 - 1,
            ActivityOffset::TrailingEntityId => trailing,
        };

        for row in activities {
            let activity_id = offset + parse_id("activity", &row.id)?;

            self.nodes.push(GraphNode {
                name: row.process.clone(),
                group: ACTIVITY_GROUP,
                id: activity_id,
            });

            for r in &row.input_entities {
                let input = parse_id("inputEntities", r)? - 1;
                self.push_link(input, activity_id, LinkKind::ActivityInput);
            }
            for r in &row.output_entities {
                let output = parse_id("outputEntities", r)? - 1;
                self.push_link(activity_id, output, LinkKind::ActivityOutput);
            }

            // The two dependency fields carry different parse
            // policies: a bad dependencyActivityId drops that one
            // link, a bad relatedActivityId fails the build.
            if let Some(dep) = present(&row.dependency_activity_id) {
                self.dependency_link(
                    dep,
                    "dependencyActivityId",
                    offset,
                    activity_id,
                    ParsePolicy::Ignore,
                )?;
            } else if let Some(rel) = present(&row.related_activity_id) {
                self.dependency_link(
                    rel,
                    "relatedActivityId",
                    offset,
                    activity_id,
                    ParsePolicy::Propagate,
                )?;
            }
        }

        log::info!(
            "Built provenance graph: {} nodes, {} links",
            self.nodes.len(),
            self.links.len()
        );

        Ok(Graph {
            nodes: self.nodes,
            links: self.links,
        })
    }

    fn dependency_link(
        &mut self,
        raw: &str,
        field: &'static str,
        offset: i64,
        activity_id: i64,
        policy: ParsePolicy,
    ) -> Result<()> {
        match (parse_id(field, raw), policy) {
            (Ok(dep), _) => {
                self.push_link(dep + offset, activity_id, LinkKind::Dependency);
                Ok(())
            }
            (Err(err), ParsePolicy::Ignore) => {
                log::warn!("Dropping dependency link for node {activity_id}: {err}");
                Ok(())
            }
            (Err(err), ParsePolicy::Propagate) => Err(err),
        }
    }

    fn push_link(&mut self, source: i64, target: i64, kind: LinkKind) {
        self.links.push(GraphLink {
            source,
            target,
            value: kind.value(),
        });
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A blank spreadsheet cell exports as an empty string; treat it as
/// absent.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn parse_id(field: &'static str, raw: &str) -> Result<i64> {
    raw.parse().map_err(|source| GraphError::InvalidId {
        field,
        value: raw.to_string(),
        source,
    })
}
