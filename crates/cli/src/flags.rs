use clap::ValueEnum;

use provmap_graph::ActivityOffset;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum OffsetFlag {
    /// Offset activity ids by the entity row count (dense node ids).
    EntityCount,
    /// Offset by the last entity's zero-based id, as the legacy
    /// exporter did.
    TrailingId,
}

impl OffsetFlag {
    pub(crate) const fn as_domain(self) -> ActivityOffset {
        match self {
            OffsetFlag::EntityCount => ActivityOffset::EntityCount,
            OffsetFlag::TrailingId => ActivityOffset::TrailingEntityId,
        }
    }
}
