pub use crate::config::ReconcileConfig;
pub use crate::data_structs::coords::{
    contains,
    footprint,
    internal_boundaries,
    Footprint,
    Segment,
};
pub use crate::data_structs::typedef::{
    ContigName,
    FeatureId,
    PosType,
};
pub use crate::data_structs::{
    Cds,
    DbXref,
    FeatureAttributes,
    FeatureKind,
    Gene,
    Genome,
    Mrna,
    NonCodingFeature,
    RawFeature,
    Strand,
};
pub use crate::error::{
    ReconError,
    RecordError,
};
pub use crate::io::gff::{
    read_gff,
    write_gff,
};
pub use crate::recon::{
    reconcile,
    Reconciler,
    WarningCollector,
};
