//! The reconciliation pass.
//!
//! [`reconcile`] turns a flat list of [`RawFeature`]s into a [`Genome`] in
//! one forward pass:
//!
//! 1. every record is classified ([`classify`]); malformed ones are dropped
//!    with a genome warning,
//! 2. mRNAs, CDSs and non-coding features are attached to the tightest
//!    containing gene, spoofing genes for orphans when asked to,
//! 3. mRNAs are paired with CDSs sharing their internal boundaries,
//! 4. identifiers are assigned ([`IdentifierAssigner`]) and the collected
//!    warnings are rendered ([`WarningCollector`]),
//! 5. the genome is assembled.
//!
//! All state is owned by one [`Reconciler`] and dropped with it.

mod assemble;
mod classify;
mod hierarchy;
mod ids;
mod warnings;

use std::collections::BTreeMap;

use hashbrown::HashMap;
use log::{
    debug,
    info,
    warn,
};

pub use assemble::{
    NON_CODING_GENE,
    PROTEIN_ENCODING_GENE,
};
pub use classify::{
    classify,
    NON_CODING_TYPES,
};
pub use hierarchy::{
    find_parent,
    ParentMatch,
};
pub use ids::{
    Assigned,
    IdentifierAssigner,
};
pub use warnings::WarningCollector;

use self::classify::is_parent_candidate;
use self::hierarchy::{
    Draft,
    Handle,
    Hierarchy,
    Note,
};
use crate::config::ReconcileConfig;
use crate::data_structs::{
    FeatureKind,
    Genome,
    RawFeature,
};
use crate::error::ReconError;

/// Reconciles a flat record list into a genome hierarchy.
pub fn reconcile(
    records: Vec<RawFeature>,
    config: &ReconcileConfig,
) -> Result<Genome, ReconError> {
    Reconciler::new(config).run(records)
}

/// Mutable state of a single reconciliation pass.
pub struct Reconciler<'a> {
    config:   &'a ReconcileConfig,
    ids:      IdentifierAssigner,
    warnings: WarningCollector,
    /// Sibling counters keyed by parent gene and type tag.
    siblings: HashMap<(usize, String), usize>,
    counts:   BTreeMap<String, usize>,
}

impl<'a> Reconciler<'a> {
    pub fn new(config: &'a ReconcileConfig) -> Self {
        Self {
            config,
            ids: IdentifierAssigner::new(config.generate_ids_if_needed),
            warnings: WarningCollector::new(),
            siblings: HashMap::new(),
            counts: BTreeMap::new(),
        }
    }

    pub fn run(
        mut self,
        records: Vec<RawFeature>,
    ) -> Result<Genome, ReconError> {
        let n_records = records.len();
        info!("Reconciling {} feature records", n_records);

        let mut hierarchy = self.classify_all(records)?;
        hierarchy.resolve_parents(self.config.generate_missing_genes, n_records);
        hierarchy.pair_transcripts();

        self.assign_ids(&mut hierarchy)?;
        self.render_notes(&hierarchy);

        let genome = assemble::assemble(
            hierarchy,
            &self.warnings,
            self.counts,
            self.config.genetic_code,
        );
        info!(
            "Reconciled {} coding genes, {} non-coding features, {} mRNAs, {} CDSs ({} features with warnings, suspect: {})",
            genome.features().len(),
            genome.non_coding_features().len(),
            genome.mrnas().len(),
            genome.cdss().len(),
            self.warnings.n_flagged(),
            genome.suspect()
        );
        Ok(genome)
    }

    fn classify_all(
        &mut self,
        records: Vec<RawFeature>,
    ) -> Result<Hierarchy, ReconError> {
        let mut genes = Vec::new();
        let mut mrnas = Vec::new();
        let mut cdss = Vec::new();
        let mut others = Vec::new();
        let mut dropped = 0usize;

        for (index, record) in records.into_iter().enumerate() {
            let kind = match classify(&record, index) {
                Ok(kind) => kind,
                Err(e) => {
                    warn!("{}", e);
                    self.warnings.add_genome(e.to_string());
                    dropped += 1;
                    continue;
                },
            };
            *self
                .counts
                .entry(record.feature_type.to_string())
                .or_insert(0) += 1;

            let parent_candidate = is_parent_candidate(&record, kind);
            let Some(draft) = Draft::new(index, kind, record)
            else {
                dropped += 1;
                continue;
            };
            if draft.trans_spliced {
                debug!("Record #{} spans several contigs or strands", index + 1);
            }
            match kind {
                _ if parent_candidate => genes.push(draft),
                FeatureKind::Transcript => mrnas.push(draft),
                FeatureKind::CodingSequence => cdss.push(draft),
                _ => others.push(draft),
            }
        }

        if genes.is_empty() && mrnas.is_empty() && cdss.is_empty() && others.is_empty() {
            return Err(ReconError::EmptyInput { dropped });
        }
        debug!(
            "Classified {} genes, {} mRNAs, {} CDSs, {} other features; {} dropped",
            genes.len(),
            mrnas.len(),
            cdss.len(),
            others.len(),
            dropped
        );
        Ok(Hierarchy::new(genes, mrnas, cdss, others))
    }

    /// Assigns ids to genes (input genes, then spoofed ones), mRNAs, CDSs
    /// and other features, in that order.
    fn assign_ids(
        &mut self,
        hierarchy: &mut Hierarchy,
    ) -> Result<(), ReconError> {
        for g in 0..hierarchy.genes.len() {
            let gene = &hierarchy.genes[g];
            let raw = match (&gene.draft.record.id, gene.spoofed_for) {
                (Some(id), _) => Some(id.clone()),
                (None, Some(orphan)) => hierarchy
                    .child(orphan)
                    .and_then(|c| c.draft.record.id.as_ref())
                    .map(|id| format!("{}_gene", id)),
                (None, None) => None,
            };
            let name = gene.draft.record.display_name(gene.draft.order);
            let assigned = self.ids.assign(raw.as_deref(), "gene", None, &name)?;
            self.settle(&mut hierarchy.genes[g].draft, assigned);
        }

        let gene_ids = hierarchy
            .genes
            .iter()
            .map(|g| g.draft.id.clone())
            .collect::<Vec<_>>();

        for nodes in [
            &mut hierarchy.mrnas,
            &mut hierarchy.cdss,
            &mut hierarchy.others,
        ] {
            for node in nodes.iter_mut() {
                let type_tag = node.draft.record.feature_type.to_string();
                let parent = node
                    .parent
                    .and_then(|g| gene_ids.get(g).map(|id| (g, id)));
                let parent = parent.map(|(g, id)| (id.as_str(), self.next_sibling(g, &type_tag)));
                let name = node.draft.record.display_name(node.draft.order);
                let assigned = self.ids.assign(
                    node.draft.record.id.as_deref(),
                    &type_tag,
                    parent,
                    &name,
                )?;
                self.settle(&mut node.draft, assigned);
            }
        }
        Ok(())
    }

    fn next_sibling(
        &mut self,
        gene: usize,
        type_tag: &str,
    ) -> usize {
        let counter = self
            .siblings
            .entry((gene, type_tag.to_string()))
            .or_insert(0);
        *counter += 1;
        *counter
    }

    fn settle(
        &mut self,
        draft: &mut Draft,
        assigned: Assigned,
    ) {
        if let Some(original) = assigned.renamed_from {
            self.warnings.add_genome(format!(
                "Duplicate feature identifier {} was renamed to {}",
                original, assigned.id
            ));
            self.warnings.mark_suspect();
            draft.suspect = true;
        }
        draft.id = assigned.id;
    }

    fn render_notes(
        &mut self,
        hierarchy: &Hierarchy,
    ) {
        for (handle, note) in &hierarchy.notes {
            let text = match note {
                Note::NoParent => {
                    format!("Unable to find parent gene for {}", hierarchy.id_of(*handle))
                },
                Note::AmbiguousParent { chosen, rejected } => format!(
                    "Ambiguous parent gene: {} and {} have identical footprints, {} was chosen",
                    hierarchy.id_of(Handle::Gene(*chosen)),
                    hierarchy.id_of(Handle::Gene(*rejected)),
                    hierarchy.id_of(Handle::Gene(*chosen))
                ),
                Note::SpoofedFor(orphan) => format!(
                    "Gene was generated to hold orphan feature {}",
                    hierarchy.id_of(*orphan)
                ),
                Note::MrnaBoundaryMismatch => MRNA_BOUNDARY_MISMATCH.to_string(),
                Note::CdsBoundaryMismatch { mrna } => format!(
                    "{}: {}",
                    CDS_BOUNDARY_MISMATCH,
                    hierarchy.id_of(Handle::Mrna(*mrna))
                ),
            };
            self.warnings
                .add(hierarchy.id_of(*handle), text);
        }
    }
}

/// Warning on an mRNA whose contained CDSs all disagree with its exon
/// structure.
pub const MRNA_BOUNDARY_MISMATCH: &str =
    "coding sequence does not share internal boundaries with messenger transcript";
/// Prefix of the warning on a CDS left unpaired because of an exon structure
/// mismatch; followed by the mRNA id.
pub const CDS_BOUNDARY_MISMATCH: &str =
    "no corresponding mRNA found with matching internal boundaries";
