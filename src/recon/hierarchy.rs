//! Parent resolution and transcript/CDS pairing.
//!
//! Records live in four index-addressed arenas (genes, mRNAs, CDSs and other
//! non-coding features) and refer to each other by position. Identifiers are
//! only known after this stage, so every warning is kept as a [`Note`]
//! addressed by [`Handle`] and rendered once ids are assigned.

use log::debug;

use crate::data_structs::coords::{
    contains,
    footprint,
    internal_boundaries,
    Footprint,
    Segment,
};
use crate::data_structs::typedef::FeatureId;
use crate::data_structs::{
    FeatureKind,
    RawFeature,
};

/// A classified record on its way through the pass.
#[derive(Debug, Clone)]
pub struct Draft {
    /// Input position. Spoofed genes are numbered after the last record.
    pub order:         usize,
    pub kind:          FeatureKind,
    pub record:        RawFeature,
    pub footprint:     Footprint,
    pub trans_spliced: bool,
    pub id:            FeatureId,
    pub suspect:       bool,
}

impl Draft {
    /// Returns `None` for a record without segments.
    pub fn new(
        order: usize,
        kind: FeatureKind,
        record: RawFeature,
    ) -> Option<Self> {
        let footprint = footprint(&record.segments)?;
        let first = record.segments.first()?;
        let trans_spliced = record
            .segments
            .iter()
            .any(|s| !s.same_track(first));
        Some(Self {
            order,
            kind,
            record,
            footprint,
            trans_spliced,
            id: FeatureId::new(),
            suspect: false,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.record.segments
    }
}

#[derive(Debug, Clone)]
pub struct GeneNode {
    pub draft:       Draft,
    pub spoofed_for: Option<Handle>,
    pub mrnas:       Vec<usize>,
    pub cdss:        Vec<usize>,
    pub children:    Vec<usize>,
}

impl GeneNode {
    fn new(draft: Draft) -> Self {
        Self {
            draft,
            spoofed_for: None,
            mrnas: Vec::new(),
            cdss: Vec::new(),
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChildNode {
    pub draft:  Draft,
    pub parent: Option<usize>,
    /// Paired CDS of an mRNA, or paired mRNA of a CDS.
    pub link:   Option<usize>,
}

impl ChildNode {
    fn new(draft: Draft) -> Self {
        Self {
            draft,
            parent: None,
            link: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Gene(usize),
    Mrna(usize),
    Cds(usize),
    Other(usize),
}

/// Warning waiting for identifiers to be assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    NoParent,
    AmbiguousParent { chosen: usize, rejected: usize },
    SpoofedFor(Handle),
    MrnaBoundaryMismatch,
    CdsBoundaryMismatch { mrna: usize },
}

/// Result of a parent search: the chosen gene and the genes that tied with
/// it on footprint size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentMatch {
    pub chosen: Option<usize>,
    pub tied:   Vec<usize>,
}

/// Picks the gene with the smallest footprint among those containing
/// `child`. Ties go to the earliest candidate.
pub fn find_parent<'a, I>(
    candidates: I,
    child: &[Segment],
) -> ParentMatch
where
    I: IntoIterator<Item = (usize, &'a Footprint)>, {
    let containing = candidates
        .into_iter()
        .filter(|(_, fp)| contains(fp, child))
        .collect::<Vec<_>>();
    let Some(&(chosen, best)) = containing
        .iter()
        .min_by_key(|(_, fp)| fp.length())
    else {
        return ParentMatch::default();
    };
    let tied = containing
        .iter()
        .filter(|(idx, fp)| *idx != chosen && fp.length() == best.length())
        .map(|(idx, _)| *idx)
        .collect();
    ParentMatch {
        chosen: Some(chosen),
        tied,
    }
}

#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    pub genes:  Vec<GeneNode>,
    pub mrnas:  Vec<ChildNode>,
    pub cdss:   Vec<ChildNode>,
    pub others: Vec<ChildNode>,
    pub notes:  Vec<(Handle, Note)>,
}

impl Hierarchy {
    pub fn new(
        genes: Vec<Draft>,
        mrnas: Vec<Draft>,
        cdss: Vec<Draft>,
        others: Vec<Draft>,
    ) -> Self {
        Self {
            genes: genes.into_iter().map(GeneNode::new).collect(),
            mrnas: mrnas.into_iter().map(ChildNode::new).collect(),
            cdss: cdss.into_iter().map(ChildNode::new).collect(),
            others: others.into_iter().map(ChildNode::new).collect(),
            notes: Vec::new(),
        }
    }

    pub fn child(
        &self,
        handle: Handle,
    ) -> Option<&ChildNode> {
        match handle {
            Handle::Gene(_) => None,
            Handle::Mrna(i) => self.mrnas.get(i),
            Handle::Cds(i) => self.cdss.get(i),
            Handle::Other(i) => self.others.get(i),
        }
    }

    fn child_mut(
        &mut self,
        handle: Handle,
    ) -> Option<&mut ChildNode> {
        match handle {
            Handle::Gene(_) => None,
            Handle::Mrna(i) => self.mrnas.get_mut(i),
            Handle::Cds(i) => self.cdss.get_mut(i),
            Handle::Other(i) => self.others.get_mut(i),
        }
    }

    /// Final identifier of any entity. Empty before assignment.
    pub fn id_of(
        &self,
        handle: Handle,
    ) -> &str {
        let id = match handle {
            Handle::Gene(i) => self.genes.get(i).map(|g| g.draft.id.as_str()),
            _ => self.child(handle).map(|c| c.draft.id.as_str()),
        };
        id.unwrap_or_default()
    }

    /// Resolves parent genes: all mRNAs first, then CDSs, then the other
    /// non-coding features, each group in input order. Genes spoofed for
    /// orphans take part in later searches. Spoofed genes are numbered from
    /// `next_order`.
    pub fn resolve_parents(
        &mut self,
        generate_missing_genes: bool,
        mut next_order: usize,
    ) {
        let handles = (0..self.mrnas.len())
            .map(Handle::Mrna)
            .chain((0..self.cdss.len()).map(Handle::Cds))
            .chain((0..self.others.len()).map(Handle::Other))
            .collect::<Vec<_>>();

        for handle in handles {
            let found = match self.child(handle) {
                Some(node) => find_parent(
                    self.genes
                        .iter()
                        .enumerate()
                        .map(|(i, g)| (i, &g.draft.footprint)),
                    node.draft.segments(),
                ),
                None => continue,
            };

            match found.chosen {
                Some(gene) => {
                    self.attach(handle, gene);
                    for rejected in found.tied {
                        self.notes.push((
                            handle,
                            Note::AmbiguousParent {
                                chosen: gene,
                                rejected,
                            },
                        ));
                    }
                },
                None if matches!(handle, Handle::Other(_)) => {
                    debug!("{:?} stays a standalone non-coding feature", handle);
                },
                None => {
                    if generate_missing_genes {
                        if let Some(gene) = self.spoof_gene(handle, next_order) {
                            next_order += 1;
                            self.attach(handle, gene);
                        }
                    }
                    self.notes.push((handle, Note::NoParent));
                },
            }
        }
    }

    fn attach(
        &mut self,
        handle: Handle,
        gene: usize,
    ) {
        debug!("{:?} attached to gene #{}", handle, gene);
        if let Some(node) = self.child_mut(handle) {
            node.parent = Some(gene);
        }
        let Some(parent) = self.genes.get_mut(gene)
        else {
            return;
        };
        match handle {
            Handle::Mrna(i) => parent.mrnas.push(i),
            Handle::Cds(i) => parent.cdss.push(i),
            Handle::Other(i) => parent.children.push(i),
            Handle::Gene(_) => {},
        }
    }

    /// Creates a gene covering the orphan's footprint and returns its index.
    fn spoof_gene(
        &mut self,
        orphan: Handle,
        order: usize,
    ) -> Option<usize> {
        let node = self.child(orphan)?;
        let span = node.draft.footprint.clone();
        let record = RawFeature::new("gene", vec![span.as_segment()]);
        let mut gene = GeneNode::new(Draft::new(order, FeatureKind::CodingGene, record)?);
        gene.spoofed_for = Some(orphan);
        debug!("Spoofing gene at {} for {:?}", span, orphan);

        let index = self.genes.len();
        self.genes.push(gene);
        self.notes
            .push((Handle::Gene(index), Note::SpoofedFor(orphan)));
        Some(index)
    }

    /// Links every mRNA to a CDS of the same gene that it contains and that
    /// shares its internal boundaries. A CDS already linked to an earlier
    /// mRNA is only reused when no free match exists. Every contained CDS
    /// with different boundaries leaves a mismatch note on both sides, even
    /// when either of them is linked elsewhere.
    pub fn pair_transcripts(&mut self) {
        for m in 0..self.mrnas.len() {
            let Some(gene) = self.mrnas[m].parent
            else {
                continue;
            };
            let mrna = &self.mrnas[m].draft;
            let boundaries = internal_boundaries(mrna.segments());
            let (matching, other): (Vec<usize>, Vec<usize>) = self.genes[gene]
                .cdss
                .iter()
                .copied()
                .filter(|&c| contains(&mrna.footprint, self.cdss[c].draft.segments()))
                .partition(|&c| internal_boundaries(self.cdss[c].draft.segments()) == boundaries);

            if !other.is_empty() {
                debug!("mRNA #{} disagrees with CDSs {:?}", m, other);
                self.notes
                    .push((Handle::Mrna(m), Note::MrnaBoundaryMismatch));
            }
            for c in other {
                self.notes
                    .push((Handle::Cds(c), Note::CdsBoundaryMismatch { mrna: m }));
            }
            let chosen = matching
                .iter()
                .copied()
                .find(|&c| self.cdss[c].link.is_none())
                .or_else(|| matching.first().copied());

            if let Some(c) = chosen {
                debug!("mRNA #{} paired with CDS #{}", m, c);
                self.mrnas[m].link = Some(c);
                if self.cdss[c].link.is_none() {
                    self.cdss[c].link = Some(m);
                }
            }
        }
    }
}
