use std::collections::BTreeMap;

use itertools::Itertools;

use super::hierarchy::{
    ChildNode,
    Draft,
    Hierarchy,
};
use super::warnings::WarningCollector;
use crate::data_structs::typedef::FeatureId;
use crate::data_structs::{
    Cds,
    CdsTranslation,
    FeatureAnnotations,
    Gene,
    Genome,
    Mrna,
    NonCodingFeature,
};

pub const PROTEIN_ENCODING_GENE: &str = "protein_encoding_gene";
pub const NON_CODING_GENE: &str = "non_coding_gene";

fn ids_of(nodes: &[ChildNode]) -> Vec<FeatureId> {
    nodes
        .iter()
        .map(|n| n.draft.id.clone())
        .collect()
}

fn pick(
    ids: &[FeatureId],
    indices: &[usize],
) -> Vec<FeatureId> {
    indices
        .iter()
        .filter_map(|&i| ids.get(i).cloned())
        .collect()
}

fn lookup(
    ids: &[FeatureId],
    index: Option<usize>,
) -> Option<FeatureId> {
    index.and_then(|i| ids.get(i).cloned())
}

/// Moves the parts of a draft every entity shares out of it.
fn split(
    draft: Draft,
    collector: &WarningCollector,
) -> (FeatureAnnotations, Vec<String>, Draft) {
    let warnings = collector.snapshot(&draft.id);
    let mut draft = draft;
    let attributes = std::mem::take(&mut draft.record.attributes);
    let annotations = FeatureAnnotations::from_attributes(attributes, draft.trans_spliced);
    (annotations, warnings, draft)
}

fn non_coding(
    node: ChildNode,
    gene_ids: &[FeatureId],
    collector: &WarningCollector,
) -> (usize, NonCodingFeature) {
    let (annotations, warnings, draft) = split(node.draft, collector);
    let feature = NonCodingFeature {
        id: draft.id,
        location: draft.record.segments,
        footprint: draft.footprint,
        feature_type: draft.record.feature_type.to_string(),
        parent_gene: lookup(gene_ids, node.parent),
        children: Vec::new(),
        annotations,
        warnings,
        suspect: draft.suspect,
    };
    (draft.order, feature)
}

/// Builds the final genome from a resolved hierarchy with assigned ids.
///
/// Genes owning a CDS go to `features`, all other genes to
/// `non_coding_features` together with the non-locus non-coding records.
/// Each bucket keeps input order; spoofed genes come after input genes.
pub fn assemble(
    hierarchy: Hierarchy,
    collector: &WarningCollector,
    mut feature_counts: BTreeMap<String, usize>,
    genetic_code: Option<u32>,
) -> Genome {
    let gene_ids = hierarchy
        .genes
        .iter()
        .map(|g| g.draft.id.clone())
        .collect_vec();
    let mrna_ids = ids_of(&hierarchy.mrnas);
    let cds_ids = ids_of(&hierarchy.cdss);
    let other_ids = ids_of(&hierarchy.others);

    let mut features: Vec<(usize, Gene)> = Vec::new();
    let mut non_coding_features: Vec<(usize, NonCodingFeature)> = Vec::new();

    for gene in hierarchy.genes {
        let (annotations, warnings, draft) = split(gene.draft, collector);
        let mrnas = pick(&mrna_ids, &gene.mrnas);
        let children = pick(&other_ids, &gene.children);

        if gene.cdss.is_empty() {
            let feature = NonCodingFeature {
                id: draft.id,
                location: draft.record.segments,
                footprint: draft.footprint,
                feature_type: draft.record.feature_type.to_string(),
                parent_gene: None,
                children: mrnas.into_iter().chain(children).collect(),
                annotations,
                warnings,
                suspect: draft.suspect,
            };
            non_coding_features.push((draft.order, feature));
        }
        else {
            let feature = Gene {
                id: draft.id,
                location: draft.record.segments,
                footprint: draft.footprint,
                mrnas,
                cdss: pick(&cds_ids, &gene.cdss),
                children,
                annotations,
                warnings,
                suspect: draft.suspect,
            };
            features.push((draft.order, feature));
        }
    }

    non_coding_features.extend(
        hierarchy
            .others
            .into_iter()
            .map(|node| non_coding(node, &gene_ids, collector)),
    );

    let mrnas = hierarchy
        .mrnas
        .into_iter()
        .map(|node| {
            let (annotations, warnings, draft) = split(node.draft, collector);
            Mrna {
                id: draft.id,
                location: draft.record.segments,
                footprint: draft.footprint,
                parent_gene: lookup(&gene_ids, node.parent),
                cds: lookup(&cds_ids, node.link),
                annotations,
                warnings,
                suspect: draft.suspect,
            }
        })
        .collect_vec();

    let cdss = hierarchy
        .cdss
        .into_iter()
        .map(|node| {
            let translation = CdsTranslation::new(
                node.draft.record.attributes.translation.clone(),
                genetic_code,
            );
            let (annotations, warnings, draft) = split(node.draft, collector);
            Cds {
                id: draft.id,
                location: draft.record.segments,
                footprint: draft.footprint,
                parent_gene: lookup(&gene_ids, node.parent),
                parent_mrna: lookup(&mrna_ids, node.link),
                translation,
                annotations,
                warnings,
                suspect: draft.suspect,
            }
        })
        .collect_vec();

    let features = features
        .into_iter()
        .sorted_by_key(|(order, _)| *order)
        .map(|(_, f)| f)
        .collect_vec();
    let non_coding_features = non_coding_features
        .into_iter()
        .sorted_by_key(|(order, _)| *order)
        .map(|(_, f)| f)
        .collect_vec();

    feature_counts.insert(PROTEIN_ENCODING_GENE.to_string(), features.len());
    feature_counts.insert(
        NON_CODING_GENE.to_string(),
        non_coding_features
            .iter()
            .filter(|f| f.is_gene())
            .count(),
    );

    let suspect = collector.is_suspect()
        || features.iter().any(|f| f.suspect)
        || non_coding_features.iter().any(|f| f.suspect)
        || mrnas.iter().any(|f| f.suspect)
        || cdss.iter().any(|f| f.suspect);

    Genome {
        features,
        non_coding_features,
        mrnas,
        cdss,
        warnings: collector.genome_warnings().to_vec(),
        suspect,
        feature_counts,
        genetic_code,
    }
}
