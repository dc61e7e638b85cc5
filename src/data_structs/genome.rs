use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};

use super::coords::{
    Footprint,
    Segment,
};
use super::feature::{
    DbXref,
    FeatureAttributes,
    RawFeature,
};
use super::typedef::FeatureId;
use crate::getter_fn;

pub const FLAG_PSEUDO: &str = "pseudo";
pub const FLAG_TRANS_SPLICING: &str = "trans_splicing";

fn is_false(value: &bool) -> bool {
    !*value
}

/// Descriptive data copied from the raw record onto the derived entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureAnnotations {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases:   Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub db_xrefs:  Vec<DbXref>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes:     Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags:     Vec<String>,
}

impl FeatureAnnotations {
    pub(crate) fn from_attributes(
        attributes: FeatureAttributes,
        trans_spliced: bool,
    ) -> Self {
        let mut flags = Vec::new();
        if attributes.pseudo {
            flags.push(FLAG_PSEUDO.to_string());
        }
        if trans_spliced {
            flags.push(FLAG_TRANS_SPLICING.to_string());
        }
        Self {
            aliases: attributes.aliases,
            db_xrefs: attributes.db_xrefs,
            functions: attributes.functions,
            notes: attributes.notes,
            flags,
        }
    }

    pub fn has_flag(
        &self,
        flag: &str,
    ) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    fn to_attributes(&self) -> FeatureAttributes {
        FeatureAttributes::default()
            .with_aliases(self.aliases.clone())
            .with_db_xrefs(self.db_xrefs.clone())
            .with_functions(self.functions.clone())
            .with_notes(self.notes.clone())
            .with_pseudo(self.has_flag(FLAG_PSEUDO))
    }
}

/// Protein-coding gene: a gene that owns at least one CDS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    pub(crate) id:          FeatureId,
    pub(crate) location:    Vec<Segment>,
    pub(crate) footprint:   Footprint,
    pub(crate) mrnas:       Vec<FeatureId>,
    pub(crate) cdss:        Vec<FeatureId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) children:    Vec<FeatureId>,
    #[serde(flatten)]
    pub(crate) annotations: FeatureAnnotations,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) warnings:    Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub(crate) suspect:     bool,
}

impl Gene {
    getter_fn!(id, FeatureId);

    getter_fn!(location, Vec<Segment>);

    getter_fn!(footprint, Footprint);

    getter_fn!(mrnas, Vec<FeatureId>);

    getter_fn!(cdss, Vec<FeatureId>);

    getter_fn!(children, Vec<FeatureId>);

    getter_fn!(annotations, FeatureAnnotations);

    getter_fn!(warnings, Vec<String>);

    getter_fn!(suspect, copy bool);
}

/// Anything that is not a protein-coding gene, mRNA or CDS: genes without a
/// CDS, pseudo genes, non-coding RNAs and other annotated regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonCodingFeature {
    pub(crate) id:           FeatureId,
    pub(crate) location:     Vec<Segment>,
    pub(crate) footprint:    Footprint,
    #[serde(rename = "type")]
    pub(crate) feature_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) parent_gene:  Option<FeatureId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) children:     Vec<FeatureId>,
    #[serde(flatten)]
    pub(crate) annotations:  FeatureAnnotations,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) warnings:     Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub(crate) suspect:      bool,
}

impl NonCodingFeature {
    getter_fn!(id, FeatureId);

    getter_fn!(location, Vec<Segment>);

    getter_fn!(footprint, Footprint);

    getter_fn!(feature_type, String);

    getter_fn!(parent_gene, Option<FeatureId>);

    getter_fn!(children, Vec<FeatureId>);

    getter_fn!(annotations, FeatureAnnotations);

    getter_fn!(warnings, Vec<String>);

    getter_fn!(suspect, copy bool);

    /// Whether this entry stands for a gene locus rather than a feature
    /// inside one.
    pub fn is_gene(&self) -> bool {
        is_locus_type(&self.feature_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mrna {
    pub(crate) id:          FeatureId,
    pub(crate) location:    Vec<Segment>,
    pub(crate) footprint:   Footprint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) parent_gene: Option<FeatureId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) cds:         Option<FeatureId>,
    #[serde(flatten)]
    pub(crate) annotations: FeatureAnnotations,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) warnings:    Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub(crate) suspect:     bool,
}

impl Mrna {
    getter_fn!(id, FeatureId);

    getter_fn!(location, Vec<Segment>);

    getter_fn!(footprint, Footprint);

    getter_fn!(parent_gene, Option<FeatureId>);

    getter_fn!(cds, Option<FeatureId>);

    getter_fn!(annotations, FeatureAnnotations);

    getter_fn!(warnings, Vec<String>);

    getter_fn!(suspect, copy bool);
}

/// Translated-sequence metadata of a CDS. The genetic code is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CdsTranslation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_translation:        Option<String>,
    pub protein_translation_length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genetic_code:               Option<u32>,
}

impl CdsTranslation {
    pub(crate) fn new(
        protein_translation: Option<String>,
        genetic_code: Option<u32>,
    ) -> Self {
        let protein_translation_length = protein_translation
            .as_ref()
            .map(|p| p.trim_end_matches('*').len())
            .unwrap_or(0);
        Self {
            protein_translation,
            protein_translation_length,
            genetic_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cds {
    pub(crate) id:          FeatureId,
    pub(crate) location:    Vec<Segment>,
    pub(crate) footprint:   Footprint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) parent_gene: Option<FeatureId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) parent_mrna: Option<FeatureId>,
    #[serde(flatten)]
    pub(crate) translation: CdsTranslation,
    #[serde(flatten)]
    pub(crate) annotations: FeatureAnnotations,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) warnings:    Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub(crate) suspect:     bool,
}

impl Cds {
    getter_fn!(id, FeatureId);

    getter_fn!(location, Vec<Segment>);

    getter_fn!(footprint, Footprint);

    getter_fn!(parent_gene, Option<FeatureId>);

    getter_fn!(parent_mrna, Option<FeatureId>);

    getter_fn!(translation, CdsTranslation);

    getter_fn!(annotations, FeatureAnnotations);

    getter_fn!(warnings, Vec<String>);

    getter_fn!(suspect, copy bool);
}

/// Borrowed view of any entity in a [`Genome`].
#[derive(Debug, Clone, Copy)]
pub enum FeatureRef<'a> {
    Gene(&'a Gene),
    NonCoding(&'a NonCodingFeature),
    Mrna(&'a Mrna),
    Cds(&'a Cds),
}

impl FeatureRef<'_> {
    pub fn id(&self) -> &str {
        match self {
            FeatureRef::Gene(f) => &f.id,
            FeatureRef::NonCoding(f) => &f.id,
            FeatureRef::Mrna(f) => &f.id,
            FeatureRef::Cds(f) => &f.id,
        }
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            FeatureRef::Gene(f) => &f.warnings,
            FeatureRef::NonCoding(f) => &f.warnings,
            FeatureRef::Mrna(f) => &f.warnings,
            FeatureRef::Cds(f) => &f.warnings,
        }
    }
}

/// Reconciled genome. Produced once per reconciliation pass and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    pub(crate) features:            Vec<Gene>,
    pub(crate) non_coding_features: Vec<NonCodingFeature>,
    pub(crate) mrnas:               Vec<Mrna>,
    pub(crate) cdss:                Vec<Cds>,
    #[serde(default)]
    pub(crate) warnings:            Vec<String>,
    #[serde(default)]
    pub(crate) suspect:             bool,
    #[serde(default)]
    pub(crate) feature_counts:      BTreeMap<String, usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) genetic_code:        Option<u32>,
}

impl Genome {
    getter_fn!(features, Vec<Gene>);

    getter_fn!(non_coding_features, Vec<NonCodingFeature>);

    getter_fn!(mrnas, Vec<Mrna>);

    getter_fn!(cdss, Vec<Cds>);

    getter_fn!(warnings, Vec<String>);

    getter_fn!(suspect, copy bool);

    getter_fn!(feature_counts, BTreeMap<String, usize>);

    getter_fn!(genetic_code, Option<u32>);

    pub fn gene(
        &self,
        id: &str,
    ) -> Option<&Gene> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn non_coding(
        &self,
        id: &str,
    ) -> Option<&NonCodingFeature> {
        self.non_coding_features
            .iter()
            .find(|f| f.id == id)
    }

    pub fn mrna(
        &self,
        id: &str,
    ) -> Option<&Mrna> {
        self.mrnas.iter().find(|f| f.id == id)
    }

    pub fn cds(
        &self,
        id: &str,
    ) -> Option<&Cds> {
        self.cdss.iter().find(|f| f.id == id)
    }

    /// Iterates over every entity, bucket by bucket, in stored order.
    pub fn iter(&self) -> impl Iterator<Item = FeatureRef<'_>> {
        self.features
            .iter()
            .map(FeatureRef::Gene)
            .chain(
                self.non_coding_features
                    .iter()
                    .map(FeatureRef::NonCoding),
            )
            .chain(self.mrnas.iter().map(FeatureRef::Mrna))
            .chain(self.cdss.iter().map(FeatureRef::Cds))
    }

    pub fn get(
        &self,
        id: &str,
    ) -> Option<FeatureRef<'_>> {
        self.iter().find(|f| f.id() == id)
    }

    /// Total number of entities across the four buckets.
    pub fn len(&self) -> usize {
        self.features.len()
            + self.non_coding_features.len()
            + self.mrnas.len()
            + self.cdss.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rebuilds the flat record list this genome describes: genes first,
    /// then mRNAs, CDSs and the remaining non-coding features, each with its
    /// final identifier.
    pub fn to_raw_features(&self) -> Vec<RawFeature> {
        let (loci, others): (Vec<_>, Vec<_>) = self
            .non_coding_features
            .iter()
            .partition(|f| f.is_gene());

        let genes = self.features.iter().map(|gene| {
            RawFeature::new("gene", gene.location.clone())
                .with_id(Some(gene.id.clone()))
                .with_attributes(gene.annotations.to_attributes())
        });
        let non_coding = |feature: &NonCodingFeature| {
            RawFeature::new(feature.feature_type.as_str(), feature.location.clone())
                .with_id(Some(feature.id.clone()))
                .with_attributes(feature.annotations.to_attributes())
        };
        let mrnas = self.mrnas.iter().map(|mrna| {
            RawFeature::new("mRNA", mrna.location.clone())
                .with_id(Some(mrna.id.clone()))
                .with_attributes(mrna.annotations.to_attributes())
        });
        let cdss = self.cdss.iter().map(|cds| {
            let attributes = cds
                .annotations
                .to_attributes()
                .with_translation(cds.translation.protein_translation.clone());
            RawFeature::new("CDS", cds.location.clone())
                .with_id(Some(cds.id.clone()))
                .with_attributes(attributes)
        });

        genes
            .chain(loci.into_iter().map(non_coding))
            .chain(mrnas)
            .chain(cdss)
            .chain(others.into_iter().map(non_coding))
            .collect_vec()
    }
}

/// Type tags that denote a gene locus.
pub fn is_locus_type(feature_type: &str) -> bool {
    matches!(feature_type, "gene" | "pseudogene")
}
