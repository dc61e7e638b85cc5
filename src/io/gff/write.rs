use std::io::Write;

use anyhow::Context;
use itertools::Itertools;

use super::entry::{
    list_attr,
    GffAttributes,
    RawGffEntry,
};
use super::{
    SOURCE_NAME,
    TAG_PRODUCT,
    TAG_PSEUDO,
    TAG_TRANSLATION,
};
use crate::data_structs::coords::{
    transcription_order,
    Footprint,
    Segment,
};
use crate::data_structs::{
    FeatureAnnotations,
    Genome,
    FLAG_PSEUDO,
};

fn gff_attributes(
    id: &str,
    parent: Option<&str>,
    annotations: &FeatureAnnotations,
) -> GffAttributes {
    let mut attributes = GffAttributes::default()
        .with_id(Some(id))
        .with_parent(parent);
    attributes.alias = list_attr(&annotations.aliases);
    attributes.note = list_attr(&annotations.notes);
    attributes.dbxref = list_attr(
        &annotations
            .db_xrefs
            .iter()
            .map(|x| x.to_string())
            .collect_vec(),
    );
    let pseudo = if annotations.has_flag(FLAG_PSEUDO) {
        "true"
    }
    else {
        ""
    };
    attributes
        .with_other(TAG_PRODUCT, annotations.functions.join(","))
        .with_other(TAG_PSEUDO, pseudo)
}

/// GFF3 phase of every segment of a CDS, in transcription order.
pub fn cds_phases(segments: &[Segment]) -> Vec<(Segment, u8)> {
    let mut covered = 0u64;
    transcription_order(segments)
        .into_iter()
        .map(|segment| {
            let phase = ((3 - covered % 3) % 3) as u8;
            covered += segment.length();
            (segment, phase)
        })
        .collect()
}

struct GffSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> GffSink<W> {
    fn row(
        &mut self,
        feature_type: &str,
        segment: &Segment,
        phase: Option<u8>,
        attributes: GffAttributes,
    ) -> anyhow::Result<()> {
        self.writer
            .serialize(RawGffEntry::new(
                SOURCE_NAME,
                feature_type,
                segment,
                phase,
                attributes,
            ))
            .with_context(|| format!("Failed to write {} line", feature_type))
    }

    /// One line per segment, all sharing the same attributes.
    fn segmented(
        &mut self,
        feature_type: &str,
        location: &[Segment],
        attributes: GffAttributes,
    ) -> anyhow::Result<()> {
        for segment in transcription_order(location) {
            self.row(feature_type, &segment, None, attributes.clone())?;
        }
        Ok(())
    }

    /// A spanning line plus one `exon` line per segment when there are
    /// several.
    fn with_exons(
        &mut self,
        feature_type: &str,
        footprint: &Footprint,
        location: &[Segment],
        attributes: GffAttributes,
    ) -> anyhow::Result<()> {
        let Some(id) = attributes.id.clone()
        else {
            return self.segmented(feature_type, location, attributes);
        };
        if location.len() < 2 {
            return self.segmented(feature_type, location, attributes);
        }
        self.row(feature_type, &footprint.as_segment(), None, attributes)?;
        for segment in transcription_order(location) {
            self.row(
                "exon",
                &segment,
                None,
                GffAttributes::default().with_parent(Some(id.as_str())),
            )?;
        }
        Ok(())
    }
}

/// Writes a genome as GFF3 with `Parent` attributes taken from the resolved
/// hierarchy. Genes come first, then mRNAs, CDSs and the remaining
/// non-coding features.
pub fn write_gff<W: Write>(
    genome: &Genome,
    mut sink: W,
) -> anyhow::Result<()> {
    writeln!(sink, "##gff-version 3").context("Failed to write GFF header")?;
    let mut out = GffSink {
        writer: csv::WriterBuilder::default()
            .delimiter(b'\t')
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(sink),
    };

    for gene in genome.features() {
        out.segmented(
            "gene",
            gene.location(),
            gff_attributes(gene.id(), None, gene.annotations()),
        )?;
    }
    let (loci, others): (Vec<_>, Vec<_>) = genome
        .non_coding_features()
        .iter()
        .partition(|f| f.is_gene());
    for locus in loci {
        out.segmented(
            locus.feature_type(),
            locus.location(),
            gff_attributes(locus.id(), None, locus.annotations()),
        )?;
    }

    for mrna in genome.mrnas() {
        out.with_exons(
            "mRNA",
            mrna.footprint(),
            mrna.location(),
            gff_attributes(
                mrna.id(),
                mrna.parent_gene().as_deref(),
                mrna.annotations(),
            ),
        )?;
    }

    for cds in genome.cdss() {
        let parent = cds
            .parent_mrna()
            .as_deref()
            .or(cds.parent_gene().as_deref());
        let attributes = gff_attributes(cds.id(), parent, cds.annotations()).with_other(
            TAG_TRANSLATION,
            cds.translation()
                .protein_translation
                .clone()
                .unwrap_or_default(),
        );
        for (segment, phase) in cds_phases(cds.location()) {
            out.row("CDS", &segment, Some(phase), attributes.clone())?;
        }
    }

    for feature in others {
        let attributes = gff_attributes(
            feature.id(),
            feature.parent_gene().as_deref(),
            feature.annotations(),
        );
        if feature.feature_type() == "CDS" {
            out.segmented("CDS", feature.location(), attributes)?;
        }
        else {
            out.with_exons(
                feature.feature_type(),
                feature.footprint(),
                feature.location(),
                attributes,
            )?;
        }
    }

    out.writer
        .flush()
        .context("Failed to flush GFF output")?;
    Ok(())
}
