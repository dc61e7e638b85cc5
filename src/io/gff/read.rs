use std::io::Read;

use anyhow::Context;
use indexmap::IndexMap;
use log::{
    debug,
    warn,
};
use multimap::MultiMap;

use super::entry::{
    GffAttributes,
    RawGffEntry,
};
use super::{
    IGNORED_TYPES,
    TAG_FUNCTION,
    TAG_PRODUCT,
    TAG_PSEUDO,
    TAG_TRANSLATION,
};
use crate::data_structs::coords::transcription_order;
use crate::data_structs::{
    DbXref,
    FeatureAttributes,
    RawFeature,
};

/// Reads GFF3 text into flat records ready for reconciliation.
///
/// Lines sharing an `ID` and a type become one multi-segment record. `exon`
/// lines replace the location of their `Parent`. UTR, codon and intron lines
/// are skipped. Everything after a `##FASTA` directive is ignored.
pub fn read_gff<R: Read>(mut source: R) -> anyhow::Result<Vec<RawFeature>> {
    let mut text = String::new();
    source
        .read_to_string(&mut text)
        .context("Failed to read GFF input")?;
    let body = match text.find("##FASTA") {
        Some(pos) => &text[..pos],
        None => text.as_str(),
    };

    let mut reader = csv::ReaderBuilder::default()
        .delimiter(b'\t')
        .has_headers(false)
        .comment(Some(b'#'))
        .quoting(false)
        .flexible(false)
        .from_reader(body.as_bytes());

    let mut records: IndexMap<String, RawFeature> = IndexMap::new();
    let mut exons = MultiMap::new();

    for (line, entry) in reader.deserialize::<RawGffEntry>().enumerate() {
        let entry = entry.with_context(|| format!("Malformed GFF record #{}", line + 1))?;
        let feature_type = entry.feature_type.as_str();

        if IGNORED_TYPES.contains(&feature_type) {
            continue;
        }
        if feature_type == "exon" {
            for parent in entry.attributes.parent.iter().flatten() {
                exons.insert(parent.clone(), entry.segment());
            }
            continue;
        }

        let key = match entry.attributes.id.as_ref() {
            Some(id) => format!("{}\t{}", feature_type, id),
            None => format!("#{}", line),
        };
        match records.get_mut(&key) {
            Some(record) => record.segments.push(entry.segment()),
            None => {
                let segment = entry.segment();
                let id = entry.attributes.id.clone();
                let record = RawFeature::new(feature_type, vec![segment])
                    .with_id(id)
                    .with_attributes(into_feature_attributes(entry.attributes));
                records.insert(key, record);
            },
        }
    }

    let features = records
        .into_values()
        .map(|mut record| {
            if let Some(parts) = record
                .id
                .as_ref()
                .filter(|_| record.feature_type != "CDS")
                .and_then(|id| exons.get_vec(id))
            {
                record.segments = parts.clone();
            }
            record.segments = transcription_order(&record.segments);
            record
        })
        .collect::<Vec<_>>();
    debug!("Read {} records from GFF", features.len());
    Ok(features)
}

fn into_feature_attributes(mut attributes: GffAttributes) -> FeatureAttributes {
    let db_xrefs = attributes
        .dbxref
        .take()
        .unwrap_or_default()
        .into_iter()
        .filter_map(|xref| {
            xref.parse::<DbXref>()
                .map_err(|e| warn!("{}", e))
                .ok()
        })
        .collect();
    let aliases = attributes
        .name
        .take()
        .into_iter()
        .flatten()
        .chain(attributes.alias.take().into_iter().flatten())
        .fold(Vec::new(), |mut acc, alias| {
            if !acc.contains(&alias) {
                acc.push(alias);
            }
            acc
        });
    let mut functions = attributes.take_list(TAG_PRODUCT);
    functions.extend(attributes.take_list(TAG_FUNCTION));
    let translation = attributes.other.remove(TAG_TRANSLATION);
    let pseudo = attributes
        .other
        .remove(TAG_PSEUDO)
        .is_some_and(|v| v == "true");

    FeatureAttributes::default()
        .with_aliases(aliases)
        .with_db_xrefs(db_xrefs)
        .with_functions(functions)
        .with_notes(attributes.note.take().unwrap_or_default())
        .with_translation(translation)
        .with_pseudo(pseudo)
        .with_other(attributes.other)
}
