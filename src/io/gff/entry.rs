use std::fmt::{
    self,
    Write,
};
use std::str::FromStr;

use anyhow::anyhow;
use hashbrown::HashMap;
use itertools::Itertools;
use serde::de::{
    self,
    Deserializer,
    Visitor,
};
use serde::{
    Deserialize,
    Serialize,
    Serializer,
};

use crate::data_structs::coords::Segment;
use crate::data_structs::typedef::PosType;
use crate::data_structs::Strand;

/// Column 9 of a GFF3 line.
///
/// Only the reserved tags the adapter interprets get their own field, the
/// rest lands in `other` as raw text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GffAttributes {
    pub id:     Option<String>,
    pub name:   Option<Vec<String>>,
    pub alias:  Option<Vec<String>>,
    pub parent: Option<Vec<String>>,
    pub note:   Option<Vec<String>>,
    pub dbxref: Option<Vec<String>>,
    pub other:  HashMap<String, String>,
}

impl GffAttributes {
    /// Sets the ID attribute.
    pub fn with_id<S: Into<String>>(
        mut self,
        id: Option<S>,
    ) -> Self {
        self.id = id.map(|s| s.into());
        self
    }

    /// Sets the Parent attribute.
    pub fn with_parent<S: Into<String>>(
        mut self,
        parent: Option<S>,
    ) -> Self {
        self.parent = parent.map(|s| vec![s.into()]);
        self
    }

    /// Inserts a free tag unless `value` is empty.
    pub fn with_other<S: Into<String>>(
        mut self,
        key: &str,
        value: S,
    ) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.other.insert(key.to_string(), value);
        }
        self
    }

    /// Removes a free tag and splits its value on commas.
    pub fn take_list(
        &mut self,
        key: &str,
    ) -> Vec<String> {
        self.other
            .remove(key)
            .map(|v| split_values(&v))
            .unwrap_or_default()
    }
}

fn split_values(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// `None` for an empty list, so the tag is left out when writing.
pub(crate) fn list_attr(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}

impl fmt::Display for GffAttributes {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut serialized = String::with_capacity(128);

        macro_rules! write_attr {
            ($field:expr, $key:literal) => {
                if let Some(values) = $field.as_ref() {
                    if !serialized.is_empty() {
                        serialized.push(';');
                    }
                    write!(serialized, "{}={}", $key, values.iter().join(","))?;
                }
            };
        }

        if let Some(id) = self.id.as_ref() {
            write!(serialized, "ID={}", id)?;
        }
        write_attr!(self.name, "Name");
        write_attr!(self.alias, "Alias");
        write_attr!(self.parent, "Parent");
        write_attr!(self.note, "Note");
        write_attr!(self.dbxref, "Dbxref");

        for (key, value) in self
            .other
            .iter()
            .sorted_unstable_by_key(|(k, _)| *k)
        {
            if !serialized.is_empty() {
                serialized.push(';');
            }
            write!(serialized, "{}={}", key, value)?;
        }

        if serialized.is_empty() {
            serialized.push('.');
        }
        f.write_str(&serialized)
    }
}

impl FromStr for GffAttributes {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut attributes = GffAttributes::default();
        if s.trim() == "." {
            return Ok(attributes);
        }
        for pair in s.trim().split(';') {
            if pair.trim().is_empty() {
                continue;
            }

            let mut parts = pair.trim().splitn(2, '=');
            let key = parts
                .next()
                .filter(|k| !k.is_empty())
                .ok_or(anyhow!("Missing key in attribute '{}'", pair))?;
            let value = parts.next();

            match key {
                "ID" => {
                    attributes.id = value.map(|s| s.to_string());
                },
                "Name" => {
                    attributes.name = value.map(split_values);
                },
                "Alias" => {
                    attributes.alias = value.map(split_values);
                },
                "Parent" => {
                    attributes.parent = value.map(split_values);
                },
                "Note" => {
                    attributes.note = value.map(split_values);
                },
                "Dbxref" => {
                    attributes.dbxref = value.map(split_values);
                },
                _ => {
                    attributes.other.insert(
                        key.to_string(),
                        value.unwrap_or("true").to_string(),
                    );
                },
            }
        }

        Ok(attributes)
    }
}

impl Serialize for GffAttributes {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer, {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GffAttributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>, {
        struct GffAttributesVisitor;

        impl Visitor<'_> for GffAttributesVisitor {
            type Value = GffAttributes;

            fn expecting(
                &self,
                formatter: &mut fmt::Formatter,
            ) -> fmt::Result {
                formatter.write_str("a string of GFF attributes")
            }

            fn visit_str<E>(
                self,
                value: &str,
            ) -> Result<GffAttributes, E>
            where
                E: de::Error, {
                GffAttributes::from_str(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(GffAttributesVisitor)
    }
}

/// Writes `None` as the GFF placeholder `.`.
fn dot_option<T, S>(
    value: &Option<T>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer, {
    match value {
        Some(v) => serializer.collect_str(v),
        None => serializer.serialize_str("."),
    }
}

/// One tab-separated GFF3 line as read and written by `csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGffEntry {
    pub seqid:        String,
    pub source:       String,
    pub feature_type: String,
    pub start:        PosType,
    pub end:          PosType,
    #[serde(
        deserialize_with = "csv::invalid_option",
        serialize_with = "dot_option"
    )]
    pub score:        Option<f64>,
    pub strand:       char,
    #[serde(
        deserialize_with = "csv::invalid_option",
        serialize_with = "dot_option"
    )]
    pub phase:        Option<u8>,
    pub attributes:   GffAttributes,
}

impl RawGffEntry {
    pub fn new(
        source: &str,
        feature_type: &str,
        segment: &Segment,
        phase: Option<u8>,
        attributes: GffAttributes,
    ) -> Self {
        Self {
            seqid: segment.contig().to_string(),
            source: source.to_string(),
            feature_type: feature_type.to_string(),
            start: segment.left(),
            end: segment.right(),
            score: None,
            strand: segment.strand().into(),
            phase,
            attributes,
        }
    }

    /// Location of this line as a single segment.
    pub fn segment(&self) -> Segment {
        Segment::from_bounds(
            self.seqid.as_str().into(),
            self.start,
            self.end,
            Strand::from(self.strand),
        )
    }
}
