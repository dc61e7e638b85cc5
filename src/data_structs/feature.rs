use std::fmt;

use arcstr::ArcStr;
use hashbrown::HashMap;
use serde::{
    Deserialize,
    Serialize,
};

use super::coords::Segment;
use crate::with_field_fn;

/// External database cross-reference, e.g. `GeneID:817553`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DbXref {
    pub db_source:     String,
    pub db_identifier: String,
}

impl DbXref {
    pub fn new<S: Into<String>>(
        db_source: S,
        db_identifier: S,
    ) -> Self {
        Self {
            db_source:     db_source.into(),
            db_identifier: db_identifier.into(),
        }
    }
}

impl fmt::Display for DbXref {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}", self.db_source, self.db_identifier)
    }
}

impl std::str::FromStr for DbXref {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (source, identifier) = s
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("Cross-reference without a database prefix: {}", s))?;
        Ok(Self::new(source, identifier))
    }
}

/// Free-form attributes carried by a raw record. None of them takes part in
/// relationship inference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureAttributes {
    pub aliases:     Vec<String>,
    pub db_xrefs:    Vec<DbXref>,
    pub functions:   Vec<String>,
    pub notes:       Vec<String>,
    pub translation: Option<String>,
    pub pseudo:      bool,
    pub other:       HashMap<String, String>,
}

impl FeatureAttributes {
    with_field_fn!(aliases, Vec<String>);

    with_field_fn!(db_xrefs, Vec<DbXref>);

    with_field_fn!(functions, Vec<String>);

    with_field_fn!(notes, Vec<String>);

    with_field_fn!(translation, Option<String>);

    with_field_fn!(pseudo, bool);

    with_field_fn!(other, HashMap<String, String>);
}

/// A feature record as handed over by an upstream parser.
///
/// The reconciler consumes these by value; every derived entity is built
/// from the record's data rather than by mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFeature {
    pub feature_type: ArcStr,
    pub segments:     Vec<Segment>,
    pub id:           Option<String>,
    pub attributes:   FeatureAttributes,
}

impl RawFeature {
    pub fn new<S: Into<ArcStr>>(
        feature_type: S,
        segments: Vec<Segment>,
    ) -> Self {
        Self {
            feature_type: feature_type.into(),
            segments,
            id: None,
            attributes: FeatureAttributes::default(),
        }
    }

    /// Sets the explicit identifier.
    pub fn with_id<S: Into<String>>(
        mut self,
        id: Option<S>,
    ) -> Self {
        self.id = id.map(|s| s.into());
        self
    }

    with_field_fn!(attributes, FeatureAttributes);

    /// Identifier for log and warning messages about a record that may not
    /// have one.
    pub fn display_name(
        &self,
        index: usize,
    ) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("#{} ({})", index + 1, self.feature_type),
        }
    }
}
