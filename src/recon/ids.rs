use hashbrown::{
    HashMap,
    HashSet,
};
use log::warn;

use crate::data_structs::typedef::FeatureId;
use crate::error::ReconError;

/// Outcome of one identifier assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assigned {
    pub id:           FeatureId,
    /// Set when the wanted identifier was taken and `id` is a renamed one.
    pub renamed_from: Option<FeatureId>,
}

/// Hands out identifiers that are unique within one genome.
#[derive(Debug, Default)]
pub struct IdentifierAssigner {
    generate: bool,
    used:     HashSet<FeatureId>,
    fallback: HashMap<String, usize>,
}

impl IdentifierAssigner {
    pub fn new(generate_ids_if_needed: bool) -> Self {
        Self {
            generate: generate_ids_if_needed,
            ..Default::default()
        }
    }

    /// Assigns an identifier to a record.
    ///
    /// A present `raw` id is kept. Otherwise the id is `{parent}_{type}_{n}`
    /// with `n` the 1-based sibling index of the record under `parent`, or
    /// `{type}_{n}` from a genome-wide counter when there is no parent.
    /// `name` is only used in the error returned when generation is off.
    pub fn assign(
        &mut self,
        raw: Option<&str>,
        type_tag: &str,
        parent: Option<(&str, usize)>,
        name: &str,
    ) -> Result<Assigned, ReconError> {
        let wanted = match (raw, parent) {
            (Some(raw), _) => raw.to_string(),
            (None, _) if !self.generate => return Err(ReconError::missing_id(name)),
            (None, Some((parent, n))) => format!("{}_{}_{}", parent, type_tag, n),
            (None, None) => {
                let counter = self
                    .fallback
                    .entry(type_tag.to_string())
                    .or_insert(0);
                *counter += 1;
                format!("{}_{}", type_tag, counter)
            },
        };
        Ok(self.claim(wanted))
    }

    fn claim(
        &mut self,
        wanted: FeatureId,
    ) -> Assigned {
        if self.used.insert(wanted.clone()) {
            return Assigned {
                id:           wanted,
                renamed_from: None,
            };
        }
        let mut k = 1usize;
        let id = loop {
            let candidate = format!("{}.{}", wanted, k);
            if !self.used.contains(&candidate) {
                break candidate;
            }
            k += 1;
        };
        warn!("Duplicate feature identifier {} renamed to {}", wanted, id);
        self.used.insert(id.clone());
        Assigned {
            id,
            renamed_from: Some(wanted),
        }
    }

    pub fn is_used(
        &self,
        id: &str,
    ) -> bool {
        self.used.contains(id)
    }
}
