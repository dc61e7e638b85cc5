use indexmap::IndexMap;

/// Accumulates per-feature and genome-level warnings of one pass.
#[derive(Debug, Default, Clone)]
pub struct WarningCollector {
    features: IndexMap<String, Vec<String>>,
    genome:   Vec<String>,
    suspect:  bool,
}

impl WarningCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a warning to a feature. The same text is kept once per
    /// feature.
    pub fn add<S: Into<String>>(
        &mut self,
        feature_id: &str,
        text: S,
    ) {
        let text = text.into();
        let list = self
            .features
            .entry(feature_id.to_string())
            .or_default();
        if !list.contains(&text) {
            list.push(text);
        }
    }

    pub fn add_genome<S: Into<String>>(
        &mut self,
        text: S,
    ) {
        self.genome.push(text.into());
    }

    pub fn mark_suspect(&mut self) {
        self.suspect = true;
    }

    pub fn is_suspect(&self) -> bool {
        self.suspect
    }

    pub fn genome_warnings(&self) -> &[String] {
        &self.genome
    }

    pub fn feature_warnings(
        &self,
        feature_id: &str,
    ) -> &[String] {
        self.features
            .get(feature_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Owned copy of a feature's warnings.
    pub fn snapshot(
        &self,
        feature_id: &str,
    ) -> Vec<String> {
        self.feature_warnings(feature_id).to_vec()
    }

    /// Number of features with at least one warning.
    pub fn n_flagged(&self) -> usize {
        self.features
            .values()
            .filter(|w| !w.is_empty())
            .count()
    }
}
