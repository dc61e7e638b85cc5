use std::convert::Infallible;
use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord, Default)]
pub enum Strand {
    /// Forward strand.
    Forward,
    /// Reverse strand.
    Reverse,
    /// No strand.
    #[default]
    None,
}

impl Strand {
    /// Whether transcription runs towards decreasing coordinates.
    pub fn is_reverse(&self) -> bool {
        matches!(self, Strand::Reverse)
    }
}

impl FromStr for Strand {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            _ => Ok(Strand::None),
        }
    }
}

impl From<char> for Strand {
    fn from(value: char) -> Self {
        match value {
            '+' => Strand::Forward,
            '-' => Strand::Reverse,
            _ => Strand::None,
        }
    }
}

impl From<Strand> for char {
    fn from(value: Strand) -> Self {
        match value {
            Strand::Forward => '+',
            Strand::Reverse => '-',
            Strand::None => '.',
        }
    }
}

impl Display for Strand {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

impl Serialize for Strand {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Strand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        std::str::FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Which end of an exon segment a boundary coordinate belongs to, read in
/// the direction of transcription.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum BoundaryRole {
    /// 5' end of a segment (an acceptor site for internal exons).
    Start,
    /// 3' end of a segment (a donor site for internal exons).
    End,
}

/// Closed classification of a raw record, produced once by the classifier.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug)]
pub enum FeatureKind {
    /// `gene` record that may own coding sequences.
    CodingGene,
    /// Pseudo gene, pseudo CDS or any non-coding RNA / region record.
    NonCodingGene,
    /// `mRNA` record.
    Transcript,
    /// `CDS` record with translatable content.
    CodingSequence,
}

impl Display for FeatureKind {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            FeatureKind::CodingGene => write!(f, "coding gene"),
            FeatureKind::NonCodingGene => write!(f, "non-coding feature"),
            FeatureKind::Transcript => write!(f, "mRNA"),
            FeatureKind::CodingSequence => write!(f, "CDS"),
        }
    }
}
