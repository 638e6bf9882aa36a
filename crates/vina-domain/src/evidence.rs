//! Evidence records attached to facts and proof nodes

use serde::{Deserialize, Serialize};

/// Classification of an evidence item by study/publication kind
///
/// Serialized as the upper-case name (e.g. `CLINICAL_GUIDELINE`) so the
/// wire format matches what downstream clients render verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceKind {
    /// Published clinical practice guideline
    ClinicalGuideline,
    /// Meta-analysis of multiple studies
    MetaAnalysis,
    /// Randomized controlled trial
    Rct,
    /// Observational study
    Observational,
    /// Peer-reviewed publication not covered above
    PeerReviewed,
    /// Anything else
    Other,
}

impl EvidenceKind {
    /// Canonical upper-case name, as emitted in reasoning text
    pub fn name(&self) -> &'static str {
        match self {
            EvidenceKind::ClinicalGuideline => "CLINICAL_GUIDELINE",
            EvidenceKind::MetaAnalysis => "META_ANALYSIS",
            EvidenceKind::Rct => "RCT",
            EvidenceKind::Observational => "OBSERVATIONAL",
            EvidenceKind::PeerReviewed => "PEER_REVIEWED",
            EvidenceKind::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single evidence item supporting a statement
///
/// `confidence` is a point estimate in [0, 1]; the proof layer averages
/// these per node. Evidence is immutable once attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Evidence content (usually an English summary of the finding)
    pub content: String,

    /// Source identifier (e.g. "AHA/ACC 2023")
    pub source: String,

    /// Evidence classification
    #[serde(rename = "type")]
    pub kind: EvidenceKind,

    /// Publication date, if known (free-form, e.g. "2023-01")
    pub publication_date: Option<String>,

    /// Citation count, if known
    pub citations: Option<u32>,

    /// Confidence in [0, 1]
    pub confidence: f64,
}

impl Evidence {
    /// Create a new evidence item with just the required fields
    pub fn new(
        content: impl Into<String>,
        source: impl Into<String>,
        kind: EvidenceKind,
        confidence: f64,
    ) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
            kind,
            publication_date: None,
            citations: None,
            confidence,
        }
    }

    /// Attach a publication date
    pub fn with_publication_date(mut self, date: impl Into<String>) -> Self {
        self.publication_date = Some(date.into());
        self
    }

    /// Attach a citation count
    pub fn with_citations(mut self, citations: u32) -> Self {
        self.citations = Some(citations);
        self
    }
}
