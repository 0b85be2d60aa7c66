//! Plain-text presentation of the non-visual parts of an analysis result.

use std::fmt;

use crate::{gauge::tier::ScoreTier, model::analysis::AnalysisResult, overlay::opts::OverlayOpts};

/// `color_balance` -> `Color Balance`.
///
/// Splits on every underscore and upper-cases the first character of each piece. Empty pieces are
/// kept, so doubled underscores produce doubled spaces.
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Per-annotation notes.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationNote {
    /// `"Annotation {n}"`.
    pub title: String,
    /// Free-text comment.
    pub comment: String,
    /// Optional suggested action.
    pub suggestion: Option<String>,
}

/// One scored metric.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreLine {
    /// Humanized metric name.
    pub label: String,
    /// Raw score.
    pub score: f64,
    /// Derived tier.
    pub tier: ScoreTier,
}

/// Ordered sections of a report.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportSection {
    /// Notes for each annotation, in markup order.
    Annotations(Vec<AnnotationNote>),
    /// Free-text general analysis.
    GeneralAnalysis(String),
    /// Scores with their tiers.
    TechnicalAssessment(Vec<ScoreLine>),
    /// Suggestion lists keyed by humanized category.
    Suggestions(Vec<(String, Vec<String>)>),
    /// String-valued extras keyed by humanized name.
    AdditionalInformation(Vec<(String, String)>),
}

impl ReportSection {
    /// Section heading.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Annotations(_) => "Annotations",
            Self::GeneralAnalysis(_) => "General Analysis",
            Self::TechnicalAssessment(_) => "Technical Assessment",
            Self::Suggestions(_) => "Suggestions",
            Self::AdditionalInformation(_) => "Additional Information",
        }
    }
}

/// Text report built from an [`AnalysisResult`].
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// Sections in display order.
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Build a report with default annotation titles.
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self::from_result_with(result, &OverlayOpts::default())
    }

    /// Build a report using the title prefix of `opts`.
    pub fn from_result_with(result: &AnalysisResult, opts: &OverlayOpts) -> Self {
        let notes = result
            .markup
            .iter()
            .enumerate()
            .map(|(i, a)| AnnotationNote {
                title: opts.title_for(i),
                comment: a.comment.clone(),
                suggestion: a.suggested_action.clone().filter(|s| !s.is_empty()),
            })
            .collect();

        let scores = result
            .scores
            .iter()
            .map(|(k, &score)| ScoreLine {
                label: humanize_key(k),
                score,
                tier: ScoreTier::of(score),
            })
            .collect();

        let suggestions = result
            .suggestions
            .iter()
            .map(|(k, items)| (humanize_key(k), items.clone()))
            .collect();

        let extras = result
            .string_extras()
            .map(|(k, v)| (humanize_key(k), v.to_string()))
            .collect();

        Self {
            sections: vec![
                ReportSection::Annotations(notes),
                ReportSection::GeneralAnalysis(result.analysis.clone()),
                ReportSection::TechnicalAssessment(scores),
                ReportSection::Suggestions(suggestions),
                ReportSection::AdditionalInformation(extras),
            ],
        }
    }

    /// Section with the given heading, if present.
    pub fn section(&self, heading: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.heading() == heading)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "== {} ==", section.heading())?;
            match section {
                ReportSection::Annotations(notes) => {
                    for note in notes {
                        writeln!(f, "{}", note.title)?;
                        writeln!(f, "  {}", note.comment)?;
                        if let Some(s) = &note.suggestion {
                            writeln!(f, "  Suggestion: {s}")?;
                        }
                    }
                }
                ReportSection::GeneralAnalysis(text) => writeln!(f, "{text}")?,
                ReportSection::TechnicalAssessment(lines) => {
                    for line in lines {
                        writeln!(f, "{}: {} ({})", line.label, line.score, line.tier)?;
                    }
                }
                ReportSection::Suggestions(groups) => {
                    for (category, items) in groups {
                        writeln!(f, "{category}")?;
                        for item in items {
                            writeln!(f, "  - {item}")?;
                        }
                    }
                }
                ReportSection::AdditionalInformation(entries) => {
                    for (k, v) in entries {
                        writeln!(f, "{k}: {v}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/report/mod.rs"]
mod tests;
