//! Artifact metadata
//!
//! The title, service, timestamp, and optional score/improvement figures
//! printed at the top of every artifact, with their shared text forms.

use chrono::{DateTime, Local};

/// Timestamp format for "Generated" lines
pub const GENERATED_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactMeta {
    pub title: String,
    pub service_name: String,
    pub generated_at: DateTime<Local>,
    /// Score out of 100
    pub score: Option<f64>,
    pub grade: Option<String>,
    pub improvement_percent: Option<f64>,
}

impl ArtifactMeta {
    pub fn new(title: impl Into<String>, service_name: impl Into<String>, generated_at: DateTime<Local>) -> Self {
        Self {
            title: title.into(),
            service_name: service_name.into(),
            generated_at,
            score: None,
            grade: None,
            improvement_percent: None,
        }
    }

    pub fn generated_text(&self) -> String {
        self.generated_at.format(GENERATED_FORMAT).to_string()
    }

    /// `"N/100"` or `"N/100 (grade)"`; `None` without a finite score
    pub fn score_text(&self) -> Option<String> {
        let score = self.score.filter(|s| s.is_finite())?.clamp(0.0, 100.0);
        let grade = self
            .grade
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty());
        Some(match grade {
            Some(grade) => format!("{}/100 ({})", format_number(score), grade),
            None => format!("{}/100", format_number(score)),
        })
    }

    /// Signed percentage such as `"+12.5%"`; `None` without a finite delta
    pub fn improvement_text(&self) -> Option<String> {
        let delta = round_tenths(self.improvement_percent.filter(|d| d.is_finite())?);
        let sign = if delta >= 0.0 { "+" } else { "" };
        Some(format!("{}{}%", sign, format_number(delta)))
    }
}

/// At most one decimal place, without a trailing `.0`
pub fn format_number(n: f64) -> String {
    let rounded = round_tenths(n);
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Round to one decimal place; values that round to zero become `+0.0`
fn round_tenths(n: f64) -> f64 {
    let rounded = (n * 10.0).round() / 10.0;
    if !rounded.is_finite() {
        n
    } else if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
