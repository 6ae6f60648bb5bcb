use serde::Serialize;

/// Qualitative band for a final grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
    Excellent,
    GreatJob,
    Good,
    NeedsImprovement,
}

/// Presentation hint for rendering a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BandTone {
    Accent,
    Primary,
    Secondary,
    Destructive,
}

impl GradeBand {
    /// Thresholds are checked highest first; each lower bound is inclusive.
    pub fn from_grade(grade: f64) -> Self {
        if grade >= 90.0 {
            GradeBand::Excellent
        } else if grade >= 80.0 {
            GradeBand::GreatJob
        } else if grade >= 70.0 {
            GradeBand::Good
        } else {
            GradeBand::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GradeBand::Excellent => "Excellent",
            GradeBand::GreatJob => "Great Job",
            GradeBand::Good => "Good",
            GradeBand::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn tone(self) -> BandTone {
        match self {
            GradeBand::Excellent => BandTone::Accent,
            GradeBand::GreatJob => BandTone::Primary,
            GradeBand::Good => BandTone::Secondary,
            GradeBand::NeedsImprovement => BandTone::Destructive,
        }
    }
}

pub fn classify(grade: f64) -> GradeBand {
    GradeBand::from_grade(grade)
}
