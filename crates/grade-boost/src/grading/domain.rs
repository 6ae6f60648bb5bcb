use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A percentage guaranteed to be finite and within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Percentage(f64);

impl Percentage {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;
    pub const ZERO: Percentage = Percentage(0.0);

    pub fn new(value: f64) -> Result<Self, InputError> {
        if !value.is_finite() {
            return Err(InputError::NotFinite);
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(InputError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Percentage {
    type Error = InputError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for f64 {
    fn from(value: Percentage) -> Self {
        value.0
    }
}

impl FromStr for Percentage {
    type Err = InputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| InputError::NotANumber(raw.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised at the input-collection boundary, before values reach the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("value {value} is outside the allowed range 0-100")]
    OutOfRange { value: f64 },
    #[error("value must be a finite number")]
    NotFinite,
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Homework,
    Midterm,
    FinalExam,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 3] = [
        ComponentKind::Homework,
        ComponentKind::Midterm,
        ComponentKind::FinalExam,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Homework => "Homework",
            ComponentKind::Midterm => "Midterm",
            ComponentKind::FinalExam => "Final Exam",
        }
    }
}

/// One graded component as entered. `None` means the field has not been filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentInput {
    #[serde(default)]
    pub weight: Option<Percentage>,
    #[serde(default)]
    pub score: Option<Percentage>,
}

impl ComponentInput {
    pub fn new(weight: Option<Percentage>, score: Option<Percentage>) -> Self {
        Self { weight, score }
    }

    pub fn weighted(weight: f64, score: f64) -> Result<Self, InputError> {
        Ok(Self {
            weight: Some(Percentage::new(weight)?),
            score: Some(Percentage::new(score)?),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.weight.is_none() && self.score.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Absent values become zero. Only the computation boundary should call this.
    pub fn coerced(&self) -> CoercedComponent {
        CoercedComponent {
            weight: self.weight.unwrap_or(Percentage::ZERO).value(),
            score: self.score.unwrap_or(Percentage::ZERO).value(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CoercedComponent {
    pub weight: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CoercedComponents {
    pub homework: CoercedComponent,
    pub midterm: CoercedComponent,
    pub final_exam: CoercedComponent,
}

/// The three components collected for a single submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeRequest {
    #[serde(default)]
    pub homework: ComponentInput,
    #[serde(default)]
    pub midterm: ComponentInput,
    #[serde(default)]
    pub final_exam: ComponentInput,
}

impl GradeRequest {
    pub fn new(
        homework: ComponentInput,
        midterm: ComponentInput,
        final_exam: ComponentInput,
    ) -> Self {
        Self {
            homework,
            midterm,
            final_exam,
        }
    }

    pub fn component(&self, kind: ComponentKind) -> &ComponentInput {
        match kind {
            ComponentKind::Homework => &self.homework,
            ComponentKind::Midterm => &self.midterm,
            ComponentKind::FinalExam => &self.final_exam,
        }
    }

    pub fn component_mut(&mut self, kind: ComponentKind) -> &mut ComponentInput {
        match kind {
            ComponentKind::Homework => &mut self.homework,
            ComponentKind::Midterm => &mut self.midterm,
            ComponentKind::FinalExam => &mut self.final_exam,
        }
    }

    pub fn components(&self) -> impl Iterator<Item = (ComponentKind, &ComponentInput)> {
        ComponentKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.component(kind)))
    }

    pub fn set_weight(&mut self, kind: ComponentKind, weight: Option<Percentage>) {
        self.component_mut(kind).weight = weight;
    }

    pub fn set_score(&mut self, kind: ComponentKind, score: Option<Percentage>) {
        self.component_mut(kind).score = score;
    }

    pub fn clear(&mut self, kind: ComponentKind) {
        self.component_mut(kind).clear();
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Sum of the entered weights, absent weights counting as zero.
    pub fn total_weight(&self) -> f64 {
        self.components()
            .map(|(_, input)| input.weight.map_or(0.0, Percentage::value))
            .sum()
    }

    pub fn coerced(&self) -> CoercedComponents {
        CoercedComponents {
            homework: self.homework.coerced(),
            midterm: self.midterm.coerced(),
            final_exam: self.final_exam.coerced(),
        }
    }
}

/// Flat form payload mirroring the six input fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradeForm {
    #[serde(default)]
    pub homework_weight: Option<Percentage>,
    #[serde(default)]
    pub homework_score: Option<Percentage>,
    #[serde(default)]
    pub midterm_weight: Option<Percentage>,
    #[serde(default)]
    pub midterm_score: Option<Percentage>,
    #[serde(default)]
    pub final_exam_weight: Option<Percentage>,
    #[serde(default)]
    pub final_exam_score: Option<Percentage>,
}

impl From<GradeForm> for GradeRequest {
    fn from(form: GradeForm) -> Self {
        GradeRequest {
            homework: ComponentInput::new(form.homework_weight, form.homework_score),
            midterm: ComponentInput::new(form.midterm_weight, form.midterm_score),
            final_exam: ComponentInput::new(form.final_exam_weight, form.final_exam_score),
        }
    }
}
