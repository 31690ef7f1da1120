//! Core domain types for the Overload progression system.
//!
//! This module defines the data contracts consumed and produced by the
//! progression engine:
//! - Equipment, experience level and training style selectors
//! - Difficulty ratings
//! - Performance records (input) and progression results (output)
//! - Per-user equipment settings

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Selectors
// ============================================================================

/// Kind of equipment an exercise is performed with
///
/// Deserialization is lenient: unrecognised names become `Unknown`, which
/// resolves to a fixed fallback increment instead of failing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum EquipmentType {
    Barbell,
    Dumbbell,
    Cable,
    Machine,
    Bodyweight,
    Unknown,
}

impl EquipmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentType::Barbell => "BARBELL",
            EquipmentType::Dumbbell => "DUMBBELL",
            EquipmentType::Cable => "CABLE",
            EquipmentType::Machine => "MACHINE",
            EquipmentType::Bodyweight => "BODYWEIGHT",
            EquipmentType::Unknown => "UNKNOWN",
        }
    }

    fn from_name(name: &str) -> Self {
        match name.trim().to_uppercase().as_str() {
            "BARBELL" => EquipmentType::Barbell,
            "DUMBBELL" => EquipmentType::Dumbbell,
            "CABLE" => EquipmentType::Cable,
            "MACHINE" => EquipmentType::Machine,
            "BODYWEIGHT" => EquipmentType::Bodyweight,
            _ => EquipmentType::Unknown,
        }
    }
}

impl From<String> for EquipmentType {
    fn from(name: String) -> Self {
        let equipment = EquipmentType::from_name(&name);
        if equipment == EquipmentType::Unknown {
            tracing::warn!("Unknown equipment type {:?}, using fallback increment", name);
        }
        equipment
    }
}

impl From<EquipmentType> for String {
    fn from(equipment: EquipmentType) -> Self {
        equipment.as_str().to_string()
    }
}

/// Strict parsing for command-line input, where a typo should be reported
impl FromStr for EquipmentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match EquipmentType::from_name(s) {
            EquipmentType::Unknown if !s.trim().eq_ignore_ascii_case("unknown") => {
                Err(Error::InvalidEquipment(s.to_string()))
            }
            equipment => Ok(equipment),
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifter experience, used to modulate how aggressive progression is
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Position in the per-level lookup tables
    pub(crate) fn index(self) -> usize {
        match self {
            ExperienceLevel::Beginner => 0,
            ExperienceLevel::Intermediate => 1,
            ExperienceLevel::Advanced => 2,
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            other => Err(Error::Config(format!("unknown experience level: {}", other))),
        }
    }
}

/// Training style selector
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingStyle {
    /// Weight always moves, reps never change
    Strength,
    /// Isolation work may trade weight for reps
    Hypertrophy,
}

impl FromStr for TrainingStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(TrainingStyle::Strength),
            "hypertrophy" => Ok(TrainingStyle::Hypertrophy),
            other => Err(Error::InvalidStyle(other.to_string())),
        }
    }
}

// ============================================================================
// Rating
// ============================================================================

/// Subjective difficulty of the last set
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    VeryEasy = 1,
    Easy = 2,
    Moderate = 3,
    Hard = 4,
    TooHard = 5,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::VeryEasy,
        Rating::Easy,
        Rating::Moderate,
        Rating::Hard,
        Rating::TooHard,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based position in rating lookup tables
    pub(crate) fn index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::VeryEasy),
            2 => Ok(Rating::Easy),
            3 => Ok(Rating::Moderate),
            4 => Ok(Rating::Hard),
            5 => Ok(Rating::TooHard),
            other => Err(Error::InvalidRating(other)),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rating::VeryEasy => "very easy",
            Rating::Easy => "easy",
            Rating::Moderate => "moderate",
            Rating::Hard => "hard",
            Rating::TooHard => "too hard",
        };
        write!(f, "{} ({})", self.value(), label)
    }
}

// ============================================================================
// Input / Output Records
// ============================================================================

/// The lifter's last performance of a single exercise
///
/// `rating` is kept as a raw number so that out-of-range ratings can be
/// represented; the engine treats them as a no-op.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PerformanceRecord {
    pub sets: u32,
    pub reps: u32,
    /// Load used; 0 means bodyweight only
    pub weight: f64,
    pub rating: u8,
    #[serde(alias = "equipment_type")]
    pub equipment: EquipmentType,
    #[serde(alias = "compound")]
    pub is_compound: bool,
    #[serde(default)]
    pub exercise_name: String,
    #[serde(default)]
    pub exercise_id: Option<u32>,
}

impl PerformanceRecord {
    /// Convenience constructor for an unnamed exercise
    pub fn new(
        sets: u32,
        reps: u32,
        weight: f64,
        rating: u8,
        equipment: EquipmentType,
        is_compound: bool,
    ) -> Self {
        Self {
            sets,
            reps,
            weight,
            rating,
            equipment,
            is_compound,
            exercise_name: String::new(),
            exercise_id: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.exercise_name = name.into();
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.exercise_id = Some(id);
        self
    }
}

/// A weight and rep pair proposed for the next session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub weight: f64,
    pub reps: u32,
}

impl Target {
    pub fn new(weight: f64, reps: u32) -> Self {
        Self { weight, reps }
    }

    /// The record's own weight and reps
    pub fn hold(record: &PerformanceRecord) -> Self {
        Self::new(record.weight, record.reps)
    }
}

/// Kind of advisory attached to a progression result
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionKind {
    AddWeight,
    ChangeExercise,
}

/// Advisory hint produced by a transition lookup
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressionSuggestion {
    pub kind: SuggestionKind,
    pub message: String,
    pub suggested_exercise_id: Option<u32>,
}

/// Recommended target for the next session
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressionResult {
    pub new_weight: f64,
    pub new_reps: u32,
    #[serde(default)]
    pub deload: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<ProgressionSuggestion>,
}

impl ProgressionResult {
    /// Identity result: the record's weight and reps, untouched
    pub fn unchanged(record: &PerformanceRecord) -> Self {
        Self {
            new_weight: record.weight,
            new_reps: record.reps,
            deload: false,
            suggestion: None,
        }
    }
}

// ============================================================================
// Equipment Settings
// ============================================================================

/// Per-user increment configuration
///
/// Zero, negative or non-finite increments are treated as absent and replaced
/// by the process-wide defaults at lookup time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EquipmentSettings {
    #[serde(default = "default_barbell_increment")]
    pub barbell_increment: f64,

    #[serde(default = "default_dumbbell_increment")]
    pub dumbbell_increment: f64,

    #[serde(default = "default_cable_increment")]
    pub cable_increment: f64,

    #[serde(default = "default_machine_increment")]
    pub machine_increment: f64,

    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
}

impl Default for EquipmentSettings {
    fn default() -> Self {
        crate::rules::DEFAULT_EQUIPMENT_SETTINGS
    }
}

fn default_barbell_increment() -> f64 {
    crate::rules::DEFAULT_EQUIPMENT_SETTINGS.barbell_increment
}

fn default_dumbbell_increment() -> f64 {
    crate::rules::DEFAULT_EQUIPMENT_SETTINGS.dumbbell_increment
}

fn default_cable_increment() -> f64 {
    crate::rules::DEFAULT_EQUIPMENT_SETTINGS.cable_increment
}

fn default_machine_increment() -> f64 {
    crate::rules::DEFAULT_EQUIPMENT_SETTINGS.machine_increment
}

impl EquipmentSettings {
    /// Experience level, defaulting to beginner when unset
    pub fn experience(&self) -> ExperienceLevel {
        self.experience_level.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_conversion() {
        assert_eq!(Rating::try_from(1).unwrap(), Rating::VeryEasy);
        assert_eq!(Rating::try_from(5).unwrap(), Rating::TooHard);
        assert!(matches!(Rating::try_from(0), Err(Error::InvalidRating(0))));
        assert!(matches!(Rating::try_from(6), Err(Error::InvalidRating(6))));

        for (i, rating) in Rating::ALL.iter().enumerate() {
            assert_eq!(rating.index(), i);
            assert_eq!(rating.value() as usize, i + 1);
        }
    }

    #[test]
    fn test_equipment_parsing() {
        assert_eq!("barbell".parse::<EquipmentType>().unwrap(), EquipmentType::Barbell);
        assert_eq!("DUMBBELL".parse::<EquipmentType>().unwrap(), EquipmentType::Dumbbell);
        assert_eq!(" Cable ".parse::<EquipmentType>().unwrap(), EquipmentType::Cable);
        assert!("kettlebell".parse::<EquipmentType>().is_err());
    }

    #[test]
    fn test_equipment_deserialize_is_lenient() {
        let parsed: EquipmentType = serde_json::from_str("\"kettlebell\"").unwrap();
        assert_eq!(parsed, EquipmentType::Unknown);

        let parsed: EquipmentType = serde_json::from_str("\"machine\"").unwrap();
        assert_eq!(parsed, EquipmentType::Machine);

        assert_eq!(serde_json::to_string(&EquipmentType::Bodyweight).unwrap(), "\"BODYWEIGHT\"");
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("Strength".parse::<TrainingStyle>().unwrap(), TrainingStyle::Strength);
        assert_eq!("hypertrophy".parse::<TrainingStyle>().unwrap(), TrainingStyle::Hypertrophy);
        assert!(matches!(
            "endurance".parse::<TrainingStyle>(),
            Err(Error::InvalidStyle(_))
        ));
    }

    #[test]
    fn test_record_from_json() {
        let json = r#"{
            "sets": 3,
            "reps": 8,
            "weight": 60.0,
            "rating": 2,
            "equipment_type": "BARBELL",
            "compound": true,
            "exercise_name": "Bench Press"
        }"#;

        let record: PerformanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.equipment, EquipmentType::Barbell);
        assert!(record.is_compound);
        assert_eq!(record.exercise_id, None);
    }

    #[test]
    fn test_settings_fill_missing_fields() {
        let settings: EquipmentSettings = serde_json::from_str(r#"{"barbell_increment": 1.25}"#).unwrap();
        assert_eq!(settings.barbell_increment, 1.25);
        assert_eq!(settings.dumbbell_increment, 2.0);
        assert_eq!(settings.machine_increment, 5.0);
        assert_eq!(settings.experience(), ExperienceLevel::Beginner);
    }
}
