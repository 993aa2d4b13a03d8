// SPDX-License-Identifier: PMPL-1.0-or-later

//! Workout activity types.
//!
//! The variant set and the raw values mirror the activity enumeration used by
//! upstream health platforms. Raw values that this crate does not know yet
//! parse to [`WorkoutActivityType::Unrecognized`] instead of failing, so data
//! recorded by newer devices still gets a display name ("Other").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A fitness activity.
///
/// The enum is `#[non_exhaustive]`: upstream adds activities over time, and
/// downstream matches must keep a wildcard arm for them.
///
/// Serialized as its identifier (`"stairClimbing"`), or as the bare raw
/// value for `Unrecognized`. Deserialization accepts either form and goes
/// through [`WorkoutActivityType::from_raw`] and [`FromStr`], so a raw value
/// a later release learns about is read back as the named variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ActivityRepr", into = "ActivityRepr")]
#[non_exhaustive]
pub enum WorkoutActivityType {
    AmericanFootball,
    Archery,
    AustralianFootball,
    Badminton,
    Baseball,
    Basketball,
    Bowling,
    Boxing,
    Climbing,
    Cricket,
    CrossTraining,
    Curling,
    Cycling,
    Dance,
    DanceInspiredTraining,
    Elliptical,
    EquestrianSports,
    Fencing,
    Fishing,
    FunctionalStrengthTraining,
    Golf,
    Gymnastics,
    Handball,
    Hiking,
    Hockey,
    Hunting,
    Lacrosse,
    MartialArts,
    MindAndBody,
    MixedMetabolicCardioTraining,
    PaddleSports,
    Play,
    PreparationAndRecovery,
    Racquetball,
    Rowing,
    Rugby,
    Running,
    Sailing,
    SkatingSports,
    SnowSports,
    Soccer,
    Softball,
    Squash,
    StairClimbing,
    SurfingSports,
    Swimming,
    TableTennis,
    Tennis,
    TrackAndField,
    TraditionalStrengthTraining,
    Volleyball,
    Walking,
    WaterFitness,
    WaterPolo,
    WaterSports,
    Wrestling,
    Yoga,
    Barre,
    CoreTraining,
    CrossCountrySkiing,
    DownhillSkiing,
    Flexibility,
    HighIntensityIntervalTraining,
    JumpRope,
    Kickboxing,
    Pilates,
    Snowboarding,
    Stairs,
    StepTraining,
    WheelchairWalkPace,
    WheelchairRunPace,
    TaiChi,
    MixedCardio,
    HandCycling,
    DiscSports,
    FitnessGaming,
    CardioDance,
    SocialDance,
    Pickleball,
    Cooldown,
    SwimBikeRun,
    Transition,
    UnderwaterDiving,
    Other,

    /// A raw value this crate has no variant for (an activity added upstream
    /// after this release).
    Unrecognized(u32),
}

use WorkoutActivityType as W;

impl WorkoutActivityType {
    /// Every known activity, in raw-value order. `Unrecognized` is not listed.
    pub const ALL: &'static [WorkoutActivityType] = &[
        W::AmericanFootball,
        W::Archery,
        W::AustralianFootball,
        W::Badminton,
        W::Baseball,
        W::Basketball,
        W::Bowling,
        W::Boxing,
        W::Climbing,
        W::Cricket,
        W::CrossTraining,
        W::Curling,
        W::Cycling,
        W::Dance,
        W::DanceInspiredTraining,
        W::Elliptical,
        W::EquestrianSports,
        W::Fencing,
        W::Fishing,
        W::FunctionalStrengthTraining,
        W::Golf,
        W::Gymnastics,
        W::Handball,
        W::Hiking,
        W::Hockey,
        W::Hunting,
        W::Lacrosse,
        W::MartialArts,
        W::MindAndBody,
        W::MixedMetabolicCardioTraining,
        W::PaddleSports,
        W::Play,
        W::PreparationAndRecovery,
        W::Racquetball,
        W::Rowing,
        W::Rugby,
        W::Running,
        W::Sailing,
        W::SkatingSports,
        W::SnowSports,
        W::Soccer,
        W::Softball,
        W::Squash,
        W::StairClimbing,
        W::SurfingSports,
        W::Swimming,
        W::TableTennis,
        W::Tennis,
        W::TrackAndField,
        W::TraditionalStrengthTraining,
        W::Volleyball,
        W::Walking,
        W::WaterFitness,
        W::WaterPolo,
        W::WaterSports,
        W::Wrestling,
        W::Yoga,
        W::Barre,
        W::CoreTraining,
        W::CrossCountrySkiing,
        W::DownhillSkiing,
        W::Flexibility,
        W::HighIntensityIntervalTraining,
        W::JumpRope,
        W::Kickboxing,
        W::Pilates,
        W::Snowboarding,
        W::Stairs,
        W::StepTraining,
        W::WheelchairWalkPace,
        W::WheelchairRunPace,
        W::TaiChi,
        W::MixedCardio,
        W::HandCycling,
        W::DiscSports,
        W::FitnessGaming,
        W::CardioDance,
        W::SocialDance,
        W::Pickleball,
        W::Cooldown,
        W::SwimBikeRun,
        W::Transition,
        W::UnderwaterDiving,
        W::Other,
    ];

    /// Upstream numeric value for this activity.
    pub fn raw_value(self) -> u32 {
        match self {
            W::AmericanFootball => 1,
            W::Archery => 2,
            W::AustralianFootball => 3,
            W::Badminton => 4,
            W::Baseball => 5,
            W::Basketball => 6,
            W::Bowling => 7,
            W::Boxing => 8,
            W::Climbing => 9,
            W::Cricket => 10,
            W::CrossTraining => 11,
            W::Curling => 12,
            W::Cycling => 13,
            W::Dance => 14,
            W::DanceInspiredTraining => 15,
            W::Elliptical => 16,
            W::EquestrianSports => 17,
            W::Fencing => 18,
            W::Fishing => 19,
            W::FunctionalStrengthTraining => 20,
            W::Golf => 21,
            W::Gymnastics => 22,
            W::Handball => 23,
            W::Hiking => 24,
            W::Hockey => 25,
            W::Hunting => 26,
            W::Lacrosse => 27,
            W::MartialArts => 28,
            W::MindAndBody => 29,
            W::MixedMetabolicCardioTraining => 30,
            W::PaddleSports => 31,
            W::Play => 32,
            W::PreparationAndRecovery => 33,
            W::Racquetball => 34,
            W::Rowing => 35,
            W::Rugby => 36,
            W::Running => 37,
            W::Sailing => 38,
            W::SkatingSports => 39,
            W::SnowSports => 40,
            W::Soccer => 41,
            W::Softball => 42,
            W::Squash => 43,
            W::StairClimbing => 44,
            W::SurfingSports => 45,
            W::Swimming => 46,
            W::TableTennis => 47,
            W::Tennis => 48,
            W::TrackAndField => 49,
            W::TraditionalStrengthTraining => 50,
            W::Volleyball => 51,
            W::Walking => 52,
            W::WaterFitness => 53,
            W::WaterPolo => 54,
            W::WaterSports => 55,
            W::Wrestling => 56,
            W::Yoga => 57,
            W::Barre => 58,
            W::CoreTraining => 59,
            W::CrossCountrySkiing => 60,
            W::DownhillSkiing => 61,
            W::Flexibility => 62,
            W::HighIntensityIntervalTraining => 63,
            W::JumpRope => 64,
            W::Kickboxing => 65,
            W::Pilates => 66,
            W::Snowboarding => 67,
            W::Stairs => 68,
            W::StepTraining => 69,
            W::WheelchairWalkPace => 70,
            W::WheelchairRunPace => 71,
            W::TaiChi => 72,
            W::MixedCardio => 73,
            W::HandCycling => 74,
            W::DiscSports => 75,
            W::FitnessGaming => 76,
            W::CardioDance => 77,
            W::SocialDance => 78,
            W::Pickleball => 79,
            W::Cooldown => 80,
            W::SwimBikeRun => 82,
            W::Transition => 83,
            W::UnderwaterDiving => 84,
            W::Other => 3000,
            W::Unrecognized(raw) => raw,
        }
    }

    /// Map an upstream raw value to an activity.
    ///
    /// Never fails: unknown values become [`WorkoutActivityType::Unrecognized`].
    pub fn from_raw(raw: u32) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|activity| activity.raw_value() == raw)
            .unwrap_or(W::Unrecognized(raw))
    }

    /// Lower-camel-case identifier (`stairClimbing`), or `None` for
    /// `Unrecognized`.
    pub fn identifier(self) -> Option<&'static str> {
        let id = match self {
            W::AmericanFootball => "americanFootball",
            W::Archery => "archery",
            W::AustralianFootball => "australianFootball",
            W::Badminton => "badminton",
            W::Baseball => "baseball",
            W::Basketball => "basketball",
            W::Bowling => "bowling",
            W::Boxing => "boxing",
            W::Climbing => "climbing",
            W::Cricket => "cricket",
            W::CrossTraining => "crossTraining",
            W::Curling => "curling",
            W::Cycling => "cycling",
            W::Dance => "dance",
            W::DanceInspiredTraining => "danceInspiredTraining",
            W::Elliptical => "elliptical",
            W::EquestrianSports => "equestrianSports",
            W::Fencing => "fencing",
            W::Fishing => "fishing",
            W::FunctionalStrengthTraining => "functionalStrengthTraining",
            W::Golf => "golf",
            W::Gymnastics => "gymnastics",
            W::Handball => "handball",
            W::Hiking => "hiking",
            W::Hockey => "hockey",
            W::Hunting => "hunting",
            W::Lacrosse => "lacrosse",
            W::MartialArts => "martialArts",
            W::MindAndBody => "mindAndBody",
            W::MixedMetabolicCardioTraining => "mixedMetabolicCardioTraining",
            W::PaddleSports => "paddleSports",
            W::Play => "play",
            W::PreparationAndRecovery => "preparationAndRecovery",
            W::Racquetball => "racquetball",
            W::Rowing => "rowing",
            W::Rugby => "rugby",
            W::Running => "running",
            W::Sailing => "sailing",
            W::SkatingSports => "skatingSports",
            W::SnowSports => "snowSports",
            W::Soccer => "soccer",
            W::Softball => "softball",
            W::Squash => "squash",
            W::StairClimbing => "stairClimbing",
            W::SurfingSports => "surfingSports",
            W::Swimming => "swimming",
            W::TableTennis => "tableTennis",
            W::Tennis => "tennis",
            W::TrackAndField => "trackAndField",
            W::TraditionalStrengthTraining => "traditionalStrengthTraining",
            W::Volleyball => "volleyball",
            W::Walking => "walking",
            W::WaterFitness => "waterFitness",
            W::WaterPolo => "waterPolo",
            W::WaterSports => "waterSports",
            W::Wrestling => "wrestling",
            W::Yoga => "yoga",
            W::Barre => "barre",
            W::CoreTraining => "coreTraining",
            W::CrossCountrySkiing => "crossCountrySkiing",
            W::DownhillSkiing => "downhillSkiing",
            W::Flexibility => "flexibility",
            W::HighIntensityIntervalTraining => "highIntensityIntervalTraining",
            W::JumpRope => "jumpRope",
            W::Kickboxing => "kickboxing",
            W::Pilates => "pilates",
            W::Snowboarding => "snowboarding",
            W::Stairs => "stairs",
            W::StepTraining => "stepTraining",
            W::WheelchairWalkPace => "wheelchairWalkPace",
            W::WheelchairRunPace => "wheelchairRunPace",
            W::TaiChi => "taiChi",
            W::MixedCardio => "mixedCardio",
            W::HandCycling => "handCycling",
            W::DiscSports => "discSports",
            W::FitnessGaming => "fitnessGaming",
            W::CardioDance => "cardioDance",
            W::SocialDance => "socialDance",
            W::Pickleball => "pickleball",
            W::Cooldown => "cooldown",
            W::SwimBikeRun => "swimBikeRun",
            W::Transition => "transition",
            W::UnderwaterDiving => "underwaterDiving",
            W::Other => "other",
            W::Unrecognized(_) => return None,
        };
        Some(id)
    }

    /// Whether this is a variant the crate knows by name.
    pub fn is_recognized(self) -> bool {
        !matches!(self, W::Unrecognized(_))
    }
}

/// Input that names no activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown workout activity type: '{0}'")]
pub struct ParseActivityError(pub String);

impl FromStr for WorkoutActivityType {
    type Err = ParseActivityError;

    /// Accepts `stairClimbing`, `stair_climbing`, `stair-climbing` (any case)
    /// or a decimal raw value such as `44`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Ok(raw) = trimmed.parse::<u32>() {
            return Ok(Self::from_raw(raw));
        }

        let folded: String = trimmed
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .flat_map(char::to_lowercase)
            .collect();
        if folded.is_empty() {
            return Err(ParseActivityError(input.to_string()));
        }

        Self::ALL
            .iter()
            .copied()
            .find(|activity| {
                activity
                    .identifier()
                    .is_some_and(|id| id.eq_ignore_ascii_case(&folded))
            })
            .ok_or_else(|| ParseActivityError(input.to_string()))
    }
}

/// Wire form: identifier string or raw value.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ActivityRepr {
    Raw(u32),
    Name(String),
}

impl From<WorkoutActivityType> for ActivityRepr {
    fn from(activity: WorkoutActivityType) -> Self {
        match activity.identifier() {
            Some(id) => ActivityRepr::Name(id.to_string()),
            None => ActivityRepr::Raw(activity.raw_value()),
        }
    }
}

impl TryFrom<ActivityRepr> for WorkoutActivityType {
    type Error = ParseActivityError;

    fn try_from(repr: ActivityRepr) -> Result<Self, Self::Error> {
        match repr {
            ActivityRepr::Raw(raw) => Ok(Self::from_raw(raw)),
            ActivityRepr::Name(name) => name.parse(),
        }
    }
}

impl fmt::Display for WorkoutActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identifier() {
            Some(id) => f.write_str(id),
            None => write!(f, "unrecognized({})", self.raw_value()),
        }
    }
}
