// SPDX-License-Identifier: PMPL-1.0-or-later

//! Canonical English display names.
//!
//! These strings double as translation keys: every catalog is keyed by the
//! exact value returned from [`name`], so changing one here orphans its
//! translations.

use crate::activity::WorkoutActivityType;

/// Sentinel name for `Other` and for activities this crate does not know.
pub const OTHER: &str = "Other";

/// English display name for `activity`. Total: never empty, never fails.
pub fn name(activity: WorkoutActivityType) -> &'static str {
    use WorkoutActivityType as W;

    match activity {
        W::AmericanFootball => "American Football",
        W::Archery => "Archery",
        W::AustralianFootball => "Australian Football",
        W::Badminton => "Badminton",
        W::Baseball => "Baseball",
        W::Basketball => "Basketball",
        W::Bowling => "Bowling",
        W::Boxing => "Boxing",
        W::Climbing => "Climbing",
        W::CrossTraining => "Cross Training",
        W::Curling => "Curling",
        W::Cycling => "Cycling",
        W::Dance => "Dance",
        W::DanceInspiredTraining => "Dance Inspired Training",
        W::Elliptical => "Elliptical",
        W::EquestrianSports => "Equestrian Sports",
        W::Fencing => "Fencing",
        W::Fishing => "Fishing",
        W::FunctionalStrengthTraining => "Functional Strength Training",
        W::Golf => "Golf",
        W::Gymnastics => "Gymnastics",
        W::Handball => "Handball",
        W::Hiking => "Hiking",
        W::Hockey => "Hockey",
        W::Hunting => "Hunting",
        W::Lacrosse => "Lacrosse",
        W::MartialArts => "Martial Arts",
        W::MindAndBody => "Mind and Body",
        W::MixedMetabolicCardioTraining => "Mixed Metabolic Cardio Training",
        W::PaddleSports => "Paddle Sports",
        W::Play => "Play",
        W::PreparationAndRecovery => "Preparation and Recovery",
        W::Racquetball => "Racquetball",
        W::Rowing => "Rowing",
        W::Rugby => "Rugby",
        W::Running => "Running",
        W::Sailing => "Sailing",
        W::SkatingSports => "Skating Sports",
        W::SnowSports => "Snow Sports",
        W::Soccer => "Soccer",
        W::Softball => "Softball",
        W::Squash => "Squash",
        W::StairClimbing => "Stair Climbing",
        W::SurfingSports => "Surfing Sports",
        W::Swimming => "Swimming",
        W::TableTennis => "Table Tennis",
        W::Tennis => "Tennis",
        W::TrackAndField => "Track and Field",
        W::TraditionalStrengthTraining => "Traditional Strength Training",
        W::Volleyball => "Volleyball",
        W::Walking => "Walking",
        W::WaterFitness => "Water Fitness",
        W::WaterPolo => "Water Polo",
        W::WaterSports => "Water Sports",
        W::Wrestling => "Wrestling",
        W::Yoga => "Yoga",
        W::Barre => "Barre",
        W::CoreTraining => "Core Training",
        W::CrossCountrySkiing => "Cross Country Skiing",
        W::DownhillSkiing => "Downhill Skiing",
        W::Flexibility => "Flexibility",
        W::HighIntensityIntervalTraining => "High Intensity Interval Training",
        W::JumpRope => "Jump Rope",
        W::Kickboxing => "Kickboxing",
        W::Pilates => "Pilates",
        W::Snowboarding => "Snowboarding",
        W::Stairs => "Stairs",
        W::StepTraining => "Step Training",
        W::WheelchairWalkPace => "Wheelchair Walk Pace",
        W::WheelchairRunPace => "Wheelchair Run Pace",
        W::TaiChi => "Tai Chi",
        W::MixedCardio => "Mixed Cardio",
        W::HandCycling => "Hand Cycling",
        W::DiscSports => "Disc Sports",
        W::FitnessGaming => "Fitness Gaming",
        W::Cricket => "Cricket",
        W::CardioDance => "Cardio Dance",
        W::SocialDance => "Social Dance",
        W::Pickleball => "Pickleball",
        W::Cooldown => "Cooldown",
        W::SwimBikeRun => "Swim Bike Run",
        W::Transition => "Transition",
        W::UnderwaterDiving => "Underwater Diving",
        W::Other => OTHER,

        // Unrecognized and anything added upstream later.
        _ => OTHER,
    }
}

impl WorkoutActivityType {
    /// English display name. See [`name`].
    pub fn name(self) -> &'static str {
        name(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn documented_names() {
        assert_eq!(name(WorkoutActivityType::Running), "Running");
        assert_eq!(name(WorkoutActivityType::StairClimbing), "Stair Climbing");
        assert_eq!(name(WorkoutActivityType::MindAndBody), "Mind and Body");
        assert_eq!(
            name(WorkoutActivityType::HighIntensityIntervalTraining),
            "High Intensity Interval Training"
        );
        assert_eq!(name(WorkoutActivityType::UnderwaterDiving), "Underwater Diving");
        assert_eq!(name(WorkoutActivityType::Pickleball), "Pickleball");
    }

    #[test]
    fn every_activity_has_a_name() {
        for activity in WorkoutActivityType::ALL {
            assert!(!name(*activity).is_empty(), "{activity:?} has an empty name");
        }
    }

    #[test]
    fn names_are_distinct() {
        let mut seen = HashSet::new();
        for activity in WorkoutActivityType::ALL {
            assert!(seen.insert(name(*activity)), "duplicate name for {activity:?}");
        }
    }

    #[test]
    fn unrecognized_is_other() {
        assert_eq!(name(WorkoutActivityType::Unrecognized(85)), "Other");
        assert_eq!(name(WorkoutActivityType::from_raw(4242)), "Other");
        assert_eq!(WorkoutActivityType::Other.name(), "Other");
    }

    #[test]
    fn repeated_calls_agree() {
        for activity in WorkoutActivityType::ALL {
            assert_eq!(name(*activity), name(*activity));
        }
    }
}
