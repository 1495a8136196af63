//! When a character's ability goes off.

use crate::error::DomainError;
use crate::value_objects::Phase;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timing of a character ability.
///
/// Script sheets abbreviate these as `N1`, `N`, `N*`, `D`, `O` and `P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityTiming {
    /// Night 1 only
    #[serde(alias = "N1")]
    FirstNightOnly,
    /// Every night, including the first
    #[serde(alias = "N")]
    EveryNight,
    /// Every night except the first ("Night*")
    #[serde(alias = "N*")]
    ConditionalNight,
    /// During the day
    #[serde(alias = "D")]
    Day,
    /// Once per game
    #[serde(alias = "O")]
    OneUse,
    /// Always on, never wakes
    #[serde(alias = "P")]
    Passive,
}

impl AbilityTiming {
    pub fn code(&self) -> &'static str {
        match self {
            AbilityTiming::FirstNightOnly => "N1",
            AbilityTiming::EveryNight => "N",
            AbilityTiming::ConditionalNight => "N*",
            AbilityTiming::Day => "D",
            AbilityTiming::OneUse => "O",
            AbilityTiming::Passive => "P",
        }
    }

    /// Whether an ability with this timing is scheduled in `phase`.
    ///
    /// One-use and passive abilities have no fixed phase and always return false.
    pub fn triggers_in(&self, phase: Phase) -> bool {
        match self {
            AbilityTiming::FirstNightOnly => phase == Phase::FIRST_NIGHT,
            AbilityTiming::EveryNight => phase.is_night(),
            AbilityTiming::ConditionalNight => phase.is_night() && phase != Phase::FIRST_NIGHT,
            AbilityTiming::Day => phase.is_day(),
            AbilityTiming::OneUse | AbilityTiming::Passive => false,
        }
    }
}

impl fmt::Display for AbilityTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AbilityTiming::FirstNightOnly => "first night only",
            AbilityTiming::EveryNight => "every night",
            AbilityTiming::ConditionalNight => "each night*",
            AbilityTiming::Day => "day",
            AbilityTiming::OneUse => "one use",
            AbilityTiming::Passive => "passive",
        };
        f.write_str(name)
    }
}

impl FromStr for AbilityTiming {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' ', '-'], "");
        match normalized.as_str() {
            "n1" | "firstnightonly" | "firstnight" => Ok(AbilityTiming::FirstNightOnly),
            "n" | "everynight" | "night" => Ok(AbilityTiming::EveryNight),
            "n*" | "conditionalnight" | "night*" | "eachnight*" => {
                Ok(AbilityTiming::ConditionalNight)
            }
            "d" | "day" => Ok(AbilityTiming::Day),
            "o" | "oneuse" | "once" => Ok(AbilityTiming::OneUse),
            "p" | "passive" => Ok(AbilityTiming::Passive),
            _ => Err(DomainError::parse(format!(
                "Unknown ability timing: '{}'. Valid values: N1, N, N*, D, O, P",
                s
            ))),
        }
    }
}
