//! Trouble Brewing - the base edition.

use super::Script;
use crate::aggregates::Character;
use crate::types::{AbilityTiming, RoleType};
use crate::value_objects::CharacterName;

use AbilityTiming::*;
use RoleType::*;

#[rustfmt::skip]
const CHARACTERS: &[(&str, RoleType, AbilityTiming, &str, &str)] = &[
    // Townsfolk
    ("Washerwoman", Townsfolk, FirstNightOnly,
     "You start knowing that 1 of 2 players is a particular Townsfolk.", ""),
    ("Librarian", Townsfolk, FirstNightOnly,
     "You start knowing that 1 of 2 players is a particular Outsider. (Or that zero are in play.)", ""),
    ("Investigator", Townsfolk, FirstNightOnly,
     "You start knowing that 1 of 2 players is a particular Minion.", ""),
    ("Chef", Townsfolk, FirstNightOnly,
     "You start knowing how many pairs of evil players there are.", ""),
    ("Empath", Townsfolk, EveryNight,
     "Each night, you learn how many of your 2 alive neighbours are evil.", ""),
    ("Fortune Teller", Townsfolk, EveryNight,
     "Each night, choose 2 players: you learn if either is a Demon. There is a good player that registers as a Demon to you.", ""),
    ("Undertaker", Townsfolk, ConditionalNight,
     "Each night*, you learn which character died by execution today.", ""),
    ("Monk", Townsfolk, ConditionalNight,
     "Each night*, choose a player (not yourself): they are safe from the Demon tonight.", ""),
    ("Ravenkeeper", Townsfolk, ConditionalNight,
     "If you die at night, you are woken to choose a player: you learn their character.", ""),
    ("Virgin", Townsfolk, Passive,
     "The 1st time you are nominated, if the nominator is a Townsfolk, they are executed immediately.", ""),
    ("Slayer", Townsfolk, OneUse,
     "Once per game, during the day, publicly choose a player: if they are the Demon, they die.", ""),
    ("Soldier", Townsfolk, Passive,
     "You are safe from the Demon.", ""),
    ("Mayor", Townsfolk, Passive,
     "If only 3 players live & no execution occurs, your team wins. If you die at night, another player might die instead.", ""),
    // Outsiders
    ("Butler", Outsider, EveryNight,
     "Each night, choose a player (not yourself): tomorrow, you may only vote if they are voting too.", ""),
    ("Drunk", Outsider, Passive,
     "You do not know you are the Drunk. You think you are a Townsfolk character, but you are not.",
     "The Drunk is shown a Townsfolk token instead of their own."),
    ("Recluse", Outsider, Passive,
     "You might register as evil & as a Minion or Demon, even if dead.", ""),
    ("Saint", Outsider, Passive,
     "If you die by execution, your team loses.", ""),
    // Minions
    ("Poisoner", Minion, EveryNight,
     "Each night, choose a player: they are poisoned tonight and tomorrow day.", ""),
    ("Spy", Minion, EveryNight,
     "Each night, you see the Grimoire. You might register as good & as a Townsfolk or Outsider, even if dead.", ""),
    ("Scarlet Woman", Minion, Passive,
     "If there are 5 or more players alive & the Demon dies, you become the Demon. (Travellers don't count.)", ""),
    ("Baron", Minion, Passive,
     "There are extra Outsiders in play.", "[+2 Outsiders]"),
    // Demon
    ("Imp", Demon, ConditionalNight,
     "Each night*, choose a player: they die. If you kill yourself this way, a Minion becomes the Imp.", ""),
];

pub(super) fn script() -> Script {
    let mut script = Script::new("Trouble Brewing");
    for &(name, role_type, timing, ability, setup) in CHARACTERS {
        script.push_trusted(Character::new(
            CharacterName::from_trusted(name),
            role_type,
            timing,
            ability,
            setup,
        ));
    }
    script
}
