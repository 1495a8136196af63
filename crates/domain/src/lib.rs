//! Grimoire Domain - the data model of a Blood on the Clocktower grimoire.
//!
//! Game logic (night order, ability resolution, adjudicating deaths) is not
//! modelled here; this crate only holds the records such logic reads and writes.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod script;
pub mod types;
pub mod value_objects;

pub use aggregates::{Character, Player, PlayerSnapshot};
pub use entities::{Information, InformationKind};
pub use error::DomainError;
pub use ids::PlayerId;
pub use script::Script;
pub use types::{AbilityTiming, Alignment, RoleType};
pub use value_objects::{CharacterName, Phase, PhaseState, PlayerName};
