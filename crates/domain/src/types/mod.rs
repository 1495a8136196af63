//! Shared vocabulary types.
//!
//! Used by both the domain records and the wire DTOs in `grimoire-shared`,
//! so they form the stable contract between the two.
//!
//! 1. **Pure data types** - No I/O, no async, no side effects
//! 2. **Serializable** - All types derive Serialize/Deserialize

mod role_type;
pub use role_type::{Alignment, RoleType};

mod ability_timing;
pub use ability_timing::AbilityTiming;
