//! Grimoire Shared - wire types for the roster HTTP API
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain vocabulary types
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Names, not handles** - characters are referred to by name

pub mod requests;
pub mod responses;

pub use requests::{
    CreatePlayerRequest, PhaseActionRequest, RecordInformationRequest, UpdatePlayerRequest,
};
pub use responses::{MessageResponse, PlayerResponse, RosterCreatedResponse, ScriptResponse};
