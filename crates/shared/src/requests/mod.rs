//! Request bodies accepted by the engine.

mod player;

pub use player::{
    CreatePlayerRequest, PhaseActionRequest, RecordInformationRequest, UpdatePlayerRequest,
};
