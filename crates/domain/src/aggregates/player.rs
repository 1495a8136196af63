//! Player aggregate - mutable per-seat state for one game
//!
//! # Design
//!
//! - **Shared characters**: `role` and `hidden_role` are `Arc<Character>` handles
//!   from a [`Script`]; a player never owns a character exclusively.
//! - **One history**: liveness, droisoning and reminder tokens are kept in a
//!   single `Vec<PhaseState>` indexed by [`Phase`], so the three logical
//!   sequences always have the same length.
//! - **Snapshots**: roles are persisted by name and resolved against a script
//!   when a snapshot is restored.

use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

use crate::aggregates::Character;
use crate::entities::Information;
use crate::error::DomainError;
use crate::ids::PlayerId;
use crate::script::Script;
use crate::types::Alignment;
use crate::value_objects::{Phase, PhaseState, PlayerName};

/// A seated player.
///
/// # Invariants
///
/// - `hidden_role` is the same `Arc` as `role` unless an obscuring effect is active
/// - `phases[i]` describes phase `i` (0 = Night 1, 1 = Day 1, ...)
/// - Phases are only ever appended, one at a time, in order
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use grimoire_domain::{Alignment, Player, PlayerName, Script};
///
/// let script = Script::trouble_brewing();
/// let washerwoman = script.require("Washerwoman").unwrap();
///
/// let alice = Player::new(PlayerName::new("Alice").unwrap(), Alignment::Good, washerwoman);
///
/// assert_eq!(alice.role().name().as_str(), "Washerwoman");
/// assert!(Arc::ptr_eq(alice.role(), alice.hidden_role()));
/// assert!(alice.phases().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: PlayerName,
    alignment: Alignment,
    role: Arc<Character>,
    hidden_role: Arc<Character>,
    phases: Vec<PhaseState>,
    death_cause: String,
    info: Vec<Information>,
    notes: String,
}

impl Player {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Seat a player with their starting alignment and character.
    ///
    /// The hidden role starts as the same character; all histories are empty.
    pub fn new(name: PlayerName, alignment: Alignment, role: Arc<Character>) -> Self {
        Self {
            id: PlayerId::new(),
            name,
            alignment,
            hidden_role: Arc::clone(&role),
            role,
            phases: Vec::new(),
            death_cause: String::new(),
            info: Vec::new(),
            notes: String::new(),
        }
    }

    /// Set the player's ID (used when loading from storage).
    pub fn with_id(mut self, id: PlayerId) -> Self {
        self.id = id;
        self
    }

    /// Set the true character at seating time (e.g. the Drunk).
    pub fn with_hidden_role(mut self, hidden_role: Arc<Character>) -> Self {
        self.hidden_role = hidden_role;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    #[inline]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The character currently shown to and by the player.
    #[inline]
    pub fn role(&self) -> &Arc<Character> {
        &self.role
    }

    /// The player's true character.
    #[inline]
    pub fn hidden_role(&self) -> &Arc<Character> {
        &self.hidden_role
    }

    /// Returns true if the shown character differs from the true one.
    pub fn is_obscured(&self) -> bool {
        !Arc::ptr_eq(&self.role, &self.hidden_role)
    }

    #[inline]
    pub fn death_cause(&self) -> &str {
        &self.death_cause
    }

    #[inline]
    pub fn info(&self) -> &[Information] {
        &self.info
    }

    #[inline]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    // =========================================================================
    // Phase History
    // =========================================================================

    /// Full per-phase history, index = phase.
    #[inline]
    pub fn phases(&self) -> &[PhaseState] {
        &self.phases
    }

    pub fn phase_state(&self, phase: Phase) -> Option<&PhaseState> {
        self.phases.get(phase.index() as usize)
    }

    /// The most recently begun phase, if any.
    pub fn current_phase(&self) -> Option<Phase> {
        self.phases
            .len()
            .checked_sub(1)
            .map(|idx| Phase::from_index(idx as u32))
    }

    /// The phase `begin_phase` expects next.
    pub fn next_phase(&self) -> Phase {
        Phase::from_index(self.phases.len() as u32)
    }

    /// Alive in the latest phase. A player is alive before the first phase begins.
    pub fn is_alive(&self) -> bool {
        self.phases.last().map_or(true, |state| state.alive)
    }

    pub fn is_droisoned(&self) -> bool {
        self.phases.last().map_or(false, |state| state.droisoned)
    }

    pub fn alive_sequence(&self) -> Vec<bool> {
        self.phases.iter().map(|state| state.alive).collect()
    }

    pub fn droisoned_sequence(&self) -> Vec<bool> {
        self.phases.iter().map(|state| state.droisoned).collect()
    }

    pub fn token_sequence(&self) -> Vec<&[String]> {
        self.phases.iter().map(|state| state.tokens.as_slice()).collect()
    }

    /// Start recording `phase`.
    ///
    /// Liveness carries over from the previous phase; droisoning and tokens
    /// start fresh.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` unless `phase` is exactly
    /// the next phase for this player.
    pub fn begin_phase(&mut self, phase: Phase) -> Result<(), DomainError> {
        let expected = self.next_phase();
        if phase != expected {
            return Err(DomainError::invalid_state_transition(format!(
                "{} cannot begin {}: next phase is {}",
                self.name, phase, expected
            )));
        }
        self.phases.push(PhaseState::carried_from(self.is_alive()));
        Ok(())
    }

    fn current_state_mut(&mut self) -> Result<&mut PhaseState, DomainError> {
        let name = &self.name;
        self.phases.last_mut().ok_or_else(|| {
            DomainError::invalid_state_transition(format!("No phase has begun for {}", name))
        })
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Mark the player dead in the current phase.
    pub fn kill(&mut self, cause: impl Into<String>) -> Result<(), DomainError> {
        let state = self.current_state_mut()?;
        if !state.alive {
            return Err(DomainError::invalid_state_transition(format!(
                "{} is already dead",
                self.name
            )));
        }
        state.alive = false;
        self.death_cause = cause.into();
        Ok(())
    }

    /// Bring the player back to life in the current phase, clearing the death cause.
    pub fn revive(&mut self) -> Result<(), DomainError> {
        let state = self.current_state_mut()?;
        if state.alive {
            return Err(DomainError::invalid_state_transition(format!(
                "{} is not dead",
                self.name
            )));
        }
        state.alive = true;
        self.death_cause.clear();
        Ok(())
    }

    pub fn set_droisoned(&mut self, droisoned: bool) -> Result<(), DomainError> {
        self.current_state_mut()?.droisoned = droisoned;
        Ok(())
    }

    /// Place a reminder token on the player for the current phase.
    pub fn add_token(&mut self, token: impl Into<String>) -> Result<(), DomainError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(DomainError::validation("Token cannot be empty"));
        }
        self.current_state_mut()?.tokens.push(token);
        Ok(())
    }

    /// Remove the first matching token from the current phase.
    ///
    /// Returns whether a token was removed.
    pub fn remove_token(&mut self, token: &str) -> Result<bool, DomainError> {
        let tokens = &mut self.current_state_mut()?.tokens;
        match tokens.iter().position(|t| t == token) {
            Some(idx) => {
                tokens.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn add_info(&mut self, info: Information) {
        self.info.push(info);
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn set_death_cause(&mut self, cause: impl Into<String>) {
        self.death_cause = cause.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Obscure the player's true character (drunk, marionette, ...).
    pub fn set_hidden_role(&mut self, hidden_role: Arc<Character>) {
        self.hidden_role = hidden_role;
    }

    /// End any obscuring effect: the true character becomes the shown one.
    pub fn clear_hidden_role(&mut self) {
        self.hidden_role = Arc::clone(&self.role);
    }

    /// Give the player a new character outright. Clears any obscuring effect.
    pub fn set_role(&mut self, role: Arc<Character>) {
        self.hidden_role = Arc::clone(&role);
        self.role = role;
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            id: self.id,
            player: self.name.clone(),
            alignment: self.alignment,
            role: self.role.name().to_string(),
            hidden_role: self.hidden_role.name().to_string(),
            phases: self.phases.clone(),
            death_cause: self.death_cause.clone(),
            info: self.info.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Rebuild a player from a snapshot, resolving characters against `script`.
    ///
    /// When both names resolve to the same character the two roles share one `Arc`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if either role is not in the script.
    pub fn restore(snapshot: PlayerSnapshot, script: &Script) -> Result<Self, DomainError> {
        let role = script.require(&snapshot.role)?;
        let hidden_role = script.require(&snapshot.hidden_role)?;

        Ok(Self {
            id: snapshot.id,
            name: snapshot.player,
            alignment: snapshot.alignment,
            role,
            hidden_role,
            phases: snapshot.phases,
            death_cause: snapshot.death_cause,
            info: snapshot.info,
            notes: snapshot.notes,
        })
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Serialisable form of a [`Player`]; characters are referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub player: PlayerName,
    pub alignment: Alignment,
    pub role: String,
    pub hidden_role: String,
    #[serde(default)]
    pub phases: Vec<PhaseState>,
    #[serde(default)]
    pub death_cause: String,
    #[serde(default)]
    pub info: Vec<Information>,
    #[serde(default)]
    pub notes: String,
}

impl Serialize for Player {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.snapshot().serialize(serializer)
    }
}

// ============================================================================
// Tests
// ============================================================================
