//! Repository port traits for roster storage.

use async_trait::async_trait;
use grimoire_domain::PlayerSnapshot;

use super::error::RepoError;
use super::types::RosterFile;

// =============================================================================
// Roster Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterRepo: Send + Sync {
    /// Load every player of a roster. A roster that does not exist yet is empty.
    async fn load(&self, file: &RosterFile) -> Result<Vec<PlayerSnapshot>, RepoError>;

    /// Replace the roster's contents.
    async fn save(&self, file: &RosterFile, players: &[PlayerSnapshot]) -> Result<(), RepoError>;
}
