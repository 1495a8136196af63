//! JSON file roster storage.
//!
//! Each roster is one pretty-printed JSON array of player snapshots in the
//! game directory. Writes go to a temporary file first and are renamed into
//! place, so a crash never leaves a half-written roster behind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use grimoire_domain::PlayerSnapshot;

use crate::infrastructure::ports::{RepoError, RosterFile, RosterRepo};

pub struct JsonFileRosterRepo {
    dir: PathBuf,
}

impl JsonFileRosterRepo {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the game directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), RepoError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| RepoError::storage("create_game_dir", e))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_of(&self, file: &RosterFile) -> PathBuf {
        self.dir.join(file.as_str())
    }
}

#[async_trait]
impl RosterRepo for JsonFileRosterRepo {
    async fn load(&self, file: &RosterFile) -> Result<Vec<PlayerSnapshot>, RepoError> {
        let path = self.path_of(file);
        let data = match tokio::fs::read_to_string(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(file = %file, "Roster file does not exist yet, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::error!(file = %file, error = %e, "Error reading roster file");
                return Err(RepoError::storage("load_roster", e));
            }
        };

        serde_json::from_str(&data).map_err(|e| {
            tracing::error!(file = %file, error = %e, "Roster file is not valid JSON");
            RepoError::serialization(e)
        })
    }

    async fn save(&self, file: &RosterFile, players: &[PlayerSnapshot]) -> Result<(), RepoError> {
        let path = self.path_of(file);
        let data = serde_json::to_string_pretty(players).map_err(RepoError::serialization)?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, data).await.map_err(|e| {
            tracing::error!(file = %file, error = %e, "Error writing roster file");
            RepoError::storage("save_roster", e)
        })?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| RepoError::storage("save_roster", e))?;

        tracing::debug!(file = %file, players = players.len(), "Saved roster");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_domain::{Alignment, Phase, Player, PlayerName, Script};

    fn snapshots() -> Vec<PlayerSnapshot> {
        let script = Script::trouble_brewing();
        let mut alice = Player::new(
            PlayerName::new("Alice").unwrap(),
            Alignment::Good,
            script.require("Empath").unwrap(),
        );
        alice.begin_phase(Phase::FIRST_NIGHT).unwrap();
        alice.add_token("Poisoned").unwrap();
        let bob = Player::new(
            PlayerName::new("Bob").unwrap(),
            Alignment::Evil,
            script.require("Imp").unwrap(),
        );
        vec![alice.snapshot(), bob.snapshot()]
    }

    #[tokio::test]
    async fn missing_roster_loads_empty() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileRosterRepo::new(temp_dir.path());

        let players = repo
            .load(&RosterFile::new("nothing.json").unwrap())
            .await
            .expect("load");
        assert!(players.is_empty());
    }

    #[tokio::test]
    async fn saved_roster_loads_back() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileRosterRepo::new(temp_dir.path());
        let file = RosterFile::new("game.json").unwrap();
        let players = snapshots();

        repo.save(&file, &players).await.expect("save");
        let loaded = repo.load(&file).await.expect("load");

        assert_eq!(loaded, players);
        assert!(!temp_dir.path().join("game.json.tmp").exists());
    }

    #[tokio::test]
    async fn roster_is_pretty_printed() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileRosterRepo::new(temp_dir.path());
        let file = RosterFile::new("game.json").unwrap();

        repo.save(&file, &snapshots()).await.expect("save");
        let raw = std::fs::read_to_string(temp_dir.path().join("game.json")).unwrap();

        assert!(raw.starts_with("[\n  {"));
        assert!(raw.contains("\"role\": \"Empath\""));
    }

    #[tokio::test]
    async fn corrupt_roster_is_a_serialization_error() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(temp_dir.path().join("bad.json"), "{not json").unwrap();
        let repo = JsonFileRosterRepo::new(temp_dir.path());

        let err = repo
            .load(&RosterFile::new("bad.json").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Serialization(_)));
    }

    #[tokio::test]
    async fn ensure_dir_creates_nested_directory() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileRosterRepo::new(temp_dir.path().join("games").join("2025"));

        repo.ensure_dir().await.expect("ensure_dir");
        assert!(repo.dir().is_dir());
    }
}
