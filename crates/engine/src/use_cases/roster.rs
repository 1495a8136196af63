//! Roster use cases - reading and writing the players of one game.
//!
//! Every write is a load-modify-save of the whole roster file, serialized
//! per file so concurrent requests cannot lose each other's changes. A file's
//! lock is dropped from the table once no request holds or awaits it, so the
//! table only grows with the number of files being written concurrently.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use grimoire_domain::{
    DomainError, Information, Phase, Player, PlayerId, PlayerName, PlayerSnapshot, Script,
};
use grimoire_shared::{
    CreatePlayerRequest, PhaseActionRequest, RecordInformationRequest, UpdatePlayerRequest,
};

use crate::infrastructure::ports::{ClockPort, RepoError, RosterFile, RosterFileError, RosterRepo};

/// Shared error type for roster use cases.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    File(#[from] RosterFileError),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

pub struct RosterUseCases {
    repo: Arc<dyn RosterRepo>,
    script: Arc<Script>,
    clock: Arc<dyn ClockPort>,
    locks: DashMap<RosterFile, Arc<Mutex<()>>>,
}

impl RosterUseCases {
    pub fn new(repo: Arc<dyn RosterRepo>, script: Arc<Script>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            repo,
            script,
            clock,
            locks: DashMap::new(),
        }
    }

    /// The script every roster is resolved against.
    pub fn script(&self) -> &Script {
        &self.script
    }

    fn lock_for(&self, file: &RosterFile) -> Arc<Mutex<()>> {
        self.locks.entry(file.clone()).or_default().clone()
    }

    /// Forget the lock for `file` once only the table still references it.
    fn release_lock(&self, file: &RosterFile) {
        self.locks
            .remove_if(file, |_, lock| Arc::strong_count(lock) == 1);
    }

    pub async fn get_player(&self, file: &RosterFile, id: PlayerId) -> Result<Player, RosterError> {
        let snapshot = self
            .repo
            .load(file)
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| player_not_found(id))?;

        Ok(Player::restore(snapshot, &self.script)?)
    }

    /// Apply a partial update and persist it.
    ///
    /// A new `role` replaces both characters; `hidden_role` is applied after
    /// it, so both may be sent together to seat an obscured player.
    pub async fn update_player(
        &self,
        file: &RosterFile,
        id: PlayerId,
        update: UpdatePlayerRequest,
    ) -> Result<Player, RosterError> {
        if update.is_empty() {
            return Err(RosterError::InvalidInput("No fields to update".to_string()));
        }

        self.modify_player(file, id, |player, script| {
            if let Some(alignment) = update.alignment {
                player.set_alignment(alignment);
            }
            if let Some(role) = &update.role {
                player.set_role(script.require(role)?);
            }
            if let Some(hidden_role) = &update.hidden_role {
                player.set_hidden_role(script.require(hidden_role)?);
            }
            if let Some(death_cause) = update.death_cause {
                player.set_death_cause(death_cause);
            }
            if let Some(notes) = update.notes {
                player.set_notes(notes);
            }
            Ok(())
        })
        .await
    }

    /// Append a statement to a player's information, stamped with the current time.
    pub async fn record_information(
        &self,
        file: &RosterFile,
        id: PlayerId,
        request: RecordInformationRequest,
    ) -> Result<Player, RosterError> {
        let info = Information::new(
            Phase::from_index(request.phase),
            request.kind,
            request.statement,
            self.clock.now(),
        )?;

        self.modify_player(file, id, move |player, _| {
            player.add_info(info);
            Ok(())
        })
        .await
    }

    /// Record one change to a player's per-phase history.
    pub async fn apply_phase_action(
        &self,
        file: &RosterFile,
        id: PlayerId,
        action: PhaseActionRequest,
    ) -> Result<Player, RosterError> {
        self.modify_player(file, id, move |player, _| match action {
            PhaseActionRequest::Begin { phase } => player.begin_phase(Phase::from_index(phase)),
            PhaseActionRequest::Kill { cause } => player.kill(cause),
            PhaseActionRequest::Revive => player.revive(),
            PhaseActionRequest::SetDroisoned { droisoned } => player.set_droisoned(droisoned),
            PhaseActionRequest::AddToken { token } => player.add_token(token),
            PhaseActionRequest::RemoveToken { token } => {
                if player.remove_token(&token)? {
                    Ok(())
                } else {
                    Err(DomainError::not_found("Token", token))
                }
            }
        })
        .await
    }

    /// Seat a new set of players, replacing whatever the roster held before.
    pub async fn create_roster(
        &self,
        file: &RosterFile,
        requests: Vec<CreatePlayerRequest>,
    ) -> Result<Vec<Player>, RosterError> {
        let players = requests
            .into_iter()
            .map(|request| self.seat(request))
            .collect::<Result<Vec<_>, _>>()?;

        let snapshots: Vec<PlayerSnapshot> = players.iter().map(Player::snapshot).collect();

        let lock = self.lock_for(file);
        let saved = {
            let _guard = lock.lock().await;
            self.repo.save(file, &snapshots).await
        };
        drop(lock);
        self.release_lock(file);
        saved?;

        tracing::info!(file = %file, players = players.len(), "Created roster");
        Ok(players)
    }

    fn seat(&self, request: CreatePlayerRequest) -> Result<Player, RosterError> {
        let name = PlayerName::new(request.name)?;
        let role = self.script.require(&request.role)?;
        let mut player = Player::new(name, request.alignment, role);
        if let Some(hidden_role) = request.hidden_role {
            player.set_hidden_role(self.script.require(&hidden_role)?);
        }
        Ok(player)
    }

    async fn modify_player<F>(
        &self,
        file: &RosterFile,
        id: PlayerId,
        apply: F,
    ) -> Result<Player, RosterError>
    where
        F: FnOnce(&mut Player, &Script) -> Result<(), DomainError>,
    {
        let lock = self.lock_for(file);
        let result = {
            let _guard = lock.lock().await;
            self.load_apply_save(file, id, apply).await
        };
        drop(lock);
        self.release_lock(file);
        result
    }

    async fn load_apply_save<F>(
        &self,
        file: &RosterFile,
        id: PlayerId,
        apply: F,
    ) -> Result<Player, RosterError>
    where
        F: FnOnce(&mut Player, &Script) -> Result<(), DomainError>,
    {
        let mut snapshots = self.repo.load(file).await?;
        let index = snapshots
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| player_not_found(id))?;

        let mut player = Player::restore(snapshots[index].clone(), &self.script)?;
        apply(&mut player, &self.script)?;
        snapshots[index] = player.snapshot();

        self.repo.save(file, &snapshots).await?;
        tracing::debug!(file = %file, player_id = %id, "Updated player");
        Ok(player)
    }
}

fn player_not_found(id: PlayerId) -> RosterError {
    RosterError::NotFound {
        entity_type: "Player",
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockClockPort, MockRosterRepo};
    use chrono::{TimeZone, Utc};
    use grimoire_domain::{Alignment, InformationKind};
    use std::sync::Mutex as StdMutex;

    fn file() -> RosterFile {
        RosterFile::new("game.json").unwrap()
    }

    fn script() -> Arc<Script> {
        Arc::new(Script::trouble_brewing())
    }

    fn stored_player(role: &str) -> PlayerSnapshot {
        let script = Script::trouble_brewing();
        Player::new(
            PlayerName::new("Alice").unwrap(),
            Alignment::Good,
            script.require(role).unwrap(),
        )
        .snapshot()
    }

    fn no_clock() -> Arc<dyn ClockPort> {
        Arc::new(MockClockPort::new())
    }

    /// A repo holding `players` that records whatever is saved.
    fn repo_with(
        players: Vec<PlayerSnapshot>,
        saved: Arc<StdMutex<Vec<PlayerSnapshot>>>,
    ) -> MockRosterRepo {
        let mut repo = MockRosterRepo::new();
        repo.expect_load()
            .withf(|file| file.as_str() == "game.json")
            .returning(move |_| Ok(players.clone()));
        repo.expect_save().returning(move |_, players| {
            *saved.lock().unwrap() = players.to_vec();
            Ok(())
        });
        repo
    }

    mod get_player {
        use super::*;

        #[tokio::test]
        async fn returns_player_with_resolved_roles() {
            let stored = stored_player("Chef");
            let id = stored.id;
            let repo = repo_with(vec![stored], Arc::default());
            let use_case = RosterUseCases::new(Arc::new(repo), script(), no_clock());

            let player = use_case.get_player(&file(), id).await.unwrap();

            assert_eq!(player.id(), id);
            assert_eq!(player.role().name().as_str(), "Chef");
            assert!(!player.is_obscured());
        }

        #[tokio::test]
        async fn unknown_player_is_not_found() {
            let repo = repo_with(vec![stored_player("Chef")], Arc::default());
            let use_case = RosterUseCases::new(Arc::new(repo), script(), no_clock());

            let err = use_case.get_player(&file(), PlayerId::new()).await.unwrap_err();
            assert!(matches!(err, RosterError::NotFound { entity_type: "Player", .. }));
        }

        #[tokio::test]
        async fn repo_failure_is_propagated() {
            let mut repo = MockRosterRepo::new();
            repo.expect_load()
                .returning(|_| Err(RepoError::storage("load_roster", "disk on fire")));
            let use_case = RosterUseCases::new(Arc::new(repo), script(), no_clock());

            let err = use_case.get_player(&file(), PlayerId::new()).await.unwrap_err();
            assert!(matches!(err, RosterError::Repo(_)));
        }
    }

    mod update_player {
        use super::*;

        #[tokio::test]
        async fn empty_update_is_rejected_without_touching_storage() {
            let repo = MockRosterRepo::new();
            let use_case = RosterUseCases::new(Arc::new(repo), script(), no_clock());

            let err = use_case
                .update_player(&file(), PlayerId::new(), UpdatePlayerRequest::default())
                .await
                .unwrap_err();
            assert!(matches!(err, RosterError::InvalidInput(_)));
        }

        #[tokio::test]
        async fn obscures_and_saves_player() {
            let stored = stored_player("Washerwoman");
            let id = stored.id;
            let saved = Arc::new(StdMutex::new(Vec::new()));
            let repo = repo_with(vec![stored], saved.clone());
            let use_case = RosterUseCases::new(Arc::new(repo), script(), no_clock());

            let update = UpdatePlayerRequest {
                hidden_role: Some("Drunk".to_string()),
                notes: Some("pinged Bob and Carol".to_string()),
                ..Default::default()
            };
            let player = use_case.update_player(&file(), id, update).await.unwrap();

            assert_eq!(player.role().name().as_str(), "Washerwoman");
            assert_eq!(player.hidden_role().name().as_str(), "Drunk");

            let saved = saved.lock().unwrap();
            assert_eq!(saved.len(), 1);
            assert_eq!(saved[0].hidden_role, "Drunk");
            assert_eq!(saved[0].notes, "pinged Bob and Carol");
        }

        #[tokio::test]
        async fn role_then_hidden_role_are_both_applied() {
            let stored = stored_player("Chef");
            let id = stored.id;
            let repo = repo_with(vec![stored], Arc::default());
            let use_case = RosterUseCases::new(Arc::new(repo), script(), no_clock());

            let update = UpdatePlayerRequest {
                role: Some("Empath".to_string()),
                hidden_role: Some("Drunk".to_string()),
                alignment: Some(Alignment::Good),
                ..Default::default()
            };
            let player = use_case.update_player(&file(), id, update).await.unwrap();

            assert_eq!(player.role().name().as_str(), "Empath");
            assert_eq!(player.hidden_role().name().as_str(), "Drunk");
        }

        #[tokio::test]
        async fn unknown_character_is_a_domain_error_and_nothing_is_saved() {
            let stored = stored_player("Chef");
            let id = stored.id;
            let mut repo = MockRosterRepo::new();
            repo.expect_load().returning(move |_| Ok(vec![stored.clone()]));
            repo.expect_save().never();
            let use_case = RosterUseCases::new(Arc::new(repo), script(), no_clock());

            let update = UpdatePlayerRequest {
                role: Some("Pit-Hag".to_string()),
                ..Default::default()
            };
            let err = use_case.update_player(&file(), id, update).await.unwrap_err();

            assert!(matches!(err, RosterError::Domain(DomainError::NotFound { .. })));
        }
    }

    mod record_information {
        use super::*;

        #[tokio::test]
        async fn stamps_information_with_clock() {
            let stored = stored_player("Investigator");
            let id = stored.id;
            let saved = Arc::new(StdMutex::new(Vec::new()));
            let repo = repo_with(vec![stored], saved.clone());
            let now = Utc.with_ymd_and_hms(2025, 10, 31, 21, 0, 0).unwrap();
            let mut clock = MockClockPort::new();
            clock.expect_now().times(1).returning(move || now);
            let use_case = RosterUseCases::new(Arc::new(repo), script(), Arc::new(clock));

            let request = RecordInformationRequest {
                phase: 0,
                kind: InformationKind::Given,
                statement: "Bob or Carol is the Poisoner".to_string(),
            };
            let player = use_case.record_information(&file(), id, request).await.unwrap();

            assert_eq!(player.info().len(), 1);
            assert_eq!(player.info()[0].recorded_at(), now);
            assert_eq!(player.info()[0].phase(), Phase::FIRST_NIGHT);
            assert_eq!(saved.lock().unwrap()[0].info.len(), 1);
        }
    }

    mod apply_phase_action {
        use super::*;

        fn use_case_for(
            stored: PlayerSnapshot,
            saved: Arc<StdMutex<Vec<PlayerSnapshot>>>,
        ) -> RosterUseCases {
            RosterUseCases::new(Arc::new(repo_with(vec![stored], saved)), script(), no_clock())
        }

        #[tokio::test]
        async fn begin_then_kill_is_saved_in_phase_history() {
            let stored = stored_player("Empath");
            let id = stored.id;
            let saved = Arc::new(StdMutex::new(Vec::new()));
            let use_case = use_case_for(stored, saved.clone());

            use_case
                .apply_phase_action(&file(), id, PhaseActionRequest::Begin { phase: 0 })
                .await
                .unwrap();
            let snapshot = saved.lock().unwrap()[0].clone();
            assert_eq!(snapshot.phases.len(), 1);
            assert!(snapshot.phases[0].alive);

            let use_case = use_case_for(snapshot, saved.clone());
            let player = use_case
                .apply_phase_action(
                    &file(),
                    id,
                    PhaseActionRequest::Kill {
                        cause: "Imp kill".to_string(),
                    },
                )
                .await
                .unwrap();

            assert!(!player.is_alive());
            assert_eq!(player.death_cause(), "Imp kill");
            assert!(!saved.lock().unwrap()[0].phases[0].alive);
        }

        #[tokio::test]
        async fn tokens_and_droisoning_apply_to_current_phase() {
            let mut player = Player::restore(stored_player("Chef"), &Script::trouble_brewing()).unwrap();
            player.begin_phase(Phase::FIRST_NIGHT).unwrap();
            player.add_token("Poisoned").unwrap();
            let id = player.id();
            let saved = Arc::new(StdMutex::new(Vec::new()));
            let use_case = use_case_for(player.snapshot(), saved.clone());

            let player = use_case
                .apply_phase_action(
                    &file(),
                    id,
                    PhaseActionRequest::RemoveToken {
                        token: "Poisoned".to_string(),
                    },
                )
                .await
                .unwrap();
            assert!(player.phases()[0].tokens.is_empty());

            let use_case = use_case_for(saved.lock().unwrap()[0].clone(), saved.clone());
            let player = use_case
                .apply_phase_action(&file(), id, PhaseActionRequest::SetDroisoned { droisoned: true })
                .await
                .unwrap();
            assert!(player.is_droisoned());
        }

        #[tokio::test]
        async fn out_of_order_phase_is_rejected_and_nothing_is_saved() {
            let stored = stored_player("Chef");
            let id = stored.id;
            let mut repo = MockRosterRepo::new();
            repo.expect_load().returning(move |_| Ok(vec![stored.clone()]));
            repo.expect_save().never();
            let use_case = RosterUseCases::new(Arc::new(repo), script(), no_clock());

            let err = use_case
                .apply_phase_action(&file(), id, PhaseActionRequest::Begin { phase: 3 })
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                RosterError::Domain(DomainError::InvalidStateTransition(_))
            ));

            let err = use_case
                .apply_phase_action(&file(), id, PhaseActionRequest::Revive)
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                RosterError::Domain(DomainError::InvalidStateTransition(_))
            ));
        }

        #[tokio::test]
        async fn removing_absent_token_is_not_found() {
            let mut player = Player::restore(stored_player("Chef"), &Script::trouble_brewing()).unwrap();
            player.begin_phase(Phase::FIRST_NIGHT).unwrap();
            let id = player.id();
            let use_case = use_case_for(player.snapshot(), Arc::default());

            let err = use_case
                .apply_phase_action(
                    &file(),
                    id,
                    PhaseActionRequest::RemoveToken {
                        token: "Red Herring".to_string(),
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                RosterError::Domain(DomainError::NotFound { entity_type: "Token", .. })
            ));
        }
    }

    mod file_locks {
        use super::*;

        #[tokio::test]
        async fn locks_are_released_after_each_write() {
            let stored = stored_player("Chef");
            let id = stored.id;
            let repo = repo_with(vec![stored], Arc::default());
            let use_case = RosterUseCases::new(Arc::new(repo), script(), no_clock());

            let update = UpdatePlayerRequest {
                notes: Some("quiet".to_string()),
                ..Default::default()
            };
            use_case.update_player(&file(), id, update).await.unwrap();
            assert!(use_case.locks.is_empty());

            // Failed writes release too.
            let _ = use_case.get_player(&file(), PlayerId::new()).await;
            let _ = use_case
                .apply_phase_action(&file(), PlayerId::new(), PhaseActionRequest::Revive)
                .await;
            assert!(use_case.locks.is_empty());
        }

        #[tokio::test]
        async fn held_lock_is_kept() {
            let use_case =
                RosterUseCases::new(Arc::new(MockRosterRepo::new()), script(), no_clock());

            let held = use_case.lock_for(&file());
            use_case.release_lock(&file());
            assert_eq!(use_case.locks.len(), 1);

            drop(held);
            use_case.release_lock(&file());
            assert!(use_case.locks.is_empty());
        }
    }

    mod create_roster {
        use super::*;

        fn request(name: &str, alignment: Alignment, role: &str) -> CreatePlayerRequest {
            CreatePlayerRequest {
                name: name.to_string(),
                alignment,
                role: role.to_string(),
                hidden_role: None,
            }
        }

        #[tokio::test]
        async fn seats_every_player_and_saves_once() {
            let mut repo = MockRosterRepo::new();
            repo.expect_save()
                .withf(|file, players| {
                    file.as_str() == "game.json"
                        && players.len() == 2
                        && players[1].hidden_role == "Drunk"
                })
                .times(1)
                .returning(|_, _| Ok(()));
            let use_case = RosterUseCases::new(Arc::new(repo), script(), no_clock());

            let mut drunk = request("Bob", Alignment::Good, "Chef");
            drunk.hidden_role = Some("Drunk".to_string());
            let players = use_case
                .create_roster(&file(), vec![request("Alice", Alignment::Evil, "Imp"), drunk])
                .await
                .unwrap();

            assert_eq!(players.len(), 2);
            assert!(players[1].is_obscured());
            assert!(players.iter().all(|p| p.phases().is_empty()));
        }

        #[tokio::test]
        async fn invalid_player_name_saves_nothing() {
            let mut repo = MockRosterRepo::new();
            repo.expect_save().never();
            let use_case = RosterUseCases::new(Arc::new(repo), script(), no_clock());

            let err = use_case
                .create_roster(&file(), vec![request("  ", Alignment::Good, "Chef")])
                .await
                .unwrap_err();
            assert!(matches!(err, RosterError::Domain(DomainError::Validation(_))));
        }
    }
}
