//! Game state machine
//!
//! `Initializing → Running → GameOver → Running`. The game owns every entity,
//! the score and the RNG; physics and storage are collaborators it is handed.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::physics::Physics;
use super::placement::{pick, spawn_y};
use super::state::{Entity, EntityId, EntityKind, GamePhase};
use super::wander::WanderState;
use crate::consts::{BACKGROUND_IMAGE, BACKGROUND_MUSIC};
use crate::highscores::HighScores;
use crate::persistence::Storage;
use crate::platform::{Action, Binding, ButtonState, Key, KeyState, Keyboard, default_bindings};
use crate::score::ScoreTracker;
use crate::settings::Tuning;
use crate::ui::{
    self, ClosedHandler, HIGH_SCORE_PROMPT, HIGH_SCORE_TITLE, HighScoreWindow, INSTRUCTIONS,
    MessageDisplay,
};

/// Static scene assets the host loads for every round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    pub background: &'static str,
    pub music: &'static str,
    pub music_repeats: bool,
}

pub struct Game<P: Physics, S: Storage> {
    pub(super) tuning: Tuning,
    pub(super) physics: P,
    storage: S,
    pub(super) rng: Pcg32,
    seed: u64,
    pub(super) phase: GamePhase,
    pub(super) entities: Vec<Entity>,
    next_id: EntityId,
    pub(super) player: Option<EntityId>,
    pub(super) scores: ScoreTracker,
    bindings: Vec<Binding>,
    pub(super) keyboard: Keyboard,
    pub(super) messages: MessageDisplay,
    help_visible: bool,
    exit_requested: bool,
    window: Option<HighScoreWindow>,
    /// Rounds started so far
    round: u32,
    pub(super) time_ticks: u64,
}

impl<P: Physics, S: Storage> Game<P, S> {
    /// Create a game in `Initializing`. Nothing is spawned until [`Game::begin`].
    pub fn new(tuning: Tuning, physics: P, storage: S, seed: u64) -> Self {
        let messages = MessageDisplay::new(tuning.message_time);
        Self {
            tuning,
            physics,
            storage,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            phase: GamePhase::Initializing,
            entities: Vec::new(),
            next_id: 1,
            player: None,
            scores: ScoreTracker::new(),
            bindings: Vec::new(),
            keyboard: Keyboard::new(),
            messages,
            help_visible: false,
            exit_requested: false,
            window: None,
            round: 0,
            time_ticks: 0,
        }
    }

    /// Initializing → Running
    pub fn begin(&mut self) {
        if self.phase != GamePhase::Initializing {
            log::warn!("begin() called in {:?}, ignoring", self.phase);
            return;
        }
        self.setup_round();
    }

    /// Build a fresh round: field, entities, controls, messages, scores
    fn setup_round(&mut self) {
        self.entities.clear();
        self.next_id = 1;
        self.player = None;
        self.window = None;
        self.help_visible = false;
        self.keyboard.release_all();
        self.messages.clear();

        self.physics.create_borders(self.tuning.half_field());
        // Gravity arms on the first movement key event of the round
        self.physics.set_gravity(Vec2::ZERO);

        self.player = Some(self.spawn(EntityKind::Player));
        let count = self.tuning.collectibles_per_kind;
        let bugs = self.spawn_many(EntityKind::CollectibleKindA, count);
        let butterflies = self.spawn_many(EntityKind::CollectibleKindB, count);
        log::debug!("Collectibles: A {:?}, B {:?}", bugs, butterflies);
        self.spawn(EntityKind::Hazard);

        self.bindings = default_bindings();

        for text in INSTRUCTIONS {
            self.messages.add(text);
        }

        self.scores.load(&self.storage);
        self.scores.reset();

        self.round += 1;
        self.phase = GamePhase::Running;
        log::info!(
            "Round {} started with {} entities (seed {})",
            self.round,
            self.entities.len(),
            self.seed
        );
    }

    /// Spawn one entity of `kind` at its spawn point and return its id
    pub fn spawn(&mut self, kind: EntityKind) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;

        let params = self.tuning.entity(kind).clone();
        let pos = match kind {
            EntityKind::Player => self.tuning.player_spawn,
            EntityKind::Hazard => self.tuning.hazard_spawn,
            EntityKind::CollectibleKindA | EntityKind::CollectibleKindB => {
                Vec2::new(0.0, spawn_y(&mut self.rng, self.tuning.spawn_band) as f32)
            }
        };

        let mut entity = Entity::new(id, kind, pos, params.size);
        entity.mass = params.mass;
        entity.ignores_gravity = params.ignores_gravity;
        entity.turn_while_moving = params.turn_while_moving;
        entity.wander = params.wander_interval.map(WanderState::new);
        entity.sprite = pick(&mut self.rng, &params.sprites).cloned().unwrap_or_default();

        log::debug!("Spawned {} #{} at {:?}", kind.tag(), id, pos);
        self.entities.push(entity);
        id
    }

    /// Spawn `count` entities of `kind`
    pub fn spawn_many(&mut self, kind: EntityKind, count: usize) -> Vec<EntityId> {
        (0..count).map(|_| self.spawn(kind)).collect()
    }

    /// Deliver a host key event
    pub fn handle_key(&mut self, key: Key, state: KeyState) {
        let edge = self.keyboard.update(key, state);
        if !edge {
            return;
        }
        let fired: Vec<Action> = self
            .bindings
            .iter()
            .filter(|b| b.key == key)
            .filter(|b| match state {
                KeyState::Pressed => matches!(b.state, ButtonState::Pressed | ButtonState::Down),
                KeyState::Released => b.state == ButtonState::Released,
            })
            .map(|b| b.action)
            .collect();
        for action in fired {
            self.fire(action);
        }
    }

    /// Fire `Down` bindings of every held key, in registration order
    pub(super) fn fire_held(&mut self) {
        let held: Vec<Action> = self
            .bindings
            .iter()
            .filter(|b| b.state == ButtonState::Down && self.keyboard.is_held(b.key))
            .map(|b| b.action)
            .collect();
        for action in held {
            self.fire(action);
        }
    }

    fn fire(&mut self, action: Action) {
        match action {
            Action::Move(dir) => {
                let vel = dir.unit() * self.tuning.player_speed;
                self.move_player(vel);
            }
            Action::Stop => self.move_player(Vec2::ZERO),
            Action::ShowHelp => {
                self.help_visible = !self.help_visible;
            }
            Action::Exit => {
                log::info!("Exit requested");
                self.exit_requested = true;
            }
        }
    }

    /// Set the player velocity outright and (re)apply gravity
    fn move_player(&mut self, vel: Vec2) {
        if self.phase != GamePhase::Running {
            return;
        }
        let player = self.player;
        if let Some(player) = player.and_then(|id| self.entity_mut(id)) {
            player.vel = vel;
        }
        self.physics.set_gravity(self.tuning.gravity);
    }

    /// Running → GameOver
    pub(super) fn enter_game_over(&mut self) {
        let score = self.scores.current();
        let mut window = HighScoreWindow::new(
            HIGH_SCORE_TITLE,
            HIGH_SCORE_PROMPT,
            self.scores.leaderboard().clone(),
            score,
        );
        window.on_closed(ClosedHandler::SaveLeaderboard);
        window.on_closed(ClosedHandler::Restart);
        self.window = Some(window);
        self.phase = GamePhase::GameOver;
        log::info!("Caught by the cat! Final score {}", score);
    }

    /// Confirm the leaderboard window with the entered name.
    /// Records the score, saves the board, then restarts (GameOver → Running).
    /// Returns false when no window is open.
    pub fn dismiss_high_score(&mut self, name: &str) -> bool {
        let Some(window) = self.window.take() else {
            log::warn!("No leaderboard window to dismiss");
            return false;
        };
        let closed = window.close(name);
        if let Some((name, score)) = closed.entry {
            self.scores.submit(&name, score);
        }
        for handler in closed.handlers {
            match handler {
                ClosedHandler::SaveLeaderboard => self.scores.save(&mut self.storage),
                ClosedHandler::Restart => self.setup_round(),
            }
        }
        true
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub(super) fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Live collectibles
    pub fn collectibles(&self) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(|e| e.alive && e.kind.is_collectible())
    }

    /// The hazard, if on the field
    pub fn hazard(&self) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.alive && e.kind == EntityKind::Hazard)
    }

    /// Live entities of one kind
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.alive && e.kind == kind).count()
    }

    pub fn player(&self) -> Option<&Entity> {
        self.player.and_then(|id| self.entity(id))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.scores.current()
    }

    pub fn score_label(&self) -> String {
        ui::score_label(self.scores.current())
    }

    pub fn leaderboard(&self) -> &HighScores {
        self.scores.leaderboard()
    }

    pub fn high_score_window(&self) -> Option<&HighScoreWindow> {
        self.window.as_ref()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.visible()
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Control help lines for the overlay
    pub fn control_help(&self) -> Vec<String> {
        ui::control_help(&self.bindings)
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn scene(&self) -> Scene {
        Scene {
            background: BACKGROUND_IMAGE,
            music: BACKGROUND_MUSIC,
            music_repeats: true,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut P {
        &mut self.physics
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}
