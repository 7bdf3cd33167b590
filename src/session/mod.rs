//! Session plugin - the game loop: ticking, collisions, scoring, and restarts.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::food::Food;
use crate::game::{
    Direction, FoodEaten, GameConfig, GameSet, GameState, Position, RestartButton, Ticker,
};
use crate::rendering::{DrawSurface, Frame, Overlay, TileKind};
use crate::score::{FileHighScoreStore, ScoreManager};
use crate::snake::Movement;

/// Plugin for the game loop.
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_session)
            .add_systems(Update, restart_session.in_set(GameSet::Input))
            .add_systems(
                Update,
                (
                    tick_session,
                    redraw_frame.run_if(resource_changed::<GameSession>),
                )
                    .chain()
                    .in_set(GameSet::Simulation),
            );
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is over; nothing moved.
    Idle,
    Moved,
    Ate { position: Position },
    Died(DeathReason),
}

/// Snake, food, score and speed of the game being played.
#[derive(Resource)]
pub struct GameSession {
    config: GameConfig,
    snake: Movement,
    food: Food,
    score: u32,
    tick_interval: Duration,
    state: GameState,
    scores: ScoreManager,
    rng: StdRng,
    seed: u64,
}

impl GameSession {
    pub fn new(config: GameConfig, scores: ScoreManager, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        GameSession {
            snake: Movement::new(&config),
            food: Food::spawn(&mut rng, &config),
            score: 0,
            tick_interval: config.initial_interval,
            state: GameState::Running,
            config,
            scores,
            rng,
            seed,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highscore(&self) -> u32 {
        self.scores.highscore()
    }

    /// Time between two steps at the current score.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn snake(&self) -> &Movement {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Steers the snake; ignored once the game is over.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.state == GameState::Running {
            self.snake.change_direction(direction);
        }
    }

    /// Advances the game by one tick.
    pub fn step(&mut self) -> TickOutcome {
        if self.state == GameState::GameOver {
            return TickOutcome::Idle;
        }

        self.snake.advance();
        let head = self.snake.head();

        if !self.config.in_bounds(head) {
            return self.end_game(DeathReason::WallCollision);
        }

        if self.snake.self_collision() {
            return self.end_game(DeathReason::SelfCollision);
        }

        if head == self.food.position() {
            self.snake.grow();
            self.food.relocate(&mut self.rng, &self.config);
            self.score += 1;
            self.tick_interval = self.config.tick_interval(self.score);
            debug!(
                "Ate food at ({}, {}). Score: {}",
                head.x, head.y, self.score
            );
            return TickOutcome::Ate { position: head };
        }

        TickOutcome::Moved
    }

    fn end_game(&mut self, reason: DeathReason) -> TickOutcome {
        self.state = GameState::GameOver;
        info!("Game over ({:?}). Final score: {}", reason, self.score);

        if let Err(err) = self.scores.save_highscore(self.score) {
            warn!("Failed to save high score {}: {}", self.score, err);
        }

        TickOutcome::Died(reason)
    }

    /// Starts a new game. The high score is kept.
    pub fn restart(&mut self) {
        self.snake = Movement::new(&self.config);
        self.food = Food::spawn(&mut self.rng, &self.config);
        self.score = 0;
        self.tick_interval = self.config.initial_interval;
        self.state = GameState::Running;
        info!("Game restarted");
    }

    /// Clears `surface` and draws food, snake and the text overlay.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        surface.draw_tile(self.food.position(), TileKind::Food);
        surface.draw_tile(self.snake.head(), TileKind::Head);
        for &segment in self.snake.body() {
            surface.draw_tile(segment, TileKind::Body);
        }

        let (score, highscore) = (self.score, self.highscore());
        surface.draw_overlay(match self.state {
            GameState::Running => Overlay::Hud { score, highscore },
            GameState::GameOver => Overlay::GameOver { score, highscore },
        });
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, position: Position) {
        self.food = Food::at(position);
    }
}

/// Startup system creating the session with a fresh seed and the stored high score.
fn start_session(mut commands: Commands, config: Res<GameConfig>) {
    let scores = ScoreManager::new(FileHighScoreStore::new(&config.highscore_path));
    let session = GameSession::new(config.clone(), scores, rand::rng().random());
    info!(
        "Starting session with seed {} (high score {})",
        session.seed(),
        session.highscore()
    );
    commands.insert_resource(session);
}

/// System to step the session whenever the tick interval has elapsed.
fn tick_session(
    time: Res<Time>,
    mut ticker: ResMut<Ticker>,
    mut session: ResMut<GameSession>,
    mut food_eaten_writer: MessageWriter<FoodEaten>,
) {
    if session.state() != GameState::Running {
        return;
    }

    if !ticker.advance(time.delta(), session.tick_interval()) {
        return;
    }

    if let TickOutcome::Ate { position } = session.step() {
        food_eaten_writer.write(FoodEaten { position });
    }
}

/// System to restart from the game over screen (Space or the "Play Again" button).
fn restart_session(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    buttons: Query<&Interaction, (Changed<Interaction>, With<RestartButton>)>,
    mut session: ResMut<GameSession>,
    mut ticker: ResMut<Ticker>,
) {
    if session.state() != GameState::GameOver {
        return;
    }

    let clicked = buttons
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed);

    if clicked || keyboard_input.just_pressed(KeyCode::Space) {
        session.restart();
        ticker.reset();
    }
}

/// System to redraw the frame after the session changed.
fn redraw_frame(session: Res<GameSession>, mut frame: ResMut<Frame>) {
    session.draw(&mut *frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::MemoryHighScoreStore;

    fn session_with(config: GameConfig, store: MemoryHighScoreStore) -> GameSession {
        GameSession::new(config, ScoreManager::new(store), 7)
    }

    fn session() -> GameSession {
        session_with(GameConfig::default(), MemoryHighScoreStore::default())
    }

    /// Parks the food on the bottom-right tile, out of the way.
    fn park_food(session: &mut GameSession) {
        let config = GameConfig::default();
        session.place_food(config.tile(config.columns - 1, config.rows - 1));
    }

    /// Eats food straight ahead until the body has `len` segments.
    fn grow_to(session: &mut GameSession, len: usize) {
        session.change_direction(Direction::Right);
        while session.snake().body().len() < len {
            let head = session.snake().head();
            session.place_food(head.translated(20, 0));
            assert!(matches!(session.step(), TickOutcome::Ate { .. }));
            park_food(session);
        }
    }

    #[test]
    fn test_new_session() {
        let session = session();
        assert_eq!(session.state(), GameState::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.tick_interval(), Duration::from_millis(200));
        assert!(GameConfig::default().in_bounds(session.food().position()));
    }

    #[test]
    fn test_step_moves_right() {
        let mut session = session();
        park_food(&mut session);
        let start = session.snake().head();

        session.change_direction(Direction::Right);
        assert_eq!(session.step(), TickOutcome::Moved);

        assert_eq!(session.snake().head(), start.translated(20, 0));
        assert!(session.snake().body().is_empty());
    }

    #[test]
    fn test_eating_grows_and_speeds_up() {
        let mut session = session();
        session.change_direction(Direction::Down);
        let target = session.snake().head().translated(0, 20);
        session.place_food(target);

        assert_eq!(session.step(), TickOutcome::Ate { position: target });
        assert_eq!(session.score(), 1);
        assert_eq!(session.snake().body().len(), 1);
        assert_eq!(session.tick_interval(), Duration::from_millis(198));
    }

    #[test]
    fn test_body_length_tracks_score() {
        let mut session = session();
        grow_to(&mut session, 4);
        assert_eq!(session.score(), 4);
        assert_eq!(session.snake().body().len(), 4);
    }

    #[test]
    fn test_growth_shows_on_next_move() {
        let mut session = session();
        grow_to(&mut session, 2);

        let head = session.snake().head();
        session.place_food(head.translated(20, 0));
        assert!(matches!(session.step(), TickOutcome::Ate { .. }));
        park_food(&mut session);

        let before_move = session.snake().head();
        assert_eq!(session.step(), TickOutcome::Moved);
        assert_eq!(session.snake().body().len(), 3);
        assert_eq!(session.snake().body()[0], before_move);
    }

    #[test]
    fn test_wall_collision_ends_game_once() {
        let store = MemoryHighScoreStore::default();
        let config = GameConfig {
            start_tile: Position::new(1, 0),
            ..GameConfig::default()
        };
        let mut session = session_with(config.clone(), store.clone());

        session.change_direction(Direction::Left);
        session.place_food(config.tile(0, 0));
        assert!(matches!(session.step(), TickOutcome::Ate { .. }));
        park_food(&mut session);

        assert_eq!(
            session.step(),
            TickOutcome::Died(DeathReason::WallCollision)
        );
        assert_eq!(session.snake().head(), Position::new(-20, 0));
        assert_eq!(session.state(), GameState::GameOver);
        assert_eq!(store.writes(), vec![1]);

        // Nothing moves or persists afterwards
        assert_eq!(session.step(), TickOutcome::Idle);
        assert_eq!(session.snake().head(), Position::new(-20, 0));
        assert_eq!(store.writes(), vec![1]);
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut session = session();
        grow_to(&mut session, 4);

        session.change_direction(Direction::Down);
        assert_eq!(session.step(), TickOutcome::Moved);
        session.change_direction(Direction::Left);
        assert_eq!(session.step(), TickOutcome::Moved);
        session.change_direction(Direction::Up);
        assert_eq!(
            session.step(),
            TickOutcome::Died(DeathReason::SelfCollision)
        );
        assert_eq!(session.highscore(), 4);
    }

    #[test]
    fn test_lower_score_keeps_highscore() {
        let store = MemoryHighScoreStore::with_content("50");
        let config = GameConfig {
            start_tile: Position::new(0, 0),
            ..GameConfig::default()
        };
        let mut session = session_with(config, store.clone());
        park_food(&mut session);

        session.change_direction(Direction::Up);
        assert_eq!(
            session.step(),
            TickOutcome::Died(DeathReason::WallCollision)
        );
        assert_eq!(session.highscore(), 50);
        assert!(store.writes().is_empty());
    }

    #[test]
    fn test_write_failure_does_not_stop_game_over() {
        let config = GameConfig {
            start_tile: Position::new(1, 0),
            ..GameConfig::default()
        };
        let mut session = session_with(config.clone(), MemoryHighScoreStore::failing_writes());

        session.change_direction(Direction::Left);
        session.place_food(config.tile(0, 0));
        session.step();
        park_food(&mut session);

        assert!(matches!(session.step(), TickOutcome::Died(_)));
        assert_eq!(session.state(), GameState::GameOver);
        assert_eq!(session.highscore(), 1);
    }

    #[test]
    fn test_input_ignored_after_game_over() {
        let config = GameConfig {
            start_tile: Position::new(0, 0),
            ..GameConfig::default()
        };
        let mut session = session_with(config, MemoryHighScoreStore::default());
        park_food(&mut session);
        session.change_direction(Direction::Left);
        session.step();

        session.change_direction(Direction::Down);
        assert_eq!(session.snake().direction(), Some(Direction::Left));
    }

    #[test]
    fn test_restart_resets_everything_but_highscore() {
        let mut session = session();
        grow_to(&mut session, 3);
        session.change_direction(Direction::Up);
        while session.state() == GameState::Running {
            session.step();
        }
        assert_eq!(session.highscore(), 3);

        session.restart();

        assert_eq!(session.state(), GameState::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.tick_interval(), Duration::from_millis(200));
        assert_eq!(session.snake().head(), GameConfig::default().start_position());
        assert!(session.snake().body().is_empty());
        assert_eq!(session.snake().direction(), None);
        assert_eq!(session.highscore(), 3);
    }

    #[test]
    fn test_same_seed_same_food() {
        let first = session();
        let second = session();
        assert_eq!(first.seed(), second.seed());
        assert_eq!(first.food(), second.food());
    }

    #[test]
    fn test_small_grid() {
        let config = GameConfig {
            columns: 3,
            rows: 1,
            start_tile: Position::new(0, 0),
            ..GameConfig::default()
        };
        let mut session = session_with(config, MemoryHighScoreStore::default());
        session.place_food(Position::new(100, 100));

        session.change_direction(Direction::Right);
        assert_eq!(session.step(), TickOutcome::Moved);
        assert_eq!(session.step(), TickOutcome::Moved);
        assert_eq!(
            session.step(),
            TickOutcome::Died(DeathReason::WallCollision)
        );
    }

    #[test]
    fn test_draw_while_running() {
        let mut session = session();
        grow_to(&mut session, 2);
        let mut frame = Frame::default();

        session.draw(&mut frame);

        let kinds: Vec<TileKind> = frame.tiles().iter().map(|(_, kind)| *kind).collect();
        assert_eq!(
            kinds,
            vec![TileKind::Food, TileKind::Head, TileKind::Body, TileKind::Body]
        );
        assert_eq!(frame.tiles()[1].0, session.snake().head());
        assert_eq!(
            frame.overlay(),
            Some(Overlay::Hud {
                score: 2,
                highscore: 0
            })
        );
    }

    #[test]
    fn test_draw_after_game_over() {
        let config = GameConfig {
            start_tile: Position::new(0, 0),
            ..GameConfig::default()
        };
        let mut session = session_with(config, MemoryHighScoreStore::with_content("9"));
        park_food(&mut session);
        session.change_direction(Direction::Up);
        session.step();

        let mut frame = Frame::default();
        frame.draw_tile(Position::new(1, 1), TileKind::Body);
        session.draw(&mut frame);

        assert_eq!(frame.tiles().len(), 2);
        assert_eq!(
            frame.overlay(),
            Some(Overlay::GameOver {
                score: 0,
                highscore: 9
            })
        );
    }
}
