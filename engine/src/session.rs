use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

use crate::config::GameConfig;
use crate::log;
use crate::snake::{Direction, GameEngine, GameSnapshot, StepOutcome};

/// Receives a snapshot after every completed step.
pub trait SnapshotBroadcaster: Send + Sync + 'static {
    fn broadcast_snapshot(
        &self,
        snapshot: GameSnapshot,
        outcome: StepOutcome,
    ) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Raw key symbol, mapped through `direction_from_key`.
    Key(String),
    Turn(Direction),
    Stop,
}

pub struct SnakeSession;

impl SnakeSession {
    /// Builds the engine from `config` and ticks at its configured interval.
    pub async fn run_with_config<B: SnapshotBroadcaster>(
        config: GameConfig,
        commands: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: B,
    ) -> GameEngine {
        let engine = GameEngine::from_config(&config);
        Self::run(engine, config.tick_interval(), commands, broadcaster).await
    }

    /// Drives `engine` on a fixed tick until `Stop` arrives or every command
    /// sender is dropped. Commands and ticks are handled on this one task, so
    /// the engine is never touched concurrently. A command that is already
    /// queued when a tick fires is applied first.
    pub async fn run<B: SnapshotBroadcaster>(
        mut engine: GameEngine,
        tick_interval: Duration,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: B,
    ) -> GameEngine {
        let mut ticker = interval(tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; the first step waits a full interval.
        ticker.tick().await;

        log!(
            "Session started: {}x{} board, tick {}ms",
            engine.board().size(),
            engine.board().size(),
            tick_interval.as_millis()
        );

        loop {
            tokio::select! {
                biased;

                command = commands.recv() => match command {
                    Some(SessionCommand::Key(key)) => {
                        engine.handle_key(&key);
                    }
                    Some(SessionCommand::Turn(direction)) => engine.set_direction(direction),
                    Some(SessionCommand::Stop) | None => break,
                },
                _ = ticker.tick() => {
                    let outcome = engine.step();
                    broadcaster.broadcast_snapshot(engine.snapshot(), outcome).await;
                }
            }
        }

        log!(
            "Session stopped. Games played: {}, current score: {}",
            engine.games_played(),
            engine.score()
        );
        engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionRng;
    use crate::snake::{Cell, Coordinate, GameOverReason};

    const TICK: Duration = Duration::from_millis(200);

    #[derive(Clone)]
    struct ChannelBroadcaster {
        tx: mpsc::UnboundedSender<(GameSnapshot, StepOutcome)>,
    }

    impl SnapshotBroadcaster for ChannelBroadcaster {
        fn broadcast_snapshot(
            &self,
            snapshot: GameSnapshot,
            outcome: StepOutcome,
        ) -> impl Future<Output = ()> + Send {
            let tx = self.tx.clone();
            async move {
                let _ = tx.send((snapshot, outcome));
            }
        }
    }

    fn start() -> (
        mpsc::UnboundedSender<SessionCommand>,
        mpsc::UnboundedReceiver<(GameSnapshot, StepOutcome)>,
        tokio::task::JoinHandle<GameEngine>,
    ) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = mpsc::unbounded_channel();
        let engine = GameEngine::new(15, SessionRng::new(42));
        let broadcaster = ChannelBroadcaster { tx: snapshot_tx };
        let handle = tokio::spawn(SnakeSession::run(engine, TICK, command_rx, broadcaster));
        (command_tx, snapshot_rx, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_step_and_broadcast() {
        let (commands, mut snapshots, handle) = start();

        let (snapshot, outcome) = snapshots.recv().await.unwrap();
        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(snapshot.segments[0].cell, Cell::new(82));

        commands.send(SessionCommand::Turn(Direction::Down)).unwrap();
        let (snapshot, _) = snapshots.recv().await.unwrap();
        assert_eq!(snapshot.segments[0].coordinate, Coordinate::new(6, 6));
        assert_eq!(snapshot.heading, Direction::Down);

        commands.send(SessionCommand::Stop).unwrap();
        let engine = handle.await.unwrap();
        assert_eq!(engine.body().head().coordinate, Coordinate::new(6, 6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_with_config_uses_tick_interval() {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, mut snapshots) = mpsc::unbounded_channel();
        let config = GameConfig {
            board_size: 10,
            tick_interval_ms: 100,
            seed: Some(5),
        };
        let started = tokio::time::Instant::now();
        let handle = tokio::spawn(SnakeSession::run_with_config(
            config,
            command_rx,
            ChannelBroadcaster { tx: snapshot_tx },
        ));

        let (snapshot, _) = snapshots.recv().await.unwrap();
        assert_eq!(snapshot.board.size(), 10);
        assert_eq!(started.elapsed(), Duration::from_millis(100));
        snapshots.recv().await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(200));

        command_tx.send(SessionCommand::Stop).unwrap();
        let engine = handle.await.unwrap();
        assert_eq!(engine.seed(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_and_closed_channel() {
        let (commands, mut snapshots, handle) = start();
        commands.send(SessionCommand::Key("x".to_string())).unwrap();
        commands.send(SessionCommand::Key("ArrowUp".to_string())).unwrap();

        let (snapshot, _) = snapshots.recv().await.unwrap();
        assert_eq!(snapshot.segments[0].coordinate, Coordinate::new(4, 5));

        drop(commands);
        let engine = handle.await.unwrap();
        assert_eq!(engine.heading(), Direction::Up);
    }

    #[tokio::test(start_paused = true)]
    async fn test_game_over_is_broadcast_after_reset() {
        let (commands, mut snapshots, handle) = start();
        commands.send(SessionCommand::Turn(Direction::Up)).unwrap();

        for _ in 0..5 {
            let (_, outcome) = snapshots.recv().await.unwrap();
            assert_eq!(outcome, StepOutcome::Moved);
        }
        let (snapshot, outcome) = snapshots.recv().await.unwrap();
        assert_eq!(
            outcome,
            StepOutcome::GameOver {
                reason: GameOverReason::WallCollision,
                score: 0
            }
        );
        assert_eq!(snapshot.segments.len(), 1);
        assert_eq!(snapshot.segments[0].cell, Cell::new(81));
        assert_eq!(snapshot.heading, Direction::Right);

        commands.send(SessionCommand::Stop).unwrap();
        let engine = handle.await.unwrap();
        assert_eq!(engine.games_played(), 1);
    }
}
