//! The obstacle stream: a FIFO queue of gapped pipe pairs scrolling left.

use std::collections::VecDeque;

use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{Res, ResMut},
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::debug;

use crate::audio::Sound;
use crate::constants::{pipes, CANVAS_SIZE};
use crate::systems::{AudioEvent, FrameCount, GameStage, ScoreResource};

/// One obstacle: a top and bottom pipe sharing an x-span, separated by a
/// fixed vertical gap. `y` is the (negative) offset of the top pipe's top
/// edge, randomized at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipePair {
    pub x: f32,
    pub y: f32,
}

impl PipePair {
    pub fn right(&self) -> f32 {
        self.x + pipes::WIDTH
    }

    /// Top edge of the gap window (bottom of the top pipe).
    pub fn gap_top(&self) -> f32 {
        self.y + pipes::HEIGHT
    }

    /// Bottom edge of the gap window (top of the bottom pipe).
    pub fn gap_bottom(&self) -> f32 {
        self.y + pipes::HEIGHT + pipes::GAP
    }
}

/// The ordered sequence of pipe pairs: spawned at the tail, retired from the
/// head once fully off-screen. Only the head can ever be off-screen, so the
/// stream is a strict FIFO.
#[derive(Resource, Debug, Default)]
pub struct PipeStream {
    pairs: VecDeque<PipePair>,
}

impl PipeStream {
    pub fn push(&mut self, pair: PipePair) {
        self.pairs.push_back(pair);
    }

    pub fn front(&self) -> Option<&PipePair> {
        self.pairs.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PipePair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Empties the stream; called when a session (re)starts.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}

/// Seedable random source for pipe vertical offsets, injected as a resource
/// so obstacle spawning is deterministic under test.
#[derive(Resource, Debug)]
pub struct PipeRng(SmallRng);

impl PipeRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(SmallRng::from_os_rng())
    }

    /// Draws a spawn offset in `[2 * MAX_Y_POS, MAX_Y_POS)`, placing the
    /// gap-center uniformly within the playable vertical band.
    pub fn next_offset(&mut self) -> f32 {
        pipes::MAX_Y_POS * (self.0.random::<f32>() + 1.0)
    }
}

/// Spawns, moves, and retires pipe pairs.
///
/// Retirement touches only the head pair and only once it is fully past the
/// left boundary; each retirement scores exactly one point and raises the
/// session-best to the running maximum.
pub fn pipe_system(
    stage: Res<GameStage>,
    frames: Res<FrameCount>,
    mut rng: ResMut<PipeRng>,
    mut stream: ResMut<PipeStream>,
    mut score: ResMut<ScoreResource>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    if !stage.playing() {
        return;
    }

    if frames.0 % pipes::SPAWN_INTERVAL == 0 {
        let pair = PipePair {
            x: CANVAS_SIZE.x as f32,
            y: rng.next_offset(),
        };
        debug!(x = pair.x, y = pair.y, count = stream.len() + 1, "Spawned pipe pair");
        stream.push(pair);
    }

    for pair in stream.pairs.iter_mut() {
        pair.x -= pipes::SPEED;
    }

    if stream.front().is_some_and(|pair| pair.right() <= 0.0) {
        stream.pairs.pop_front();
        score.current += 1;
        score.high = score.high.max(score.current);
        audio_events.write(AudioEvent::PlaySound(Sound::Score));
        debug!(score = score.current, high_score = score.high, "Pipe pair cleared");
    }
}
