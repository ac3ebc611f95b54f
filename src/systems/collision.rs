//! Axis-aligned collision testing between the avatar and the obstacle stream.

use bevy_ecs::{event::EventWriter, system::Res};

use crate::events::GameEvent;
use crate::systems::{Bird, GameStage, PipePair, PipeStream};

/// Tests the avatar's bounding box against a pair's combined obstacle
/// region. The vertical check only applies under horizontal overlap: a box
/// fully outside `[pair left, pair right]` never collides, regardless of
/// vertical position.
pub fn pair_hits_bird(bird: &Bird, pair: &PipePair) -> bool {
    let horizontal_overlap = bird.right() > pair.x && bird.left() < pair.right();
    horizontal_overlap && (bird.top() < pair.gap_top() || bird.bottom() > pair.gap_bottom())
}

/// Emits a game-over event for any pair overlapping the avatar. Several
/// simultaneous hits produce several events; the stage system collapses
/// them into a single transition.
pub fn collision_system(
    stage: Res<GameStage>,
    bird: Res<Bird>,
    stream: Res<PipeStream>,
    mut events: EventWriter<GameEvent>,
) {
    if !stage.playing() {
        return;
    }

    for pair in stream.iter() {
        if pair_hits_bird(&bird, pair) {
            events.write(GameEvent::GameOver);
        }
    }
}
