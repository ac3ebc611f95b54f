#![allow(dead_code)]

use bevy_ecs::event::Events;
use bevy_ecs::schedule::Schedule;
use bevy_ecs::world::World;

use flappy::events::{GameCommand, GameEvent};
use flappy::game::Game;
use flappy::systems::{AudioEvent, GameStage};

pub const TEST_SEED: u64 = 42;

/// Builds a headless simulation world with a deterministic pipe RNG. No SDL
/// resources are involved; only the simulation systems are scheduled.
pub fn sim_world(seed: u64) -> (World, Schedule) {
    let mut world = World::default();
    let mut schedule = Schedule::default();

    Game::register_events(&mut world);
    Game::insert_simulation_resources(&mut world, Some(seed));
    Game::add_simulation_systems(&mut schedule);

    (world, schedule)
}

pub fn send(world: &mut World, command: GameCommand) {
    world.send_event(GameEvent::Command(command));
}

pub fn tick(world: &mut World, schedule: &mut Schedule) {
    schedule.run(world);
}

pub fn ticks(world: &mut World, schedule: &mut Schedule, count: usize) {
    for _ in 0..count {
        schedule.run(world);
    }
}

/// Starts a session and runs the tick that performs the transition.
pub fn start_session(world: &mut World, schedule: &mut Schedule) {
    send(world, GameCommand::Start);
    tick(world, schedule);
    assert!(world.resource::<GameStage>().playing());
}

/// Drains every audio cue event accumulated since the last drain.
pub fn drain_audio(world: &mut World) -> Vec<AudioEvent> {
    world.resource_mut::<Events<AudioEvent>>().drain().collect()
}
