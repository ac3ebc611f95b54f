//! This module contains the main game wiring: the ECS world, the system
//! schedule, and the per-frame driver.

use bevy_ecs::event::EventRegistry;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::world::World;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;
use tracing::{debug, info};

use crate::audio::Audio;
use crate::error::GameResult;
use crate::events::GameEvent;
use crate::scores::{scores_poll_system, scores_request_system, PlayerName, ScoresClient, ScoresView, SubmitControl, DEFAULT_BASE_URL};
use crate::systems::{
    audio_system, bird_physics_system, collision_system, flap_system, frame_system, handle_audio_commands,
    handle_exit_command, hud_render_system, input_system, pipe_system, present_system, render_system, stage_system,
    AudioEvent, AudioResource, AudioState, Bindings, Bird, FrameCount, GameStage, GlobalState, PipeRng, PipeStream,
    ScoreResource,
};

/// System set for all gameplay systems to ensure they run after input processing
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameplaySet {
    /// Gameplay systems that process inputs
    Input,
    /// Gameplay systems that update the game state
    Update,
    /// Gameplay systems that respond to events
    Respond,
}

/// System set for all rendering systems to ensure they run after gameplay logic
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum RenderSet {
    Draw,
    Present,
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// All session state (avatar, obstacle stream, score, stage, frame counter)
/// lives in the `World` as resources owned by this struct; a `Schedule`
/// defines system execution order. There are no process-wide singletons.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Initializes the ECS world and schedule, the audio device, and the
    /// score service client.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if resource setup fails; SDL handles are passed
    /// in already constructed by the `App`.
    pub fn new(canvas: Canvas<Window>, event_pump: EventPump) -> GameResult<Game> {
        info!("Starting game initialization");

        let mut world = World::default();
        let mut schedule = Schedule::default();

        debug!("Setting up ECS event registry");
        Self::register_events(&mut world);

        debug!("Inserting simulation resources");
        Self::insert_simulation_resources(&mut world, None);
        world.insert_resource(Bindings::default());

        debug!("Initializing audio subsystem");
        world.insert_non_send_resource(AudioResource(Audio::new()));

        debug!(base_url = DEFAULT_BASE_URL, "Creating score service client");
        world.insert_non_send_resource(ScoresClient::over_http(DEFAULT_BASE_URL));

        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(event_pump);

        debug!("Configuring system execution schedule");
        Self::add_simulation_systems(&mut schedule);
        Self::add_frontend_systems(&mut schedule);

        info!("Game initialization completed successfully");
        Ok(Game { world, schedule })
    }

    /// Registers the buffered event types used by the schedule.
    pub fn register_events(world: &mut World) {
        EventRegistry::register_event::<GameEvent>(world);
        EventRegistry::register_event::<AudioEvent>(world);
    }

    /// Inserts every resource the simulation systems touch. `rng_seed` pins
    /// obstacle spawning for deterministic runs; `None` seeds from the OS.
    pub fn insert_simulation_resources(world: &mut World, rng_seed: Option<u64>) {
        world.insert_resource(GameStage::default());
        world.insert_resource(Bird::default());
        world.insert_resource(PipeStream::default());
        world.insert_resource(match rng_seed {
            Some(seed) => PipeRng::from_seed(seed),
            None => PipeRng::from_entropy(),
        });
        world.insert_resource(ScoreResource::default());
        world.insert_resource(FrameCount::default());
        world.insert_resource(AudioState::default());
        world.insert_resource(ScoresView::default());
        world.insert_resource(SubmitControl::default());
        world.insert_resource(PlayerName::default());
        world.insert_resource(GlobalState::default());
    }

    /// Adds the simulation systems: tick bookkeeping, avatar physics, the
    /// obstacle stream, collision resolution, and the session state machine.
    /// Everything here is SDL-free and runs headless under test.
    pub fn add_simulation_systems(schedule: &mut Schedule) {
        schedule
            .add_systems((
                frame_system.in_set(GameplaySet::Input),
                (flap_system, bird_physics_system, pipe_system, collision_system)
                    .chain()
                    .in_set(GameplaySet::Update),
                (handle_exit_command, handle_audio_commands, stage_system).in_set(GameplaySet::Respond),
                bevy_ecs::event::event_update_system.after(GameplaySet::Respond),
            ))
            .configure_sets((GameplaySet::Input, GameplaySet::Update, GameplaySet::Respond).chain());
    }

    /// Adds the SDL-facing systems: input polling, score service traffic,
    /// rendering, presentation, and audio playback.
    fn add_frontend_systems(schedule: &mut Schedule) {
        schedule
            .add_systems((
                input_system.in_set(GameplaySet::Input),
                (scores_request_system, scores_poll_system)
                    .chain()
                    .in_set(GameplaySet::Respond)
                    .after(stage_system),
                (render_system, hud_render_system).chain().in_set(RenderSet::Draw),
                (present_system, audio_system).chain().in_set(RenderSet::Present),
            ))
            .configure_sets((RenderSet::Draw, RenderSet::Present).chain().after(GameplaySet::Respond));
    }

    /// Executes one frame of game logic by running all scheduled systems.
    ///
    /// # Returns
    ///
    /// `true` if the game should terminate (exit command received), `false`
    /// to continue.
    pub fn tick(&mut self) -> bool {
        self.schedule.run(&mut self.world);
        self.world.resource::<GlobalState>().exit
    }
}
