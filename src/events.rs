use bevy_ecs::prelude::*;

/// A discrete action requested by the player through the input surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    /// The single binary trigger action (click, Space, Up).
    Flap,
    /// Start a session from the menu, or restart one from the game-over screen.
    Start,
    /// Open the high-score list from the menu.
    ShowScores,
    /// Return to the menu from the high-score list or game-over screen.
    BackToMenu,
    /// Submit the final score from the game-over screen.
    SubmitScore,
    MuteAudio,
    Exit,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
    /// The avatar hit the floor or a pipe pair. The stage system consumes
    /// this exactly once per session, no matter how many are emitted.
    GameOver,
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
