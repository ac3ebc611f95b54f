//! This module handles the audio playback for the game.
//!
//! The four cues are synthesized at startup instead of loaded from asset
//! files: each is a single oscillator with an exponential frequency/gain
//! ramp, rendered to a signed-16-bit PCM chunk.

use std::collections::HashMap;
use std::f32::consts::TAU;

use anyhow::{anyhow, Result};
use sdl2::mixer::{self, Chunk, AUDIO_S16LSB};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const AUDIO_FREQUENCY: i32 = 16_000;
const MIXING_CHANNELS: i32 = 4;
const DEFAULT_VOLUME: u8 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Sound {
    /// Played on every trigger action.
    Flap,
    /// Played when a pipe pair is cleared.
    Score,
    /// Played immediately on game over.
    Hit,
    /// Played shortly after the hit cue.
    Die,
}

#[derive(Debug, Clone, Copy)]
enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
}

/// Oscillator settings for one cue: waveform plus exponential ramps for
/// frequency (Hz) and gain over the cue's duration (seconds).
struct CueSpec {
    wave: Waveform,
    freq: (f32, f32),
    gain: (f32, f32),
    duration: f32,
}

impl Sound {
    fn spec(self) -> CueSpec {
        match self {
            Sound::Flap => CueSpec {
                wave: Waveform::Triangle,
                freq: (600.0, 400.0),
                gain: (0.1, 0.01),
                duration: 0.1,
            },
            Sound::Score => CueSpec {
                wave: Waveform::Sine,
                freq: (600.0, 800.0),
                gain: (0.1, 0.01),
                duration: 0.2,
            },
            Sound::Hit => CueSpec {
                wave: Waveform::Sawtooth,
                freq: (200.0, 200.0),
                gain: (0.2, 0.01),
                duration: 0.2,
            },
            Sound::Die => CueSpec {
                wave: Waveform::Sine,
                freq: (400.0, 100.0),
                gain: (0.2, 0.01),
                duration: 0.5,
            },
        }
    }
}

/// The audio system for the game.
///
/// This struct is responsible for initializing the audio device, synthesizing
/// the cue chunks, and playing them. If audio fails to initialize, it will be
/// disabled and all functions will silently do nothing.
pub struct Audio {
    sounds: HashMap<Sound, Chunk>,
    state: AudioState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    Enabled { volume: u8 },
    Muted { previous_volume: u8 },
    Disabled,
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}

impl Audio {
    /// Creates a new `Audio` instance.
    ///
    /// If audio fails to initialize, the audio system will be disabled and
    /// all functions will silently do nothing.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
                Self {
                    sounds: HashMap::new(),
                    state: AudioState::Disabled,
                }
            }
        }
    }

    fn try_new() -> Result<Self> {
        // Mono output; the synthesized chunks are written in the same format.
        mixer::open_audio(AUDIO_FREQUENCY, AUDIO_S16LSB, 1, 256).map_err(|e| anyhow!("Failed to open audio: {}", e))?;

        mixer::allocate_channels(MIXING_CHANNELS);
        for i in 0..MIXING_CHANNELS {
            mixer::Channel(i).set_volume(DEFAULT_VOLUME as i32);
        }

        let sounds: HashMap<Sound, Chunk> = Sound::iter()
            .filter_map(|sound| match Self::synthesize(sound) {
                Ok(chunk) => Some((sound, chunk)),
                Err(e) => {
                    tracing::warn!("Failed to synthesize sound {:?}: {}", sound, e);
                    None
                }
            })
            .collect();

        if sounds.is_empty() {
            return Err(anyhow!("No sounds synthesized successfully"));
        }

        Ok(Audio {
            sounds,
            state: AudioState::Enabled { volume: DEFAULT_VOLUME },
        })
    }

    fn synthesize(sound: Sound) -> Result<Chunk> {
        let spec = sound.spec();
        let sample_count = (AUDIO_FREQUENCY as f32 * spec.duration) as usize;
        let mut data = Vec::with_capacity(sample_count * 2);

        let mut phase = 0.0f32;
        for i in 0..sample_count {
            let progress = i as f32 / sample_count as f32;
            let frequency = spec.freq.0 * (spec.freq.1 / spec.freq.0).powf(progress);
            let gain = spec.gain.0 * (spec.gain.1 / spec.gain.0).powf(progress);

            phase = (phase + frequency / AUDIO_FREQUENCY as f32).fract();
            let amplitude = match spec.wave {
                Waveform::Sine => (phase * TAU).sin(),
                Waveform::Triangle => 4.0 * (phase - 0.5).abs() - 1.0,
                Waveform::Sawtooth => 2.0 * phase - 1.0,
            };

            let sample = (amplitude * gain * i16::MAX as f32) as i16;
            data.extend_from_slice(&sample.to_le_bytes());
        }

        Chunk::from_raw_buffer(data.into_boxed_slice()).map_err(|e| anyhow!("Failed to build chunk for {:?}: {}", sound, e))
    }

    /// Plays the provided sound cue once. Best-effort: playback failure is
    /// logged and never reaches the caller.
    pub fn play(&mut self, sound: Sound) {
        if !matches!(self.state, AudioState::Enabled { .. }) {
            return;
        }

        if let Some(chunk) = self.sounds.get(&sound) {
            if let Err(e) = mixer::Channel::all().play(chunk, 0) {
                tracing::warn!("Could not play sound {:?}: {}", sound, e);
            }
        }
    }

    /// Instantly mutes or unmutes all audio channels by adjusting their volume.
    pub fn set_mute(&mut self, mute: bool) {
        match (mute, self.state) {
            (true, AudioState::Enabled { volume }) => {
                self.state = AudioState::Muted { previous_volume: volume };
                for i in 0..MIXING_CHANNELS {
                    mixer::Channel(i).set_volume(0);
                }
            }
            (false, AudioState::Muted { previous_volume }) => {
                self.state = AudioState::Enabled { volume: previous_volume };
                for i in 0..MIXING_CHANNELS {
                    mixer::Channel(i).set_volume(previous_volume as i32);
                }
            }
            _ => {}
        }
    }

    /// Returns the current mute state regardless of whether audio is functional.
    pub fn is_muted(&self) -> bool {
        matches!(self.state, AudioState::Muted { .. })
    }

    /// Returns whether the audio system failed to initialize and is non-functional.
    pub fn is_disabled(&self) -> bool {
        matches!(self.state, AudioState::Disabled)
    }
}
