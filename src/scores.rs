//! Client glue for the external score service.
//!
//! The service owns persistence and ordering; this module only fetches and
//! submits records. Both calls are fire-and-forget: a worker thread performs
//! the blocking HTTP exchange and reports back over a channel that the poll
//! system drains once per frame, so the simulation loop never blocks and
//! never sees a network error. Results update UI-facing resources only.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use bevy_ecs::{
    event::EventReader,
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ScoreError;
use crate::events::{GameCommand, GameEvent};
use crate::systems::{GameStage, ScoreResource};

/// Development address of the score service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// One leaderboard entry. Rank is positional: the service returns records in
/// display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    status: String,
}

/// Blocking transport to the score service, separated from the client so
/// tests can substitute it.
pub trait ScoreTransport: Send + Sync {
    fn fetch_scores(&self) -> Result<Vec<ScoreRecord>, ScoreError>;
    fn submit_score(&self, record: &ScoreRecord) -> Result<(), ScoreError>;
}

/// `reqwest`-backed transport speaking the service's two JSON endpoints.
pub struct HttpScoreTransport {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl HttpScoreTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::blocking::Client::new(),
        }
    }
}

impl ScoreTransport for HttpScoreTransport {
    fn fetch_scores(&self) -> Result<Vec<ScoreRecord>, ScoreError> {
        let response = self
            .http
            .get(format!("{}/scores", self.base_url))
            .send()
            .map_err(|e| ScoreError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoreError::Status(status.as_u16()));
        }

        response.json::<Vec<ScoreRecord>>().map_err(|e| ScoreError::Parse(e.to_string()))
    }

    fn submit_score(&self, record: &ScoreRecord) -> Result<(), ScoreError> {
        let response = self
            .http
            .post(format!("{}/scores", self.base_url))
            .json(record)
            .send()
            .map_err(|e| ScoreError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoreError::Status(status.as_u16()));
        }

        let body: SubmitResponse = response.json().map_err(|e| ScoreError::Parse(e.to_string()))?;
        if body.status == "success" {
            Ok(())
        } else {
            Err(ScoreError::Rejected(body.status))
        }
    }
}

/// A completed exchange, reported by a worker thread.
#[derive(Debug)]
pub enum ClientMessage {
    Fetched(Result<Vec<ScoreRecord>, ScoreError>),
    Submitted(Result<(), ScoreError>),
}

/// Fire-and-forget score service client.
///
/// Non-send resource: the channel receiver stays on the main thread, like
/// the SDL audio handle.
pub struct ScoresClient {
    transport: Arc<dyn ScoreTransport>,
    tx: Sender<ClientMessage>,
    rx: Receiver<ClientMessage>,
}

impl ScoresClient {
    pub fn new(transport: Arc<dyn ScoreTransport>) -> Self {
        let (tx, rx) = channel();
        Self { transport, tx, rx }
    }

    pub fn over_http(base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpScoreTransport::new(base_url)))
    }

    /// Requests the score list; the result arrives via [`Self::poll`].
    pub fn fetch(&self) {
        let transport = self.transport.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(ClientMessage::Fetched(transport.fetch_scores()));
        });
    }

    /// Submits a record; the outcome arrives via [`Self::poll`].
    pub fn submit(&self, record: ScoreRecord) {
        let transport = self.transport.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(ClientMessage::Submitted(transport.submit_score(&record)));
        });
    }

    /// Drains every exchange completed since the last poll.
    pub fn poll(&self) -> Vec<ClientMessage> {
        self.rx.try_iter().collect()
    }
}

/// What the high-score screen currently shows.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub enum ScoresView {
    #[default]
    Idle,
    /// Fetch pending; the list shows nothing until data or an error arrives.
    Loading,
    Loaded(Vec<ScoreRecord>),
    Failed,
}

impl ScoresView {
    /// Display rows for the list screen, rank-ordered. An empty result and a
    /// failed fetch each produce exactly one placeholder row.
    pub fn rows(&self) -> Vec<String> {
        match self {
            ScoresView::Idle | ScoresView::Loading => Vec::new(),
            ScoresView::Loaded(records) if records.is_empty() => vec!["NO SCORES YET!".to_string()],
            ScoresView::Loaded(records) => records
                .iter()
                .enumerate()
                .map(|(index, record)| format!("#{} {} {}", index + 1, record.name.to_uppercase(), record.score))
                .collect(),
            ScoresView::Failed => vec!["ERROR LOADING SCORES".to_string()],
        }
    }
}

/// State of the submit control on the game-over screen.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitControl {
    #[default]
    Ready,
    InFlight,
    /// Success: permanently disabled for this game-over screen instance.
    Accepted,
    /// Failure was surfaced; the control stays enabled for retry.
    Failed,
}

impl SubmitControl {
    pub fn enabled(&self) -> bool {
        matches!(self, SubmitControl::Ready | SubmitControl::Failed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmitControl::Ready => "SUBMIT SCORE",
            SubmitControl::InFlight => "SUBMITTING...",
            SubmitControl::Accepted => "SUBMITTED!",
            SubmitControl::Failed => "SUBMIT SCORE - TRY AGAIN",
        }
    }
}

/// Name attached to submissions; blank or whitespace falls back to the
/// service's anonymous default.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerName(pub String);

impl PlayerName {
    pub fn submission_name(&self) -> String {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            "Anonymous".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Kicks off fetches and submissions in response to screen-flow commands.
/// Runs after the stage system so it observes the post-transition stage.
pub fn scores_request_system(
    stage: Res<GameStage>,
    mut events: EventReader<GameEvent>,
    client: NonSendMut<ScoresClient>,
    mut view: ResMut<ScoresView>,
    mut submit: ResMut<SubmitControl>,
    name: Res<PlayerName>,
    score: Res<ScoreResource>,
) {
    for event in events.read() {
        match event {
            GameEvent::Command(GameCommand::ShowScores) if matches!(*stage, GameStage::HighScores) => {
                *view = ScoresView::Loading;
                client.fetch();
                debug!("Requested score list");
            }
            GameEvent::Command(GameCommand::SubmitScore)
                if matches!(*stage, GameStage::GameOver { .. }) && submit.enabled() =>
            {
                let record = ScoreRecord {
                    name: name.submission_name(),
                    score: score.current,
                };
                info!(name = %record.name, score = record.score, "Submitting score");
                *submit = SubmitControl::InFlight;
                client.submit(record);
            }
            _ => {}
        }
    }
}

/// Applies completed exchanges to the UI-facing resources. Failures are
/// logged and rendered as placeholders/alerts; they never touch the
/// simulation's authoritative state.
pub fn scores_poll_system(client: NonSendMut<ScoresClient>, mut view: ResMut<ScoresView>, mut submit: ResMut<SubmitControl>) {
    for message in client.poll() {
        match message {
            ClientMessage::Fetched(Ok(records)) => {
                debug!(count = records.len(), "Score list loaded");
                *view = ScoresView::Loaded(records);
            }
            ClientMessage::Fetched(Err(e)) => {
                warn!(error = %e, "Failed to load score list");
                *view = ScoresView::Failed;
            }
            ClientMessage::Submitted(Ok(())) => {
                info!("Score submitted");
                *submit = SubmitControl::Accepted;
            }
            ClientMessage::Submitted(Err(e)) => {
                warn!(error = %e, "Failed to submit score");
                *submit = SubmitControl::Failed;
            }
        }
    }
}
