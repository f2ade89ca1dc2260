//! Sound player - core orchestration
//!
//! Coordinates the library collection, random selection, volume, and the
//! single playback session driven through the audio sink.

use crate::{
    error::SinkError,
    library::SoundLibrary,
    select::random_index,
    sink::{AudioSink, PlayToken},
    types::{PlayStats, PlaybackState, PlayerConfig},
    ui::{DisplayStatus, Presenter, Severity},
    volume::Volume,
};
use blip_core::{SoundId, SoundRecord};
use rand::thread_rng;
use tracing::{debug, info, warn};

/// The playback session: what, if anything, is loading or playing
///
/// An active session without a target cannot be represented; `Loading`
/// additionally pins the token its resolution must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Session {
    /// Nothing active
    Idle,

    /// A play request is in flight on the sink
    Loading { id: SoundId, token: PlayToken },

    /// The sink confirmed playback is running
    Playing { id: SoundId },
}

/// Sound library and playback controller
///
/// Owns the sound collection, the play statistics, and at most one
/// playback session, and pushes every state change into the presenter.
/// All methods run to completion on the calling thread; the only
/// asynchronous edge is the play request, which the sink adapter resolves
/// later through [`SoundPlayer::on_play_resolved`].
///
/// The composition root constructs the player with its sink and presenter
/// adapters and routes sink signals into the `on_*` handlers.
pub struct SoundPlayer {
    library: SoundLibrary,
    session: Session,
    volume: Volume,
    sounds_played: u64,
    next_token: PlayToken,
    sink: Box<dyn AudioSink>,
    ui: Box<dyn Presenter>,
}

impl SoundPlayer {
    /// Create a new player wired to its sink and presenter
    ///
    /// Applies the configured volume to the sink and pushes the initial
    /// idle display, counters, and (empty) list.
    pub fn new(config: PlayerConfig, sink: Box<dyn AudioSink>, ui: Box<dyn Presenter>) -> Self {
        let mut player = Self {
            library: SoundLibrary::new(),
            session: Session::Idle,
            volume: Volume::new(config.initial_volume),
            sounds_played: 0,
            next_token: PlayToken::first(),
            sink,
            ui,
        };

        player.sink.set_gain(player.volume.gain());
        player.ui.show_volume(player.volume.level());
        player.reset_to_idle();
        player.refresh_list();
        player
    }

    // ===== Library Management =====

    /// Add a sound to the library
    ///
    /// Always succeeds; the url is not validated here, a broken locator
    /// surfaces as a sink failure at play time. Returns the new id.
    pub fn add_sound(
        &mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        category: impl Into<String>,
    ) -> SoundId {
        let sound = SoundRecord::new(name, url, category);
        let id = sound.id.clone();

        info!(sound = %sound.name, "Added sound to library");
        self.library.add(sound);
        self.refresh_list();
        id
    }

    /// Seed the library with prepared records
    ///
    /// Convenience for composition roots installing a default sound set;
    /// the list is re-rendered once at the end. Records whose id is
    /// already present are skipped.
    pub fn add_sounds(&mut self, sounds: impl IntoIterator<Item = SoundRecord>) {
        let mut added = 0usize;
        for sound in sounds {
            if self.library.add(sound) {
                added += 1;
            }
        }
        debug!(added, "Seeded library");
        self.refresh_list();
    }

    /// Remove a sound by id
    ///
    /// Unknown ids are a silent no-op. Removing the sound a session is
    /// built on does NOT stop the session: the sink plays its media to
    /// completion, only the library row disappears.
    pub fn remove_sound(&mut self, id: &SoundId) {
        let Some(sound) = self.library.remove(id) else {
            debug!(%id, "Remove requested for unknown sound id");
            return;
        };

        info!(sound = %sound.name, "Removed sound from library");
        self.refresh_list();
        self.ui
            .notify(&format!("Sound \"{}\" removed", sound.name), Severity::Info);
    }

    // ===== Playback Control =====

    /// Play a uniformly random sound, or stop if one is already playing
    ///
    /// With an empty library this reports "no sounds available" and
    /// changes nothing. While a sound is audible the call is a toggle and
    /// stops it instead. The selection runs over the whole library, so
    /// the sound that just played can be drawn again, and a one-sound
    /// library always reselects that sound. A call made while an earlier
    /// request is still loading supersedes it: last writer wins.
    pub fn play_random(&mut self) {
        if self.library.is_empty() {
            warn!("Play requested with an empty library");
            self.ui.notify(
                "No sounds available. Add some audio files first.",
                Severity::Warning,
            );
            return;
        }

        if matches!(self.session, Session::Playing { .. }) {
            self.stop();
            return;
        }

        if let Some(index) = random_index(&mut thread_rng(), self.library.len()) {
            let id = self.library.sounds()[index].id.clone();
            self.begin_load(id);
        }
    }

    /// Play a specific sound by id
    ///
    /// Unknown ids are silently ignored. Unlike [`Self::play_random`]
    /// this never toggles: an audible sound is stopped first and the
    /// target always starts loading.
    pub fn play_by_id(&mut self, id: &SoundId) {
        if !self.library.contains(id) {
            debug!(%id, "Play requested for unknown sound id");
            return;
        }

        if matches!(self.session, Session::Playing { .. }) {
            self.stop();
        }
        self.begin_load(id.clone());
    }

    /// Stop the current session
    ///
    /// No-op when idle: no sink commands are issued. Otherwise pauses the
    /// sink, rewinds it to the start, and clears the session. Stopping
    /// while a request is still loading abandons that request; its
    /// resolution no longer matches any pending token and will be
    /// dropped.
    pub fn stop(&mut self) {
        if matches!(self.session, Session::Idle) {
            return;
        }

        debug!("Stopping playback");
        self.sink.pause();
        self.sink.reset();
        self.reset_to_idle();
    }

    /// Set the volume (0-100, clamped)
    ///
    /// Applied to the sink as a linear [0, 1] gain and reflected in the
    /// displayed percentage. Independent of the session lifecycle.
    pub fn set_volume(&mut self, percent: u8) {
        self.volume.set_level(percent);
        self.sink.set_gain(self.volume.gain());
        self.ui.show_volume(self.volume.level());
    }

    // ===== Sink Signals =====

    /// Resolution of a play request
    ///
    /// The sink adapter calls this exactly once per [`AudioSink::begin_play`],
    /// echoing the request's token. A token that no longer matches the
    /// pending session belongs to a superseded request and is dropped.
    pub fn on_play_resolved(&mut self, token: PlayToken, result: Result<(), SinkError>) {
        let Session::Loading { id, token: pending } = &self.session else {
            debug!(?token, "Play resolution arrived with no pending request");
            return;
        };
        if *pending != token {
            debug!(?token, "Dropping stale play resolution");
            return;
        }
        let id = id.clone();

        match result {
            Ok(()) => {
                self.sounds_played += 1;
                let name = match self.library.get_mut(&id) {
                    Some(sound) => {
                        sound.mark_played();
                        Some(sound.name.clone())
                    }
                    // Removed while the request was in flight; the media
                    // still plays, only the stats row is gone.
                    None => None,
                };

                info!(?token, "Playback started");
                self.session = Session::Playing { id };
                self.ui.show_play_button(true);
                self.ui
                    .show_now_playing(name.as_deref(), DisplayStatus::Playing);
                self.ui.render_list(self.library.sounds());
                self.refresh_counters();
            }
            Err(error) => {
                warn!(%error, "Sink rejected the play request");
                self.ui.notify("Could not play the sound", Severity::Error);
                self.reset_to_idle();
            }
        }
    }

    /// End-of-media signal from the sink
    ///
    /// Clears the session without commanding pause or seek; the sink
    /// already reached the natural end. Outside of `Playing` the signal
    /// belongs to superseded media and is ignored, so it cannot clobber
    /// a pending load.
    pub fn on_playback_ended(&mut self) {
        match self.session {
            Session::Playing { .. } => {
                info!("Playback finished");
                self.reset_to_idle();
            }
            Session::Idle | Session::Loading { .. } => {
                debug!("Ignoring ended signal outside of playback");
            }
        }
    }

    /// Mid-stream error signal from the sink
    ///
    /// Always reported to the user. Any non-idle session is reset; a
    /// pending load is cancelled too, since the error belongs to the
    /// media most recently loaded.
    pub fn on_playback_error(&mut self, error: SinkError) {
        tracing::error!(%error, "Sink reported a playback error");
        self.ui
            .notify("Error loading the audio file", Severity::Error);

        if !matches!(self.session, Session::Idle) {
            self.reset_to_idle();
        }
    }

    /// Sink buffering state changed
    ///
    /// Mirrors loading-started / ready-to-play signals into the play
    /// control's loading visual. Session state is untouched.
    pub fn loading_state_changed(&mut self, is_loading: bool) {
        self.ui.show_loading(is_loading);
    }

    // ===== State Queries =====

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        match self.session {
            Session::Idle => PlaybackState::Idle,
            Session::Loading { .. } => PlaybackState::Loading,
            Session::Playing { .. } => PlaybackState::Playing,
        }
    }

    /// Whether a sound is audibly playing
    pub fn is_playing(&self) -> bool {
        matches!(self.session, Session::Playing { .. })
    }

    /// Id of the session's target sound, if any
    pub fn active_sound_id(&self) -> Option<&SoundId> {
        match &self.session {
            Session::Idle => None,
            Session::Loading { id, .. } | Session::Playing { id } => Some(id),
        }
    }

    /// The session's target record, if it is still in the library
    pub fn current_sound(&self) -> Option<&SoundRecord> {
        self.active_sound_id().and_then(|id| self.library.get(id))
    }

    /// All sounds in insertion order
    pub fn sounds(&self) -> &[SoundRecord] {
        self.library.sounds()
    }

    /// Snapshot of the play statistics
    pub fn stats(&self) -> PlayStats {
        PlayStats {
            sounds_played: self.sounds_played,
            library_size: self.library.len(),
        }
    }

    /// Current volume level (0-100)
    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    // ===== Internal =====

    /// Route a play target into `Loading` and hand it to the sink
    ///
    /// Mints a fresh token, which supersedes any request still in
    /// flight: only the new token can match a resolution from now on.
    fn begin_load(&mut self, id: SoundId) {
        let Some(sound) = self.library.get(&id) else {
            return;
        };
        let name = sound.name.clone();
        let url = sound.url.clone();

        let token = self.next_token;
        self.next_token = token.next();

        info!(sound = %name, ?token, "Requesting playback");
        self.session = Session::Loading { id, token };
        self.ui
            .show_now_playing(Some(&name), DisplayStatus::Loading);
        self.sink.load(&url);
        self.sink.begin_play(token);
    }

    /// Clear the session and restore the idle display
    fn reset_to_idle(&mut self) {
        self.session = Session::Idle;
        self.ui.show_play_button(false);
        self.ui.show_now_playing(None, DisplayStatus::Ready);
        self.ui.show_loading(false);
    }

    /// Re-render the list and counters after a library change
    fn refresh_list(&mut self) {
        self.ui.render_list(self.library.sounds());
        self.refresh_counters();
    }

    fn refresh_counters(&mut self) {
        self.ui
            .update_counters(self.sounds_played, self.library.len());
    }
}
