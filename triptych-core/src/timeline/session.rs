//! Scoped renderer sessions.
//!
//! Opening a session initializes the renderer and sets the tempo. Closing it
//! (explicitly, or by dropping it on any exit path) finalizes the renderer
//! exactly once.

use super::builder::TimelineBuilder;
use super::renderer::Renderer;
use crate::config::SessionConfig;
use crate::error::{Result, TimelineError};

pub struct Session<'r, R: Renderer + ?Sized> {
    renderer: &'r mut R,
    config: SessionConfig,
    finalized: bool,
}

impl<'r, R: Renderer + ?Sized> Session<'r, R> {
    /// Validate `config`, then initialize the renderer and set the tempo
    pub fn open(renderer: &'r mut R, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        renderer.init_session();
        renderer.set_tempo(config.tempo_bpm);
        log::info!("session open at {} BPM", config.tempo_bpm);
        Ok(Session {
            renderer,
            config,
            finalized: false,
        })
    }

    /// Open a session, compose with `f`, and finalize whatever `f` returns
    pub fn run<T, E>(
        renderer: &'r mut R,
        config: SessionConfig,
        f: impl FnOnce(&mut TimelineBuilder<'_, R>) -> std::result::Result<T, E>,
    ) -> std::result::Result<T, E>
    where
        E: From<TimelineError>,
    {
        let mut session = Session::open(renderer, config)?;
        let out = f(&mut session.timeline());
        session.close();
        out
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// A builder that honors the session's declared tracks
    pub fn timeline(&mut self) -> TimelineBuilder<'_, R> {
        let builder = TimelineBuilder::new(&mut *self.renderer);
        match &self.config.tracks {
            Some(tracks) => builder.with_tracks(tracks),
            None => builder,
        }
    }

    /// Finalize the renderer now
    pub fn close(mut self) {
        self.finalize();
    }

    fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.finalized = true;
        self.renderer.finalize_session();
        log::info!("session finalized");
    }
}

impl<R: Renderer + ?Sized> Drop for Session<'_, R> {
    fn drop(&mut self) {
        self.finalize();
    }
}
