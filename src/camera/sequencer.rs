// Playback state machine driving the camera rig. One session at a time:
// starting any mode while another is active cancels the active one first,
// so two sessions never drive the camera in the same tick.
//
// The sequencer owns no clock. The host calls `tick(dt)` once per animation
// frame; an explicit `stop()` is cooperative and takes effect on the next
// tick.

use super::cinematic::{self, CINEMATIC_DURATION_SECS};
use super::path::CameraPath;
use super::rig::{CameraRig, CameraSnapshot, OrbitControls};
use crate::error::ValidationError;

/// Seconds each movie segment plays its preset for.
pub const PRESET_SEGMENT_SECS: f32 = 5.0;
pub const MOVIE_SEGMENTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Idle,
    Preview,
    Movie,
    Cinematic,
}

#[derive(Debug, Clone)]
struct PreviewSession {
    path: CameraPath,
    duration: f32,
    elapsed: f32,
    saved: CameraSnapshot,
}

#[derive(Debug, Clone)]
struct MovieSession {
    segments: [CameraPath; MOVIE_SEGMENTS],
    elapsed: f32,
    segment: usize,
    segment_elapsed: f32,
}

#[derive(Debug, Clone)]
struct CinematicSession {
    elapsed: f32,
}

#[derive(Debug, Clone)]
enum State {
    Idle,
    Preview(PreviewSession),
    Movie(MovieSession),
    Cinematic(CinematicSession),
}

#[derive(Debug, Clone)]
pub struct Sequencer {
    state: State,
    stop_requested: bool,
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            stop_requested: false,
        }
    }

    pub fn mode(&self) -> PlaybackMode {
        match self.state {
            State::Idle => PlaybackMode::Idle,
            State::Preview(_) => PlaybackMode::Preview,
            State::Movie(_) => PlaybackMode::Movie,
            State::Cinematic(_) => PlaybackMode::Cinematic,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// Play a single interpolated path. The current rig pose is snapshotted
    /// so cancellation can restore it; natural completion leaves the camera
    /// at the final frame with the field of view as last set.
    pub fn start_preview(
        &mut self,
        path: CameraPath,
        rig: &mut CameraRig,
        orbit: &mut OrbitControls,
    ) -> Result<(), ValidationError> {
        path.validate()?;
        self.cancel_active(rig, orbit);

        let saved = rig.snapshot();
        orbit.enabled = false;
        rig.fov = path.fov;
        let duration = path.duration();
        self.state = State::Preview(PreviewSession {
            saved,
            path,
            duration,
            elapsed: 0.0,
        });
        log::info!("preview started ({duration:.1}s)");
        Ok(())
    }

    /// Chain the three presets, five seconds each. Each segment replays its
    /// own path, look mode and field of view; on completion the rig is reset
    /// to the canonical front view.
    pub fn start_movie(
        &mut self,
        segments: [CameraPath; MOVIE_SEGMENTS],
        rig: &mut CameraRig,
        orbit: &mut OrbitControls,
    ) -> Result<(), ValidationError> {
        for segment in &segments {
            segment.validate()?;
        }
        self.cancel_active(rig, orbit);

        orbit.enabled = false;
        rig.fov = segments[0].fov;
        self.state = State::Movie(MovieSession {
            segments,
            elapsed: 0.0,
            segment: 0,
            segment_elapsed: 0.0,
        });
        log::info!("movie started ({MOVIE_SEGMENTS} segments)");
        Ok(())
    }

    /// Run the fixed scripted sweep.
    pub fn start_cinematic(&mut self, rig: &mut CameraRig, orbit: &mut OrbitControls) {
        self.cancel_active(rig, orbit);
        orbit.enabled = false;
        self.state = State::Cinematic(CinematicSession { elapsed: 0.0 });
        log::info!("cinematic started ({CINEMATIC_DURATION_SECS:.0}s)");
    }

    /// Request cancellation. Cooperative: honored at the start of the next
    /// tick, never mid-frame.
    pub fn stop(&mut self) {
        if self.is_active() {
            self.stop_requested = true;
        }
    }

    /// Advance the active session by `dt` seconds and drive the rig.
    pub fn tick(
        &mut self,
        dt: f32,
        rig: &mut CameraRig,
        orbit: &mut OrbitControls,
    ) -> PlaybackMode {
        if self.stop_requested {
            self.stop_requested = false;
            self.cancel_active(rig, orbit);
            return PlaybackMode::Idle;
        }

        match &mut self.state {
            State::Idle => {}
            State::Preview(session) => {
                session.elapsed += dt;
                let t = (session.elapsed / session.duration).min(1.0);
                let eased = session.path.interpolation.apply(t);
                let position = session.path.position_at(eased);
                rig.position = position;
                rig.look_at(session.path.look_target(position));

                if t >= 1.0 {
                    // Leave the camera on the final frame.
                    self.state = State::Idle;
                    orbit.enabled = true;
                    log::info!("preview complete");
                }
            }
            State::Movie(session) => {
                session.elapsed += dt;
                let total = PRESET_SEGMENT_SECS * MOVIE_SEGMENTS as f32;
                let progress = (session.elapsed / total).min(1.0);

                let segment = ((progress * MOVIE_SEGMENTS as f32) as usize)
                    .min(MOVIE_SEGMENTS - 1);
                if segment != session.segment {
                    session.segment = segment;
                    session.segment_elapsed = 0.0;
                    rig.fov = session.segments[segment].fov;
                    log::debug!("movie segment {}", segment + 1);
                } else {
                    session.segment_elapsed += dt;
                }

                let path = &session.segments[session.segment];
                let local = (session.segment_elapsed / PRESET_SEGMENT_SECS).min(1.0);
                let eased = path.interpolation.apply(local);
                let position = path.position_at(eased);
                rig.position = position;
                rig.look_at(path.look_target(position));

                if progress >= 1.0 {
                    self.state = State::Idle;
                    rig.reset_to_front();
                    orbit.enabled = true;
                    log::info!("movie complete");
                }
            }
            State::Cinematic(session) => {
                session.elapsed += dt;
                let progress = (session.elapsed / CINEMATIC_DURATION_SECS).min(1.0);
                if let Some(frame) = cinematic::evaluate(progress) {
                    rig.position = frame.position;
                    rig.look_at(frame.look_at);
                }

                if progress >= 1.0 {
                    self.state = State::Idle;
                    rig.reset_to_front();
                    orbit.enabled = true;
                    log::info!("cinematic complete");
                }
            }
        }

        self.mode()
    }

    /// Synchronous teardown: restore camera ownership before another session
    /// may begin. A cancelled preview puts the camera back where it was;
    /// movie and cinematic return to the front view.
    fn cancel_active(&mut self, rig: &mut CameraRig, orbit: &mut OrbitControls) {
        match &self.state {
            State::Idle => {}
            State::Preview(session) => {
                rig.restore(&session.saved);
                orbit.enabled = true;
                log::info!("preview cancelled");
            }
            State::Movie(_) => {
                rig.reset_to_front();
                orbit.enabled = true;
                log::info!("movie cancelled");
            }
            State::Cinematic(_) => {
                rig.reset_to_front();
                orbit.enabled = true;
                log::info!("cinematic cancelled");
            }
        }
        self.state = State::Idle;
        self.stop_requested = false;
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}
