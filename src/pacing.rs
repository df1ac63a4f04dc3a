//! Frame rate cap.
//!
//! The rest of each frame's time budget is slept away at the end of the frame, which limits the
//! loop to the configured frame rate.

use std::{thread, time::Duration};

use bevy::{prelude::*, utils::Instant};

pub struct Pacing {
    pub frame_rate: f64,
}

impl Plugin for Pacing {
    fn build(&self, app: &mut App) {
        app.insert_resource(FramePacer::new(self.frame_rate))
            .add_systems(Last, pace);
    }
}

#[derive(Resource)]
struct FramePacer {
    frame_duration: Duration,
    frame_end: Option<Instant>,
}

impl FramePacer {
    fn new(frame_rate: f64) -> Self {
        Self {
            frame_duration: frame_duration(frame_rate),
            frame_end: None,
        }
    }
}

fn pace(mut pacer: ResMut<FramePacer>) {
    if let Some(frame_end) = pacer.frame_end {
        let remaining = remaining_budget(frame_end.elapsed(), pacer.frame_duration);
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
    }
    pacer.frame_end = Some(Instant::now());
}

/// A non-positive or non-finite frame rate disables the cap.
fn frame_duration(frame_rate: f64) -> Duration {
    if frame_rate.is_finite() && frame_rate > 0.0 {
        Duration::from_secs_f64(1.0 / frame_rate)
    } else {
        Duration::ZERO
    }
}

fn remaining_budget(elapsed: Duration, frame_duration: Duration) -> Duration {
    frame_duration.saturating_sub(elapsed)
}
