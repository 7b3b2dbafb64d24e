//! Timer-driven scheduling of one or more MIDI tracks: converting tick
//! deltas into real time, rescaling pending callbacks when a tempo meta
//! event fires, and restarting the song when every track has finished.

use crate::track::TrackSource;

/// Default tempo (microseconds per quarter note) used until the first
/// `Set Tempo` meta event, equivalent to 120 BPM.
pub const DEFAULT_US_PER_BEAT: u32 = 500_000;

/// Delay before a finished song loops back to its start, matching the
/// original driver's 5ms pause between the last event and `RestartSong`.
pub const RESTART_DELAY_US: u32 = 5_000;

/// Per-track playback cursor.
#[derive(Debug, Clone)]
struct TrackCursor {
    next_event: usize,
    /// Absolute tick of the next pending event, once scheduled.
    pending_tick: Option<u64>,
}

impl TrackCursor {
    fn new() -> Self {
        TrackCursor {
            next_event: 0,
            pending_tick: None,
        }
    }
}

/// Drives playback of one or more [`TrackSource`]s sharing a common
/// tempo, computing real-time delays between successive events and
/// handling tempo changes and end-of-song looping.
pub struct Scheduler {
    us_per_beat: u32,
    cursors: Vec<TrackCursor>,
    num_tracks: usize,
    finished_tracks: usize,
    elapsed_since_restart_us: u64,
}

impl Scheduler {
    pub fn new(num_tracks: usize) -> Self {
        Scheduler {
            us_per_beat: DEFAULT_US_PER_BEAT,
            cursors: (0..num_tracks).map(|_| TrackCursor::new()).collect(),
            num_tracks,
            finished_tracks: 0,
            elapsed_since_restart_us: 0,
        }
    }

    pub fn us_per_beat(&self) -> u32 {
        self.us_per_beat
    }

    /// Index of the event `track` is currently sitting at (the one a
    /// caller should dispatch before calling [`Scheduler::advance`]).
    pub fn current_index(&self, track: usize) -> usize {
        self.cursors[track].next_event
    }

    /// Convert a tick delta into a microsecond delay, matching
    /// `ScheduleTrack`'s `us = nticks * us_per_beat / ticks_per_beat`.
    pub fn ticks_to_us(&self, ticks: u64, ticks_per_beat: u16) -> u64 {
        if ticks_per_beat == 0 {
            return 0;
        }
        ticks * self.us_per_beat as u64 / ticks_per_beat as u64
    }

    /// Apply a `Set Tempo` meta event. Returns the rescale factor
    /// (`old_us_per_beat / new_us_per_beat`) any already-pending
    /// callback delays must be multiplied by, matching
    /// `OPL_AdjustCallbacks`.
    pub fn set_tempo(&mut self, new_us_per_beat: u32) -> f64 {
        if new_us_per_beat == 0 {
            return 1.0;
        }
        let factor = self.us_per_beat as f64 / new_us_per_beat as f64;
        self.us_per_beat = new_us_per_beat;
        factor
    }

    /// Advance `track`'s cursor past its current event, returning the
    /// absolute tick of the next event in that track if one remains.
    pub fn advance(&mut self, track: usize, source: &dyn TrackSource) -> Option<u64> {
        let cursor = &mut self.cursors[track];
        cursor.next_event += 1;
        match source.event(cursor.next_event) {
            Some(event) => {
                cursor.pending_tick = Some(event.tick());
                Some(event.tick())
            }
            None => {
                cursor.pending_tick = None;
                self.finished_tracks += 1;
                None
            }
        }
    }

    /// True once every track has run out of events; the player should
    /// wait [`RESTART_DELAY_US`] and then restart the song.
    pub fn all_tracks_finished(&self) -> bool {
        self.finished_tracks >= self.num_tracks
    }

    /// Reset scheduling state for a fresh pass over the same tracks
    /// (`RestartSong`), preserving the current tempo (the original does
    /// not reset tempo on loop).
    pub fn restart(&mut self) {
        for cursor in &mut self.cursors {
            *cursor = TrackCursor::new();
        }
        self.finished_tracks = 0;
        self.elapsed_since_restart_us = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::midi::MidiMessage;
    use crate::track::VecTrackSource;

    fn note_track() -> VecTrackSource {
        VecTrackSource::new(
            96,
            vec![
                crate::midi::MidiEvent::new(0, MidiMessage::note_on(0, 60, 100)),
                crate::midi::MidiEvent::new(96, MidiMessage::note_off(0, 60, 0)),
            ],
        )
    }

    #[test]
    fn default_tempo_is_120_bpm() {
        let scheduler = Scheduler::new(1);
        assert_eq!(scheduler.us_per_beat(), 500_000);
    }

    #[test]
    fn ticks_to_us_scales_by_ticks_per_beat() {
        let scheduler = Scheduler::new(1);
        assert_eq!(scheduler.ticks_to_us(96, 96), 500_000);
        assert_eq!(scheduler.ticks_to_us(48, 96), 250_000);
    }

    #[test]
    fn tempo_change_returns_rescale_factor() {
        let mut scheduler = Scheduler::new(1);
        let factor = scheduler.set_tempo(250_000);
        assert_eq!(factor, 2.0);
        assert_eq!(scheduler.us_per_beat(), 250_000);
    }

    #[test]
    fn advance_reports_next_tick_then_finishes() {
        let mut scheduler = Scheduler::new(1);
        let source = note_track();
        assert_eq!(scheduler.advance(0, &source), Some(96));
        assert_eq!(scheduler.advance(0, &source), None);
        assert!(scheduler.all_tracks_finished());
    }

    #[test]
    fn restart_resets_cursors_and_keeps_tempo() {
        let mut scheduler = Scheduler::new(1);
        scheduler.set_tempo(300_000);
        let source = note_track();
        scheduler.advance(0, &source);
        scheduler.advance(0, &source);
        assert!(scheduler.all_tracks_finished());
        scheduler.restart();
        assert!(!scheduler.all_tracks_finished());
        assert_eq!(scheduler.us_per_beat(), 300_000);
    }
}
