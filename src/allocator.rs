//! Voice allocation and the four historical voice-stealing policies DMX
//! shipped across driver releases.
//!
//! Each `find_victim_*` function is a direct translation of one of
//! `ReplaceExistingVoice`/`ReplaceExistingVoiceDoom1`/`ReplaceExistingVoiceDoom2`/
//! `ReplaceExistingVoiceOld` from the original driver: none of them compare
//! against the new note's own priority (a later pass, `SetVoiceInstrument`,
//! is what stamps a voice's priority once it is actually obtained), so
//! `ensure_capacity` never threads a "new priority" value through them.

use crate::bank::{InstrumentVoice, InstrumentRef};
use crate::channel::ChannelHandle;
use crate::voicepool::VoicePool;

/// Which DMX driver release's voice-stealing behavior to reproduce.
///
/// Each variant is a real shipped policy, not a tuning knob: they differ
/// in which voice gets stolen when the pool is full, and two of them
/// (`Doom1_1_666`, `Doom2_1_666`) carry quirks later fixed in `Doom1_9`
/// that are preserved here rather than "corrected", since reproducing
/// exact DMX behavior is the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverVersion {
    /// The earliest (pre-release) driver: `ReplaceExistingVoiceOld`, which
    /// prefers a voice already bound to the requesting channel or already
    /// playing the requested instrument, falling back to the first voice
    /// in allocation order.
    Beta,
    /// `doom1.wad` / v1.666: `ReplaceExistingVoiceDoom1`, which always
    /// steals whichever allocated voice has the "highest" channel (by the
    /// original's pointer-ordering proxy, [`ChannelHandle`]'s `Ord` here).
    Doom1_1_666,
    /// `doom2.wad` / v1.666: `ReplaceExistingVoiceDoom2`, which scans only
    /// the allocated list's first `len - 3` entries (the original's
    /// `voice_alloced_num - 3` walk) for the lowest-priority voice with a
    /// channel at or above the requesting one.
    Doom2_1_666,
    /// Retail 1.9 and everything after: `ReplaceExistingVoice`, called
    /// only when the free list is completely empty.
    #[default]
    Doom1_9,
}

/// Compute a voice's steal priority from its carrier operator's attack
/// and sustain/release rates: faster-decaying, higher-attack voices are
/// considered less important and stolen first. Stamped onto a voice by
/// [`crate::opl::OplProgrammer::set_voice_instrument`], not by the
/// allocator itself.
pub fn voice_priority(instrument_voice: &InstrumentVoice) -> u32 {
    let carrier = &instrument_voice.carrier;
    (0x0f - (carrier.attack >> 4) as u32) + (0x0f - (carrier.sustain & 0x0f) as u32)
}

/// Drives voice-pool allocation under a chosen [`DriverVersion`]'s
/// stealing policy.
#[derive(Debug, Clone)]
pub struct VoiceAllocator {
    pool: VoicePool,
    version: DriverVersion,
}

impl VoiceAllocator {
    pub fn new(opl3_mode: bool, version: DriverVersion) -> Self {
        VoiceAllocator {
            pool: VoicePool::new(opl3_mode),
            version,
        }
    }

    pub fn pool(&self) -> &VoicePool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut VoicePool {
        &mut self.pool
    }

    pub fn version(&self) -> DriverVersion {
        self.version
    }

    /// How many of an instrument's (one or two) voices are actually
    /// requested under this driver version. Mirrors `KeyOnEvent`'s
    /// `voicenum` computation: only `Doom1_1_666` collapses a double-voice
    /// instrument down to 1 voice when the chip isn't in OPL3 mode (for the
    /// purposes of how many voices must be freed up-front; the driver
    /// still calls `VoiceKeyOn` twice for a double-voice instrument
    /// regardless, since that quirk belongs to voice programming, not
    /// stealing).
    pub fn required_voices_for_stealing(&self, double_voice: bool, opl3_mode: bool) -> usize {
        match self.version {
            DriverVersion::Doom1_1_666 => {
                let voicenum = if double_voice { 2 } else { 1 };
                if opl3_mode { voicenum } else { 1 }
            }
            _ => if double_voice { 2 } else { 1 },
        }
    }

    /// Free up enough voices (stealing per this allocator's policy) for a
    /// new note requiring `double_voice` voices, returning every voice
    /// index vacated, in the order they were released, so the caller can
    /// key each one off before it gets reused.
    pub fn ensure_capacity(
        &mut self,
        channel: ChannelHandle,
        instrument_ref: InstrumentRef,
        double_voice: bool,
        opl3_mode: bool,
    ) -> Vec<usize> {
        let total = self.pool.num_voices();
        let mut released = Vec::new();

        match self.version {
            DriverVersion::Beta => {
                if self.pool.num_allocated() == total {
                    let victim = self.find_victim_old(channel, instrument_ref);
                    released.extend(self.release(victim));
                }
                if double_voice && self.pool.num_allocated() == total - 1 {
                    let victim = self.find_victim_old(channel, instrument_ref);
                    released.extend(self.release(victim));
                }
            }
            DriverVersion::Doom1_1_666 => {
                let voicenum = self.required_voices_for_stealing(double_voice, opl3_mode);
                while self.pool.num_allocated() > total - voicenum {
                    let victim = self.find_victim_doom1();
                    released.extend(self.release(victim));
                }
            }
            DriverVersion::Doom2_1_666 => {
                if self.pool.num_allocated() == total {
                    let victim = self.find_victim_doom2(channel);
                    released.extend(self.release(victim));
                }
                if double_voice && self.pool.num_allocated() == total - 1 {
                    let victim = self.find_victim_doom2(channel);
                    released.extend(self.release(victim));
                }
            }
            DriverVersion::Doom1_9 => {
                if !self.pool.has_free_voice() {
                    let victim = self.find_victim_1_9();
                    released.extend(self.release(victim));
                }
            }
        }

        released
    }

    /// `ReplaceExistingVoiceOld`: first voice bound to `channel`, or
    /// already programmed with `instrument_ref`; else the first voice in
    /// allocation order.
    fn find_victim_old(&self, channel: ChannelHandle, instrument_ref: InstrumentRef) -> usize {
        let mut result = match self.pool.iter_alloced().next() {
            Some(first) => first,
            None => return 0,
        };
        for idx in self.pool.iter_alloced() {
            let v = self.pool.voice(idx);
            if v.channel == Some(channel) || v.current_instr == Some(instrument_ref) {
                result = idx;
                break;
            }
        }
        result
    }

    /// `ReplaceExistingVoiceDoom1`: the allocated voice with the greatest
    /// channel (by [`ChannelHandle`]'s `Ord`), first occurrence wins ties.
    fn find_victim_doom1(&self) -> usize {
        let mut result = match self.pool.iter_alloced().next() {
            Some(first) => first,
            None => return 0,
        };
        for idx in self.pool.iter_alloced() {
            if self.pool.voice(idx).channel > self.pool.voice(result).channel {
                result = idx;
            }
        }
        result
    }

    /// `ReplaceExistingVoiceDoom2`: scan only the first `len - 3` entries
    /// of the allocated list (the original's off-by-three `roverend`
    /// walk), picking the lowest-priority voice at or above `channel`.
    /// Reproduced exactly, buggy skew included: it is what made DOOM II's
    /// voice stealing sound the way it does.
    fn find_victim_doom2(&self, channel: ChannelHandle) -> usize {
        let alloced: Vec<usize> = self.pool.iter_alloced().collect();
        let Some(&first) = alloced.first() else { return 0 };
        let mut result = first;

        let stop = alloced.len().saturating_sub(3);
        let mut best_priority: u32 = 0x8000;
        for &idx in &alloced[..stop] {
            let v = self.pool.voice(idx);
            if v.priority < best_priority && v.channel >= Some(channel) {
                best_priority = v.priority;
                result = idx;
            }
        }
        result
    }

    /// `ReplaceExistingVoice`: prefer any voice playing the secondary
    /// layer of a double-voice instrument (non-essential), else track the
    /// highest channel seen so far.
    fn find_victim_1_9(&self) -> usize {
        let mut result = match self.pool.iter_alloced().next() {
            Some(first) => first,
            None => return 0,
        };
        for idx in self.pool.iter_alloced() {
            let v = self.pool.voice(idx);
            let is_secondary = v.instrument_voice != 0;
            if is_secondary || v.channel >= self.pool.voice(result).channel {
                result = idx;
            }
        }
        result
    }

    /// `ReleaseVoice`: move `index` back to the free list, and if it was
    /// playing the secondary layer of a double-voice instrument and this
    /// driver predates 1.9, cascade the release onto whatever voice
    /// happened to be next after it in the allocated list (which, by
    /// construction, is the primary layer of the same note: the two
    /// voices of a double-voice instrument are always allocated back to
    /// back). Returns every voice index released, in order, for the
    /// caller to key each one off.
    pub fn release(&mut self, index: usize) -> Vec<usize> {
        let cascade_enabled = self.version != DriverVersion::Doom1_9;
        let mut released = Vec::new();
        let mut current = Some(index);

        while let Some(i) = current {
            let is_secondary = self.pool.voice(i).instrument_voice != 0;
            let next = self.pool.voice(i).next;
            self.pool.remove_from_alloced_list(i);
            self.pool.push_free(i);
            released.push(i);
            current = if is_secondary && cascade_enabled { next } else { None };
        }

        released
    }

    /// Whether `instrument` requires this driver to forcibly substitute
    /// instrument-voice 0 for the secondary voice's data, a `doom1_1.666`
    /// only quirk that fires whenever the chip isn't running in OPL3 mode
    /// (`VoiceKeyOn`'s `if (!opl_opl3mode && opl_drv_ver == opl_doom1_1_666)`).
    pub fn forces_single_voice_data(&self, opl3_mode: bool) -> bool {
        self.version == DriverVersion::Doom1_1_666 && !opl3_mode
    }

    /// Whether this driver programs the secondary voice of a double-voice
    /// instrument before the primary (every version except `Doom1_9`).
    pub fn programs_secondary_first(&self) -> bool {
        self.version != DriverVersion::Doom1_9
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Operator;

    fn voice_with_priority(attack: u8, sustain: u8) -> InstrumentVoice {
        InstrumentVoice {
            modulator: Operator::default(),
            feedback: 0,
            carrier: Operator {
                attack,
                sustain,
                ..Operator::default()
            },
            base_note_offset: 0,
        }
    }

    fn fill_with_instrument(alloc: &mut VoiceAllocator, n: usize, instr_ref: InstrumentRef) {
        for i in 0..n {
            let idx = alloc.pool_mut().get_free_voice().unwrap();
            let channel = ChannelHandle::new(0, i as u8);
            let voice = alloc.pool_mut().voice_mut(idx);
            voice.channel = Some(channel);
            voice.current_instr = Some(instr_ref);
            voice.instrument_voice = 0;
            voice.priority = i as u32;
        }
    }

    #[test]
    fn priority_formula_matches_original() {
        let voice = voice_with_priority(0x40, 0x05);
        // 0x0f - (0x40 >> 4) + 0x0f - (0x05 & 0x0f) = (0x0f-4) + (0x0f-5) = 11 + 10 = 21
        assert_eq!(voice_priority(&voice), 21);
    }

    #[test]
    fn free_voice_used_before_stealing_required() {
        let mut alloc = VoiceAllocator::new(false, DriverVersion::Doom1_9);
        assert!(alloc.pool_mut().get_free_voice().is_some());
        let released = alloc.ensure_capacity(
            ChannelHandle::new(0, 0),
            InstrumentRef::melodic(0),
            false,
            false,
        );
        assert!(released.is_empty());
    }

    #[test]
    fn doom_1_9_steals_when_free_list_empty() {
        let mut alloc = VoiceAllocator::new(false, DriverVersion::Doom1_9);
        fill_with_instrument(&mut alloc, 9, InstrumentRef::melodic(0));
        assert_eq!(alloc.pool().num_allocated(), 9);
        let released = alloc.ensure_capacity(
            ChannelHandle::new(0, 5),
            InstrumentRef::melodic(1),
            false,
            false,
        );
        assert_eq!(released.len(), 1);
        assert_eq!(alloc.pool().num_allocated(), 8);
    }

    #[test]
    fn doom_1_9_prefers_secondary_voice_victim() {
        let mut alloc = VoiceAllocator::new(false, DriverVersion::Doom1_9);
        fill_with_instrument(&mut alloc, 9, InstrumentRef::melodic(0));
        alloc.pool_mut().voice_mut(4).instrument_voice = 1;
        let released = alloc.ensure_capacity(
            ChannelHandle::new(0, 0),
            InstrumentRef::melodic(1),
            false,
            false,
        );
        assert_eq!(released, vec![4]);
    }

    #[test]
    fn beta_prefers_matching_channel() {
        let mut alloc = VoiceAllocator::new(false, DriverVersion::Beta);
        fill_with_instrument(&mut alloc, 9, InstrumentRef::melodic(0));
        let target = ChannelHandle::new(0, 3);
        let released = alloc.ensure_capacity(target, InstrumentRef::melodic(9), false, false);
        assert_eq!(released, vec![3]);
    }

    #[test]
    fn doom1_steals_highest_channel() {
        let mut alloc = VoiceAllocator::new(false, DriverVersion::Doom1_1_666);
        fill_with_instrument(&mut alloc, 9, InstrumentRef::melodic(0));
        let released = alloc.ensure_capacity(
            ChannelHandle::new(0, 0),
            InstrumentRef::melodic(0),
            false,
            true,
        );
        assert_eq!(released, vec![8]);
    }

    #[test]
    fn doom1_non_opl3_ignores_double_voice_requirement() {
        let mut alloc = VoiceAllocator::new(false, DriverVersion::Doom1_1_666);
        assert_eq!(alloc.required_voices_for_stealing(true, false), 1);
        assert_eq!(alloc.required_voices_for_stealing(true, true), 2);
    }

    #[test]
    fn doom2_skips_last_three_allocated() {
        let mut alloc = VoiceAllocator::new(false, DriverVersion::Doom2_1_666);
        fill_with_instrument(&mut alloc, 9, InstrumentRef::melodic(0));
        // Give voice 8 (one of the last three) the lowest priority; it
        // must NOT be picked because find_victim_doom2 only scans the
        // first len-3 = 6 entries.
        alloc.pool_mut().voice_mut(8).priority = 0;
        let released = alloc.ensure_capacity(
            ChannelHandle::new(0, 0),
            InstrumentRef::melodic(0),
            false,
            true,
        );
        assert_eq!(released, vec![0]);
    }

    #[test]
    fn release_cascades_to_paired_voice_pre_1_9() {
        let mut alloc = VoiceAllocator::new(false, DriverVersion::Doom1_1_666);
        let secondary = alloc.pool_mut().get_free_voice().unwrap();
        let primary = alloc.pool_mut().get_free_voice().unwrap();
        alloc.pool_mut().voice_mut(secondary).instrument_voice = 1;
        alloc.pool_mut().voice_mut(primary).instrument_voice = 0;
        let released = alloc.release(secondary);
        assert_eq!(released, vec![secondary, primary]);
        assert_eq!(alloc.pool().num_allocated(), 0);
    }

    #[test]
    fn release_does_not_cascade_on_1_9() {
        let mut alloc = VoiceAllocator::new(false, DriverVersion::Doom1_9);
        let secondary = alloc.pool_mut().get_free_voice().unwrap();
        let primary = alloc.pool_mut().get_free_voice().unwrap();
        alloc.pool_mut().voice_mut(secondary).instrument_voice = 1;
        let released = alloc.release(secondary);
        assert_eq!(released, vec![secondary]);
        assert_eq!(alloc.pool().num_allocated(), 1);
        let _ = primary;
    }
}
