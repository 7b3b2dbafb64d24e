//! GENMIDI instrument bank: the melodic and percussion voice table the
//! OPL programmer reads from when a channel's program changes or a
//! percussion key is struck.

mod instrument;

pub use instrument::{Instrument, InstrumentFlags, InstrumentVoice, Operator};

use thiserror::Error;

/// Magic bytes at the start of a GENMIDI lump.
const HEADER: &[u8] = b"#OPL_II#";
const NUM_MELODIC: usize = 128;
const NUM_PERCUSSION: usize = 47;
const INSTRUMENT_SIZE: usize = 36;
const NAME_SIZE: usize = 32;
/// Percussion keys below this MIDI note are silently ignored by note-on.
pub const PERCUSSION_BASE_KEY: u8 = 35;
/// Percussion keys above this MIDI note are silently ignored by note-on.
pub const PERCUSSION_MAX_KEY: u8 = 81;

/// Errors that can occur while loading an instrument bank.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("lump too short: need at least {need} bytes, got {got}")]
    TooShort { need: usize, got: usize },

    #[error("missing '#OPL_II#' GENMIDI header")]
    InvalidHeader,
}

/// A cheap, comparable handle to one instrument in a bank, stood in for a
/// cloned [`Instrument`] wherever code only needs to know which instrument
/// a voice is currently programmed with (e.g. to skip redundant
/// reprogramming, or to tell whether a voice belongs to a percussion key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrumentRef {
    pub percussion: bool,
    pub index: u8,
}

impl InstrumentRef {
    /// Reference to the melodic instrument for GM program `program`
    /// (wrapped to 7 bits, matching [`InstrumentBank::melodic`]).
    pub fn melodic(program: u8) -> Self {
        InstrumentRef {
            percussion: false,
            index: program & 0x7f,
        }
    }
}

/// The 128 melodic and 47 percussion instruments of a loaded GENMIDI lump,
/// plus their 32-byte display names.
#[derive(Debug, Clone)]
pub struct InstrumentBank {
    melodic: Vec<Instrument>,
    percussion: Vec<Instrument>,
    melodic_names: Vec<String>,
    percussion_names: Vec<String>,
}

impl InstrumentBank {
    /// Parse a GENMIDI lump (header + 175 instrument records + 175 name
    /// records) into an [`InstrumentBank`].
    pub fn load(data: &[u8]) -> Result<Self, BankError> {
        if data.len() < HEADER.len() {
            return Err(BankError::TooShort {
                need: HEADER.len(),
                got: data.len(),
            });
        }
        if &data[..HEADER.len()] != HEADER {
            return Err(BankError::InvalidHeader);
        }

        let total_instrs = NUM_MELODIC + NUM_PERCUSSION;
        let instr_bytes = total_instrs * INSTRUMENT_SIZE;
        let name_bytes = total_instrs * NAME_SIZE;
        let need = HEADER.len() + instr_bytes + name_bytes;
        if data.len() < need {
            return Err(BankError::TooShort {
                need,
                got: data.len(),
            });
        }

        let mut offset = HEADER.len();
        let mut all_instrs = Vec::with_capacity(total_instrs);
        for _ in 0..total_instrs {
            all_instrs.push(parse_instrument(&data[offset..offset + INSTRUMENT_SIZE]));
            offset += INSTRUMENT_SIZE;
        }

        let mut all_names = Vec::with_capacity(total_instrs);
        for _ in 0..total_instrs {
            all_names.push(parse_name(&data[offset..offset + NAME_SIZE]));
            offset += NAME_SIZE;
        }

        let percussion = all_instrs.split_off(NUM_MELODIC);
        let percussion_names = all_names.split_off(NUM_MELODIC);

        Ok(InstrumentBank {
            melodic: all_instrs,
            percussion,
            melodic_names: all_names,
            percussion_names,
        })
    }

    /// Build a bank directly from already-parsed instruments and names,
    /// bypassing the GENMIDI byte format (used by callers that already
    /// have instrument data, and by tests).
    pub fn from_instruments(
        melodic: Vec<Instrument>,
        percussion: Vec<Instrument>,
        melodic_names: Vec<String>,
        percussion_names: Vec<String>,
    ) -> Self {
        InstrumentBank {
            melodic,
            percussion,
            melodic_names,
            percussion_names,
        }
    }

    /// Melodic instrument for a GM program number (0-127).
    pub fn melodic(&self, program: u8) -> &Instrument {
        &self.melodic[program as usize & 0x7f]
    }

    /// Percussion instrument for a MIDI key, if it falls in the supported
    /// range `35..=81`.
    pub fn percussion(&self, key: u8) -> Option<&Instrument> {
        if !(PERCUSSION_BASE_KEY..=PERCUSSION_MAX_KEY).contains(&key) {
            return None;
        }
        self.percussion
            .get((key - PERCUSSION_BASE_KEY) as usize)
    }

    /// Display name of a melodic instrument.
    pub fn melodic_name(&self, program: u8) -> &str {
        &self.melodic_names[program as usize & 0x7f]
    }

    /// Display name of a percussion instrument keyed by MIDI note.
    pub fn percussion_name(&self, key: u8) -> Option<&str> {
        if !(PERCUSSION_BASE_KEY..=PERCUSSION_MAX_KEY).contains(&key) {
            return None;
        }
        self.percussion_names
            .get((key - PERCUSSION_BASE_KEY) as usize)
            .map(String::as_str)
    }

    /// Index of `instrument` within the melodic table, if it is one of
    /// this bank's melodic instruments (used by dev diagnostics).
    pub fn melodic_index_of(&self, instrument: &Instrument) -> Option<usize> {
        self.melodic.iter().position(|i| i == instrument)
    }

    /// Reference to the percussion instrument for a MIDI key, if it falls
    /// in the supported range `35..=81`.
    pub fn percussion_ref(&self, key: u8) -> Option<InstrumentRef> {
        if !(PERCUSSION_BASE_KEY..=PERCUSSION_MAX_KEY).contains(&key) {
            return None;
        }
        Some(InstrumentRef {
            percussion: true,
            index: key - PERCUSSION_BASE_KEY,
        })
    }

    /// Resolve an [`InstrumentRef`] to the instrument it names.
    pub fn get(&self, r: InstrumentRef) -> &Instrument {
        if r.percussion {
            &self.percussion[r.index as usize]
        } else {
            &self.melodic[r.index as usize & 0x7f]
        }
    }
}

fn parse_op(data: &[u8]) -> Operator {
    Operator {
        tremolo: data[0],
        attack: data[1],
        sustain: data[2],
        waveform: data[3],
        scale: data[4],
        level: data[5],
    }
}

fn parse_voice(data: &[u8]) -> InstrumentVoice {
    let modulator = parse_op(&data[0..6]);
    let feedback = data[6];
    let carrier = parse_op(&data[7..13]);
    // data[13] is the unused padding byte.
    let base_note_offset = i16::from_le_bytes([data[14], data[15]]);
    InstrumentVoice {
        modulator,
        feedback,
        carrier,
        base_note_offset,
    }
}

fn parse_instrument(data: &[u8]) -> Instrument {
    let flags = InstrumentFlags::from_bits_truncate(u16::from_le_bytes([data[0], data[1]]));
    let fine_tuning = data[2];
    let fixed_note = data[3];
    let voices = [parse_voice(&data[4..20]), parse_voice(&data[20..36])];
    Instrument {
        flags,
        fine_tuning,
        fixed_note,
        voices,
    }
}

fn parse_name(data: &[u8]) -> String {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    String::from_utf8_lossy(&data[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_lump() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(HEADER);
        for _ in 0..(NUM_MELODIC + NUM_PERCUSSION) {
            data.extend_from_slice(&[0u8; INSTRUMENT_SIZE]);
        }
        for i in 0..(NUM_MELODIC + NUM_PERCUSSION) {
            let mut name = [0u8; NAME_SIZE];
            let label = format!("instr{i}");
            name[..label.len()].copy_from_slice(label.as_bytes());
            data.extend_from_slice(&name);
        }
        data
    }

    #[test]
    fn rejects_missing_header() {
        let data = vec![0u8; 64];
        assert!(matches!(InstrumentBank::load(&data), Err(BankError::InvalidHeader)));
    }

    #[test]
    fn rejects_short_lump() {
        let data = HEADER.to_vec();
        assert!(matches!(
            InstrumentBank::load(&data),
            Err(BankError::TooShort { .. })
        ));
    }

    #[test]
    fn loads_well_formed_lump() {
        let data = build_lump();
        let bank = InstrumentBank::load(&data).unwrap();
        assert_eq!(bank.melodic_name(0), "instr0");
        assert_eq!(bank.percussion_name(35), Some("instr128"));
        assert_eq!(bank.percussion_name(34), None);
        assert_eq!(bank.percussion_name(82), None);
    }

    #[test]
    fn melodic_program_wraps_to_7_bits() {
        let data = build_lump();
        let bank = InstrumentBank::load(&data).unwrap();
        assert_eq!(bank.melodic(200), bank.melodic(200 & 0x7f));
    }
}
