//! dmxopl - MIDI-to-OPL FM synthesis player core
//!
//! Reproduces the MIDI-to-OPL translation layer of id Software's DMX sound
//! driver: loading a GENMIDI instrument bank, allocating and stealing OPL2/
//! OPL3 voices under one of four historical driver-version policies, and
//! programming chip registers from MIDI events. Container parsing (Standard
//! MIDI File / MUS / WAD), chip emulation, and register I/O are external
//! collaborators behind [`opl::OplDriver`] and [`track::TrackSource`].
//!
//! # Example
//!
//! ```no_run
//! use dmxopl::bank::InstrumentBank;
//! use dmxopl::player::{Player, PlayerConfig};
//!
//! # fn example(genmidi_lump: &[u8], driver: impl dmxopl::opl::OplDriver) -> Result<(), Box<dyn std::error::Error>> {
//! let bank = InstrumentBank::load(genmidi_lump)?;
//! let config = PlayerConfig::from_env_or(PlayerConfig::default());
//! let mut player = Player::new(driver, bank, config)?;
//! player.register_song(1);
//! player.play();
//! # Ok(())
//! # }
//! ```

pub mod allocator;
pub mod bank;
pub mod channel;
pub mod dispatch;
pub mod freq;
pub mod midi;
pub mod opl;
pub mod player;
pub mod scheduler;
pub mod track;
pub mod voicepool;

pub use allocator::{DriverVersion, VoiceAllocator};
pub use bank::{Instrument, InstrumentBank, InstrumentRef};
pub use opl::{OplDriver, OplProgrammer};
pub use player::{Player, PlayerConfig};

/// Commonly imported types for host applications driving a [`Player`].
pub mod prelude {
    pub use crate::allocator::DriverVersion;
    pub use crate::bank::InstrumentBank;
    pub use crate::dispatch::DispatchedEvent;
    pub use crate::opl::{OplDriver, OplProgrammer};
    pub use crate::player::{Player, PlayerConfig, PlaybackState, SongSource};
    pub use crate::track::{TrackSource, VecTrackSource};
}
