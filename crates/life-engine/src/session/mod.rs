//! Streaming per-cycle view of a single participant.

mod participant;


pub use self::participant::ParticipantSession;
