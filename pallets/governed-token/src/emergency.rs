//! Guardian takeover with a fixed seven day window.
//!
//! Activation force-pauses the token and unlocks the emergency upgrade path. The window
//! is measured from activation; once it has elapsed the emergency powers lapse even if
//! nobody deactivates the mode.

use codec::{Decode, Encode, MaxEncodedLen};
use sp_runtime::RuntimeDebug;
use scale_info::TypeInfo;

pub const EMERGENCY_MODE_DURATION: u64 = 7 * 24 * 3_600;

#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum EmergencyError {
    AlreadyActive,
    NotActive,
    /// Active, but the window closed at the contained timestamp.
    Expired(u64),
}

#[derive(
    Clone, Copy, PartialEq, Eq, Default, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug,
)]
pub struct EmergencyState {
    pub active: bool,
    /// Unix seconds.
    pub activated_at: u64,
}

impl EmergencyState {
    pub fn activate(&mut self, now: u64) -> Result<(), EmergencyError> {
        if self.active {
            return Err(EmergencyError::AlreadyActive);
        }
        *self = Self { active: true, activated_at: now };
        Ok(())
    }

    pub fn deactivate(&mut self) -> Result<(), EmergencyError> {
        if !self.active {
            return Err(EmergencyError::NotActive);
        }
        *self = Self::default();
        Ok(())
    }

    pub fn expires_at(&self) -> u64 {
        self.activated_at.saturating_add(EMERGENCY_MODE_DURATION)
    }

    pub fn ensure_powers(&self, now: u64) -> Result<(), EmergencyError> {
        if !self.active {
            return Err(EmergencyError::NotActive);
        }
        if now >= self.expires_at() {
            return Err(EmergencyError::Expired(self.expires_at()));
        }
        Ok(())
    }

    pub fn can_use_powers(&self, now: u64) -> bool {
        self.ensure_powers(now).is_ok()
    }
}
