//! Manual kill-switch for every balance-moving call.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{traits::ConstU32, BoundedVec};
use sp_runtime::RuntimeDebug;
use scale_info::TypeInfo;

pub const MAX_REASON_LEN: u32 = 256;

pub const MIN_RESET_INTERVAL: u64 = 3_600;
pub const MAX_RESET_INTERVAL: u64 = 7 * 24 * 3_600;
pub const DEFAULT_RESET_INTERVAL: u64 = 24 * 3_600;

/// Free-form justification attached to a trigger or an emergency activation.
pub type Reason = BoundedVec<u8, ConstU32<MAX_REASON_LEN>>;

#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum BreakerError {
    AlreadyTriggered,
    NotTriggered,
    /// Reset interval outside `MIN_RESET_INTERVAL..=MAX_RESET_INTERVAL`.
    InvalidInterval(u64),
}

#[derive(Clone, PartialEq, Eq, Default, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct CircuitBreakerState {
    pub triggered: bool,
    pub reason: Reason,
    /// Unix seconds.
    pub triggered_at: u64,
    pub reset_interval: u64,
    /// When set, a trigger older than `reset_interval` stops blocking on its own.
    pub auto_reset: bool,
}

impl CircuitBreakerState {
    pub fn trigger(&mut self, reason: Reason, now: u64) -> Result<(), BreakerError> {
        if self.triggered {
            return Err(BreakerError::AlreadyTriggered);
        }
        self.triggered = true;
        self.reason = reason;
        self.triggered_at = now;
        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), BreakerError> {
        if !self.triggered {
            return Err(BreakerError::NotTriggered);
        }
        self.triggered = false;
        self.reason = Reason::default();
        self.triggered_at = 0;
        Ok(())
    }

    pub fn configure(&mut self, reset_interval: u64, auto_reset: bool) -> Result<(), BreakerError> {
        if !(MIN_RESET_INTERVAL..=MAX_RESET_INTERVAL).contains(&reset_interval) {
            return Err(BreakerError::InvalidInterval(reset_interval));
        }
        self.reset_interval = reset_interval;
        self.auto_reset = auto_reset;
        Ok(())
    }

    /// Whether balance-moving calls are currently blocked.
    pub fn is_active(&self, now: u64) -> bool {
        if !self.triggered {
            return false;
        }
        !(self.auto_reset && now >= self.triggered_at.saturating_add(self.reset_interval))
    }
}
