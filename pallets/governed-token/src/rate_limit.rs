//! Multi-window mint rate limiting.
//!
//! Minted amounts are tracked per block and per UTC day. Both counters are reset the
//! first time a mint observes a new epoch marker (block number or `timestamp / 86400`).
//! Mints at or above the large-mint threshold additionally open a cooldown measured in
//! blocks.

use codec::{Decode, Encode, MaxEncodedLen};
use sp_runtime::RuntimeDebug;
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Length of a rate-limit day in seconds.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Default per-transaction cap, in whole tokens.
pub const DEFAULT_MAX_PER_TRANSACTION: u128 = 10_000_000;
/// Default per-block cap, in whole tokens.
pub const DEFAULT_MAX_PER_BLOCK: u128 = 20_000_000;
/// Default per-day cap, in whole tokens.
pub const DEFAULT_MAX_PER_DAY: u128 = 100_000_000;
pub const DEFAULT_COOLDOWN_BLOCKS: u64 = 100;

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Encode,
    Decode,
    MaxEncodedLen,
    TypeInfo,
    RuntimeDebug,
    Serialize,
    Deserialize,
)]
pub struct MintLimits {
    pub max_per_transaction: u128,
    pub max_per_block: u128,
    pub max_per_day: u128,
    /// Blocks that must pass after a large mint before the next one. Zero disables it.
    pub cooldown_blocks: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum LimitsError {
    /// `max_per_transaction` is zero.
    InvalidTransactionLimit,
    BlockLimitBelowTransactionLimit,
    DayLimitBelowBlockLimit,
}

impl MintLimits {
    /// The stock limits (10M / 20M / 100M tokens, 100 block cooldown) scaled to `decimals`.
    pub fn default_for_decimals(decimals: u8) -> Self {
        let unit = 10u128.saturating_pow(decimals as u32);
        Self {
            max_per_transaction: DEFAULT_MAX_PER_TRANSACTION.saturating_mul(unit),
            max_per_block: DEFAULT_MAX_PER_BLOCK.saturating_mul(unit),
            max_per_day: DEFAULT_MAX_PER_DAY.saturating_mul(unit),
            cooldown_blocks: DEFAULT_COOLDOWN_BLOCKS,
        }
    }

    pub fn validate(&self) -> Result<(), LimitsError> {
        if self.max_per_transaction == 0 {
            return Err(LimitsError::InvalidTransactionLimit);
        }
        if self.max_per_block < self.max_per_transaction {
            return Err(LimitsError::BlockLimitBelowTransactionLimit);
        }
        if self.max_per_day < self.max_per_block {
            return Err(LimitsError::DayLimitBelowBlockLimit);
        }
        Ok(())
    }

    /// Limits that were never configured are all zero.
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// A rejected mint. Each variant carries the attempted amount and the limit it violated.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum RateLimitError {
    ExceedsTransactionLimit { amount: u128, limit: u128 },
    ExceedsBlockLimit { amount: u128, limit: u128 },
    ExceedsDayLimit { amount: u128, limit: u128 },
    /// `limit` is the configured cooldown in blocks.
    CooldownActive { amount: u128, limit: u64 },
}

/// What a successful mint did to the window.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub struct MintRecord {
    pub block_minted: u128,
    pub day_minted: u128,
    pub large_mint: bool,
}

#[derive(
    Clone, Copy, PartialEq, Eq, Default, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug,
)]
pub struct MintWindowState {
    pub block_number: u64,
    pub block_minted: u128,
    pub day_index: u64,
    pub day_minted: u128,
    /// `None` until the first large mint.
    pub last_large_mint_block: Option<u64>,
}

/// Read-only view combining the window with the configured limits.
#[derive(Clone, Copy, PartialEq, Eq, Default, RuntimeDebug)]
pub struct MintStats {
    pub block_minted: u128,
    pub day_minted: u128,
    pub block_limit: u128,
    pub day_limit: u128,
    /// Blocks since the last large mint, or since block zero if there never was one.
    pub blocks_since_last_large: u64,
}

pub fn day_index(timestamp: u64) -> u64 {
    timestamp / SECONDS_PER_DAY
}

impl MintWindowState {
    /// Runs the five mint checks in order and records the mint on success.
    ///
    /// The checks are: per-transaction cap, per-block cap (after rolling the block
    /// window), per-day cap (after rolling the day window), large-mint cooldown. The
    /// first violated check is reported. On error `self` is left untouched.
    pub fn check_and_record(
        &mut self,
        amount: u128,
        limits: &MintLimits,
        large_mint_threshold: u128,
        now_block: u64,
        now_time: u64,
    ) -> Result<MintRecord, RateLimitError> {
        if amount > limits.max_per_transaction {
            return Err(RateLimitError::ExceedsTransactionLimit {
                amount,
                limit: limits.max_per_transaction,
            });
        }

        let mut next = *self;

        if now_block != next.block_number {
            next.block_minted = 0;
            next.block_number = now_block;
        }
        let block_minted = next
            .block_minted
            .checked_add(amount)
            .filter(|total| *total <= limits.max_per_block)
            .ok_or(RateLimitError::ExceedsBlockLimit { amount, limit: limits.max_per_block })?;

        let today = day_index(now_time);
        if today != next.day_index {
            next.day_minted = 0;
            next.day_index = today;
        }
        let day_minted = next
            .day_minted
            .checked_add(amount)
            .filter(|total| *total <= limits.max_per_day)
            .ok_or(RateLimitError::ExceedsDayLimit { amount, limit: limits.max_per_day })?;

        let large_mint = amount >= large_mint_threshold;
        if large_mint {
            if let Some(last) = next.last_large_mint_block {
                if now_block.saturating_sub(last) < limits.cooldown_blocks {
                    return Err(RateLimitError::CooldownActive {
                        amount,
                        limit: limits.cooldown_blocks,
                    });
                }
            }
            next.last_large_mint_block = Some(now_block);
        }

        next.block_minted = block_minted;
        next.day_minted = day_minted;
        *self = next;

        Ok(MintRecord { block_minted, day_minted, large_mint })
    }

    pub fn stats(&self, limits: &MintLimits, now_block: u64, now_time: u64) -> MintStats {
        let block_minted = if self.block_number == now_block { self.block_minted } else { 0 };
        let day_minted = if self.day_index == day_index(now_time) { self.day_minted } else { 0 };

        MintStats {
            block_minted,
            day_minted,
            block_limit: limits.max_per_block,
            day_limit: limits.max_per_day,
            blocks_since_last_large: now_block
                .saturating_sub(self.last_large_mint_block.unwrap_or_default()),
        }
    }
}
