//! Closed set of capabilities recognised by the pallet.
//!
//! Every role has exactly one admin role. The two root roles, [`Role::DefaultAdmin`] and
//! [`Role::UpgraderAdmin`], administer themselves. The mapping is fixed at compile time;
//! there is no extrinsic that changes it.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use sp_runtime::RuntimeDebug;
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    RuntimeDebug,
    Serialize,
    Deserialize,
)]
pub enum Role {
    /// Root administrator. Administers every role outside the upgrade chain.
    DefaultAdmin,
    /// Root of the upgrade chain.
    UpgraderAdmin,
    /// May perform regular (non-emergency) upgrades.
    Upgrader,
    /// May mint new tokens, subject to the cap and the mint rate limits.
    Minter,
    /// May pause and unpause.
    AdminPauser,
    /// May pause but never unpause.
    BotPauser,
    /// May unpause but never pause.
    GovernanceUnpauser,
    /// May move stray native currency out of the pallet account.
    Recovery,
    /// May activate emergency mode and use the emergency upgrade path.
    EmergencyGuardian,
    BlocklistManager,
    WhitelistManager,
    /// May trigger and reset the circuit breaker.
    CircuitBreaker,
    /// May tune runtime parameters (circuit breaker interval and auto-reset).
    ParamManager,
    /// May record supply snapshots.
    Snapshot,
}

impl Role {
    pub const ALL: [Role; 14] = [
        Role::DefaultAdmin,
        Role::UpgraderAdmin,
        Role::Upgrader,
        Role::Minter,
        Role::AdminPauser,
        Role::BotPauser,
        Role::GovernanceUnpauser,
        Role::Recovery,
        Role::EmergencyGuardian,
        Role::BlocklistManager,
        Role::WhitelistManager,
        Role::CircuitBreaker,
        Role::ParamManager,
        Role::Snapshot,
    ];

    /// The role whose members may grant and revoke `self`.
    pub const fn admin(&self) -> Role {
        match self {
            Role::DefaultAdmin => Role::DefaultAdmin,
            Role::UpgraderAdmin | Role::Upgrader => Role::UpgraderAdmin,
            _ => Role::DefaultAdmin,
        }
    }

    pub const fn is_self_administered(&self) -> bool {
        matches!(self, Role::DefaultAdmin | Role::UpgraderAdmin)
    }

    /// Roles allowed to flip the pause flag on.
    pub const fn can_pause(&self) -> bool {
        matches!(self, Role::AdminPauser | Role::BotPauser)
    }

    /// Roles allowed to flip the pause flag off.
    pub const fn can_unpause(&self) -> bool {
        matches!(self, Role::AdminPauser | Role::GovernanceUnpauser)
    }
}
