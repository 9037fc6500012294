#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Lifecycle state of a user's position (spec §3 "Lifecycle").
///
/// Persisted as `u8` (`None` = 0, `Active` = 1, `Withdrawing` = 2) — this is
/// the exact discriminant order external readers must use when decoding the
/// raw storage value (spec §6 "Persisted state layout").
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PositionStatus {
    None,
    Active,
    Withdrawing,
}

impl PositionStatus {
    pub fn is_withdrawing(self) -> bool {
        matches!(self, PositionStatus::Withdrawing)
    }

    pub fn is_active(self) -> bool {
        matches!(self, PositionStatus::Active)
    }
}

impl Default for PositionStatus {
    fn default() -> Self {
        PositionStatus::None
    }
}

/// A user's full position, as returned by the `get_position` view (spec §4.5).
///
/// `collateral_motes` and `debt_principal` are intentionally typed in their
/// native scale (motes, wad) rather than as a single numeric type, so that a
/// caller can never add one to the other without an explicit conversion
/// through `FixedPoint` (spec §9 "Mixed precision").
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Position<M: ManagedTypeApi> {
    pub collateral_motes: BigUint<M>,
    pub debt_principal: BigUint<M>,
    pub last_accrual_ts: u64,
    pub pending_withdraw_motes: BigUint<M>,
    pub status: PositionStatus,
}

impl<M: ManagedTypeApi> Position<M> {
    pub fn new_empty() -> Self {
        Position {
            collateral_motes: BigUint::zero(),
            debt_principal: BigUint::zero(),
            last_accrual_ts: 0,
            pending_withdraw_motes: BigUint::zero(),
            status: PositionStatus::None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status == PositionStatus::None
    }
}
