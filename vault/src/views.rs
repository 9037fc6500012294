multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::WAD;
use common_errors::ERROR_NO_VAULT;
use common_math::{FixedPointModule, Motes, Wad};
use common_structs::{Position, PositionStatus};

/// Read-only projections of a user's position (spec §4.5 view entrypoints).
/// Debt figures are forward-projected through `project_debt` as of the
/// current block timestamp but never written to storage — a view call must
/// not mutate state (spec §9 "Views must not mutate").
#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::Storage + crate::interest::InterestAccrualModule + common_math::FixedPointModule
{
    #[view(collateralOf)]
    fn collateral_of(&self, user: ManagedAddress) -> BigUint {
        self.position(&user).get().collateral_motes
    }

    #[view(debtOf)]
    fn debt_of(&self, user: ManagedAddress) -> BigUint {
        self.project_debt(&user)
    }

    /// Current loan-to-value, in basis points, using projected debt.
    #[view(ltvOf)]
    fn ltv_of(&self, user: ManagedAddress) -> BigUint {
        let collateral = self.position(&user).get().collateral_motes;
        let debt = self.project_debt(&user);
        self.ltv_bps(&Wad(debt), &Motes(collateral))
    }

    /// `max_borrow_wad(collateral) * WAD / debt`, i.e. how much headroom the
    /// position has before `LtvExceeded` would trigger, scaled by `WAD` so a
    /// value of exactly `WAD` means "at the LTV cap". Zero debt has no
    /// meaningful ratio; `max_wad()` is returned as the "no risk of
    /// liquidation" sentinel rather than dividing by zero (recorded in
    /// DESIGN.md).
    #[view(healthFactorOf)]
    fn health_factor_of(&self, user: ManagedAddress) -> BigUint {
        let collateral = self.position(&user).get().collateral_motes;
        let debt = self.project_debt(&user);

        if debt == BigUint::zero() {
            return self.max_wad();
        }

        let max_borrow = self.max_borrow_wad(&Motes(collateral)).0;
        max_borrow * BigUint::from(WAD) / debt
    }

    #[view(pendingWithdrawOf)]
    fn pending_withdraw_of(&self, user: ManagedAddress) -> BigUint {
        self.position(&user).get().pending_withdraw_motes
    }

    #[view(statusOf)]
    fn status_of(&self, user: ManagedAddress) -> PositionStatus {
        self.position(&user).get().status
    }

    /// Combines the above into a single read, with `debt_principal`
    /// replaced by its projected value (spec §4.5 `get_position`).
    #[view(getPosition)]
    fn get_position(&self, user: ManagedAddress) -> Position<Self::Api> {
        let mut pos = self.position(&user).get();
        pos.debt_principal = self.project_debt(&user);
        pos
    }

    /// Same as `get_position`, but raises `NoVault` for a caller with no
    /// position instead of returning the empty default (spec §7 `NoVault`,
    /// "reserved for callers that wish to require" one).
    #[view(getPositionStrict)]
    fn get_position_strict(&self, user: ManagedAddress) -> Position<Self::Api> {
        let pos = self.position(&user).get();
        require!(pos.status != PositionStatus::None, ERROR_NO_VAULT);

        self.get_position(user)
    }
}
