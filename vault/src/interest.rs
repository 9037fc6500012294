multiversx_sc::imports!();

use common_constants::{BPS_DIVISOR, INTEREST_RATE_BPS, SECONDS_PER_YEAR};
use common_errors::ERROR_OVERFLOW;

use crate::proxies::debt_token_proxy;

/// Per-user simple-interest accrual (spec §4.2). Lives on the vault contract
/// rather than in `common/math` because, unlike `FixedPointModule`, it reads
/// and writes vault storage and calls out to `DebtToken::mint` — it is not
/// pure.
#[multiversx_sc::module]
pub trait InterestAccrualModule:
    crate::storage::Storage + crate::events::EventsModule + common_math::FixedPointModule
{
    /// Must run as the first side-effectful step of every entrypoint that
    /// reads or writes `debt_principal` (spec §4.2, §5 "Interest accrual
    /// ordering").
    fn accrue(&self, user: &ManagedAddress) {
        let now = self.blockchain().get_block_timestamp();
        let mut pos = self.position(user).get();

        if pos.debt_principal == BigUint::zero() {
            if pos.last_accrual_ts != now {
                pos.last_accrual_ts = now;
                self.position(user).set(&pos);
            }
            return;
        }

        let elapsed = now - pos.last_accrual_ts;
        if elapsed == 0 {
            // Idempotent (spec P5): no time has passed since the last accrual.
            return;
        }

        let numerator = &pos.debt_principal * INTEREST_RATE_BPS * elapsed;
        let denominator = BigUint::from(SECONDS_PER_YEAR) * BigUint::from(BPS_DIVISOR);
        let interest = self.ceil_div(&numerator, &denominator);

        let new_debt = &pos.debt_principal + &interest;
        require!(new_debt <= self.max_wad(), ERROR_OVERFLOW);

        pos.debt_principal = new_debt;
        pos.last_accrual_ts = now;
        self.position(user).set(&pos);

        self.total_debt_principal().update(|t| *t += &interest);

        // Minted to the vault's own account, not the user's, to keep
        // `DebtToken.total_supply == total_debt_principal` (invariant I6)
        // without giving the user spendable balance for interest it merely
        // owes.
        let vault_address = self.blockchain().get_sc_address();
        let debt_token = self.debt_token_address().get();
        self.tx()
            .to(&debt_token)
            .typed(debt_token_proxy::DebtTokenProxy)
            .mint(vault_address, interest.clone())
            .sync_call();

        self.interest_accrued_event(user, &interest);
    }

    /// Pure, non-mutating projection of `accrue` used by view entrypoints
    /// (spec §9 "Interest accrual on view entrypoints is projected").
    fn project_debt(&self, user: &ManagedAddress) -> BigUint {
        let pos = self.position(user).get();
        if pos.debt_principal == BigUint::zero() {
            return BigUint::zero();
        }

        let now = self.blockchain().get_block_timestamp();
        let elapsed = now - pos.last_accrual_ts;
        if elapsed == 0 {
            return pos.debt_principal;
        }

        let numerator = &pos.debt_principal * INTEREST_RATE_BPS * elapsed;
        let denominator = BigUint::from(SECONDS_PER_YEAR) * BigUint::from(BPS_DIVISOR);
        let interest = self.ceil_div(&numerator, &denominator);

        pos.debt_principal + interest
    }
}
