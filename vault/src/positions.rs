multiversx_sc::imports!();

use common_errors::{
    ERROR_INSUFFICIENT_COLLATERAL, ERROR_INSUFFICIENT_DEBT, ERROR_LTV_EXCEEDED,
    ERROR_NO_WITHDRAW_PENDING, ERROR_UNBONDING_NOT_COMPLETE, ERROR_WITHDRAW_PENDING,
    ERROR_ZERO_AMOUNT,
};
use common_math::{FixedPointModule, Motes, Wad};
use common_structs::PositionStatus;

use crate::delegation::SettlementTicket;
use crate::proxies::debt_token_proxy;

/// The vault's core entrypoints: the per-user position state machine,
/// deposit/borrow/repay/withdraw, and LTV invariant enforcement (spec §4.5).
#[multiversx_sc::module]
pub trait PositionsModule:
    crate::storage::Storage
    + crate::events::EventsModule
    + crate::config::ConfigModule
    + crate::interest::InterestAccrualModule
    + crate::delegation::DelegationAdapterModule
    + common_math::FixedPointModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Deposits attached EGLD as collateral. No debt change; LTV can only
    /// decrease (spec §4.5 `deposit`).
    #[payable("EGLD")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        self.require_not_paused();
        let mut pos = self.position(&caller).get();
        require!(!pos.status.is_withdrawing(), ERROR_WITHDRAW_PENDING);
        require!(amount > 0, ERROR_ZERO_AMOUNT);

        self.accrue(&caller);
        // `accrue` may have updated `last_accrual_ts`; re-read before mutating.
        pos = self.position(&caller).get();

        pos.collateral_motes += &amount;
        pos.status = PositionStatus::Active;
        self.position(&caller).set(&pos);
        self.total_collateral().update(|t| *t += &amount);

        self.record_inbound(&amount);

        self.deposited_event(&caller, &amount, &pos.collateral_motes);
    }

    /// Exact alias of `deposit` (spec §4.5 `add_collateral`).
    #[payable("EGLD")]
    #[endpoint(addCollateral)]
    fn add_collateral(&self) {
        self.deposit();
    }

    /// Borrows `amount_wad` DEBT against existing collateral (spec §4.5
    /// `borrow`).
    #[endpoint(borrow)]
    fn borrow(&self, amount_wad: BigUint) {
        let caller = self.blockchain().get_caller();

        self.require_not_paused();
        let pos = self.position(&caller).get();
        require!(!pos.status.is_withdrawing(), ERROR_WITHDRAW_PENDING);
        require!(amount_wad > 0, ERROR_ZERO_AMOUNT);

        self.accrue(&caller);
        let mut pos = self.position(&caller).get();

        let new_debt = &pos.debt_principal + &amount_wad;
        let collateral = Motes(pos.collateral_motes.clone());
        require!(
            self.is_within_ltv(&Wad(new_debt.clone()), &collateral),
            ERROR_LTV_EXCEEDED
        );

        pos.debt_principal = new_debt.clone();
        self.position(&caller).set(&pos);
        self.total_debt_principal().update(|t| *t += &amount_wad);

        let debt_token = self.debt_token_address().get();
        self.tx()
            .to(&debt_token)
            .typed(debt_token_proxy::DebtTokenProxy)
            .mint(caller.clone(), amount_wad.clone())
            .sync_call();

        self.borrowed_event(&caller, &amount_wad, &new_debt);
    }

    /// Repays up to `amount_wad` of outstanding debt, capped at the current
    /// debt (spec §4.5 `repay`). `applied == 0` (i.e. no outstanding debt)
    /// is an error, not a no-op.
    #[endpoint(repay)]
    fn repay(&self, amount_wad: BigUint) {
        require!(amount_wad > 0, ERROR_ZERO_AMOUNT);
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        self.accrue(&caller);
        self.repay_applied(&caller, &amount_wad);
    }

    /// Equivalent to `repay(debt_principal(caller))` after accrual (spec
    /// §4.5 `repay_all`).
    #[endpoint(repayAll)]
    fn repay_all(&self) {
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        self.accrue(&caller);
        let debt = self.position(&caller).get().debt_principal;
        self.repay_applied(&caller, &debt);
    }

    fn repay_applied(&self, caller: &ManagedAddress, amount_wad: &BigUint) {
        let mut pos = self.position(caller).get();
        let applied = if amount_wad < &pos.debt_principal {
            amount_wad.clone()
        } else {
            pos.debt_principal.clone()
        };
        require!(applied > 0, ERROR_INSUFFICIENT_DEBT);

        let vault_address = self.blockchain().get_sc_address();
        let debt_token = self.debt_token_address().get();

        self.tx()
            .to(&debt_token)
            .typed(debt_token_proxy::DebtTokenProxy)
            .transfer_from(caller.clone(), vault_address.clone(), applied.clone())
            .sync_call();

        self.tx()
            .to(&debt_token)
            .typed(debt_token_proxy::DebtTokenProxy)
            .burn(vault_address, applied.clone())
            .sync_call();

        pos.debt_principal -= &applied;
        let new_debt = pos.debt_principal.clone();
        self.position(caller).set(&pos);
        self.total_debt_principal().update(|t| *t -= &applied);

        self.repaid_event(caller, &applied, &new_debt);
    }

    /// Requests a withdrawal of `amount_motes`; settles immediately if
    /// liquidity allows, otherwise moves the position to `Withdrawing`
    /// (spec §4.5 `request_withdraw`).
    #[endpoint(requestWithdraw)]
    fn request_withdraw(&self, amount_motes: BigUint) {
        let caller = self.blockchain().get_caller();

        self.require_not_paused();
        let pos = self.position(&caller).get();
        require!(!pos.status.is_withdrawing(), ERROR_WITHDRAW_PENDING);
        require!(amount_motes > 0, ERROR_ZERO_AMOUNT);
        require!(
            amount_motes <= pos.collateral_motes,
            ERROR_INSUFFICIENT_COLLATERAL
        );

        self.accrue(&caller);
        self.request_withdraw_checked(&caller, &amount_motes);
    }

    /// Withdraws the largest amount that keeps the post-withdraw LTV within
    /// bounds, using rounding that never puts the user above the cap (spec
    /// §4.5 `withdraw_max`, §9 Open Question (b): the strictly-safe
    /// rounding direction is selected).
    #[endpoint(withdrawMax)]
    fn withdraw_max(&self) {
        let caller = self.blockchain().get_caller();

        self.require_not_paused();
        let pos = self.position(&caller).get();
        require!(!pos.status.is_withdrawing(), ERROR_WITHDRAW_PENDING);

        self.accrue(&caller);
        let pos = self.position(&caller).get();

        let min_collateral = if pos.debt_principal > 0 {
            self.min_collateral_for_debt(&Wad(pos.debt_principal.clone())).0
        } else {
            BigUint::zero()
        };
        require!(
            min_collateral <= pos.collateral_motes,
            ERROR_LTV_EXCEEDED
        );
        let amount_motes = &pos.collateral_motes - &min_collateral;
        require!(amount_motes > 0, ERROR_ZERO_AMOUNT);

        self.request_withdraw_checked(&caller, &amount_motes);
    }

    /// Shared tail of `request_withdraw`/`withdraw_max`: runs after
    /// `accrue` with `amount_motes` already bounds-checked against
    /// `collateral_motes`.
    fn request_withdraw_checked(&self, caller: &ManagedAddress, amount_motes: &BigUint) {
        let mut pos = self.position(caller).get();

        let new_collateral = &pos.collateral_motes - amount_motes;
        require!(
            self.is_within_ltv(&Wad(pos.debt_principal.clone()), &Motes(new_collateral.clone())),
            ERROR_LTV_EXCEEDED
        );

        pos.collateral_motes = new_collateral;
        self.position(caller).set(&pos);
        self.total_collateral().update(|t| *t -= amount_motes);

        let ticket = self.request_outbound(amount_motes);

        self.withdraw_requested_event(caller, amount_motes);

        if ticket == SettlementTicket::Liquid {
            self.try_settle(ticket, amount_motes, caller);
            self.finish_withdraw(caller, amount_motes);
        } else {
            let mut pos = self.position(caller).get();
            pos.pending_withdraw_motes = amount_motes.clone();
            pos.status = PositionStatus::Withdrawing;
            self.position(caller).set(&pos);
        }
    }

    /// Settles a pending withdrawal once the host reports enough liquidity
    /// (spec §4.5 `finalize_withdraw`). No `paused` check: a user already
    /// committed to an outbound amount must be able to retrieve it even if
    /// the vault is later paused for new activity.
    #[endpoint(finalizeWithdraw)]
    fn finalize_withdraw(&self) {
        let caller = self.blockchain().get_caller();
        let pos = self.position(&caller).get();
        require!(pos.status.is_withdrawing(), ERROR_NO_WITHDRAW_PENDING);

        let amount = pos.pending_withdraw_motes.clone();
        let settled = self.try_settle(SettlementTicket::Unbonding, &amount, &caller);
        require!(settled, ERROR_UNBONDING_NOT_COMPLETE);

        self.finish_withdraw(&caller, &amount);
    }

    /// Clears `pending_withdraw_motes`, resolves `status`, and emits
    /// `WithdrawFinalized`. Shared by the immediate-settlement path inside
    /// `request_withdraw_checked` and the async path in `finalize_withdraw`
    /// (spec §4.5: the immediate path emits `WithdrawRequested` followed by
    /// `WithdrawFinalized` in the same call).
    fn finish_withdraw(&self, caller: &ManagedAddress, amount_motes: &BigUint) {
        let mut pos = self.position(caller).get();
        pos.pending_withdraw_motes = BigUint::zero();
        pos.status = if pos.collateral_motes == 0 && pos.debt_principal == 0 {
            PositionStatus::None
        } else {
            PositionStatus::Active
        };
        self.position(caller).set(&pos);

        self.withdraw_finalized_event(caller, amount_motes);
    }
}
