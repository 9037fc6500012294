multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::MIN_DEPOSIT_MOTES;

use crate::proxies::delegation_proxy;

/// Outcome of `request_outbound`: whether a withdrawal can settle
/// immediately from liquidity already on hand, or must wait on the host's
/// unbonding delay (spec §4.4). Consumed within the same call that produced
/// it — there is no cross-transaction ticket object, since MultiversX
/// entrypoints are atomic and the vault's own `Withdrawing` status plus
/// `pending_withdraw_motes` already record an unsettled request durably.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SettlementTicket {
    Liquid,
    Unbonding,
}

/// Abstracts `delegate`/`undelegate`/`delegated_amount`/`transfer_to` and the
/// pooled-delegation batching policy over a configured delegation-manager
/// contract (spec §4.4). Hides from the rest of the vault whether a given
/// withdrawal settles immediately or must wait on unbonding.
#[multiversx_sc::module]
pub trait DelegationAdapterModule: crate::storage::Storage + crate::events::EventsModule {
    /// The vault's own un-delegated EGLD balance, net of whatever is
    /// earmarked in `pending_to_delegate` for the next batch. Funds queued
    /// for batching are not treated as available to settle an existing
    /// withdrawal (SPEC_FULL Open Question (a)-adjacent decision, recorded
    /// in DESIGN.md).
    fn liquid_balance(&self) -> BigUint {
        let sc_balance = self.sc_egld_balance();
        let pending = self.pending_to_delegate().get();
        if sc_balance > pending {
            sc_balance - pending
        } else {
            BigUint::zero()
        }
    }

    fn sc_egld_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    /// Adds `motes` to `pending_to_delegate`; batches a delegation once the
    /// threshold is met (spec §4.4 `record_inbound`).
    fn record_inbound(&self, motes: &BigUint) {
        let mut pending = self.pending_to_delegate().get() + motes;

        if pending >= BigUint::from(MIN_DEPOSIT_MOTES) {
            let validator = self.validator().get();
            let delegation_manager = self.delegation_manager_address().get();
            self.tx()
                .to(&delegation_manager)
                .typed(delegation_proxy::DelegationManagerProxy)
                .delegate(validator)
                .egld(&pending)
                .sync_call();

            self.delegation_batched_event(&pending);
            pending = BigUint::zero();
        }

        self.pending_to_delegate().set(&pending);
    }

    /// Reserves `motes` for an outbound transfer, either from liquidity
    /// already on hand or by requesting undelegation of the shortfall (spec
    /// §4.4 `request_outbound`).
    fn request_outbound(&self, motes: &BigUint) -> SettlementTicket {
        let sc_balance = self.sc_egld_balance();

        if &sc_balance >= motes {
            self.pending_to_delegate().update(|pending| {
                if &*pending >= motes {
                    *pending -= motes;
                } else {
                    *pending = BigUint::zero();
                }
            });
            SettlementTicket::Liquid
        } else {
            let shortfall = motes - &sc_balance;
            let validator = self.validator().get();
            let delegation_manager = self.delegation_manager_address().get();
            self.tx()
                .to(&delegation_manager)
                .typed(delegation_proxy::DelegationManagerProxy)
                .undelegate(validator, shortfall.clone())
                .sync_call();

            self.undelegation_requested_event(&shortfall);
            SettlementTicket::Unbonding
        }
    }

    /// Attempts to pay `motes` to `recipient` against `ticket`. A `Liquid`
    /// ticket always settles. An `Unbonding` ticket settles only once enough
    /// of the caller's unbonding queue has matured on the delegation
    /// manager; otherwise no state changes and the caller should surface
    /// `UnbondingNotComplete` (spec §4.4 `try_settle`).
    fn try_settle(&self, ticket: SettlementTicket, motes: &BigUint, recipient: &ManagedAddress) -> bool {
        match ticket {
            SettlementTicket::Liquid => {
                self.transfer_to(recipient, motes);
                true
            }
            SettlementTicket::Unbonding => {
                let validator = self.validator().get();
                let delegation_manager = self.delegation_manager_address().get();
                let vault_address = self.blockchain().get_sc_address();

                let claimable = self
                    .tx()
                    .to(&delegation_manager)
                    .typed(delegation_proxy::DelegationManagerProxy)
                    .claimable_unbond_total(vault_address, validator.clone())
                    .returns(ReturnsResult)
                    .sync_call();

                if &self.liquid_balance() + &claimable < *motes {
                    return false;
                }

                if claimable > 0 {
                    self.tx()
                        .to(&delegation_manager)
                        .typed(delegation_proxy::DelegationManagerProxy)
                        .withdraw(validator)
                        .sync_call();
                }

                self.transfer_to(recipient, motes);
                true
            }
        }
    }

    fn transfer_to(&self, recipient: &ManagedAddress, motes: &BigUint) {
        self.tx().to(recipient).egld(motes).transfer();
    }
}
