#![no_std]

multiversx_sc::imports!();

pub mod events;
pub mod storage;

use common_errors::{
    ERROR_INSUFFICIENT_ALLOWANCE, ERROR_INSUFFICIENT_BALANCE, ERROR_ONLY_VAULT, ERROR_ZERO_AMOUNT,
};

/// The DEBT fungible token (spec §4.3). An external collaborator of the
/// vault: only the configured vault address may `mint`/`burn`; any holder
/// may `approve`/`transfer_from` in the usual allowance-based way so the
/// vault can pull repayments.
#[multiversx_sc::contract]
pub trait DebtToken: storage::Storage + events::EventsModule {
    /// `vault` is fixed at init and never changes — spec §3 "debt_token:
    /// immutable after init" read in reverse (the token fixes its minter
    /// once, the vault fixes its token address once).
    #[init]
    fn init(&self, vault: ManagedAddress) {
        self.vault_address().set(&vault);
        self.total_supply().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let owner = self.blockchain().get_caller();
        self.allowance(&owner, &spender).set(&amount);
        self.approval_event(&owner, &spender, &amount);
    }

    /// Called by the vault to pull a repayment. Debits the allowance by
    /// exactly `amount` and fails with `InsufficientAllowance` if short.
    #[endpoint(transferFrom)]
    fn transfer_from(&self, owner: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        require!(amount > 0, ERROR_ZERO_AMOUNT);
        let spender = self.blockchain().get_caller();

        let allowed = self.allowance(&owner, &spender).get();
        require!(allowed >= amount, ERROR_INSUFFICIENT_ALLOWANCE);

        let owner_balance = self.balance(&owner).get();
        require!(owner_balance >= amount, ERROR_INSUFFICIENT_BALANCE);

        self.allowance(&owner, &spender).set(&(allowed - &amount));
        self.balance(&owner).set(&(owner_balance - &amount));
        self.balance(&to).update(|b| *b += &amount);

        self.transfer_event(&owner, &to, &amount);
    }

    /// Vault-only. Mints `amount` DEBT to `to` and increases `total_supply`
    /// by the same amount (spec invariant I6).
    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        self.require_caller_is_vault();
        require!(amount > 0, ERROR_ZERO_AMOUNT);

        self.balance(&to).update(|b| *b += &amount);
        self.total_supply().update(|s| *s += &amount);

        self.transfer_event(&ManagedAddress::zero(), &to, &amount);
    }

    /// Vault-only. Burns `amount` DEBT from `from` and decreases
    /// `total_supply` by the same amount.
    #[endpoint(burn)]
    fn burn(&self, from: ManagedAddress, amount: BigUint) {
        self.require_caller_is_vault();
        require!(amount > 0, ERROR_ZERO_AMOUNT);

        let balance = self.balance(&from).get();
        require!(balance >= amount, ERROR_INSUFFICIENT_BALANCE);

        self.balance(&from).set(&(balance - &amount));
        self.total_supply().update(|s| *s -= &amount);

        self.transfer_event(&from, &ManagedAddress::zero(), &amount);
    }

    fn require_caller_is_vault(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.vault_address().get(), ERROR_ONLY_VAULT);
    }
}
