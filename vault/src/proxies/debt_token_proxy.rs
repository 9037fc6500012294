// Hand-written proxy for the `debt-token` contract, authored the way the
// multiversx-sc proxy generator would produce one (see
// `lending_pool/src/proxies/proxy_pool.rs` in the teacher repo) but kept by
// hand since `debt-token` lives in this same workspace and its ABI changes
// alongside the vault's.

#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

pub struct DebtTokenProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DebtTokenProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DebtTokenProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DebtTokenProxyMethods { wrapped_tx: tx }
    }
}

pub struct DebtTokenProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> DebtTokenProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    /// Deployed by the vault itself from a pre-uploaded template, with the
    /// vault's own address as the fixed minter (spec §3 "debt_token:
    /// immutable after init"; see `lending_pool::factory::create_pool`'s
    /// `from_source`/`code_metadata` deploy pattern).
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        vault: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&vault)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> DebtTokenProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Vault-only. Mints `amount` DEBT to `to` (spec §4.3).
    pub fn mint<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        to: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("mint")
            .argument(&to)
            .argument(&amount)
            .original_result()
    }

    /// Vault-only. Burns `amount` DEBT from `from`.
    pub fn burn<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        from: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("burn")
            .argument(&from)
            .argument(&amount)
            .original_result()
    }

    /// Pulls `amount` from `owner`'s allowance granted to the vault into
    /// `to` (the vault itself, on repay). Fails the whole call with
    /// `InsufficientAllowance`/`InsufficientBalance` if short.
    pub fn transfer_from<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        owner: Arg0,
        to: Arg1,
        amount: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferFrom")
            .argument(&owner)
            .argument(&to)
            .argument(&amount)
            .original_result()
    }

    pub fn balance_of<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("balanceOf")
            .argument(&address)
            .original_result()
    }

    pub fn total_supply(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalSupply")
            .original_result()
    }
}
