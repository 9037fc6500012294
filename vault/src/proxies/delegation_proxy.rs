// Hand-written proxy for the host chain's validator-delegation system,
// implemented against `delegation-mock`'s interface (spec §4.4). Production
// deployments point the same `DelegationAdapterModule` at the chain's real
// delegation manager address; only this proxy's target contract changes.

#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

pub struct DelegationManagerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DelegationManagerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DelegationManagerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DelegationManagerProxyMethods { wrapped_tx: tx }
    }
}

pub struct DelegationManagerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, To, Gas> DelegationManagerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Payable. Delegates the attached value to `validator`. Left without a
    /// `.payment(NotPayable)` so the caller attaches EGLD via `.egld(..)`,
    /// mirroring `xegld_proxy::LiquidStakingProxy::delegate` in the teacher
    /// repo.
    pub fn delegate<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        validator: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("delegate")
            .argument(&validator)
            .original_result()
    }

    pub fn undelegate<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        validator: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("unDelegate")
            .argument(&validator)
            .argument(&amount)
            .original_result()
    }

    /// Pays out whatever has matured in the caller's unbonding queue for
    /// `validator` back to the caller (the vault itself).
    pub fn withdraw<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        validator: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdraw")
            .argument(&validator)
            .original_result()
    }

    pub fn delegated_amount<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        caller: Arg0,
        validator: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDelegatedAmount")
            .argument(&caller)
            .argument(&validator)
            .original_result()
    }

    /// Sum of the caller's queued undelegations that have already crossed
    /// the unbonding delay — what `withdraw` would pay out right now.
    pub fn claimable_unbond_total<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        caller: Arg0,
        validator: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getClaimableUnbondTotal")
            .argument(&caller)
            .argument(&validator)
            .original_result()
    }
}
