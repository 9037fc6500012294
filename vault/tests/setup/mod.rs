use crate::constants::*;
use common_structs::{Position, PositionStatus};
use multiversx_sc::types::{BigUint, ManagedAddress, ManagedBuffer, OptionalValue, TestAddress};
use multiversx_sc_scenario::{api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(VAULT_PATH, vault::ContractBuilder);
    blockchain.register_contract(DEBT_TOKEN_PATH, debt_token::ContractBuilder);
    blockchain.register_contract(DELEGATION_MOCK_PATH, delegation_mock::ContractBuilder);

    blockchain
}

/// Deploys `vault`, `debt-token` and `delegation-mock` wired together, the
/// way `controller/tests/setup/mod.rs` wires the lending pool to its
/// template liquidity pool and price aggregator.
pub struct VaultTestState {
    pub world: ScenarioWorld,
    pub vault: ManagedAddress<StaticApi>,
    pub debt_token: ManagedAddress<StaticApi>,
    pub delegation_mock: ManagedAddress<StaticApi>,
}

impl Default for VaultTestState {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultTestState {
    pub fn new() -> Self {
        let mut world = world();
        world.current_block().block_timestamp(0).block_epoch(0);

        world
            .account(OWNER_ADDRESS)
            .nonce(1)
            .balance(BigUint::from(0u64));
        world
            .account(USER_A)
            .nonce(1)
            .balance(BigUint::from(100_000u64) * BigUint::from(CSPR));
        world
            .account(USER_B)
            .nonce(1)
            .balance(BigUint::from(100_000u64) * BigUint::from(CSPR));

        let delegation_mock = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(delegation_mock::DelegationMockProxy)
            .init(OptionalValue::<u64>::None)
            .code(DELEGATION_MOCK_PATH)
            .returns(multiversx_sc::types::ReturnsNewManagedAddress)
            .run();

        // A throwaway `debt-token` instance, deployed only to serve as the
        // `from_source` code template the vault deploys its own fixed
        // instance from during `init` (matches the deploy-from-template call
        // the vault's `init` makes in production).
        let debt_token_template = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(debt_token::DebtTokenProxy)
            .init(OWNER_ADDRESS.to_managed_address())
            .code(DEBT_TOKEN_PATH)
            .returns(multiversx_sc::types::ReturnsNewManagedAddress)
            .run();

        let vault = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(vault::VaultProxy)
            .init(
                debt_token_template,
                delegation_mock.clone(),
                ManagedBuffer::from(VALIDATOR_KEY),
            )
            .code(VAULT_PATH)
            .returns(multiversx_sc::types::ReturnsNewManagedAddress)
            .run();

        let debt_token = world
            .query()
            .to(&vault)
            .typed(vault::VaultProxy)
            .debt_token_address()
            .returns(multiversx_sc::types::ReturnsResult)
            .run();

        Self {
            world,
            vault,
            debt_token,
            delegation_mock,
        }
    }

    pub fn advance_epoch(&mut self, by: u64) -> &mut Self {
        let current = self.world.current_block_info().block_epoch;
        self.world.current_block().block_epoch(current + by);
        self
    }

    pub fn advance_timestamp(&mut self, by: u64) -> &mut Self {
        let current = self.world.current_block_info().block_timestamp;
        self.world.current_block().block_timestamp(current + by);
        self
    }

    pub fn deposit(&mut self, from: TestAddress, amount_motes: u64) {
        self.world
            .tx()
            .from(from)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .deposit()
            .egld(BigUint::from(amount_motes))
            .run();
    }

    pub fn deposit_error(&mut self, from: TestAddress, amount_motes: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .deposit()
            .egld(BigUint::from(amount_motes))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn borrow(&mut self, from: TestAddress, amount_wad: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .borrow(amount_wad)
            .run();
    }

    pub fn borrow_error(
        &mut self,
        from: TestAddress,
        amount_wad: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .borrow(amount_wad)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn approve_debt(&mut self, from: TestAddress, spender: &ManagedAddress<StaticApi>, amount_wad: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(&self.debt_token)
            .typed(debt_token::DebtTokenProxy)
            .approve(spender.clone(), amount_wad)
            .run();
    }

    pub fn repay(&mut self, from: TestAddress, amount_wad: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .repay(amount_wad)
            .run();
    }

    pub fn repay_error(
        &mut self,
        from: TestAddress,
        amount_wad: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .repay(amount_wad)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay_all(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .repay_all()
            .run();
    }

    pub fn request_withdraw(&mut self, from: TestAddress, amount_motes: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .request_withdraw(amount_motes)
            .run();
    }

    pub fn request_withdraw_error(
        &mut self,
        from: TestAddress,
        amount_motes: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .request_withdraw(amount_motes)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw_max(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .withdraw_max()
            .run();
    }

    pub fn finalize_withdraw(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .finalize_withdraw()
            .run();
    }

    pub fn finalize_withdraw_error(&mut self, from: TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .finalize_withdraw()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_validator(&mut self, key: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .set_validator(ManagedBuffer::from(key))
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .unpause_endpoint()
            .run();
    }

    pub fn collateral_of(&mut self, user: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .collateral_of(user.to_managed_address())
            .returns(multiversx_sc::types::ReturnsResult)
            .run()
    }

    pub fn debt_of(&mut self, user: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .debt_of(user.to_managed_address())
            .returns(multiversx_sc::types::ReturnsResult)
            .run()
    }

    pub fn ltv_of(&mut self, user: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .ltv_of(user.to_managed_address())
            .returns(multiversx_sc::types::ReturnsResult)
            .run()
    }

    pub fn status_of(&mut self, user: TestAddress) -> PositionStatus {
        self.world
            .query()
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .status_of(user.to_managed_address())
            .returns(multiversx_sc::types::ReturnsResult)
            .run()
    }

    pub fn get_position(&mut self, user: TestAddress) -> Position<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .get_position(user.to_managed_address())
            .returns(multiversx_sc::types::ReturnsResult)
            .run()
    }

    pub fn total_supply(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.debt_token)
            .typed(debt_token::DebtTokenProxy)
            .total_supply()
            .returns(multiversx_sc::types::ReturnsResult)
            .run()
    }

    pub fn total_collateral(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .total_collateral()
            .returns(multiversx_sc::types::ReturnsResult)
            .run()
    }

    pub fn total_debt_principal(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .total_debt_principal()
            .returns(multiversx_sc::types::ReturnsResult)
            .run()
    }

    pub fn pending_to_delegate(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault)
            .typed(vault::VaultProxy)
            .pending_to_delegate()
            .returns(multiversx_sc::types::ReturnsResult)
            .run()
    }

    /// The vault's own stake delegated to `VALIDATOR_KEY` on the mock,
    /// i.e. what the last batched `delegate` call accumulated.
    pub fn delegated_stake(&mut self) -> BigUint<StaticApi> {
        self.delegated_stake_for(VALIDATOR_KEY)
    }

    /// The vault's own stake delegated to an arbitrary validator key on the
    /// mock.
    pub fn delegated_stake_for(&mut self, validator_key: &[u8]) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.delegation_mock)
            .typed(delegation_mock::DelegationMockProxy)
            .delegated_stake(self.vault.clone(), ManagedBuffer::from(validator_key))
            .returns(multiversx_sc::types::ReturnsResult)
            .run()
    }
}
