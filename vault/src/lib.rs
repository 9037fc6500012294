#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod delegation;
pub mod events;
pub mod interest;
pub mod positions;
pub mod proxies;
pub mod storage;
pub mod views;

use common_errors::ERROR_INVALID_VALIDATOR_KEY;

use crate::proxies::debt_token_proxy;

/// The Magni V2 single-asset collateral/debt vault (SPEC_FULL §§3-4).
///
/// Composes `storage` (persisted state), `events` (the external projection),
/// `config` (owner controls + pause), `interest` (accrual), `delegation`
/// (the pooled-delegation adapter), `positions` (deposit/borrow/repay/withdraw)
/// and `views` (read-only projections), plus the framework's own
/// `PauseModule` and the vault's `FixedPointModule` arithmetic.
#[multiversx_sc::contract]
pub trait Vault:
    storage::Storage
    + events::EventsModule
    + config::ConfigModule
    + interest::InterestAccrualModule
    + delegation::DelegationAdapterModule
    + positions::PositionsModule
    + views::ViewsModule
    + common_math::FixedPointModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Deploys a fresh DEBT token instance from `debt_token_template` with
    /// this vault as its fixed minter, avoiding the circular bootstrap that
    /// two mutually-immutable addresses would otherwise require (spec §3;
    /// grounded on `lending_pool::factory::create_pool`'s
    /// deploy-from-template pattern). `delegation_manager` and
    /// `validator_key` are fixed for the lifetime of the contract; the
    /// validator may later change via `set_validator`.
    #[init]
    fn init(
        &self,
        debt_token_template: ManagedAddress,
        delegation_manager: ManagedAddress,
        validator_key: ManagedBuffer,
    ) {
        require!(!validator_key.is_empty(), ERROR_INVALID_VALIDATOR_KEY);

        let vault_address = self.blockchain().get_sc_address();
        let debt_token = self
            .tx()
            .typed(debt_token_proxy::DebtTokenProxy)
            .init(vault_address)
            .from_source(debt_token_template)
            .code_metadata(CodeMetadata::UPGRADEABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.debt_token_address().set(&debt_token);
        self.delegation_manager_address().set(&delegation_manager);
        self.validator().set(&validator_key);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
