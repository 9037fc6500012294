#![no_std]

use common_constants::{BPS_DIVISOR, LTV_MAX_BPS, MOTES_TO_WAD_FACTOR};
use common_errors::ERROR_OVERFLOW;

multiversx_sc::imports!();

/// A raw amount of BASE, in motes (9 implied decimals). Distinct from [`Wad`]
/// on purpose — see spec §9 "Mixed precision": every arithmetic site must
/// either operate on two `Motes` or two `Wad`, never mix them implicitly.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Motes<M: ManagedTypeApi>(pub BigUint<M>);

/// A raw amount of DEBT, in wad (18 implied decimals).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Wad<M: ManagedTypeApi>(pub BigUint<M>);

impl<M: ManagedTypeApi> Motes<M> {
    pub fn zero() -> Self {
        Motes(BigUint::zero())
    }

    pub fn into_raw(self) -> BigUint<M> {
        self.0
    }
}

impl<M: ManagedTypeApi> Wad<M> {
    pub fn zero() -> Self {
        Wad(BigUint::zero())
    }

    pub fn into_raw(self) -> BigUint<M> {
        self.0
    }
}

/// `FixedPoint`: pure arithmetic over motes and wad, with an explicit
/// rounding direction at every conversion site (spec §4.1).
#[multiversx_sc::module]
pub trait FixedPointModule {
    /// Ceiling division for non-negative `BigUint` operands (`b` must be non-zero).
    #[inline]
    fn ceil_div(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let (quotient, remainder) = (a / b, a % b);
        if remainder == BigUint::zero() {
            quotient
        } else {
            quotient + BigUint::from(1u32)
        }
    }

    /// The largest representable wad value (`2^256 - 1`), used as the
    /// overflow bound for `motes_to_wad`. `BigUint` is arbitrary-precision in
    /// this framework, so this is an explicit domain cap rather than a
    /// hardware limit — see DESIGN.md.
    fn max_wad(&self) -> BigUint {
        BigUint::from(2u32).pow(256) - BigUint::from(1u32)
    }

    /// The largest representable motes value (`2^512 - 1`).
    fn max_motes(&self) -> BigUint {
        BigUint::from(2u32).pow(512) - BigUint::from(1u32)
    }

    /// Exact multiplication by `10^9`. Fails with `Overflow` if the result
    /// exceeds the wad domain.
    fn motes_to_wad(&self, motes: &Motes<Self::Api>) -> Wad<Self::Api> {
        let raw = &motes.0 * MOTES_TO_WAD_FACTOR;
        require!(raw <= self.max_wad(), ERROR_OVERFLOW);
        Wad(raw)
    }

    /// Integer division by `10^9`, truncating toward zero. Protocol-favorable
    /// when returning collateral to a user.
    fn wad_to_motes(&self, wad: &Wad<Self::Api>) -> Motes<Self::Api> {
        Motes(&wad.0 / MOTES_TO_WAD_FACTOR)
    }

    /// `motes_to_wad(collateral) * LTV_MAX_BPS / BPS_DIVISOR`, truncated.
    fn max_borrow_wad(&self, collateral_motes: &Motes<Self::Api>) -> Wad<Self::Api> {
        let collateral_wad = self.motes_to_wad(collateral_motes);
        Wad(collateral_wad.0 * LTV_MAX_BPS / BPS_DIVISOR)
    }

    /// `ceil(debt_wad * BPS_DIVISOR / LTV_MAX_BPS)` in wad, then ceiling
    /// division to motes. Protocol-favorable when checking post-withdraw LTV
    /// (never under-estimates the collateral a debt position requires).
    fn min_collateral_for_debt(&self, debt_wad: &Wad<Self::Api>) -> Motes<Self::Api> {
        let wad_needed = self.ceil_div(
            &(&debt_wad.0 * BPS_DIVISOR),
            &BigUint::from(LTV_MAX_BPS),
        );
        Motes(self.ceil_div(&wad_needed, &BigUint::from(MOTES_TO_WAD_FACTOR)))
    }

    /// `debt_wad * BPS_DIVISOR <= motes_to_wad(collateral_motes) * LTV_MAX_BPS` (spec I1).
    fn is_within_ltv(&self, debt_wad: &Wad<Self::Api>, collateral_motes: &Motes<Self::Api>) -> bool {
        let collateral_wad = self.motes_to_wad(collateral_motes);
        &debt_wad.0 * BPS_DIVISOR <= collateral_wad.0 * LTV_MAX_BPS
    }

    /// Current LTV in basis points (for `ltv_of`), `0` when there is no debt
    /// and no collateral.
    fn ltv_bps(&self, debt_wad: &Wad<Self::Api>, collateral_motes: &Motes<Self::Api>) -> BigUint {
        if collateral_motes.0 == BigUint::zero() {
            return BigUint::zero();
        }
        let collateral_wad = self.motes_to_wad(collateral_motes);
        &debt_wad.0 * BPS_DIVISOR / collateral_wad.0
    }
}
