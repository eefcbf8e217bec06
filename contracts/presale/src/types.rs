use crate::errors::Error;
use soroban_sdk::{contracttype, Address, Bytes, BytesN};

/// Percentages in `VestingConfig::initial_release` are expressed out of this.
pub const PERCENT_DENOMINATOR: i128 = 100;

/// Pricing, caps and timing of a sale. Immutable once the sale is initialized.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub token_price: i128, // Sale-token units per 1 payment-token unit
    pub soft_cap: i128,
    pub hard_cap: i128, // Ignored for fair-launch sales
    pub min_purchase: i128,
    pub max_purchase: i128, // Per transaction and per wallet
    pub start_time: u64,
    pub end_time: u64,
    pub whitelist_enabled: bool,
    pub fair_launch: bool,
}

impl SaleConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_purchase <= 0 || self.min_purchase > self.max_purchase {
            return Err(Error::InvalidConfig);
        }
        if self.soft_cap < 0 || self.start_time >= self.end_time {
            return Err(Error::InvalidConfig);
        }
        if !self.fair_launch && (self.token_price <= 0 || self.soft_cap > self.hard_cap) {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingConfig {
    pub enabled: bool,
    pub initial_release: u32, // Percent unlocked at end_time, 0..=100
    pub vesting_duration: u64, // Seconds over which the remainder unlocks linearly
}

impl VestingConfig {
    pub fn disabled() -> Self {
        VestingConfig {
            enabled: false,
            initial_release: 0,
            vesting_duration: 0,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.enabled && (self.initial_release > 100 || self.vesting_duration == 0) {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }
}

/// Bot throttling knobs. A zero span or ceiling disables that check.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct AntiBotConfig {
    pub protection_delay: u64,
    pub max_gas_price: u64,
    pub wallet_cooldown: u64,
    pub signature_required: bool,
}

/// Authority whose signatures admit buyers when `signature_required` is set.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SignerConfig {
    pub verifier: Address, // Contract implementing `SignatureVerifier`
    pub signer_key: BytesN<32>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Participant {
    pub contribution: i128,
    pub token_amount: i128, // Zero until finalization for fair-launch sales
    pub claimed_tokens: i128,
    pub last_claim_time: u64,
    pub last_purchase_time: u64,
    pub whitelisted: bool,
}

/// Aggregate accounting for the whole sale.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct SaleState {
    pub total_raised: i128,
    pub total_participants: u32,
    pub total_tokens_sold: i128,
    pub total_claimed: i128,
    pub finalized: bool,
    pub refunds_enabled: bool,
    pub paused: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PurchaseReceipt {
    pub buyer: Address,
    pub amount: i128,
    pub token_amount: i128,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FinalizationOutcome {
    pub total_raised: i128,
    pub soft_cap_reached: bool,
    pub refunds_enabled: bool,
    pub total_tokens_sold: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleStats {
    pub total_raised: i128,
    pub total_participants: u32,
    pub total_tokens_sold: i128,
    pub soft_cap_reached: bool,
    pub hard_cap_reached: bool,
    pub time_remaining: u64,
    pub protection_active: bool,
    pub protection_remaining: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ParticipantInfo {
    pub contribution: i128,
    pub token_amount: i128,
    pub claimed_tokens: i128,
    pub claimable_tokens: i128,
    pub whitelisted: bool,
    pub cooldown_end_time: u64,
}

#[contracttype]
pub enum DataKey {
    Owner,
    SaleToken,
    PaymentToken,
    Treasury,
    Config,
    Vesting,
    AntiBot,
    Signer,
    State,
    Participant(Address),
    Whitelisted(Address),
    UsedSignature(Bytes),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_price() -> SaleConfig {
        SaleConfig {
            token_price: 2,
            soft_cap: 100,
            hard_cap: 1_000,
            min_purchase: 10,
            max_purchase: 500,
            start_time: 1_000,
            end_time: 2_000,
            whitelist_enabled: false,
            fair_launch: false,
        }
    }

    #[test]
    fn test_sale_config_bounds() {
        assert_eq!(fixed_price().validate(), Ok(()));

        let mut cfg = fixed_price();
        cfg.min_purchase = 0;
        assert_eq!(cfg.validate(), Err(Error::InvalidConfig));

        let mut cfg = fixed_price();
        cfg.min_purchase = 501;
        assert_eq!(cfg.validate(), Err(Error::InvalidConfig));

        let mut cfg = fixed_price();
        cfg.end_time = cfg.start_time;
        assert_eq!(cfg.validate(), Err(Error::InvalidConfig));

        let mut cfg = fixed_price();
        cfg.soft_cap = 2_000;
        assert_eq!(cfg.validate(), Err(Error::InvalidConfig));
    }

    #[test]
    fn test_fair_launch_ignores_hard_cap_and_price() {
        let mut cfg = fixed_price();
        cfg.fair_launch = true;
        cfg.token_price = 0;
        cfg.hard_cap = 0;
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_vesting_config_bounds() {
        assert_eq!(VestingConfig::disabled().validate(), Ok(()));

        let mut v = VestingConfig {
            enabled: true,
            initial_release: 101,
            vesting_duration: 10,
        };
        assert_eq!(v.validate(), Err(Error::InvalidConfig));

        v.initial_release = 100;
        assert_eq!(v.validate(), Ok(()));

        v.vesting_duration = 0;
        assert_eq!(v.validate(), Err(Error::InvalidConfig));
    }
}
