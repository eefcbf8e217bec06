//! Admission control for purchase attempts.
//!
//! Checks run in a fixed order and the first failure is reported:
//! whitelist, protection window, gas-price ceiling, wallet cooldown,
//! signature. Only the signature check has a side effect, and it is deferred
//! to [`Admission::consume`] so the caller can commit it together with the
//! purchase.

use crate::errors::Error;
use crate::storage;
use crate::types::{AntiBotConfig, SaleConfig, SignerConfig};
use soroban_sdk::{contractclient, xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Interface of the contract that checks buyer authorizations.
#[contractclient(name = "SignatureVerifierClient")]
pub trait SignatureVerifier {
    fn verify(env: Env, signer: BytesN<32>, payload: Bytes, signature: Bytes) -> bool;
}

/// What the gate knows about the buyer besides their address.
pub struct BuyerStatus {
    pub whitelisted: bool,
    pub last_purchase_time: u64,
}

/// Proof that a buyer passed the gate.
#[must_use]
pub struct Admission {
    signature: Option<Bytes>,
}

impl Admission {
    /// Burns the authorizing signature, if one was required.
    pub fn consume(self, env: &Env) {
        if let Some(signature) = self.signature {
            storage::mark_signature_used(env, &signature);
        }
    }
}

pub fn protection_ends_at(config: &SaleConfig, anti_bot: &AntiBotConfig) -> u64 {
    config.start_time.saturating_add(anti_bot.protection_delay)
}

/// Public buyers are held back until `start_time + protection_delay`.
pub fn protection_active(config: &SaleConfig, anti_bot: &AntiBotConfig, now: u64) -> bool {
    now < protection_ends_at(config, anti_bot)
}

/// Cooldown deadline for a wallet, or zero when no cooldown applies.
pub fn cooldown_ends_at(anti_bot: &AntiBotConfig, last_purchase_time: u64) -> u64 {
    if anti_bot.wallet_cooldown == 0 || last_purchase_time == 0 {
        return 0;
    }
    last_purchase_time.saturating_add(anti_bot.wallet_cooldown)
}

/// The read-only throttles (whitelist, protection window, gas price, cooldown).
pub fn check_throttles(
    config: &SaleConfig,
    anti_bot: &AntiBotConfig,
    buyer: &BuyerStatus,
    now: u64,
    gas_price: u64,
) -> Result<(), Error> {
    if config.whitelist_enabled && !buyer.whitelisted {
        return Err(Error::NotWhitelisted);
    }
    if protection_active(config, anti_bot, now) && !buyer.whitelisted {
        return Err(Error::ProtectionActive);
    }
    if anti_bot.max_gas_price > 0 && gas_price > anti_bot.max_gas_price {
        return Err(Error::GasPriceTooHigh);
    }
    if now < cooldown_ends_at(anti_bot, buyer.last_purchase_time) {
        return Err(Error::CooldownActive);
    }
    Ok(())
}

/// Digest a signer must sign to authorize `buyer` on this sale.
pub fn signing_payload(env: &Env, buyer: &Address) -> BytesN<32> {
    let mut message = Bytes::new(env);
    message.append(&buyer.clone().to_xdr(env));
    message.append(&env.current_contract_address().to_xdr(env));
    env.crypto().sha256(&message).into()
}

fn verify_signature(
    env: &Env,
    signer: &SignerConfig,
    buyer: &Address,
    signature: &Bytes,
) -> Result<(), Error> {
    let payload = signing_payload(env, buyer);
    let verifier = SignatureVerifierClient::new(env, &signer.verifier);
    // A verifier that traps counts as a rejection.
    match verifier.try_verify(
        &signer.signer_key,
        &Bytes::from_array(env, &payload.to_array()),
        signature,
    ) {
        Ok(Ok(true)) => Ok(()),
        _ => Err(Error::SignatureInvalid),
    }
}

pub fn check_admission(
    env: &Env,
    config: &SaleConfig,
    anti_bot: &AntiBotConfig,
    buyer: &Address,
    status: &BuyerStatus,
    now: u64,
    gas_price: u64,
    signature: &Bytes,
) -> Result<Admission, Error> {
    check_throttles(config, anti_bot, status, now, gas_price)?;

    if !anti_bot.signature_required {
        return Ok(Admission { signature: None });
    }
    if signature.is_empty() {
        return Err(Error::SignatureRequired);
    }
    if storage::is_signature_used(env, signature) {
        return Err(Error::SignatureReused);
    }
    let signer = storage::get_signer(env).ok_or(Error::SignatureInvalid)?;
    verify_signature(env, &signer, buyer, signature)?;

    Ok(Admission {
        signature: Some(signature.clone()),
    })
}
