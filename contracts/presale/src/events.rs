use crate::types::{AntiBotConfig, FinalizationOutcome, PurchaseReceipt, SaleConfig};
use soroban_sdk::{symbol_short, Address, BytesN, Env, Vec};

pub fn sale_initialized(env: &Env, owner: &Address, config: &SaleConfig) {
    env.events().publish(
        (symbol_short!("init"), owner.clone()),
        (
            config.soft_cap,
            config.hard_cap,
            config.start_time,
            config.end_time,
            config.fair_launch,
        ),
    );
}

pub fn purchase(env: &Env, receipt: &PurchaseReceipt) {
    env.events().publish(
        (symbol_short!("purchase"), receipt.buyer.clone()),
        (receipt.amount, receipt.token_amount, receipt.timestamp),
    );
}

pub fn finalized(env: &Env, outcome: &FinalizationOutcome) {
    env.events().publish(
        (symbol_short!("finalize"),),
        (
            outcome.total_raised,
            outcome.soft_cap_reached,
            outcome.total_tokens_sold,
        ),
    );
}

pub fn tokens_claimed(env: &Env, buyer: &Address, amount: i128, timestamp: u64) {
    env.events().publish(
        (symbol_short!("claim"), buyer.clone()),
        (amount, timestamp),
    );
}

pub fn refunded(env: &Env, buyer: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("refund"), buyer.clone()), amount);
}

pub fn whitelist_updated(env: &Env, addresses: &Vec<Address>, status: bool) {
    env.events().publish(
        (symbol_short!("whitelist"),),
        (addresses.len(), status),
    );
}

pub fn anti_bot_updated(env: &Env, config: &AntiBotConfig) {
    env.events().publish(
        (symbol_short!("antibot"),),
        (
            config.protection_delay,
            config.max_gas_price,
            config.wallet_cooldown,
            config.signature_required,
        ),
    );
}

pub fn signer_updated(env: &Env, verifier: &Address, signer_key: &BytesN<32>) {
    env.events().publish(
        (symbol_short!("signer"),),
        (verifier.clone(), signer_key.clone()),
    );
}

pub fn pause_changed(env: &Env, paused: bool) {
    env.events().publish((symbol_short!("paused"),), paused);
}

pub fn ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("owner"),),
        (previous.clone(), new_owner.clone()),
    );
}

pub fn raised_withdrawn(env: &Env, treasury: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("withdraw"), treasury.clone()), amount);
}

pub fn unsold_withdrawn(env: &Env, treasury: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("unsold"), treasury.clone()), amount);
}
