use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Bytes, Env};

const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(
        key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_sale_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::SaleToken)
        .ok_or(Error::NotInitialized)
}

pub fn set_sale_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::SaleToken, token);
}

pub fn get_payment_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(Error::NotInitialized)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_treasury(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Treasury)
        .ok_or(Error::NotInitialized)
}

pub fn set_treasury(env: &Env, treasury: &Address) {
    env.storage().instance().set(&DataKey::Treasury, treasury);
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_vesting(env: &Env) -> Result<VestingConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Vesting)
        .ok_or(Error::NotInitialized)
}

pub fn set_vesting(env: &Env, vesting: &VestingConfig) {
    env.storage().instance().set(&DataKey::Vesting, vesting);
}

pub fn get_anti_bot(env: &Env) -> Result<AntiBotConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::AntiBot)
        .ok_or(Error::NotInitialized)
}

pub fn set_anti_bot(env: &Env, anti_bot: &AntiBotConfig) {
    env.storage().instance().set(&DataKey::AntiBot, anti_bot);
}

pub fn get_signer(env: &Env) -> Option<SignerConfig> {
    env.storage().instance().get(&DataKey::Signer)
}

pub fn set_signer(env: &Env, signer: &SignerConfig) {
    env.storage().instance().set(&DataKey::Signer, signer);
}

pub fn get_state(env: &Env) -> Result<SaleState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(Error::NotInitialized)
}

pub fn set_state(env: &Env, state: &SaleState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_participant(env: &Env, user: &Address) -> Option<Participant> {
    env.storage()
        .persistent()
        .get(&DataKey::Participant(user.clone()))
}

pub fn set_participant(env: &Env, user: &Address, participant: &Participant) {
    let key = DataKey::Participant(user.clone());
    env.storage().persistent().set(&key, participant);
    bump_persistent(env, &key);
}

pub fn is_whitelisted(env: &Env, user: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelisted(user.clone()))
        .unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, user: &Address, status: bool) {
    let key = DataKey::Whitelisted(user.clone());
    env.storage().persistent().set(&key, &status);
    bump_persistent(env, &key);
}

pub fn is_signature_used(env: &Env, signature: &Bytes) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::UsedSignature(signature.clone()))
}

pub fn mark_signature_used(env: &Env, signature: &Bytes) {
    let key = DataKey::UsedSignature(signature.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}
