use crate::admission::{self, BuyerStatus};
use crate::errors::Error;
use crate::events;
use crate::ledger;
use crate::storage::{self, *};
use crate::treasury::{TokenTreasury, Treasury};
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Bytes, BytesN, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Token presale with soft/hard caps, fair launch, vesting and anti-bot admission"
);

#[contract]
pub struct PresaleContract;

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != get_owner(env)? {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

fn sale_treasury(env: &Env) -> Result<TokenTreasury<'_>, Error> {
    Ok(TokenTreasury::new(env, &get_sale_token(env)?))
}

fn payment_treasury(env: &Env) -> Result<TokenTreasury<'_>, Error> {
    Ok(TokenTreasury::new(env, &get_payment_token(env)?))
}

#[contractimpl]
impl PresaleContract {
    /// Initialize the sale. Every configuration is validated here, not on first use.
    pub fn initialize(
        env: Env,
        owner: Address,
        sale_token: Address,
        payment_token: Address,
        treasury: Address,
        config: SaleConfig,
        vesting: VestingConfig,
        anti_bot: AntiBotConfig,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        config.validate()?;
        vesting.validate()?;
        // Escrow and inventory must be separate balances.
        if sale_token == payment_token {
            return Err(Error::InvalidConfig);
        }

        set_owner(&env, &owner);
        set_sale_token(&env, &sale_token);
        set_payment_token(&env, &payment_token);
        set_treasury(&env, &treasury);
        set_config(&env, &config);
        set_vesting(&env, &vesting);
        set_anti_bot(&env, &anti_bot);
        set_state(&env, &SaleState::default());
        bump_instance(&env);

        events::sale_initialized(&env, &owner, &config);
        Ok(())
    }

    /// Add or remove addresses from the whitelist.
    pub fn update_whitelist(
        env: Env,
        caller: Address,
        addresses: Vec<Address>,
        status: bool,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        for address in addresses.iter() {
            storage::set_whitelisted(&env, &address, status);
            if let Some(mut participant) = get_participant(&env, &address) {
                participant.whitelisted = status;
                set_participant(&env, &address, &participant);
            }
        }
        bump_instance(&env);

        events::whitelist_updated(&env, &addresses, status);
        Ok(())
    }

    pub fn update_anti_bot_config(
        env: Env,
        caller: Address,
        protection_delay: u64,
        max_gas_price: u64,
        wallet_cooldown: u64,
        signature_required: bool,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        let anti_bot = AntiBotConfig {
            protection_delay,
            max_gas_price,
            wallet_cooldown,
            signature_required,
        };
        set_anti_bot(&env, &anti_bot);
        bump_instance(&env);

        events::anti_bot_updated(&env, &anti_bot);
        Ok(())
    }

    /// Configure the verifier contract and the key whose signatures admit buyers.
    pub fn set_signer(
        env: Env,
        caller: Address,
        verifier: Address,
        signer_key: BytesN<32>,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        storage::set_signer(
            &env,
            &SignerConfig {
                verifier: verifier.clone(),
                signer_key: signer_key.clone(),
            },
        );
        bump_instance(&env);

        events::signer_updated(&env, &verifier, &signer_key);
        Ok(())
    }

    /// Halt or resume purchases. Claims and refunds are unaffected.
    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        let mut state = get_state(&env)?;
        state.paused = paused;
        set_state(&env, &state);
        bump_instance(&env);

        events::pause_changed(&env, paused);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        set_owner(&env, &new_owner);
        bump_instance(&env);

        events::ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }

    /// Buy into the sale with `amount` of the payment token.
    ///
    /// `signature` may be empty when the sale does not require one.
    pub fn buy(
        env: Env,
        buyer: Address,
        amount: i128,
        gas_price: u64,
        signature: Bytes,
    ) -> Result<PurchaseReceipt, Error> {
        buyer.require_auth();

        let config = get_config(&env)?;
        let anti_bot = get_anti_bot(&env)?;
        let mut state = get_state(&env)?;
        if state.paused {
            return Err(Error::SalePaused);
        }

        let now = env.ledger().timestamp();
        let whitelisted = storage::is_whitelisted(&env, &buyer);
        let mut participant = get_participant(&env, &buyer).unwrap_or_default();
        participant.whitelisted = whitelisted;

        let status = BuyerStatus {
            whitelisted,
            last_purchase_time: participant.last_purchase_time,
        };
        let admitted = admission::check_admission(
            &env, &config, &anti_bot, &buyer, &status, now, gas_price, &signature,
        )?;

        let token_amount = ledger::record_purchase(&config, &mut state, &mut participant, amount, now)?;

        admitted.consume(&env);
        set_participant(&env, &buyer, &participant);
        set_state(&env, &state);
        bump_instance(&env);

        payment_treasury(&env)?.transfer(&buyer, &env.current_contract_address(), amount)?;

        let receipt = PurchaseReceipt {
            buyer,
            amount,
            token_amount,
            timestamp: now,
        };
        events::purchase(&env, &receipt);
        Ok(receipt)
    }

    /// Close the sale. Below the soft cap this opens refunds; otherwise it
    /// unlocks claims (and, for fair launch, fixes the token pool).
    pub fn finalize(env: Env, caller: Address) -> Result<FinalizationOutcome, Error> {
        require_owner(&env, &caller)?;

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        let balance = sale_treasury(&env)?.balance_of(&env.current_contract_address());

        let outcome = ledger::finalize(&config, &mut state, balance)?;
        set_state(&env, &state);
        bump_instance(&env);

        events::finalized(&env, &outcome);
        Ok(outcome)
    }

    /// Claim every sale token unlocked so far.
    pub fn claim(env: Env, buyer: Address) -> Result<i128, Error> {
        buyer.require_auth();

        let config = get_config(&env)?;
        let vesting = get_vesting(&env)?;
        let mut state = get_state(&env)?;
        let mut participant = get_participant(&env, &buyer).unwrap_or_default();

        let sale_token = sale_treasury(&env)?;
        let contract = env.current_contract_address();
        let now = env.ledger().timestamp();

        let amount = ledger::claim(
            &config,
            &vesting,
            &mut state,
            &mut participant,
            sale_token.balance_of(&contract),
            now,
        )?;

        set_participant(&env, &buyer, &participant);
        set_state(&env, &state);
        bump_instance(&env);

        sale_token.transfer(&contract, &buyer, amount)?;

        events::tokens_claimed(&env, &buyer, amount, now);
        Ok(amount)
    }

    /// Return a contribution after a sale that missed its soft cap.
    pub fn claim_refund(env: Env, buyer: Address) -> Result<i128, Error> {
        buyer.require_auth();

        let config = get_config(&env)?;
        let state = get_state(&env)?;
        let mut participant = get_participant(&env, &buyer).unwrap_or_default();

        let amount = ledger::claim_refund(&config, &state, &mut participant)?;

        set_participant(&env, &buyer, &participant);
        bump_instance(&env);

        payment_treasury(&env)?.transfer(&env.current_contract_address(), &buyer, amount)?;

        events::refunded(&env, &buyer, amount);
        Ok(amount)
    }

    /// Move the raised funds out of escrow after a successful sale.
    pub fn withdraw_raised(env: Env, caller: Address) -> Result<i128, Error> {
        require_owner(&env, &caller)?;

        let config = get_config(&env)?;
        let state = get_state(&env)?;
        ledger::ensure_successful(&config, &state)?;

        let payment_token = payment_treasury(&env)?;
        let contract = env.current_contract_address();
        let amount = payment_token.balance_of(&contract);
        if amount <= 0 {
            return Err(Error::NothingToWithdraw);
        }

        let treasury = get_treasury(&env)?;
        payment_token.transfer(&contract, &treasury, amount)?;

        events::raised_withdrawn(&env, &treasury, amount);
        Ok(amount)
    }

    /// Recover sale tokens that no participant is owed.
    pub fn withdraw_unsold_tokens(env: Env, caller: Address) -> Result<i128, Error> {
        require_owner(&env, &caller)?;

        let config = get_config(&env)?;
        let state = get_state(&env)?;
        let sale_token = sale_treasury(&env)?;
        let contract = env.current_contract_address();

        let amount = ledger::unsold_tokens(&config, &state, sale_token.balance_of(&contract))?;

        let treasury = get_treasury(&env)?;
        sale_token.transfer(&contract, &treasury, amount)?;

        events::unsold_withdrawn(&env, &treasury, amount);
        Ok(amount)
    }

    pub fn get_claimable_amount(env: Env, buyer: Address) -> Result<i128, Error> {
        let config = get_config(&env)?;
        let vesting = get_vesting(&env)?;
        let state = get_state(&env)?;
        let participant = get_participant(&env, &buyer).unwrap_or_default();
        let balance = sale_treasury(&env)?.balance_of(&env.current_contract_address());

        ledger::claimable(
            &config,
            &vesting,
            &state,
            &participant,
            balance,
            env.ledger().timestamp(),
        )
    }

    pub fn get_sale_stats(env: Env) -> Result<SaleStats, Error> {
        let config = get_config(&env)?;
        let anti_bot = get_anti_bot(&env)?;
        let state = get_state(&env)?;
        let now = env.ledger().timestamp();

        let protection_active = admission::protection_active(&config, &anti_bot, now);
        let protection_remaining = if protection_active {
            admission::protection_ends_at(&config, &anti_bot) - now
        } else {
            0
        };

        Ok(SaleStats {
            total_raised: state.total_raised,
            total_participants: state.total_participants,
            total_tokens_sold: state.total_tokens_sold,
            soft_cap_reached: state.total_raised >= config.soft_cap,
            hard_cap_reached: !config.fair_launch && state.total_raised >= config.hard_cap,
            time_remaining: config.end_time.saturating_sub(now),
            protection_active,
            protection_remaining,
        })
    }

    pub fn get_participant_info(env: Env, buyer: Address) -> Result<ParticipantInfo, Error> {
        let config = get_config(&env)?;
        let vesting = get_vesting(&env)?;
        let anti_bot = get_anti_bot(&env)?;
        let state = get_state(&env)?;
        let participant = get_participant(&env, &buyer).unwrap_or_default();
        let balance = sale_treasury(&env)?.balance_of(&env.current_contract_address());
        let now = env.ledger().timestamp();

        // Fair-launch entitlements only exist once the pool is known.
        let token_amount = if config.fair_launch && ledger::ensure_successful(&config, &state).is_ok()
        {
            ledger::entitlement(&config, &state, &participant, balance)?
        } else {
            participant.token_amount
        };

        Ok(ParticipantInfo {
            contribution: participant.contribution,
            token_amount,
            claimed_tokens: participant.claimed_tokens,
            claimable_tokens: ledger::claimable(
                &config,
                &vesting,
                &state,
                &participant,
                balance,
                now,
            )?,
            whitelisted: storage::is_whitelisted(&env, &buyer),
            cooldown_end_time: admission::cooldown_ends_at(
                &anti_bot,
                participant.last_purchase_time,
            ),
        })
    }

    pub fn get_participant(env: Env, buyer: Address) -> Option<Participant> {
        get_participant(&env, &buyer)
    }

    pub fn get_sale_state(env: Env) -> Result<SaleState, Error> {
        get_state(&env)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn get_vesting_config(env: Env) -> Result<VestingConfig, Error> {
        get_vesting(&env)
    }

    pub fn get_anti_bot_config(env: Env) -> Result<AntiBotConfig, Error> {
        get_anti_bot(&env)
    }

    pub fn get_signer(env: Env) -> Option<SignerConfig> {
        storage::get_signer(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn is_whitelisted(env: Env, address: Address) -> bool {
        storage::is_whitelisted(&env, &address)
    }

    pub fn is_signature_used(env: Env, signature: Bytes) -> bool {
        storage::is_signature_used(&env, &signature)
    }

    /// Digest the configured signer signs to authorize `buyer`.
    pub fn signing_payload(env: Env, buyer: Address) -> BytesN<32> {
        admission::signing_payload(&env, &buyer)
    }
}
