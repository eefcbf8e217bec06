use crate::errors::Error;
use soroban_sdk::{token, Address, Env};

/// Value-moving collaborator of the sale. The ledger never talks to a token
/// contract directly.
pub trait Treasury {
    fn transfer(&self, from: &Address, to: &Address, amount: i128) -> Result<(), Error>;
    fn balance_of(&self, holder: &Address) -> i128;
}

/// `Treasury` backed by any SEP-41 token contract.
pub struct TokenTreasury<'a> {
    client: token::Client<'a>,
}

impl<'a> TokenTreasury<'a> {
    pub fn new(env: &Env, token: &Address) -> Self {
        TokenTreasury {
            client: token::Client::new(env, token),
        }
    }
}

impl Treasury for TokenTreasury<'_> {
    fn transfer(&self, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        match self.client.try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::TransferFailed),
        }
    }

    fn balance_of(&self, holder: &Address) -> i128 {
        self.client.balance(holder)
    }
}
