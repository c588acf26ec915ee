use soroban_sdk::{token, Address, Env};

use crate::money::{self, Money, ZERO};
use crate::registry::{self, extend_persistent};
use crate::storage_types::{Campaign, CampaignId, Error, PersistentKey};

pub fn balance(e: &Env, campaign_id: CampaignId) -> Money {
    e.storage()
        .persistent()
        .get(&PersistentKey::Escrowed(campaign_id))
        .unwrap_or(ZERO)
}

fn set_balance(e: &Env, campaign_id: CampaignId, amount: Money) {
    let key = PersistentKey::Escrowed(campaign_id);
    e.storage().persistent().set(&key, &amount);
    extend_persistent(e, &key);
}

/// Pull `amount` from the investor into the contract's custody.
pub fn deposit(e: &Env, campaign_id: CampaignId, from: &Address, amount: Money) -> Result<Money, Error> {
    let amount = money::ensure_positive(amount)?;
    let updated = money::checked_add(balance(e, campaign_id), amount)?;

    let token_client = token::Client::new(e, &registry::token(e)?);
    token_client.transfer(from, &e.current_contract_address(), &amount);

    set_balance(e, campaign_id, updated);
    Ok(updated)
}

/// Pay out part of the custodied balance. Never pays more than is held.
pub fn withdraw(e: &Env, campaign_id: CampaignId, to: &Address, amount: Money) -> Result<Money, Error> {
    let amount = money::ensure_positive(amount)?;
    let remaining = money::checked_sub(balance(e, campaign_id), amount)?;

    let token_client = token::Client::new(e, &registry::token(e)?);
    token_client.transfer(&e.current_contract_address(), to, &amount);

    set_balance(e, campaign_id, remaining);
    Ok(remaining)
}

/// Release the whole custodied balance to the entrepreneur.
pub fn release_all(e: &Env, campaign: &Campaign) -> Result<Money, Error> {
    let held = balance(e, campaign.id);
    if held != campaign.amount_raised {
        return Err(Error::LedgerMismatch);
    }
    if held > ZERO {
        withdraw(e, campaign.id, &campaign.entrepreneur, held)?;
    }
    Ok(held)
}

/// Custody must match the unrefunded contributions until the campaign is
/// claimed, and be empty afterwards.
pub fn check_custody(e: &Env, campaign: &Campaign) -> Result<(), Error> {
    let held = balance(e, campaign.id);
    let expected = if campaign.is_claimed { ZERO } else { campaign.amount_raised };
    if held != expected {
        return Err(Error::LedgerMismatch);
    }
    Ok(())
}
