use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::{
    Campaign, CampaignId, DataKey, Error, PersistentKey, MAX_PAGE_SIZE, TTL_INSTANCE,
    TTL_PERSISTENT, TTL_THRESHOLD,
};

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_PERSISTENT);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn admin(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn token(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn is_paused(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn check_paused(e: &Env) -> Result<(), Error> {
    if is_paused(e) {
        return Err(Error::ContractPaused);
    }
    Ok(())
}

pub fn campaign_count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Reserve the next dense id. Ids start at 0 and are never reused.
pub fn next_campaign_id(e: &Env) -> Result<CampaignId, Error> {
    let id = campaign_count(e);
    let next = id.checked_add(1).ok_or(Error::Overflow)?;
    e.storage().instance().set(&DataKey::CampaignCount, &next);
    Ok(id)
}

pub fn load_campaign(e: &Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(Error::NotFound)
}

pub fn save_campaign(e: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

pub fn page_limit(limit: u32) -> u32 {
    limit.min(MAX_PAGE_SIZE)
}

/// All campaigns in creation order. Cost grows with the campaign count;
/// use [`list_campaigns_page`] once that exceeds a single invocation's budget.
pub fn list_campaigns(e: &Env) -> Vec<Campaign> {
    collect_campaigns(e, 0, campaign_count(e))
}

/// Up to `limit` campaigns starting at id `start`, capped at `MAX_PAGE_SIZE`.
/// A start at or past the end gives an empty page.
pub fn list_campaigns_page(e: &Env, start: CampaignId, limit: u32) -> Vec<Campaign> {
    let end = start
        .saturating_add(page_limit(limit) as u64)
        .min(campaign_count(e));
    collect_campaigns(e, start, end)
}

fn collect_campaigns(e: &Env, start: CampaignId, end: CampaignId) -> Vec<Campaign> {
    let mut out = Vec::new(e);
    for id in start..end {
        if let Ok(campaign) = load_campaign(e, id) {
            out.push_back(campaign);
        }
    }
    out
}
