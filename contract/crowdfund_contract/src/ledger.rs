//! Append-only record of contributions.
//!
//! Records are stored one per key, `Investment(campaign, index)`, in the
//! order they were made. Each investor also has an index of the record
//! numbers they own, so summing or refunding a contribution touches only
//! that investor's entries.

use soroban_sdk::{Address, Env, Vec};

use crate::money::{self, Money, ZERO};
use crate::registry::{self, extend_persistent};
use crate::storage_types::{CampaignId, Error, Investment, PersistentKey};

pub fn investment_count(e: &Env, campaign_id: CampaignId) -> u32 {
    e.storage()
        .persistent()
        .get(&PersistentKey::InvestmentCount(campaign_id))
        .unwrap_or(0)
}

fn load(e: &Env, campaign_id: CampaignId, index: u32) -> Option<Investment> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Investment(campaign_id, index))
}

fn store(e: &Env, campaign_id: CampaignId, index: u32, investment: &Investment) {
    let key = PersistentKey::Investment(campaign_id, index);
    e.storage().persistent().set(&key, investment);
    extend_persistent(e, &key);
}

fn investor_records(e: &Env, campaign_id: CampaignId, investor: &Address) -> Vec<u32> {
    e.storage()
        .persistent()
        .get(&PersistentKey::InvestorRecords(campaign_id, investor.clone()))
        .unwrap_or(Vec::new(e))
}

/// Append a record and return its index.
pub fn append(
    e: &Env,
    campaign_id: CampaignId,
    investor: &Address,
    amount: Money,
    timestamp: u64,
) -> Result<u32, Error> {
    let index = investment_count(e, campaign_id);
    let next = index.checked_add(1).ok_or(Error::Overflow)?;

    let investment = Investment {
        campaign_id,
        investor: investor.clone(),
        amount,
        timestamp,
        refunded: false,
    };
    store(e, campaign_id, index, &investment);

    let count_key = PersistentKey::InvestmentCount(campaign_id);
    e.storage().persistent().set(&count_key, &next);
    extend_persistent(e, &count_key);

    let mut records = investor_records(e, campaign_id, investor);
    records.push_back(index);
    let records_key = PersistentKey::InvestorRecords(campaign_id, investor.clone());
    e.storage().persistent().set(&records_key, &records);
    extend_persistent(e, &records_key);

    Ok(index)
}

/// Every record for the campaign, oldest first.
pub fn all(e: &Env, campaign_id: CampaignId) -> Vec<Investment> {
    collect(e, campaign_id, 0, investment_count(e, campaign_id))
}

/// Up to `limit` records from index `start`, capped at `MAX_PAGE_SIZE`.
pub fn page(e: &Env, campaign_id: CampaignId, start: u32, limit: u32) -> Vec<Investment> {
    let end = start
        .saturating_add(registry::page_limit(limit))
        .min(investment_count(e, campaign_id));
    collect(e, campaign_id, start, end)
}

fn collect(e: &Env, campaign_id: CampaignId, start: u32, end: u32) -> Vec<Investment> {
    let mut out = Vec::new(e);
    for index in start..end {
        if let Some(investment) = load(e, campaign_id, index) {
            out.push_back(investment);
        }
    }
    out
}

/// Sum of the investor's records not yet refunded.
pub fn contribution_of(e: &Env, campaign_id: CampaignId, investor: &Address) -> Result<Money, Error> {
    let mut total = ZERO;
    for index in investor_records(e, campaign_id, investor).iter() {
        if let Some(investment) = load(e, campaign_id, index) {
            if !investment.refunded {
                total = money::checked_add(total, investment.amount)?;
            }
        }
    }
    Ok(total)
}

/// Flag every open record of the investor as refunded and return their sum.
/// Already-refunded records are skipped, so a record is refunded at most once.
pub fn mark_refunded(e: &Env, campaign_id: CampaignId, investor: &Address) -> Result<Money, Error> {
    let mut total = ZERO;
    for index in investor_records(e, campaign_id, investor).iter() {
        if let Some(mut investment) = load(e, campaign_id, index) {
            if investment.refunded {
                continue;
            }
            total = money::checked_add(total, investment.amount)?;
            investment.refunded = true;
            store(e, campaign_id, index, &investment);
        }
    }
    Ok(total)
}

/// Replay all stored records to rebuild the campaign's raised total.
/// Reads one entry per record, so it is bounded by the campaign's record count.
pub fn replay_unrefunded(e: &Env, campaign_id: CampaignId) -> Result<Money, Error> {
    sum_unrefunded(&all(e, campaign_id))
}

/// Unrefunded total of one page of records. Summing every page gives the
/// same result as [`replay_unrefunded`] without loading all records at once.
pub fn replay_unrefunded_page(
    e: &Env,
    campaign_id: CampaignId,
    start: u32,
    limit: u32,
) -> Result<Money, Error> {
    sum_unrefunded(&page(e, campaign_id, start, limit))
}

fn sum_unrefunded(records: &Vec<Investment>) -> Result<Money, Error> {
    let mut total = ZERO;
    for investment in records.iter() {
        if investment.amount <= ZERO {
            return Err(Error::LedgerMismatch);
        }
        if !investment.refunded {
            total = money::checked_add(total, investment.amount)?;
        }
    }
    Ok(total)
}
