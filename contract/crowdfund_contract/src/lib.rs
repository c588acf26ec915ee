#![no_std]


mod escrow;
mod events;
mod ledger;
mod money;
mod registry;
mod status;
mod storage_types;

pub use status::status;
pub use storage_types::{
    Campaign, CampaignStatus, CampaignView, Error, Investment, MAX_PAGE_SIZE,
};

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};
use storage_types::DataKey;

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Bind this instance to its admin and the token it escrows.
    pub fn initialize(e: Env, admin: Address, token: Address) -> Result<(), Error> {
        if registry::is_initialized(&e) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage().instance().set(&DataKey::Paused, &false);
        e.storage().instance().set(&DataKey::CampaignCount, &0u64);
        registry::extend_instance(&e);

        log!(&e, "crowdfund initialized", admin, token);
        Ok(())
    }

    /// Register a new campaign and return its id.
    pub fn create_campaign(
        e: Env,
        entrepreneur: Address,
        title: String,
        description: String,
        funding_goal: i128,
        duration_seconds: u64,
    ) -> Result<u64, Error> {
        entrepreneur.require_auth();
        registry::token(&e)?;
        registry::check_paused(&e)?;

        let funding_goal = money::ensure_positive(funding_goal)?;
        if duration_seconds == 0 {
            return Err(Error::InvalidDuration);
        }
        if title.len() == 0 || description.len() == 0 {
            return Err(Error::InvalidInput);
        }

        let start_time = e.ledger().timestamp();
        let deadline = start_time
            .checked_add(duration_seconds)
            .ok_or(Error::Overflow)?;
        let campaign_id = registry::next_campaign_id(&e)?;

        let campaign = Campaign {
            id: campaign_id,
            entrepreneur: entrepreneur.clone(),
            title,
            description,
            funding_goal,
            amount_raised: money::ZERO,
            start_time,
            deadline,
            is_funded: false,
            is_claimed: false,
        };
        registry::save_campaign(&e, &campaign);
        registry::extend_instance(&e);

        log!(&e, "campaign created", campaign_id, funding_goal, deadline);
        events::emit_campaign_created(
            &e,
            events::CampaignCreatedEvent {
                campaign_id,
                entrepreneur,
                funding_goal,
                deadline,
            },
        );

        Ok(campaign_id)
    }

    /// Contribute to an active campaign. Returns the new amount raised.
    ///
    /// Reaching the goal early sets `is_funded` but does not close the
    /// campaign; contributions are accepted until the deadline.
    pub fn invest(
        e: Env,
        campaign_id: u64,
        investor: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        investor.require_auth();
        registry::check_paused(&e)?;

        let mut campaign = registry::load_campaign(&e, campaign_id)?;
        let amount = money::ensure_positive(amount)?;
        let now = e.ledger().timestamp();
        if !status::is_active(&campaign, now) {
            return Err(Error::CampaignClosed);
        }
        let amount_raised = money::checked_add(campaign.amount_raised, amount)?;

        escrow::deposit(&e, campaign_id, &investor, amount)?;
        ledger::append(&e, campaign_id, &investor, amount, now)?;

        campaign.amount_raised = amount_raised;
        campaign.is_funded = money::reaches(amount_raised, campaign.funding_goal);
        registry::save_campaign(&e, &campaign);

        log!(&e, "invested", campaign_id, investor, amount);
        events::emit_invested(
            &e,
            events::InvestedEvent {
                campaign_id,
                investor,
                amount,
                amount_raised,
                is_funded: campaign.is_funded,
            },
        );

        Ok(amount_raised)
    }

    /// Entrepreneur's one-time withdrawal of a completed campaign's escrow.
    pub fn claim_funds(e: Env, campaign_id: u64, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let mut campaign = registry::load_campaign(&e, campaign_id)?;
        if caller != campaign.entrepreneur {
            return Err(Error::Unauthorized);
        }
        if status::status(&campaign, e.ledger().timestamp()) != CampaignStatus::Completed {
            return Err(Error::InvalidState);
        }
        if campaign.is_claimed {
            return Err(Error::DoubleClaim);
        }

        let amount = escrow::release_all(&e, &campaign)?;
        campaign.is_claimed = true;
        registry::save_campaign(&e, &campaign);

        log!(&e, "funds claimed", campaign_id, amount);
        events::emit_funds_claimed(
            &e,
            events::FundsClaimedEvent {
                campaign_id,
                entrepreneur: caller,
                amount,
            },
        );

        Ok(amount)
    }

    /// Return an investor's whole open contribution to a failed campaign.
    pub fn request_refund(
        e: Env,
        campaign_id: u64,
        investor: Address,
    ) -> Result<i128, Error> {
        investor.require_auth();

        let mut campaign = registry::load_campaign(&e, campaign_id)?;
        if status::status(&campaign, e.ledger().timestamp()) != CampaignStatus::Failed {
            return Err(Error::InvalidState);
        }
        let owed = ledger::contribution_of(&e, campaign_id, &investor)?;
        if owed == money::ZERO {
            return Err(Error::NothingToRefund);
        }
        let amount_raised = money::checked_sub(campaign.amount_raised, owed)?;

        let refunded = ledger::mark_refunded(&e, campaign_id, &investor)?;
        if refunded != owed {
            return Err(Error::LedgerMismatch);
        }
        escrow::withdraw(&e, campaign_id, &investor, refunded)?;

        campaign.amount_raised = amount_raised;
        campaign.is_funded = money::reaches(amount_raised, campaign.funding_goal);
        registry::save_campaign(&e, &campaign);

        log!(&e, "refunded", campaign_id, investor, refunded);
        events::emit_refunded(
            &e,
            events::RefundedEvent {
                campaign_id,
                investor,
                amount: refunded,
                amount_raised,
            },
        );

        Ok(refunded)
    }

    /// Stop new campaigns and new investments. Claims and refunds stay open.
    pub fn pause(e: Env, admin: Address) -> Result<(), Error> {
        Self::set_paused(&e, admin, true)
    }

    pub fn unpause(e: Env, admin: Address) -> Result<(), Error> {
        Self::set_paused(&e, admin, false)
    }

    /// View functions
    pub fn get_campaign(e: Env, campaign_id: u64) -> Result<Campaign, Error> {
        registry::load_campaign(&e, campaign_id)
    }

    pub fn get_campaign_details(e: Env, campaign_id: u64) -> Result<CampaignView, Error> {
        let campaign = registry::load_campaign(&e, campaign_id)?;
        let status = status::status(&campaign, e.ledger().timestamp());
        Ok(CampaignView {
            campaign,
            status,
            is_active: status == CampaignStatus::Active,
        })
    }

    pub fn get_campaign_status(e: Env, campaign_id: u64) -> Result<CampaignStatus, Error> {
        let campaign = registry::load_campaign(&e, campaign_id)?;
        Ok(status::status(&campaign, e.ledger().timestamp()))
    }

    /// Every campaign in creation order. Cost grows with the number of
    /// campaigns; large registries should page with `list_campaigns_page`.
    pub fn list_campaigns(e: Env) -> Vec<Campaign> {
        registry::list_campaigns(&e)
    }

    /// At most `MAX_PAGE_SIZE` campaigns from id `start`. Empty past the end.
    pub fn list_campaigns_page(e: Env, start: u64, limit: u32) -> Vec<Campaign> {
        registry::list_campaigns_page(&e, start, limit)
    }

    pub fn get_campaign_count(e: Env) -> u64 {
        registry::campaign_count(&e)
    }

    pub fn get_investments(e: Env, campaign_id: u64) -> Result<Vec<Investment>, Error> {
        registry::load_campaign(&e, campaign_id)?;
        Ok(ledger::all(&e, campaign_id))
    }

    pub fn get_investments_page(
        e: Env,
        campaign_id: u64,
        start: u32,
        limit: u32,
    ) -> Result<Vec<Investment>, Error> {
        registry::load_campaign(&e, campaign_id)?;
        Ok(ledger::page(&e, campaign_id, start, limit))
    }

    pub fn get_investor_contribution(
        e: Env,
        campaign_id: u64,
        investor: Address,
    ) -> Result<i128, Error> {
        registry::load_campaign(&e, campaign_id)?;
        ledger::contribution_of(&e, campaign_id, &investor)
    }

    pub fn get_escrow_balance(e: Env, campaign_id: u64) -> Result<i128, Error> {
        registry::load_campaign(&e, campaign_id)?;
        Ok(escrow::balance(&e, campaign_id))
    }

    /// Rebuild `amount_raised` from the stored investment records and check
    /// it against the stored total and the custodied balance.
    ///
    /// Reads every record of the campaign in one invocation. Campaigns with
    /// more records than that budget allows are checked off-chain by summing
    /// `sum_investments_page` over all pages.
    pub fn verify_campaign(e: Env, campaign_id: u64) -> Result<i128, Error> {
        let campaign = registry::load_campaign(&e, campaign_id)?;
        let replayed = ledger::replay_unrefunded(&e, campaign_id)?;
        if replayed != campaign.amount_raised {
            return Err(Error::LedgerMismatch);
        }
        escrow::check_custody(&e, &campaign)?;
        Ok(replayed)
    }

    /// Unrefunded total of one page of investment records.
    pub fn sum_investments_page(
        e: Env,
        campaign_id: u64,
        start: u32,
        limit: u32,
    ) -> Result<i128, Error> {
        registry::load_campaign(&e, campaign_id)?;
        ledger::replay_unrefunded_page(&e, campaign_id, start, limit)
    }

    pub fn is_paused(e: Env) -> bool {
        registry::is_paused(&e)
    }

    pub fn get_admin(e: Env) -> Result<Address, Error> {
        registry::admin(&e)
    }

    pub fn get_token(e: Env) -> Result<Address, Error> {
        registry::token(&e)
    }
}

impl CrowdfundContract {
    fn set_paused(e: &Env, admin: Address, paused: bool) -> Result<(), Error> {
        let stored = registry::admin(e)?;
        if admin != stored {
            return Err(Error::Unauthorized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Paused, &paused);
        registry::extend_instance(e);

        log!(e, "pause flag changed", paused);
        events::emit_paused(e, admin, paused);
        Ok(())
    }
}
