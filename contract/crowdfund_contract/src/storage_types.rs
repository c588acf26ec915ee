use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    Paused,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(u64),
    // Number of Investment records appended for a campaign
    InvestmentCount(u64),
    Investment(u64, u32),
    // Indices of an investor's records within the campaign
    InvestorRecords(u64, Address),
    // Custodied balance held by the contract for a campaign
    Escrowed(u64),
}

// Internal alias; contract-facing types spell out `u64`.
pub type CampaignId = u64;

/// Lifecycle status, always derived from stored fields and the ledger time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Active,
    Completed,
    Failed,
}

/// A fundraising campaign.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: u64,
    pub entrepreneur: Address,
    pub title: String,
    pub description: String,
    pub funding_goal: i128,
    pub amount_raised: i128,
    pub start_time: u64,
    pub deadline: u64,
    pub is_funded: bool,
    pub is_claimed: bool,
}

/// One contribution. Top-ups by the same investor are separate records.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Investment {
    pub campaign_id: u64,
    pub investor: Address,
    pub amount: i128,
    pub timestamp: u64,
    pub refunded: bool,
}

/// Campaign snapshot with its status resolved at read time.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignView {
    pub campaign: Campaign,
    pub status: CampaignStatus,
    pub is_active: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotFound = 1,
    Unauthorized = 2,
    InvalidAmount = 3,
    InvalidDuration = 4,
    InvalidInput = 5,
    CampaignClosed = 6,
    InvalidState = 7,
    DoubleClaim = 8,
    NothingToRefund = 9,
    Overflow = 10,
    AlreadyInitialized = 11,
    NotInitialized = 12,
    ContractPaused = 13,
    LedgerMismatch = 14,
}

// Constants
pub const MAX_PAGE_SIZE: u32 = 50;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
pub const TTL_THRESHOLD: u32 = 17280 * 7; // extend once fewer than 7 days remain
