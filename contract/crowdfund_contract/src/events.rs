use soroban_sdk::{contractevent, Address, Env};

#[contractevent(topics = ["campaign_created"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    #[topic]
    pub campaign_id: u64,
    pub entrepreneur: Address,
    pub funding_goal: i128,
    pub deadline: u64,
}

#[contractevent(topics = ["invested"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestedEvent {
    #[topic]
    pub campaign_id: u64,
    pub investor: Address,
    pub amount: i128,
    pub amount_raised: i128,
    pub is_funded: bool,
}

#[contractevent(topics = ["funds_claimed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsClaimedEvent {
    #[topic]
    pub campaign_id: u64,
    pub entrepreneur: Address,
    pub amount: i128,
}

#[contractevent(topics = ["refunded"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundedEvent {
    #[topic]
    pub campaign_id: u64,
    pub investor: Address,
    pub amount: i128,
    pub amount_raised: i128,
}

#[contractevent(topics = ["paused"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PausedEvent {
    #[topic]
    pub admin: Address,
}

#[contractevent(topics = ["unpaused"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnpausedEvent {
    #[topic]
    pub admin: Address,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    event.publish(env);
}

pub fn emit_invested(env: &Env, event: InvestedEvent) {
    event.publish(env);
}

pub fn emit_funds_claimed(env: &Env, event: FundsClaimedEvent) {
    event.publish(env);
}

pub fn emit_refunded(env: &Env, event: RefundedEvent) {
    event.publish(env);
}

pub fn emit_paused(env: &Env, admin: Address, paused: bool) {
    if paused {
        PausedEvent { admin }.publish(env);
    } else {
        UnpausedEvent { admin }.publish(env);
    }
}
