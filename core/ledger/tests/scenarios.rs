// End-to-end walkthroughs of the ledger's economic lifecycle under the
// default configuration (post 10 / comment 5 / bonus 100 / rewards 2/1/1 /
// cap 200 / 10 free posts / 7-day cooldown).

use anyhow::Result;
use chainchat_ledger::{
    cct_to_wei, Address, LedgerConfig, LedgerError, ManualClock, SocialLedger,
};
use primitive_types::U256;
use std::sync::Arc;

const WEEK_SECS: u64 = 7 * 86_400;

fn owner() -> Address {
    Address([0xaa; 20])
}

fn user1() -> Address {
    Address([1; 20])
}

fn user2() -> Address {
    Address([2; 20])
}

fn setup() -> (SocialLedger, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(1_700_000_000));
    let config = LedgerConfig {
        owner: owner(),
        ..LedgerConfig::default()
    };
    let ledger = SocialLedger::with_clock(config, clock.clone()).unwrap();
    (ledger, clock)
}

#[test]
fn registration_grants_bonus_and_allowance() -> Result<()> {
    let (mut ledger, _clock) = setup();

    ledger.register_user(user1(), user1(), "user1")?;

    assert_eq!(ledger.balance_of(&user1()), cct_to_wei(100));
    assert_eq!(ledger.get_free_posts_remaining(&user1()), 10);
    assert!(ledger.get_user_by_address(&user1()).is_registered);
    Ok(())
}

#[test]
fn free_allowance_then_paid_posts() -> Result<()> {
    let (mut ledger, _clock) = setup();
    ledger.register_user(user1(), user1(), "user1")?;

    // Ten free posts: allowance drains, balance untouched
    for i in 0..10 {
        ledger.create_post(user1(), &format!("bafy-post-{i}"), "")?;
    }
    assert_eq!(ledger.get_free_posts_remaining(&user1()), 0);
    assert_eq!(ledger.balance_of(&user1()), cct_to_wei(100));

    // The eleventh debits exactly post_cost into the vault
    let reserve_before = ledger.vault_balance();
    ledger.create_post(user1(), "bafy-paid", "")?;

    assert_eq!(ledger.balance_of(&user1()), cct_to_wei(90));
    assert_eq!(ledger.vault_balance() - reserve_before, cct_to_wei(10));
    assert_eq!(ledger.get_posts_count(), 11);
    Ok(())
}

#[test]
fn like_rewards_author_once() -> Result<()> {
    let (mut ledger, _clock) = setup();
    ledger.register_user(user1(), user1(), "user1")?;
    ledger.register_user(user2(), user2(), "user2")?;
    ledger.create_post(user1(), "bafy-post", "")?;

    let before = ledger.balance_of(&user1());
    ledger.like_post(user2(), 0)?;

    assert_eq!(ledger.balance_of(&user1()) - before, cct_to_wei(1));
    assert_eq!(ledger.get_post(0)?.like_count, 1);

    let repeat = ledger.like_post(user2(), 0);
    assert_eq!(
        repeat,
        Err(LedgerError::AlreadyLiked {
            post_id: 0,
            liker: user2(),
        })
    );
    assert_eq!(ledger.get_post(0)?.like_count, 1);
    Ok(())
}

#[test]
fn share_appends_linked_post() -> Result<()> {
    let (mut ledger, _clock) = setup();
    ledger.register_user(user1(), user1(), "user1")?;
    ledger.register_user(user2(), user2(), "user2")?;
    ledger.create_post(user1(), "bafy-post", "bafy-img")?;

    let new_id = ledger.share_post(user2(), 0)?;

    assert_eq!(ledger.get_posts_count(), 2);
    let shared = ledger.get_post(new_id)?;
    assert_eq!(shared.author, user2());
    assert_eq!(shared.original_post_id, Some(0));
    assert_eq!(ledger.get_user_stats(&user2()).shares, 1);
    Ok(())
}

#[test]
fn weekly_claim_then_cooldown() -> Result<()> {
    let (mut ledger, clock) = setup();
    ledger.register_user(user1(), user1(), "user1")?;

    ledger.create_post(user1(), "bafy-one", "")?;
    ledger.create_post(user1(), "bafy-two", "")?;
    ledger.add_comment(user1(), 0, "first")?;

    let before = ledger.balance_of(&user1());
    let outcome = ledger.claim_weekly_engagement_rewards(user1())?;

    // 2 posts * 2 + 1 comment * 1 = 5 CCT
    assert_eq!(outcome.posts, 2);
    assert_eq!(outcome.comments, 1);
    assert_eq!(outcome.shares, 0);
    assert_eq!(outcome.payout, cct_to_wei(5));
    assert_eq!(ledger.balance_of(&user1()) - before, cct_to_wei(5));

    // Counters reset by the claim
    let user = ledger.get_user_by_address(&user1());
    assert_eq!(user.since_claim.posts, 0);
    assert_eq!(user.since_claim.comments, 0);

    // Immediate second claim is rejected
    let repeat = ledger.claim_weekly_engagement_rewards(user1());
    assert!(matches!(repeat, Err(LedgerError::CooldownActive { .. })));

    // After the cooldown elapses a fresh claim succeeds
    clock.advance(WEEK_SECS);
    ledger.create_post(user1(), "bafy-three", "")?;
    let second = ledger.claim_weekly_engagement_rewards(user1())?;
    assert_eq!(second.posts, 1);
    assert_eq!(second.payout, cct_to_wei(2));
    Ok(())
}

#[test]
fn claim_payout_is_capped() -> Result<()> {
    let (mut ledger, _clock) = setup();
    ledger.register_user(user1(), user1(), "user1")?;

    ledger.set_engagement_rewards(
        owner(),
        cct_to_wei(10),
        cct_to_wei(10),
        cct_to_wei(10),
        cct_to_wei(50),
    )?;

    for i in 0..10 {
        ledger.create_post(user1(), &format!("bafy-{i}"), "")?;
    }

    let before = ledger.balance_of(&user1());
    let outcome = ledger.claim_weekly_engagement_rewards(user1())?;

    // Raw 100 CCT, capped at 50
    assert_eq!(outcome.payout, cct_to_wei(50));
    assert_eq!(ledger.balance_of(&user1()) - before, cct_to_wei(50));
    Ok(())
}

#[test]
fn claim_with_no_activity_starts_cooldown() -> Result<()> {
    let (mut ledger, clock) = setup();
    ledger.register_user(user1(), user1(), "user1")?;

    let outcome = ledger.claim_weekly_engagement_rewards(user1())?;
    assert_eq!(outcome.payout, U256::zero());

    let repeat = ledger.claim_weekly_engagement_rewards(user1());
    assert!(matches!(repeat, Err(LedgerError::CooldownActive { .. })));

    clock.advance(WEEK_SECS);
    assert!(ledger.claim_weekly_engagement_rewards(user1()).is_ok());
    Ok(())
}

#[test]
fn non_owner_cannot_touch_params() -> Result<()> {
    let (mut ledger, _clock) = setup();
    ledger.register_user(user1(), user1(), "user1")?;

    assert_eq!(
        ledger.set_engagement_rewards(
            user1(),
            cct_to_wei(1),
            cct_to_wei(1),
            cct_to_wei(1),
            cct_to_wei(1),
        ),
        Err(LedgerError::Unauthorized(user1()))
    );
    assert_eq!(ledger.params().max_weekly_payout, cct_to_wei(200));
    Ok(())
}

#[test]
fn owner_withdrawal_drains_vault() -> Result<()> {
    let (mut ledger, _clock) = setup();
    ledger.register_user(user1(), user1(), "user1")?;

    // Push the free allowance out of the way, then route one paid post's
    // cost into the vault
    for i in 0..11 {
        ledger.create_post(user1(), &format!("bafy-{i}"), "")?;
    }

    let vault_before = ledger.vault_balance();
    let owner_before = ledger.balance_of(&owner());

    let amount = ledger.withdraw_tokens(owner())?;

    assert_eq!(amount, vault_before);
    assert_eq!(ledger.vault_balance(), U256::zero());
    assert_eq!(ledger.balance_of(&owner()) - owner_before, vault_before);
    Ok(())
}

#[test]
fn parameter_changes_are_not_retroactive() -> Result<()> {
    let (mut ledger, _clock) = setup();
    ledger.register_user(user1(), user1(), "user1")?;

    // Exhaust the free allowance at the default cost
    for i in 0..10 {
        ledger.create_post(user1(), &format!("bafy-{i}"), "")?;
    }
    ledger.create_post(user1(), "bafy-old-price", "")?;
    assert_eq!(ledger.balance_of(&user1()), cct_to_wei(90));

    // Raising the cost only affects the next post
    ledger.set_costs(owner(), cct_to_wei(30), cct_to_wei(5))?;
    ledger.create_post(user1(), "bafy-new-price", "")?;
    assert_eq!(ledger.balance_of(&user1()), cct_to_wei(60));
    Ok(())
}
