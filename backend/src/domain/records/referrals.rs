//! Referral programme records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resource::{ListOrder, Resource, ResourceKind};

define_resource! {
    /// A shareable referral code.
    ReferralCode: ReferralCode / NewReferralCode {
        /// Owning account.
        user_id: i32,
        /// Unique code.
        code: String,
        /// Redemptions so far.
        uses: i32,
    }
    stamped { created_at }
}

define_resource! {
    /// Referral counters for one account.
    ReferralStats: ReferralStats / NewReferralStats {
        /// Owning account.
        user_id: i32,
        /// Codes redeemed.
        total_referrals: i32,
        /// Redemptions that led to a booking.
        successful_referrals: i32,
        /// Rewards earned in cents.
        total_rewards_cents: i64,
    }
}

define_resource! {
    /// A reward for one redemption.
    ReferralReward: ReferralReward / NewReferralReward {
        /// Redeemed code.
        referral_code_id: i32,
        /// Account that redeemed it.
        referred_user_id: i32,
        /// Reward in cents.
        reward_cents: i64,
        /// Free-form status such as `pending` or `paid`.
        status: String,
    }
    stamped { created_at }
}
