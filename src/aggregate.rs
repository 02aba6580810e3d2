use std::collections::BTreeMap;

use crate::balance::{Balance, GroupBalance};
use crate::friends::FriendBalance;

/// Overall position of the current user across groups and friends.
///
/// `detailed_balances` is always empty: per-counterparty detail only makes
/// sense inside a single group or friendship.
pub type BalanceCalculation = Balance;

pub fn combine(group_balances: &[GroupBalance], friend_balances: &[FriendBalance]) -> BalanceCalculation {
    let (group_owed, group_owing) = group_balances
        .iter()
        .fold((0.0, 0.0), |(owed, owing), group| {
            (owed + group.balance.total_owed, owing + group.balance.total_owing)
        });

    let (total_owed, total_owing) =
        friend_balances
            .iter()
            .fold((group_owed, group_owing), |(owed, owing), friend| {
                if friend.balance > 0.0 {
                    (owed + friend.balance, owing)
                } else {
                    (owed, owing - friend.balance)
                }
            });

    BalanceCalculation {
        total_owed,
        total_owing,
        net_balance: total_owed - total_owing,
        detailed_balances: BTreeMap::new(),
    }
}
