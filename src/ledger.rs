//! A read-only view over the users, groups and expenses of the application,
//! answering balance questions for any user.
//!
//! Every call recomputes from the underlying collections, nothing is cached.
use serde::Serialize;

use crate::aggregate::{combine, BalanceCalculation};
use crate::balance::{resolve_group_balance, GroupBalance};
use crate::friends::{friends_of, resolve_friend_balances, FriendBalance};
use crate::schemas::{Expense, Group, User};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub groups: Vec<GroupBalance>,
    pub friends: Vec<FriendBalance>,
    pub total: BalanceCalculation,
}

#[derive(Clone, Copy, Debug)]
pub struct Ledger<'a> {
    users: &'a [User],
    groups: &'a [Group],
    expenses: &'a [Expense],
}

impl<'a> Ledger<'a> {
    pub fn new(users: &'a [User], groups: &'a [Group], expenses: &'a [Expense]) -> Self {
        Self {
            users,
            groups,
            expenses,
        }
    }

    /// Balance of `current_user_id` inside a group, `None` if the group is
    /// unknown.
    pub fn group_balance(&self, group_id: &str, current_user_id: &str) -> Option<GroupBalance> {
        self.groups
            .iter()
            .find(|group| group.id == group_id)
            .map(|group| resolve_group_balance(group, self.expenses, self.users, current_user_id))
    }

    /// Group balances for every group `current_user_id` is a member of.
    pub fn group_balances(&self, current_user_id: &str) -> Vec<GroupBalance> {
        self.groups
            .iter()
            .filter(|group| group.has_member(current_user_id))
            .map(|group| resolve_group_balance(group, self.expenses, self.users, current_user_id))
            .collect()
    }

    /// Balances with every other known user over direct expenses.
    pub fn friend_balances(&self, current_user_id: &str) -> Vec<FriendBalance> {
        let friends: Vec<User> = friends_of(self.users, current_user_id)
            .into_iter()
            .cloned()
            .collect();
        resolve_friend_balances(self.expenses, &friends, current_user_id)
    }

    pub fn summary(&self, current_user_id: &str) -> LedgerSummary {
        let groups = self.group_balances(current_user_id);
        let friends = self.friend_balances(current_user_id);
        let total = combine(&groups, &friends);
        tracing::debug!(
            "summary for {current_user_id}: {} groups, {} friends, net {}",
            groups.len(),
            friends.len(),
            total.net_balance
        );

        LedgerSummary {
            groups,
            friends,
            total,
        }
    }
}
