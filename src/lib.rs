//! Balance ledger for shared expenses.
//!
//! The engine modules (`validation`, `balance`, `friends`, `aggregate`,
//! `exchange`, `ledger`) are pure functions over borrowed collections of
//! [`User`], [`Group`] and [`Expense`] records. `settings` and `store` belong
//! to the HTTP service wrapped around them.
pub mod aggregate;
pub mod balance;
pub mod error;
pub mod exchange;
pub mod friends;
pub mod ledger;
pub mod lookup;
pub mod schemas;
pub mod settings;
pub mod store;
pub mod validation;

#[cfg(test)]
mod testutil;

pub use aggregate::{combine, BalanceCalculation};
pub use balance::{resolve_group_balance, Balance, GroupBalance, MemberBalance};
pub use error::LedgerError;
pub use exchange::{compute_member_positions, get_exchanges_for_group, Exchange};
pub use friends::{resolve_friend_balances, FriendBalance};
pub use ledger::{Ledger, LedgerSummary};
pub use lookup::{get_all_users_in_expenses, get_user_name, UNKNOWN_USER};
pub use schemas::{Expense, Group, GroupId, User, UserId};
pub use validation::{check_expense, validate_expense_data};
