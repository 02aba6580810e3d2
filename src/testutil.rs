use chrono::{DateTime, TimeZone, Utc};

use crate::schemas::{Expense, Group, User};

pub fn day(n: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, n, 12, 0, 0).unwrap()
}

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        created_at: day(1),
    }
}

pub fn group(id: &str, members: &[&str]) -> Group {
    Group {
        id: id.to_string(),
        name: format!("Group {id}"),
        members: members.iter().map(|m| m.to_string()).collect(),
        created_by: members.first().map(|m| m.to_string()).unwrap_or_default(),
        created_at: day(1),
    }
}

pub fn expense(id: &str, amount: f64, paid_by: &str, split: &[&str], group: Option<&str>) -> Expense {
    Expense {
        id: id.to_string(),
        title: format!("Expense {id}"),
        description: None,
        amount,
        currency: String::from("USD"),
        paid_by: paid_by.to_string(),
        split_between: split.iter().map(|s| s.to_string()).collect(),
        group_id: group.map(String::from),
        is_draft: false,
        date: Some(day(2)),
        created_at: day(2),
    }
}

pub fn alice_bob_charlie() -> Vec<User> {
    vec![user("1", "Alice"), user("2", "Bob"), user("3", "Charlie")]
}

pub fn assert_close(left: f64, right: f64) {
    assert!(
        (left - right).abs() < 1e-9,
        "expected {right}, got {left}"
    );
}
