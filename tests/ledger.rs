use chrono::{TimeZone, Utc};
use serde_json::json;

use opensplit_ledger::{
    combine, get_all_users_in_expenses, get_exchanges_for_group, resolve_friend_balances,
    resolve_group_balance, validate_expense_data, Expense, Group, Ledger, User,
};

fn users() -> Vec<User> {
    ["Alice", "Bob", "Charlie"]
        .iter()
        .enumerate()
        .map(|(idx, name)| User {
            id: (idx + 1).to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        })
        .collect()
}

fn trip() -> Group {
    Group {
        id: "G".to_string(),
        name: "Trip".to_string(),
        members: vec!["1".to_string(), "2".to_string(), "3".to_string()],
        created_by: "1".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn expense(value: serde_json::Value) -> Expense {
    serde_json::from_value(value).unwrap()
}

fn expenses() -> Vec<Expense> {
    vec![
        expense(json!({
            "id": "hotel",
            "title": "Hotel",
            "amount": 300.0,
            "currency": "USD",
            "paidBy": "1",
            "splitBetween": ["1", "2", "3"],
            "groupId": "G",
            "isDraft": false,
            "date": "2024-01-05T10:00:00Z",
            "createdAt": "2024-01-05T10:00:00Z"
        })),
        expense(json!({
            "id": "movie",
            "title": "Movie",
            "amount": 60.0,
            "currency": "USD",
            "paidBy": "2",
            "splitBetween": ["1", "2"],
            "groupId": "G",
            "date": "2024-01-06T20:00:00Z",
            "createdAt": "2024-01-06T20:00:00Z"
        })),
        expense(json!({
            "id": "dinner",
            "title": "Dinner",
            "description": "Just the two of us",
            "amount": 100.0,
            "currency": "USD",
            "paidBy": "1",
            "splitBetween": ["1", "3"],
            "date": "2024-01-07T19:30:00Z",
            "createdAt": "2024-01-07T21:00:00Z"
        })),
    ]
}

#[test]
fn records_deserialize_from_camel_case() {
    let expenses = expenses();
    assert!(expenses.iter().all(validate_expense_data));
    assert!(!expenses[1].is_draft);
    assert_eq!(expenses[2].group_id, None);
    assert_eq!(expenses[2].description.as_deref(), Some("Just the two of us"));
}

#[test]
fn trip_scenario() {
    let users = users();
    let expenses = expenses();

    let group = resolve_group_balance(&trip(), &expenses, &users, "1");
    assert_eq!(group.balance.total_owed, 200.0);
    assert_eq!(group.balance.total_owing, 30.0);
    assert_eq!(group.balance.net_balance, 170.0);
    assert_eq!(group.balance.detailed_balances["2"], 70.0);
    assert_eq!(group.balance.detailed_balances["3"], 100.0);

    let friends = resolve_friend_balances(&expenses, &users, "1");
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].friend_id, "3");
    assert_eq!(friends[0].balance, 50.0);
    assert_eq!(
        friends[0].last_transaction,
        Utc.with_ymd_and_hms(2024, 1, 7, 19, 30, 0).unwrap()
    );

    let total = combine(&[group], &friends);
    assert_eq!(total.total_owed, 250.0);
    assert_eq!(total.total_owing, 30.0);
    assert_eq!(total.net_balance, 220.0);
}

#[test]
fn drafts_change_nothing() {
    let users = users();
    let groups = vec![trip()];
    let mut expenses = expenses();
    let before = Ledger::new(&users, &groups, &expenses).summary("2");

    let mut draft = expenses[0].clone();
    draft.id = "draft".to_string();
    draft.is_draft = true;
    let mut direct_draft = expenses[2].clone();
    direct_draft.id = "direct-draft".to_string();
    direct_draft.is_draft = true;
    expenses.push(draft);
    expenses.push(direct_draft);

    let after = Ledger::new(&users, &groups, &expenses).summary("2");
    assert_eq!(before, after);
}

#[test]
fn group_and_direct_expenses_stay_apart() {
    let users = users();
    let groups = vec![trip()];
    let expenses = expenses();
    let ledger = Ledger::new(&users, &groups, &expenses);

    // Charlie only owes Alice directly for the dinner
    let charlie = ledger.summary("3");
    assert_eq!(charlie.friends.len(), 1);
    assert_eq!(charlie.friends[0].balance, -50.0);
    assert_eq!(charlie.groups[0].balance.total_owing, 100.0);
    assert_eq!(charlie.total.total_owing, 150.0);

    // Bob has no direct expenses at all
    assert!(ledger.friend_balances("2").is_empty());
}

#[test]
fn trip_settles_with_two_payments() {
    let expenses = expenses();
    let exchanges = get_exchanges_for_group(&trip(), &expenses);
    assert_eq!(exchanges.len(), 2);
    assert!(exchanges.iter().all(|exchange| exchange.receiver == "1"));
    let total: f64 = exchanges.iter().map(|exchange| exchange.amount).sum();
    assert_eq!(total, 170.0);
}

#[test]
fn everybody_involved_is_collected() {
    let users_in_expenses = get_all_users_in_expenses(&expenses());
    assert_eq!(
        users_in_expenses.into_iter().collect::<Vec<_>>(),
        vec!["1", "2", "3"]
    );
}
