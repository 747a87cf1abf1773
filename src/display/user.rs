//! User display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::User;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Registered")]
    registered: String,
}

/// Format users as a table
pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users registered.".to_string();
    }

    let rows = users.iter().map(|u| UserRow {
        id: u.id.to_string(),
        name: u.name.clone(),
        email: u.email.clone(),
        registered: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format one user's details; the password hash is never shown
pub fn format_user_details(user: &User) -> String {
    format!(
        "User: {}\n  ID:         {}\n  Email:      {}\n  Registered: {}",
        user.name,
        user.id.as_uuid(),
        user.email,
        user.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}
