use anyhow::Result;

use crate::config::LeaddeskConfig;
use crate::session::{Session, SessionStore, UserProfile, UserRole};
use crate::workflow::types::UserId;

#[allow(clippy::too_many_arguments)]
pub fn login(
    config: &LeaddeskConfig,
    id: String,
    name: String,
    email: String,
    role: &str,
    token: String,
    phone: Option<String>,
) -> Result<()> {
    let role = match role.trim().to_ascii_lowercase().as_str() {
        "admin" => UserRole::Admin,
        "customer_care" | "customer-care" => UserRole::CustomerCare,
        other => anyhow::bail!("unknown role {other:?} (expected admin or customer_care)"),
    };

    let session = Session {
        user: UserProfile {
            id: UserId::new(id),
            name,
            email,
            role,
            phone,
        },
        token,
    };

    let store = SessionStore::new(&config.session.store_path);
    store.save(&session)?;
    println!("✅ Logged in as {} ({})", session.user.name, session.user.email);
    Ok(())
}

pub fn logout(config: &LeaddeskConfig) -> Result<()> {
    let store = SessionStore::new(&config.session.store_path);
    store.clear()?;
    println!("👋 Session cleared");
    Ok(())
}
