//! Login command - save and inspect the backend session

use anyhow::{bail, Result};
use showkit_client::{ApiClient, ClientError, Session};

use super::Context;
use crate::ui;

pub async fn run(ctx: &Context, token: Option<String>, user: Option<String>) -> Result<()> {
    let token = match token {
        Some(t) => t,
        None => ui::input("Session token")?,
    };
    let user = match user {
        Some(u) => u,
        None => ui::input("User id")?,
    };

    let session = Session::new(token, user);

    // One cheap authenticated call to catch a bad token at login time
    // instead of on the first real command.
    let client = ApiClient::new(ctx.api_config().clone(), session.clone())?;
    let pb = ui::spinner("Verifying token...");
    let verification = client.list_bookings().await;
    pb.finish_and_clear();

    match verification {
        Ok(_) => {}
        Err(ClientError::SessionExpired) => bail!("the backend rejected this token"),
        Err(e) if e.is_retryable() => {
            ui::warning(&format!("could not verify token ({}); saving anyway", e));
        }
        Err(e) => return Err(e.into()),
    }

    let storage = ctx.storage();
    storage.init()?;
    storage.save_session(&session)?;

    ui::success(&format!("Logged in as {}", session.user_id));
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    ctx.storage().clear_session()?;
    ui::success("Session forgotten");
    Ok(())
}

pub fn whoami(ctx: &Context) -> Result<()> {
    match ctx.storage().load_session()? {
        Some(session) => {
            ui::header("Current session");
            ui::key_value("User", &session.user_id);
            match session.expires_at {
                Some(t) => ui::key_value("Expires", &t.to_rfc3339()),
                None => ui::key_value("Expires", "unknown"),
            }
        }
        None => {
            ui::info("No saved session");
            ui::info("Run 'showkit login' to create one");
        }
    }
    Ok(())
}
