//! Account commands - login and register

use anyhow::Result;
use skybook_core::{Credentials, Operation, Registration};
use skybook_gateway::Gateway;

use super::{expect_payload, unexpected};
use crate::output::OutputContext;

pub async fn login(
    gateway: &Gateway,
    email: &str,
    password: &str,
    ctx: &OutputContext,
) -> Result<()> {
    let operation = Operation::Login(Credentials::new(email, password));
    let session = expect_payload(gateway.dispatch(&operation).await)?
        .into_session()
        .ok_or_else(|| unexpected("session"))?;

    ctx.success(&format!("Logged in as {}", session.user.name));
    ctx.print_kv(&[
        ("User ID", session.user.id.to_string()),
        ("Name", session.user.name),
        ("Email", session.user.email),
        ("Token", session.token),
    ]);
    Ok(())
}

pub async fn register(
    gateway: &Gateway,
    name: &str,
    email: &str,
    password: &str,
    ctx: &OutputContext,
) -> Result<()> {
    let operation = Operation::Register(Registration::new(name, email, password));
    let receipt = expect_payload(gateway.dispatch(&operation).await)?
        .into_registration()
        .ok_or_else(|| unexpected("registration"))?;

    ctx.success(&receipt.message);
    ctx.print_kv(&[
        ("User ID", receipt.user.id.to_string()),
        ("Name", receipt.user.name),
        ("Email", receipt.user.email),
    ]);
    Ok(())
}
