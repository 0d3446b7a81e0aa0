use anyhow::Result;
use hulpwijzer_core::session::SessionId;

use super::Context;

pub async fn show(ctx: &Context) -> Result<()> {
    let store = ctx.identity_store();
    println!("{}", store.get_or_create().await);
    warn_if_degraded(store.is_degraded());
    Ok(())
}

pub async fn reset(ctx: &Context) -> Result<()> {
    let store = ctx.identity_store();
    println!("{}", store.reset().await);
    warn_if_degraded(store.is_degraded());
    Ok(())
}

pub async fn set(ctx: &Context, id: String) -> Result<()> {
    let id = SessionId::new(id)?;
    let store = ctx.identity_store();
    store.set(id.clone()).await;
    println!("{}", id);
    warn_if_degraded(store.is_degraded());
    Ok(())
}

fn warn_if_degraded(degraded: bool) {
    if degraded {
        eprintln!("warning: session storage unavailable, id was not persisted");
    }
}
