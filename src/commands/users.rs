use poise::CreateReply;

use crate::commands::ask::{split_chunks, DISCORD_CHUNK};
use crate::commands::require_admin;
use crate::state::Context;

/// Usuários cadastrados (somente admin)
#[poise::command(slash_command, guild_only)]
pub async fn usuarios(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    if !require_admin(&ctx).await? {
        return Ok(());
    }

    let accounts = ctx.data().credentials.list().await?;
    let admins = accounts.iter().filter(|a| a.is_admin()).count();

    let mut output = format!(
        "**👥 Usuários Cadastrados**\nTotal: {} | Administradores: {} | Usuários comuns: {}\n\n",
        accounts.len(),
        admins,
        accounts.len() - admins
    );
    for account in &accounts {
        let icon = if account.is_admin() { "👑" } else { "👤" };
        output.push_str(&format!(
            "{} **{}** - {} - desde {}\n",
            icon,
            account.name,
            account.email,
            account.created_at.format("%d/%m/%Y")
        ));
    }

    // account lists can outgrow one message; keep it private either way
    for chunk in split_chunks(&output, DISCORD_CHUNK) {
        ctx.send(CreateReply::default().content(chunk).ephemeral(true))
            .await?;
    }
    Ok(())
}
