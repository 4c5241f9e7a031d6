mod account;
mod ask;
mod catalog;
mod content;
mod users;

use crate::state::Context;

/// LexAprendiz - Assistente da Lei da Aprendizagem
#[poise::command(
    slash_command,
    subcommands(
        "ask::perguntar",
        "catalog::topicos",
        "catalog::programas",
        "catalog::agentes",
        "catalog::sobre",
        "account::conta",
        "content::conteudo",
        "users::usuarios"
    )
)]
pub async fn lex(_ctx: Context<'_>) -> Result<(), anyhow::Error> {
    Ok(())
}

/// Tell non-admins the command is restricted. Returns whether to proceed.
pub(crate) async fn require_admin(ctx: &Context<'_>) -> Result<bool, anyhow::Error> {
    let user_id = ctx.author().id.get();
    if ctx.data().is_admin(user_id).await {
        return Ok(true);
    }
    ctx.say("Este comando é restrito a administradores.").await?;
    Ok(false)
}
