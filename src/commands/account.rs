use poise::CreateReply;
use tracing::{info, warn};

use lex_aprendiz::accounts::{AccountError, NewAccount, Role};

use crate::state::Context;

async fn reply_private(ctx: &Context<'_>, text: impl Into<String>) -> Result<(), anyhow::Error> {
    ctx.send(CreateReply::default().content(text).ephemeral(true))
        .await?;
    Ok(())
}

fn log_store_error(err: &AccountError) {
    if matches!(
        err,
        AccountError::Storage(_) | AccountError::Corrupt(_) | AccountError::Hash(_)
    ) {
        warn!("Credential store error: {:?}", err);
    }
}

/// Conta de acesso ao LexAprendiz
#[poise::command(slash_command, subcommands("cadastrar", "entrar", "sair"))]
pub async fn conta(_ctx: Context<'_>) -> Result<(), anyhow::Error> {
    Ok(())
}

/// Criar uma conta
#[poise::command(slash_command)]
pub async fn cadastrar(
    ctx: Context<'_>,
    #[description = "Nome completo"] nome: String,
    #[description = "CPF (somente números ou 000.000.000-00)"] cpf: String,
    #[description = "Email"] email: String,
    #[description = "Senha (mínimo 6 caracteres)"] senha: String,
) -> Result<(), anyhow::Error> {
    let result = ctx
        .data()
        .credentials
        .register(NewAccount {
            name: nome,
            cpf,
            email,
            password: senha,
            role: Role::Usuario,
        })
        .await;

    match result {
        Ok(account) => {
            reply_private(
                &ctx,
                format!(
                    "✅ Usuário cadastrado com sucesso!\nEntre com `/lex conta entrar {} <senha>`.",
                    account.email
                ),
            )
            .await
        }
        Err(e) => {
            log_store_error(&e);
            reply_private(&ctx, format!("❌ {}", e)).await
        }
    }
}

/// Entrar com email e senha
#[poise::command(slash_command)]
pub async fn entrar(
    ctx: Context<'_>,
    #[description = "Email"] email: String,
    #[description = "Senha"] senha: String,
) -> Result<(), anyhow::Error> {
    let data = ctx.data();
    match data.credentials.authenticate(&email, &senha).await {
        Ok(account) => {
            let user_id = ctx.author().id.get();
            data.sessions
                .write()
                .await
                .insert(user_id, account.email.clone());
            info!(user_id, email = %account.email, "Session started");

            reply_private(
                &ctx,
                format!("✅ Login realizado com sucesso! Bem-vindo(a), {}.", account.name),
            )
            .await
        }
        Err(e) => {
            log_store_error(&e);
            reply_private(&ctx, format!("❌ {}", e)).await
        }
    }
}

/// Sair da conta
#[poise::command(slash_command)]
pub async fn sair(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    let user_id = ctx.author().id.get();
    let removed = ctx.data().sessions.write().await.remove(&user_id);

    if let Some(email) = removed {
        info!(user_id, email = %email, "Session ended");
        reply_private(&ctx, "👋 Você saiu da sua conta.").await
    } else {
        reply_private(&ctx, "Você não está conectado.").await
    }
}
