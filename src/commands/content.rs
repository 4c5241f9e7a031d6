use chrono::Utc;
use tracing::info;

use lex_aprendiz::content::EDITABLE_KEYS;

use crate::commands::require_admin;
use crate::state::Context;

/// Editar os textos da interface (somente admin)
#[poise::command(slash_command, guild_only)]
pub async fn conteudo(
    ctx: Context<'_>,
    #[description = "assistant_name | welcome_title | welcome_message | topics_title | specialties"]
    chave: Option<String>,
    #[description = "Novo valor (specialties: itens separados por ;)"] valor: Option<String>,
) -> Result<(), anyhow::Error> {
    if !require_admin(&ctx).await? {
        return Ok(());
    }
    let data = ctx.data();

    match (chave.as_deref(), valor) {
        // Show current texts
        (None, _) => {
            let content = data.content.read().await;
            let mut output = String::from("**✏️ Conteúdo Editável:**\n");
            for key in EDITABLE_KEYS {
                let value = content.get(key).unwrap_or_default();
                output.push_str(&format!("`{}`: {}\n", key, value));
            }
            if let Some(ts) = content.last_updated {
                output.push_str(&format!("\n*Última atualização: {}*", ts.format("%d/%m/%Y %H:%M")));
            }
            drop(content);
            ctx.say(output).await?;
        }
        (Some(key), Some(val)) => {
            let mut content = data.content.write().await;
            let mut edited = content.clone();
            if let Err(e) = edited.set(key, &val) {
                drop(content);
                ctx.say(format!("❌ {}", e)).await?;
                return Ok(());
            }
            edited.last_updated = Some(Utc::now());
            data.content_store.save(&edited).await?;
            *content = edited;
            drop(content);

            info!(user = ctx.author().name, key, "Content updated");
            ctx.say(format!("✅ `{}` atualizado.", key)).await?;
        }
        (Some(key), None) => {
            let content = data.content.read().await;
            let shown = content.get(key);
            drop(content);
            match shown {
                Some(value) => ctx.say(format!("`{}`: {}", key, value)).await?,
                None => {
                    ctx.say(format!(
                        "❌ Chave desconhecida `{}`. Válidas: {}",
                        key,
                        EDITABLE_KEYS.join(", ")
                    ))
                    .await?
                }
            };
        }
    }

    Ok(())
}
