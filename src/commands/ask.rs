use poise::CreateReply;
use tracing::info;

use lex_aprendiz::agents::AgentKind;

use crate::state::Context;

pub(super) const DISCORD_CHUNK: usize = 1990;

/// Pergunte sobre a legislação da aprendizagem
#[poise::command(slash_command, guild_only)]
pub async fn perguntar(
    ctx: Context<'_>,
    #[description = "Sua pergunta"] pergunta: String,
    #[description = "Agente (padrão: LexAprendiz)"] agente: Option<AgentKind>,
) -> Result<(), anyhow::Error> {
    let data = ctx.data();
    let user_id = ctx.author().id.get();

    if data.settings.require_login && data.session_account(user_id).await?.is_none() {
        ctx.send(
            CreateReply::default()
                .content(
                    "🔒 **Acesso Restrito**\nFaça login com `/lex conta entrar` ou crie uma conta \
                     com `/lex conta cadastrar` para continuar.",
                )
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    // online search can take several seconds
    ctx.defer().await?;

    let agent = agente.unwrap_or_default();
    let reply = data
        .assistant
        .respond(
            &pergunta,
            agent,
            data.search.as_deref(),
            data.settings.search_timeout,
        )
        .await;

    info!(
        user = ctx.author().name,
        agent = agent.profile().name,
        path = reply.path,
        answer_len = reply.text.len(),
        "Chat turn answered"
    );

    let full = format!(
        "**Pergunta:** {}\n**Agente:** {}\n\n{}",
        pergunta.trim(),
        agent.profile().name,
        reply.text
    );
    send_chunked(&ctx, &full).await
}

/// Send a message in Discord-safe chunks.
/// Uses ctx.say() for all chunks so follow-ups go through the interaction
/// webhook, which doesn't require Send Messages channel permission.
pub(super) async fn send_chunked(ctx: &Context<'_>, text: &str) -> Result<(), anyhow::Error> {
    for chunk in split_chunks(text, DISCORD_CHUNK) {
        ctx.say(chunk).await?;
    }
    Ok(())
}

/// Split at the last newline, else the last space, within `max` bytes.
/// Never cuts inside a UTF-8 character.
pub(super) fn split_chunks(text: &str, max: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut remaining = text;
    while !remaining.is_empty() {
        let mut limit = remaining.len().min(max);
        while !remaining.is_char_boundary(limit) {
            limit -= 1;
        }
        if limit == 0 {
            limit = remaining.chars().next().map_or(remaining.len(), char::len_utf8);
        }
        let split_at = if limit < remaining.len() {
            remaining[..limit]
                .rfind('\n')
                .or_else(|| remaining[..limit].rfind(' '))
                .map(|i| i + 1)
                .unwrap_or(limit)
        } else {
            limit
        };
        chunks.push(&remaining[..split_at]);
        remaining = &remaining[split_at..];
    }
    chunks
}
