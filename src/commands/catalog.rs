use lex_aprendiz::agents::AgentKind;
use lex_aprendiz::assistant::{format, texts};

use crate::commands::ask::send_chunked;
use crate::state::Context;

/// Tópicos e especialidades disponíveis
#[poise::command(slash_command)]
pub async fn topicos(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    let data = ctx.data();
    let content = data.content.read().await;

    let mut output = format!("**{}**\n{}\n\n", content.topics_title, content.specialties_list());
    drop(content);

    output.push_str("**Perguntas cobertas:**\n");
    for topic in data.assistant.knowledge().topics() {
        if topic.legal_refs.is_empty() {
            output.push_str(&format!("- {}\n", topic.question));
        } else {
            output.push_str(&format!(
                "- {} _({})_\n",
                topic.question,
                topic.legal_refs.join(", ")
            ));
        }
    }
    output.push('\n');
    output.push_str(texts::FALLBACK);

    send_chunked(&ctx, &output).await
}

/// Programas de aprendizagem do CONAP
#[poise::command(slash_command)]
pub async fn programas(
    ctx: Context<'_>,
    #[description = "Área (ex.: tecnologia, saúde, construção)"] area: Option<String>,
) -> Result<(), anyhow::Error> {
    let catalog = ctx.data().assistant.catalog();

    let output = match area.as_deref() {
        None => format::overview(catalog),
        Some(term) => match catalog.find_area(term) {
            Some(area) => {
                let cards: Vec<String> = catalog
                    .programs_in_area(&area.key)
                    .into_iter()
                    .map(|p| format::program(p, &area.name))
                    .collect();
                format!("**Programas de {}:**\n{}", area.name, cards.join("\n"))
            }
            None => {
                let names: Vec<&str> = catalog.areas().iter().map(|a| a.name.as_str()).collect();
                format!(
                    "Área `{}` não encontrada. Áreas disponíveis: {}",
                    term.trim(),
                    names.join(", ")
                )
            }
        },
    };

    send_chunked(&ctx, &output).await
}

/// Agentes disponíveis
#[poise::command(slash_command)]
pub async fn agentes(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    let mut output = String::from("**📋 Agentes Disponíveis**\n\n");
    for agent in AgentKind::ALL {
        let profile = agent.profile();
        output.push_str(&format!("**{}**: {}\n", profile.name, profile.description));
    }
    ctx.say(output).await?;
    Ok(())
}

/// Sobre o assistente
#[poise::command(slash_command)]
pub async fn sobre(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    let data = ctx.data();
    let content = data.content.read().await;

    let output = format!(
        "**{}**\n{}\n\n**Assistente:** {}\n**Tópicos:** {} | **Programas CONAP:** {}\n**Base:** `{}`",
        content.welcome_title,
        content.welcome_message,
        content.assistant_name,
        data.assistant.knowledge().len(),
        data.assistant.catalog().len(),
        data.snapshot,
    );
    drop(content);

    ctx.say(output).await?;
    Ok(())
}
