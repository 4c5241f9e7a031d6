mod commands;
mod state;

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use poise::{Framework, FrameworkOptions};
use tokio::sync::RwLock;
use tracing::{error, info};

use lex_aprendiz::accounts::JsonCredentialStore;
use lex_aprendiz::catalog::Catalog;
use lex_aprendiz::config::{self, Settings};
use lex_aprendiz::content::ContentStore;
use lex_aprendiz::knowledge;
use lex_aprendiz::search::{LegalSearch, PlanaltoSearch};
use lex_aprendiz::Assistant;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load env
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_max_level(config::log_level())
        .init();

    let token = dotenv::var("DISCORD_TOKEN").context("DISCORD_TOKEN required")?;
    let settings = Settings::from_env();

    // Tables are validated here; a bad table stops the bot before it connects
    let knowledge = knowledge::loader::load(settings.knowledge_base_path.as_deref())
        .context("Invalid knowledge base")?;
    let catalog = Catalog::builtin().context("Invalid CONAP catalog")?;
    let assistant = Arc::new(Assistant::new(
        knowledge,
        catalog,
        settings.max_listed_programs,
    ));
    let digest = assistant.snapshot_digest();
    let snapshot = digest[..16].to_string();
    info!(
        topics = assistant.knowledge().len(),
        programs = assistant.catalog().len(),
        snapshot = %snapshot,
        "Knowledge snapshot loaded"
    );

    let search: Option<Arc<dyn LegalSearch>> = if settings.online_search {
        info!(timeout = ?settings.search_timeout, "Online legal search enabled");
        Some(Arc::new(PlanaltoSearch::new(settings.search_timeout)?))
    } else {
        info!("Online legal search disabled");
        None
    };

    // Init storage
    let credentials = Arc::new(JsonCredentialStore::open(&settings.users_path()).await?);
    if let Some((email, password)) = &settings.seed_admin {
        credentials
            .ensure_admin("Administrador", email, password)
            .await
            .context("Failed to seed admin account")?;
    }
    info!(path = ?settings.users_path(), "Credential store initialized");

    let content_store = ContentStore::new(&settings.content_path());
    let content = content_store.load().await?;

    if !settings.admin_ids.is_empty() {
        info!(count = settings.admin_ids.len(), "Admin users configured");
    }
    if !settings.require_login {
        info!("Login not required for questions");
    }

    let guild_id = settings.guild_id.map(serenity::GuildId::new);

    let app_state = AppState {
        assistant,
        search,
        credentials,
        sessions: RwLock::new(HashMap::new()),
        content: RwLock::new(content),
        content_store,
        settings,
        snapshot,
    };

    let intents =
        serenity::GatewayIntents::GUILDS | serenity::GatewayIntents::GUILD_MESSAGES;

    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: vec![commands::lex()],
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Bot connected as: {} ({})", ready.user.name, ready.user.id);

                let commands = &framework.options().commands;
                for cmd in commands {
                    info!("  /{} ({} subcommands)", cmd.name, cmd.subcommands.len());
                    for sub in &cmd.subcommands {
                        info!("    /{} {}", cmd.name, sub.name);
                    }
                }

                if let Some(gid) = guild_id {
                    info!("Registering to guild {} (instant)", gid);
                    poise::builtins::register_in_guild(
                        ctx,
                        &framework.options().commands,
                        gid,
                    )
                    .await?;
                } else {
                    info!("Registering globally (up to 1 hour delay)");
                    poise::builtins::register_globally(ctx, &framework.options().commands)
                        .await?;
                }

                Ok(app_state)
            })
        })
        .build();

    info!("Starting LexAprendiz Discord bot...");

    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create client: {}", e))?;

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }

    Ok(())
}
