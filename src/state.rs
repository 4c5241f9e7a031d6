use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use lex_aprendiz::accounts::{Account, CredentialStore};
use lex_aprendiz::assistant::Assistant;
use lex_aprendiz::config::Settings;
use lex_aprendiz::content::{ContentSettings, ContentStore};
use lex_aprendiz::search::LegalSearch;

pub struct AppState {
    pub assistant: Arc<Assistant>,
    /// `None` when online search is disabled.
    pub search: Option<Arc<dyn LegalSearch>>,
    pub credentials: Arc<dyn CredentialStore>,
    /// Discord user id -> logged-in account email.
    pub sessions: RwLock<HashMap<u64, String>>,
    pub content: RwLock<ContentSettings>,
    pub content_store: ContentStore,
    pub settings: Settings,
    /// Short blake3 digest of the served tables.
    pub snapshot: String,
}

impl AppState {
    /// Account bound to this Discord user, if any.
    pub async fn session_account(&self, user_id: u64) -> anyhow::Result<Option<Account>> {
        let email = match self.sessions.read().await.get(&user_id) {
            Some(email) => email.clone(),
            None => return Ok(None),
        };
        Ok(self.credentials.find(&email).await?)
    }

    /// Admin by Discord id, or through a logged-in admin account.
    pub async fn is_admin(&self, user_id: u64) -> bool {
        if self.settings.admin_ids.contains(&user_id) {
            return true;
        }
        matches!(self.session_account(user_id).await, Ok(Some(account)) if account.is_admin())
    }
}

pub type Context<'a> = poise::Context<'a, AppState, anyhow::Error>;
