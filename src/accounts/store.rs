use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::password::{hash_password, verify_password};
use super::{normalize_email, validate, Account, AccountError, CredentialStore, NewAccount, Role};

/// Accounts in one JSON object keyed by email, rewritten on every change.
pub struct JsonCredentialStore {
    path: PathBuf,
    accounts: RwLock<BTreeMap<String, Account>>,
}

impl JsonCredentialStore {
    /// Open `path`, starting empty when the file does not exist yet.
    pub async fn open(path: &Path) -> Result<Self, AccountError> {
        let accounts = match tokio::fs::read(path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(?path, count = accounts.len(), "Credential store opened");
        Ok(Self {
            path: path.to_path_buf(),
            accounts: RwLock::new(accounts),
        })
    }

    /// Create an admin account for `email` unless one is already registered.
    pub async fn ensure_admin(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AccountError> {
        if self.find(email).await?.is_some() {
            return Ok(());
        }
        self.register(NewAccount {
            name: name.to_string(),
            cpf: "00000000000".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Role::Admin,
        })
        .await?;
        info!(email, "Seeded admin account");
        Ok(())
    }

    async fn persist(&self, accounts: &BTreeMap<String, Account>) -> Result<(), AccountError> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let json = serde_json::to_vec_pretty(accounts)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

async fn hash_blocking(password: String) -> Result<String, AccountError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AccountError::Hash(e.to_string()))?
}

#[async_trait]
impl CredentialStore for JsonCredentialStore {
    async fn register(&self, new: NewAccount) -> Result<Account, AccountError> {
        let new = validate(new)?;
        if self.accounts.read().await.contains_key(&new.email) {
            return Err(AccountError::EmailTaken);
        }

        let password_hash = hash_blocking(new.password).await?;
        let account = Account {
            name: new.name,
            cpf: new.cpf,
            email: new.email,
            password_hash,
            role: new.role,
            created_at: Utc::now(),
        };

        let mut accounts = self.accounts.write().await;
        // re-check under the write lock; the hash ran unlocked
        if accounts.contains_key(&account.email) {
            return Err(AccountError::EmailTaken);
        }
        // memory only changes once the file write succeeded
        let mut updated = accounts.clone();
        updated.insert(account.email.clone(), account.clone());
        self.persist(&updated).await?;
        *accounts = updated;

        info!(email = %account.email, role = ?account.role, "Account registered");
        Ok(account)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Account, AccountError> {
        let account = self
            .find(email)
            .await?
            .ok_or(AccountError::UnknownEmail)?;

        let hash = account.password_hash.clone();
        let password = password.to_string();
        let ok = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AccountError::Hash(e.to_string()))??;

        if ok {
            Ok(account)
        } else {
            Err(AccountError::WrongPassword)
        }
    }

    async fn find(&self, email: &str) -> Result<Option<Account>, AccountError> {
        Ok(self.accounts.read().await.get(&normalize_email(email)).cloned())
    }

    async fn list(&self) -> Result<Vec<Account>, AccountError> {
        Ok(self.accounts.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::tests::form;

    async fn store(dir: &tempfile::TempDir) -> JsonCredentialStore {
        JsonCredentialStore::open(&dir.path().join("users.json"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;

        let account = store
            .register(form("maria@empresa.com", "12345678901", "segredo"))
            .await
            .unwrap();
        assert_eq!(account.role, Role::Usuario);
        assert!(account.password_hash.starts_with("$argon2id$"));

        let logged = store.authenticate("MARIA@empresa.com", "segredo").await.unwrap();
        assert_eq!(logged.email, "maria@empresa.com");
    }

    #[tokio::test]
    async fn test_login_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;
        store
            .register(form("maria@empresa.com", "12345678901", "segredo"))
            .await
            .unwrap();

        assert!(matches!(
            store.authenticate("joao@empresa.com", "segredo").await,
            Err(AccountError::UnknownEmail)
        ));
        assert!(matches!(
            store.authenticate("maria@empresa.com", "errada").await,
            Err(AccountError::WrongPassword)
        ));
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;
        store
            .register(form("maria@empresa.com", "12345678901", "segredo"))
            .await
            .unwrap();
        assert!(matches!(
            store
                .register(form("Maria@Empresa.com", "10987654321", "outra-senha"))
                .await,
            Err(AccountError::EmailTaken)
        ));
    }

    #[tokio::test]
    async fn test_persisted_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = store(&dir).await;
            store
                .register(form("maria@empresa.com", "12345678901", "segredo"))
                .await
                .unwrap();
        }
        let reopened = store(&dir).await;
        assert_eq!(reopened.list().await.unwrap().len(), 1);
        assert!(reopened.authenticate("maria@empresa.com", "segredo").await.is_ok());
    }

    #[tokio::test]
    async fn test_ensure_admin_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;
        store
            .ensure_admin("Administrador", "admin@lex.com.br", "admin-senha")
            .await
            .unwrap();
        store
            .ensure_admin("Administrador", "admin@lex.com.br", "outra")
            .await
            .unwrap();

        let accounts = store.list().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert!(accounts[0].is_admin());
        // first password kept
        assert!(store.authenticate("admin@lex.com.br", "admin-senha").await.is_ok());
    }

    #[tokio::test]
    async fn test_failed_write_leaves_no_account() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;
        // a directory where the temp file goes makes the write fail
        std::fs::create_dir(dir.path().join("users.json.tmp")).unwrap();

        assert!(matches!(
            store
                .register(form("maria@empresa.com", "12345678901", "segredo"))
                .await,
            Err(AccountError::Storage(_))
        ));
        assert!(store.find("maria@empresa.com").await.unwrap().is_none());
        assert!(matches!(
            store.authenticate("maria@empresa.com", "segredo").await,
            Err(AccountError::UnknownEmail)
        ));

        std::fs::remove_dir(dir.path().join("users.json.tmp")).unwrap();
        assert!(store
            .register(form("maria@empresa.com", "12345678901", "segredo"))
            .await
            .is_ok());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            JsonCredentialStore::open(&path).await,
            Err(AccountError::Corrupt(_))
        ));
    }
}
