pub mod password;
mod store;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub use store::JsonCredentialStore;

pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Registration and login failures. The messages are shown to users as-is.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Preencha todos os campos!")]
    MissingField,

    #[error("Email já cadastrado!")]
    EmailTaken,

    #[error("Email inválido!")]
    InvalidEmail,

    #[error("CPF inválido!")]
    InvalidCpf,

    #[error("Senha deve ter pelo menos 6 caracteres!")]
    WeakPassword,

    #[error("Email não encontrado!")]
    UnknownEmail,

    #[error("Senha incorreta!")]
    WrongPassword,

    #[error("Erro ao processar senha: {0}")]
    Hash(String),

    #[error("Erro ao acessar o cadastro de usuários")]
    Storage(#[from] std::io::Error),

    #[error("Cadastro de usuários corrompido")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Usuario,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    /// Formatted `xxx.xxx.xxx-xx`.
    pub cpf: String,
    /// Lowercased; the store key.
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Registration form, before validation.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn register(&self, new: NewAccount) -> Result<Account, AccountError>;

    async fn authenticate(&self, email: &str, password: &str) -> Result<Account, AccountError>;

    async fn find(&self, email: &str) -> Result<Option<Account>, AccountError>;

    async fn list(&self) -> Result<Vec<Account>, AccountError>;
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// `xxx.xxx.xxx-xx` when the input holds exactly eleven digits.
pub fn format_cpf(cpf: &str) -> Option<String> {
    let digits: String = cpf.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 11 {
        return None;
    }
    Some(format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    ))
}

/// Check a registration form, returning it with the CPF formatted and the
/// email normalised. Checks run in the order users see them reported.
pub fn validate(new: NewAccount) -> Result<NewAccount, AccountError> {
    if new.name.trim().is_empty() || new.email.trim().is_empty() || new.password.is_empty() {
        return Err(AccountError::MissingField);
    }
    let email = normalize_email(&new.email);
    if !validate_email(&email) {
        return Err(AccountError::InvalidEmail);
    }
    let cpf = format_cpf(&new.cpf).ok_or(AccountError::InvalidCpf)?;
    if new.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AccountError::WeakPassword);
    }
    Ok(NewAccount {
        name: new.name.trim().to_string(),
        cpf,
        email,
        ..new
    })
}
