use crate::error::{AppError, AuthError};
use crate::storage::credentials::{CREDENTIAL_VAR, CredentialStore};
use crate::utils::logging::print_verbose;
use std::io::{self, Write};

/// Source of interactively entered credentials.
///
/// Injectable so tests can script input without a real terminal.
pub trait PromptSource {
    fn read_key(&mut self, prompt: &str) -> Result<String, AppError>;
}

/// Real terminal prompt. Input is read without echo since the value is a
/// secret.
pub struct TerminalPrompt;

impl PromptSource for TerminalPrompt {
    fn read_key(&mut self, prompt: &str) -> Result<String, AppError> {
        print!("{}", prompt);
        io::stdout()
            .flush()
            .map_err(|e| AuthError::PromptFailed(format!("Failed to flush stdout: {}", e)))?;

        let key = rpassword::read_password()
            .map_err(|e| AuthError::PromptFailed(e.to_string()))?;
        Ok(key.trim().to_string())
    }
}

/// Resolves the API credential: an injected key (flag or environment) wins,
/// then the credential file, then an interactive prompt whose answer is
/// persisted for next time.
pub struct CredentialResolver<'a> {
    injected_key: Option<String>,
    store: CredentialStore,
    prompt: &'a mut dyn PromptSource,
    verbose: bool,
}

impl<'a> CredentialResolver<'a> {
    pub fn new(
        injected_key: Option<String>,
        store: CredentialStore,
        prompt: &'a mut dyn PromptSource,
        verbose: bool,
    ) -> Self {
        Self {
            injected_key,
            store,
            prompt,
            verbose,
        }
    }

    pub fn resolve(&mut self) -> Result<String, AppError> {
        if let Some(key) = self.injected_key.as_ref().filter(|key| !key.is_empty()) {
            print_verbose(self.verbose, "Using API key provided via env or flag");
            return Ok(key.clone());
        }

        if let Some(key) = self.store.load()? {
            print_verbose(
                self.verbose,
                &format!("Using API key from {}", self.store.path().display()),
            );
            return Ok(key);
        }

        self.prompt_and_persist()
    }

    fn prompt_and_persist(&mut self) -> Result<String, AppError> {
        let prompt = format!(
            "{} is not set. Enter your Open Exchange Rates App ID (or 'N' to cancel): ",
            CREDENTIAL_VAR
        );

        loop {
            let entered = self.prompt.read_key(&prompt)?;

            if entered.is_empty() {
                continue;
            }
            if entered.eq_ignore_ascii_case("n") {
                return Err(AuthError::Declined.into());
            }

            self.store.save(&entered)?;
            print_verbose(
                self.verbose,
                &format!("API key saved to {}", self.store.path().display()),
            );
            return Ok(entered);
        }
    }
}
