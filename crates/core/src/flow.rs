//! Sign-up orchestration
//!
//! A submission first checks the identity endpoint with the supplied
//! credentials. A returning user whose credentials match gets a token
//! straight away; everyone else falls through to a single registration
//! call. The auth check never fails loudly, registration failures surface to
//! the user as a banner.

use crate::error::{FlowError, IdentityError, StorageError};
use crate::types::{AuthResult, RegistrationInput};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Token on success, banner-ready error otherwise
pub type FlowOutcome = Result<String, FlowError>;

/// Remote identity endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait IdentityApi {
    /// Look for an existing account. Any failure yields [`AuthResult::failed`].
    async fn check_auth(&self, input: &RegistrationInput) -> AuthResult;

    /// Create a new account
    async fn register_user(&self, input: &RegistrationInput) -> Result<AuthResult, IdentityError>;
}

/// Persistent home of the session token
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
}

/// Token saved by an earlier visit, ignoring empty values
pub fn existing_token<S: TokenStore + ?Sized>(store: &S) -> Option<String> {
    store.load().filter(|t| !t.is_empty())
}

pub struct SignupFlow<A, S> {
    api: A,
    store: S,
}

impl<A: IdentityApi, S: TokenStore> SignupFlow<A, S> {
    pub const fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    /// Run one submission: check auth, then register if that gave no token
    pub async fn submit(&self, input: &RegistrationInput) -> FlowOutcome {
        debug!(email = %input.email, "Checking for an existing account");
        if let Some(token) = self.api.check_auth(input).await.into_token() {
            info!("Existing account matched");
            return Ok(self.persist(token));
        }

        debug!("No matching account, registering");
        match self.api.register_user(input).await {
            Ok(result) => match result.into_token() {
                Some(token) => {
                    info!("Registration succeeded");
                    Ok(self.persist(token))
                }
                None => {
                    warn!("Registration response carried no token");
                    Err(FlowError::RegistrationFailed)
                }
            },
            Err(err) => {
                warn!(error = %err, "Registration failed");
                Err(err.into())
            }
        }
    }

    fn persist(&self, token: String) -> String {
        if let Err(e) = self.store.save(&token) {
            warn!(error = %e, "Failed to persist session token");
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::always;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn input() -> RegistrationInput {
        RegistrationInput::new("user@domain.tld", "validpass1")
    }

    /// Clones share the same slot
    #[derive(Clone, Default)]
    struct MemoryTokenStore {
        slot: Rc<RefCell<Option<String>>>,
    }

    impl MemoryTokenStore {
        fn new() -> Self {
            Self::default()
        }
    }

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<String> {
            self.slot.borrow().clone()
        }

        fn save(&self, token: &str) -> Result<(), StorageError> {
            *self.slot.borrow_mut() = Some(token.to_string());
            Ok(())
        }
    }

    struct FailingStore;

    impl TokenStore for FailingStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&self, _token: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[tokio::test]
    async fn test_auth_check_token_skips_registration() {
        let mut api = MockIdentityApi::new();
        api.expect_check_auth()
            .times(1)
            .returning(|_| AuthResult::succeeded(Some("existing".into())));
        api.expect_register_user().never();

        let store = MemoryTokenStore::new();
        let flow = SignupFlow::new(api, store.clone());

        assert_eq!(flow.submit(&input()).await, Ok("existing".to_string()));
        assert_eq!(store.load().as_deref(), Some("existing"));
    }

    #[tokio::test]
    async fn test_soft_failed_auth_check_registers_exactly_once() {
        let mut api = MockIdentityApi::new();
        api.expect_check_auth()
            .times(1)
            .returning(|_| AuthResult::failed());
        api.expect_register_user()
            .with(always())
            .times(1)
            .returning(|_| Ok(AuthResult::succeeded(Some("fresh".into()))));

        let store = MemoryTokenStore::new();
        let flow = SignupFlow::new(api, store.clone());

        assert_eq!(flow.submit(&input()).await, Ok("fresh".to_string()));
        assert_eq!(store.load().as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_auth_check_without_token_falls_through() {
        let mut api = MockIdentityApi::new();
        api.expect_check_auth()
            .times(1)
            .returning(|_| AuthResult::succeeded(None));
        api.expect_register_user()
            .times(1)
            .returning(|_| Ok(AuthResult::succeeded(Some("fresh".into()))));

        let flow = SignupFlow::new(api, MemoryTokenStore::new());
        assert!(flow.submit(&input()).await.is_ok());
    }

    #[tokio::test]
    async fn test_registration_without_token_fails() {
        let mut api = MockIdentityApi::new();
        api.expect_check_auth().returning(|_| AuthResult::failed());
        api.expect_register_user()
            .times(1)
            .returning(|_| Ok(AuthResult::succeeded(None)));

        let store = MemoryTokenStore::new();
        let flow = SignupFlow::new(api, store.clone());

        assert_eq!(
            flow.submit(&input()).await,
            Err(FlowError::RegistrationFailed)
        );
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_registration_errors_map_to_banners() {
        let mut api = MockIdentityApi::new();
        api.expect_check_auth().returning(|_| AuthResult::failed());
        api.expect_register_user()
            .times(1)
            .returning(|_| Err(IdentityError::Status { status: 409 }));
        let flow = SignupFlow::new(api, MemoryTokenStore::new());
        assert_eq!(
            flow.submit(&input()).await,
            Err(FlowError::RegistrationFailed)
        );

        let mut api = MockIdentityApi::new();
        api.expect_check_auth().returning(|_| AuthResult::failed());
        api.expect_register_user()
            .times(1)
            .returning(|_| Err(IdentityError::Network("offline".into())));
        let flow = SignupFlow::new(api, MemoryTokenStore::new());
        assert_eq!(flow.submit(&input()).await, Err(FlowError::Network));
    }

    #[tokio::test]
    async fn test_storage_failure_does_not_block_success() {
        let mut api = MockIdentityApi::new();
        api.expect_check_auth()
            .returning(|_| AuthResult::succeeded(Some("tok".into())));

        let flow = SignupFlow::new(api, FailingStore);
        assert_eq!(flow.submit(&input()).await, Ok("tok".to_string()));
    }

    #[test]
    fn test_existing_token_ignores_empty_value() {
        let store = MemoryTokenStore::new();
        assert!(existing_token(&store).is_none());

        store.save("").unwrap();
        assert!(existing_token(&store).is_none());

        store.save("saved").unwrap();
        assert_eq!(existing_token(&store).as_deref(), Some("saved"));
    }
}
