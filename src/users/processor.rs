use crate::store::LedgerStore;
use crate::users::config::UsersProcessorConfig;
use crate::users::processor_enums::{UsersProcessorInput, UsersProcessorOutput};
use crate::utils::errors::TrackerError;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<UsersProcessorConfig, UsersProcessorOutput> for UsersProcessorInput {
    async fn process<S: LedgerStore + Send>(&self, _local_config: &mut UsersProcessorConfig, store: &mut S) -> anyhow::Result<UsersProcessorOutput> {
        match self {
            UsersProcessorInput::ResolvePrincipal(username) => {
                let user = store
                    .find_user_by_username(username)?
                    .ok_or_else(|| TrackerError::not_found(format!("User '{}'", username)))?;

                Ok(UsersProcessorOutput::ResolvePrincipal(user))
            }
            UsersProcessorInput::CreateUser(args) => {
                if args.username.trim().is_empty() {
                    return Err(TrackerError::validation("Username cannot be empty").into());
                }
                if args.credential.is_empty() {
                    return Err(TrackerError::validation("Credential cannot be empty").into());
                }

                let user = store.insert_user(args)?;
                tracing::info!(user_id = user.id, "Registered user {}", user.username);

                Ok(UsersProcessorOutput::CreateUser(user))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryLedgerStore;
    use crate::users::db_types::{CreateUser, UserRecord};

    fn create_user(username: &str) -> UsersProcessorInput {
        UsersProcessorInput::CreateUser(CreateUser {
            username: username.to_string(),
            credential: "$2b$12$opaque".to_string(),
        })
    }

    #[tokio::test]
    async fn test_resolve_registered_principal() {
        let mut store = MemoryLedgerStore::new();
        let mut config = UsersProcessorConfig::default();

        let created = match create_user("alice").process(&mut config, &mut store).await.unwrap() {
            UsersProcessorOutput::CreateUser(user) => user,
            other => panic!("unexpected output {:?}", other),
        };

        let resolved = UsersProcessorInput::ResolvePrincipal("alice".to_string())
            .process(&mut config, &mut store)
            .await
            .unwrap();

        match resolved {
            UsersProcessorOutput::ResolvePrincipal(user) => assert_eq!(user, created),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_principal_is_not_found() {
        let mut store = MemoryLedgerStore::new();
        let err = UsersProcessorInput::ResolvePrincipal("ghost".to_string())
            .process(&mut UsersProcessorConfig::default(), &mut store)
            .await
            .unwrap_err();

        assert!(matches!(err.downcast_ref::<TrackerError>(), Some(TrackerError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let mut store = MemoryLedgerStore::new();
        let mut config = UsersProcessorConfig::default();

        create_user("bob").process(&mut config, &mut store).await.unwrap();
        let err = create_user("bob").process(&mut config, &mut store).await.unwrap_err();

        assert!(matches!(err.downcast_ref::<TrackerError>(), Some(TrackerError::Validation(_))));
    }

    #[test]
    fn test_credential_is_not_serialized() {
        let user = UserRecord {
            id: 1,
            username: "carol".to_string(),
            credential: "secret".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("credential").is_none());
        assert_eq!(json["username"], "carol");
    }
}
