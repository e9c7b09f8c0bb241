use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use models::user::{validate_email, validate_name, CreateUser, UpdateUser, User};

use crate::errors::ServiceError;

struct Inner {
    users: Vec<User>,
    /// High-water mark for id assignment. Only ever increases, so an id
    /// freed by a delete is never handed out again within this process.
    next_id: u64,
}

/// Authoritative in-memory collection of user records.
///
/// Insertion order is preserved. Every read-modify-write sequence
/// (uniqueness check + id assignment + append; find + patch; find +
/// remove) runs under a single write guard, which keeps the id and email
/// invariants intact under concurrent requests on a multi-threaded
/// runtime.
pub struct UserStore {
    inner: Arc<RwLock<Inner>>,
}

impl UserStore {
    /// Empty store, for tests and embedding.
    pub fn new() -> Arc<Self> {
        Self::from_records(Vec::new())
    }

    /// Store pre-loaded with the fixed startup records.
    pub fn with_seed() -> Arc<Self> {
        Self::from_records(vec![
            User {
                id: 1,
                name: "Alice".into(),
                email: "alice@example.com".into(),
            },
            User {
                id: 2,
                name: "Bob".into(),
                email: "bob@example.com".into(),
            },
            User {
                id: 3,
                name: "Charlie".into(),
                email: "charlie@example.com".into(),
            },
        ])
    }

    fn from_records(users: Vec<User>) -> Arc<Self> {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Arc::new(Self {
            inner: Arc::new(RwLock::new(Inner { users, next_id })),
        })
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    pub async fn get(&self, id: u64) -> Option<User> {
        let inner = self.inner.read().await;
        inner.users.iter().find(|u| u.id == id).cloned()
    }

    /// Exact-match email lookup; comparison is case-sensitive.
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let inner = self.inner.read().await;
        inner.users.iter().find(|u| u.email == email).cloned()
    }

    /// Validate presence, enforce email uniqueness, assign the next id and
    /// append, all inside one critical section.
    pub async fn create(&self, input: CreateUser) -> Result<User, ServiceError> {
        let name = input.name.filter(|s| !s.trim().is_empty());
        let email = input.email.filter(|s| !s.trim().is_empty());
        let (Some(name), Some(email)) = (name, email) else {
            return Err(ServiceError::Validation(
                "Name and email are required".into(),
            ));
        };

        let mut inner = self.inner.write().await;
        if inner.users.iter().any(|u| u.email == email) {
            return Err(ServiceError::Conflict("Email already exists".into()));
        }
        let id = inner.next_id;
        inner.next_id += 1;
        let user = User { id, name, email };
        inner.users.push(user.clone());
        debug!(id, "user created");
        Ok(user)
    }

    /// Apply the supplied fields to an existing record. An absent field is
    /// a no-op; a supplied empty field is rejected rather than silently
    /// ignored. Re-submitting a record's own email is not a conflict.
    pub async fn update(&self, id: u64, patch: UpdateUser) -> Result<User, ServiceError> {
        if let Some(name) = patch.name.as_deref() {
            validate_name(name)?;
        }
        if let Some(email) = patch.email.as_deref() {
            validate_email(email)?;
        }

        let mut inner = self.inner.write().await;
        if let Some(email) = patch.email.as_deref() {
            if inner.users.iter().any(|u| u.email == email && u.id != id) {
                return Err(ServiceError::Conflict("Email already exists".into()));
            }
        }
        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| ServiceError::not_found("User"))?;
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        let updated = user.clone();
        debug!(id, "user updated");
        Ok(updated)
    }

    /// Remove and return the record, if present. The freed id stays
    /// retired; `next_id` is not rolled back.
    pub async fn remove(&self, id: u64) -> Option<User> {
        let mut inner = self.inner.write().await;
        let idx = inner.users.iter().position(|u| u.id == id)?;
        let removed = inner.users.remove(idx);
        debug!(id, "user removed");
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str, email: &str) -> CreateUser {
        CreateUser {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    #[tokio::test]
    async fn seed_contains_the_fixed_records() {
        let store = UserStore::with_seed();
        let users = store.list().await;
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "Alice");
        assert_eq!(users[1].email, "bob@example.com");
        assert_eq!(users[2].name, "Charlie");
    }

    #[tokio::test]
    async fn ids_are_unique_and_strictly_increasing() -> Result<(), anyhow::Error> {
        let store = UserStore::new();
        let mut last = 0;
        for i in 0..5 {
            let user = store
                .create(create_input(&format!("U{i}"), &format!("u{i}@example.com")))
                .await?;
            assert!(user.id > last);
            last = user.id;
        }
        Ok(())
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reused() -> Result<(), anyhow::Error> {
        let store = UserStore::with_seed();
        // Remove the highest id; the next create must not reclaim it.
        assert!(store.remove(3).await.is_some());
        let user = store
            .create(create_input("Dana", "dana@example.com"))
            .await?;
        assert_eq!(user.id, 4);
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_missing_or_empty_fields() {
        let store = UserStore::new();
        let missing_email = CreateUser {
            name: Some("Dana".into()),
            email: None,
        };
        let err = store.create(missing_email).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(err.message(), "Name and email are required");

        let blank_name = create_input("   ", "dana@example.com");
        assert!(matches!(
            store.create(blank_name).await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_exact_match_only() -> Result<(), anyhow::Error> {
        let store = UserStore::with_seed();
        let dup = store
            .create(create_input("Eve", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(dup, ServiceError::Conflict(_)));
        assert_eq!(dup.message(), "Email already exists");

        // Comparison is case-sensitive, so a different casing is allowed.
        let other_case = store
            .create(create_input("Eve", "Alice@example.com"))
            .await?;
        assert_eq!(other_case.name, "Eve");
        Ok(())
    }

    #[tokio::test]
    async fn get_and_find_by_email() -> Result<(), anyhow::Error> {
        let store = UserStore::with_seed();
        assert_eq!(store.get(2).await.unwrap().name, "Bob");
        assert!(store.get(99).await.is_none());
        assert_eq!(
            store.find_by_email("charlie@example.com").await.unwrap().id,
            3
        );
        assert!(store.find_by_email("CHARLIE@example.com").await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn update_applies_only_supplied_fields() -> Result<(), anyhow::Error> {
        let store = UserStore::with_seed();

        let renamed = store
            .update(
                1,
                UpdateUser {
                    name: Some("Alicia".into()),
                    email: None,
                },
            )
            .await?;
        assert_eq!(renamed.name, "Alicia");
        assert_eq!(renamed.email, "alice@example.com");

        let readdressed = store
            .update(
                1,
                UpdateUser {
                    name: None,
                    email: Some("alicia@example.com".into()),
                },
            )
            .await?;
        assert_eq!(readdressed.name, "Alicia");
        assert_eq!(readdressed.email, "alicia@example.com");

        // Empty patch leaves the record unchanged.
        let unchanged = store.update(1, UpdateUser::default()).await?;
        assert_eq!(unchanged.name, "Alicia");
        assert_eq!(unchanged.email, "alicia@example.com");
        Ok(())
    }

    #[tokio::test]
    async fn update_own_email_is_not_a_conflict() -> Result<(), anyhow::Error> {
        let store = UserStore::with_seed();
        let same = store
            .update(
                2,
                UpdateUser {
                    name: None,
                    email: Some("bob@example.com".into()),
                },
            )
            .await?;
        assert_eq!(same.email, "bob@example.com");

        let taken = store
            .update(
                2,
                UpdateUser {
                    name: None,
                    email: Some("alice@example.com".into()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(taken, ServiceError::Conflict(_)));
        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_supplied_empty_fields() {
        let store = UserStore::with_seed();
        let err = store
            .update(
                1,
                UpdateUser {
                    name: Some("".into()),
                    email: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Name must not be empty");
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let store = UserStore::new();
        let err = store.update(7, UpdateUser::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.message(), "User not found");
    }

    #[tokio::test]
    async fn remove_returns_the_record_once() {
        let store = UserStore::with_seed();
        let removed = store.remove(2).await.unwrap();
        assert_eq!(removed.name, "Bob");
        assert!(store.get(2).await.is_none());
        assert!(store.remove(2).await.is_none());
        assert_eq!(store.list().await.len(), 2);
    }
}
