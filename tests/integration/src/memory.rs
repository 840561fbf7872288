//! In-memory store double
//!
//! Implements the full store contract over a `BTreeMap` so the contract
//! tests can run without a database. Observable behavior mirrors the
//! PostgreSQL repository: fresh identity on every create, the same write
//! guards, ascending identity order, and silent omission of missing ids.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use amc_core::{DomainError, Entity, EntityId, EntityStore, RepoResult};

/// Map-backed store for one entity kind
pub struct MemoryStore<E> {
    rows: Mutex<BTreeMap<i64, E>>,
    next_id: AtomicI64,
}

impl<E> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for MemoryStore<E> {
    async fn create(&self, entity: &mut E) -> RepoResult<()> {
        if entity.is_blank() {
            return Err(DomainError::BlankEntity(E::KIND));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entity.set_id(Some(EntityId::new(id)));
        self.rows.lock().insert(id, entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &E) -> RepoResult<()> {
        if entity.is_blank() {
            return Err(DomainError::BlankEntity(E::KIND));
        }
        let id = entity.id().ok_or(DomainError::NotPersisted(E::KIND))?;

        let mut rows = self.rows.lock();
        match rows.get_mut(&id.into_inner()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound { kind: E::KIND, id }),
        }
    }

    async fn delete(&self, entity: &mut E) -> RepoResult<()> {
        let Some(id) = entity.id() else {
            return Ok(());
        };

        // Removing an already-removed row is not an error
        self.rows.lock().remove(&id.into_inner());
        entity.set_id(None);
        Ok(())
    }

    async fn select(&self, ids: &[EntityId]) -> RepoResult<Vec<E>> {
        let rows = self.rows.lock();
        if ids.is_empty() {
            return Ok(rows.values().cloned().collect());
        }

        // BTreeMap iteration already yields ascending identity order
        Ok(rows
            .iter()
            .filter(|(id, _)| ids.iter().any(|want| want.into_inner() == **id))
            .map(|(_, entity)| entity.clone())
            .collect())
    }

    async fn exists(&self, id: EntityId) -> RepoResult<bool> {
        Ok(self.rows.lock().contains_key(&id.into_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amc_core::User;

    #[tokio::test]
    async fn test_create_assigns_ascending_identities() {
        let store = MemoryStore::new();

        let mut a = User::new("a".to_string(), "a@example.com".to_string());
        let mut b = User::new("b".to_string(), "b@example.com".to_string());
        store.create(&mut a).await.unwrap();
        store.create(&mut b).await.unwrap();

        assert!(a.id.unwrap() < b.id.unwrap());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_create_replaces_stale_identity() {
        let store = MemoryStore::new();

        let mut user = User::new("a".to_string(), "a@example.com".to_string());
        user.id = Some(EntityId::new(999));
        store.create(&mut user).await.unwrap();

        assert_ne!(user.id, Some(EntityId::new(999)));
        assert!(store.exists(user.id.unwrap()).await.unwrap());
    }
}
