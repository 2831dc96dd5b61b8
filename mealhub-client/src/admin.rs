//! Admin catalog manager
//!
//! Create/update/delete against the meal resource, gated on an admin
//! identity. Every successful mutation refreshes the catalog cache from the
//! server; there is no optimistic local patch, so the cached and
//! authoritative catalogs cannot drift.

use crate::api::{CatalogApi, OrderApi};
use crate::catalog::CatalogCache;
use crate::error::{ClientError, ClientResult};
use crate::session::IdentityStore;
use shared::models::{MealForm, MealMutation, OrderRecord};
use shared::response::MessageResponse;

/// Admin operations over the catalog and order list
pub struct AdminCatalogManager;

impl AdminCatalogManager {
    fn require_admin(identity: &IdentityStore) -> ClientResult<()> {
        if identity.admin().is_none() {
            return Err(ClientError::Unauthenticated);
        }
        Ok(())
    }

    /// Create a meal, then refresh the cache
    pub async fn create(
        identity: &IdentityStore,
        api: &dyn CatalogApi,
        cache: &mut CatalogCache,
        form: &MealForm,
    ) -> ClientResult<MealMutation> {
        Self::require_admin(identity)?;
        let created = api.create_meal(form).await?;
        tracing::info!(meal = %form.name, "Meal created");
        cache.fetch_all(api).await?;
        Ok(created)
    }

    /// Update a meal, then refresh the cache
    ///
    /// `form.image` left as `None` keeps the meal's existing image.
    pub async fn update(
        identity: &IdentityStore,
        api: &dyn CatalogApi,
        cache: &mut CatalogCache,
        id: &str,
        form: &MealForm,
    ) -> ClientResult<MealMutation> {
        Self::require_admin(identity)?;
        let updated = api.update_meal(id, form).await?;
        tracing::info!(meal_id = %id, "Meal updated");
        cache.fetch_all(api).await?;
        Ok(updated)
    }

    /// Delete a meal, then refresh the cache
    pub async fn delete(
        identity: &IdentityStore,
        api: &dyn CatalogApi,
        cache: &mut CatalogCache,
        id: &str,
    ) -> ClientResult<MessageResponse> {
        Self::require_admin(identity)?;
        let deleted = api.delete_meal(id).await?;
        tracing::info!(meal_id = %id, "Meal deleted");
        cache.fetch_all(api).await?;
        Ok(deleted)
    }

    /// All placed orders, for the dashboard
    pub async fn list_orders(
        identity: &IdentityStore,
        api: &dyn OrderApi,
    ) -> ClientResult<Vec<OrderRecord>> {
        Self::require_admin(identity)?;
        api.list_orders().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionIdentity;
    use crate::storage::MemorySession;
    use async_trait::async_trait;
    use shared::models::user::AdminInfo;
    use shared::models::Meal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeCatalog {
        fetch_calls: AtomicUsize,
        mutation_calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogApi for FakeCatalog {
        async fn fetch_meals(&self) -> ClientResult<Vec<Meal>> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn get_meal(&self, _id: &str) -> ClientResult<Meal> {
            unimplemented!()
        }

        async fn search_meals(&self, _query: &str) -> ClientResult<Vec<Meal>> {
            unimplemented!()
        }

        async fn create_meal(&self, _form: &MealForm) -> ClientResult<MealMutation> {
            self.mutation_calls.fetch_add(1, Ordering::SeqCst);
            Ok(MealMutation {
                message: "Meal added successfully".into(),
                meal: None,
                image_url: None,
            })
        }

        async fn update_meal(&self, _id: &str, _form: &MealForm) -> ClientResult<MealMutation> {
            self.mutation_calls.fetch_add(1, Ordering::SeqCst);
            Ok(MealMutation {
                message: "Meal updated successfully".into(),
                meal: None,
                image_url: None,
            })
        }

        async fn delete_meal(&self, _id: &str) -> ClientResult<MessageResponse> {
            self.mutation_calls.fetch_add(1, Ordering::SeqCst);
            Ok(MessageResponse {
                message: "Meal deleted successfully".into(),
            })
        }
    }

    fn admin_identity() -> IdentityStore {
        let mut identity = IdentityStore::load(Arc::new(MemorySession::new()));
        identity.login(SessionIdentity::Admin(AdminInfo {
            id: None,
            name: None,
            email: "admin@example.com".into(),
            phone: None,
            role: "admin".into(),
        }));
        identity
    }

    fn form() -> MealForm {
        MealForm {
            name: "Paneer Tikka".into(),
            ingredients: "paneer, spices".into(),
            calories: 320,
            protein: 24,
            carbs: 12,
            fats: 18,
            price: 180.0,
            cuisine: Some("Indian".into()),
            image: None,
        }
    }

    #[tokio::test]
    async fn every_mutation_refreshes_the_cache() {
        let identity = admin_identity();
        let api = FakeCatalog::default();
        let mut cache = CatalogCache::new();

        AdminCatalogManager::create(&identity, &api, &mut cache, &form())
            .await
            .unwrap();
        AdminCatalogManager::update(&identity, &api, &mut cache, "m1", &form())
            .await
            .unwrap();
        AdminCatalogManager::delete(&identity, &api, &mut cache, "m1")
            .await
            .unwrap();

        assert_eq!(api.mutation_calls.load(Ordering::SeqCst), 3);
        assert_eq!(api.fetch_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn non_admin_is_rejected_before_the_network() {
        let identity = IdentityStore::load(Arc::new(MemorySession::new()));
        let api = FakeCatalog::default();
        let mut cache = CatalogCache::new();

        let err = AdminCatalogManager::create(&identity, &api, &mut cache, &form())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Unauthenticated));
        assert_eq!(api.mutation_calls.load(Ordering::SeqCst), 0);
    }
}
