//! Catalog cache and local filter
//!
//! Holds the last fetched set of meals and the applied filter. The cache is
//! replaced wholesale on each successful fetch or search; a failed fetch
//! leaves it untouched. Filtering is purely local and order-preserving.

use crate::api::CatalogApi;
use crate::error::ClientResult;
use shared::models::Meal;

/// Protein threshold for the high-protein filter (grams)
pub const HIGH_PROTEIN_MIN: u32 = 30;
/// Calorie ceiling for the low-calorie filter
pub const LOW_CALORIE_MAX: u32 = 400;

/// Local catalog filter predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MealFilter {
    #[default]
    All,
    HighProtein,
    LowCalorie,
}

impl MealFilter {
    /// Parse the UI's filter name (`all` | `high-protein` | `low-calorie`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(MealFilter::All),
            "high-protein" => Some(MealFilter::HighProtein),
            "low-calorie" => Some(MealFilter::LowCalorie),
            _ => None,
        }
    }

    pub fn matches(&self, meal: &Meal) -> bool {
        match self {
            MealFilter::All => true,
            MealFilter::HighProtein => meal.protein.is_some_and(|p| p >= HIGH_PROTEIN_MIN),
            MealFilter::LowCalorie => meal.calories.is_some_and(|c| c <= LOW_CALORIE_MAX),
        }
    }
}

/// In-memory cache of the last fetched catalog plus the applied filter
#[derive(Default)]
pub struct CatalogCache {
    meals: Vec<Meal>,
    filter: MealFilter,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cache with the full catalog
    ///
    /// On failure the cache keeps its previous contents and the error is
    /// returned to the caller.
    pub async fn fetch_all(&mut self, api: &dyn CatalogApi) -> ClientResult<()> {
        let meals = api.fetch_meals().await?;
        tracing::debug!(count = meals.len(), "Catalog cache refreshed");
        self.meals = meals;
        Ok(())
    }

    /// Free-text search
    ///
    /// An empty query re-applies the current filter over the last fetched
    /// full set without a server round-trip; otherwise the server result
    /// replaces the cache.
    pub async fn search(&mut self, api: &dyn CatalogApi, query: &str) -> ClientResult<()> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        let meals = api.search_meals(query).await?;
        tracing::debug!(query = %query, count = meals.len(), "Catalog cache replaced by search");
        self.meals = meals;
        Ok(())
    }

    /// Apply a local filter; never re-fetches
    pub fn apply_filter(&mut self, filter: MealFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> MealFilter {
        self.filter
    }

    /// The filtered view, preserving server-returned relative order
    pub fn visible(&self) -> Vec<&Meal> {
        self.meals
            .iter()
            .filter(|meal| self.filter.matches(meal))
            .collect()
    }

    /// The unfiltered cached set
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use async_trait::async_trait;
    use shared::models::{MealForm, MealMutation};
    use shared::response::MessageResponse;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn meal(name: &str, protein: u32, calories: u32) -> Meal {
        Meal {
            id: name.to_string(),
            name: name.to_string(),
            price: Some(100.0),
            cuisine: None,
            ingredients: None,
            description: None,
            calories: Some(calories),
            protein: Some(protein),
            carbs: None,
            fats: None,
            image_url: None,
        }
    }

    #[derive(Default)]
    struct FakeCatalog {
        meals: Vec<Meal>,
        fail: bool,
        fetch_calls: AtomicUsize,
        search_calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogApi for FakeCatalog {
        async fn fetch_meals(&self) -> ClientResult<Vec<Meal>> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ClientError::Server {
                    status: 500,
                    message: "boom".into(),
                });
            }
            Ok(self.meals.clone())
        }

        async fn get_meal(&self, _id: &str) -> ClientResult<Meal> {
            unimplemented!()
        }

        async fn search_meals(&self, _query: &str) -> ClientResult<Vec<Meal>> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.meals.clone())
        }

        async fn create_meal(&self, _form: &MealForm) -> ClientResult<MealMutation> {
            unimplemented!()
        }

        async fn update_meal(&self, _id: &str, _form: &MealForm) -> ClientResult<MealMutation> {
            unimplemented!()
        }

        async fn delete_meal(&self, _id: &str) -> ClientResult<MessageResponse> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn high_protein_filter_preserves_order() {
        let api = FakeCatalog {
            meals: vec![meal("a", 10, 500), meal("b", 30, 500), meal("c", 45, 500)],
            ..Default::default()
        };

        let mut cache = CatalogCache::new();
        cache.fetch_all(&api).await.unwrap();
        cache.apply_filter(MealFilter::HighProtein);

        let names: Vec<&str> = cache.visible().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["b", "c"]);
    }

    #[tokio::test]
    async fn low_calorie_filter_ignores_missing_values() {
        let mut no_cal = meal("mystery", 50, 0);
        no_cal.calories = None;
        let api = FakeCatalog {
            meals: vec![meal("light", 10, 350), no_cal, meal("heavy", 10, 900)],
            ..Default::default()
        };

        let mut cache = CatalogCache::new();
        cache.fetch_all(&api).await.unwrap();
        cache.apply_filter(MealFilter::LowCalorie);

        let names: Vec<&str> = cache.visible().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["light"]);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_cache_untouched() {
        let good = FakeCatalog {
            meals: vec![meal("a", 10, 300)],
            ..Default::default()
        };
        let mut cache = CatalogCache::new();
        cache.fetch_all(&good).await.unwrap();

        let bad = FakeCatalog {
            fail: true,
            ..Default::default()
        };
        assert!(cache.fetch_all(&bad).await.is_err());
        assert_eq!(cache.meals().len(), 1);
    }

    #[tokio::test]
    async fn empty_search_skips_the_server() {
        let api = FakeCatalog {
            meals: vec![meal("a", 10, 300)],
            ..Default::default()
        };

        let mut cache = CatalogCache::new();
        cache.fetch_all(&api).await.unwrap();
        cache.search(&api, "   ").await.unwrap();

        assert_eq!(api.search_calls.load(Ordering::SeqCst), 0);
        assert_eq!(cache.meals().len(), 1);
    }

    #[test]
    fn filter_names_parse() {
        assert_eq!(MealFilter::from_name("all"), Some(MealFilter::All));
        assert_eq!(
            MealFilter::from_name("high-protein"),
            Some(MealFilter::HighProtein)
        );
        assert_eq!(
            MealFilter::from_name("low-calorie"),
            Some(MealFilter::LowCalorie)
        );
        assert_eq!(MealFilter::from_name("spicy"), None);
    }
}
