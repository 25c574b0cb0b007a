//! Menu catalog service with cached list reads.
//!
//! Catalog listings are the hottest read path and change rarely, so the
//! list-style queries go through short-lived in-memory caches. Every
//! catalog mutation invalidates both caches wholesale.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use comanda_core::error::AppError;
use comanda_core::result::AppResult;
use comanda_database::repositories::category::CategoryRepository;
use comanda_database::repositories::product::ProductRepository;
use comanda_entity::category::{Category, NewCategory};
use comanda_entity::product::{NewProduct, Product};

/// How long cached catalog listings stay fresh.
const CACHE_TTL: Duration = Duration::from_secs(60);

/// Upper bound on distinct cached listing keys.
const CACHE_CAPACITY: u64 = 64;

/// Catalog reads and writes for products and categories.
#[derive(Clone)]
pub struct CatalogService {
    products: Arc<ProductRepository>,
    categories: Arc<CategoryRepository>,
    product_lists: Cache<String, Arc<Vec<Product>>>,
    category_lists: Cache<String, Arc<Vec<Category>>>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(products: Arc<ProductRepository>, categories: Arc<CategoryRepository>) -> Self {
        Self {
            products,
            categories,
            product_lists: Cache::builder()
                .time_to_live(CACHE_TTL)
                .max_capacity(CACHE_CAPACITY)
                .build(),
            category_lists: Cache::builder()
                .time_to_live(CACHE_TTL)
                .max_capacity(CACHE_CAPACITY)
                .build(),
        }
    }

    // ── Products ─────────────────────────────────────────────

    /// All products.
    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        let repo = Arc::clone(&self.products);
        self.cached(&self.product_lists, "all", async move {
            repo.find_all().await
        })
        .await
        .map(|list| list.as_ref().clone())
    }

    /// Active products only.
    pub async fn active_products(&self) -> AppResult<Vec<Product>> {
        let repo = Arc::clone(&self.products);
        self.cached(&self.product_lists, "active", async move {
            repo.find_active().await
        })
        .await
        .map(|list| list.as_ref().clone())
    }

    /// Featured products.
    pub async fn featured_products(&self) -> AppResult<Vec<Product>> {
        let repo = Arc::clone(&self.products);
        self.cached(&self.product_lists, "featured", async move {
            repo.find_featured().await
        })
        .await
        .map(|list| list.as_ref().clone())
    }

    /// Active products in a category.
    pub async fn products_by_category(&self, category_id: i64) -> AppResult<Vec<Product>> {
        let repo = Arc::clone(&self.products);
        self.cached(
            &self.product_lists,
            &format!("category:{category_id}"),
            async move { repo.find_by_category(category_id).await },
        )
        .await
        .map(|list| list.as_ref().clone())
    }

    /// Name search; uncached.
    pub async fn search_products(&self, name: &str) -> AppResult<Vec<Product>> {
        self.products.search_by_name(name).await
    }

    /// One product by id.
    pub async fn get_product(&self, id: i64) -> AppResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
    }

    /// Creates a product after checking its category exists.
    pub async fn create_product(&self, data: &NewProduct) -> AppResult<Product> {
        self.require_category(data.category_id).await?;
        let product = self.products.create(data).await?;
        self.invalidate();
        Ok(product)
    }

    /// Updates a product after checking the target category exists.
    pub async fn update_product(&self, id: i64, data: &NewProduct) -> AppResult<Product> {
        self.require_category(data.category_id).await?;
        let product = self.products.update(id, data).await?;
        self.invalidate();
        Ok(product)
    }

    /// Marks a product inactive.
    pub async fn deactivate_product(&self, id: i64) -> AppResult<Product> {
        let product = self.products.deactivate(id).await?;
        self.invalidate();
        Ok(product)
    }

    /// Deletes a product.
    pub async fn delete_product(&self, id: i64) -> AppResult<()> {
        self.products.delete(id).await?;
        self.invalidate();
        Ok(())
    }

    // ── Categories ───────────────────────────────────────────

    /// All categories.
    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let repo = Arc::clone(&self.categories);
        self.cached(&self.category_lists, "all", async move {
            repo.find_all().await
        })
        .await
        .map(|list| list.as_ref().clone())
    }

    /// Active categories only.
    pub async fn active_categories(&self) -> AppResult<Vec<Category>> {
        let repo = Arc::clone(&self.categories);
        self.cached(&self.category_lists, "active", async move {
            repo.find_active().await
        })
        .await
        .map(|list| list.as_ref().clone())
    }

    /// Name search; uncached.
    pub async fn search_categories(&self, name: &str) -> AppResult<Vec<Category>> {
        self.categories.search_by_name(name).await
    }

    /// One category by id.
    pub async fn get_category(&self, id: i64) -> AppResult<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))
    }

    /// Creates a category.
    pub async fn create_category(&self, data: &NewCategory) -> AppResult<Category> {
        let category = self.categories.create(data).await?;
        self.invalidate();
        Ok(category)
    }

    /// Updates a category.
    pub async fn update_category(&self, id: i64, data: &NewCategory) -> AppResult<Category> {
        let category = self.categories.update(id, data).await?;
        self.invalidate();
        Ok(category)
    }

    /// Marks a category inactive.
    pub async fn deactivate_category(&self, id: i64) -> AppResult<Category> {
        let category = self.categories.deactivate(id).await?;
        self.invalidate();
        Ok(category)
    }

    /// Deletes a category.
    pub async fn delete_category(&self, id: i64) -> AppResult<()> {
        self.categories.delete(id).await?;
        self.invalidate();
        Ok(())
    }

    // ── Internals ────────────────────────────────────────────

    async fn cached<T>(
        &self,
        cache: &Cache<String, Arc<Vec<T>>>,
        key: &str,
        load: impl Future<Output = AppResult<Vec<T>>>,
    ) -> AppResult<Arc<Vec<T>>>
    where
        T: Clone + Send + Sync + 'static,
    {
        cache
            .try_get_with(key.to_string(), async move { load.await.map(Arc::new) })
            .await
            .map_err(|e: Arc<AppError>| (*e).clone())
    }

    async fn require_category(&self, category_id: i64) -> AppResult<()> {
        self.categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {category_id} not found")))?;
        Ok(())
    }

    fn invalidate(&self) {
        debug!("Invalidating catalog caches");
        self.product_lists.invalidate_all();
        self.category_lists.invalidate_all();
    }
}
