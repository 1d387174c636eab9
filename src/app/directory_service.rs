//! The directory service.
//!
//! Owns the restaurant catalogue and every ledger, all fronting one
//! [`JsonStore`]. It is the single object the transport layer talks to:
//! 1.  Queries over the catalogue (filter, paginate, filter options).
//! 2.  Favorite and review mutations through their ledgers.
//! 3.  Random picks and wheel spins over query results.
//! 4.  Profile edits and the admin inbox.

use crate::app::seed::SeedData;
use crate::domain::admin::{AdminInbox, DashboardStats};
use crate::domain::catalogue::Catalogue;
use crate::domain::error::{DirectoryError, DirectoryResult};
use crate::domain::favorites::FavoritesLedger;
use crate::domain::query::{filter_restaurants, paginate, FilterCriteria, Page};
use crate::domain::randomizer::{pick_one, reroll_distinct, Wheel, WheelSpin, DEFAULT_REROLL_RETRIES, THEME_COUNT};
use crate::domain::restaurant::Restaurant;
use crate::domain::reviews::ReviewLedger;
use crate::domain::users::UserDirectory;
use crate::infra::config::{Config, StorageBackend};
use crate::storage::{FileStore, JsonStore, KeyValueStore, MemoryStore, PostgresStore};
use rand::Rng;
use std::sync::Arc;
use tracing::{info, warn};

/// A random pick plus the background theme to show it on.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomPick {
    pub restaurant: Restaurant,
    pub theme: usize,
}

pub struct DirectoryService {
    catalogue: Catalogue,
    pub favorites: FavoritesLedger,
    pub reviews: ReviewLedger,
    pub users: UserDirectory,
    pub inbox: AdminInbox,
    page_size: usize,
}

impl DirectoryService {
    /// Loads every ledger from `store`, falling back to the seed collections.
    pub async fn open(store: Arc<dyn KeyValueStore>, seed: SeedData, page_size: usize) -> Self {
        let store = JsonStore::new(store);
        let catalogue = Catalogue::new(seed.restaurants);
        let favorites = FavoritesLedger::load(store.clone(), seed.favorites).await;
        let reviews = ReviewLedger::load(store.clone(), seed.reviews).await;
        let users = UserDirectory::load(store.clone(), seed.users).await;
        let inbox = AdminInbox::load(store, seed.restaurant_requests, seed.contact_messages).await;

        info!(
            restaurants = catalogue.len(),
            favorites = favorites.all().len(),
            reviews = reviews.all().len(),
            users = users.len(),
            "Directory loaded"
        );
        if catalogue.is_empty() {
            warn!("Catalogue is empty, restaurant queries will return nothing");
        }

        Self {
            catalogue,
            favorites,
            reviews,
            users,
            inbox,
            page_size: page_size.max(1),
        }
    }

    /// In-memory service, mostly for tests.
    pub async fn in_memory(seed: SeedData) -> Self {
        Self::open(Arc::new(MemoryStore::new()), seed, crate::domain::query::DEFAULT_PAGE_SIZE).await
    }

    /// Opens the configured store and seed fixture.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = open_store(&config.storage).await?;
        let seed = match &config.seed_path {
            Some(path) => {
                info!("Loading seed fixture from {}", path.display());
                SeedData::from_file(path).await?
            }
            None => {
                info!("No SEED_PATH set, starting with an empty catalogue");
                SeedData::default()
            }
        };
        Ok(Self::open(store, seed, config.page_size).await)
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn restaurant(&self, id: &str) -> DirectoryResult<&Restaurant> {
        self.catalogue.get(id).ok_or_else(|| DirectoryError::NotFound {
            kind: "Restaurant",
            id: id.to_string(),
        })
    }

    pub fn search(&self, criteria: &FilterCriteria) -> Vec<Restaurant> {
        filter_restaurants(self.catalogue.all(), criteria)
    }

    /// Filters then slices; `page_size` defaults to the configured size.
    pub fn search_page(&self, criteria: &FilterCriteria, page: usize, page_size: Option<usize>) -> Page<Restaurant> {
        let results = self.search(criteria);
        paginate(&results, page, page_size.unwrap_or(self.page_size))
    }

    pub fn favorites_for(&self, user_id: &str) -> Vec<Restaurant> {
        self.favorites.list_for_user(user_id, self.catalogue.all())
    }

    /// Picks one restaurant out of the filtered list and a theme different from `previous_theme`.
    pub fn pick_random<R: Rng + ?Sized>(
        &self,
        criteria: &FilterCriteria,
        previous_theme: Option<usize>,
        rng: &mut R,
    ) -> DirectoryResult<RandomPick> {
        let candidates = self.search(criteria);
        let restaurant = pick_one(&candidates, rng)?.clone();
        let theme = reroll_distinct(previous_theme, THEME_COUNT, rng, DEFAULT_REROLL_RETRIES);
        Ok(RandomPick { restaurant, theme })
    }

    /// Spins a wheel built from catalogue ids (unknown ids are dropped).
    pub fn spin<R: Rng + ?Sized>(&self, restaurant_ids: &[String], rng: &mut R) -> DirectoryResult<WheelSpin<Restaurant>> {
        let wheel = Wheel::from_items(self.catalogue.select(restaurant_ids))?;
        wheel.spin(rng)
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            total_users: self.users.len(),
            total_restaurants: self.catalogue.len(),
            total_reviews: self.reviews.all().len(),
            ..self.inbox.stats()
        }
    }
}

pub async fn open_store(backend: &StorageBackend) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    match backend {
        StorageBackend::Postgres { database_url } => {
            info!("Using Postgres key/value store");
            Ok(Arc::new(PostgresStore::connect(database_url).await?))
        }
        StorageBackend::Files { dir } => {
            info!("Using file key/value store at {}", dir.display());
            Ok(Arc::new(FileStore::open(dir.clone()).await?))
        }
    }
}
