use crate::domain::restaurant::Restaurant;

/// Read-only restaurant collection supplied by the data collaborator.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    restaurants: Vec<Restaurant>,
}

impl Catalogue {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    pub fn all(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn get(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Restaurants for the given ids, in the order the ids were given. Unknown ids are skipped.
    pub fn select(&self, ids: &[String]) -> Vec<Restaurant> {
        ids.iter().filter_map(|id| self.get(id)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
