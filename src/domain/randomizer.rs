//! Random restaurant selection: single picks, cosmetic theme re-rolls and the wheel.
//!
//! All functions take the RNG by reference so callers can pass a seeded RNG.

use crate::domain::error::{DirectoryError, DirectoryResult};
use crate::domain::restaurant::Restaurant;
use rand::Rng;

pub const MAX_WHEEL_ITEMS: usize = 12;
pub const MIN_WHEEL_ITEMS: usize = 2;

/// Number of background themes the result screen cycles through.
pub const THEME_COUNT: usize = 5;
pub const DEFAULT_REROLL_RETRIES: usize = 8;

/// Uniformly picks one candidate.
pub fn pick_one<'a, T, R: Rng + ?Sized>(candidates: &'a [T], rng: &mut R) -> DirectoryResult<&'a T> {
    if candidates.is_empty() {
        return Err(DirectoryError::EmptyInput);
    }
    Ok(&candidates[rng.gen_range(0..candidates.len())])
}

/// Rolls an index in `[0, domain_len)` that differs from `previous` when possible.
///
/// Gives up after `max_retries` rolls and returns whatever came last. A domain of
/// one value always yields 0.
pub fn reroll_distinct<R: Rng + ?Sized>(
    previous: Option<usize>,
    domain_len: usize,
    rng: &mut R,
    max_retries: usize,
) -> usize {
    if domain_len <= 1 {
        return 0;
    }
    let mut next = rng.gen_range(0..domain_len);
    for _ in 0..max_retries {
        if Some(next) != previous {
            break;
        }
        next = rng.gen_range(0..domain_len);
    }
    next
}

/// Outcome of a wheel spin. The caller renders the rotation; only the index is decided here.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSpin<T> {
    pub winner_index: usize,
    pub candidates: Vec<T>,
}

impl<T> WheelSpin<T> {
    pub fn winner(&self) -> &T {
        &self.candidates[self.winner_index]
    }
}

/// Uniform pick over the wheel candidates. Size bounds are the caller's concern.
pub fn spin_wheel<T: Clone, R: Rng + ?Sized>(candidates: &[T], rng: &mut R) -> DirectoryResult<WheelSpin<T>> {
    if candidates.is_empty() {
        return Err(DirectoryError::EmptyInput);
    }
    Ok(WheelSpin {
        winner_index: rng.gen_range(0..candidates.len()),
        candidates: candidates.to_vec(),
    })
}

/// User-curated wheel of at most [`MAX_WHEEL_ITEMS`] restaurants.
#[derive(Debug, Clone, Default)]
pub struct Wheel {
    items: Vec<Restaurant>,
}

impl Wheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a wheel from a list, rejecting it when it exceeds the bound.
    /// Duplicate ids are kept once.
    pub fn from_items(items: Vec<Restaurant>) -> DirectoryResult<Self> {
        let mut wheel = Self::new();
        for item in items {
            if !wheel.contains(&item.id) {
                wheel.push(item)?;
            }
        }
        Ok(wheel)
    }

    /// Adds the restaurant, or removes it if it is already on the wheel.
    /// Returns `true` when the restaurant is on the wheel afterwards.
    pub fn toggle(&mut self, restaurant: Restaurant) -> DirectoryResult<bool> {
        if let Some(index) = self.items.iter().position(|r| r.id == restaurant.id) {
            self.items.remove(index);
            return Ok(false);
        }
        self.push(restaurant)?;
        Ok(true)
    }

    pub fn contains(&self, restaurant_id: &str) -> bool {
        self.items.iter().any(|r| r.id == restaurant_id)
    }

    pub fn items(&self) -> &[Restaurant] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> DirectoryResult<WheelSpin<Restaurant>> {
        if self.items.len() < MIN_WHEEL_ITEMS {
            return Err(DirectoryError::WheelTooSmall {
                min: MIN_WHEEL_ITEMS,
                got: self.items.len(),
            });
        }
        spin_wheel(&self.items, rng)
    }

    fn push(&mut self, restaurant: Restaurant) -> DirectoryResult<()> {
        if self.items.len() >= MAX_WHEEL_ITEMS {
            return Err(DirectoryError::WheelFull {
                max: MAX_WHEEL_ITEMS,
            });
        }
        self.items.push(restaurant);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::restaurant::{BudgetRange, Side};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn restaurant(id: usize) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: format!("Stall {}", id),
            cuisine: "Silog".to_string(),
            rating: 4.0,
            location: "Food court".to_string(),
            budget_range: BudgetRange::Under50,
            kind: None,
            payment_mode: None,
            sides: Side::GateSix,
            profile_image: None,
            menu_images: None,
        }
    }

    #[test]
    fn pick_one_on_empty_is_an_error() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty: Vec<u32> = vec![];
        assert!(matches!(pick_one(&empty, &mut rng), Err(DirectoryError::EmptyInput)));
    }

    #[test]
    fn pick_one_on_singleton_returns_it() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(*pick_one(&["x"], &mut rng).unwrap(), "x");
        }
    }

    #[test]
    fn pick_one_reaches_every_candidate() {
        let mut rng = StdRng::seed_from_u64(42);
        let candidates = [0usize, 1, 2, 3];
        let mut hits = [0usize; 4];
        for _ in 0..400 {
            hits[*pick_one(&candidates, &mut rng).unwrap()] += 1;
        }
        assert!(hits.iter().all(|&h| h > 0));
    }

    #[test]
    fn reroll_avoids_previous_value() {
        let mut rng = StdRng::seed_from_u64(3);
        for previous in 0..THEME_COUNT {
            for _ in 0..20 {
                let next = reroll_distinct(Some(previous), THEME_COUNT, &mut rng, 64);
                assert_ne!(next, previous);
                assert!(next < THEME_COUNT);
            }
        }
    }

    #[test]
    fn reroll_terminates_on_singleton_domain() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(reroll_distinct(Some(0), 1, &mut rng, DEFAULT_REROLL_RETRIES), 0);
        assert_eq!(reroll_distinct(None, 0, &mut rng, DEFAULT_REROLL_RETRIES), 0);
    }

    #[test]
    fn spin_wheel_reports_winner_with_candidates() {
        let mut rng = StdRng::seed_from_u64(11);
        let spin = spin_wheel(&["a", "b", "c"], &mut rng).unwrap();
        assert!(spin.winner_index < 3);
        assert_eq!(spin.candidates, vec!["a", "b", "c"]);
        assert_eq!(*spin.winner(), spin.candidates[spin.winner_index]);
    }

    #[test]
    fn wheel_rejects_thirteenth_item() {
        let mut wheel = Wheel::new();
        for id in 0..MAX_WHEEL_ITEMS {
            assert!(wheel.toggle(restaurant(id)).unwrap());
        }
        assert!(matches!(
            wheel.toggle(restaurant(99)),
            Err(DirectoryError::WheelFull { max: MAX_WHEEL_ITEMS })
        ));
        // Removing still works when full.
        assert!(!wheel.toggle(restaurant(0)).unwrap());
        assert_eq!(wheel.len(), MAX_WHEEL_ITEMS - 1);
    }

    #[test]
    fn wheel_needs_two_items_to_spin() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut wheel = Wheel::new();
        wheel.toggle(restaurant(1)).unwrap();
        assert!(matches!(
            wheel.spin(&mut rng),
            Err(DirectoryError::WheelTooSmall { min: 2, got: 1 })
        ));

        wheel.toggle(restaurant(2)).unwrap();
        let spin = wheel.spin(&mut rng).unwrap();
        assert!(wheel.contains(&spin.winner().id));
    }

    #[test]
    fn from_items_dedups_and_bounds() {
        let wheel = Wheel::from_items(vec![restaurant(1), restaurant(1), restaurant(2)]).unwrap();
        assert_eq!(wheel.len(), 2);

        let too_many = (0..13).map(restaurant).collect();
        assert!(Wheel::from_items(too_many).is_err());
    }
}
