//! [`Package`] definitions.

use common::Money;

use crate::domain::{venue, Venue};

/// Set of [`Venue`]s selected for a prospective order.
///
/// Each [`Venue`] is present at most once (by its [`venue::Id`]), and the
/// insertion order is preserved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Package {
    /// [`Venue`]s in this [`Package`].
    venues: Vec<Venue>,
}

impl Package {
    /// Creates a new empty [`Package`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the provided [`Venue`] to this [`Package`].
    ///
    /// Returns `false` if a [`Venue`] with the same [`venue::Id`] is already
    /// present, leaving this [`Package`] untouched.
    pub fn add(&mut self, venue: Venue) -> bool {
        if self.contains(venue.id) {
            return false;
        }
        self.venues.push(venue);
        true
    }

    /// Removes the [`Venue`] with the provided [`venue::Id`] from this
    /// [`Package`], returning it if it was present.
    pub fn remove(&mut self, id: venue::Id) -> Option<Venue> {
        let pos = self.venues.iter().position(|v| v.id == id)?;
        Some(self.venues.remove(pos))
    }

    /// Removes the provided [`Venue`] if it's present, or adds it otherwise.
    ///
    /// Returns whether the [`Venue`] is in this [`Package`] afterwards.
    pub fn toggle(&mut self, venue: Venue) -> bool {
        if self.remove(venue.id).is_some() {
            return false;
        }
        self.add(venue)
    }

    /// Checks whether a [`Venue`] with the provided [`venue::Id`] is in this
    /// [`Package`].
    #[must_use]
    pub fn contains(&self, id: venue::Id) -> bool {
        self.venues.iter().any(|v| v.id == id)
    }

    /// Returns total monthly price of all the [`Venue`]s in this [`Package`].
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.venues.iter().map(|v| v.price).sum()
    }

    /// Returns [`Venue`]s of this [`Package`] in the order they were added.
    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Returns number of [`Venue`]s in this [`Package`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    /// Checks whether this [`Package`] has no [`Venue`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Removes all the [`Venue`]s from this [`Package`], returning them.
    pub fn clear(&mut self) -> Vec<Venue> {
        std::mem::take(&mut self.venues)
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::domain::venue::{self, spec::venue};

    use super::Package;

    fn ids(package: &Package) -> Vec<venue::Id> {
        package.venues().iter().map(|v| v.id).collect()
    }

    #[test]
    fn add_is_idempotent() {
        let v = venue(1, "Билборд на Невском", "Невский", "Билборды", 45000, None);
        let mut package = Package::new();

        assert!(package.add(v.clone()));
        assert!(!package.add(v.clone()));

        assert_eq!(package.len(), 1);
        assert_eq!(package.total_price(), Money::rubles(45000));
    }

    #[test]
    fn remove_restores_previous_set() {
        let a = venue(1, "Билборд", "Невский", "Билборды", 45000, None);
        let b = venue(2, "Лифты", "ЖК Солнечный", "Лифты", 28000, None);
        let mut package = Package::new();
        _ = package.add(a);
        let before = ids(&package);

        _ = package.add(b.clone());
        assert_eq!(package.remove(b.id), Some(b));

        assert_eq!(ids(&package), before);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut package = Package::new();
        _ = package.add(venue(1, "Билборд", "Невский", "Билборды", 1, None));

        assert_eq!(package.remove(venue::Id::from(42)), None);
        assert_eq!(package.len(), 1);
    }

    #[test]
    fn total_follows_every_mutation() {
        let venues = [
            venue(1, "A", "A", "Билборды", 45000, None),
            venue(2, "B", "B", "Лифты", 28000, None),
            venue(3, "C", "C", "Автобусы", 65000, None),
        ];
        let mut package = Package::new();

        let steps: [(bool, usize); 7] = [
            (true, 0),
            (true, 1),
            (true, 0),
            (true, 2),
            (false, 0),
            (false, 1),
            (true, 1),
        ];
        for (add, i) in steps {
            if add {
                _ = package.add(venues[i].clone());
            } else {
                _ = package.remove(venues[i].id);
            }
            let expected: Money = package.venues().iter().map(|v| v.price).sum();
            assert_eq!(package.total_price(), expected);
        }
        assert_eq!(package.total_price(), Money::rubles(28000 + 65000));
        assert_eq!(ids(&package), [venue::Id::from(3), venue::Id::from(2)]);
    }

    #[test]
    fn add_two_then_remove_one() {
        let mut package = Package::new();
        _ = package.add(venue(1, "Билборд", "Невский", "Билборды", 45000, None));
        _ = package.add(venue(2, "Лифты", "ЖК", "Лифты", 28000, None));

        assert_eq!(package.total_price(), Money::rubles(73000));
        assert!(package.contains(venue::Id::from(1)));

        _ = package.remove(venue::Id::from(1));

        assert_eq!(package.total_price(), Money::rubles(28000));
        assert!(!package.contains(venue::Id::from(1)));
    }

    #[test]
    fn toggle_flips_membership() {
        let v = venue(7, "Билборд", "Невский", "Билборды", 100, None);
        let mut package = Package::new();

        assert!(package.toggle(v.clone()));
        assert!(package.contains(v.id));
        assert!(!package.toggle(v.clone()));
        assert!(package.is_empty());
    }

    #[test]
    fn clear_empties_package() {
        let mut package = Package::new();
        _ = package.add(venue(1, "A", "A", "Билборды", 10, None));
        _ = package.add(venue(2, "B", "B", "Лифты", 20, None));

        assert_eq!(package.clear().len(), 2);
        assert!(package.is_empty());
        assert_eq!(package.total_price(), Money::ZERO);
    }
}
