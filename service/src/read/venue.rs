//! [`Venue`]-related read definitions.

#[cfg(doc)]
use crate::domain::{venue, Venue};

/// Selector of the [`venue::Id`] to assign to the next published [`Venue`].
#[derive(Clone, Copy, Debug)]
pub struct NextId;

pub mod list {
    //! [`Venue`] list definitions.

    use std::{fmt, str::FromStr};

    use common::{Date, Money};

    use crate::domain::{venue, Venue};

    /// Criteria narrowing a list of [`Venue`]s.
    ///
    /// [`Criteria::default()`] matches every [`Venue`].
    #[derive(Clone, Debug, Default)]
    pub struct Criteria {
        /// [`CategoryFilter`] to match [`Venue::category`] against.
        pub category: CategoryFilter,

        /// [`SearchQuery`] to look for in [`Venue`] texts.
        pub search: SearchQuery,

        /// Lowest acceptable [`Venue::price`].
        pub price_min: Money,

        /// Highest acceptable [`Venue::price`], if bounded.
        pub price_max: Option<Money>,

        /// Day the [`Venue`] must still be available on, if any.
        pub date_from: Option<Date>,

        /// Day the [`Venue`] must already be available on, if any.
        pub date_to: Option<Date>,
    }

    impl Criteria {
        /// Checks whether the provided [`Venue`] satisfies all these
        /// [`Criteria`].
        #[must_use]
        pub fn matches(&self, venue: &Venue) -> bool {
            self.category.matches(&venue.category)
                && self.search.matches(venue)
                && self.matches_price(venue.price)
                && self.matches_dates(venue.availability.as_ref())
        }

        /// Checks whether the provided `price` is within the range of these
        /// [`Criteria`].
        fn matches_price(&self, price: Money) -> bool {
            price >= self.price_min
                && self.price_max.map_or(true, |max| price <= max)
        }

        /// Checks whether the provided [`venue::Availability`] overlaps the
        /// dates of these [`Criteria`].
        ///
        /// [`Venue`]s without an [`venue::Availability`] are always
        /// available.
        fn matches_dates(&self, availability: Option<&venue::Availability>) -> bool {
            let Some(availability) = availability else {
                return true;
            };
            self.date_from.map_or(true, |from| availability.end() >= from)
                && self.date_to.map_or(true, |to| availability.start() <= to)
        }
    }

    /// Returns the [`Venue`]s matching the provided [`Criteria`], preserving
    /// their order.
    pub fn filter<'v, I>(venues: I, criteria: &Criteria) -> Vec<&'v Venue>
    where
        I: IntoIterator<Item = &'v Venue>,
    {
        venues.into_iter().filter(|v| criteria.matches(v)).collect()
    }

    /// Filter of [`Venue`]s by their [`venue::Category`].
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub enum CategoryFilter {
        /// Any [`venue::Category`] matches.
        #[default]
        All,

        /// Only the exact [`venue::Category`] matches.
        Only(venue::Category),
    }

    impl CategoryFilter {
        /// Label selecting [`CategoryFilter::All`].
        pub const ALL: &'static str = "Все";

        /// Checks whether the provided [`venue::Category`] passes this
        /// [`CategoryFilter`].
        #[must_use]
        pub fn matches(&self, category: &venue::Category) -> bool {
            match self {
                Self::All => true,
                Self::Only(c) => c == category,
            }
        }
    }

    impl FromStr for CategoryFilter {
        type Err = &'static str;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            if s == Self::ALL {
                return Ok(Self::All);
            }
            venue::Category::from_str(s).map(Self::Only)
        }
    }

    impl fmt::Display for CategoryFilter {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::All => f.write_str(Self::ALL),
                Self::Only(c) => write!(f, "{c}"),
            }
        }
    }

    /// Case-insensitive text to look for in [`Venue`]s.
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct SearchQuery(String);

    impl SearchQuery {
        /// Creates a new [`SearchQuery`] out of the provided `text`.
        #[must_use]
        pub fn new(text: impl AsRef<str>) -> Self {
            Self(text.as_ref().to_lowercase())
        }

        /// Checks whether this [`SearchQuery`] is empty and matches anything.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.0.is_empty()
        }

        /// Checks whether the provided [`Venue`] title, location or category
        /// contains this [`SearchQuery`].
        #[must_use]
        pub fn matches(&self, venue: &Venue) -> bool {
            if self.is_empty() {
                return true;
            }
            [
                venue.title.as_str(),
                venue.location.as_str(),
                venue.category.as_str(),
            ]
            .into_iter()
            .any(|text| text.to_lowercase().contains(&self.0))
        }
    }

    #[cfg(test)]
    mod spec {
        use std::{collections::HashSet, str::FromStr as _};

        use common::{Date, Money};

        use crate::domain::{
            venue::{self, spec::venue},
            Venue,
        };

        use super::{filter, CategoryFilter, Criteria, SearchQuery};

        fn catalog() -> Vec<Venue> {
            vec![
                venue(
                    1,
                    "Билборд на Невском",
                    "Невский проспект, 1",
                    "Билборды",
                    45000,
                    Some(("2024-02-15", "2024-03-15")),
                ),
                venue(
                    2,
                    "Реклама в лифтах ЖК \"Солнечный\"",
                    "ул. Солнечная, 10",
                    "Лифты",
                    28000,
                    Some(("2024-03-01", "2024-03-31")),
                ),
                venue(
                    3,
                    "Реклама на автобусах",
                    "Маршрут 7",
                    "Автобусы",
                    65000,
                    Some(("2024-03-10", "2024-04-10")),
                ),
            ]
        }

        fn ids(venues: &[&Venue]) -> Vec<u32> {
            venues.iter().map(|v| v.id.into()).collect()
        }

        fn date(s: &str) -> Date {
            Date::from_str(s).unwrap()
        }

        #[test]
        fn empty_input_gives_empty_output() {
            let criteria = Criteria {
                search: SearchQuery::new("билборд"),
                ..Criteria::default()
            };

            let venues: Vec<Venue> = Vec::new();

            assert!(filter(&venues, &criteria).is_empty());
            assert!(filter(&venues, &Criteria::default()).is_empty());
        }

        #[test]
        fn default_criteria_keep_everything_in_order() {
            let venues = catalog();

            assert_eq!(ids(&filter(&venues, &Criteria::default())), [1, 2, 3]);
        }

        #[test]
        fn all_category_keeps_everything() {
            let venues = catalog();
            let criteria = Criteria {
                category: CategoryFilter::from_str("Все").unwrap(),
                ..Criteria::default()
            };

            assert_eq!(criteria.category, CategoryFilter::All);
            assert_eq!(ids(&filter(&venues, &criteria)), [1, 2, 3]);
        }

        #[test]
        fn exact_category_selects_one() {
            let venues = catalog();
            let criteria = Criteria {
                category: CategoryFilter::from_str("Билборды").unwrap(),
                ..Criteria::default()
            };

            assert_eq!(ids(&filter(&venues, &criteria)), [1]);
        }

        #[test]
        fn category_is_case_sensitive() {
            let venues = catalog();
            let criteria = Criteria {
                category: CategoryFilter::Only(
                    venue::Category::new("билборды").unwrap(),
                ),
                ..Criteria::default()
            };

            assert!(filter(&venues, &criteria).is_empty());
        }

        #[test]
        fn search_matches_title_or_location_ignoring_case() {
            let venues = [venue(
                1,
                "Билборд на Невском",
                "Невский проспект, 1",
                "Билборды",
                45000,
                None,
            )];

            for query in ["Невск", "невск", "НЕВСКИЙ ПР", "проспект"] {
                let criteria = Criteria {
                    search: SearchQuery::new(query),
                    ..Criteria::default()
                };
                assert_eq!(ids(&filter(&venues, &criteria)), [1], "{query}");
            }

            let criteria = Criteria {
                search: SearchQuery::new("Садовая"),
                ..Criteria::default()
            };
            assert!(filter(&venues, &criteria).is_empty());
        }

        #[test]
        fn search_matches_category() {
            let venues = catalog();
            let criteria = Criteria {
                search: SearchQuery::new("автобус"),
                ..Criteria::default()
            };

            assert_eq!(ids(&filter(&venues, &criteria)), [3]);
        }

        #[test]
        fn price_range_is_inclusive() {
            let venues = catalog();
            let criteria = Criteria {
                price_min: Money::rubles(28000),
                price_max: Some(Money::rubles(45000)),
                ..Criteria::default()
            };
            assert_eq!(ids(&filter(&venues, &criteria)), [1, 2]);

            let criteria = Criteria {
                price_min: Money::rubles(45001),
                ..Criteria::default()
            };
            assert_eq!(ids(&filter(&venues, &criteria)), [3]);
        }

        #[test]
        fn dates_overlap_availability() {
            let venues = catalog();

            let criteria = Criteria {
                date_from: Some(date("2024-03-20")),
                ..Criteria::default()
            };
            assert_eq!(ids(&filter(&venues, &criteria)), [2, 3]);

            let criteria = Criteria {
                date_to: Some(date("2024-03-05")),
                ..Criteria::default()
            };
            assert_eq!(ids(&filter(&venues, &criteria)), [1, 2]);

            let criteria = Criteria {
                date_from: Some(date("2024-03-15")),
                date_to: Some(date("2024-03-15")),
                ..Criteria::default()
            };
            assert_eq!(ids(&filter(&venues, &criteria)), [1, 2, 3]);

            let criteria = Criteria {
                date_from: Some(date("2024-04-11")),
                ..Criteria::default()
            };
            assert!(filter(&venues, &criteria).is_empty());
        }

        #[test]
        fn unlimited_availability_passes_dates() {
            let venues = [venue(9, "Ивент", "Экспофорум", "Мероприятия", 1, None)];
            let criteria = Criteria {
                date_from: Some(date("2030-01-01")),
                date_to: Some(date("2030-01-02")),
                ..Criteria::default()
            };

            assert_eq!(ids(&filter(&venues, &criteria)), [9]);
        }

        #[test]
        fn disjoint_criteria_intersect() {
            let venues = catalog();
            let by_category = Criteria {
                category: CategoryFilter::from_str("Лифты").unwrap(),
                ..Criteria::default()
            };
            let by_price = Criteria {
                price_max: Some(Money::rubles(50000)),
                ..Criteria::default()
            };
            let combined = Criteria {
                category: by_category.category.clone(),
                price_max: by_price.price_max,
                ..Criteria::default()
            };

            let expected = ids(&filter(&venues, &by_category))
                .into_iter()
                .collect::<HashSet<_>>()
                .intersection(
                    &ids(&filter(&venues, &by_price)).into_iter().collect(),
                )
                .copied()
                .collect::<HashSet<_>>();
            let actual =
                ids(&filter(&venues, &combined)).into_iter().collect::<HashSet<_>>();

            assert_eq!(actual, expected);
            assert_eq!(actual, HashSet::from([2]));
        }
    }
}
