//! [`Venue`] definitions.

use common::{define_kind, Date, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use uuid::Uuid;
use xxhash_rust::xxh3;

use crate::domain::user;

/// Advertising placement available for rent.
#[derive(Clone, Debug, PartialEq)]
pub struct Venue {
    /// ID of this [`Venue`].
    pub id: Id,

    /// [`Hash`] of this [`Venue`] used for deduplication.
    ///
    /// [`Hash`]: struct@Hash
    pub hash: Hash,

    /// [`Title`] of this [`Venue`].
    pub title: Title,

    /// [`Location`] of this [`Venue`].
    pub location: Location,

    /// [`Description`] of this [`Venue`], if any.
    pub description: Option<Description>,

    /// [`Category`] of this [`Venue`].
    pub category: Category,

    /// [`ImageUrl`] of this [`Venue`].
    pub image: ImageUrl,

    /// Monthly rent price of this [`Venue`].
    pub price: Money,

    /// [`Availability`] window of this [`Venue`], if limited.
    pub availability: Option<Availability>,

    /// [`Coordinates`] of this [`Venue`] on a map, if known.
    pub coordinates: Option<Coordinates>,

    /// [`Duration`] of a single placement in this [`Venue`], if specified.
    pub duration: Option<Duration>,

    /// Audience [`Coverage`] of this [`Venue`], if specified.
    pub coverage: Option<Coverage>,

    /// ID of the [`User`] owning this [`Venue`], if any.
    ///
    /// [`User`]: crate::domain::User
    pub owner_id: Option<user::Id>,

    /// [`Status`] of this [`Venue`].
    pub status: Status,
}

impl Venue {
    /// Returns [`Coordinates`] to display this [`Venue`] at.
    ///
    /// Falls back to [`Coordinates::default()`] if the [`Venue`] has none.
    #[must_use]
    pub fn map_coordinates(&self) -> Coordinates {
        self.coordinates.unwrap_or_default()
    }

    /// Returns the first day this [`Venue`] is available, if limited.
    #[must_use]
    pub fn start_date(&self) -> Option<Date> {
        self.availability.map(|a| a.start())
    }

    /// Returns the last day this [`Venue`] is available, if limited.
    #[must_use]
    pub fn end_date(&self) -> Option<Date> {
        self.availability.map(|a| a.end())
    }
}

/// ID of a [`Venue`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(u32);

impl Id {
    /// Returns the [`Id`] following this one.
    ///
    /// [`None`] is returned if the [`Id`] space is exhausted.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

/// Hash of a [`Venue`] used for deduplication.
#[derive(Clone, Copy, Debug, Display, Eq, From, Hash, Into, PartialEq)]
pub struct Hash(Uuid);

impl Hash {
    /// Calculates a new [`Hash`] for a [`Venue`] of the provided owner.
    ///
    /// The same content published by different owners hashes differently.
    ///
    /// [`Hash`]: struct@Hash
    #[must_use]
    pub fn new(
        owner_id: Option<user::Id>,
        title: &Title,
        location: &Location,
        category: &Category,
        price: Money,
        availability: Option<&Availability>,
    ) -> Self {
        use std::hash::Hash as _;

        // WARNING: Keep the order of the fields in the hasher, otherwise
        //          the same `Venue` will be published twice.
        let mut hasher = xxh3::Xxh3Builder::new().build();
        owner_id.hash(&mut hasher);
        title.hash(&mut hasher);
        location.hash(&mut hasher);
        category.hash(&mut hasher);
        price.hash(&mut hasher);
        availability.hash(&mut hasher);

        Self(Uuid::from_u128(hasher.digest128()))
    }
}

/// Defines a free-text newtype of a [`Venue`].
macro_rules! define_text {
    ($(#[doc = $doc:literal])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
        #[as_ref(str, String)]
        pub struct $name(String);

        impl $name {
            /// Creates a new value if the given `text` is valid.
            #[must_use]
            pub fn new(text: impl Into<String>) -> Option<Self> {
                let text = text.into();
                Self::check(&text).then_some(Self(text))
            }

            /// Returns this value as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Checks whether the given `text` is a valid value: non-empty,
            /// without surrounding whitespace, and at most 512 bytes long.
            fn check(text: impl AsRef<str>) -> bool {
                let text = text.as_ref();
                text.trim() == text && !text.is_empty() && text.len() <= 512
            }
        }

        impl std::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }
    };
}

define_text! {
    /// Title of a [`Venue`].
    Title
}

define_text! {
    /// Human-readable address of a [`Venue`].
    Location
}

define_text! {
    /// Description of a [`Venue`].
    Description
}

define_text! {
    /// Category of a [`Venue`] (`Билборды`, `Лифты`, etc.).
    ///
    /// Categories are compared exactly, including case.
    Category
}

define_text! {
    /// URL of a [`Venue`] image.
    ImageUrl
}

define_text! {
    /// Duration of a single placement in a [`Venue`] (`1 месяц`, etc.).
    Duration
}

define_text! {
    /// Audience coverage of a [`Venue`] (`50 000 человек в день`, etc.).
    Coverage
}

/// Window of calendar days a [`Venue`] is available for rent, inclusive.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Availability {
    /// First available day.
    start: Date,

    /// Last available day.
    end: Date,
}

impl Availability {
    /// Creates a new [`Availability`] if `end` is not before `start`.
    #[must_use]
    pub fn new(start: Date, end: Date) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Returns the first available day.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the last available day.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }
}

/// Geographic coordinates of a [`Venue`].
#[derive(Clone, Copy, Debug, PartialEq, SmartDefault)]
pub struct Coordinates {
    /// Latitude in degrees.
    #[default(55.751_244)]
    latitude: f64,

    /// Longitude in degrees.
    #[default(37.618_423)]
    longitude: f64,
}

impl Coordinates {
    /// Creates new [`Coordinates`] if both values are within their ranges.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        ((-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude))
        .then_some(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

define_kind! {
    #[doc = "Publication status of a [`Venue`]."]
    enum Status {
        #[doc = "[`Venue`] is listed in the catalog."]
        Active = 1,

        #[doc = "[`Venue`] awaits moderation before being listed."]
        Moderation = 2,
    }
}
