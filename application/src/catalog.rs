//! Catalog fixture loading.

use common::{Date, Money};
use config::{ConfigError, File, FileFormat};
use derive_more::{Display, Error};
use serde::Deserialize;
use service::domain::{venue, Venue};

/// Catalog used when no file is configured.
pub const BUILTIN: &str = include_str!("../catalog.toml");

/// Catalog fixture describing [`Venue`]s to seed the [`Service`] with.
///
/// [`Service`]: crate::Service
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Fixture {
    /// [`Record`]s of this [`Fixture`].
    #[serde(default)]
    pub venues: Vec<Record>,
}

impl Fixture {
    /// Loads a [`Fixture`] from the file at the provided `path`.
    ///
    /// Any format supported by the [`config`] crate is accepted.
    ///
    /// # Errors
    ///
    /// Errors if the file cannot be read or doesn't describe a [`Fixture`].
    pub fn load(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(File::with_name(path.as_ref()))
            .build()?
            .try_deserialize()
    }

    /// Returns the built-in [`Fixture`].
    ///
    /// # Errors
    ///
    /// Errors if the [`BUILTIN`] catalog is malformed.
    pub fn builtin() -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(File::from_str(BUILTIN, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Validates all the [`Record`]s of this [`Fixture`] into [`Venue`]s.
    ///
    /// # Errors
    ///
    /// Errors on the first invalid [`Record`].
    pub fn into_venues(self) -> Result<Vec<Venue>, InvalidRecord> {
        self.venues.into_iter().map(Venue::try_from).collect()
    }
}

/// Raw [`Venue`] description in a [`Fixture`].
#[derive(Clone, Debug, Deserialize)]
pub struct Record {
    /// ID of the [`Venue`].
    pub id: u32,

    /// Title of the [`Venue`].
    pub title: String,

    /// Address of the [`Venue`].
    pub location: String,

    /// Description of the [`Venue`].
    pub description: Option<String>,

    /// Monthly rent price of the [`Venue`] in rubles.
    pub price: Money,

    /// Category of the [`Venue`].
    pub category: String,

    /// Image URL of the [`Venue`].
    pub image: String,

    /// First day the [`Venue`] is available.
    pub start_date: Option<Date>,

    /// Last day the [`Venue`] is available.
    pub end_date: Option<Date>,

    /// Latitude of the [`Venue`].
    pub latitude: Option<f64>,

    /// Longitude of the [`Venue`].
    pub longitude: Option<f64>,

    /// Duration of a single placement in the [`Venue`].
    pub duration: Option<String>,

    /// Audience coverage of the [`Venue`].
    pub coverage: Option<String>,
}

impl TryFrom<Record> for Venue {
    type Error = InvalidRecord;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let Record {
            id,
            title,
            location,
            description,
            price,
            category,
            image,
            start_date,
            end_date,
            latitude,
            longitude,
            duration,
            coverage,
        } = record;

        let invalid = |field| InvalidRecord { id, field };

        let title = venue::Title::new(title).ok_or(invalid("title"))?;
        let location =
            venue::Location::new(location).ok_or(invalid("location"))?;
        let category =
            venue::Category::new(category).ok_or(invalid("category"))?;
        let image = venue::ImageUrl::new(image).ok_or(invalid("image"))?;
        let description = description
            .map(|d| venue::Description::new(d).ok_or(invalid("description")))
            .transpose()?;
        let duration = duration
            .map(|d| venue::Duration::new(d).ok_or(invalid("duration")))
            .transpose()?;
        let coverage = coverage
            .map(|c| venue::Coverage::new(c).ok_or(invalid("coverage")))
            .transpose()?;
        let availability = match (start_date, end_date) {
            (None, None) => None,
            (Some(start), Some(end)) => Some(
                venue::Availability::new(start, end)
                    .ok_or(invalid("end_date"))?,
            ),
            (Some(_), None) => return Err(invalid("end_date")),
            (None, Some(_)) => return Err(invalid("start_date")),
        };
        let coordinates = match (latitude, longitude) {
            (None, None) => None,
            (Some(lat), Some(lon)) => Some(
                venue::Coordinates::new(lat, lon)
                    .ok_or(invalid("coordinates"))?,
            ),
            (Some(_), None) => return Err(invalid("longitude")),
            (None, Some(_)) => return Err(invalid("latitude")),
        };

        Ok(Self {
            id: venue::Id::from(id),
            hash: venue::Hash::new(
                None,
                &title,
                &location,
                &category,
                price,
                availability.as_ref(),
            ),
            title,
            location,
            description,
            category,
            image,
            price,
            availability,
            coordinates,
            duration,
            coverage,
            owner_id: None,
            status: venue::Status::Active,
        })
    }
}

/// Error of validating a [`Record`] into a [`Venue`].
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("`Venue(id: {id})` record has invalid `{field}`")]
pub struct InvalidRecord {
    /// ID of the invalid [`Record`].
    pub id: u32,

    /// Name of the invalid field.
    pub field: &'static str,
}

#[cfg(test)]
mod spec {
    use common::Money;
    use service::domain::venue;

    use super::{Fixture, InvalidRecord, Record};

    fn record() -> Record {
        Record {
            id: 7,
            title: "Билборд".to_owned(),
            location: "Невский проспект, 1".to_owned(),
            description: None,
            price: Money::rubles(45000),
            category: "Билборды".to_owned(),
            image: "https://example.com/1.jpg".to_owned(),
            start_date: None,
            end_date: None,
            latitude: None,
            longitude: None,
            duration: None,
            coverage: None,
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let venues = Fixture::builtin().unwrap().into_venues().unwrap();

        assert_eq!(venues.len(), 4);
        assert_eq!(venues[0].title.as_str(), "Билборд на Невском");
        assert_eq!(venues[0].price, Money::rubles(45000));
        assert_eq!(venues[1].category.as_str(), "Лифты");
        assert!(venues[3].availability.is_none());
        assert!(venues.iter().all(|v| v.status == venue::Status::Active));
    }

    #[test]
    fn validates_records() {
        let venue = venue::Venue::try_from(record()).unwrap();
        assert_eq!(venue.id, venue::Id::from(7));
        assert!(venue.coordinates.is_none());

        let err = venue::Venue::try_from(Record {
            title: " ".to_owned(),
            ..record()
        })
        .unwrap_err();
        assert_eq!(err.field, "title");

        let err = venue::Venue::try_from(Record {
            latitude: Some(59.9),
            ..record()
        })
        .unwrap_err();
        assert_eq!(err.field, "longitude");
    }

    #[test]
    fn rejects_reversed_dates() {
        let err = venue::Venue::try_from(Record {
            start_date: Some("2024-03-15".parse().unwrap()),
            end_date: Some("2024-02-15".parse().unwrap()),
            ..record()
        })
        .unwrap_err();

        assert!(matches!(err, InvalidRecord { id: 7, field: "end_date" }));
    }
}
