//! [`Action`] definitions.

use clap::{error::ErrorKind, Parser, Subcommand};
use common::{Date, Money};
use service::{
    domain::{order, user, venue},
    read::venue::list::{CategoryFilter, Criteria, SearchQuery},
};

/// Single line of the session input.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    /// [`Action`] of this [`Line`].
    #[command(subcommand)]
    action: Action,
}

/// Action requested by the user.
#[derive(Clone, Debug, Subcommand)]
pub enum Action {
    /// Lists the catalog of venues.
    Catalog(Catalog),

    /// Shows details of a venue.
    Show {
        /// ID of the venue.
        id: venue::Id,
    },

    /// Adds a venue to the package.
    Add {
        /// ID of the venue.
        id: venue::Id,
    },

    /// Removes a venue from the package.
    Remove {
        /// ID of the venue.
        id: venue::Id,
    },

    /// Adds a venue to the package or removes it if present.
    Toggle {
        /// ID of the venue.
        id: venue::Id,
    },

    /// Shows the package.
    Package,

    /// Empties the package.
    Clear,

    /// Registers a new user and signs in as them.
    Register(Register),

    /// Shows or updates the profile of the signed in user.
    Profile(Profile),

    /// Publishes a new venue of the signed in owner.
    Publish(Publish),

    /// Lists venues published by the signed in owner.
    MyVenues,

    /// Places an order for the package.
    Order,

    /// Lists placed orders.
    Orders,

    /// Approves or rejects a pending order.
    Resolve {
        /// ID of the order.
        order: order::Id,

        /// Resolution of the order: `approved` or `rejected`.
        status: order::Status,
    },

    /// Wipes the order history.
    ClearOrders,

    /// Lists notifications, the newest first.
    Notifications,

    /// Dismisses all the notifications.
    ClearNotifications,

    /// Ends the session.
    Quit,
}

impl Action {
    /// Parses an [`Action`] from the provided input `line`.
    ///
    /// Words are separated by whitespace, and double quotes group several
    /// words into a single one.
    ///
    /// # Errors
    ///
    /// Errors if the `line` doesn't describe a valid [`Action`], or help is
    /// requested.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        let words = split(line).ok_or_else(|| {
            clap::Error::raw(ErrorKind::InvalidValue, "unterminated quote\n")
        })?;
        Line::try_parse_from(words).map(|l| l.action)
    }
}

/// Splits the provided `line` into words.
///
/// [`None`] is returned if a quote is left open.
fn split(line: &str) -> Option<Vec<String>> {
    let mut words = Vec::new();
    let mut word: Option<String> = None;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                _ = word.get_or_insert_with(String::new);
            }
            c if c.is_whitespace() && !quoted => {
                words.extend(word.take());
            }
            c => word.get_or_insert_with(String::new).push(c),
        }
    }
    words.extend(word);

    (!quoted).then_some(words)
}

/// Arguments of the [`Action::Catalog`].
#[derive(Clone, Debug, Default, clap::Args)]
pub struct Catalog {
    /// Text to look for in titles, locations and categories.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Category to show, or `Все` for any.
    #[arg(long)]
    pub category: Option<CategoryFilter>,

    /// Lowest monthly price.
    #[arg(long)]
    pub min: Option<Money>,

    /// Highest monthly price.
    #[arg(long)]
    pub max: Option<Money>,

    /// Day a venue must still be available on (`YYYY-MM-DD`).
    #[arg(long)]
    pub from: Option<Date>,

    /// Day a venue must already be available on (`YYYY-MM-DD`).
    #[arg(long)]
    pub to: Option<Date>,
}

impl From<Catalog> for Criteria {
    fn from(args: Catalog) -> Self {
        let Catalog {
            search,
            category,
            min,
            max,
            from,
            to,
        } = args;

        Self {
            category: category.unwrap_or_default(),
            search: SearchQuery::new(search),
            price_min: min.unwrap_or_default(),
            price_max: max,
            date_from: from,
            date_to: to,
        }
    }
}

/// Arguments of the [`Action::Register`].
#[derive(Clone, Debug, clap::Args)]
pub struct Register {
    /// Name of the user.
    #[arg(long)]
    pub name: user::Name,

    /// Email of the user.
    #[arg(long)]
    pub email: user::Email,

    /// Password of the user.
    #[arg(long)]
    pub password: user::Password,

    /// Repeated password of the user.
    #[arg(long)]
    pub confirm: user::Password,

    /// Role of the user: `advertiser` or `owner`.
    #[arg(long, default_value = "advertiser")]
    pub role: user::Role,
}

/// Arguments of the [`Action::Profile`].
///
/// Shows the profile if nothing is provided.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct Profile {
    /// New name of the user.
    #[arg(long)]
    pub name: Option<user::Name>,

    /// New email of the user.
    #[arg(long)]
    pub email: Option<user::Email>,

    /// New phone of the user.
    #[arg(long, conflicts_with = "no_phone")]
    pub phone: Option<user::Phone>,

    /// Removes the phone of the user.
    #[arg(long)]
    pub no_phone: bool,
}

impl Profile {
    /// Checks whether these [`Profile`] arguments change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && !self.no_phone
    }
}

/// Arguments of the [`Action::Publish`].
#[derive(Clone, Debug, clap::Args)]
pub struct Publish {
    /// Title of the venue.
    #[arg(long)]
    pub title: venue::Title,

    /// Address of the venue.
    #[arg(long)]
    pub location: venue::Location,

    /// Category of the venue.
    #[arg(long)]
    pub category: venue::Category,

    /// Image URL of the venue.
    #[arg(long)]
    pub image: venue::ImageUrl,

    /// Monthly price of the venue in rubles.
    #[arg(long)]
    pub price: Money,

    /// Description of the venue.
    #[arg(long)]
    pub description: Option<venue::Description>,

    /// First available day (`YYYY-MM-DD`).
    #[arg(long, requires = "to")]
    pub from: Option<Date>,

    /// Last available day (`YYYY-MM-DD`).
    #[arg(long, requires = "from")]
    pub to: Option<Date>,

    /// Latitude of the venue.
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Longitude of the venue.
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Duration of a single placement.
    #[arg(long)]
    pub duration: Option<venue::Duration>,

    /// Audience coverage of the venue.
    #[arg(long)]
    pub coverage: Option<venue::Coverage>,
}
