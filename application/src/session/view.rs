//! Text rendering of the session replies.

use std::{fmt::Write as _, time::Duration};

use common::{Date, DateTime, Money};
use itertools::Itertools as _;
use service::domain::{
    notification, order, user, venue, Notification, Order, Package, User,
    Venue,
};

/// Renders the provided [`Money`] as `45 000 ₽`.
#[must_use]
pub fn money(amount: Money) -> String {
    let digits = amount.amount().to_string();
    let mut out = String::with_capacity(digits.len() * 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out.push_str(" ₽");
    out
}

/// Renders the provided [`Date`] as `15.02.2024`.
#[must_use]
pub fn date(date: Date) -> String {
    format!("{:02}.{:02}.{}", date.day(), date.month(), date.year())
}

/// Renders the provided [`venue::Availability`] as `15.02.2024 - 15.03.2024`.
#[must_use]
pub fn period(availability: Option<&venue::Availability>) -> String {
    availability.map_or_else(
        || "без ограничений".to_owned(),
        |a| format!("{} - {}", date(a.start()), date(a.end())),
    )
}

/// Renders the provided `count` followed by the matching noun form out of
/// the `[one, few, many]` ones.
fn plural(count: u64, [one, few, many]: [&str; 3]) -> String {
    let noun = match (count % 10, count % 100) {
        (_, 11..=14) => many,
        (1, _) => one,
        (2..=4, _) => few,
        _ => many,
    };
    format!("{count} {noun}")
}

/// Renders the provided number of [`Venue`]s with a matching noun form.
#[must_use]
pub fn venues_count(count: usize) -> String {
    plural(
        u64::try_from(count).unwrap_or(u64::MAX),
        ["площадка", "площадки", "площадок"],
    )
}

/// Renders the provided `elapsed` time as `2 часа назад`.
#[must_use]
pub fn ago(elapsed: Duration) -> String {
    let minutes = elapsed.as_secs() / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let count = if days > 0 {
        plural(days, ["день", "дня", "дней"])
    } else if hours > 0 {
        plural(hours, ["час", "часа", "часов"])
    } else if minutes > 0 {
        plural(minutes, ["минуту", "минуты", "минут"])
    } else {
        return "только что".to_owned();
    };
    format!("{count} назад")
}

/// Returns the label of the provided [`notification::Kind`].
#[must_use]
pub fn notification_kind(kind: notification::Kind) -> &'static str {
    match kind {
        notification::Kind::Success => "[✓]",
        notification::Kind::Warning => "[!]",
        notification::Kind::Info => "[i]",
    }
}

/// Returns the label of the provided [`order::Status`].
#[must_use]
pub fn order_status(status: order::Status) -> &'static str {
    match status {
        order::Status::Pending => "На согласовании",
        order::Status::Approved => "Подтверждено",
        order::Status::Rejected => "Отклонено",
    }
}

/// Returns the label of the provided [`venue::Status`].
#[must_use]
pub fn venue_status(status: venue::Status) -> &'static str {
    match status {
        venue::Status::Active => "Активна",
        venue::Status::Moderation => "На модерации",
    }
}

/// Returns the label of the provided [`user::Role`].
#[must_use]
pub fn role(role: user::Role) -> &'static str {
    match role {
        user::Role::Advertiser => "Рекламодатель",
        user::Role::Owner => "Владелец площадки",
    }
}

/// Renders the provided [`Venue`] as a single catalog row.
#[must_use]
pub fn venue_row(venue: &Venue) -> String {
    format!(
        "#{} {} | {} | {} | {}/мес",
        venue.id,
        venue.title,
        venue.location,
        venue.category,
        money(venue.price),
    )
}

/// Renders the provided list of [`Venue`]s.
#[must_use]
pub fn venue_list(venues: &[Venue]) -> String {
    if venues.is_empty() {
        return "Площадки не найдены".to_owned();
    }
    format!(
        "{}:\n{}",
        venues_count(venues.len()),
        venues.iter().map(venue_row).join("\n"),
    )
}

/// Renders full details of the provided [`Venue`].
#[must_use]
pub fn venue_details(venue: &Venue, in_package: bool) -> String {
    let mut out = format!(
        "#{} {}\n{}\nСтоимость аренды: от {}/мес\nКатегория: {}\nПериод: {}",
        venue.id,
        venue.title,
        venue.location,
        money(venue.price),
        venue.category,
        period(venue.availability.as_ref()),
    );
    if let Some(description) = &venue.description {
        _ = write!(out, "\nОписание: {description}");
    }
    if let Some(duration) = &venue.duration {
        _ = write!(out, "\nДлительность: {duration}");
    }
    if let Some(coverage) = &venue.coverage {
        _ = write!(out, "\nОхват: {coverage}");
    }
    let coordinates = venue.map_coordinates();
    _ = write!(
        out,
        "\nНа карте: {:.6}, {:.6}\nИзображение: {}",
        coordinates.latitude(),
        coordinates.longitude(),
        venue.image,
    );
    if venue.status != venue::Status::Active {
        _ = write!(out, "\nСтатус: {}", venue_status(venue.status));
    }
    out.push_str(if in_package {
        "\n[в пакете]"
    } else {
        "\n[не в пакете]"
    });
    out
}

/// Renders the provided [`Package`].
#[must_use]
pub fn package(package: &Package) -> String {
    if package.is_empty() {
        return "Ваш пакет пуст".to_owned();
    }
    format!(
        "{} в вашем пакете:\n{}\nИтого: {}/мес",
        venues_count(package.len()),
        package.venues().iter().map(venue_row).join("\n"),
        money(package.total_price()),
    )
}

/// Renders the provided [`Order`].
#[must_use]
pub fn order(order: &Order) -> String {
    format!(
        "Заказ {} от {} | {} | {}\n{}\nИтого: {}/мес",
        order.id,
        date(order.created_at.date()),
        order_status(order.status),
        venues_count(order.items.len()),
        order
            .items
            .iter()
            .map(|i| format!(
                "  #{} {} | {} | {}/мес",
                i.venue_id,
                i.title,
                period(i.availability.as_ref()),
                money(i.price),
            ))
            .join("\n"),
        money(order.total_price()),
    )
}

/// Renders the provided list of [`Order`]s.
#[must_use]
pub fn order_list(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "История заказов пуста".to_owned();
    }
    orders.iter().map(order).join("\n\n")
}

/// Renders the provided [`Notification`] as seen at the `now` moment.
#[must_use]
pub fn notification(notification: &Notification, now: DateTime) -> String {
    format!(
        "{} {}\n{}\n{}",
        notification_kind(notification.kind),
        notification.title,
        notification.message,
        ago(now.elapsed_since(&notification.created_at)),
    )
}

/// Renders the provided list of [`Notification`]s as seen at the `now`
/// moment.
#[must_use]
pub fn notification_list(
    notifications: &[Notification],
    now: DateTime,
) -> String {
    if notifications.is_empty() {
        return "Уведомлений нет".to_owned();
    }
    notifications
        .iter()
        .map(|n| notification(n, now))
        .join("\n\n")
}

/// Renders the profile of the provided [`User`].
#[must_use]
pub fn user(user: &User) -> String {
    format!(
        "{}\n{}\nEmail: {}\nТелефон: {}",
        user.name,
        role(user.role),
        user.email,
        user.phone
            .as_ref()
            .map_or_else(|| "не указан".to_owned(), ToString::to_string),
    )
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::{Date, Money};

    use super::{ago, date, money, venues_count};

    #[test]
    fn groups_thousands() {
        assert_eq!(money(Money::rubles(0)), "0 ₽");
        assert_eq!(money(Money::rubles(950)), "950 ₽");
        assert_eq!(money(Money::rubles(45000)), "45 000 ₽");
        assert_eq!(money(Money::rubles(120_000)), "120 000 ₽");
        assert_eq!(money(Money::rubles(1_234_567)), "1 234 567 ₽");
    }

    #[test]
    fn formats_dates_day_first() {
        let d = Date::from_calendar(2024, 3, 1).unwrap();

        assert_eq!(date(d), "01.03.2024");
    }

    #[test]
    fn pluralizes_venues() {
        assert_eq!(venues_count(1), "1 площадка");
        assert_eq!(venues_count(3), "3 площадки");
        assert_eq!(venues_count(5), "5 площадок");
        assert_eq!(venues_count(11), "11 площадок");
        assert_eq!(venues_count(21), "21 площадка");
        assert_eq!(venues_count(0), "0 площадок");
    }

    #[test]
    fn tells_time_ago() {
        let minute = 60;
        let hour = 60 * minute;
        let day = 24 * hour;

        for (secs, expected) in [
            (0, "только что"),
            (59, "только что"),
            (minute, "1 минуту назад"),
            (5 * minute, "5 минут назад"),
            (22 * minute, "22 минуты назад"),
            (2 * hour + 59 * minute, "2 часа назад"),
            (11 * hour, "11 часов назад"),
            (day, "1 день назад"),
            (25 * day, "25 дней назад"),
        ] {
            assert_eq!(ago(Duration::from_secs(secs)), expected, "{secs}");
        }
    }
}
