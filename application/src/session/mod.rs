//! Interactive session playing the role of the application screens.

pub mod action;
mod mutation;
mod query;
pub mod view;

use clap::error::ErrorKind;
use service::domain::user;
use tracing as log;

use crate::{define_error, AsError as _, Error, Service};

pub use self::action::Action;

define_error! {
    enum AuthError {
        #[code = "NOT_REGISTERED"]
        #[message = "Register to perform this action"]
        NotRegistered,
    }
}

define_error! {
    enum VenueError {
        #[code = "VENUE_NOT_EXISTS"]
        #[message = "`Venue` does not exist"]
        NotExists,
    }
}

/// Outcome of executing a single [`Action`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Text to show to the user.
    Reply(String),

    /// [`Session`] is over.
    Quit,
}

/// Session of a single user over the [`Service`].
///
/// Borrows the [`Service`] for its whole lifetime and passes it into every
/// [`Action`] handler.
#[derive(Debug)]
pub struct Session<'s> {
    /// [`Service`] this [`Session`] operates on.
    service: &'s mut Service,

    /// ID of the signed in [`User`], if any.
    ///
    /// [`User`]: service::domain::User
    user_id: Option<user::Id>,
}

impl<'s> Session<'s> {
    /// Creates a new anonymous [`Session`] over the provided [`Service`].
    #[must_use]
    pub fn new(service: &'s mut Service) -> Self {
        Self {
            service,
            user_id: None,
        }
    }

    /// Returns ID of the signed in [`User`], if any.
    ///
    /// [`User`]: service::domain::User
    #[must_use]
    pub fn user_id(&self) -> Option<user::Id> {
        self.user_id
    }

    /// Parses and executes the provided input `line`.
    ///
    /// # Errors
    ///
    /// Errors if the `line` is not a valid [`Action`] or its execution fails.
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, Error> {
        match Action::parse_line(line) {
            Ok(action) => self.execute(action),
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp
                        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand,
                ) =>
            {
                Ok(Outcome::Reply(e.render().to_string()))
            }
            Err(e) => Err(e.into_error()),
        }
    }

    /// Executes the provided [`Action`].
    ///
    /// # Errors
    ///
    /// Errors if the [`Action`] execution fails.
    pub fn execute(&mut self, action: Action) -> Result<Outcome, Error> {
        log::debug!("executing {action:?}");

        let reply = match action {
            Action::Catalog(args) => self.catalog(&args.into()),
            Action::Show { id } => self.show(id),
            Action::Add { id } => self.add(id),
            Action::Remove { id } => self.remove(id),
            Action::Toggle { id } => self.toggle(id),
            Action::Package => Ok(view::package(self.service.package())),
            Action::Clear => self.clear(),
            Action::Register(args) => self.register(args),
            Action::Profile(args) => self.profile(args),
            Action::Publish(args) => self.publish(args),
            Action::MyVenues => self.my_venues(),
            Action::Order => self.order(),
            Action::Orders => self.orders(),
            Action::Resolve { order, status } => self.resolve(order, status),
            Action::ClearOrders => self.clear_orders(),
            Action::Notifications => self.notifications(),
            Action::ClearNotifications => self.clear_notifications(),
            Action::Quit => return Ok(Outcome::Quit),
        }?;

        Ok(Outcome::Reply(reply))
    }

    /// Returns ID of the signed in [`User`].
    ///
    /// [`User`]: service::domain::User
    fn current_user_id(&self) -> Result<user::Id, Error> {
        self.user_id.ok_or_else(|| AuthError::NotRegistered.into())
    }
}

#[cfg(test)]
mod spec {
    use service::{infra::Memory, query, Query as _};

    use crate::{Error, Fixture, Service};

    use super::{Outcome, Session};

    fn service() -> Service {
        Service::new(
            Memory::new(Fixture::builtin().unwrap().into_venues().unwrap())
                .unwrap(),
        )
    }

    fn reply(session: &mut Session<'_>, line: &str) -> String {
        match session.execute_line(line) {
            Ok(Outcome::Reply(text)) => text,
            Ok(Outcome::Quit) => panic!("unexpected quit on `{line}`"),
            Err(e) => panic!("`{line}` failed: {e}"),
        }
    }

    fn error(session: &mut Session<'_>, line: &str) -> Error {
        session.execute_line(line).unwrap_err()
    }

    #[test]
    fn filters_catalog() {
        let mut svc = service();
        let mut session = Session::new(&mut svc);

        let all = reply(&mut session, "catalog --category Все");
        assert!(all.starts_with("4 площадки:"), "{all}");

        let billboards = reply(&mut session, "catalog --category Билборды");
        assert!(billboards.starts_with("1 площадка:"), "{billboards}");
        assert!(billboards.contains("Билборд на Невском"));

        for query in ["Невск", "невск"] {
            let found = reply(&mut session, &format!("catalog --search {query}"));
            assert!(found.contains("#1 Билборд на Невском"), "{found}");
        }

        let none = reply(&mut session, "catalog --search Садовая");
        assert_eq!(none, "Площадки не найдены");
    }

    #[test]
    fn assembles_package() {
        let mut svc = service();
        let mut session = Session::new(&mut svc);

        _ = reply(&mut session, "add 1");
        let package = reply(&mut session, "add 2");
        assert!(package.contains("Итого: 73 000 ₽/мес"), "{package}");

        let again = reply(&mut session, "add 2");
        assert!(again.starts_with("Площадка уже в пакете"), "{again}");

        let package = reply(&mut session, "remove 1");
        assert!(package.contains("Итого: 28 000 ₽/мес"), "{package}");
        assert!(reply(&mut session, "show 2").ends_with("[в пакете]"));

        _ = reply(&mut session, "clear");
        assert_eq!(reply(&mut session, "package"), "Ваш пакет пуст");

        assert_eq!(error(&mut session, "add 99").code, "VENUE_NOT_EXISTS");
        assert_eq!(error(&mut session, "show 99").code, "VENUE_NOT_EXISTS");
    }

    #[test]
    fn places_and_resolves_orders() {
        let mut svc = service();
        let mut session = Session::new(&mut svc);

        assert_eq!(error(&mut session, "order").code, "EMPTY_PACKAGE");

        _ = reply(&mut session, "toggle 3");
        let placed = reply(&mut session, "order");
        assert!(placed.contains("На согласовании"), "{placed}");
        assert_eq!(reply(&mut session, "package"), "Ваш пакет пуст");

        let orders = svc.execute(query::orders::List::by(())).unwrap();
        assert_eq!(orders.len(), 1);
        let id = orders[0].id;

        let mut session = Session::new(&mut svc);
        let approved = reply(&mut session, &format!("resolve {id} approved"));
        assert!(approved.contains("Подтверждено"), "{approved}");
        assert_eq!(
            error(&mut session, &format!("resolve {id} rejected")).code,
            "ORDER_ALREADY_RESOLVED",
        );

        assert_eq!(
            reply(&mut session, "clear-orders"),
            "История заказов очищена: 1",
        );
        assert_eq!(reply(&mut session, "orders"), "История заказов пуста");
    }

    #[test]
    fn notifies_about_orders() {
        let mut svc = service();
        let mut session = Session::new(&mut svc);

        assert_eq!(reply(&mut session, "notifications"), "Уведомлений нет");

        _ = reply(&mut session, "add 1");
        _ = reply(&mut session, "order");
        let orders = session
            .service
            .execute(query::orders::List::by(()))
            .unwrap();
        let id = orders[0].id;
        _ = reply(&mut session, &format!("resolve {id} rejected"));

        let notices = reply(&mut session, "notifications");
        let rejected = notices.find("[!] Заявка отклонена").unwrap();
        let sent = notices.find("[i] Заявка отправлена").unwrap();
        assert!(rejected < sent, "{notices}");
        assert!(notices.contains("(Билборд на Невском)"), "{notices}");
        assert!(notices.contains("только что"), "{notices}");

        assert_eq!(
            reply(&mut session, "clear-notifications"),
            "Уведомления очищены: 2",
        );
        assert_eq!(reply(&mut session, "notifications"), "Уведомлений нет");
        assert!(reply(&mut session, "orders").contains("Отклонено"));
    }

    #[test]
    fn registers_and_publishes() {
        let mut svc = service();
        let mut session = Session::new(&mut svc);

        assert_eq!(error(&mut session, "my-venues").code, "NOT_REGISTERED");

        _ = reply(
            &mut session,
            "register --name Мария --email maria@example.com \
             --password secret123 --confirm secret123 --role owner",
        );
        assert!(session.user_id().is_some());

        let published = reply(
            &mut session,
            r#"publish --title "Экран на Тверской" --location "Тверская, 5" --category Экраны --image https://example.com/s.jpg --price 30000 --from 2024-05-01 --to 2024-05-31"#,
        );
        assert!(published.contains("#5"), "{published}");

        let mine = reply(&mut session, "my-venues");
        assert!(mine.contains("[На модерации]"), "{mine}");

        let catalog = reply(&mut session, "catalog --search Тверск");
        assert_eq!(catalog, "Площадки не найдены");

        let profile = reply(&mut session, "profile --phone \"+7 999 123-45-67\"");
        assert!(profile.contains("+7 999 123-45-67"), "{profile}");
        assert!(profile.contains("Владелец площадки"), "{profile}");
    }

    #[test]
    fn reports_registration_errors() {
        let mut svc = service();
        let mut session = Session::new(&mut svc);

        assert_eq!(
            error(
                &mut session,
                "register --name Алексей --email alex@example.com \
                 --password secret123 --confirm secret321",
            )
            .code,
            "PASSWORD_MISMATCH",
        );
        assert_eq!(
            error(
                &mut session,
                "register --name Алексей --email alex@example.com \
                 --password short --confirm short",
            )
            .code,
            "INVALID_INPUT",
        );

        let line = "register --name Алексей --email alex@example.com \
                    --password secret123 --confirm secret123 --role owner";
        _ = reply(&mut session, line);
        assert_eq!(error(&mut session, line).code, "EMAIL_OCCUPIED");

        let mut session = Session::new(&mut svc);
        _ = reply(
            &mut session,
            "register --name Ольга --email olga@example.com \
             --password secret123 --confirm secret123",
        );
        assert_eq!(
            error(
                &mut session,
                "publish --title Экран --location Тверская --category Экраны \
                 --image https://example.com/s.jpg --price 1",
            )
            .code,
            "NOT_AN_OWNER",
        );
    }

    #[test]
    fn ends_on_quit_and_helps() {
        let mut svc = service();
        let mut session = Session::new(&mut svc);

        assert_eq!(session.execute_line("quit").unwrap(), Outcome::Quit);
        assert!(reply(&mut session, "help").contains("catalog"));
        assert_eq!(error(&mut session, "fly").code, "INVALID_INPUT");
    }
}
