//! Page bootstrap policy.
//!
//! Pages mirror the café web app's routes. The public set is fixed: the
//! landing page and the login page. Every other page redirects to the
//! login page before any of its logic runs; the admin page additionally
//! requires the admin role.

use samovar_client::{Navigator, SessionStore};

/// The site's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Dashboard,
    Orders,
    NewOrder,
    Admin,
}

impl Page {
    /// The route path this page has in the web app.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Orders => "/orders",
            Self::NewOrder => "/new-order",
            Self::Admin => "/admin",
        }
    }

    /// Whether this page is reachable without a session.
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Home | Self::Login)
    }
}

/// Where the bootstrap sends the user, when it has to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// No valid session: sign in first.
    Login,
    /// Signed in, but this page needs a role the user lacks.
    Home,
}

/// Decide whether `page` may run with the current session.
///
/// Runs before any page logic.
#[must_use]
pub fn gate(page: Page, session: &SessionStore) -> Option<Redirect> {
    if page.is_public() {
        return None;
    }
    if !session.is_authenticated() {
        return Some(Redirect::Login);
    }
    if page == Page::Admin && !session.is_admin() {
        return Some(Redirect::Home);
    }
    None
}

/// Navigator for the terminal frontend.
///
/// A one-shot process has no page to swap, so the redirect becomes an
/// instruction to sign in again.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliNavigator;

impl Navigator for CliNavigator {
    fn redirect_to_login(&self) {
        tracing::warn!("session ended - run `samovar login` to sign in again");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samovar_client::models::UserProfile;
    use samovar_core::{Role, UserId};

    const ALL_PAGES: [Page; 6] = [
        Page::Home,
        Page::Login,
        Page::Dashboard,
        Page::Orders,
        Page::NewOrder,
        Page::Admin,
    ];

    fn empty_session() -> (SessionStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let session = SessionStore::open(dir.path().join("session.json"));
        (session, dir)
    }

    fn session_with_role(role: Role) -> (SessionStore, tempfile::TempDir) {
        let (session, dir) = empty_session();
        session.set_session(
            "tok-1",
            UserProfile {
                id: UserId::new(1),
                username: "morteza".to_owned(),
                full_name: "مرتضی احمدی".to_owned(),
                role,
            },
        );
        (session, dir)
    }

    #[test]
    fn protected_pages_redirect_without_session() {
        let (session, _dir) = empty_session();
        for page in ALL_PAGES {
            let expected = if page.is_public() {
                None
            } else {
                Some(Redirect::Login)
            };
            assert_eq!(gate(page, &session), expected, "page {:?}", page.path());
        }
    }

    #[test]
    fn public_set_is_exactly_home_and_login() {
        let public: Vec<_> = ALL_PAGES.into_iter().filter(|p| p.is_public()).collect();
        assert_eq!(public, vec![Page::Home, Page::Login]);
    }

    #[test]
    fn cashier_passes_everywhere_except_admin() {
        let (session, _dir) = session_with_role(Role::Cashier);
        assert_eq!(gate(Page::Dashboard, &session), None);
        assert_eq!(gate(Page::Orders, &session), None);
        assert_eq!(gate(Page::Admin, &session), Some(Redirect::Home));
    }

    #[test]
    fn admin_passes_the_admin_gate() {
        let (session, _dir) = session_with_role(Role::Admin);
        assert_eq!(gate(Page::Admin, &session), None);
    }

    #[test]
    fn paths_match_the_site_routes() {
        assert_eq!(Page::Home.path(), "/");
        assert_eq!(Page::Login.path(), "/login");
        assert_eq!(Page::NewOrder.path(), "/new-order");
    }
}
