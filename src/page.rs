//! Page switching
//!
//! The app has no URL router: the current page is a signal, and every
//! navigation goes through `Page::resolve` so guarded pages cannot be
//! reached without the right session.

use crate::models::User;

/// Delay before leaving the login page after a successful sign-in
pub const LOGIN_REDIRECT_MS: u32 = 500;
/// Delay before leaving the register page after account creation
pub const REGISTER_REDIRECT_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Login,
    Register,
    Dashboard,
    Rooms,
    Reservations,
    Admin,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Giriş Yap",
            Page::Register => "Kayıt Ol",
            Page::Dashboard => "Ana Sayfa",
            Page::Rooms => "Odalar & Ekipmanlar",
            Page::Reservations => "Rezervasyonlarım",
            Page::Admin => "Admin Paneli",
        }
    }

    pub fn requires_login(&self) -> bool {
        !matches!(self, Page::Login | Page::Register)
    }

    /// Where a request for `self` actually lands for this user
    pub fn resolve(self, user: Option<&User>) -> Page {
        match user {
            None if self.requires_login() => Page::Login,
            Some(user) if self == Page::Admin && !user.is_admin() => Page::Dashboard,
            _ => self,
        }
    }

    /// Pages listed in the navigation bar for this user
    pub fn menu(user: &User) -> Vec<Page> {
        let mut pages = vec![Page::Dashboard, Page::Rooms, Page::Reservations];
        if user.is_admin() {
            pages.push(Page::Admin);
        }
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user(role: Role) -> User {
        User { user_id: 1, name: "Ece".to_string(), email: "ece@example.com".to_string(), role }
    }

    #[test]
    fn test_anonymous_is_sent_to_login() {
        for page in [Page::Dashboard, Page::Rooms, Page::Reservations, Page::Admin] {
            assert_eq!(page.resolve(None), Page::Login);
        }
        assert_eq!(Page::Register.resolve(None), Page::Register);
        assert_eq!(Page::Login.resolve(None), Page::Login);
    }

    #[test]
    fn test_admin_page_needs_admin_role() {
        assert_eq!(Page::Admin.resolve(Some(&user(Role::User))), Page::Dashboard);
        assert_eq!(Page::Admin.resolve(Some(&user(Role::Admin))), Page::Admin);
        assert_eq!(Page::Rooms.resolve(Some(&user(Role::User))), Page::Rooms);
    }

    #[test]
    fn test_menu_by_role() {
        assert!(!Page::menu(&user(Role::User)).contains(&Page::Admin));
        assert_eq!(Page::menu(&user(Role::Admin)).last(), Some(&Page::Admin));
    }
}
