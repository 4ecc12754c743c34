// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    About,
    Programs,
    Faq,
    Contact,
}

impl Screen {
    /// All screens, in navbar order.
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::About,
        Screen::Programs,
        Screen::Faq,
        Screen::Contact,
    ];

    /// Label shown in the navigation bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::About => "About",
            Screen::Programs => "Programs",
            Screen::Faq => "FAQ",
            Screen::Contact => "Contact",
        }
    }
}
