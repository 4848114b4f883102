use crate::i18n::Strings;

/// Anchored sections of the landing page, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Courses,
    About,
    Faq,
    Contacts,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Courses,
        Section::About,
        Section::Faq,
        Section::Contacts,
    ];

    #[must_use]
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Courses => "courses",
            Section::About => "about",
            Section::Faq => "faq",
            Section::Contacts => "contacts",
        }
    }

    #[must_use]
    pub fn label(self, strings: &Strings) -> &'static str {
        match self {
            Section::Home => strings.nav_home,
            Section::Courses => strings.nav_courses,
            Section::About => strings.nav_about,
            Section::Faq => strings.nav_faq,
            Section::Contacts => strings.nav_contacts,
        }
    }
}
