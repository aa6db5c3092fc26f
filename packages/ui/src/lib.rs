//! This crate contains all shared UI for the workspace.

pub mod content;
pub mod contact;
pub mod i18n;
pub mod meta;
pub mod view_state;

pub mod background;
pub use background::CodeBackground;

mod theme;
pub use theme::{use_theme, ThemeProvider};

mod navbar;
pub use navbar::{scroll_to_section, Navbar};

mod loading;
pub use loading::LoadingScreen;

mod hero;
pub use hero::Hero;

mod about;
pub use about::About;

mod skills;
pub use skills::Skills;

mod projects;
pub use projects::Projects;

mod experience;
pub use experience::{EducationSection, ExperienceSection};

mod footer;
pub use footer::Footer;

mod portfolio;
pub use portfolio::Portfolio;

pub use contact::ContactSection;
pub use i18n::{set_lang, t, use_lang, I18nProvider, Lang};
pub use meta::PageHead;
