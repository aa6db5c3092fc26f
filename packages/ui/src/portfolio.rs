use dioxus::prelude::*;

use crate::i18n::{I18nProvider, Lang};
use crate::view_state::{sleep, LoadingGate, LOADING_DELAY};
use crate::{
    About, CodeBackground, ContactSection, EducationSection, ExperienceSection, Footer, Hero,
    LoadingScreen, Navbar, PageHead, Projects, Skills, ThemeProvider,
};

/// The whole single page, starting in `initial_lang`.
#[component]
pub fn Portfolio(#[props(default)] initial_lang: Lang) -> Element {
    rsx! {
        I18nProvider { initial: initial_lang,
            ThemeProvider { PortfolioBody {} }
        }
    }
}

#[component]
fn PortfolioBody() -> Element {
    let mut gate = use_signal(LoadingGate::default);

    use_effect(move || {
        spawn(async move {
            sleep(LOADING_DELAY).await;
            gate.with_mut(|g| g.finish());
            tracing::debug!("portfolio: loading screen dismissed");
        });
    });

    rsx! {
        // Head tags wait on the server config without holding back the page.
        SuspenseBoundary { fallback: |_| rsx! {},
            PageHead {}
        }
        if gate().is_loading() {
            LoadingScreen {}
        }
        CodeBackground {}
        Navbar {}
        main { role: "main",
            Hero {}
            About {}
            Skills {}
            Projects {}
            ExperienceSection {}
            EducationSection {}
            ContactSection {}
        }
        Footer {}
    }
}
