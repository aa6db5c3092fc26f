use dioxus::prelude::*;

use crate::content::NAV_ITEMS;
use crate::i18n::{resolve, set_lang, t, Lang};
use crate::view_state::{MenuState, Theme, NAVBAR_OFFSET_PX};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Smooth-scroll so that `section` sits just below the fixed navbar.
pub fn scroll_to_section(section: &str) {
    let id = serde_json::to_string(section).unwrap_or_else(|_| "\"\"".to_string());
    let js = format!(
        r#"(function(){{
          const el = document.getElementById({id});
          if (!el) return;
          window.scrollTo({{ top: el.offsetTop - {NAVBAR_OFFSET_PX}, behavior: "smooth" }});
        }})()"#
    );
    spawn(async move {
        if let Err(e) = document::eval(&js).await {
            tracing::debug!("navbar: scroll eval failed: {e}");
        }
    });
}

#[component]
pub fn Navbar() -> Element {
    let lang_sig = crate::use_lang();
    let lang = lang_sig();
    let mut theme = crate::use_theme();
    let mut menu = use_signal(MenuState::default);

    let go = move |section: &'static str| {
        let target = menu.with_mut(|m| m.navigate(section));
        scroll_to_section(target);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        header { id: "navbar",
            div { class: "nav_bar",
                div { class: "brand",
                    span { class: "brand_accent", "L" }
                    span { "T" }
                }
                nav { class: "nav_desktop", NavLinks { lang, on_navigate: go } }
                div { class: "nav_actions",
                    div { class: "lang_switch",
                        for code in Lang::ALL {
                            button {
                                key: "{code.code()}",
                                class: if code == lang { "lang active" } else { "lang" },
                                onclick: move |_| set_lang(lang_sig, code),
                                {code.code().to_uppercase()}
                            }
                        }
                    }
                    button {
                        class: "icon_btn",
                        "aria-label": t(lang, "nav.toggle_theme"),
                        onclick: move |_| theme.with_mut(|th| th.toggle()),
                        if theme() == Theme::Dark { "☀" } else { "☾" }
                    }
                    button {
                        class: "icon_btn menu_toggle",
                        "aria-label": t(lang, "nav.toggle_menu"),
                        "aria-expanded": menu().is_open(),
                        onclick: move |_| menu.with_mut(|m| m.toggle()),
                        if menu().is_open() { "✕" } else { "☰" }
                    }
                }
            }
            if menu().is_open() {
                nav { class: "nav_mobile", NavLinks { lang, on_navigate: go } }
            }
        }
    }
}

#[component]
fn NavLinks(lang: Lang, on_navigate: EventHandler<&'static str>) -> Element {
    rsx! {
        for item in NAV_ITEMS.iter() {
            button {
                key: "{item.id}",
                class: "nav_link",
                onclick: move |_| on_navigate.call(item.id),
                {resolve(&item.label, lang)}
            }
        }
    }
}
