use dioxus::prelude::*;

use crate::content::{social, SocialKind, CV_FILENAME, CV_PATH, OWNER_NAME};
use crate::i18n::t;
use crate::navbar::scroll_to_section;
use crate::view_state::{sleep, Cycle, PULSE_PERIOD};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let lang = crate::use_lang()();
    let mut pulse = use_signal(|| Cycle::new(2));

    use_effect(move || {
        spawn(async move {
            loop {
                sleep(PULSE_PERIOD).await;
                pulse.with_mut(|c| c.advance());
            }
        });
    });

    let greeting_class = if pulse().index() == 1 { "wave pulse" } else { "wave" };

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "hero",
            p { class: "greeting",
                {t(lang, "hero.greeting")}
                " "
                span { class: greeting_class, "aria-hidden": "true", "👋" }
            }
            h1 { class: "hero_name", "{OWNER_NAME}" }
            h2 { class: "hero_role", {t(lang, "hero.role")} }

            div { class: "hero_socials",
                for kind in [SocialKind::GitHub, SocialKind::LinkedIn, SocialKind::Email] {
                    if let Some(link) = social(kind) {
                        a {
                            key: "{link.label}",
                            class: "social_icon",
                            href: link.href,
                            target: if link.external() { "_blank" } else { "_self" },
                            rel: "noopener noreferrer",
                            "aria-label": link.label,
                            "{link.label}"
                        }
                    }
                }
            }

            div { class: "cta_row",
                a {
                    class: "btn primary",
                    href: "#projects",
                    onclick: move |e: MouseEvent| {
                        e.prevent_default();
                        scroll_to_section("projects");
                    },
                    {t(lang, "hero.cta.projects")}
                }
                a { class: "btn", href: CV_PATH, download: CV_FILENAME, {t(lang, "hero.cta.cv")} }
            }
        }
    }
}
