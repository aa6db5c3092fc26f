use dioxus::prelude::*;

use crate::content::{ABOUT_HIGHLIGHTS, PORTRAITS};
use crate::i18n::{resolve, t};
use crate::view_state::{sleep, Cycle, IMAGE_SWAP_PERIOD};

const ABOUT_CSS: Asset = asset!("/assets/styling/about.css");

#[component]
pub fn About() -> Element {
    let lang = crate::use_lang()();
    let mut portrait = use_signal(|| Cycle::new(PORTRAITS.len()));

    // Dropped with the component, so the swap stops on unmount.
    use_effect(move || {
        spawn(async move {
            loop {
                sleep(IMAGE_SWAP_PERIOD).await;
                portrait.with_mut(|c| c.advance());
            }
        });
    });

    let src = PORTRAITS[portrait().index()];
    let alt = t(lang, "about.portrait_alt");

    rsx! {
        document::Link { rel: "stylesheet", href: ABOUT_CSS }
        section { id: "about", class: "section about",
            h2 { class: "section_title", {t(lang, "about.title")} }
            div { class: "about_grid",
                div { class: "portrait",
                    img { src, alt: "{alt}", width: "320", height: "320" }
                }
                div { class: "about_text",
                    h3 { {t(lang, "about.heading")} }
                    p { {t(lang, "about.p1")} }
                    p { {t(lang, "about.p2")} }
                    ul { class: "highlights",
                        for (i, item) in ABOUT_HIGHLIGHTS.iter().enumerate() {
                            li { key: "{i}", {resolve(item, lang)} }
                        }
                    }
                }
            }
        }
    }
}
