use chrono::Datelike;
use dioxus::prelude::*;

use crate::content::{OWNER_NAME, SOCIAL_LINKS};
use crate::i18n::t;

#[component]
pub fn Footer() -> Element {
    let lang = crate::use_lang()();
    let year = chrono::Utc::now().year();

    rsx! {
        footer { class: "site_footer",
            div { class: "footer_links",
                for link in SOCIAL_LINKS.iter() {
                    a {
                        key: "{link.label}",
                        href: link.href,
                        target: if link.external() { "_blank" } else { "_self" },
                        rel: "noopener noreferrer",
                        "aria-label": link.label,
                        "{link.label}"
                    }
                }
            }
            p { {t(lang, "footer.credit")} }
            p { class: "copyright", "© {year} {OWNER_NAME}. " {t(lang, "footer.rights")} }
        }
    }
}
