use dioxus::prelude::*;
use ui::{Lang, Portfolio};

#[component]
pub fn Home() -> Element {
    rsx! { Portfolio { initial_lang: Lang::Fr } }
}

/// Same page, English first.
#[component]
pub fn HomeEn() -> Element {
    rsx! { Portfolio { initial_lang: Lang::En } }
}
