use dioxus::prelude::*;

use crate::i18n::t;

#[component]
pub fn LoadingScreen() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        div { class: "loading_screen", role: "progressbar", "aria-busy": "true",
            svg { class: "loading_mark", view_box: "0 0 100 100",
                circle {
                    cx: "50", cy: "50", r: "40",
                    stroke: "#10B981", stroke_width: "8", fill: "transparent",
                    class: "loading_ring",
                }
                path {
                    d: "M50 10 L60 30 L80 30 L65 45 L70 65 L50 55 L30 65 L35 45 L20 30 L40 30 Z",
                    fill: "#FFD700",
                }
            }
            h1 { {t(lang, "loading.name")} }
            div { class: "loading_dots",
                for delay in [0, 150, 300] {
                    span { key: "{delay}", style: "animation-delay:{delay}ms" }
                }
            }
        }
    }
}
