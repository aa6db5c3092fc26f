use dioxus::prelude::*;

use crate::view_state::Theme;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

/// Provide `Signal<Theme>` and wrap the page in the matching theme class.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let theme = use_signal(Theme::default);
    use_context_provider(|| theme);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        div { class: "app {theme().class()}", {children} }
    }
}

pub fn use_theme() -> Signal<Theme> {
    if let Some(sig) = try_use_context::<Signal<Theme>>() {
        return sig;
    }

    tracing::warn!("theme: missing ThemeProvider context, using local dark theme");
    use_signal(Theme::default)
}
