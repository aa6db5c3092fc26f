use dioxus::prelude::*;

use crate::content::{find_project, Project, PROJECTS};
use crate::i18n::{resolve, t, Lang};
use crate::view_state::{DetailTab, ProjectView};

const PROJECTS_CSS: Asset = asset!("/assets/styling/projects.css");

#[component]
pub fn Projects() -> Element {
    let lang = crate::use_lang()();
    let mut view = use_signal(ProjectView::default);

    // A stale id resolves to nothing and the modal simply stays closed.
    let open = view().selected().and_then(find_project);

    rsx! {
        document::Link { rel: "stylesheet", href: PROJECTS_CSS }
        section { id: "projects", class: "section projects",
            h2 { class: "section_title", {t(lang, "projects.title")} }
            p { class: "section_subtitle", {t(lang, "projects.subtitle")} }

            div { class: "projects_grid",
                for project in PROJECTS.iter() {
                    ProjectCard {
                        key: "{project.id}",
                        project: *project,
                        lang,
                        on_open: move |id: &'static str| view.with_mut(|v| v.select(id)),
                    }
                }
            }

            if let Some(project) = open {
                ProjectDetail { project: *project, lang, view }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, lang: Lang, on_open: EventHandler<&'static str>) -> Element {
    let title = resolve(&project.title, lang);
    rsx! {
        article {
            class: "card project_card",
            tabindex: "0",
            onclick: move |_| on_open.call(project.id),
            div { class: "project_media",
                img { src: project.image, alt: "{title}", loading: "lazy" }
                span { class: "badge", {resolve(&project.kind.label(), lang)} }
            }
            div { class: "project_body",
                h3 { "{title}" }
                p { class: "summary", {resolve(&project.description, lang)} }
                div { class: "tech_tags",
                    for tech in project.technologies.iter() {
                        span { key: "{tech}", class: "tech_tag", "{tech}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectDetail(project: Project, lang: Lang, view: Signal<ProjectView>) -> Element {
    let mut view = view;
    let tab = view().tab();
    let title = resolve(&project.title, lang);
    let tab_class = |which: DetailTab| if which == tab { "tab active" } else { "tab" };

    rsx! {
        div {
            class: "modal_backdrop",
            onclick: move |_| view.with_mut(|v| v.close()),
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{title}",
                onclick: move |e: MouseEvent| e.stop_propagation(),

                div { class: "modal_media",
                    img { src: project.image, alt: "{title}" }
                    button {
                        class: "modal_close",
                        "aria-label": t(lang, "projects.close"),
                        onclick: move |_| view.with_mut(|v| v.close()),
                        "✕"
                    }
                }
                div { class: "modal_body",
                    h3 { "{title}" }
                    span { class: "badge", {resolve(&project.kind.label(), lang)} }
                    p { {resolve(&project.description, lang)} }

                    div { class: "tabs", role: "tablist",
                        button {
                            class: tab_class(DetailTab::Features),
                            role: "tab",
                            onclick: move |_| view.with_mut(|v| v.set_tab(DetailTab::Features)),
                            {t(lang, "projects.tab.features")}
                        }
                        button {
                            class: tab_class(DetailTab::Tech),
                            role: "tab",
                            onclick: move |_| view.with_mut(|v| v.set_tab(DetailTab::Tech)),
                            {t(lang, "projects.tab.tech")}
                        }
                    }

                    match tab {
                        DetailTab::Features => match project.features {
                            Some(list) => rsx! {
                                ul { class: "features",
                                    for (i, feature) in resolve(&list, lang).iter().enumerate() {
                                        li { key: "{i}", "{feature}" }
                                    }
                                }
                            },
                            None => rsx! { p { class: "hint", {t(lang, "projects.no_features")} } },
                        },
                        DetailTab::Tech => rsx! {
                            div { class: "tech_tags",
                                for tech in project.technologies.iter() {
                                    span { key: "{tech}", class: "tech_tag", "{tech}" }
                                }
                            }
                        },
                    }

                    div { class: "modal_links",
                        if let Some(href) = project.github {
                            a { class: "btn", href, target: "_blank", rel: "noopener noreferrer", {t(lang, "projects.github")} }
                        }
                        if let Some(href) = project.demo {
                            a { class: "btn primary", href, target: "_blank", rel: "noopener noreferrer", {t(lang, "projects.demo")} }
                        }
                    }
                }
            }
        }
    }
}
