use dioxus::prelude::*;

use crate::content::{EDUCATIONS, EXPERIENCES};
use crate::i18n::{resolve, t};

#[component]
pub fn ExperienceSection() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        section { id: "experience", class: "section experience",
            h2 { class: "section_title", {t(lang, "experience.title")} }
            p { class: "section_subtitle", {t(lang, "experience.subtitle")} }
            div { class: "timeline",
                for exp in EXPERIENCES.iter() {
                    article { key: "{exp.id}", class: "card timeline_item",
                        div { class: "timeline_head",
                            h3 { {resolve(&exp.title, lang)} }
                            span { class: "date", {resolve(&exp.date, lang)} }
                        }
                        p { class: "company", "{exp.company}" }
                        ul {
                            for (i, task) in resolve(&exp.tasks, lang).iter().enumerate() {
                                li { key: "{i}", "{task}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EducationSection() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        section { id: "education", class: "section education",
            h2 { class: "section_title", {t(lang, "education.title")} }
            div { class: "timeline",
                for edu in EDUCATIONS.iter() {
                    article { key: "{edu.id}", class: "card timeline_item",
                        div { class: "timeline_head",
                            h3 { {resolve(&edu.degree, lang)} }
                            span { class: "date", {resolve(&edu.date, lang)} }
                        }
                        p { class: "company", "{edu.institution}" }
                        if let Some(description) = edu.description {
                            p { {resolve(&description, lang)} }
                        }
                    }
                }
            }
        }
    }
}
