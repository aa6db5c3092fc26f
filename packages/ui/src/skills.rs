use dioxus::prelude::*;

use crate::content::SKILL_CATEGORIES;
use crate::i18n::{resolve, t};

#[component]
pub fn Skills() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        section { id: "skills", class: "section skills",
            h2 { class: "section_title", {t(lang, "skills.title")} }
            p { class: "section_subtitle", {t(lang, "skills.subtitle")} }
            div { class: "skills_grid",
                for category in SKILL_CATEGORIES.iter() {
                    div { key: "{category.id}", class: "card skill_card",
                        h3 { {resolve(&category.title, lang)} }
                        div { class: "skill_tags",
                            for skill in category.skills.iter() {
                                span {
                                    key: "{skill.name}",
                                    class: "skill_tag",
                                    style: "--skill-color:{skill.color}",
                                    "{skill.name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
