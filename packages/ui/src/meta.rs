use chrono::NaiveDate;
use dioxus::prelude::*;
use serde_json::{json, Value};

use api::config::DEFAULT_SITE_URL;

use crate::content::OWNER_NAME;
use crate::i18n::Lang;

const PUBLISHED: &str = "2025-01-20";
const OG_IMAGE: &str = "/images/og-image.jpg";

/// Head metadata for one locale of the single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub og_locale: &'static str,
    pub in_language: &'static str,
    pub canonical: String,
}

/// `base` is the deployment origin without a trailing slash.
pub fn localized_url(base: &str, lang: Lang) -> String {
    match lang {
        Lang::Fr => base.to_string(),
        Lang::En => format!("{base}/en"),
    }
}

pub fn page_meta(base: &str, lang: Lang) -> PageMeta {
    let (title, description, og_locale, in_language) = match lang {
        Lang::Fr => (
            "Landry Tido | Développeur Full-stack - React & Spring Boot",
            "Portfolio de Landry Tido, développeur Full-stack spécialisé en React, Spring Boot, TypeScript et GraphQL. Basé à Bruxelles, disponible pour projets freelance.",
            "fr_FR",
            "fr-FR",
        ),
        Lang::En => (
            "Landry Tido | Full-stack Developer - React & Spring Boot",
            "Portfolio of Landry Tido, Full-stack developer specialized in React, Spring Boot, TypeScript and GraphQL. Based in Brussels, available for freelance projects.",
            "en_US",
            "en-US",
        ),
    };
    PageMeta {
        title,
        description,
        og_locale,
        in_language,
        canonical: localized_url(base, lang),
    }
}

/// schema.org `WebPage` block for the given locale.
pub fn json_ld(base: &str, meta: &PageMeta, modified: NaiveDate) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebPage",
        "@id": format!("{}#webpage", meta.canonical),
        "url": meta.canonical,
        "name": meta.title,
        "description": meta.description,
        "inLanguage": meta.in_language,
        "isPartOf": {
            "@type": "WebSite",
            "@id": format!("{base}#website"),
            "url": base,
            "name": format!("Portfolio {OWNER_NAME}"),
        },
        "about": {
            "@type": "Person",
            "@id": format!("{base}#person"),
            "name": OWNER_NAME,
        },
        "primaryImageOfPage": {
            "@type": "ImageObject",
            "url": format!("{base}{OG_IMAGE}"),
            "width": 1200,
            "height": 630,
        },
        "datePublished": PUBLISHED,
        "dateModified": modified.format("%Y-%m-%d").to_string(),
    })
}

#[component]
pub fn PageHead() -> Element {
    let lang = crate::use_lang()();
    let cfg = use_server_future(|| async move { api::public_config().await })?;
    let base = match cfg() {
        Some(Ok(cfg)) => cfg.site_url,
        _ => DEFAULT_SITE_URL.to_string(),
    };

    let meta = page_meta(&base, lang);
    let ld = json_ld(&base, &meta, chrono::Utc::now().date_naive()).to_string();
    let fr_url = localized_url(&base, Lang::Fr);
    let en_url = localized_url(&base, Lang::En);

    rsx! {
        document::Title { "{meta.title}" }
        document::Meta { name: "description", content: meta.description }
        document::Meta { property: "og:title", content: meta.title }
        document::Meta { property: "og:description", content: meta.description }
        document::Meta { property: "og:locale", content: meta.og_locale }
        document::Link { rel: "canonical", href: "{meta.canonical}" }
        document::Link { rel: "alternate", hreflang: "fr", href: "{fr_url}" }
        document::Link { rel: "alternate", hreflang: "en", href: "{en_url}" }
        document::Link { rel: "alternate", hreflang: "x-default", href: "{fr_url}" }
        script { r#type: "application/ld+json", dangerous_inner_html: "{ld}" }
    }
}
