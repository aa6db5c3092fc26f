//! The `/sitemap.xml` document: a fixed list of known URLs.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
    Quarterly,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            // Not a sitemaps.org value; crawlers treat unknown values as a hint only.
            ChangeFreq::Quarterly => "quarterly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitemapEntry {
    /// Path relative to the site root, `""` for the home page.
    pub path: &'static str,
    pub changefreq: ChangeFreq,
    pub priority: f32,
    /// Emit hreflang alternates (home pages only).
    pub alternates: bool,
}

const fn entry(path: &'static str, changefreq: ChangeFreq, priority: f32) -> SitemapEntry {
    SitemapEntry {
        path,
        changefreq,
        priority,
        alternates: false,
    }
}

pub const ENTRIES: &[SitemapEntry] = &[
    SitemapEntry {
        path: "",
        changefreq: ChangeFreq::Weekly,
        priority: 1.0,
        alternates: true,
    },
    SitemapEntry {
        path: "/en",
        changefreq: ChangeFreq::Weekly,
        priority: 0.9,
        alternates: true,
    },
    entry("/developpeur-react-bruxelles", ChangeFreq::Monthly, 0.8),
    entry("/developpeur-spring-boot-belgique", ChangeFreq::Monthly, 0.8),
    entry("/#about", ChangeFreq::Monthly, 0.8),
    entry("/#skills", ChangeFreq::Monthly, 0.7),
    entry("/#projects", ChangeFreq::Weekly, 0.8),
    entry("/#experience", ChangeFreq::Monthly, 0.7),
    entry("/#education", ChangeFreq::Quarterly, 0.6),
    entry("/#contact", ChangeFreq::Monthly, 0.7),
];

pub const CONTENT_TYPE: &str = "application/xml";
pub const CACHE_CONTROL: &str = "public, max-age=86400, stale-while-revalidate";

/// Render the urlset. `lastmod` is stamped on every entry as given.
pub fn render_sitemap(base_url: &str, lastmod: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"\n        \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for e in ENTRIES {
        // Writing into a String cannot fail.
        let _ = writeln!(xml, "  <url>");
        let _ = writeln!(xml, "    <loc>{base}{}</loc>", e.path);
        let _ = writeln!(xml, "    <lastmod>{lastmod}</lastmod>");
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", e.changefreq.as_str());
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", e.priority);
        if e.alternates {
            for (lang, path) in [("fr", ""), ("en", "/en"), ("x-default", "")] {
                let _ = writeln!(
                    xml,
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{lang}\" href=\"{base}{path}\"/>"
                );
            }
        }
        let _ = writeln!(xml, "  </url>");
    }

    xml.push_str("</urlset>\n");
    xml
}
