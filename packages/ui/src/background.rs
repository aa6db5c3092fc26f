use dioxus::prelude::*;
use rand::Rng;
use std::ops::Range;

const CODE_SYMBOLS: &[&str] = &[
    "{", "}", "<>", "//", "=", "=>", "&&", "||", "()", "[]", "...", "?.", ".map", "await",
    "import", "export", "const", "function", "return",
];

#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub name: &'static str,
    pub count: usize,
    pub size_rem: Range<f32>,
    pub duration_s: Range<f32>,
    pub max_delay_s: f32,
    pub opacity: f32,
    pub palette: &'static [&'static str],
}

pub fn foreground() -> LayerSpec {
    LayerSpec {
        name: "front",
        count: 25,
        size_rem: 1.2..1.8,
        duration_s: 10.0..15.0,
        max_delay_s: 5.0,
        opacity: 0.3,
        palette: &["#10B981", "#4F46E5", "#FF5722"],
    }
}

pub fn background() -> LayerSpec {
    LayerSpec {
        name: "mid",
        count: 30,
        size_rem: 0.8..1.2,
        duration_s: 12.0..20.0,
        max_delay_s: 8.0,
        opacity: 0.2,
        palette: &["#10B981", "#4F46E5", "#FF5722", "#64748B"],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingSymbol {
    pub id: String,
    pub symbol: &'static str,
    pub x_pct: f32,
    pub y_pct: f32,
    pub size_rem: f32,
    pub opacity: f32,
    pub color: &'static str,
    pub duration_s: f32,
    pub delay_s: f32,
    /// Vertical drift in px, within ±5.
    pub drift_px: f32,
}

/// Place `layer.count` symbols using the given random source.
pub fn generate_layer<R: Rng + ?Sized>(rng: &mut R, layer: &LayerSpec) -> Vec<FloatingSymbol> {
    (0..layer.count)
        .map(|i| FloatingSymbol {
            id: format!("{}-{i}", layer.name),
            symbol: CODE_SYMBOLS[rng.gen_range(0..CODE_SYMBOLS.len())],
            x_pct: rng.gen_range(0.0..100.0),
            y_pct: rng.gen_range(0.0..100.0),
            size_rem: rng.gen_range(layer.size_rem.clone()),
            opacity: layer.opacity,
            color: layer.palette[i % layer.palette.len()],
            duration_s: rng.gen_range(layer.duration_s.clone()),
            delay_s: rng.gen_range(0.0..layer.max_delay_s),
            drift_px: rng.gen_range(-5.0..5.0),
        })
        .collect()
}

#[component]
pub fn CodeBackground() -> Element {
    let symbols = use_hook(|| {
        let mut rng = rand::thread_rng();
        let mut all = generate_layer(&mut rng, &foreground());
        all.extend(generate_layer(&mut rng, &background()));
        all
    });

    rsx! {
        div { class: "code_background", "aria-hidden": "true",
            for s in symbols.iter() {
                div {
                    key: "{s.id}",
                    class: "code_symbol",
                    style: "left:{s.x_pct:.2}%; top:{s.y_pct:.2}%; font-size:{s.size_rem:.2}rem; color:{s.color}; --peak-opacity:{s.opacity}; --drift:{s.drift_px:.1}px; animation-duration:{s.duration_s:.2}s; animation-delay:{s.delay_s:.2}s;",
                    "{s.symbol}"
                }
            }
        }
    }
}
