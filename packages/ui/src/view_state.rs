//! Ephemeral page state. Each slice is independent and owned by the component
//! that renders it; transitions here never touch the network or the DOM.

use std::time::Duration;

/// How long the splash screen stays up after mount.
pub const LOADING_DELAY: Duration = Duration::from_millis(2500);
/// Portrait swap period in the about section.
pub const IMAGE_SWAP_PERIOD: Duration = Duration::from_millis(5000);
/// Hero emoji pulse period.
pub const PULSE_PERIOD: Duration = Duration::from_millis(1200);
/// Fixed navbar height subtracted when scrolling to a section.
pub const NAVBAR_OFFSET_PX: i32 = 80;

/// Component-scoped delay. Tasks spawned from a component are dropped with it,
/// so a pending sleep never fires after teardown.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Timers only run in the browser; server renders keep the initial state.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(_duration: Duration) {
    std::future::pending::<()>().await;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu and hand back the section to scroll to.
    pub fn navigate(&mut self, section: &'static str) -> &'static str {
        self.open = false;
        section
    }
}

/// One-way latch for the splash screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingGate {
    loading: bool,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self { loading: true }
    }
}

impl LoadingGate {
    pub fn is_loading(self) -> bool {
        self.loading
    }

    pub fn finish(&mut self) {
        self.loading = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Features,
    Tech,
}

/// Which project card is open in the detail view, and on which tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectView {
    selected: Option<&'static str>,
    tab: DetailTab,
}

impl ProjectView {
    pub fn selected(self) -> Option<&'static str> {
        self.selected
    }

    pub fn tab(self) -> DetailTab {
        self.tab
    }

    /// Open `id`, replacing any open project. A different id starts on the
    /// default tab.
    pub fn select(&mut self, id: &'static str) {
        if self.selected != Some(id) {
            self.tab = DetailTab::default();
        }
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn set_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }
}

/// Index over a fixed number of values, wrapping on `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    len: usize,
    index: usize,
}

impl Cycle {
    /// `len` of zero is treated as one.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            index: 0,
        }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }
}
