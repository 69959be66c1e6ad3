//! Panel visibility and tab button state.
//!
//! DESIGN
//! ======
//! The page has exactly two sections and two tab buttons. Switching is keyed
//! by the section identifier, the same string the tab buttons carry.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Content sections of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    /// Query understanding: free-text analysis.
    #[default]
    Query,
    /// Adaptive learning: recommendation form.
    Adaptive,
}

impl Panel {
    pub const ALL: [Self; 2] = [Self::Query, Self::Adaptive];

    pub fn id(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Adaptive => "adaptive",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|panel| panel.id() == id)
    }
}

/// Which section is shown and which tab button is highlighted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// `None` when the last switch named no known section.
    pub visible_panel: Option<Panel>,
    /// The tab button drawn as active. Binary: the query button for
    /// `"query"`, the adaptive button for anything else.
    pub active_tab: Panel,
}

impl Default for UiState {
    fn default() -> Self {
        Self { visible_panel: Some(Panel::Query), active_tab: Panel::Query }
    }
}

impl UiState {
    /// Show the section named `tab` and hide the rest.
    pub fn switch_tab(&mut self, tab: &str) {
        self.visible_panel = Panel::from_id(tab);
        self.active_tab = if tab == Panel::Query.id() { Panel::Query } else { Panel::Adaptive };
        if self.visible_panel.is_none() {
            log::debug!("switch_tab: no section named '{tab}'");
        }
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible_panel == Some(panel)
    }

    pub fn is_tab_active(&self, panel: Panel) -> bool {
        self.active_tab == panel
    }
}
