// SPDX-License-Identifier: MPL-2.0
//! Panel selection.
//!
//! The portfolio shows one of a fixed set of panels at a time. The heading
//! and the ordered content sections of the active panel are derived by
//! [`layout_for`] and cached until the selection changes.

use super::memo::Memo;
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// The closed set of content panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Overview,
    Journey,
    Gallery,
}

impl Panel {
    /// All panels, in tab order.
    pub const ALL: [Panel; 3] = [Panel::Overview, Panel::Journey, Panel::Gallery];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Panel::Overview => "overview",
            Panel::Journey => "journey",
            Panel::Gallery => "gallery",
        }
    }

    /// Key of the tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Panel::Overview => "panel-overview",
            Panel::Journey => "panel-journey",
            Panel::Gallery => "panel-gallery",
        }
    }

    /// Keyboard shortcut selecting this panel ("1", "2", "3").
    #[must_use]
    pub fn shortcut(self) -> &'static str {
        match self {
            Panel::Overview => "1",
            Panel::Journey => "2",
            Panel::Gallery => "3",
        }
    }

    #[must_use]
    pub fn from_shortcut(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|panel| panel.shortcut() == key)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Panel {
    type Err = Error;

    /// Parses a panel name, ignoring ASCII case. Only used at the CLI
    /// boundary; inside the program panels are always the enum.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|panel| panel.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::Cli(format!(
                    "unknown panel '{s}' (expected overview, journey or gallery)"
                ))
            })
    }
}

/// A content block rendered inside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Projects,
    Milestones,
    Contact,
    Gallery,
}

/// What the active panel shows: a heading and its sections, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub panel: Panel,
    pub heading_key: &'static str,
    pub sections: Vec<Section>,
}

/// Pure derivation of a panel's layout.
#[must_use]
pub fn layout_for(panel: Panel) -> PanelLayout {
    let (heading_key, sections) = match panel {
        Panel::Overview => (
            "panel-overview-heading",
            vec![Section::About, Section::Skills, Section::Projects],
        ),
        Panel::Journey => (
            "panel-journey-heading",
            vec![Section::Milestones, Section::Contact],
        ),
        Panel::Gallery => ("panel-gallery-heading", vec![Section::Gallery]),
    };
    PanelLayout {
        panel,
        heading_key,
        sections,
    }
}

/// Active panel of one portfolio view, with its cached layout.
#[derive(Debug, Clone)]
pub struct PanelSelector {
    layout: Memo<Panel, PanelLayout>,
}

impl PanelSelector {
    #[must_use]
    pub fn new(initial: Panel) -> Self {
        Self {
            layout: Memo::new(initial, layout_for),
        }
    }

    /// Makes `panel` active. Selecting the active panel changes nothing.
    pub fn select(&mut self, panel: Panel) {
        if self.layout.refresh(panel) {
            tracing::debug!(%panel, "panel selected");
        }
    }

    #[must_use]
    pub fn active(&self) -> Panel {
        self.layout.key()
    }

    #[must_use]
    pub fn layout(&self) -> &PanelLayout {
        self.layout.value()
    }

    /// Number of layout derivations so far.
    #[must_use]
    pub fn layout_computations(&self) -> u64 {
        self.layout.computations()
    }
}

impl Default for PanelSelector {
    fn default() -> Self {
        Self::new(Panel::default())
    }
}
