//! The site wide navigation bar.

pub mod view;

use crate::paths;

pub use view::Navigation;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        href: paths::HOME,
        label: "Início",
        icon: "🏠",
    },
    NavItem {
        href: paths::GAMES,
        label: "Peladas",
        icon: "📅",
    },
    NavItem {
        href: paths::PLAYERS,
        label: "Jogadores",
        icon: "👥",
    },
    NavItem {
        href: paths::RANKINGS,
        label: "Rankings",
        icon: "🏆",
    },
];

impl NavItem {
    /// the home route only matches itself, everything else matches by prefix
    pub fn is_active(&self, path: &str) -> bool {
        if self.href == paths::HOME {
            return path == paths::HOME;
        }
        path.starts_with(self.href)
    }
}

/// A navigation link with its highlight resolved for the current path
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub item: NavItem,
    pub active: bool,
}

pub fn nav_links(path: &str) -> Vec<NavLink> {
    NAV_ITEMS
        .iter()
        .map(|item| NavLink {
            item: *item,
            active: item.is_active(path),
        })
        .collect()
}

/// the query parameter carrying the mobile panel state
pub const MENU_PARAM: &str = "menu";

/// State of the collapsible mobile menu
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuPanel {
    Closed,
    Open,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// the menu button was pressed
    Toggle,
    /// any link inside the panel was followed
    SelectLink,
    /// the close button was pressed
    Dismiss,
}

impl Default for MenuPanel {
    fn default() -> Self {
        MenuPanel::Closed
    }
}

impl MenuPanel {
    pub fn transition(self, event: MenuEvent) -> MenuPanel {
        match (self, event) {
            (MenuPanel::Closed, MenuEvent::Toggle) => MenuPanel::Open,
            (MenuPanel::Open, MenuEvent::SelectLink) | (MenuPanel::Open, MenuEvent::Dismiss) => {
                MenuPanel::Closed
            }
            (state, _) => state,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuPanel::Open
    }

    /// reads the panel state from the `menu` query parameter
    pub fn from_param(value: Option<&str>) -> MenuPanel {
        match value {
            Some("open") => MenuPanel::Open,
            _ => MenuPanel::Closed,
        }
    }

    /// where the menu button points to when the panel is in this state
    pub fn toggle_href(self, path: &str) -> String {
        match self.transition(MenuEvent::Toggle) {
            MenuPanel::Open => format!("{}?{}=open", path, MENU_PARAM),
            MenuPanel::Closed => path.to_string(),
        }
    }
}

/// the query string of a page carrying the navigation bar
#[derive(Debug, Deserialize, Default)]
pub struct NavQuery {
    pub menu: Option<String>,
}

impl NavQuery {
    pub fn panel(&self) -> MenuPanel {
        MenuPanel::from_param(self.menu.as_deref())
    }
}
