use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Rate,
    Answers,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Rate, Tab::Answers];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Rate => "rate",
            Tab::Answers => "answers",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab '{}'", self.0)
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "rate" => Ok(Tab::Rate),
            "answers" => Ok(Tab::Answers),
            other => Err(UnknownTab(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    pub tab: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanel {
    pub tab: String,
    pub hidden: bool,
}

pub fn set_active_tab(name: &str, buttons: &mut [TabButton], panels: &mut [TabPanel]) {
    for button in buttons.iter_mut() {
        button.selected = button.tab == name;
    }
    for panel in panels.iter_mut() {
        panel.hidden = panel.tab != name;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStrip {
    active: Tab,
    pub buttons: Vec<TabButton>,
    pub panels: Vec<TabPanel>,
}

impl TabStrip {
    pub fn new() -> Self {
        let buttons = Tab::ALL
            .iter()
            .map(|tab| TabButton {
                tab: tab.as_str().to_string(),
                selected: false,
            })
            .collect();
        let panels = Tab::ALL
            .iter()
            .map(|tab| TabPanel {
                tab: tab.as_str().to_string(),
                hidden: true,
            })
            .collect();
        let mut strip = Self {
            active: Tab::default(),
            buttons,
            panels,
        };
        strip.activate(Tab::default());
        strip
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn activate(&mut self, tab: Tab) {
        self.active = tab;
        set_active_tab(tab.as_str(), &mut self.buttons, &mut self.panels);
    }

    pub fn is_selected(&self, tab: Tab) -> bool {
        self.buttons
            .iter()
            .any(|button| button.tab == tab.as_str() && button.selected)
    }

    pub fn is_hidden(&self, tab: Tab) -> bool {
        self.panels
            .iter()
            .filter(|panel| panel.tab == tab.as_str())
            .all(|panel| panel.hidden)
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}
