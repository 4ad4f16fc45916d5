use crate::errors::StoreError;
use crate::stats::coerce_rating;
use crate::storage::{KeyValueStore, RatingsStore};
use crate::tabs::{Tab, TabStrip};
use crate::view::{CsvExport, Visualization, export_csv, render_visualization};
use serde_json::Value;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    DatePicker,
    RatingField,
    Status,
    SaveButton,
    ExportButton,
    Visualization,
}

impl Role {
    pub const REQUIRED: [Role; 6] = [
        Role::DatePicker,
        Role::RatingField,
        Role::Status,
        Role::SaveButton,
        Role::ExportButton,
        Role::Visualization,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Role::DatePicker => "date",
            Role::RatingField => "rating",
            Role::Status => "status",
            Role::SaveButton => "save",
            Role::ExportButton => "export",
            Role::Visualization => "visualization",
        }
    }
}

pub trait Document {
    fn has_element(&self, id: &str) -> bool;

    fn tab_names(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Info,
    Ok,
    Error,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::Info => "info",
            StatusKind::Ok => "ok",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    MissingDate,
    InvalidRating,
    Saved { date: String, rating: u8 },
}

impl SaveOutcome {
    pub fn message(&self) -> String {
        match self {
            SaveOutcome::MissingDate => "Please pick a date.".to_string(),
            SaveOutcome::InvalidRating => "Enter a whole number between 1 and 5.".to_string(),
            SaveOutcome::Saved { date, rating } => format!("Saved {rating}/5 for {date}."),
        }
    }

    fn status(&self) -> Status {
        let kind = match self {
            SaveOutcome::Saved { .. } => StatusKind::Ok,
            _ => StatusKind::Error,
        };
        Status::new(kind, self.message())
    }
}

/// Accepts whole numbers from 1 to 5, with or without surrounding whitespace or a
/// zero fraction ("3", " 3 ", "3.0").
pub fn parse_rating(raw: &str) -> Option<u8> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value.fract() != 0.0 || !(1.0..=5.0).contains(&value) {
        return None;
    }
    Some(value as u8)
}

pub fn handle_save<S: KeyValueStore>(
    store: &mut RatingsStore<S>,
    selected_date: &str,
    raw_value: &str,
) -> Result<SaveOutcome, StoreError> {
    let selected_date = selected_date.trim();
    if selected_date.is_empty() {
        return Ok(SaveOutcome::MissingDate);
    }
    let Some(rating) = parse_rating(raw_value) else {
        return Ok(SaveOutcome::InvalidRating);
    };

    let mut ratings = store.load();
    ratings.insert(selected_date.to_string(), Value::from(rating));
    store.save(&ratings)?;

    Ok(SaveOutcome::Saved {
        date: selected_date.to_string(),
        rating,
    })
}

#[derive(Debug)]
pub struct Widget<S> {
    store: RatingsStore<S>,
    date: String,
    rating: String,
    status: Status,
    tabs: TabStrip,
    visualization: Visualization,
}

impl<S: KeyValueStore> Widget<S> {
    pub fn setup(document: &impl Document, store: RatingsStore<S>, today: String) -> Option<Self> {
        let missing: Vec<&str> = Role::REQUIRED
            .iter()
            .map(|role| role.element_id())
            .filter(|id| !document.has_element(id))
            .collect();
        if !missing.is_empty() {
            warn!("daily ratings UI not found (missing {missing:?}); skipping setup");
            return None;
        }
        let tab_names = document.tab_names();
        if let Some(tab) = Tab::ALL
            .iter()
            .find(|tab| !tab_names.iter().any(|name| name == tab.as_str()))
        {
            warn!("daily ratings UI has no '{tab}' tab; skipping setup");
            return None;
        }

        let visualization = render_visualization(&store);
        let mut widget = Self {
            store,
            date: String::new(),
            rating: String::new(),
            status: Status::default(),
            tabs: TabStrip::new(),
            visualization,
        };
        widget.on_date_change(&today);
        info!("daily ratings ready for {today}");
        Some(widget)
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn tabs(&self) -> &TabStrip {
        &self.tabs
    }

    pub fn visualization(&self) -> &Visualization {
        &self.visualization
    }

    pub fn store(&self) -> &RatingsStore<S> {
        &self.store
    }

    pub fn on_date_change(&mut self, date: &str) {
        self.date = date.trim().to_string();
        let existing = self
            .store
            .load()
            .get(&self.date)
            .and_then(coerce_rating)
            .filter(|value| *value != 0.0);
        match existing {
            Some(value) => {
                self.rating = value.to_string();
                self.status = Status::new(StatusKind::Info, format!("You rated this day {value}/5."));
            }
            None => {
                self.rating.clear();
                self.status = Status::new(StatusKind::Info, "No rating saved for this date yet.");
            }
        }
    }

    pub fn on_save(&mut self, date: &str, raw_value: &str) -> Result<SaveOutcome, StoreError> {
        self.date = date.trim().to_string();
        self.rating = raw_value.trim().to_string();

        let outcome = match handle_save(&mut self.store, date, raw_value) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.status = Status::new(StatusKind::Error, format!("Could not save rating: {err}"));
                return Err(err);
            }
        };
        if let SaveOutcome::Saved { .. } = outcome {
            self.visualization = render_visualization(&self.store);
        }
        self.status = outcome.status();
        Ok(outcome)
    }

    pub fn on_export(&mut self) -> Option<CsvExport> {
        let export = export_csv(&self.store);
        self.status = match export {
            Some(_) => Status::new(StatusKind::Ok, "Exported ratings as CSV."),
            None => Status::new(StatusKind::Error, "Nothing to export yet. Add a rating first."),
        };
        export
    }

    pub fn on_tab(&mut self, name: &str) {
        match name.parse::<Tab>() {
            Ok(tab) => self.tabs.activate(tab),
            Err(err) => debug!("ignoring tab click: {err}"),
        }
    }
}
