use serde::{Deserialize, Serialize};

/// A complete year/month/day triple taken from the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelection {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateSelection {
    pub fn year_text(&self) -> String {
        format!("{:04}", self.year)
    }

    pub fn month_text(&self) -> String {
        format!("{:02}", self.month)
    }

    pub fn day_text(&self) -> String {
        format!("{:02}", self.day)
    }

    pub fn iso_date(&self) -> String {
        format!("{}-{}-{}", self.year_text(), self.month_text(), self.day_text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalEvent {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Year,
    Month,
    Day,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DateFieldRequest {
    pub field: FieldName,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
    pub caption: String,
}

/// Everything the page needs to draw itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayState {
    pub year_options: Vec<String>,
    pub month_options: Vec<String>,
    pub day_options: Vec<String>,
    pub year: String,
    pub month: String,
    pub day: String,
    pub selected_date: String,
    pub error: Option<String>,
    pub button_label: String,
    pub button_enabled: bool,
    pub busy: bool,
    pub image: Option<ImageView>,
}
