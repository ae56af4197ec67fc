use crate::models::{DateSelection, HistoricalEvent};

pub fn event_prompt(selection: &DateSelection) -> String {
    format!(
        "provide me with only the title of a historical event that happened on {}/{}, \
         and remove all date references except for the four digit year shown in parentheses at the end",
        selection.month_text(),
        selection.day_text()
    )
}

pub fn image_prompt(event: &HistoricalEvent, year: &str) -> String {
    let cleaned = event.title.replace(',', "");
    format!("portrait of '{cleaned}' in the style of '{year}' art")
}
