use crate::api::TravelPlanData;
use chrono::NaiveDate;
use leptos::*;

/// Raw field values exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelPlanInput {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub travelers: String,
    pub budget: String,
    pub notes: String,
}

#[derive(Clone, Copy)]
pub struct TravelPlanFormState {
    pub destination: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub travelers: RwSignal<String>,
    pub budget: RwSignal<String>,
    pub notes: RwSignal<String>,
}

impl Default for TravelPlanFormState {
    fn default() -> Self {
        Self {
            destination: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            travelers: create_rw_signal("1".to_string()),
            budget: create_rw_signal(String::new()),
            notes: create_rw_signal(String::new()),
        }
    }
}

impl TravelPlanFormState {
    pub fn snapshot(&self) -> TravelPlanInput {
        TravelPlanInput {
            destination: self.destination.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            travelers: self.travelers.get_untracked(),
            budget: self.budget.get_untracked(),
            notes: self.notes.get_untracked(),
        }
    }
}

fn parse_date(raw: &str, label: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("{} must be a date (YYYY-MM-DD)", label))
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn build_travel_plan(input: &TravelPlanInput) -> Result<TravelPlanData, String> {
    let destination = input.destination.trim();
    if destination.is_empty() {
        return Err("Destination is required".into());
    }

    let start_date = parse_date(&input.start_date, "Start date")?;
    let end_date = parse_date(&input.end_date, "End date")?;
    if end_date < start_date {
        return Err("End date cannot be before start date".into());
    }

    let travelers = input
        .travelers
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| "At least one traveler is required".to_string())?;

    let budget = match optional_text(&input.budget) {
        None => None,
        Some(raw) => {
            let amount = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| "Budget must be a non-negative number".to_string())?;
            Some(amount)
        }
    };

    Ok(TravelPlanData {
        destination: destination.to_string(),
        start_date,
        end_date,
        travelers,
        budget,
        notes: optional_text(&input.notes),
    })
}
