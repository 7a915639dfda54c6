use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type AttendanceRecord = BTreeMap<String, bool>;

// Persisted under the `tasks` and `attendance` keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub attendance: BTreeMap<String, AttendanceRecord>,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteTaskQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub task: String,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddTaskResponse {
    pub added: bool,
    pub tasks: Vec<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTaskResponse {
    pub deleted: bool,
    pub tasks: Vec<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCell {
    pub day: u32,
    pub date_key: String,
    pub present: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthView {
    pub task: String,
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub weekdays: Vec<String>,
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
    pub present: u32,
    pub absent: u32,
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub months: Vec<String>,
    pub years: Vec<i32>,
    pub current_year: i32,
    pub current_month: u32,
}
