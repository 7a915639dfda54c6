use crate::models::AppData;
use std::collections::HashSet;

// Empty names and exact duplicates are ignored.
pub fn add_task(data: &mut AppData, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || contains(data, name) {
        return false;
    }

    data.tasks.push(name.to_string());
    data.attendance.insert(name.to_string(), Default::default());
    true
}

pub fn delete_task(data: &mut AppData, name: &str) -> bool {
    let before = data.tasks.len();
    data.tasks.retain(|task| task != name);
    data.attendance.remove(name);
    data.tasks.len() != before
}

pub fn list_tasks(data: &AppData) -> Vec<String> {
    data.tasks.clone()
}

pub fn contains(data: &AppData, name: &str) -> bool {
    data.tasks.iter().any(|task| task == name)
}

// Restores the list/record invariants on loaded data: no blank or repeated
// names, one record per task and no orphaned records. Returns whether anything changed.
pub fn normalize(data: &mut AppData) -> bool {
    let before = data.clone();

    let mut seen = HashSet::new();
    data.tasks
        .retain(|task| !task.trim().is_empty() && seen.insert(task.clone()));
    data.attendance.retain(|task, _| seen.contains(task));
    for task in &data.tasks {
        data.attendance.entry(task.clone()).or_default();
    }

    *data != before
}
