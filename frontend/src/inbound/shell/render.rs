//! Plain-text rendering of screen views.

use crate::domain::{AddView, Designation, DetailView, Employee, HomeView, OperationPhase};

const NONE: &str = "-";
const EMPTY: &str = "  (none)";

/// Listing page: employees with their manager, then designations.
pub(super) fn home(view: &HomeView, phase: OperationPhase) -> String {
    let mut lines = vec![heading("Employees", phase)];
    lines.push(table(
        &["ID", "Name", "Job Title", "Manager"],
        view.employees
            .iter()
            .map(|employee| {
                vec![
                    employee.id.to_string(),
                    employee.name.clone(),
                    employee.job_title.clone(),
                    employee.manager_name().unwrap_or(NONE).to_owned(),
                ]
            })
            .collect(),
    ));
    lines.push(String::new());
    lines.push("Designations".to_owned());
    lines.push(designations(&view.designations));
    lines.join("\n")
}

/// Detail page for one employee, or the reason none is shown.
pub(super) fn detail(view: &DetailView, phase: OperationPhase) -> String {
    match view {
        DetailView::Idle => heading("Employee", phase),
        DetailView::InvalidId { raw } => format!("No employee matches `{raw}`."),
        DetailView::Unavailable { id, message } => {
            format!("Employee {id} could not be loaded: {message}")
        }
        DetailView::Loaded(employee) => {
            let manager = employee.manager.as_deref().map_or_else(
                || NONE.to_owned(),
                |manager| format!("{} ({})", manager.name, manager.id),
            );
            [
                heading(&format!("Employee {}: {}", employee.id, employee.name), phase),
                format!("Job Title: {}", employee.job_title),
                format!("Manager:   {manager}"),
                String::new(),
                "Colleagues".to_owned(),
                people(&employee.colleagues),
                String::new(),
                "Subordinates".to_owned(),
                people(&employee.subordinates),
            ]
            .join("\n")
        }
    }
}

/// Creation form: the choices each field accepts.
pub(super) fn add(view: &AddView, phase: OperationPhase) -> String {
    [
        heading("Add", phase),
        "Designations (for <designation> by name, <higher-id> by id)".to_owned(),
        designations(&view.designations),
        String::new(),
        "Managers (for <manager-id>)".to_owned(),
        people(&view.employees),
    ]
    .join("\n")
}

fn heading(title: &str, phase: OperationPhase) -> String {
    match phase {
        OperationPhase::Loading => format!("{title} (loading)"),
        OperationPhase::Failed => format!("{title} (last request failed)"),
        OperationPhase::Idle | OperationPhase::Succeeded => title.to_owned(),
    }
}

fn people(employees: &[Employee]) -> String {
    table(
        &["ID", "Name", "Job Title"],
        employees
            .iter()
            .map(|employee| {
                vec![
                    employee.id.to_string(),
                    employee.name.clone(),
                    employee.job_title.clone(),
                ]
            })
            .collect(),
    )
}

fn designations(designations: &[Designation]) -> String {
    table(
        &["ID", "Name", "Level"],
        designations
            .iter()
            .map(|designation| {
                vec![
                    designation.id.to_string(),
                    designation.name.clone(),
                    designation
                        .level
                        .map_or_else(|| NONE.to_owned(), |level| level.to_string()),
                ]
            })
            .collect(),
    )
}

/// Left-aligned columns separated by two spaces.
fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    if rows.is_empty() {
        return EMPTY.to_owned();
    }
    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_owned()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(line(headers.iter().map(|header| (*header).to_owned()).collect()));
    lines.push(line(widths.iter().map(|width| "-".repeat(*width)).collect()));
    lines.extend(rows.into_iter().map(line));
    lines
        .into_iter()
        .map(|text| format!("  {text}"))
        .collect::<Vec<_>>()
        .join("\n")
}
