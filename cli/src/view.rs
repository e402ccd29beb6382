use duetrack_core::{Model, TaskDto};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Task")]
    name: String,
    #[tabled(rename = "Module")]
    module_code: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Weight")]
    weightage: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

impl From<TaskDto> for TaskRow {
    fn from(dto: TaskDto) -> Self {
        let name = if dto.is_daily {
            format!("{} *", dto.name)
        } else {
            dto.name
        };
        TaskRow {
            index: dto.index,
            name,
            module_code: dto.module_code,
            deadline: dto.deadline,
            due: due_label(dto.days_left),
            status: dto.status,
            weightage: dto.weightage,
            priority: dto.priority,
            tags: dto.tags.join(", "),
            notes: dto.notes,
        }
    }
}

fn due_label(days_left: i64) -> String {
    match days_left {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        d if d < 0 => format!("{}d ago", -d),
        d => format!("in {}d", d),
    }
}

fn render(rows: Vec<TaskRow>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table.to_string()
}

/// Prints the filtered task list. Tasks that are also on the daily list
/// are marked with `*`.
pub fn show_tasks(model: &dyn Model) {
    let tasks = model.filtered_task_list();
    if tasks.is_empty() {
        println!("No tasks to show.");
        return;
    }

    let today = model.today();
    let rows: Vec<TaskRow> = tasks
        .into_iter()
        .enumerate()
        .map(|(i, task)| {
            TaskDto::from_entity(i + 1, task, today, model.has_daily_task(task)).into()
        })
        .collect();
    println!("{}", render(rows));
}

pub fn show_daily_tasks(model: &dyn Model) {
    let tasks = model.daily_task_list();
    if tasks.is_empty() {
        return;
    }

    let today = model.today();
    let rows: Vec<TaskRow> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| TaskDto::from_entity(i + 1, task, today, false).into())
        .collect();
    println!("\n\x1b[1;36mToday\x1b[0m ({} tasks)", rows.len());
    println!("{}", render(rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_label() {
        assert_eq!(due_label(0), "today");
        assert_eq!(due_label(1), "tomorrow");
        assert_eq!(due_label(5), "in 5d");
        assert_eq!(due_label(-2), "2d ago");
    }
}
