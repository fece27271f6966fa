use serde::Serialize;
use todo_domain::TaskList;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TaskView<'a> {
    pub index: usize,
    pub description: &'a str,
    pub completed: bool,
}

/// The full list after a command, plus whether the command took effect.
#[derive(Debug, Serialize)]
pub struct ListResponse<'a> {
    pub changed: bool,
    pub items: Vec<TaskView<'a>>,
    pub count: usize,
    pub completed: usize,
}

impl<'a> ListResponse<'a> {
    pub fn new(tasks: &'a TaskList, changed: bool) -> Self {
        let items = tasks
            .iter()
            .enumerate()
            .map(|(index, task)| TaskView {
                index,
                description: &task.description,
                completed: task.completed,
            })
            .collect();

        Self {
            changed,
            items,
            count: tasks.len(),
            completed: tasks.completed_count(),
        }
    }
}

pub fn output_success<T: Serialize>(data: T) -> anyhow::Result<()> {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

pub fn output_list(tasks: &TaskList, changed: bool) -> anyhow::Result<()> {
    output_success(ListResponse::new(tasks, changed))
}

/// Prints an error response to stderr and exits with status 1.
pub fn output_error(message: &str) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    match serde_json::to_string(&response) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("{}", message),
    }
    std::process::exit(1);
}
