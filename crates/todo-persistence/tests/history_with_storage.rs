use tempfile::tempdir;
use todo_core::Notice;
use todo_domain::{FixedAnswer, HistoryController, Outcome, PresentationPort, Task, TaskList};
use todo_persistence::{FileKeyValueStore, TaskListGateway};

#[derive(Default)]
struct CountingPresenter {
    renders: usize,
    last: Option<TaskList>,
    notices: Vec<Notice>,
}

impl PresentationPort for CountingPresenter {
    fn render(&mut self, tasks: &TaskList) {
        self.renders += 1;
        self.last = Some(tasks.clone());
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

type FileController = HistoryController<TaskListGateway<FileKeyValueStore>, CountingPresenter>;

fn open(dir: &std::path::Path) -> FileController {
    let gateway = TaskListGateway::new(FileKeyValueStore::new(dir));
    HistoryController::open(gateway, CountingPresenter::default()).unwrap()
}

fn stored_json(dir: &std::path::Path) -> Option<serde_json::Value> {
    let path = dir.join("todos.json");
    std::fs::read(path)
        .ok()
        .map(|bytes| serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_every_change_is_on_disk_before_render() {
    let dir = tempdir().unwrap();
    let mut controller = open(dir.path());

    controller.add_task("buy milk").unwrap();
    assert_eq!(
        stored_json(dir.path()).unwrap(),
        serde_json::json!([{ "description": "buy milk", "completed": false }])
    );
    assert_eq!(controller.presenter().last.as_ref(), Some(controller.tasks()));

    controller.toggle_task(0).unwrap();
    assert_eq!(stored_json(dir.path()).unwrap()[0]["completed"], true);
}

#[test]
fn test_undo_state_is_persisted_but_history_is_not() {
    let dir = tempdir().unwrap();
    {
        let mut controller = open(dir.path());
        controller.add_task("buy milk").unwrap();
        controller.add_task("walk dog").unwrap();
        controller.toggle_task(0).unwrap();
        controller.undo().unwrap();
    }

    let mut reopened = open(dir.path());
    assert_eq!(
        reopened.tasks().as_slice(),
        &[Task::new("buy milk"), Task::new("walk dog")]
    );
    assert_eq!(reopened.history().len(), 1);
    assert_eq!(
        reopened.undo().unwrap(),
        Outcome::Rejected(Notice::NothingToUndo)
    );
}

#[test]
fn test_confirmed_clear_removes_file_and_resets_history() {
    let dir = tempdir().unwrap();
    let mut controller = open(dir.path());
    controller.add_task("buy milk").unwrap();
    assert!(dir.path().join("todos.json").exists());

    controller.clear_all(&mut FixedAnswer(true)).unwrap();
    assert!(!dir.path().join("todos.json").exists());
    assert_eq!(controller.history().len(), 1);

    let reopened = open(dir.path());
    assert!(reopened.tasks().is_empty());
}

#[test]
fn test_declined_clear_keeps_file() {
    let dir = tempdir().unwrap();
    let mut controller = open(dir.path());
    controller.add_task("buy milk").unwrap();
    let before = stored_json(dir.path());

    assert_eq!(
        controller.clear_all(&mut FixedAnswer(false)).unwrap(),
        Outcome::Declined
    );
    assert_eq!(stored_json(dir.path()), before);
    assert_eq!(controller.tasks().len(), 1);
}

#[test]
fn test_loads_list_written_by_browser_build() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("todos.json"),
        r#"[{"task":"old entry","completed":true}]"#,
    )
    .unwrap();

    let mut controller = open(dir.path());
    assert_eq!(controller.tasks().get(0).unwrap().description, "old entry");

    // The next save rewrites it in the current shape
    controller.add_task("new entry").unwrap();
    assert_eq!(stored_json(dir.path()).unwrap()[0]["description"], "old entry");
}

#[test]
fn test_unreadable_file_fails_open() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("todos.json"), "{ broken").unwrap();

    let gateway = TaskListGateway::new(FileKeyValueStore::new(dir.path()));
    assert!(HistoryController::open(gateway, CountingPresenter::default()).is_err());
}
