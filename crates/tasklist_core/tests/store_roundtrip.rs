use tasklist_core::{JsonFileStore, StoreError, Task, TaskListService, TaskStore};

fn sample_tasks() -> Vec<Task> {
    let mut done_task = Task::new("already finished");
    done_task.mark_done();
    vec![Task::new("first"), done_task, Task::new("third")]
}

#[test]
fn save_then_load_round_trips_order_titles_and_flags() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("tasks.json"));

    let tasks = sample_tasks();
    store.save(&tasks).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, tasks);
}

#[test]
fn missing_file_loads_as_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("tasks.json"));

    assert_eq!(store.load().unwrap(), Vec::<Task>::new());
}

#[test]
fn unparsable_file_fails_with_corrupt_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "this is not json").unwrap();

    let store = JsonFileStore::new(&path);
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::CorruptData { .. }));
    assert!(err.to_string().contains("tasks.json"));
}

#[test]
fn wrong_shape_fails_with_corrupt_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    // Valid JSON, but an object where the task array should be.
    std::fs::write(&path, r#"{"title": "lonely", "done": false}"#).unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(
        store.load().unwrap_err(),
        StoreError::CorruptData { .. }
    ));
}

#[test]
fn empty_title_entry_fails_with_corrupt_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(
        &path,
        r#"[{"title": "ok", "done": false}, {"title": "  ", "done": true}]"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::CorruptData { .. }));
    assert!(err.to_string().contains("entry 2"));
}

#[test]
fn save_fully_replaces_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("tasks.json"));

    store.save(&sample_tasks()).unwrap();
    store.save(&[Task::new("only survivor")]).unwrap();

    assert_eq!(store.load().unwrap(), vec![Task::new("only survivor")]);
}

#[test]
fn save_leaves_no_temporary_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("tasks.json"));

    store.save(&sample_tasks()).unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["tasks.json"]);
}

#[test]
fn save_rejects_invalid_task_before_touching_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let store = JsonFileStore::new(&path);

    store.save(&sample_tasks()).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let err = store.save(&[Task::new("   ")]).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn service_session_round_trips_through_the_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    {
        let store = JsonFileStore::new(&path);
        let mut service = TaskListService::load(store).unwrap();
        service.add("Buy milk, Walk dog").unwrap();
        service.mark_done("1").unwrap();
    }

    // A fresh session sees exactly what the previous one persisted.
    let store = JsonFileStore::new(&path);
    let service = TaskListService::load(store).unwrap();
    let lines: Vec<String> = service.view().iter().map(ToString::to_string).collect();
    assert_eq!(lines, ["1. Buy milk - Done", "2. Walk dog - Not Done"]);
}

#[test]
fn default_path_points_at_tasks_json_in_the_working_directory() {
    let store = JsonFileStore::with_default_path();
    assert_eq!(store.path(), std::path::Path::new("tasks.json"));
}
