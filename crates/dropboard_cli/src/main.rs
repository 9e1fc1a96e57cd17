//! Interactive shell around `dropboard_core`.
//!
//! # Responsibility
//! - Wire one store, one input form and both list views for a session.
//! - Translate line commands into form submissions and drag gestures.

use dropboard_core::{
    core_version, default_log_level, init_logging, parse_project_status, DragGesture, Draggable,
    ProjectForm, ProjectItemView, ProjectListView, ProjectStatus, ProjectStore,
    SharedProjectStore, ViewComponent,
};
use log::{info, warn};
use std::io::{self, BufRead, Write};

fn main() {
    init_session_logging();

    let store = ProjectStore::shared();
    let mut form = ProjectForm::new(&store);
    let mut active_list = ProjectListView::attach(&store, ProjectStatus::Active);
    let mut finished_list = ProjectListView::attach(&store, ProjectStatus::Finished);

    info!(
        "event=shell_start module=cli status=ok version={}",
        core_version()
    );
    println!("dropboard {}, type `help` for commands", core_version());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let line = line.trim();

        match line.split_whitespace().next() {
            None => {}
            Some("help") => print_help(),
            Some("add") => handle_add(&mut form, line),
            Some("move") => handle_move(&store, &mut active_list, &mut finished_list, line),
            Some("board") => print_board(&active_list, &finished_list),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command `{other}`; type `help`"),
        }
    }
}

fn init_session_logging() {
    let log_dir = std::env::temp_dir().join("dropboard-logs");
    let Some(dir) = log_dir.to_str() else {
        eprintln!("logging disabled: log directory is not valid UTF-8");
        return;
    };
    if let Err(error) = init_logging(default_log_level(), dir) {
        eprintln!("logging disabled: {error}");
    }
}

fn print_help() {
    println!("add <title> | <description> | <people>   create a project");
    println!("move <n> <active|finished>               drag project n onto a list");
    println!("board                                    print both lists");
    println!("quit                                     leave the session");
}

/// `add Build API | REST service | 3`
fn handle_add(form: &mut ProjectForm, line: &str) {
    let raw = line.strip_prefix("add").unwrap_or("").trim();
    let mut fields = raw.split('|').map(str::trim);

    form.set_title(fields.next().unwrap_or(""));
    form.set_description(fields.next().unwrap_or(""));
    form.set_people(fields.next().unwrap_or(""));

    match form.submit() {
        Ok(id) => println!("created project {id}"),
        Err(error) => println!("invalid input, please try again: {error}"),
    }
}

/// `move 1 finished`: runs a full drag gesture onto the named list.
fn handle_move(
    store: &SharedProjectStore,
    active_list: &mut ProjectListView,
    finished_list: &mut ProjectListView,
    line: &str,
) {
    let mut args = line.split_whitespace().skip(1);
    let (Some(index_raw), Some(status_raw)) = (args.next(), args.next()) else {
        println!("usage: move <n> <active|finished>");
        return;
    };

    let Ok(index) = index_raw.parse::<usize>() else {
        println!("`{index_raw}` is not a project number; see `board`");
        return;
    };
    let status = match parse_project_status(status_raw) {
        Ok(status) => status,
        Err(error) => {
            println!("{error}");
            return;
        }
    };

    let snapshot = store.borrow().snapshot();
    let Some(project) = index.checked_sub(1).and_then(|i| snapshot.get(i)).cloned() else {
        println!("no project number {index}; see `board`");
        return;
    };

    let title = project.title.clone();
    let item = ProjectItemView::new(project);
    let target = match status {
        ProjectStatus::Active => active_list,
        ProjectStatus::Finished => finished_list,
    };

    let mut gesture = DragGesture::new();
    let dropped = gesture.begin(&item).is_ok()
        && gesture.enter_target(target).unwrap_or(false)
        && gesture.drop_on(target).is_ok();
    if !dropped {
        gesture.cancel();
    }
    item.drag_end();

    if dropped {
        info!(
            "event=shell_move module=cli status=ok id={} target={}",
            item.project().id,
            status.as_str()
        );
        println!("moved `{title}` to the {} list", status.as_str());
    } else {
        warn!(
            "event=shell_move module=cli status=warn reason=rejected_drop id={} target={}",
            item.project().id,
            status.as_str()
        );
        println!("the {} list did not accept the drop", status.as_str());
    }
}

fn print_board(active_list: &ProjectListView, finished_list: &ProjectListView) {
    for list in [active_list, finished_list] {
        let node = list.render();
        let mut lines = node.lines.iter();
        if let Some(heading) = lines.next() {
            println!("{heading}");
        }
        for line in lines {
            println!("  {line}");
        }
        println!();
    }
}
