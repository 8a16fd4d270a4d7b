//! Taskpad CLI
//!
//! Interactive front end for the task list controller. Each input line maps
//! onto one controller operation; the list is re-rendered after every
//! command from the controller's local state.

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use taskpad::{HttpTaskStore, Task, TaskListController, DEFAULT_BASE_URL};

#[derive(Parser, Debug)]
#[command(name = "taskpad", about = "Task list synced to a remote HTTP store")]
struct Cli {
    /// Base URL of the remote task store
    #[arg(long, env = "TASKPAD_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

/// Display theme, pure presentation (no data effect)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn render(&self, task: &Task) -> String {
        let mark = if task.completion { "x" } else { " " };
        match self {
            Theme::Light => format!("{:>4} [{}] {}", task.id, mark, task.name),
            // dark terminal: cyan ids, completed tasks dimmed
            Theme::Dark if task.completion => {
                format!("\x1b[36m{:>4}\x1b[0m [{}] \x1b[2m{}\x1b[0m", task.id, mark, task.name)
            }
            Theme::Dark => format!("\x1b[36m{:>4}\x1b[0m [{}] {}", task.id, mark, task.name),
        }
    }
}

fn render_list(theme: Theme, tasks: &[Task]) {
    if tasks.is_empty() {
        println!("(no tasks)");
        return;
    }
    for task in tasks {
        println!("{}", theme.render(task));
    }
}

fn print_help() {
    println!("commands:");
    println!("  list                show the task list");
    println!("  add <name>          create a task");
    println!("  toggle <id>         flip a task's completion");
    println!("  edit <id> <name>    rename a task");
    println!("  rm <id>             delete a task");
    println!("  reload              refetch the collection from the store");
    println!("  theme               switch light/dark rendering");
    println!("  quit                exit");
}

fn parse_id(raw: Option<&str>) -> Result<u32, String> {
    raw.ok_or_else(|| "missing task id".to_string())?
        .parse()
        .map_err(|_| "task id must be a number".to_string())
}

async fn run_command(
    controller: &mut TaskListController<HttpTaskStore>,
    theme: &mut Theme,
    line: &str,
) -> Result<bool, String> {
    let mut parts = line.splitn(3, char::is_whitespace).filter(|s| !s.is_empty());
    let command = match parts.next() {
        Some(c) => c,
        None => return Ok(true),
    };

    match command {
        "list" => render_list(*theme, controller.tasks()),
        "add" => {
            // everything after the command is the task name
            let name = line.strip_prefix("add").unwrap_or("").trim();
            let created = controller.add_task(name).await.map_err(|e| e.to_string())?;
            println!("added task {}", created.id);
            render_list(*theme, controller.tasks());
        }
        "toggle" => {
            let id = parse_id(parts.next())?;
            let task = controller
                .toggle_completion(id)
                .await
                .map_err(|e| e.to_string())?;
            println!(
                "task {} is now {}",
                task.id,
                if task.completion { "done" } else { "open" }
            );
        }
        "edit" => {
            let id = parse_id(parts.next())?;
            let name = parts.next().unwrap_or("");
            controller
                .edit_task(id, name)
                .await
                .map_err(|e| e.to_string())?;
            render_list(*theme, controller.tasks());
        }
        "rm" => {
            let id = parse_id(parts.next())?;
            controller.delete_task(id).await.map_err(|e| e.to_string())?;
            println!("deleted task {}", id);
            render_list(*theme, controller.tasks());
        }
        "reload" => {
            controller.load().await.map_err(|e| e.to_string())?;
            render_list(*theme, controller.tasks());
        }
        "theme" => {
            *theme = theme.toggled();
            println!("theme: {:?}", theme);
            render_list(*theme, controller.tasks());
        }
        "help" => print_help(),
        "quit" | "exit" => return Ok(false),
        other => println!("unknown command '{}', try 'help'", other),
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut controller = TaskListController::new(HttpTaskStore::new(cli.base_url.clone()));
    let mut theme = Theme::Light;

    match controller.load().await {
        Ok(()) => render_list(theme, controller.tasks()),
        Err(err) => eprintln!("could not load tasks from {}: {}", cli.base_url, err),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        match run_command(&mut controller, &mut theme, line.trim()).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => eprintln!("{}", err),
        }
    }
    Ok(())
}
