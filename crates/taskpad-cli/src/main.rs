use std::time::Duration;

use taskpad_core::models::{CoreErrorKind, TaskId};
use taskpad_core::playground::PlaygroundSession;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const HELP: &str = "\
commands:
  list                         show the current tasks (newest first)
  create <title> :: <content>  create a task (simulated enrichment delay)
  delete <id>                  remove a task; unknown ids are ignored
  help                         show this message
  quit                         exit
";

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt::try_init();

    let session = PlaygroundSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    print_snapshot(&session).await;
    loop {
        let _ = stdout.write_all(b"taskpad> ").await;
        let _ = stdout.flush().await;
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) | Err(_) => break,
        };

        match parse(line.trim()) {
            Command::Empty => {}
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::List => print_snapshot(&session).await,
            Command::Delete(id) => match session.delete(TaskId(id)) {
                Ok(()) => print_snapshot(&session).await,
                Err(error) => eprintln!("{error}"),
            },
            Command::Create { title, content } => {
                match session.submit_create(&title, &content).await {
                    Ok(()) => {
                        println!("enriching...");
                        match session.wait_for_commit(Some(Duration::from_secs(10))).await {
                            Ok(task) => {
                                println!("committed id {}", task.id.0);
                                print_snapshot(&session).await;
                            }
                            Err(error) => eprintln!("{error}"),
                        }
                    }
                    Err(error) if error.kind == CoreErrorKind::InvalidInput => {
                        eprintln!("title and content must both be non-empty");
                    }
                    Err(error) => eprintln!("{error}"),
                }
            }
            Command::Unknown => eprintln!("unrecognized command; try 'help'"),
        }
    }
}

enum Command {
    Empty,
    Help,
    Quit,
    List,
    Delete(u64),
    Create { title: String, content: String },
    Unknown,
}

fn parse(line: &str) -> Command {
    if line.is_empty() {
        return Command::Empty;
    }
    match line {
        "help" => return Command::Help,
        "quit" | "exit" => return Command::Quit,
        "list" => return Command::List,
        _ => {}
    }
    if let Some(rest) = line.strip_prefix("delete ") {
        return match rest.trim().parse::<u64>() {
            Ok(id) => Command::Delete(id),
            Err(_) => Command::Unknown,
        };
    }
    if let Some(rest) = line.strip_prefix("create ") {
        return match rest.split_once("::") {
            Some((title, content)) => Command::Create {
                title: title.trim().to_string(),
                content: content.trim().to_string(),
            },
            None => Command::Unknown,
        };
    }
    Command::Unknown
}

async fn print_snapshot(session: &PlaygroundSession) {
    match session.snapshot().await {
        Ok(snapshot) => match serde_json::to_string_pretty(&snapshot) {
            Ok(rendered) => println!("{rendered}"),
            Err(error) => eprintln!("render failed: {error}"),
        },
        Err(error) => eprintln!("{error}"),
    }
}
