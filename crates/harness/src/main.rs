//! Interactive driver for the queue engine
//!
//! Reads line-oriented commands from stdin and prints what the engine
//! answers. One queue is "current" at a time: `new` creates it, `free`
//! destroys it, and every other command targets it. Removal reads into a
//! fixed-size capture buffer by default, the way a C caller would hand
//! a stack buffer to the remove call; `rh <capacity>` overrides the size
//! to observe truncation.

use std::io::{self, BufRead, Write};
use strq_queue::{QueueEngine, QueueError, QueueId};

/// Default capture-buffer capacity for `rh`
const CAPTURE_CAPACITY: usize = 1024;

const HELP: &str = "\
Commands:
  new              create a queue and make it current
  free             destroy the current queue
  ih <text>        insert <text> at the head
  it <text>        insert <text> at the tail
  rh [capacity]    remove the head; capture at most capacity-1 bytes (default 1024)
  peek             show the head value without removing it
  size             show the element count
  show             list the elements in order
  clear            remove every element
  reverse          reverse the queue in place
  sort             sort the queue ascending
  help             show this text
  quit             exit";

type CommandResult<T> = Result<T, String>;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut engine = QueueEngine::new();
    let mut current: Option<QueueId> = None;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if !input.is_empty() && !run_command(&mut engine, &mut current, input) {
            break;
        }
        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}

/// Execute one command line. Returns false when the session should end.
fn run_command(engine: &mut QueueEngine, current: &mut Option<QueueId>, input: &str) -> bool {
    tracing::debug!("Dispatching command: {}", input);

    let (command, arg) = match input.split_once(' ') {
        Some((command, arg)) => (command, arg.trim()),
        None => (input, ""),
    };

    match command {
        "new" => match engine.create() {
            Ok(id) => {
                if let Some(old) = current.replace(id) {
                    // The previous queue stays alive in the engine but is
                    // no longer reachable from this driver
                    println!("note: queue {old} is no longer current");
                }
                println!("created queue {id}");
            }
            Err(e) => println!("error: {e}"),
        },
        "free" => match current.take() {
            Some(id) => match engine.destroy(id) {
                Ok(()) => println!("destroyed queue {id}"),
                Err(e) => println!("error: {e}"),
            },
            None => println!("error: no current queue"),
        },
        "ih" => report(with_current(current, |id| engine.insert_head(id, arg))),
        "it" => report(with_current(current, |id| engine.insert_tail(id, arg))),
        "rh" => {
            let capacity = if arg.is_empty() {
                Ok(CAPTURE_CAPACITY)
            } else {
                arg.parse::<usize>()
                    .map_err(|_| "capacity must be a non-negative integer".to_string())
            };
            let removed =
                capacity.and_then(|n| with_current(current, |id| engine.remove_head(id, Some(n))));
            match removed {
                Ok(Some(value)) => println!("removed \"{value}\""),
                Ok(None) => println!("removed (no capture)"),
                Err(e) => println!("error: {e}"),
            }
        }
        "peek" => match with_current(current, |id| engine.peek(id)) {
            Ok(Some(value)) => println!("head is \"{value}\""),
            Ok(None) => println!("queue is empty"),
            Err(e) => println!("error: {e}"),
        },
        "size" => match with_current(current, |id| engine.size(id)) {
            Ok(n) => println!("{n}"),
            Err(e) => println!("error: {e}"),
        },
        "show" => match with_current(current, |id| engine.queue(id)) {
            Ok(queue) => {
                let values: Vec<&str> = queue.iter().collect();
                println!("[{}]", values.join(", "));
            }
            Err(e) => println!("error: {e}"),
        },
        "clear" => report(with_current(current, |id| engine.clear(id))),
        "reverse" => report(with_current(current, |id| engine.reverse(id))),
        "sort" => report(with_current(current, |id| engine.sort(id))),
        "help" => println!("{HELP}"),
        "quit" | "exit" => return false,
        other => println!("error: unknown command \"{other}\" (try help)"),
    }

    true
}

/// Resolve the current queue and run `f` against it
fn with_current<T>(
    current: &Option<QueueId>,
    f: impl FnOnce(QueueId) -> Result<T, QueueError>,
) -> CommandResult<T> {
    match current {
        Some(id) => f(*id).map_err(|e| e.to_string()),
        None => Err("no current queue".to_string()),
    }
}

fn report(result: CommandResult<()>) {
    match result {
        Ok(()) => println!("ok"),
        Err(e) => println!("error: {e}"),
    }
}
