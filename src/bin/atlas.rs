//! Cryptography Atlas — terminal front end
//!
//! Interactive loop over stdin, or a single command from argv
//! (`atlas search bitcoin`, `atlas show RSA-2048`).

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use crypto_atlas::consts::DEMO_STEP_INTERVAL;
use crypto_atlas::render;
use crypto_atlas::{Catalog, DetailTab, Preferences, Session, View};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Commands:
  list                      show every algorithm
  search <text>             filter by name, description or use case
  clear                     clear the search text
  category <label>          All | Symmetric | Asymmetric | Hash | Key Exchange
  show <name>               open the detail view
  tab <overview|math|demo>  switch detail tab
  demo [input] [| key]      run the illustrative demo on the open algorithm
  back                      return to the grid
  theme                     toggle light/dark (saved)
  export <path>             write the visible algorithms as JSON
  help                      this text
  quit";

enum Flow {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut prefs = match crypto_atlas::load_preferences() {
        Ok(p) => p,
        Err(e) => {
            warn!("ignoring unreadable preferences: {e}");
            Preferences::default()
        }
    };

    let catalog = Catalog::builtin();
    let mut session = Session::new(catalog, prefs.theme);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        dispatch(&args.join(" "), &mut session, &mut prefs)?;
        return Ok(());
    }

    info!("Cryptography Atlas — {} algorithms loaded", catalog.len());
    print!("{}", render::heading("Cryptography Atlas", session.theme()));
    println!("{HELP}\n");
    redraw(&mut session);

    let stdin = std::io::stdin();
    loop {
        print!("atlas> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match dispatch(line.trim_end_matches(['\r', '\n']), &mut session, &mut prefs) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => eprintln!("error: {e:#}"),
        }
    }
    Ok(())
}

fn dispatch(line: &str, session: &mut Session<'_>, prefs: &mut Preferences) -> Result<Flow> {
    let (cmd, rest) = line
        .trim_start()
        .split_once(' ')
        .unwrap_or((line.trim(), ""));

    match cmd {
        "" => {}
        "quit" | "exit" | "q" => return Ok(Flow::Quit),
        "help" | "?" => println!("{HELP}"),
        "list" => {
            session.go_home();
            session.set_query("");
            session.set_category(crypto_atlas::ALL);
            redraw(session);
        }
        // Query text is passed through untouched; matching is substring based.
        "search" => {
            session.go_home();
            session.set_query(rest);
            redraw(session);
        }
        "clear" => {
            session.set_query("");
            redraw(session);
        }
        "category" => {
            session.go_home();
            session.set_category(rest.trim());
            redraw(session);
        }
        "show" => {
            let name = rest.trim();
            crypto_atlas::find_by_name(session.catalog(), name)
                .with_context(|| format!("cannot open {name:?}"))?;
            session.select(name);
            redraw(session);
        }
        "tab" => {
            let tab: DetailTab = rest.parse().map_err(anyhow::Error::msg)?;
            session.set_tab(tab);
            redraw(session);
        }
        "demo" => run_demo(session, rest)?,
        "back" | "home" => {
            session.go_home();
            redraw(session);
        }
        "theme" => {
            prefs.theme = session.toggle_theme();
            prefs.save().context("failed to save preferences")?;
            println!("theme: {}", prefs.theme.as_str());
        }
        "export" => {
            let path = rest.trim();
            anyhow::ensure!(!path.is_empty(), "usage: export <path>");
            let visible = session.visible().to_vec();
            let n = crypto_atlas::export_to_json(&visible, path)
                .with_context(|| format!("failed to export to {path}"))?;
            println!("Exported {n} algorithm(s) → {path}");
        }
        other => println!("unknown command {other:?} — type `help`"),
    }
    Ok(Flow::Continue)
}

fn run_demo(session: &mut Session<'_>, args: &str) -> Result<()> {
    let View::Detail(record) = session.view() else {
        anyhow::bail!("open an algorithm first (`show <name>`)");
    };
    session.set_tab(DetailTab::Demo);
    let theme = session.theme();

    let demo = session
        .demo_mut()
        .context("no demo available for this algorithm")?;

    let (input, key) = match args.split_once('|') {
        Some((i, k)) => (i.trim(), Some(k.trim())),
        None => (args.trim(), None),
    };
    if !input.is_empty() {
        demo.set_input(input);
    }
    if let Some(key) = key {
        demo.set_key(key);
    }

    if !demo.start() {
        anyhow::bail!("demo already running");
    }
    while let Some(frame) = demo.tick() {
        println!("Round {}/{}", frame.round, crypto_atlas::consts::DEMO_ROUNDS);
        print!("{}", frame.matrix.render());
        std::io::stdout().flush()?;
        if demo.is_running() {
            std::thread::sleep(DEMO_STEP_INTERVAL);
        }
    }

    print!("{}", render::detail(record, DetailTab::Demo, Some(demo), theme));
    Ok(())
}

fn redraw(session: &mut Session<'_>) {
    let theme = session.theme();
    match session.view() {
        View::Detail(record) => {
            print!("{}", render::detail(record, session.tab(), session.demo(), theme));
        }
        View::Grid => {
            println!("{}", render::filter_bar(session.category()));
            if !session.query().is_empty() {
                println!("search: {:?}", session.query());
            }
            println!();
            print!("{}", render::grid(session.visible()));
        }
    }
}
