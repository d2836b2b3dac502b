//! # Clawdeck CLI Entry Point
//!
//! Clawdeck is a neon terminal dashboard that simulates a Solana
//! trading-agent product tour: scripted demo feeds, a wallet-connect
//! modal, a node-link and configuration flow, a deployment animation, and
//! a live-updating activity terminal. Everything is simulated; nothing
//! touches a chain.
//!
//! ## Usage
//!
//! ```bash
//! # Start the tour on the landing page
//! clawdeck
//!
//! # Start on a specific page
//! clawdeck --page dashboard
//!
//! # Pick a theme for this run (and persist it)
//! clawdeck --theme "Tokyo Night"
//!
//! # Print the authored demo scripts and feed catalog, then exit
//! clawdeck --debug
//! ```
//!
//! ## Key Bindings
//!
//! - `q` / `Q` - Quit
//! - `Tab` - Next page in tour order
//! - Landing: `s`/`f`/`w` run the demos, `y` copies the contract
//!   address, `Enter` opens the wallet modal
//! - Wallet modal: `Enter` connects, `Esc` closes
//! - Connect: `Enter` establishes the node link, `c` continues once the
//!   link is up
//! - Setup: `d`/`m` pick the network, `1`-`3` pick the agent mode,
//!   `Enter` moves on to the orchestrator
//! - Orchestrator: `Enter` runs the deployment

use clawdeck::sim::{
    AgentMode, Clipboard, DemoScenario, Engine, MemoryClipboard, Network, Page, SimulatedWallet,
    WalletAdapter,
};
use clawdeck::ui::{self, Config, Theme};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::sync::Arc;
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Clawdeck - a simulated trading-agent dashboard in your terminal
#[derive(Parser, Debug)]
#[command(name = "clawdeck")]
#[command(author = "Luckystrike561")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A neon terminal dashboard simulating a trading-agent tour", long_about = None)]
struct Args {
    /// Theme name to use for this run (persisted to the config file)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Page id to start on: landing, connect, setup, deploy, dashboard
    #[arg(short, long, value_name = "ID")]
    page: Option<String>,

    /// Print the authored demo scripts and feed catalog, then exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    // Debug mode: print the authored simulation data and exit
    if args.debug {
        println!("=== Demo Scripts ===");
        for scenario in DemoScenario::ALL {
            println!("\n[{}] -> {}", scenario.label(), scenario.panel().id());
            for step in scenario.script() {
                println!(
                    "  +{:>5}ms {} [{}] {}",
                    step.delay_before_ms,
                    step.icon,
                    step.category.as_str(),
                    step.text
                );
            }
        }
        println!("\n=== Live Feed Catalog ===");
        for template in clawdeck::sim::feed::FEED_CATALOG {
            println!(
                "  {} [{}] {}",
                template.icon,
                template.category.as_str(),
                template.text
            );
        }
        println!("\n=== Deployment Steps ===");
        for step in clawdeck::sim::deploy::step_list() {
            println!("  ○ {}", step.label);
        }
        return Ok(());
    }

    // Resolve the theme: --theme wins over the config file, and a valid
    // --theme choice is persisted for the next run
    let mut config = Config::load();
    if let Some(ref name) = args.theme {
        if Theme::by_name(name).is_none() {
            let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
            bail!("Unknown theme: {name}. Available themes: {}", names.join(", "));
        }
        config.theme = name.clone();
        if let Err(e) = config.save() {
            eprintln!("Warning: could not persist theme choice: {e}");
        }
    }
    let theme = Theme::by_name(&config.theme).unwrap_or_else(Theme::default_theme);

    // Validate the starting page before the terminal is taken over
    if let Some(ref page_id) = args.page {
        if Page::from_id(page_id).is_none() {
            let ids: Vec<&str> = Page::ALL.iter().map(|p| p.id()).collect();
            bail!("Unknown page: {page_id}. Available pages: {}", ids.join(", "));
        }
    }

    let engine = Engine::new();
    engine.set_network(config.network());

    let wallet: Arc<dyn WalletAdapter> = Arc::new(SimulatedWallet::default());
    let clipboard: Arc<dyn Clipboard> = Arc::new(MemoryClipboard::new());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // An explicit --page is a real navigation: dashboard entry actions
    // fire exactly as if the user had walked there
    if let Some(ref page_id) = args.page {
        engine.navigate_to(page_id);
    }

    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &engine, &wallet, &clipboard, theme, &mut event_reader).await;

    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    engine: &Engine,
    wallet: &Arc<dyn WalletAdapter>,
    clipboard: &Arc<dyn Clipboard>,
    theme: &Theme,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        {
            let session = engine.session();
            terminal
                .draw(|f| ui::render(f, &session, theme))
                .context("Failed to draw terminal UI")?;
        }

        // The typewriter reveals a character every 15ms and timed flows
        // can fire on any page, so always poll at ~60fps
        let event = event_reader.read_event(Duration::from_millis(16))?;

        let event = match event {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            dispatch_key(engine, wallet, clipboard, key);
        }

        if engine.session().should_quit {
            break;
        }
    }

    Ok(())
}

/// Translate a key press into an engine trigger. This is the terminal
/// equivalent of the markup's onclick surface; long-running flows are
/// spawned and never block the event loop.
fn dispatch_key(
    engine: &Engine,
    wallet: &Arc<dyn WalletAdapter>,
    clipboard: &Arc<dyn Clipboard>,
    key: KeyEvent,
) {
    let (page, modal_open, link_enabled, continue_enabled, deploy_enabled) = {
        let session = engine.session();
        (
            session.active_page,
            session.wallet_modal_open,
            session.link_button.enabled,
            session.continue_enabled,
            session.deploy_button.enabled,
        )
    };

    // The wallet modal captures input while open
    if modal_open {
        match key.code {
            KeyCode::Enter => {
                let engine = engine.clone();
                let wallet = Arc::clone(wallet);
                tokio::spawn(async move {
                    engine.connect_wallet(wallet.as_ref()).await;
                });
            }
            KeyCode::Esc => engine.close_wallet_modal(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            engine.session().should_quit = true;
        }
        KeyCode::Tab => {
            let position = Page::ALL.iter().position(|p| *p == page).unwrap_or(0);
            let next = Page::ALL[(position + 1) % Page::ALL.len()];
            engine.navigate_to(next.id());
        }
        code => match page {
            Page::Landing => match code {
                KeyCode::Char('s') => spawn_demo(engine, DemoScenario::Snipe),
                KeyCode::Char('f') => spawn_demo(engine, DemoScenario::Farm),
                KeyCode::Char('w') => spawn_demo(engine, DemoScenario::Swarm),
                KeyCode::Char('y') => {
                    let engine = engine.clone();
                    let clipboard = Arc::clone(clipboard);
                    tokio::spawn(async move {
                        engine.copy_contract_address(clipboard.as_ref()).await;
                    });
                }
                KeyCode::Enter => engine.open_wallet_modal(),
                _ => {}
            },
            Page::Connect => match code {
                KeyCode::Enter if link_enabled => {
                    let engine = engine.clone();
                    tokio::spawn(async move {
                        engine.simulate_connect().await;
                    });
                }
                KeyCode::Char('c') if continue_enabled => {
                    engine.navigate_to(Page::Setup.id());
                }
                _ => {}
            },
            Page::Setup => match code {
                KeyCode::Char('d') => engine.set_network(Network::Devnet),
                KeyCode::Char('m') => engine.set_network(Network::Mainnet),
                KeyCode::Char('1') => engine.select_mode(AgentMode::Sniper),
                KeyCode::Char('2') => engine.select_mode(AgentMode::YieldFarmer),
                KeyCode::Char('3') => engine.select_mode(AgentMode::Swarm),
                KeyCode::Enter => engine.navigate_to(Page::Deploy.id()),
                _ => {}
            },
            Page::Deploy => {
                if code == KeyCode::Enter && deploy_enabled {
                    let engine = engine.clone();
                    tokio::spawn(async move {
                        engine.run_deployment().await;
                    });
                }
            }
            Page::Dashboard => {}
        },
    }
}

fn spawn_demo(engine: &Engine, scenario: DemoScenario) {
    let engine = engine.clone();
    tokio::spawn(async move {
        engine.run_demo(scenario).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::collections::VecDeque;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    /// Helper to create a key event
    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn test_collaborators() -> (Arc<dyn WalletAdapter>, Arc<dyn Clipboard>) {
        (
            Arc::new(SimulatedWallet::default()),
            Arc::new(MemoryClipboard::new()),
        )
    }

    #[test]
    fn test_mock_event_reader() {
        let mut reader = MockEventReader::new(vec![
            Event::Key(key(KeyCode::Char('a'))),
            Event::Key(key(KeyCode::Enter)),
        ]);

        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).expect("read"),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('a'),
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).expect("read"),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }))
        ));
        assert!(reader
            .read_event(Duration::from_millis(10))
            .expect("read")
            .is_none());
    }

    #[tokio::test]
    async fn test_quit_key_sets_should_quit() {
        let engine = Engine::new();
        let (wallet, clipboard) = test_collaborators();

        dispatch_key(&engine, &wallet, &clipboard, key(KeyCode::Char('q')));
        assert!(engine.session().should_quit);
    }

    #[tokio::test]
    async fn test_tab_cycles_through_tour_order() {
        let engine = Engine::new();
        let (wallet, clipboard) = test_collaborators();

        assert_eq!(engine.session().active_page, Page::Landing);
        dispatch_key(&engine, &wallet, &clipboard, key(KeyCode::Tab));
        assert_eq!(engine.session().active_page, Page::Connect);
        dispatch_key(&engine, &wallet, &clipboard, key(KeyCode::Tab));
        assert_eq!(engine.session().active_page, Page::Setup);
    }

    #[tokio::test]
    async fn test_enter_on_landing_opens_wallet_modal() {
        let engine = Engine::new();
        let (wallet, clipboard) = test_collaborators();

        dispatch_key(&engine, &wallet, &clipboard, key(KeyCode::Enter));
        assert!(engine.session().wallet_modal_open);

        // Esc closes it again
        dispatch_key(&engine, &wallet, &clipboard, key(KeyCode::Esc));
        assert!(!engine.session().wallet_modal_open);
    }

    #[tokio::test]
    async fn test_modal_captures_navigation_keys() {
        let engine = Engine::new();
        let (wallet, clipboard) = test_collaborators();

        engine.open_wallet_modal();
        dispatch_key(&engine, &wallet, &clipboard, key(KeyCode::Tab));
        assert_eq!(engine.session().active_page, Page::Landing);
    }

    #[tokio::test]
    async fn test_setup_keys_pick_network_and_mode() {
        let engine = Engine::new();
        let (wallet, clipboard) = test_collaborators();

        engine.navigate_to(Page::Setup.id());
        dispatch_key(&engine, &wallet, &clipboard, key(KeyCode::Char('m')));
        dispatch_key(&engine, &wallet, &clipboard, key(KeyCode::Char('3')));

        let session = engine.session();
        assert_eq!(session.network, Network::Mainnet);
        assert!(!session.test_sol_visible);
        assert_eq!(session.selected_mode, Some(AgentMode::Swarm));
    }

    #[tokio::test]
    async fn test_continue_key_requires_established_link() {
        let engine = Engine::new();
        let (wallet, clipboard) = test_collaborators();

        engine.navigate_to(Page::Connect.id());
        dispatch_key(&engine, &wallet, &clipboard, key(KeyCode::Char('c')));
        assert_eq!(engine.session().active_page, Page::Connect);

        engine.session().continue_enabled = true;
        dispatch_key(&engine, &wallet, &clipboard, key(KeyCode::Char('c')));
        assert_eq!(engine.session().active_page, Page::Setup);
    }

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args::parse_from(["clawdeck"]);
        assert!(args.theme.is_none());
        assert!(args.page.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn test_args_parsing_with_page_and_theme() {
        let args = Args::parse_from(["clawdeck", "--page", "dashboard", "--theme", "Dracula"]);
        assert_eq!(args.page.as_deref(), Some("dashboard"));
        assert_eq!(args.theme.as_deref(), Some("Dracula"));
    }
}
