use crate::sim::{
    AgentMode, ButtonState, ButtonTone, LogPanel, Network, Page, PanelId, Session,
    engine::CONTRACT_ADDRESS,
};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, session: &Session, theme: &Theme) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, session, theme, main_chunks[0]);

    match session.active_page {
        Page::Landing => render_landing(frame, session, theme, main_chunks[1]),
        Page::Connect => render_connect(frame, session, theme, main_chunks[1]),
        Page::Setup => render_setup(frame, session, theme, main_chunks[1]),
        Page::Deploy => render_deploy(frame, session, theme, main_chunks[1]),
        Page::Dashboard => render_dashboard(frame, session, theme, main_chunks[1]),
    }

    render_footer(frame, session, theme, main_chunks[2]);

    if session.wallet_modal_open {
        render_wallet_modal(frame, session, theme);
    }
}

fn render_header(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let mut spans = vec![Span::styled(
        format!("  🦞 {}  ", session.active_page.title()),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )];

    // The block height replaces the header label while the ticker runs,
    // on any page (the ticker has no visibility gate).
    if let Some(height) = session.block_height {
        spans.push(Span::styled(
            format!("LIVE_ACTIVITY_FEED  BLOCK: {height}"),
            Style::default().fg(theme.fg_dim),
        ));
    }

    if let Some(short) = session.wallet_short() {
        spans.push(Span::styled(
            format!("  [{short}]"),
            Style::default().fg(theme.secondary),
        ));
    }

    let header = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(header, area);
}

fn render_log_panel(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    title: &str,
    panel: &LogPanel,
    active: bool,
) {
    let visible = area.height.saturating_sub(2) as usize;
    let entries = panel.entries();
    // pinned to the bottom: always show the newest entries
    let skip = entries.len().saturating_sub(visible);

    let items: Vec<ListItem> = entries
        .iter()
        .skip(skip)
        .map(|entry| {
            let line = Line::from(vec![
                Span::styled(entry.time.clone(), Style::default().fg(theme.fg_dim)),
                Span::raw(" "),
                Span::raw(entry.icon.clone()),
                Span::raw(" "),
                Span::styled(
                    entry.text.clone(),
                    Style::default().fg(theme.category(entry.category)),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let border = if active { theme.accent } else { theme.fg_dim };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(Style::default().fg(border)),
    );

    frame.render_widget(list, area);
}

fn button_span(button: &ButtonState, theme: &Theme) -> Span<'static> {
    let color = match button.tone {
        ButtonTone::Neutral if button.enabled => theme.accent,
        ButtonTone::Neutral => theme.fg_dim,
        ButtonTone::Busy => theme.secondary,
        ButtonTone::Success => theme.success,
    };
    Span::styled(
        format!("[ {} ]", button.caption),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn render_landing(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Hero
            Constraint::Min(0),    // Demo panels
            Constraint::Length(1), // Contract address pill
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "AUTONOMOUS TRADING AGENTS ON SOLANA",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Snipe migrations. Farm volatility. Swarm the books.",
            Style::default().fg(theme.fg),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.fg_dim)));
    frame.render_widget(hero, chunks[0]);

    let demo_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(chunks[1]);

    render_log_panel(
        frame,
        theme,
        demo_chunks[0],
        "🎯 Sniper [s]",
        session.panel(PanelId::SnipeLogs),
        !session.panel(PanelId::SnipeLogs).is_empty(),
    );
    render_log_panel(
        frame,
        theme,
        demo_chunks[1],
        "🌾 Yield Farmer [f]",
        session.panel(PanelId::FarmLogs),
        !session.panel(PanelId::FarmLogs).is_empty(),
    );

    // The swarm column carries the three agent indicators above its logs.
    let swarm_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(demo_chunks[2]);

    let indicators: Vec<Span> = session
        .agents
        .iter()
        .enumerate()
        .flat_map(|(i, lit)| {
            let color = if *lit { theme.success } else { theme.fg_dim };
            vec![
                Span::styled(format!("● AGENT-{}", i + 1), Style::default().fg(color)),
                Span::raw("  "),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(indicators)).alignment(Alignment::Center),
        swarm_chunks[0],
    );
    render_log_panel(
        frame,
        theme,
        swarm_chunks[1],
        "🐝 Swarm [w]",
        session.panel(PanelId::SwarmLogs),
        !session.panel(PanelId::SwarmLogs).is_empty(),
    );

    let ca_color = if session.ca_copied {
        theme.success
    } else {
        theme.fg_dim
    };
    let ca = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", session.ca_label),
            Style::default().fg(ca_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(CONTRACT_ADDRESS, Style::default().fg(theme.fg_dim)),
        Span::styled("  [y] copy", Style::default().fg(theme.fg_dim)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(ca, chunks[2]);
}

fn render_connect(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(button_span(&session.link_button, theme)),
        Line::from(""),
    ];

    if session.status_card_visible {
        lines.push(Line::from(Span::styled(
            "┌ AGENT STATUS ────────────────┐",
            Style::default().fg(theme.fg_dim),
        )));
        lines.push(Line::from(Span::styled(
            "│  ENGINE v2.0.4    STANDBY    │",
            Style::default().fg(theme.fg),
        )));
        lines.push(Line::from(Span::styled(
            "└──────────────────────────────┘",
            Style::default().fg(theme.fg_dim),
        )));
        lines.push(Line::from(""));
    }

    let continue_style = if session.continue_enabled {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_dim)
    };
    lines.push(Line::from(Span::styled(
        "[ Continue to Agent Config ]",
        continue_style,
    )));

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("🔌 Node Uplink")
                .border_style(Style::default().fg(theme.fg_dim)),
        );
    frame.render_widget(body, area);
}

fn render_setup(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let toggle = |network: Network, label: &str| -> Span<'static> {
        let style = if session.network == network {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_dim)
        };
        Span::styled(format!("[ {label} ]"), style)
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            toggle(Network::Devnet, "DEVNET (d)"),
            Span::raw("   "),
            toggle(Network::Mainnet, "MAINNET (m)"),
        ]),
        Line::from(""),
    ];

    if session.test_sol_visible {
        lines.push(Line::from(Span::styled(
            "[ Request Test SOL ]",
            Style::default().fg(theme.secondary),
        )));
        lines.push(Line::from(""));
    }

    for (index, mode) in AgentMode::ALL.iter().enumerate() {
        let selected = session.selected_mode == Some(*mode);
        let style = if selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg)
        };
        let marker = if selected { "▶" } else { " " };
        lines.push(Line::from(Span::styled(
            format!("{marker} {} · {}", index + 1, mode.label()),
            style,
        )));
    }

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("🛠️  Agent Config")
                .border_style(Style::default().fg(theme.fg_dim)),
        );
    frame.render_widget(body, area);
}

fn render_deploy(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let mut lines = vec![Line::from("")];

    for step in &session.steps {
        let (marker, style) = if step.completed {
            ("✓", Style::default().fg(theme.success))
        } else {
            ("○", Style::default().fg(theme.fg_dim))
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", step.label),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(button_span(&session.deploy_button, theme)));

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("🚀 Orchestrator")
                .border_style(Style::default().fg(theme.fg_dim)),
        );
    frame.render_widget(body, area);
}

fn render_dashboard(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    render_log_panel(
        frame,
        theme,
        area,
        "💬 main-terminal",
        session.panel(PanelId::MainTerminal),
        true,
    );
}

fn render_footer(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let help = match session.active_page {
        Page::Landing => "[s/f/w] Demos  [y] Copy CA  [Enter] Connect Wallet  [Tab] Next Page  [Q] Quit",
        Page::Connect => "[Enter] Establish Link  [c] Continue  [Tab] Next Page  [Q] Quit",
        Page::Setup => "[d/m] Network  [1-3] Mode  [Enter] To Orchestrator  [Tab] Next Page  [Q] Quit",
        Page::Deploy => "[Enter] Deploy  [Tab] Next Page  [Q] Quit",
        Page::Dashboard => "[Tab] Next Page  [Q] Quit",
    };

    let mut spans = vec![Span::styled(help, Style::default().fg(theme.fg_dim))];
    if let Some(diagnostic) = session.last_diagnostic() {
        spans.push(Span::styled(
            format!("  ⚠ {diagnostic}"),
            Style::default().fg(theme.error),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_wallet_modal(frame: &mut Frame, session: &Session, theme: &Theme) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Connect a wallet to continue",
            Style::default().fg(theme.fg),
        )),
        Line::from(""),
        Line::from(button_span(&session.wallet_button, theme)),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Connect   [Esc] Close",
            Style::default().fg(theme.fg_dim),
        )),
    ];

    let modal = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("👛 Wallet")
                .border_style(Style::default().fg(theme.accent)),
        );
    frame.render_widget(modal, area);
}

/// A centered sub-rectangle taking the given percentages of `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
