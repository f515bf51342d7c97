use anyhow::{Result, bail};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
};
use techbuzz_engine::content::Section;
use techbuzz_engine::{ContentItem, FormattedBlock, Lookup, Selection, format_blocks};

struct App {
    selection: Selection,
    list_state: ListState,
    content: Vec<Line<'static>>,
}

impl App {
    fn new(section: Section, id: Option<&str>) -> Self {
        let selection = Selection::from_navigation(section.catalog(), id);
        let mut app = Self {
            selection,
            list_state: ListState::default(),
            content: Vec::new(),
        };
        app.sync_with_selection();
        app
    }

    fn section(&self) -> Section {
        self.selection.section()
    }

    fn next_item(&mut self) {
        let len = self.section().catalog().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.select_position(i);
    }

    fn previous_item(&mut self) {
        let len = self.section().catalog().len();
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.select_position(i);
    }

    fn select_position(&mut self, position: usize) {
        let catalog = self.section().catalog();
        if let Some(item) = catalog.at(position) {
            let request = self.selection.select(&item.id);
            log::debug!("Selected {}", request.path());
            self.sync_with_selection();
        }
    }

    fn switch_catalog(&mut self) {
        let next = match self.section() {
            Section::Blogs => Section::Tutorials,
            Section::Tutorials => Section::Blogs,
        };
        self.selection = Selection::from_navigation(next.catalog(), None);
        self.sync_with_selection();
    }

    fn sync_with_selection(&mut self) {
        let catalog = self.section().catalog();
        self.list_state
            .select(catalog.position(self.selection.selected_id()));
        self.content = match self.selection.resolve(catalog) {
            Lookup::Found(item) => render_item(item),
            Lookup::NotFound(id) => vec![
                Line::from(format!("{} not found.", self.section().item_noun())),
                Line::from(""),
                Line::from(format!("No entry with id '{id}'. Use ↑/↓ to pick one.")),
            ],
        };
    }
}

/// Lays out an entry as styled terminal lines.
fn render_item(item: &ContentItem) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::styled(item.title.clone(), heading.add_modifier(Modifier::UNDERLINED)),
        Line::from(""),
    ];

    for block in format_blocks(&item.content) {
        match block {
            FormattedBlock::Heading(text) => {
                lines.push(Line::styled(text, heading));
                lines.push(Line::from(""));
            }
            FormattedBlock::Paragraph(text) => {
                lines.push(Line::from(text));
                lines.push(Line::from(""));
            }
            FormattedBlock::List(items) => {
                lines.extend(items.into_iter().map(|text| Line::from(format!("• {text}"))));
                lines.push(Line::from(""));
            }
        }
    }

    if let Some(samples) = &item.code_samples {
        lines.push(Line::styled("Code Samples", heading));
        for sample in samples.iter() {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                format!("── {} ──", sample.language),
                Style::default().fg(Color::Cyan),
            ));
            lines.extend(
                sample
                    .source
                    .trim()
                    .lines()
                    .map(|line| Line::from(Span::raw(line.to_string()))),
            );
        }
    }

    lines
}

fn parse_args(args: &[String]) -> Result<(Section, Option<String>)> {
    let section = match args.get(1).map(String::as_str) {
        None | Some("blogs") => Section::Blogs,
        Some("tutorials") => Section::Tutorials,
        Some(other) => bail!("Unknown catalog '{other}', expected 'blogs' or 'tutorials'"),
    };
    if args.len() > 3 {
        bail!("Too many arguments");
    }
    Ok((section, args.get(2).cloned()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let (section, id) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            let program = args.first().map(String::as_str).unwrap_or("techbuzz-cli");
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} [blogs|tutorials] [id]");
            std::process::exit(1);
        }
    };
    log::info!("Opening {section} at {}", id.as_deref().unwrap_or("first entry"));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(section, id.as_deref());

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_item(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_item(),
                KeyCode::Tab => app.switch_catalog(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let section = app.section();
    let items: Vec<ListItem> = section
        .catalog()
        .iter()
        .map(|item| ListItem::new(Line::from(item.title.clone())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(section.index_heading()),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    let content = Paragraph::new(app.content.clone())
        .block(Block::default().borders(Borders::ALL).title(section.label()))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q/Esc: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("Tab: Switch catalog"),
    ]);

    f.render_widget(Paragraph::new(help), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("techbuzz-cli")
            .chain(list.iter().copied())
            .map(str::to_string)
            .collect()
    }

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[rstest]
    #[case(&[], Section::Blogs, None)]
    #[case(&["blogs"], Section::Blogs, None)]
    #[case(&["tutorials", "3"], Section::Tutorials, Some("3"))]
    fn test_parse_args(
        #[case] input: &[&str],
        #[case] section: Section,
        #[case] id: Option<&str>,
    ) {
        let (parsed_section, parsed_id) = parse_args(&args(input)).unwrap();
        assert_eq!(parsed_section, section);
        assert_eq!(parsed_id.as_deref(), id);
    }

    #[test]
    fn test_parse_args_rejects_unknown_catalog() {
        assert!(parse_args(&args(&["recipes"])).is_err());
        assert!(parse_args(&args(&["blogs", "1", "extra"])).is_err());
    }

    #[test]
    fn test_navigation_wraps_around() {
        let mut app = App::new(Section::Blogs, None);
        let len = Section::Blogs.catalog().len();
        assert_eq!(app.list_state.selected(), Some(0));

        app.previous_item();
        assert_eq!(app.list_state.selected(), Some(len - 1));

        app.next_item();
        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(
            app.selection.selected_id(),
            Section::Blogs.catalog().default_id()
        );
    }

    #[test]
    fn test_unknown_id_shows_not_found() {
        let app = App::new(Section::Tutorials, Some("missing"));
        assert_eq!(app.list_state.selected(), None);
        assert_eq!(app.content[0].to_string(), "Tutorial not found.");
    }

    #[test]
    fn test_moving_from_unknown_id_recovers() {
        let mut app = App::new(Section::Blogs, Some("missing"));
        app.next_item();
        assert_eq!(app.list_state.selected(), Some(0));
        assert_ne!(app.content[0].to_string(), "Blog post not found.");
    }

    #[test]
    fn test_switch_catalog_selects_first_entry() {
        let mut app = App::new(Section::Blogs, Some("2"));
        app.switch_catalog();
        assert_eq!(app.section(), Section::Tutorials);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_render_item_formats_blocks_and_samples() {
        let item = ContentItem::new("x", "Title", "", "## Head\nBody text\n- one\n- two")
            .with_sample(techbuzz_engine::Language::Css, "  p { color: red; }\n");

        assert_eq!(
            text(&render_item(&item)),
            vec![
                "Title",
                "",
                "Head",
                "",
                "Body text",
                "",
                "• one",
                "• two",
                "",
                "Code Samples",
                "",
                "── CSS ──",
                "p { color: red; }",
            ]
        );
    }
}
