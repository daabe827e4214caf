use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::Theme;

const TITLE: &str = "Welcome to lazytodo!";
const BODY: &str = "A small counter and a todo list, kept in one store. \
                    Press Tab to move between panels.";

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(theme.primary())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(BODY, Style::default().fg(theme.subtext0()))),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border())),
        );
    frame.render_widget(card, area);
}
