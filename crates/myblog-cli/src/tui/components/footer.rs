use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::AppState;

/// Bottom bar: transient status line plus keyboard help.
pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let status = Line::from(Span::styled(
            state.status.clone().unwrap_or_default(),
            Style::default().fg(Color::Cyan),
        ));

        let help = Line::from(vec![
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw("uit "),
            Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
            Span::raw("move "),
            Span::styled("[l]", Style::default().fg(Color::Yellow)),
            Span::raw("ike "),
            Span::styled("[c]", Style::default().fg(Color::Yellow)),
            Span::raw("omment "),
            Span::styled("[s]", Style::default().fg(Color::Yellow)),
            Span::raw("hare "),
            Span::styled("[x]", Style::default().fg(Color::Yellow)),
            Span::raw(" logout"),
        ]);

        let widget = Paragraph::new(vec![status, help]).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(widget, area);
    }
}
