use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub fg: Color,
    pub border_focused: Color,
    pub border_unfocused: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub hover_bg: Color,
    pub marked_style: Style,
    pub title_style: Style,
    pub artist_style: Style,
    pub dim_style: Style,
    pub error_color: Color,
    pub loading_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            border_focused: Color::Cyan,
            border_unfocused: Color::DarkGray,
            highlight_bg: Color::Cyan,
            highlight_fg: Color::Black,
            hover_bg: Color::Indexed(238),
            marked_style: Style::default()
                .fg(Color::Rgb(80, 255, 120))
                .add_modifier(Modifier::BOLD),
            title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            artist_style: Style::default().fg(Color::Gray),
            dim_style: Style::default().fg(Color::DarkGray),
            error_color: Color::Rgb(255, 100, 100),
            loading_color: Color::Rgb(255, 200, 80),
        }
    }
}

impl Theme {
    pub fn border_color(&self, focused: bool) -> Color {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .fg(self.highlight_fg)
            .add_modifier(Modifier::BOLD)
    }
}
