//! Crossterm terminal driver.
//!
//! Maps keyboard and mouse input to [`Msg`]s and paints a [`Visualizer`]
//! with two terminal columns per grid cell.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute, queue,
    style::{self, Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use stepstar_core::Coord;

use crate::model::{CellKind, Msg, Visualizer};

/// First screen row used by the grid.
const ORIGIN_Y: u16 = 2;
/// Terminal columns per cell.
const CELL_WIDTH: u16 = 2;

const HELP: &str = "click: start/end/wall  space: start  p: pause  r: reset  +/-: size  w: walls  q: quit";

fn cell_color(kind: CellKind) -> Color {
    match kind {
        CellKind::Empty => Color::Rgb { r: 235, g: 235, b: 235 },
        CellKind::Wall => Color::Rgb { r: 40, g: 40, b: 40 },
        CellKind::Start => Color::Rgb { r: 46, g: 160, b: 67 },
        CellKind::End => Color::Rgb { r: 200, g: 55, b: 55 },
        CellKind::Visited => Color::Rgb { r: 120, g: 180, b: 230 },
        CellKind::Path => Color::Rgb { r: 240, g: 200, b: 40 },
    }
}

/// Map a key press to a message.
pub fn key_to_msg(key: KeyEvent) -> Option<Msg> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Msg::Quit);
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Enter => Some(Msg::Start),
        KeyCode::Char('p') => Some(Msg::TogglePause),
        KeyCode::Char('r') => Some(Msg::Reset),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Msg::Resize(1)),
        KeyCode::Char('-') => Some(Msg::Resize(-1)),
        KeyCode::Char('w') => Some(Msg::RandomWalls),
        KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
        _ => None,
    }
}

/// Map a terminal position to the grid cell drawn there.
pub fn screen_to_coord(column: u16, row: u16, size: i32) -> Option<Coord> {
    if row < ORIGIN_Y {
        return None;
    }
    let c = Coord::new((row - ORIGIN_Y) as i32, (column / CELL_WIDTH) as i32);
    (c.row < size && c.col < size).then_some(c)
}

/// A terminal back-end using crossterm.
pub struct CrosstermDriver {
    mouse_enabled: bool,
}

impl CrosstermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        Ok(())
    }

    /// Wait up to `timeout` for input, then drain whatever is queued.
    pub fn poll_msgs(&mut self, timeout: Duration, size: i32) -> io::Result<Vec<Msg>> {
        let mut msgs = Vec::new();
        if !event::poll(timeout)? {
            return Ok(msgs);
        }
        while event::poll(Duration::ZERO)? {
            let msg = match event::read()? {
                Event::Key(key) => key_to_msg(key),
                Event::Mouse(me) => match me.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        screen_to_coord(me.column, me.row, size).map(Msg::Click)
                    }
                    _ => None,
                },
                _ => None,
            };
            msgs.extend(msg);
        }
        Ok(msgs)
    }

    /// Repaint the whole screen from the model.
    pub fn draw(&mut self, model: &Visualizer) -> io::Result<()> {
        let mut stdout = io::stdout();
        let size = model.size();
        queue!(
            stdout,
            style::ResetColor,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            Print(format!("stepstar  {size}x{size}  [{:?}]", model.engine().state())),
            cursor::MoveTo(0, 1),
            Print(HELP),
        )?;
        for row in 0..size {
            queue!(stdout, cursor::MoveTo(0, ORIGIN_Y + row as u16))?;
            for col in 0..size {
                let kind = model.cell_kind(Coord::new(row, col));
                queue!(
                    stdout,
                    SetBackgroundColor(cell_color(kind)),
                    Print("  ")
                )?;
            }
            queue!(stdout, style::ResetColor)?;
        }
        queue!(
            stdout,
            cursor::MoveTo(0, ORIGIN_Y + size as u16 + 1),
            SetForegroundColor(Color::Reset),
            Print(model.status()),
        )?;
        stdout.flush()
    }

    /// Restore the terminal.
    pub fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, style::ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_messages() {
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(key_to_msg(key(' ')), Some(Msg::Start));
        assert_eq!(key_to_msg(key('p')), Some(Msg::TogglePause));
        assert_eq!(key_to_msg(key('r')), Some(Msg::Reset));
        assert_eq!(key_to_msg(key('+')), Some(Msg::Resize(1)));
        assert_eq!(key_to_msg(key('-')), Some(Msg::Resize(-1)));
        assert_eq!(key_to_msg(key('x')), None);
        assert_eq!(
            key_to_msg(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Msg::Quit)
        );
        assert_eq!(
            key_to_msg(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Msg::Quit)
        );
    }

    #[test]
    fn screen_positions_map_to_cells() {
        assert_eq!(screen_to_coord(0, 2, 5), Some(Coord::new(0, 0)));
        assert_eq!(screen_to_coord(1, 2, 5), Some(Coord::new(0, 0)));
        assert_eq!(screen_to_coord(9, 6, 5), Some(Coord::new(4, 4)));
        assert_eq!(screen_to_coord(10, 2, 5), None);
        assert_eq!(screen_to_coord(0, 7, 5), None);
        assert_eq!(screen_to_coord(0, 1, 5), None);
    }
}
