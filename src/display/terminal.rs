// src/display/terminal.rs
//! Terminal status board

use super::{Field, StatusDisplay};
use crate::error::Result;
use chrono::{DateTime, Local};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType, DisableLineWrap, EnableLineWrap},
};
use std::{
    collections::BTreeMap,
    io::{self, Stdout, Write},
};
use tracing::warn;

const RULE_WIDTH: usize = 60;

/// Redraws the whole board on every flush
pub struct TerminalDisplay<W: Write = Stdout> {
    out: W,
    source: String,
    values: BTreeMap<Field, String>,
    alert: Option<String>,
    last_update: Option<DateTime<Local>>,
}

impl TerminalDisplay<Stdout> {
    pub fn stdout(source: impl Into<String>) -> Self {
        Self::new(io::stdout(), source)
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, source: impl Into<String>) -> Self {
        Self {
            out,
            source: source.into(),
            values: BTreeMap::new(),
            alert: None,
            last_update: None,
        }
    }

    /// Take over the terminal and draw the empty board
    pub fn enter(&mut self) -> Result<()> {
        execute!(self.out, Hide, DisableLineWrap)?;
        self.redraw()
    }

    /// Give the terminal back
    pub fn leave(&mut self) -> Result<()> {
        execute!(self.out, Show, EnableLineWrap)?;
        writeln!(self.out, "\nShutting down...")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn redraw(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.render_header()?;
        self.render_alert()?;
        self.render_section("POSITION:", Color::Yellow, &[
            Field::Date,
            Field::Time,
            Field::Latitude,
            Field::Longitude,
            Field::Elevation,
        ])?;
        self.render_section("MOVEMENT:", Color::Cyan, &[Field::Speed, Field::Track])?;
        self.render_section("QUALITY:", Color::Magenta, &[
            Field::Siv,
            Field::Pdop,
            Field::Hdop,
            Field::Vdop,
            Field::Fix,
        ])?;
        self.render_footer()?;
        self.out.flush()?;
        Ok(())
    }

    fn render_header(&mut self) -> Result<()> {
        queue!(
            self.out,
            SetForegroundColor(Color::Green),
            Print("=".repeat(RULE_WIDTH)),
            Print("\n"),
            Print("GPS Status Monitor"),
            Print("\n"),
            Print("=".repeat(RULE_WIDTH)),
            Print("\n"),
            ResetColor
        )?;

        let updated = match self.last_update {
            Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => "Waiting for data".to_string(),
        };
        queue!(
            self.out,
            Print(format!("Last Update: {} ({})\n\n", updated, self.source))
        )?;
        Ok(())
    }

    fn render_alert(&mut self) -> Result<()> {
        if let Some(message) = &self.alert {
            queue!(
                self.out,
                SetForegroundColor(Color::Red),
                Print(format!("!! {}\n\n", message)),
                ResetColor
            )?;
        }
        Ok(())
    }

    fn render_section(&mut self, title: &str, color: Color, fields: &[Field]) -> Result<()> {
        queue!(self.out, SetForegroundColor(color), Print(title), Print("\n"), ResetColor)?;

        for field in fields {
            let value = self.values.get(field).map_or("-", String::as_str);
            queue!(
                self.out,
                Print(format!("  {:<14} {:>14}\n", format!("{}:", field.label()), value))
            )?;
        }

        queue!(self.out, Print("\n"))?;
        Ok(())
    }

    fn render_footer(&mut self) -> Result<()> {
        queue!(
            self.out,
            SetForegroundColor(Color::Green),
            Print("=".repeat(RULE_WIDTH)),
            Print("\n"),
            Print("Press Ctrl+C to exit"),
            Print("\n"),
            ResetColor
        )?;
        Ok(())
    }
}

impl<W: Write> StatusDisplay for TerminalDisplay<W> {
    fn set_field(&mut self, field: Field, text: &str) -> Result<()> {
        self.values.insert(field, text.to_string());
        self.last_update = Some(Local::now());
        // A successful refresh dismisses the alert
        self.alert = None;
        Ok(())
    }

    fn alert(&mut self, message: &str) -> Result<()> {
        warn!("{}", message);
        self.alert = Some(message.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.redraw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(display: TerminalDisplay<Vec<u8>>) -> String {
        String::from_utf8(display.into_inner()).unwrap()
    }

    #[test]
    fn test_empty_board() {
        let mut display = TerminalDisplay::new(Vec::new(), "http://localhost:8080/gps");
        display.flush().unwrap();

        let out = rendered(display);
        assert!(out.contains("Waiting for data (http://localhost:8080/gps)"));
        assert!(out.contains("POSITION:"));
        assert!(out.contains("QUALITY:"));
    }

    #[test]
    fn test_field_values_rendered() {
        let mut display = TerminalDisplay::new(Vec::new(), "test");
        display.set_field(Field::Latitude, "53.45123").unwrap();
        display.set_field(Field::Fix, "3D").unwrap();
        display.flush().unwrap();

        let out = rendered(display);
        assert!(out.contains("Latitude:"));
        assert!(out.contains("53.45123"));
        assert!(out.contains("3D"));
        assert!(!out.contains("Waiting for data"));
    }

    #[test]
    fn test_alert_cleared_by_refresh() {
        let mut display = TerminalDisplay::new(Vec::new(), "test");
        display.alert("Request failed.  Returned status of 503").unwrap();
        display.flush().unwrap();
        assert!(display.alert.is_some());

        display.set_field(Field::Date, "2021-05-17").unwrap();
        assert!(display.alert.is_none());

        let out = rendered(display);
        assert!(out.contains("Returned status of 503"));
    }
}
