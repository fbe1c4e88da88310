//! Frame painter: renders the editor's render model with crossterm.
//!
//! Everything is queued and flushed once per frame. The painter is generic
//! over the writer so tests can render into a buffer.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, Print, PrintStyledContent, SetAttribute, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;

use crate::editor::{ChannelBar, CursorField, Detail, Frame, RowMarker, FONT_WINDOW_ROWS};
use crate::tui::settings;

/// Paint one frame.
pub fn draw(out: &mut impl Write, frame: &Frame, color: bool) -> io::Result<()> {
    let (cols, rows) =
        terminal::size().unwrap_or((settings::FALLBACK_COLUMNS, settings::FALLBACK_ROWS));

    out.queue(Clear(ClearType::All))?;

    let title_x = cols.saturating_sub(frame.title.len() as u16) / 2;
    out.queue(MoveTo(title_x, settings::TITLE_ROW))?;
    if color {
        out.queue(PrintStyledContent(
            frame.title.with(settings::COLOR_TITLE).bold(),
        ))?;
    } else {
        out.queue(Print(frame.title))?;
    }

    out.queue(MoveTo(settings::LIST_X, settings::TITLE_ROW + 1))?;
    let brightness_line = format!("Brightness: {:.1} (+/-)", frame.brightness);
    if color {
        out.queue(PrintStyledContent(
            brightness_line.as_str().with(settings::COLOR_FIELD_KEY),
        ))?;
    } else {
        out.queue(Print(&brightness_line))?;
    }

    draw_slot_rows(out, frame, rows, color)?;
    draw_detail(out, frame, color)?;

    let status_y = rows.saturating_sub(2);
    out.queue(MoveTo(settings::LIST_X, status_y))?;
    let status = clip(&frame.status, cols.saturating_sub(4) as usize);
    if color {
        out.queue(PrintStyledContent(
            status.as_str().with(settings::COLOR_STATUS),
        ))?;
    } else {
        out.queue(Print(&status))?;
    }

    out.flush()
}

fn draw_slot_rows(
    out: &mut impl Write,
    frame: &Frame,
    rows: u16,
    color: bool,
) -> io::Result<()> {
    for row in &frame.rows {
        let y = settings::LIST_START_Y + row.index as u16;
        if y >= rows.saturating_sub(2) {
            break;
        }
        let prefix = match row.marker {
            RowMarker::Cursor => settings::ROW_CURSOR_PREFIX,
            RowMarker::Editing => settings::ROW_EDITING_PREFIX,
            RowMarker::None => settings::ROW_PLAIN_PREFIX,
        };
        let name: String = row.name.chars().take(12).collect();
        let line = format!(
            "{prefix} {:<2} {name:<12} #{} ({})",
            row.index, row.hex, row.hint
        );
        out.queue(MoveTo(settings::LIST_X, y))?;
        if color && row.marker != RowMarker::None {
            out.queue(SetAttribute(Attribute::Reverse))?;
            out.queue(Print(&line))?;
            out.queue(SetAttribute(Attribute::Reset))?;
        } else {
            out.queue(Print(&line))?;
        }
        if color {
            out.queue(MoveTo(settings::SWATCH_X, y))?;
            out.queue(PrintStyledContent(
                settings::SWATCH.with(Color::AnsiValue(row.index as u8)),
            ))?;
        }
    }
    Ok(())
}

fn draw_detail(out: &mut impl Write, frame: &Frame, color: bool) -> io::Result<()> {
    match &frame.detail {
        Detail::None => Ok(()),
        Detail::Edit { slot, bars } => draw_edit_panel(out, *slot, bars, color),
        Detail::Presets { entries, selected } => {
            draw_header(out, "SELECT PRESET", color)?;
            for (idx, entry) in entries.iter().enumerate() {
                let y = settings::DETAIL_Y + 2 + idx as u16;
                draw_picker_row(out, y, entry, idx == *selected, color)?;
            }
            Ok(())
        }
        Detail::Fonts {
            entries,
            selected,
            window_start,
        } => {
            draw_header(out, "SELECT FONT", color)?;
            let end = (*window_start + FONT_WINDOW_ROWS).min(entries.len());
            for (offset, entry) in entries[*window_start..end].iter().enumerate() {
                let absolute = window_start + offset;
                let y = settings::DETAIL_Y + 2 + offset as u16;
                draw_picker_row(out, y, entry, absolute == *selected, color)?;
            }
            if entries.len() > FONT_WINDOW_ROWS {
                let y = settings::DETAIL_Y + 2 + FONT_WINDOW_ROWS as u16;
                out.queue(MoveTo(settings::DETAIL_X, y))?;
                out.queue(Print(format!("  ({}/{})", selected + 1, entries.len())))?;
            }
            Ok(())
        }
        Detail::Cursor {
            shape,
            blink,
            field,
        } => {
            draw_header(out, "CURSOR", color)?;
            let shape_line = format!("Shape: {shape}");
            let blink_line = format!("Blink: {}", if *blink { "on" } else { "off" });
            draw_picker_row(
                out,
                settings::DETAIL_Y + 2,
                &shape_line,
                *field == CursorField::Shape,
                color,
            )?;
            draw_picker_row(
                out,
                settings::DETAIL_Y + 3,
                &blink_line,
                *field == CursorField::Blink,
                color,
            )
        }
        Detail::Install {
            theme_file,
            init_file,
        } => {
            draw_header(out, "PERMANENT INSTALL", color)?;
            let lines = [
                format!("Theme file: {theme_file}"),
                format!("Init file:  {init_file}"),
                String::new(),
                "Press 'I' to install".to_string(),
                "Press 'U' to uninstall".to_string(),
            ];
            for (idx, line) in lines.iter().enumerate() {
                out.queue(MoveTo(settings::DETAIL_X, settings::DETAIL_Y + 2 + idx as u16))?;
                out.queue(Print(line))?;
            }
            Ok(())
        }
    }
}

fn draw_edit_panel(
    out: &mut impl Write,
    slot: usize,
    bars: &[ChannelBar; 3],
    color: bool,
) -> io::Result<()> {
    draw_header(out, &format!("EDIT COLOR {slot}"), color)?;
    if color {
        for r in 0..settings::EDIT_PREVIEW_ROWS {
            out.queue(MoveTo(settings::DETAIL_X, settings::DETAIL_Y + 2 + r))?;
            out.queue(PrintStyledContent(
                settings::EDIT_PREVIEW.with(Color::AnsiValue(slot as u8)),
            ))?;
        }
    }
    let bars_y = settings::DETAIL_Y + 2 + settings::EDIT_PREVIEW_ROWS + 1;
    for (idx, bar) in bars.iter().enumerate() {
        out.queue(MoveTo(settings::DETAIL_X, bars_y + idx as u16))?;
        let line = bar_text(bar);
        if color && bar.active {
            out.queue(SetAttribute(Attribute::Bold))?;
            out.queue(Print(&line))?;
            out.queue(SetAttribute(Attribute::Reset))?;
        } else {
            out.queue(Print(&line))?;
        }
    }
    Ok(())
}

fn draw_header(out: &mut impl Write, text: &str, color: bool) -> io::Result<()> {
    out.queue(MoveTo(settings::DETAIL_X, settings::DETAIL_Y))?;
    if color {
        out.queue(PrintStyledContent(
            text.to_string().with(settings::COLOR_SECTION).underlined(),
        ))?;
    } else {
        out.queue(Print(text))?;
    }
    Ok(())
}

fn draw_picker_row(
    out: &mut impl Write,
    y: u16,
    text: &str,
    active: bool,
    color: bool,
) -> io::Result<()> {
    let marker = if active {
        settings::PICKER_SELECTED
    } else {
        settings::PICKER_UNSELECTED
    };
    out.queue(MoveTo(settings::DETAIL_X, y))?;
    if color && active {
        out.queue(PrintStyledContent(
            format!("{marker} {text}").with(settings::COLOR_PICKER_SELECTED),
        ))?;
    } else {
        out.queue(Print(format!("{marker} {text}")))?;
    }
    Ok(())
}

/// One channel bar: `> R [████░░...] 123`.
fn bar_text(bar: &ChannelBar) -> String {
    let filled = (usize::from(bar.value) * settings::BAR_WIDTH) / 255;
    let mut gauge = settings::BAR_FILLED.repeat(filled);
    gauge.push_str(&settings::BAR_EMPTY.repeat(settings::BAR_WIDTH - filled));
    let prefix = if bar.active { "> " } else { "  " };
    format!("{prefix}{} [{gauge}] {:3}", bar.label, bar.value)
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::editor::{Editor, InputEvent};
    use crate::console::NullConsole;
    use std::path::PathBuf;

    fn test_editor() -> Editor {
        let config = Config {
            save_file: PathBuf::from("my_theme.sh"),
            theme_file: PathBuf::from("/home/u/.tty_theme_current.sh"),
            init_file: PathBuf::from("/home/u/.bashrc"),
            fonts_dir: PathBuf::from("/usr/share/consolefonts"),
        };
        Editor::new(config, vec!["lat9w-16".to_string()])
    }

    fn rendered(frame: &Frame) -> String {
        let mut buffer = Vec::new();
        draw(&mut buffer, frame, false).unwrap();
        String::from_utf8_lossy(&buffer).into_owned()
    }

    #[test]
    fn list_frame_shows_all_slots_and_status() {
        let ed = test_editor();
        let output = rendered(&ed.frame());
        assert!(output.contains("TTY Color Editor"));
        assert!(output.contains("#000000"));
        assert!(output.contains("#FFFFFF"));
        assert!(output.contains("(Background)"));
        assert!(output.contains("Brightness: 1.0"));
        assert!(output.contains("Q:Quit"));
    }

    #[test]
    fn edit_frame_shows_channel_bars() {
        let mut ed = test_editor();
        let mut console = NullConsole;
        ed.handle(InputEvent::Confirm, &mut console);
        let output = rendered(&ed.frame());
        assert!(output.contains("EDIT COLOR 0"));
        assert!(output.contains("> R ["));
        assert!(output.contains("  B ["));
    }

    #[test]
    fn install_frame_shows_paths_and_keys() {
        let mut ed = test_editor();
        let mut console = NullConsole;
        ed.handle(InputEvent::OpenInstall, &mut console);
        let output = rendered(&ed.frame());
        assert!(output.contains("PERMANENT INSTALL"));
        assert!(output.contains("/home/u/.bashrc"));
        assert!(output.contains("Press 'I' to install"));
    }

    #[test]
    fn bar_text_scales_value_into_gauge() {
        let full = bar_text(&ChannelBar {
            label: "R",
            value: 255,
            active: true,
        });
        assert!(full.starts_with("> R ["));
        assert!(full.contains(&settings::BAR_FILLED.repeat(settings::BAR_WIDTH)));
        let empty = bar_text(&ChannelBar {
            label: "G",
            value: 0,
            active: false,
        });
        assert!(empty.contains(&settings::BAR_EMPTY.repeat(settings::BAR_WIDTH)));
        assert!(empty.starts_with("  G ["));
    }

    #[test]
    fn clip_truncates_long_status_lines() {
        assert_eq!(clip("abcdef", 4), "abcd");
        assert_eq!(clip("abc", 4), "abc");
    }
}
