//! The modal editor: routes abstract input events to the palette store,
//! theme codec, and installer, and produces a render model each frame.
//!
//! Single-threaded and synchronous: one event is fully processed before the
//! next is read. Side-effecting pushes are fire-and-forget; file I/O failures
//! become status messages. The only way out is the quit event, accepted in
//! list mode alone.

mod events;
mod mode;
mod view;

pub use events::{Flow, InputEvent};
pub use mode::{CursorField, Mode, ModeTag};
pub use view::{ChannelBar, Detail, Frame, RowMarker, SlotRow, FONT_WINDOW_ROWS};

use crate::color::{adjust_channel, Channel};
use crate::config::Config;
use crate::console::Console;
use crate::cursor::CursorConfig;
use crate::fonts::FontSelection;
use crate::install::{self, InstallOutcome};
use crate::palette::{preset_names, PaletteStore, Slot, SLOT_COUNT};
use crate::theme;

// Kept under 76 columns so it survives clipping on an 80-column console.
const STATUS_HELP: &str =
    "Arrows:Move Enter:Edit S:Save P:Presets F:Fonts C:Cursor I:Install Q:Quit";
const STATUS_EDIT: &str = "Up/Down:Channel Left/Right:Adjust Enter:Done";
const STATUS_PRESETS: &str = "Select preset (Enter applies, Esc cancels)";
const STATUS_FONTS: &str = "Select font (Enter applies, letter jumps, Esc cancels)";
const STATUS_CURSOR: &str = "Up/Down:Field Left/Right:Change Esc:Done";
const STATUS_INSTALL: &str = "I:Install to shell init U:Uninstall Esc:Cancel";

const BRIGHTNESS_STEP: f32 = 0.1;

/// Interactive session state.
pub struct Editor {
    config: Config,
    store: PaletteStore,
    cursor_cfg: CursorConfig,
    font: FontSelection,
    fonts: Vec<String>,
    selected: usize,
    mode: Mode,
    status: String,
}

impl Editor {
    pub fn new(config: Config, fonts: Vec<String>) -> Self {
        Self {
            config,
            store: PaletteStore::new(),
            cursor_cfg: CursorConfig::default(),
            font: FontSelection::Default,
            fonts,
            selected: 0,
            mode: Mode::List,
            status: STATUS_HELP.to_string(),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn store(&self) -> &PaletteStore {
        &self.store
    }

    pub fn cursor_config(&self) -> CursorConfig {
        self.cursor_cfg
    }

    pub fn font(&self) -> &FontSelection {
        &self.font
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Import a theme document's slot directives at startup or on load.
    pub fn import_script(&mut self, text: &str, console: &mut dyn Console) {
        let pairs = theme::scan_script(text);
        if pairs.is_empty() {
            self.status = "No color directives recognized.".to_string();
            return;
        }
        let count = self.store.import_from_document(&pairs, console);
        self.status = format!("Loaded {count} colors.");
    }

    /// Process one input event.
    pub fn handle(&mut self, event: InputEvent, console: &mut dyn Console) -> Flow {
        match self.mode.tag() {
            ModeTag::List => return self.handle_list(event, console),
            ModeTag::Edit => self.handle_edit(event, console),
            ModeTag::Presets => self.handle_presets(event, console),
            ModeTag::Fonts => self.handle_fonts(event, console),
            ModeTag::Cursor => self.handle_cursor(event, console),
            ModeTag::Install => self.handle_install(event, console),
        }
        Flow::Continue
    }

    fn handle_list(&mut self, event: InputEvent, console: &mut dyn Console) -> Flow {
        match event {
            InputEvent::Quit => return Flow::Quit,
            InputEvent::Up => {
                self.selected = (self.selected + SLOT_COUNT - 1) % SLOT_COUNT;
            }
            InputEvent::Down => {
                self.selected = (self.selected + 1) % SLOT_COUNT;
            }
            InputEvent::Confirm => {
                self.mode = Mode::Edit {
                    buffer: self.store.base_color(self.selected_slot()),
                    channel: Channel::Red,
                };
                self.status = STATUS_EDIT.to_string();
            }
            InputEvent::Save => self.save_quick(),
            InputEvent::OpenPresets => {
                self.mode = Mode::Presets { index: 0 };
                self.status = STATUS_PRESETS.to_string();
            }
            InputEvent::OpenFonts => {
                self.mode = Mode::Fonts { index: 0 };
                self.status = STATUS_FONTS.to_string();
            }
            InputEvent::OpenCursor => {
                self.mode = Mode::Cursor {
                    field: CursorField::Shape,
                };
                self.status = STATUS_CURSOR.to_string();
            }
            InputEvent::OpenInstall => {
                self.mode = Mode::Install;
                self.status = STATUS_INSTALL.to_string();
            }
            InputEvent::Brighten => self.step_brightness(BRIGHTNESS_STEP, console),
            InputEvent::Dim => self.step_brightness(-BRIGHTNESS_STEP, console),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_edit(&mut self, event: InputEvent, console: &mut dyn Console) {
        let Mode::Edit { buffer, channel } = &mut self.mode else {
            return;
        };
        match event {
            InputEvent::Up => *channel = channel.prev(),
            InputEvent::Down => *channel = channel.next(),
            InputEvent::Left | InputEvent::Right => {
                let delta = if event == InputEvent::Left { -1 } else { 1 };
                *buffer = adjust_channel(*buffer, *channel, delta);
                let color = *buffer;
                let slot = self.selected_slot();
                self.store.set_base_color(slot, color, console);
            }
            InputEvent::Confirm | InputEvent::Cancel => self.back_to_list(),
            _ => {}
        }
    }

    fn handle_presets(&mut self, event: InputEvent, console: &mut dyn Console) {
        let Mode::Presets { index } = &mut self.mode else {
            return;
        };
        let names = preset_names();
        match event {
            InputEvent::Up => *index = (*index + names.len() - 1) % names.len(),
            InputEvent::Down => *index = (*index + 1) % names.len(),
            InputEvent::Confirm => {
                let name = names[*index];
                match self.store.apply_preset(name, console) {
                    Ok(()) => self.status = format!("Applied preset: {name}"),
                    // Unreachable with a closed catalog; refuse without mutating.
                    Err(e) => self.status = format!("Error: {e}"),
                }
                self.mode = Mode::List;
            }
            InputEvent::Cancel => self.back_to_list(),
            _ => {}
        }
    }

    fn handle_fonts(&mut self, event: InputEvent, console: &mut dyn Console) {
        let Mode::Fonts { index } = &mut self.mode else {
            return;
        };
        // Entry 0 is the "(default)" sentinel; fonts follow in order.
        let total = self.fonts.len() + 1;
        match event {
            InputEvent::Up => *index = (*index + total - 1) % total,
            InputEvent::Down => *index = (*index + 1) % total,
            InputEvent::JumpTo(ch) => {
                let needle = ch.to_ascii_lowercase();
                if let Some(pos) = self
                    .fonts
                    .iter()
                    .position(|name| name.to_ascii_lowercase().starts_with(needle))
                {
                    *index = pos + 1;
                }
            }
            InputEvent::Confirm => {
                let choice = *index;
                if choice == 0 {
                    self.font = FontSelection::Default;
                    self.status = "Using kernel default font.".to_string();
                } else {
                    let name = self.fonts[choice - 1].clone();
                    match console.apply_font(&name) {
                        Ok(()) => {
                            self.status = format!("Applied font: {name}");
                            self.font = FontSelection::Named(name);
                        }
                        Err(e) => self.status = format!("Font apply failed: {e}"),
                    }
                }
                self.mode = Mode::List;
            }
            InputEvent::Cancel => self.back_to_list(),
            _ => {}
        }
    }

    fn handle_cursor(&mut self, event: InputEvent, console: &mut dyn Console) {
        let Mode::Cursor { field } = &mut self.mode else {
            return;
        };
        match event {
            InputEvent::Up | InputEvent::Down => *field = field.toggled(),
            InputEvent::Left | InputEvent::Right => {
                match field {
                    CursorField::Shape => {
                        self.cursor_cfg.shape = if event == InputEvent::Left {
                            self.cursor_cfg.shape.prev()
                        } else {
                            self.cursor_cfg.shape.next()
                        };
                    }
                    CursorField::Blink => self.cursor_cfg.blink = !self.cursor_cfg.blink,
                }
                // Changes apply immediately; there is no pending state.
                console.apply_cursor(self.cursor_cfg);
            }
            InputEvent::Confirm | InputEvent::Cancel => self.back_to_list(),
            _ => {}
        }
    }

    fn handle_install(&mut self, event: InputEvent, _console: &mut dyn Console) {
        match event {
            InputEvent::InstallConfirm => {
                self.status = self.install();
                self.mode = Mode::List;
            }
            InputEvent::UninstallConfirm => {
                self.status = match install::unregister_autoload(&self.config.init_file) {
                    Ok(()) => format!("Removed loader from {}.", self.config.init_file.display()),
                    Err(e) => format!("Uninstall failed: {e}"),
                };
                self.mode = Mode::List;
            }
            InputEvent::Cancel => self.back_to_list(),
            _ => {}
        }
    }

    /// Write the theme file and upsert the shell-init loader line.
    fn install(&mut self) -> String {
        let script = self.render_theme();
        if let Err(e) = install::write_theme_file(&self.config.theme_file, &script) {
            return format!("Install failed: {e}");
        }
        match install::register_autoload(&self.config.init_file, &self.config.theme_file) {
            Ok(InstallOutcome::Installed) => "Installed! Theme will load on login.".to_string(),
            Ok(InstallOutcome::AlreadyInstalled) => {
                "Updated theme file (loader already present).".to_string()
            }
            Err(e) => format!("Install failed: {e}"),
        }
    }

    fn save_quick(&mut self) {
        let script = self.render_theme();
        self.status = match install::write_theme_file(&self.config.save_file, &script) {
            Ok(()) => format!("Saved to {}", self.config.save_file.display()),
            Err(e) => format!("Error: {e}"),
        };
    }

    fn render_theme(&self) -> String {
        theme::render_script(self.store.display(), &self.font, self.cursor_cfg)
    }

    fn step_brightness(&mut self, delta: f32, console: &mut dyn Console) {
        self.store
            .set_brightness(self.store.brightness() + delta, console);
        self.status = format!("Brightness: {:.1}", self.store.brightness());
    }

    fn back_to_list(&mut self) {
        self.mode = Mode::List;
        self.status = STATUS_HELP.to_string();
    }

    fn selected_slot(&self) -> Slot {
        // `selected` is always kept inside 0..16 by the wrap arithmetic.
        Slot::new(self.selected as u8).unwrap_or(Slot::ZERO)
    }

    /// Build the render model for the current state.
    pub fn frame(&self) -> Frame {
        let rows = Slot::all()
            .map(|slot| {
                let marker = if slot.index() == self.selected {
                    match self.mode.tag() {
                        ModeTag::Edit => RowMarker::Editing,
                        _ => RowMarker::Cursor,
                    }
                } else {
                    RowMarker::None
                };
                SlotRow {
                    index: slot.index(),
                    name: slot.name(),
                    hex: self.store.display_color(slot).hex(),
                    hint: slot.usage_hint(),
                    marker,
                }
            })
            .collect();

        let detail = match &self.mode {
            Mode::List => Detail::None,
            Mode::Edit { buffer, channel } => Detail::Edit {
                slot: self.selected,
                bars: [
                    ChannelBar {
                        label: Channel::Red.label(),
                        value: buffer.r,
                        active: *channel == Channel::Red,
                    },
                    ChannelBar {
                        label: Channel::Green.label(),
                        value: buffer.g,
                        active: *channel == Channel::Green,
                    },
                    ChannelBar {
                        label: Channel::Blue.label(),
                        value: buffer.b,
                        active: *channel == Channel::Blue,
                    },
                ],
            },
            Mode::Presets { index } => Detail::Presets {
                entries: preset_names(),
                selected: *index,
            },
            Mode::Fonts { index } => {
                let mut entries = vec![FontSelection::Default.label().to_string()];
                entries.extend(self.fonts.iter().cloned());
                let window_start = view::window_start(*index, entries.len());
                Detail::Fonts {
                    entries,
                    selected: *index,
                    window_start,
                }
            }
            Mode::Cursor { field } => Detail::Cursor {
                shape: self.cursor_cfg.shape.label(),
                blink: self.cursor_cfg.blink,
                field: *field,
            },
            Mode::Install => Detail::Install {
                theme_file: self.config.theme_file.display().to_string(),
                init_file: self.config.init_file.display().to_string(),
            },
        };

        Frame {
            title: "TTY Color Editor",
            rows,
            detail,
            brightness: self.store.brightness(),
            status: self.status.clone(),
        }
    }
}
