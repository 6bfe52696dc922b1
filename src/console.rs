//! Administrative console commands
//!
//! The console itself (text entry, drawing) belongs to the host. This module
//! turns a command line into an action on the session or the settings and
//! returns the lines to print back.

use crate::settings::Settings;
use crate::sim::GameState;

/// Help text, one line per command
pub const HELP: [&str; 8] = [
    "Console Commands:",
    "fps - toggle display of frames per second",
    "gravity off - turns off planet gravity",
    "gravity on - turns on planet gravity",
    "planet off - disables planet",
    "planet on - enables planet",
    "music on - plays music",
    "music off - no music",
];

/// A recognised console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Help,
    ToggleFps,
    Gravity(bool),
    Planet(bool),
    Music(bool),
}

impl ConsoleCommand {
    /// Parse a command line (case-insensitive, surrounding whitespace ignored)
    pub fn parse(line: &str) -> Option<Self> {
        let words: Vec<String> = line
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();
        let words: Vec<&str> = words.iter().map(String::as_str).collect();

        match words.as_slice() {
            ["help"] => Some(ConsoleCommand::Help),
            ["fps"] => Some(ConsoleCommand::ToggleFps),
            ["gravity", switch] => parse_switch(switch).map(ConsoleCommand::Gravity),
            ["planet", switch] => parse_switch(switch).map(ConsoleCommand::Planet),
            ["music", switch] => parse_switch(switch).map(ConsoleCommand::Music),
            _ => None,
        }
    }

    /// Apply the command and return what the console should print
    pub fn execute(self, state: &mut GameState, settings: &mut Settings) -> Vec<String> {
        match self {
            ConsoleCommand::Help => HELP.iter().map(|line| line.to_string()).collect(),
            ConsoleCommand::ToggleFps => {
                settings.show_fps = !settings.show_fps;
                vec![if settings.show_fps { "fps On" } else { "fps Off" }.to_string()]
            }
            ConsoleCommand::Gravity(on) => {
                state.planet.set_gravity(on);
                log::info!("Planet gravity {}", on_off(on));
                vec![format!("Gravity {}", on_off(on))]
            }
            ConsoleCommand::Planet(on) => {
                state.planet.set_enabled(on);
                log::info!("Planet {}", if on { "enabled" } else { "disabled" });
                vec![format!("Planet {}", on_off(on))]
            }
            ConsoleCommand::Music(on) => {
                settings.music = on;
                vec![format!("Music {}", on_off(on))]
            }
        }
    }
}

fn parse_switch(word: &str) -> Option<bool> {
    match word {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "On" } else { "Off" }
}

/// Parse and run one console line; blank lines print nothing
pub fn run_command(line: &str, state: &mut GameState, settings: &mut Settings) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }
    match ConsoleCommand::parse(line) {
        Some(command) => command.execute(state, settings),
        None => {
            log::warn!("Unknown console command: {:?}", line.trim());
            vec![format!("Unknown command: {}", line.trim())]
        }
    }
}
