// Typing effects driven by host timers. Each `tick()` performs one step and
// tells the host how long to wait before the next one.

use wasm_bindgen::prelude::*;

pub const TYPE_DELAY_MS: u32 = 100;
pub const ERASE_DELAY_MS: u32 = 50;
pub const HOLD_DELAY_MS: u32 = 2000;

// Reveals a piece of text one character at a time.
#[wasm_bindgen]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    delay_ms: u32,
}

#[wasm_bindgen]
impl Typewriter {
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str, delay_ms: u32) -> Typewriter {
        Typewriter {
            chars: text.chars().collect(),
            shown: 0,
            delay_ms,
        }
    }

    // Reveals the next character and returns the visible text, or `None`
    // once everything is shown.
    pub fn tick(&mut self) -> Option<String> {
        if self.shown < self.chars.len() {
            self.shown += 1;
            Some(self.text())
        } else {
            None
        }
    }

    pub fn text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.chars.len()
    }
}

// Types each command out, holds it, erases it and moves on to the next,
// cycling forever.
#[wasm_bindgen]
pub struct TerminalTyper {
    commands: Vec<Vec<char>>,
    command: usize,
    shown: usize,
    erasing: bool,
}

#[wasm_bindgen]
impl TerminalTyper {
    // One command per line; blank lines are skipped.
    pub fn from_lines(text: &str) -> TerminalTyper {
        TerminalTyper::new(text.lines().map(str::trim))
    }

    // Advances by one character and returns the delay before the next tick,
    // or `None` when there is nothing to type.
    pub fn tick(&mut self) -> Option<u32> {
        let len = self.commands.get(self.command)?.len();

        if self.erasing {
            self.shown -= 1;
        } else {
            self.shown += 1;
        }

        let mut delay = if self.erasing {
            ERASE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };

        if !self.erasing && self.shown == len {
            delay = HOLD_DELAY_MS;
            self.erasing = true;
        } else if self.erasing && self.shown == 0 {
            self.erasing = false;
            self.command = (self.command + 1) % self.commands.len();
        }

        Some(delay)
    }

    pub fn text(&self) -> String {
        match self.commands.get(self.command) {
            Some(command) => command[..self.shown].iter().collect(),
            None => String::new(),
        }
    }

    pub fn command_index(&self) -> usize {
        self.command
    }

    pub fn is_erasing(&self) -> bool {
        self.erasing
    }
}

impl TerminalTyper {
    pub fn new<I, S>(commands: I) -> TerminalTyper
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let commands = commands
            .into_iter()
            .map(|c| c.as_ref().chars().collect::<Vec<char>>())
            .filter(|c| !c.is_empty())
            .collect();
        TerminalTyper {
            commands,
            command: 0,
            shown: 0,
            erasing: false,
        }
    }
}
