use chrono::Local;
use colored::Colorize;

use crate::cell::Digit;
use crate::regions::Pos;

/// Console trace of search activity, one line per assignment or removal.
/// Disabled traces cost nothing in the hot loop beyond a branch.
pub struct Trace {
    enabled: bool,
    color: bool,
    events: usize,
}

impl Trace {
    pub fn new(enabled: bool, color: bool) -> Self {
        Self { enabled, color, events: 0 }
    }

    pub fn disabled() -> Self {
        Self::new(false, false)
    }

    pub fn events(&self) -> usize {
        self.events
    }

    pub fn assign(&mut self, depth: usize, p: Pos, d: Digit, contradiction: bool) {
        if !self.enabled {
            return;
        }
        let tail = if contradiction { " (contradiction)" } else { "" };
        self.emit(&format!("depth {depth}: try {d} at r{},c{}{tail}", p.r + 1, p.c + 1));
    }

    pub fn retract(&mut self, depth: usize, p: Pos, d: Digit) {
        if !self.enabled {
            return;
        }
        self.emit(&format!("depth {depth}: remove {d} from r{},c{}", p.r + 1, p.c + 1));
    }

    pub fn note(&mut self, title: &str, details: &str) {
        if !self.enabled {
            return;
        }
        self.emit(&format!("{title}: {details}"));
    }

    fn emit(&mut self, msg: &str) {
        self.events += 1;
        let ts = Local::now().format("%H:%M:%S%.3f");
        if self.color {
            println!("{} {} {}", format!("[{ts}]").dimmed(), "➤".blue().bold(), msg);
        } else {
            println!("[{ts}] ➤ {msg}");
        }
    }
}
