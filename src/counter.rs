// Count-up animations for stat numbers. Two styles are used on the site:
// the home page stats count to their exact target in 100 steps, while the
// project stats count over ~2s and finish on their original label ("25+").

use wasm_bindgen::prelude::*;

pub const STAT_STEPS: f64 = 100.0;
pub const STAT_INTERVAL_MS: u32 = 20;
pub const LABEL_DURATION_MS: f64 = 2000.0;
pub const LABEL_INTERVAL_MS: u32 = 16;

enum Style {
    Stat,
    Label { label: String, plus: bool },
}

#[wasm_bindgen]
pub struct CountUp {
    current: f64,
    target: f64,
    increment: f64,
    interval_ms: u32,
    style: Style,
    done: bool,
}

#[wasm_bindgen]
impl CountUp {
    pub fn stat(target: f64) -> CountUp {
        CountUp {
            current: 0.0,
            target,
            increment: target / STAT_STEPS,
            interval_ms: STAT_INTERVAL_MS,
            style: Style::Stat,
            done: false,
        }
    }

    pub fn for_label(label: &str) -> Result<CountUp, JsValue> {
        CountUp::from_label(label)
            .ok_or_else(|| JsValue::from_str(&format!("no number in label {:?}", label)))
    }

    // Text to show now, or `None` once the final value has been shown.
    pub fn tick(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        match &self.style {
            Style::Stat => {
                if self.current < self.target {
                    self.current += self.increment;
                    Some(format_whole(self.current.ceil().min(self.target)))
                } else {
                    self.done = true;
                    Some(format_whole(self.target))
                }
            }
            Style::Label { label, plus } => {
                self.current += self.increment;
                if self.current >= self.target {
                    self.done = true;
                    Some(label.clone())
                } else {
                    let suffix = if *plus { "+" } else { "" };
                    Some(format!("{}{}", format_whole(self.current.floor()), suffix))
                }
            }
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl CountUp {
    // Counts up to the digits found in `label`. Labels without a non-zero
    // number are left alone.
    pub fn from_label(label: &str) -> Option<CountUp> {
        let digits: String = label.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse::<u64>().ok()? as f64;
        if target == 0.0 {
            return None;
        }
        Some(CountUp {
            current: 0.0,
            target,
            increment: target / (LABEL_DURATION_MS / LABEL_INTERVAL_MS as f64),
            interval_ms: LABEL_INTERVAL_MS,
            style: Style::Label {
                label: label.to_owned(),
                plus: label.contains('+'),
            },
            done: false,
        })
    }
}

fn format_whole(value: f64) -> String {
    format!("{}", value as i64)
}
