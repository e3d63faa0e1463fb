use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::{Context, Result, bail};

use crate::ui::cli::drivers::PromptDriver;

/// Prompt driver answering from a title -> answer table.
///
/// Unscripted prompts take their default. Every title asked is recorded.
#[derive(Default)]
pub struct ScriptedDriver {
    answers: HashMap<String, String>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, title: &str, value: &str) -> Self {
        self.answers.insert(title.to_string(), value.to_string());
        self
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn scripted(&self, title: &str) -> Option<&str> {
        self.asked.borrow_mut().push(title.to_string());
        self.answers.get(title).map(String::as_str)
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.scripted(title) {
            Some(v) => v.parse().with_context(|| format!("bad bool for {title}")),
            None => Ok(default),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        Ok(self.scripted(title).unwrap_or(default).to_string())
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let v = match self.scripted(title) {
            Some(v) => v.parse().with_context(|| format!("bad integer for {title}"))?,
            None => default,
        };
        if min.is_some_and(|lo| v < lo) || max.is_some_and(|hi| v > hi) {
            bail!("{title}: {v} out of range");
        }
        Ok(v)
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let v = match self.scripted(title) {
            Some(v) => v.parse().with_context(|| format!("bad number for {title}"))?,
            None => default,
        };
        if min.is_some_and(|lo| v < lo) || max.is_some_and(|hi| v > hi) {
            bail!("{title}: {v} out of range");
        }
        Ok(v)
    }

    fn ask_select(&self, title: &str, _help: &str, options: &[String]) -> Result<usize> {
        let Some(label) = self.scripted(title) else {
            return Ok(0);
        };
        options
            .iter()
            .position(|o| o == label)
            .with_context(|| format!("{label:?} is not an option of {title}"))
    }
}
