use std::fmt::Display;
use std::str::FromStr;

use anyhow::Result;
use inquire::{Confirm, CustomType, Select, Text, validator::Validation};

use crate::ui::cli::drivers::PromptDriver;

/// Terminal prompts backed by `inquire`.
pub struct InquireDriver;

fn out_of_range<T: PartialOrd + Display>(
    x: &T,
    min: Option<&T>,
    max: Option<&T>,
) -> Option<String> {
    match (min, max) {
        (Some(lo), Some(hi)) if x < lo || x > hi => {
            Some(format!("Must be between {lo} and {hi}"))
        }
        (Some(lo), None) if x < lo => Some(format!("Must be ≥ {lo}")),
        (None, Some(hi)) if x > hi => Some(format!("Must be ≤ {hi}")),
        _ => None,
    }
}

fn ask_bounded<T>(
    title: &str,
    help: &str,
    default: T,
    min: Option<T>,
    max: Option<T>,
) -> Result<T>
where
    T: Copy + FromStr + ToString + PartialOrd + Display + 'static,
{
    let q = CustomType::<T>::new(title)
        .with_default(default)
        .with_help_message(help)
        .with_validator(move |x: &T| {
            Ok(match out_of_range(x, min.as_ref(), max.as_ref()) {
                Some(msg) => Validation::Invalid(msg.into()),
                None => Validation::Valid,
            })
        });
    Ok(q.prompt()?)
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        ask_bounded(title, help, default, min, max)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        ask_bounded(title, help, default, min, max)
    }

    fn ask_select(&self, title: &str, help: &str, options: &[String]) -> Result<usize> {
        let chosen = Select::new(title, options.to_vec())
            .with_help_message(help)
            .raw_prompt()?;
        Ok(chosen.index)
    }
}
