//! `traynote settings ...`

use anyhow::Result;
use traynote_core::{SettingOption, SettingValue};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::values::parse_setting_value;

/// Print every setting as `key = value`, sorted by key.
pub fn show(ctx: &CliContext) -> Result<()> {
    println!("{}", ctx.app().get_settings_data().settings);
    Ok(())
}

pub fn options(ctx: &CliContext) -> Result<()> {
    for (key, options) in ctx.app().get_setting_options() {
        println!("{key}: {}", render_options(&options));
    }
    Ok(())
}

pub fn set(ctx: &mut CliContext, key: &str, raw: &str) -> Result<()> {
    let value = parse_setting_value(raw);
    ctx.app_mut()
        .change_setting(key, value.clone())
        .map_err(CliError::from)?;
    println!("{key} = {value}");
    Ok(())
}

/// Options of one key on a single line. An empty string option stands for
/// free text.
pub fn render_options(options: &[SettingOption]) -> String {
    options
        .iter()
        .map(|option| match &option.value {
            SettingValue::Text(text) if text.is_empty() => format!("<text> ({})", option.label),
            value => format!("{value} ({})", option.label),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
