//! Prompt text shown before every read.

use std::io::Write;

use crate::{
    chooser::{Chooser, Options},
    constants::{yes_no, OPTION_SEPARATOR},
    error::Result,
    ioutils::LineSource,
};

/// Builds the prompt shown to the user, e.g. `Choose [A/b/c]: `.
///
/// Every allowed option is lowercased except the one matching `default`
/// (ignoring case), which is uppercased. An empty `default` highlights nothing.
pub fn build_prompt<S: AsRef<str>>(prompt: &str, default: &str, allowed: &[S]) -> String {
    let default = default.to_lowercase();
    let options = allowed
        .iter()
        .map(|option| {
            let option = option.as_ref().to_lowercase();
            if !default.is_empty() && option == default {
                option.to_uppercase()
            } else {
                option
            }
        })
        .collect::<Vec<_>>()
        .join(OPTION_SEPARATOR);

    format!("{prompt} [{options}]: ")
}

/// Asks a yes/no question, e.g. `Overwrite? [y/N]: `.
///
/// Returns `true` without any I/O when `skip` is set. A blank answer picks
/// `default_yes`.
pub fn confirm(
    skip: bool,
    prompt: &str,
    default_yes: bool,
    input: &mut dyn LineSource,
    output: &mut dyn Write,
) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    let options = Options {
        prompt: prompt.to_string(),
        allowed: vec![yes_no::YES.to_string(), yes_no::NO.to_string()],
        default: if default_yes { yes_no::YES } else { yes_no::NO }.to_string(),
        ..Options::default()
    };
    let answer = Chooser::new(&options).with_input(input).with_output(output).choose()?;

    Ok(answer == yes_no::YES)
}
