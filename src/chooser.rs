//! Asking the user to choose one of a set of options.
//!
//! [`Options`] describes the question and [`Chooser`] binds it to an input
//! and an output stream for a single call:
//!
//! ```
//! use chooser::Options;
//!
//! let options = Options {
//!     prompt: "Is it cool?".to_string(),
//!     allowed: vec!["y".to_string(), "n".to_string()],
//!     default: "y".to_string(),
//!     ..Options::default()
//! };
//! let mut output = Vec::<u8>::new();
//! let chosen = options.choose_from(&mut "Y\n".as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(chosen, "y");
//! assert_eq!(String::from_utf8(output).unwrap(), "Is it cool? [Y/n]: ");
//! ```

use std::io::Write;

use log::{debug, trace};
use serde::Deserialize;

use crate::{
    constants::{DEFAULT_MAX_ATTEMPTS, TRIMMED_CHARS},
    error::{Error, Result},
    ioutils::{write_flush, LineSource},
    prompt::build_prompt,
};

/// What to ask and which answers are accepted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Text shown before the options. Nothing is printed when empty.
    pub prompt: String,
    /// Valid answers, compared case-insensitively.
    pub allowed: Vec<String>,
    /// Returned when the user enters a blank line. Empty means no default.
    pub default: String,
    /// Accept a blank line even without a default.
    pub allow_empty: bool,
    /// Attempts before giving up. Values below 1 mean 5.
    pub max_attempts: i32,
}

impl Options {
    /// Asks using `input` and `output` for the duration of this call.
    pub fn choose_from<R, W>(&self, input: &mut R, output: &mut W) -> Result<String>
    where
        R: LineSource,
        W: Write,
    {
        Chooser::new(self).with_input(input).with_output(output).choose()
    }

    /// Asks on the process's standard input and output.
    pub fn choose_stdio(&self) -> Result<String> {
        let mut stdin = std::io::stdin().lock();
        Chooser::new(self).with_input(&mut stdin).choose()
    }

    fn accepts_blank(&self) -> bool {
        self.allow_empty || !self.default.is_empty()
    }

    fn find_allowed(&self, answer: &str) -> Option<String> {
        self.allowed
            .iter()
            .map(|option| option.to_lowercase())
            .find(|option| option == answer)
    }
}

/// Resolves the configured attempt limit.
pub fn resolve_max_attempts(max_attempts: i32) -> u32 {
    if max_attempts < 1 {
        DEFAULT_MAX_ATTEMPTS
    } else {
        max_attempts as u32
    }
}

/// Binds [`Options`] to the streams used by one [`Chooser::choose`] call.
pub struct Chooser<'a> {
    options: &'a Options,
    input: Option<&'a mut dyn LineSource>,
    output: Option<&'a mut dyn Write>,
}

impl<'a> Chooser<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self { options, input: None, output: None }
    }

    pub fn with_input(mut self, input: &'a mut dyn LineSource) -> Self {
        self.input = Some(input);
        self
    }

    /// Standard output is used when no output is given.
    pub fn with_output(mut self, output: &'a mut dyn Write) -> Self {
        self.output = Some(output);
        self
    }

    /// Asks until a valid option is entered or the attempt limit is reached.
    ///
    /// A blank answer returns the default when one is set or when empty
    /// answers are allowed. Invalid non-blank answers are never replaced by
    /// the default: once `max_attempts` of them are entered the call fails
    /// with [`Error::GaveUpError`]. Stream failures end the call right away.
    ///
    /// The returned answer is always lowercased.
    pub fn choose(self) -> Result<String> {
        let Some(input) = self.input else {
            return Err(Error::NilInputError);
        };

        let mut stdout;
        let output: &mut dyn Write = match self.output {
            Some(output) => output,
            None => {
                stdout = std::io::stdout().lock();
                &mut stdout
            }
        };

        let options = self.options;
        let max_attempts = resolve_max_attempts(options.max_attempts);
        let prompt = (!options.prompt.is_empty())
            .then(|| build_prompt(&options.prompt, &options.default, &options.allowed));
        if let Some(prompt) = &prompt {
            trace!("Prompt: {prompt:?}");
        }

        let mut attempts = 0;
        loop {
            if let Some(prompt) = &prompt {
                write_flush(output, prompt)?;
            }

            let line = input.next_line()?.unwrap_or_else(|| {
                debug!("Input exhausted, treating it as a blank answer");
                String::new()
            });
            let answer = line.trim_matches(TRIMMED_CHARS).to_lowercase();

            if answer.is_empty() && options.accepts_blank() {
                debug!("Blank answer, using default {:?}", options.default);
                return Ok(options.default.to_lowercase());
            }

            if let Some(chosen) = options.find_allowed(&answer) {
                debug!("Chose {chosen:?} after {} invalid attempts", attempts);
                return Ok(chosen);
            }

            attempts += 1;
            debug!("Invalid answer {answer:?} ({attempts}/{max_attempts})");
            if attempts >= max_attempts {
                return Err(Error::GaveUpError { attempts });
            }
        }
    }
}
