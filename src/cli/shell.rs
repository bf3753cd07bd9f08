use std::{
    borrow::Cow,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};
use shell_words::split;

use crate::{
    cli::{output, CliError, CliMode, LoopControl, ShellContext, SCRIPT_ENV_VAR},
    config::Config,
    ledger::Ledger,
};

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV_VAR).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    output::set_plain(mode == CliMode::Script);

    let config = Config::load()?;
    let mut context = ShellContext::new(Ledger::with_labels(config.labels()));
    tracing::debug!(?mode, locale = ?config.locale, "starting shell");

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context, io::stdin().lock()),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    output::info("Type `help` for a list of commands.");

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                handle_line(context, trimmed);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Executes one command per input line until EOF or `exit`.
pub fn run_script<R: BufRead>(context: &mut ShellContext, input: R) -> Result<(), CliError> {
    for line in input.lines() {
        if !context.running {
            break;
        }
        handle_line(context, &line?);
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) {
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(err);
            return;
        }
    };

    let Some((raw, rest)) = tokens.split_first() else {
        return;
    };
    let command = raw.to_lowercase();
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();

    match context.dispatch(&command, &args) {
        Ok(LoopControl::Continue) => {}
        Ok(LoopControl::Exit) => context.running = false,
        Err(err) => context.report_error(err),
    }
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_string).collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        // Only the command word is completed.
        if prefix.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let start = prefix.len() - prefix.trim_start().len();
        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> ShellContext {
        let mut context = ShellContext::new(Ledger::new());
        run_script(&mut context, input.as_bytes()).unwrap();
        context
    }

    #[test]
    fn script_applies_each_line() {
        let context =
            run("income 2000 Salary\nincome 500 Bonus\nexpense 300 Food\nexpense 700 Rent\n");
        assert_eq!(context.ledger.get_balance(), 1500.0);
        assert_eq!(context.ledger.len(), 4);
    }

    #[test]
    fn quoted_descriptions_stay_together() {
        let context = run("expense 42 \"Coffee beans\"\n");
        assert_eq!(
            context.ledger.get_transactions(),
            vec![("Coffee beans".to_string(), -42.0)]
        );
    }

    #[test]
    fn errors_do_not_stop_the_script() {
        let context = run("income -5\nbogus\nexpense 'unterminated\nincome 5\n");
        assert_eq!(context.ledger.get_transactions(), vec![("Income".to_string(), 5.0)]);
    }

    #[test]
    fn exit_stops_processing() {
        let context = run("income 10\nexit\nincome 20\n");
        assert_eq!(context.ledger.get_balance(), 10.0);
        assert!(!context.running);
    }
}
