use crate::{
    cli::{output, CommandError, LoopControl},
    ledger::Ledger,
};

struct CommandSpec {
    name: &'static str,
    usage: &'static str,
    summary: &'static str,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "income",
        usage: "income <amount> [description]",
        summary: "Record income",
    },
    CommandSpec {
        name: "expense",
        usage: "expense <amount> [description]",
        summary: "Record an expense",
    },
    CommandSpec {
        name: "balance",
        usage: "balance",
        summary: "Show the current balance",
    },
    CommandSpec {
        name: "list",
        usage: "list",
        summary: "List recorded transactions in order",
    },
    CommandSpec {
        name: "help",
        usage: "help",
        summary: "Show this help",
    },
    CommandSpec {
        name: "exit",
        usage: "exit | quit",
        summary: "Leave the shell",
    },
];

/// Shell state: the ledger being edited and whether the loop should continue.
pub struct ShellContext {
    pub ledger: Ledger,
    pub running: bool,
}

impl ShellContext {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            running: true,
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = COMMANDS.iter().map(|spec| spec.name).collect();
        names.push("quit");
        names
    }

    pub fn prompt(&self) -> String {
        format!("finance [{}]> ", output::format_amount(self.ledger.get_balance()))
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        match command {
            "income" => self.cmd_income(args),
            "expense" => self.cmd_expense(args),
            "balance" => self.cmd_balance(args),
            "list" => self.cmd_list(args),
            "help" => self.cmd_help(),
            "exit" | "quit" => Ok(LoopControl::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    pub fn report_error(&self, err: CommandError) {
        tracing::debug!(error = %err, "command failed");
        output::error(err);
    }

    fn cmd_income(&mut self, args: &[&str]) -> Result<LoopControl, CommandError> {
        let (amount, description) = parse_entry_args("income", args)?;
        self.ledger.record_income(amount, description.as_deref())?;
        self.report_recorded();
        Ok(LoopControl::Continue)
    }

    fn cmd_expense(&mut self, args: &[&str]) -> Result<LoopControl, CommandError> {
        let (amount, description) = parse_entry_args("expense", args)?;
        self.ledger.record_expense(amount, description.as_deref())?;
        self.report_recorded();
        Ok(LoopControl::Continue)
    }

    fn report_recorded(&self) {
        if let Some(entry) = self.ledger.entries().last() {
            output::success(format!(
                "Recorded {} `{}` {}. Balance: {}",
                entry.kind().to_string().to_lowercase(),
                entry.description(),
                output::format_signed(entry.amount()),
                output::format_amount(self.ledger.get_balance())
            ));
        }
    }

    fn cmd_balance(&self, args: &[&str]) -> Result<LoopControl, CommandError> {
        expect_no_args("balance", args)?;
        output::info(format!(
            "Balance: {}",
            output::format_amount(self.ledger.get_balance())
        ));
        Ok(LoopControl::Continue)
    }

    fn cmd_list(&self, args: &[&str]) -> Result<LoopControl, CommandError> {
        expect_no_args("list", args)?;
        if self.ledger.is_empty() {
            output::info("No transactions recorded.");
            return Ok(LoopControl::Continue);
        }
        for (idx, (description, amount)) in self.ledger.get_transactions().iter().enumerate() {
            println!(
                "{:>3}. {:<24} {:>12}",
                idx + 1,
                description,
                output::format_signed(*amount)
            );
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_help(&self) -> Result<LoopControl, CommandError> {
        for spec in COMMANDS {
            println!("  {:<32} {}", spec.usage, spec.summary);
        }
        Ok(LoopControl::Continue)
    }
}

fn parse_entry_args(
    command: &str,
    args: &[&str],
) -> Result<(f64, Option<String>), CommandError> {
    let (raw_amount, rest) = args.split_first().ok_or_else(|| {
        CommandError::InvalidArguments(format!("usage: {command} <amount> [description]"))
    })?;
    let amount = raw_amount.parse::<f64>().map_err(|_| {
        CommandError::InvalidArguments(format!("`{raw_amount}` is not a valid amount"))
    })?;
    let description = rest.join(" ");
    let description = if description.trim().is_empty() {
        None
    } else {
        Some(description)
    };
    Ok((amount, description))
}

fn expect_no_args(command: &str, args: &[&str]) -> Result<(), CommandError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!(
            "`{command}` takes no arguments"
        )))
    }
}
