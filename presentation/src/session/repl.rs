//! REPL (Read-Eval-Print Loop) for the interactive session
//!
//! Plain lines are appended to the entry text; slash commands set keys,
//! pick category and tone, and trigger generation. Keys live only in the
//! in-memory [`ReliefSession`] and no history file is written.

use super::command::{CommandError, ReplCommand};
use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::export::ReportExporter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use relief_application::GenerateReportUseCase;
use relief_application::ports::progress::NoProgress;
use relief_domain::{
    CredentialKind, ReliefSession, ResponseTone, StressCategory, StressInput,
};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use tracing::debug;

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Exit,
}

/// Interactive stress-relief session
pub struct ReliefRepl {
    use_case: GenerateReportUseCase,
    session: ReliefSession,
    entry: Vec<String>,
    category: StressCategory,
    tone: ResponseTone,
    output: OutputConfig,
}

impl ReliefRepl {
    pub fn new(use_case: GenerateReportUseCase, session: ReliefSession) -> Self {
        Self {
            use_case,
            session,
            entry: Vec::new(),
            category: StressCategory::default(),
            tone: ResponseTone::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_category(mut self, category: StressCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_tone(mut self, tone: ResponseTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn session(&self) -> &ReliefSession {
        &self.session
    }

    /// Entry text typed so far, one line per input line
    pub fn entry_text(&self) -> String {
        self.entry.join("\n")
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("relief".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt) {
                Ok(Signal::Success(buffer)) => {
                    if self.handle_line(&buffer).await == LoopAction::Exit {
                        break;
                    }
                }
                Ok(Signal::CtrlD) => {
                    println!("Take care!");
                    break;
                }
                Ok(_) => {
                    println!("^C");
                }
                Err(err) => {
                    return Err(std::io::Error::other(err.to_string()));
                }
            }
        }

        Ok(())
    }

    /// Handle one input line.
    pub async fn handle_line(&mut self, line: &str) -> LoopAction {
        let trimmed = line.trim();

        if !trimmed.starts_with('/') {
            if !trimmed.is_empty() {
                self.entry.push(line.trim_end().to_string());
            }
            return LoopAction::Continue;
        }

        match ReplCommand::parse(trimmed) {
            Ok(command) => self.execute(command).await,
            Err(CommandError::Unknown(cmd)) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                LoopAction::Continue
            }
            Err(e) => {
                println!("{} {}", "error:".red().bold(), e);
                LoopAction::Continue
            }
        }
    }

    async fn execute(&mut self, command: ReplCommand) -> LoopAction {
        match command {
            ReplCommand::Key { kind, key } => {
                self.session.credentials_mut().set(kind, key);
                println!("{} {} key updated", "v".green(), kind.service_name());
            }
            ReplCommand::Category(category) => {
                self.category = category;
                println!("Category: {}", category.label());
            }
            ReplCommand::Tone(tone) => {
                self.tone = tone;
                println!("Tone: {}", tone.label());
            }
            ReplCommand::ListCategories => {
                for (i, c) in StressCategory::all().iter().enumerate() {
                    let marker = if *c == self.category { "*" } else { " " };
                    println!("{} {}. {} ({})", marker, i + 1, c.label(), c.as_str());
                }
            }
            ReplCommand::ListTones => {
                for (i, t) in ResponseTone::all().iter().enumerate() {
                    let marker = if *t == self.tone { "*" } else { " " };
                    println!("{} {}. {} ({})", marker, i + 1, t.label(), t.as_str());
                }
            }
            ReplCommand::Generate => self.generate().await,
            ReplCommand::Show => match self.session.last_report() {
                Some(report) => println!("{}", ConsoleFormatter::format(report, self.output.format)),
                None => println!("No report yet. Type your entry, then /generate."),
            },
            ReplCommand::Save(path) => {
                let path = path.unwrap_or_else(|| self.output.report_file.clone());
                match ReportExporter::save_last(&self.session, &path) {
                    Ok(written) => println!("{} Saved to {}", "v".green(), written.display()),
                    Err(e) => println!("{} {}", "error:".red().bold(), e),
                }
            }
            ReplCommand::Clear => {
                self.entry.clear();
                println!("Entry cleared.");
            }
            ReplCommand::Status => self.print_status(),
            ReplCommand::Help => self.print_help(),
            ReplCommand::Quit => {
                println!("Take care!");
                return LoopAction::Exit;
            }
        }
        LoopAction::Continue
    }

    async fn generate(&mut self) {
        let text = self.entry_text();
        let input = StressInput::new(text, self.category, self.tone);
        if input.is_blank() {
            println!(
                "{} Your entry is empty; the report will be generic.",
                "note:".yellow().bold()
            );
        }
        debug!(
            "Generating report: category={}, tone={}",
            self.category.as_str(),
            self.tone.as_str()
        );

        let result = if self.output.show_progress {
            let progress = ProgressReporter::new();
            self.use_case
                .execute_with_progress(&mut self.session, input, &progress)
                .await
        } else {
            self.use_case
                .execute_with_progress(&mut self.session, input, &NoProgress)
                .await
        };

        match result {
            Ok(report) => {
                println!();
                println!("{}", ConsoleFormatter::format(&report, self.output.format));
                println!();
                println!("Use /save [PATH] to download it as markdown.");
            }
            Err(e) => {
                println!("{} {}", "error:".red().bold(), e);
                if let Some(kind) = e.missing_credential() {
                    println!("{}", ConsoleFormatter::format_credential_hint(kind));
                    println!("Set it with /key {} <KEY>", Self::key_command_name(kind));
                }
            }
        }
    }

    fn key_command_name(kind: CredentialKind) -> &'static str {
        match kind {
            CredentialKind::TextGeneration => "openai",
            CredentialKind::ImageSearch => "giphy",
        }
    }

    fn print_status(&self) {
        let credentials = self.session.credentials();
        let mark = |kind| {
            if credentials.is_set(kind) {
                "set".green()
            } else {
                "missing".red()
            }
        };
        println!();
        println!("OpenAI key:  {}", mark(CredentialKind::TextGeneration));
        println!("Giphy key:   {}", mark(CredentialKind::ImageSearch));
        println!("Category:    {}", self.category.label());
        println!("Tone:        {}", self.tone.label());
        println!("Model:       {}", self.use_case.params().model);
        println!("Entry:       {} line(s)", self.entry.len());
        println!(
            "Report:      {}",
            match self.session.last_report() {
                Some(r) => format!("{} block(s)", r.len()),
                None => "none".to_string(),
            }
        );
        println!();
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Instant Stress Relief - Session      │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type what is stressing you, then /generate.");
        self.print_help();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /key openai|giphy <KEY>   - Set an API key for this session");
        println!("  /category <name|number>   - Pick a stress category (/categories)");
        println!("  /tone <name|number>       - Pick a response tone (/tones)");
        println!("  /generate, /go            - Build the report from your entry");
        println!("  /show                     - Show the last report again");
        println!("  /save [PATH]              - Save the last report as markdown");
        println!("  /clear                    - Forget the entry typed so far");
        println!("  /status                   - Show keys, choices and entry size");
        println!("  /help, /h, /?             - Show this help");
        println!("  /quit, /exit, /q          - Leave the session");
        println!();
    }
}
