//! Progress reporting while a report is generated

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use relief_application::ports::progress::ProgressNotifier;
use relief_domain::Stage;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with an indicatif bar per stage
pub struct ProgressReporter {
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn stage_display_name(stage: &Stage) -> &'static str {
        match stage {
            Stage::Reframing => "Stage 1: Reframing",
            Stage::Enrichment => "Stage 2: Finding GIFs",
        }
    }

    fn stage_short_name(stage: &Stage) -> &'static str {
        match stage {
            Stage::Reframing => "Reframing",
            Stage::Enrichment => "GIF search",
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.stage_bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: &Stage, total_tasks: usize) {
        let pb = ProgressBar::new(total_tasks as u64);
        pb.set_style(Self::stage_style());
        pb.set_prefix(Self::stage_display_name(stage));
        pb.set_message("Working...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.stage_bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_task_complete(&self, stage: &Stage, index: usize, success: bool) {
        self.with_bar(|pb| {
            let label = match stage {
                Stage::Reframing => "paragraphs".to_string(),
                Stage::Enrichment => format!("paragraph {}", index + 1),
            };
            let status = if success {
                format!("{} {}", "v".green(), label)
            } else {
                format!("{} {}", "x".red(), label)
            };
            pb.set_message(status);
            pb.inc(1);
        });
    }

    fn on_stage_complete(&self, stage: &Stage) {
        if let Ok(mut guard) = self.stage_bar.lock()
            && let Some(pb) = guard.take()
        {
            let name = Self::stage_short_name(stage);
            pb.finish_with_message(format!("{} complete!", name.green()));
        }
    }

    fn on_search_query(&self, index: usize, query: &str) {
        self.with_bar(|pb| {
            pb.set_message(format!("paragraph {}: \"{}\"", index + 1, query));
        });
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: &Stage, total_tasks: usize) {
        let name = ProgressReporter::stage_display_name(stage);
        eprintln!("{} {} ({} tasks)", "->".cyan(), name.bold(), total_tasks);
    }

    fn on_task_complete(&self, stage: &Stage, index: usize, success: bool) {
        let label = match stage {
            Stage::Reframing => "paragraphs".to_string(),
            Stage::Enrichment => format!("paragraph {}", index + 1),
        };
        if success {
            eprintln!("  {} {}", "v".green(), label);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), label);
        }
    }

    fn on_stage_complete(&self, _stage: &Stage) {
        eprintln!();
    }

    fn on_search_query(&self, index: usize, query: &str) {
        eprintln!("  {} paragraph {}: \"{}\"", "?".dimmed(), index + 1, query);
    }
}
