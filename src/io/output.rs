use crate::core::{Category, Rating};
use crate::pipeline::{AnalysisReport, BatchReport, BatchStatus};
use colored::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;

    fn write_batch(&mut self, batch: &BatchReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_batch(&mut self, batch: &BatchReport) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, batch)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl TerminalWriter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Script Rating Report".bold().blue())?;
        writeln!(self.writer, "{}", "====================".blue())?;
        writeln!(self.writer, "  File: {}", report.file)?;
        writeln!(self.writer, "  Scenes: {}", report.total_scenes)?;
        writeln!(
            self.writer,
            "  Predicted rating: {}",
            colored_rating(report.predicted_rating)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_reasons(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Reasons:".bold())?;
        for reason in &report.reasons {
            writeln!(self.writer, "  - {reason}")?;
        }
        if !report.evidence_excerpts.is_empty() {
            writeln!(self.writer, "{}", "Evidence:".bold())?;
            for excerpt in &report.evidence_excerpts {
                writeln!(self.writer, "  \"{}\"", excerpt.dimmed())?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Aggregated scores:".bold())?;
        for category in Category::ALL {
            let score = report.aggregated_scores.get(category).value();
            writeln!(
                self.writer,
                "  {:<11} {} {}",
                category.as_str(),
                colored_score(score),
                score_bar(score)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_trigger_scenes(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.top_trigger_scenes.is_empty() {
            writeln!(self.writer, "{}", "No trigger scenes.".green())?;
            return Ok(());
        }

        writeln!(self.writer, "{}", "Trigger scenes:".bold())?;
        for (rank, scene) in report.top_trigger_scenes.iter().enumerate() {
            writeln!(
                self.writer,
                "  #{} scene {} [{}] weight {:.3}",
                rank + 1,
                scene.scene_id,
                scene.heading.cyan(),
                scene.weight
            )?;
            writeln!(self.writer, "     {}", scene.sample_text.dimmed())?;
            for advice in &scene.recommendations {
                writeln!(self.writer, "     -> {}", advice.yellow())?;
            }
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_reasons(report)?;
        self.write_scores(report)?;
        self.write_trigger_scenes(report)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_batch(&mut self, batch: &BatchReport) -> anyhow::Result<()> {
        for entry in &batch.entries {
            match (&entry.status, &entry.report) {
                (BatchStatus::Success, Some(report)) => {
                    self.write_report(report)?;
                    writeln!(self.writer)?;
                }
                _ => writeln!(
                    self.writer,
                    "{} {}: {}",
                    "FAILED".red().bold(),
                    entry.file,
                    entry.error.as_deref().unwrap_or("unknown error")
                )?,
            }
        }
        writeln!(
            self.writer,
            "{} {} succeeded, {} failed",
            "Summary:".bold(),
            batch.succeeded.to_string().green(),
            batch.failed.to_string().red()
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

/// JSON into `path` when given, otherwise `format` on stdout.
pub fn create_writer(
    format: OutputFormat,
    path: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    if let Some(path) = path {
        let file = File::create(path)?;
        return Ok(Box::new(JsonWriter::new(BufWriter::new(file))));
    }
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::stdout()),
    })
}

fn colored_rating(rating: Rating) -> ColoredString {
    match rating {
        Rating::ZeroPlus | Rating::SixPlus => rating.as_str().green().bold(),
        Rating::TwelvePlus => rating.as_str().yellow().bold(),
        Rating::SixteenPlus | Rating::EighteenPlus => rating.as_str().red().bold(),
    }
}

fn colored_score(score: f64) -> ColoredString {
    let text = format!("{score:.3}");
    if score >= 0.7 {
        text.red()
    } else if score >= 0.3 {
        text.yellow()
    } else {
        text.normal()
    }
}

fn score_bar(score: f64) -> String {
    let filled = (score.clamp(0.0, 1.0) * 20.0).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled))
}
