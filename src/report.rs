use std::io::{self, Write};

use nametag::{CHARACTER_LIMIT, GenerateResultVerbose, NameInput, Sample, StepOutcome, generate};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print the labels for one name, its tokens, the rules that applied and,
/// when `trace` is set, what every rule did.
pub fn print_run(out: &mut impl Write, input: &NameInput, res: &GenerateResultVerbose, trace: bool, color: bool) -> io::Result<()> {
    let palette = ansi::Palette::new(color);
    writeln!(out, "\n{}", palette.bold(palette.paint(format!("⚙  Name: \"{}\" ({})", input.name, input.culture), ansi::CYAN)))?;

    writeln!(out, "\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY))?;
    for (idx, token) in input.name.split_whitespace().enumerate() {
        let role = if input.surname_indices.contains(&idx) { palette.paint("surname", ansi::YELLOW) } else { palette.dim("given") };
        writeln!(out, "  {} {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), token.to_uppercase(), role)?;
    }

    writeln!(out, "\n{}", palette.paint("━━━ Labels ━━━", ansi::GRAY))?;
    for (idx, label) in res.labels.iter().enumerate() {
        writeln!(
            out,
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(label, ansi::GREEN)),
            palette.dim("│"),
            fmt_budget(label, &palette),
        )?;
    }

    writeln!(out, "\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY))?;
    for rule in &res.rules {
        writeln!(out, "  • {}", rule)?;
    }

    if trace {
        writeln!(out, "\n{}", palette.paint("━━━ Trace ━━━", ansi::GRAY))?;
        for (idx, candidate) in res.candidates.iter().enumerate() {
            writeln!(
                out,
                "  {} {} {}",
                palette.paint(format!("Candidate {}:", idx), ansi::BLUE),
                candidate.tokens.join(" "),
                palette.dim(format!("surnames {:?}", candidate.surname_indices)),
            )?;
            for step in &candidate.steps {
                let outcome = match &step.outcome {
                    StepOutcome::Skipped => palette.dim("skipped"),
                    StepOutcome::Continued { rendered } => format!("→ {}", rendered),
                    StepOutcome::Finished { label } => palette.paint(format!("✓ {}", label), ansi::GREEN),
                };
                writeln!(out, "    {} {}", palette.dim(truncate(step.rule, 60)), outcome)?;
            }
            if candidate.fallback {
                writeln!(out, "    {} {}", palette.dim("(rendered)"), palette.paint(format!("✓ {}", candidate.label), ansi::GREEN))?;
            }
        }

        writeln!(out, "\n  {} {}", palette.dim("Elapsed:"), palette.paint(format!("{:?}", res.elapsed), ansi::GREEN))?;
    }

    writeln!(out)
}

/// Print the reference samples next to the labels generated for them.
pub fn print_samples(out: &mut impl Write, samples: &[Sample], color: bool) -> io::Result<()> {
    let palette = ansi::Palette::new(color);
    writeln!(out, "\n{}", palette.paint("━━━ Samples ━━━", ansi::GRAY))?;

    for sample in samples {
        let labels = generate(&sample.input);
        let ok = labels.first().map(String::as_str) == Some(sample.expected);
        let marker = if ok { palette.paint("✓", ansi::GREEN) } else { palette.paint("✗", ansi::RED) };
        let prefix = if sample.input.is_doctor {
            "DR".to_string()
        } else if sample.input.is_mdes {
            sample.input.rank.clone()
        } else {
            "-".to_string()
        };

        writeln!(
            out,
            "  {} {:<6} {:<36} {:<16} {}",
            marker,
            prefix,
            sample.input.name,
            palette.dim(sample.input.culture.label()),
            palette.bold(labels.join(" | ")),
        )?;
    }

    writeln!(out)
}

fn fmt_budget(label: &str, palette: &ansi::Palette) -> String {
    let len = label.chars().count();
    let text = format!("{}/{} characters", len, CHARACTER_LIMIT);
    if len <= CHARACTER_LIMIT { palette.paint(text, ansi::CYAN) } else { palette.paint(text, ansi::RED) }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
