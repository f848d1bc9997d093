use ruledoc::{AggregateDetails, Dispatch, ExampleValue, RuleOutcome};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
        if self.enabled { format!("{}{}{}", color, s.as_ref(), ansi::RESET) } else { s.as_ref().to_string() }
    }

    fn bold(&self, s: impl AsRef<str>) -> String {
        if self.enabled { format!("{}{}{}", ansi::BOLD, s.as_ref(), ansi::RESET) } else { s.as_ref().to_string() }
    }

    fn dim(&self, s: impl AsRef<str>) -> String {
        if self.enabled { format!("{}{}{}", ansi::DIM, s.as_ref(), ansi::RESET) } else { s.as_ref().to_string() }
    }
}

pub fn print_field(details: &AggregateDetails, palette: &Palette) {
    let meta = &details.metadata;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  {}", details.field), ansi::CYAN)));
    println!("  {}", palette.dim(format!("seed \"{}\" → {}", details.seed, details.numeric_seed)));

    println!("\n{}", palette.paint("━━━ Metadata ━━━", ansi::GRAY));
    let ty = meta.field_type.map(|t| t.as_str()).unwrap_or("-");
    println!(
        "  {} {}  {} {}",
        palette.dim("type:"),
        palette.paint(ty, ansi::BLUE),
        palette.dim("│ required:"),
        if meta.required { palette.paint("yes", ansi::GREEN) } else { palette.dim("no") }
    );
    println!("  {} {}", palette.dim("value:"), palette.bold(palette.paint(fmt_value(&meta.value), ansi::GREEN)));
    if meta.description.is_empty() {
        println!("  {}", palette.dim("no description"));
    }
    for line in &meta.description {
        println!("  {} {}", palette.dim("•"), line);
    }

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    if details.outcomes.is_empty() {
        println!("  {}", palette.dim("No rules"));
    }
    for (idx, outcome) in details.outcomes.iter().enumerate() {
        print_outcome(idx, outcome, palette);
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", details.elapsed), ansi::GREEN));
}

fn print_outcome(idx: usize, outcome: &RuleOutcome, palette: &Palette) {
    let index = palette.paint(format!("[{}]", idx), ansi::GRAY);
    match &outcome.dispatch {
        Dispatch::Unknown => {
            println!("  {} {} {}", index, palette.dim(&outcome.raw), palette.paint("unknown, ignored", ansi::YELLOW));
        }
        Dispatch::Applied { effects, dropped } => {
            let labels = effects.labels();
            let summary = if labels.is_empty() { palette.dim("no effect") } else { labels.join(" ") };
            println!(
                "  {} {} {} {}",
                index,
                palette.paint(&outcome.rule, ansi::BLUE),
                palette.dim("│"),
                palette.paint(summary, ansi::CYAN)
            );
            if !outcome.parameters.is_empty() {
                println!("      {} {}", palette.dim("params:"), palette.dim(outcome.parameters.join(", ")));
            }
            for err in dropped {
                println!("      {} {}", palette.paint("✗", ansi::RED), palette.paint(err.to_string(), ansi::RED));
            }
        }
    }
}

fn fmt_value(value: &ExampleValue) -> String {
    match value {
        ExampleValue::Text(s) => format!("\"{s}\""),
        other => other.to_string(),
    }
}
