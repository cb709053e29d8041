mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use pipeline_lint::{config, output, rules, run};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Lint {
            path,
            trusted,
            format,
            output: output_path,
            config: config_path,
        } => {
            if !path.exists() {
                eprintln!("Error: path does not exist: {}", path.display());
                std::process::exit(2);
            }

            let mut config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            if trusted {
                config.trust.enabled = true;
            }

            let report = run::run_lint(&path, &config);

            if report.files_scanned == 0 {
                eprintln!(
                    "Error: no pipeline files found in '{}' (extensions: {})",
                    path.display(),
                    config.discovery.extensions.join(", ")
                );
                std::process::exit(2);
            }
            let formatted = output::format_report(&report, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            std::process::exit(if report.passed { 0 } else { 1 });
        }

        Commands::ListRules => {
            let rules = rules::all_rules();
            println!("{}", "Rules".bold().underline());
            println!();

            let mut current_category = "";
            for rule in &rules {
                if rule.category != current_category {
                    if !current_category.is_empty() {
                        println!();
                    }
                    println!("  {}", rule.category.bold());
                    current_category = rule.category;
                }

                let gate = if rule.trusted_only {
                    "UNTRUSTED".yellow().bold().to_string()
                } else {
                    "   ALWAYS".blue().to_string()
                };

                println!(
                    "    [{gate}] {id:<28} {message}",
                    id = rule.id,
                    message = rule.message,
                );
            }

            println!();
            println!("  Total: {} rules", rules.len());
        }

        Commands::Explain { rule_id } => match rules::find_rule(&rule_id) {
            Some(rule) => {
                println!("{}", rule.id.bold());
                println!();
                println!("  Category:     {}", rule.category);
                println!(
                    "  Applies to:   {}",
                    if rule.trusted_only {
                        "untrusted repositories"
                    } else {
                        "all repositories"
                    }
                );
                println!("  Diagnostic:   {}", rule.message);
                println!("  Remediation:  {}", rule.remediation);
            }
            None => {
                eprintln!("Unknown rule: {rule_id}");
                eprintln!("Use 'pipeline-lint list-rules' to see all available rules.");
                std::process::exit(2);
            }
        },
    }
}

/// Logs go to stderr so they never mix with a report written to stdout.
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
