mod coordinator;
mod form;
mod render;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rec_client::RecommendationClient;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;

use crate::coordinator::Coordinator;
use crate::form::{FormField, InternshipForm, EDUCATION_FIELD, LOCATION_FIELD, SKILLS_FIELD};

/// Internship Recommendation Engine client
#[derive(Parser)]
#[command(name = "internship-recs")]
#[command(about = "Ask the recommendation service for matching internships", long_about = None)]
struct Cli {
    /// Service base URL (overrides API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit one profile and print the results page
    Recommend {
        /// Highest education or field of study
        #[arg(long, default_value = "")]
        education: String,

        /// Comma-separated skills
        #[arg(long, default_value = "")]
        skills: String,

        /// Preferred location
        #[arg(long, default_value = "")]
        location: String,
    },

    /// Fill in the form repeatedly from stdin until EOF
    Interactive,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so they never interleave with the page on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match cli.base_url {
        Some(url) => RecommendationClient::new(url),
        None => RecommendationClient::from_env(),
    };
    info!("Using recommendation service at {}", client.base_url());

    let mut coordinator = Coordinator::new(client);

    match cli.command {
        Commands::Recommend {
            education,
            skills,
            location,
        } => handle_recommend(&mut coordinator, education, skills, location).await,
        Commands::Interactive => handle_interactive(&mut coordinator).await,
    }
}

/// Handle the 'recommend' command
async fn handle_recommend(
    coordinator: &mut Coordinator<RecommendationClient>,
    education: String,
    skills: String,
    location: String,
) -> Result<ExitCode> {
    let mut form = InternshipForm::new();
    form.set_education(education);
    form.set_skills(skills);
    form.set_location(location);

    let Some(submission) = form.submit() else {
        println!("{}", render::render_error(form.error()));
        return Ok(ExitCode::FAILURE);
    };

    coordinator.handle_submit(submission).await;
    println!("{}", render::render_page(coordinator.state()));

    if coordinator.state().error_message.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Handle the 'interactive' command
async fn handle_interactive(
    coordinator: &mut Coordinator<RecommendationClient>,
) -> Result<ExitCode> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut form = InternshipForm::new();

    println!("{}", render::render_page(coordinator.state()));

    loop {
        println!();
        println!("{}", render::render_submit_control(coordinator.state().is_loading));
        let Some(education) = prompt(&mut lines, EDUCATION_FIELD).await? else { break };
        let Some(skills) = prompt(&mut lines, SKILLS_FIELD).await? else { break };
        let Some(location) = prompt(&mut lines, LOCATION_FIELD).await? else { break };

        form.set_education(education);
        form.set_skills(skills);
        form.set_location(location);

        let Some(submission) = form.submit() else {
            println!("{}", render::render_error(form.error()));
            continue;
        };

        let seq = coordinator.begin();
        println!("{}", render::render_submit_control(coordinator.state().is_loading));
        let result = coordinator.fetch(&submission).await;
        coordinator.settle(seq, result);

        println!();
        println!("{}", render::render_page(coordinator.state()));
    }

    Ok(ExitCode::SUCCESS)
}

/// Prompt for one field. `None` on end of input.
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, field: FormField) -> Result<Option<String>> {
    print!("{} ({}): ", field.label.bold(), field.placeholder.dimmed());
    std::io::stdout().flush().context("Failed to flush stdout")?;
    lines.next_line().await.context("Failed to read from stdin")
}
