//! Command dispatch.

use super::report::{print_report, print_screened};
use super::{Cli, Commands};
use std::io;
use tracing::instrument;
use vellum_core::ProjectType;
use vellum_error::VellumResult;
use vellum_models::OpenAIClient;
use vellum_narrative::workflow::{
    self, AddBeatOptions, CurateOptions, CurationMode, DraftOptions, FinalizeOptions,
    PolishOptions, PublishOptions,
};
use vellum_narrative::{GenerationContext, PolishMode, parse_selection};
use vellum_project::{ProjectLocator, create_project, parse_project_type};
use vellum_rate_limit::{RetryingDriver, VellumConfig};

/// Load configuration, build the driver when the command needs one, and
/// run the command.
///
/// The credential is checked before any work, and only for commands that
/// call the service.
pub async fn run(cli: Cli) -> VellumResult<()> {
    let config = VellumConfig::load_with(cli.config.as_deref())?;
    let locator = ProjectLocator::resolve(cli.projects_root.clone(), config.projects.root.clone())?;
    validate_choices(&cli.command, &config)?;

    if cli.command.needs_service() {
        let client = OpenAIClient::from_config(&config.provider)?;
        let driver = RetryingDriver::new(client, config.retry);
        let ctx = GenerationContext::new(&driver, &config);
        dispatch(&cli.command, &ctx, &locator).await
    } else {
        dispatch(&cli.command, &GenerationContext::offline(&config), &locator).await
    }
}

/// Reject unknown channel, type and mode values before anything else.
fn validate_choices(command: &Commands, config: &VellumConfig) -> VellumResult<()> {
    match command {
        Commands::NewProject { project_type, .. } => {
            parse_project_type(project_type)?;
        }
        Commands::Polish { mode, channel, .. } => {
            PolishMode::parse(mode)?;
            config.channel_or_default(channel.as_deref())?;
        }
        Commands::Outline { channel, .. }
        | Commands::Treatments { channel, .. }
        | Commands::Metadata { channel, .. }
        | Commands::Expand { channel, .. }
        | Commands::Thumbnail { channel, .. }
        | Commands::AddOutline { channel, .. }
        | Commands::AddBeat { channel, .. }
        | Commands::Draft { channel, .. }
        | Commands::Finalize { channel, .. }
        | Commands::Publish { channel, .. } => {
            config.channel_or_default(channel.as_deref())?;
        }
        Commands::Idea { .. } | Commands::Curate { .. } => {}
    }
    Ok(())
}

fn joined(words: &[String]) -> String {
    words.join(" ")
}

#[instrument(skip_all)]
async fn dispatch(
    command: &Commands,
    ctx: &GenerationContext<'_>,
    locator: &ProjectLocator,
) -> VellumResult<()> {
    match command {
        Commands::Outline {
            seed,
            beats,
            channel,
        } => {
            let screened =
                workflow::generate_outline(ctx, channel.as_deref(), &joined(seed), *beats).await?;
            print_screened(&screened);
        }

        Commands::Treatments {
            seed,
            count,
            channel,
            project,
        } => match project {
            Some(name) => {
                let project = locator.locate(name)?;
                let report =
                    workflow::save_treatments(ctx, &project, channel.as_deref(), &joined(seed), *count)
                        .await?;
                if let Some(text) = report.text() {
                    println!("{}", text);
                }
                print_report(&report);
            }
            None => {
                let screened =
                    workflow::generate_treatments(ctx, channel.as_deref(), &joined(seed), *count)
                        .await?;
                print_screened(&screened);
            }
        },

        Commands::Idea { project, text } => {
            let project = locator.locate(project)?;
            print_report(&workflow::save_idea(&project, &joined(text))?);
        }

        Commands::Metadata { seed, channel } => {
            let screened =
                workflow::generate_metadata(ctx, channel.as_deref(), &joined(seed)).await?;
            print_screened(&screened);
        }

        Commands::Expand {
            beat,
            channel,
            no_broll,
        } => {
            let screened =
                workflow::generate_expansion(ctx, channel.as_deref(), &joined(beat), !no_broll)
                    .await?;
            print_screened(&screened);
        }

        Commands::Thumbnail { seed, channel } => {
            let screened =
                workflow::generate_thumbnails(ctx, channel.as_deref(), &joined(seed)).await?;
            print_screened(&screened);
        }

        Commands::NewProject { name, project_type } => {
            let project_type: ProjectType = parse_project_type(project_type)?;
            let dir = create_project(locator.root(), &joined(name), project_type)?;
            println!("Project ready: {}", dir.display());
        }

        Commands::AddOutline {
            project,
            seed,
            beats,
            channel,
        } => {
            let project = locator.locate(project)?;
            let report =
                workflow::add_outline(ctx, &project, channel.as_deref(), &joined(seed), *beats)
                    .await?;
            if let Some(text) = report.text() {
                println!("{}", text);
            }
            print_report(&report);
        }

        Commands::AddBeat {
            project,
            number,
            channel,
            no_broll,
            renumber,
        } => {
            let project = locator.locate(project)?;
            let options = AddBeatOptions {
                channel: channel.clone(),
                broll: !no_broll,
                renumber: *renumber,
            };
            print_report(&workflow::add_beat(ctx, &project, *number, &options).await?);
        }

        Commands::Curate {
            project,
            output,
            select,
            all,
            renumber,
        } => {
            let project = locator.locate(project)?;
            let mode = match (select, all) {
                (Some(selection), _) => CurationMode::Select(parse_selection(selection)?),
                (None, true) => CurationMode::All,
                (None, false) => CurationMode::Interactive,
            };
            let options = CurateOptions {
                output: output.clone(),
                renumber: *renumber,
            };
            let report = workflow::curate(&project, &mode, &options, io::stdin().lock(), io::stdout())?;
            print_report(&report);
        }

        Commands::Draft {
            project,
            beats_file,
            channel,
            no_broll,
            dry_run,
            renumber,
        } => {
            let project = locator.locate(project)?;
            let options = DraftOptions {
                beats_file: beats_file.clone(),
                channel: channel.clone(),
                broll: !no_broll,
                dry_run: *dry_run,
                renumber: *renumber,
            };
            print_report(&workflow::draft(ctx, &project, &options).await?);
        }

        Commands::Polish {
            project,
            mode,
            channel,
            dry_run,
        } => {
            let project = locator.locate(project)?;
            let options = PolishOptions {
                mode: PolishMode::parse(mode)?,
                channel: channel.clone(),
                dry_run: *dry_run,
            };
            print_report(&workflow::polish(ctx, &project, &options).await?);
        }

        Commands::Finalize {
            project,
            source,
            notes,
            smooth,
            channel,
        } => {
            let project = locator.locate(project)?;
            let options = FinalizeOptions {
                source: source.clone(),
                notes: notes.clone(),
                smooth: *smooth,
                channel: channel.clone(),
            };
            print_report(&workflow::finalize(ctx, &project, &options).await?);
        }

        Commands::Publish {
            project,
            channel,
            no_thumbnails,
            dry_run,
        } => {
            let project = locator.locate(project)?;
            let options = PublishOptions {
                channel: channel.clone(),
                thumbnails: !no_thumbnails,
                dry_run: *dry_run,
            };
            print_report(&workflow::publish(ctx, &project, &options).await?);
        }
    }

    Ok(())
}

