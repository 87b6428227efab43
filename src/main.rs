use clap::Parser;
use seednodes::config::cli::{Command, ExternalIpArgs, TeachersArgs};
use seednodes::utils::{logger, validation::Validate};
use seednodes::{
    BootstrapRequest, CliConfig, ConsoleEmitter, ExternalAddressResolver, HttpTeacherFactory,
    RestClient, SeedError, SeedUriAggregator, TeacherBootstrapper, TerminalPrompter, TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => exit_with(e),
            }
        }
        None => TomlConfig::default(),
    };

    let outcome = match &cli.command {
        Command::Teachers(args) => run_teachers(args, &mut config, cli.quiet).await,
        Command::ExternalIp(args) => run_external_ip(args, &mut config, cli.quiet).await,
    };

    if let Err(e) = outcome {
        exit_with(e);
    }
    Ok(())
}

async fn run_teachers(
    args: &TeachersArgs,
    config: &mut TomlConfig,
    quiet: bool,
) -> seednodes::Result<()> {
    args.apply_to(config);
    config.validate()?;

    let aggregator = SeedUriAggregator::with_builtin_teachers(config.static_node_store());
    let request = BootstrapRequest {
        domains: config.domains(),
        teacher_uris: config.teacher_uris(),
        policy: config.policy(),
    };

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No connections will be made");
        let uris = aggregator.aggregate(&request.domains, &request.teacher_uris)?;
        for uri in uris {
            println!("{}", uri);
        }
        return Ok(());
    }

    let emitter = ConsoleEmitter::new(quiet);
    let network = RestClient::new(config.request_timeout())?;
    let bootstrapper = TeacherBootstrapper::new(aggregator, HttpTeacherFactory);
    let teachers = bootstrapper
        .bootstrap(&emitter, &request, &network, None)
        .await?;

    for teacher in &teachers {
        let uri = teacher.uri.as_ref().map(|u| u.as_str()).unwrap_or("?");
        match &teacher.nickname {
            Some(nickname) => println!("{} ({}) stake={}", uri, nickname, teacher.stake),
            None => println!("{} stake={}", uri, teacher.stake),
        }
    }
    Ok(())
}

async fn run_external_ip(
    args: &ExternalIpArgs,
    config: &mut TomlConfig,
    quiet: bool,
) -> seednodes::Result<()> {
    args.apply_to(config);
    config.validate()?;

    let client = RestClient::new(config.request_timeout())?;
    let resolver = ExternalAddressResolver::new(client.client().clone(), config.echo_url());
    let emitter = ConsoleEmitter::new(quiet);
    let prompter = TerminalPrompter::stdio();

    let address = resolver.resolve(&emitter, &prompter, args.force).await?;
    println!("{}", address);
    Ok(())
}

fn exit_with(e: SeedError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
