use prevu::cli::{Args, OutputFormat};
use prevu::{load_manifest, FileDescriptor, PreviewDecision, PreviewSession, Result, UserConfig};

use log::{debug, warn};
use serde::Serialize;

fn main() {
    // Parse command line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // User config supplies the output format when no flag is given
    let user_config = UserConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load user config: {}", e);
        UserConfig::default()
    });

    let format = args.format.unwrap_or(if user_config.json_output {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    });

    let descriptors: Vec<FileDescriptor> = match (&args.manifest, args.inline_descriptor()) {
        (Some(path), _) => {
            debug!("Loading manifest from {}", path.display());
            load_manifest(path)?
        }
        (None, Some(descriptor)) => vec![descriptor],
        // validate() guarantees one of the two is present
        (None, None) => Vec::new(),
    };

    debug!("Classifying {} descriptor(s)", descriptors.len());

    for descriptor in descriptors {
        let mut session = PreviewSession::new(descriptor);
        if args.assume_failed {
            session.image_load_failed();
        }
        print_decision(&session, format);
    }

    Ok(())
}

#[derive(Serialize)]
struct DecisionRecord<'a> {
    name: &'a str,
    decision: PreviewDecision,
}

fn print_decision(session: &PreviewSession, format: OutputFormat) {
    let name = session.descriptor().name.as_str();
    let decision = session.decision();

    match format {
        OutputFormat::Plain => match &decision {
            PreviewDecision::Image => {
                let state = if session.is_loading() { "loading" } else { "loaded" };
                println!("{}: image ({})", name, state);
            }
            PreviewDecision::DocumentIcon(key) => {
                println!("{}: document-icon ({})", name, describe_key(key));
            }
            PreviewDecision::GenericIcon(key) => {
                println!("{}: generic-icon ({})", name, describe_key(key));
            }
        },
        OutputFormat::Json => {
            let record = DecisionRecord { name, decision };
            // DecisionRecord serialization cannot fail
            println!("{}", serde_json::to_string(&record).unwrap());
        }
    }
}

fn describe_key(key: &prevu::IconKey) -> String {
    match (&key.extension, &key.mime_type) {
        (ext, Some(mime)) if !ext.is_empty() => format!("ext={}, mime={}", ext, mime),
        (ext, None) if !ext.is_empty() => format!("ext={}", ext),
        (_, Some(mime)) => format!("mime={}", mime),
        (_, None) => "unknown".to_string(),
    }
}
