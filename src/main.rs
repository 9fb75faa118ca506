//! Command-line front end for route composition and resource rendering.
//!
//! ```text
//! route-composer --config app.toml url action users --action edit --param 7 --module admin
//! route-composer --config app.toml url route profile --controller users --param 42
//! route-composer --config app.toml routes
//! route-composer --config app.toml render mail/welcome --set name=Ana
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use route_composer::config::load_config;
use route_composer::observability::init_logging;
use route_composer::{App, RouteArgs};

#[derive(Parser)]
#[command(name = "route-composer")]
#[command(about = "Compose application URLs and render template resources", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "app.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a URL
    #[command(subcommand)]
    Url(UrlCommand),
    /// Print the route table as JSON
    Routes,
    /// Print registered module names
    Modules,
    /// Render a resource with key substitutions
    Render {
        /// Resource name, relative to the resource root.
        resource: String,

        /// Substitution as key=value; applied in order.
        #[arg(long = "set", value_parser = parse_key_value)]
        set: Vec<(String, String)>,
    },
}

#[derive(Subcommand)]
enum UrlCommand {
    /// URL for a controller action
    Action {
        controller: String,
        #[command(flatten)]
        segments: Segments,
        #[arg(long)]
        module: Option<String>,
    },
    /// URL for a controller action inside a module
    ModuleAction {
        module: String,
        controller: String,
        #[command(flatten)]
        segments: Segments,
    },
    /// URL from a named route
    Route {
        name: String,
        #[arg(long)]
        controller: Option<String>,
        #[command(flatten)]
        segments: Segments,
        #[arg(long)]
        module: Option<String>,
        #[arg(long)]
        language: Option<String>,
    },
}

#[derive(Args)]
struct Segments {
    #[arg(long)]
    action: Option<String>,

    /// Trailing parameter segment; repeat for more.
    #[arg(long = "param")]
    params: Vec<String>,
}

impl Segments {
    fn params(&self) -> Vec<&str> {
        self.params.iter().map(String::as_str).collect()
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    init_logging(&config.observability.log_level)?;
    tracing::debug!(config = %cli.config.display(), "Configuration loaded");

    let app = App::from_config(config);

    match cli.command {
        Commands::Url(command) => println!("{}", compose(&app, &command)?),
        Commands::Routes => {
            let routes: BTreeMap<_, _> = app.routes().routes().iter().collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Modules => {
            for module in app.routes().modules() {
                println!("{module}");
            }
        }
        Commands::Render { resource, set } => {
            let mut resource = app.resource(resource)?;
            for (key, value) in &set {
                resource.replace_key(key, value)?;
            }
            print!("{}", resource.content()?);
        }
    }

    Ok(())
}

fn compose(app: &App, command: &UrlCommand) -> Result<String, route_composer::RouteError> {
    let maker = app.url_maker();
    let url = match command {
        UrlCommand::Action {
            controller,
            segments,
            module,
        } => maker.to_action(
            controller,
            segments.action.as_deref(),
            &segments.params(),
            module.as_deref(),
        ),
        UrlCommand::ModuleAction {
            module,
            controller,
            segments,
        } => maker.to_module_action(
            module,
            controller,
            segments.action.as_deref(),
            &segments.params(),
        ),
        UrlCommand::Route {
            name,
            controller,
            segments,
            module,
            language,
        } => {
            let params = segments.params();
            maker.to_route(
                name,
                RouteArgs {
                    controller: controller.as_deref(),
                    action: segments.action.as_deref(),
                    params: &params,
                    module: module.as_deref(),
                    language: language.as_deref(),
                },
            )?
        }
    };
    Ok(url)
}
