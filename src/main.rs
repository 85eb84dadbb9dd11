use clap::{Parser, Subcommand};
use tone_engine::{export_scale, synthesize, variations, ColorFormats, ExportFormat, ScaleName};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tonekit::api;
use tonekit::models::AppConfig;
use tonekit::server;

#[derive(Parser)]
#[command(name = "tonekit")]
#[command(about = "Colour conversion and OKLCH tint/shade scales")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print a colour in every supported notation
    Convert {
        /// Colour in hex, rgb(), hsl() or named form
        color: String,
    },
    /// Generate a 50-950 tint/shade scale
    Scale {
        /// Base colour in hex, rgb(), hsl() or named form
        color: String,

        /// Scale name used in generated identifiers
        #[arg(short, long, default_value = "primary")]
        name: String,

        /// Export as css, tailwind, swift or android instead of a table
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },
    /// Print HSL lightness, saturation and harmony variations
    Variations {
        /// Colour in hex, rgb(), hsl() or named form
        color: String,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "tonekit API",
        description = "Colour conversion and OKLCH tint/shade scale generation",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_convert,
        api::handle_variations,
        api::handle_scale,
        api::handle_scale_export,
    ),
    components(schemas(
        api::ConvertResponse,
        api::FormatStrings,
        api::RgbValue,
        api::HslValue,
        api::OklchValue,
        api::ScaleResponse,
        api::SwatchValue,
        api::VariationsResponse,
    )),
    tags(
        (name = "Colour", description = "Single colour conversion and variations"),
        (name = "Scale", description = "Tint/shade scale generation and export")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Convert { color }) => {
            init_cli_logging();
            run_convert_command(&color)
        }
        Some(Commands::Scale {
            color,
            name,
            format,
        }) => {
            init_cli_logging();
            run_scale_command(&color, &name, format)
        }
        Some(Commands::Variations { color }) => {
            init_cli_logging();
            run_variations_command(&color)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonekit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Print every notation of one colour
fn run_convert_command(color: &str) -> anyhow::Result<()> {
    let rgb = tone_engine::parse(color)?;
    let formats = ColorFormats::from_rgb8(rgb);

    println!("HEX    {}", formats.hex);
    println!("RGB    {}", formats.rgb);
    println!("HSL    {}", formats.hsl);
    println!("OKLCH  {}", formats.oklch);
    println!("\nSwiftUI:\n{}", formats.swift);
    println!("\nAndroid:\n{}", formats.android);
    println!("\nTailwind:\n{}", formats.tailwind);

    Ok(())
}

/// Print a scale as a table, or as an export snippet when a format is given
fn run_scale_command(color: &str, name: &str, format: Option<ExportFormat>) -> anyhow::Result<()> {
    let rgb = tone_engine::parse(color)?;
    let scale = synthesize(rgb);
    let name = ScaleName::new(name);

    if let Some(format) = format {
        println!("{}", export_scale(&scale, &name, format));
        return Ok(());
    }

    println!("{name} scale from {rgb} (input at {})\n", scale.input_step());
    for swatch in scale.swatches() {
        println!(
            "  {:>3}  {}  {}{}",
            swatch.step.value(),
            swatch.hex(),
            tone_engine::format_oklch(swatch.oklch),
            if swatch.is_input { "  <- input" } else { "" }
        );
    }

    Ok(())
}

/// Print the three variation rows
fn run_variations_command(color: &str) -> anyhow::Result<()> {
    let rgb = tone_engine::parse(color)?;
    let rows = variations(rgb);

    let join = |row: &[tone_engine::Rgb8]| {
        row.iter()
            .map(|c| c.to_hex())
            .collect::<Vec<_>>()
            .join(" ")
    };

    println!("Lightness   {}", join(&rows.lightness));
    println!("Saturation  {}", join(&rows.saturation));
    println!("Harmony     {}", join(&rows.harmony));

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("tonekit v{VERSION}");
    println!("Colour conversion and OKLCH tint/shade scales\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Config source
    let config_source = match config_file {
        Some(ref path) if std::path::Path::new(path).exists() => path.to_string(),
        Some(_) => "built-in defaults (file not found)".to_string(),
        None => "built-in defaults".to_string(),
    };
    println!("\nConfig:  {config_source}");

    // Commands section
    println!("\nCommands:");
    println!("  tonekit serve               Start the HTTP server");
    println!("  tonekit convert <COLOR>     Print a colour in every notation");
    println!("  tonekit scale <COLOR>       Generate a 50-950 scale");
    println!("  tonekit variations <COLOR>  Print HSL variations");
    println!("\nRun 'tonekit --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonekit=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::from_env();

    // Build router: shared API routes plus production-only docs
    let app = server::build_router(server::create_app_state(config))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "tonekit server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
