mod server;

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use prometheus::Registry;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

use solr_exporter_core::config::{DEFAULT_CONTEXT_PATH, DEFAULT_SOLR_ADDRESS};
use solr_exporter_core::{
    CoreFilter, ExporterConfig, HttpTransport, JvmCollector, MBeansExporter, MetricsCollector,
    PingCollector, Transport,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Parser)]
#[command(
    name = "solr-exporter",
    about = "Prometheus exporter for Apache Solr",
    version = solr_exporter_core::VERSION
)]
struct Args {
    /// Address to listen on for telemetry.
    #[arg(long, default_value = "0.0.0.0:9231", env = "SOLR_EXPORTER_LISTEN_ADDRESS")]
    listen_address: SocketAddr,

    /// Path under which to expose metrics.
    #[arg(long, default_value = "/metrics", env = "SOLR_EXPORTER_TELEMETRY_PATH")]
    telemetry_path: String,

    /// Solr address.
    #[arg(long, default_value = DEFAULT_SOLR_ADDRESS, env = "SOLR_EXPORTER_SOLR_ADDRESS")]
    solr_address: String,

    /// Solr webapp context path.
    #[arg(long, default_value = DEFAULT_CONTEXT_PATH, env = "SOLR_EXPORTER_SOLR_CONTEXT_PATH")]
    solr_context_path: String,

    /// Regex of core names to exclude.
    #[arg(long, default_value = "", env = "SOLR_EXPORTER_SOLR_EXCLUDED_CORE")]
    solr_excluded_core: String,

    /// Comma-separated list of core names to exclude.
    #[arg(long, env = "SOLR_EXPORTER_SOLR_IGNORED_CORES", value_delimiter = ',')]
    solr_ignored_cores: Vec<String>,

    /// Timeout for each request to Solr (e.g. 5s, 500ms).
    #[arg(
        long,
        default_value = "5s",
        value_parser = humantime::parse_duration,
        env = "SOLR_EXPORTER_SOLR_TIMEOUT"
    )]
    solr_timeout: Duration,

    /// Enable the aggregate /admin/metrics collector.
    #[arg(long, env = "SOLR_EXPORTER_COLLECTOR_METRICS")]
    collector_metrics: bool,

    /// Enable the per-core ping collector.
    #[arg(long, env = "SOLR_EXPORTER_COLLECTOR_PING")]
    collector_ping: bool,

    /// Enable the JVM collector.
    #[arg(long, env = "SOLR_EXPORTER_COLLECTOR_JVM")]
    collector_jvm: bool,

    /// Increase verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    info!(
        version = solr_exporter_core::VERSION,
        solr = %args.solr_address,
        "starting solr exporter"
    );

    // Collectors own a blocking HTTP client, so they are built outside the runtime.
    let registry = match build_registry(&args) {
        Ok(registry) => registry,
        Err(e) => {
            error!(error = %e, "failed to set up collectors");
            process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            process::exit(1);
        }
    };

    let config = server::ServerConfig {
        listen_address: args.listen_address,
        telemetry_path: args.telemetry_path,
    };
    if let Err(e) = runtime.block_on(server::serve(config, registry)) {
        error!(error = %e, "server error");
        process::exit(1);
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["solr_exporter", "solr_exporter_core"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn build_registry(args: &Args) -> Result<Registry, Box<dyn std::error::Error>> {
    let filter = CoreFilter::new(&args.solr_excluded_core, &args.solr_ignored_cores)?;
    let config = ExporterConfig::new(
        &args.solr_address,
        &args.solr_context_path,
        args.solr_timeout,
        filter,
    );
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(config.timeout)?);

    let registry = Registry::new();
    registry.register(Box::new(MBeansExporter::new(config.clone(), transport.clone())?))?;
    if args.collector_metrics {
        registry.register(Box::new(MetricsCollector::new(config.clone(), transport.clone())?))?;
    }
    if args.collector_ping {
        registry.register(Box::new(PingCollector::new(config.clone(), transport.clone())?))?;
    }
    if args.collector_jvm {
        registry.register(Box::new(JvmCollector::new(config.clone(), transport)?))?;
    }
    info!(
        base_url = %config.base_url,
        timeout = ?config.timeout,
        metrics = args.collector_metrics,
        ping = args.collector_ping,
        jvm = args.collector_jvm,
        "collectors registered"
    );
    Ok(registry)
}
