use clap::Parser;
use resumerag_core::{config, ResumeTable};
use resumerag_server::api::create_router;
use resumerag_server::api::handlers::AppState;
use resumerag_server::chat::{GroqChat, DEFAULT_CHAT_API_URL, DEFAULT_CHAT_MODEL};
use resumerag_server::oracle::RemoteVectorIndex;
use resumerag_server::retrieve::Retriever;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "resume-rag", about = "Resume retrieval and screening service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Path to the resume corpus CSV file
    #[arg(short, long, default_value = "./resumes.csv")]
    data_file: String,

    /// CSV column holding the applicant identifier
    #[arg(long, default_value = config::DEFAULT_ID_COLUMN)]
    id_column: String,

    /// CSV column holding the resume text
    #[arg(long, default_value = config::DEFAULT_CONTENT_COLUMN)]
    content_column: String,

    /// Base URL of the external vector-search service
    #[arg(long, default_value = "http://127.0.0.1:3030")]
    index_url: String,

    /// Collection name under which resumes are indexed in the vector-search service
    #[arg(long, default_value = "resumes")]
    collection: String,

    /// Base URL of the OpenAI-compatible chat completions API
    #[arg(long, default_value = DEFAULT_CHAT_API_URL)]
    chat_api_url: String,

    /// Chat model identifier
    #[arg(long, default_value = DEFAULT_CHAT_MODEL)]
    chat_model: String,

    /// Candidates requested from the oracle per sub-question
    #[arg(long, default_value_t = config::DEFAULT_K_PER_QUERY)]
    k_per_query: usize,

    /// Resumes returned after fusion and selection
    #[arg(long, default_value_t = config::DEFAULT_TOP_RESUMES)]
    top_resumes: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "resumerag_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive(
                    "resumerag_core=info"
                        .parse()
                        .expect("valid directive literal"),
                ),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }
    if args.k_per_query == 0 || args.k_per_query > config::MAX_K_PER_QUERY {
        eprintln!("Error: k-per-query must be 1-{}", config::MAX_K_PER_QUERY);
        std::process::exit(1);
    }
    if args.top_resumes == 0 {
        eprintln!("Error: top-resumes must be > 0");
        std::process::exit(1);
    }

    let api_key = match std::env::var("GROQ_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("Error: GROQ_API_KEY environment variable must be set");
            std::process::exit(1);
        }
    };

    let table =
        match ResumeTable::from_csv_path(&args.data_file, &args.id_column, &args.content_column) {
            Ok(table) => table,
            Err(e) => {
                eprintln!(
                    "Error: failed to load resume corpus '{}': {}",
                    args.data_file, e
                );
                std::process::exit(1);
            }
        };
    if table.is_empty() {
        tracing::warn!(data_file = %args.data_file, "resume corpus is empty");
    }

    let http = reqwest::Client::new();
    let oracle = Arc::new(RemoteVectorIndex::new(
        http.clone(),
        args.index_url.clone(),
        args.collection.clone(),
    ));
    let chat = Arc::new(GroqChat::new(
        http,
        args.chat_api_url.clone(),
        api_key,
        args.chat_model.clone(),
    ));

    let prometheus_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    let state = AppState {
        table: Arc::new(table),
        retriever: Arc::new(Retriever::new(oracle)),
        chat,
        prometheus_handle,
        k_per_query: args.k_per_query,
        top_resumes: args.top_resumes,
        start_time: Instant::now(),
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = args.port,
        data_file = %args.data_file,
        resumes = state.table.len(),
        index_url = %args.index_url,
        collection = %args.collection,
        chat_model = %args.chat_model,
        k_per_query = args.k_per_query,
        top_resumes = args.top_resumes,
        "resume-rag ready"
    );

    let app = create_router(state);
    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await?;

    tracing::info!("All requests drained, exiting");
    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}
