use anyhow::{Context, anyhow};
use clap::Parser;
use std::path::Path;
use udf_docs::cli::{ApiArgs, Cli, Commands};
use udf_docs::config::{FileConfig, Settings};
use udf_docs::html::Node;
use udf_docs::{HttpSource, logging, render_udfs, rewrite_source_links, site};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let file = match &cli.config {
        Some(path) => FileConfig::load(path).await?,
        None => FileConfig::load_default().await?,
    };

    match cli.command {
        Commands::Render { api } => {
            let section = fetch_section(&file, api).await?;
            println!("{}", section);
        }
        Commands::Inject { api, page, output } => {
            let section = fetch_section(&file, api).await?;
            let output = output.as_deref().unwrap_or(&page);
            site::inject_file(&page, output, &section)
                .await
                .with_context(|| format!("UDFs: failed to inject into {}", page.display()))?;
            tracing::info!(page = %output.display(), "Injected UDF section");
        }
        Commands::Site { api, dir } => {
            let section = fetch_section(&file, api).await?;
            let report = site::inject_site(&dir, &section).await?;
            tracing::info!(
                updated = report.updated.len(),
                failed = report.failed.len(),
                "Finished injecting site"
            );
            if !report.failed.is_empty() {
                anyhow::bail!("{} page(s) could not be updated", report.failed.len());
            }
        }
        Commands::SourceLinks {
            host,
            path,
            page,
            output,
        } => {
            let host = host
                .or(file.source_host)
                .ok_or_else(|| anyhow!("No source host given. Pass --host or set source_host"))?;
            let output = output.as_deref().unwrap_or(&page);
            rewrite_links_file(&page, output, &host, &path).await?;
        }
    }

    Ok(())
}

async fn fetch_section(file: &FileConfig, api: ApiArgs) -> anyhow::Result<Node> {
    let settings = Settings::resolve(file, &api.into()).ok_or_else(|| {
        anyhow!("No origin configured. Pass --origin, set UDF_DOCS_ORIGIN, or add `origin` to the config")
    })?;

    tracing::info!(api = %settings.api_origin, "Fetching UDFs");
    let source = HttpSource::new(settings.api_origin);
    render_udfs(&source)
        .await
        .context("UDFs: failed to fetch projects")
}

async fn rewrite_links_file(
    input: &Path,
    output: &Path,
    host: &str,
    path: &str,
) -> anyhow::Result<()> {
    let page = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let rewritten = rewrite_source_links(&page, host, path)?;
    tokio::fs::write(output, rewritten)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(page = %output.display(), "Rewrote source links");
    Ok(())
}
