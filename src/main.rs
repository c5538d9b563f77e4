use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info};

use playlist_resolver::common::logger::PrettyLogger;
use playlist_resolver::parser::detector::detect_playlist_id;
use playlist_resolver::resolver::{CatalogFile, ThumbnailRules};
use playlist_resolver::{AppConfig, CatalogItem, PlaylistService, Resolution, ThumbnailQuality};
use playlist_resolver::{log_error, log_info, log_step, log_success, log_warning};

mod cli;

use cli::{Cli, Commands};

/// 环境变量之上再叠加命令行参数
fn build_config(args: &Cli) -> AppConfig {
    let mut config = AppConfig::from_env();
    if let Some(feed_base) = &args.feed_base {
        config.feed_base = feed_base.clone();
    }
    if let Some(secs) = args.timeout {
        config.http_timeout = Duration::from_secs(secs);
    }
    if let Commands::Serve { bind, revalidate } = &args.command {
        if let Some(bind) = bind {
            config.bind = *bind;
        }
        if let Some(secs) = revalidate {
            config.revalidate = Duration::from_secs(*secs);
        }
    }
    config
}

async fn run_fetch(service: &PlaylistService, playlist: &str, json: bool) -> Result<()> {
    let playlist_id = detect_playlist_id(playlist)?;
    log_step!("获取播放列表 {}", playlist_id);

    let entries = service.playlist(&playlist_id).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&*entries)?);
        return Ok(());
    }

    PrettyLogger::separator();
    for (index, entry) in entries.iter().enumerate() {
        PrettyLogger::video_entry(index, entry);
    }
    PrettyLogger::separator();
    log_success!("共 {} 个视频", entries.len());
    Ok(())
}

async fn load_catalog(path: &Path) -> Result<CatalogFile> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("读取作品目录失败: {}", path.display()))?;
    let catalog = CatalogFile::from_json(&raw)
        .with_context(|| format!("作品目录格式错误: {}", path.display()))?;
    debug!(
        "读取到 {} 个作品, {} 个 key 覆盖",
        catalog.items.len(),
        catalog.keys.len()
    );
    Ok(catalog)
}

fn print_resolutions(resolutions: &[Resolution]) {
    for resolution in resolutions {
        match &resolution.entry {
            Some(entry) => {
                PrettyLogger::match_found(&resolution.slug, entry);
                if let Some(thumbnail) = &resolution.thumbnail_url {
                    debug!("{} 缩略图: {}", resolution.slug, thumbnail);
                }
            }
            None => PrettyLogger::no_match(&resolution.slug, &resolution.key),
        }
    }
}

/// resolve 子命令的参数
struct ResolveArgs<'a> {
    playlist: &'a str,
    title: Option<&'a str>,
    slug: Option<&'a str>,
    catalog: Option<&'a Path>,
    keys: &'a [(String, String)],
    hq_thumbs: &'a [String],
    json: bool,
}

async fn run_resolve(config: &AppConfig, args: ResolveArgs<'_>) -> Result<()> {
    let playlist_id = detect_playlist_id(args.playlist)?;

    let catalog = match (args.catalog, args.title) {
        (Some(path), _) => load_catalog(path).await?,
        (None, Some(title)) => CatalogFile {
            items: vec![CatalogItem::new(args.slug.unwrap_or(title), title)],
            ..CatalogFile::default()
        },
        (None, None) => return Err(anyhow!("需要 --title 或 --catalog")),
    };

    // 目录文件的设置在前，命令行参数覆盖
    let keys = args
        .keys
        .iter()
        .fold(catalog.title_keys(), |keys, (slug, key)| {
            keys.with_override(slug.as_str(), key)
        });
    let service = PlaylistService::from_config(config)?.with_title_keys(keys);
    let thumbnails = args.hq_thumbs.iter().fold(
        catalog.thumbnail_rules(service.thumbnail_rules().clone()),
        |rules: ThumbnailRules, slug| rules.with_quality(slug.as_str(), ThumbnailQuality::High),
    );
    let service = service.with_thumbnail_rules(thumbnails);
    let items = catalog.items;
    let json = args.json;

    log_step!("在播放列表 {} 中匹配 {} 个作品", playlist_id, items.len());
    let resolutions = service.resolve_catalog(&playlist_id, &items).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolutions)?);
        return Ok(());
    }

    print_resolutions(&resolutions);
    let matched = resolutions.iter().filter(|r| r.entry.is_some()).count();
    if matched == 0 {
        log_warning!("没有找到匹配的视频");
    } else {
        log_info!("匹配到 {}/{} 个作品", matched, resolutions.len());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // 解析命令行参数
    let args = Cli::parse();

    // 初始化日志
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = build_config(&args);
    debug!("运行配置: {:?}", config);

    let result = match &args.command {
        Commands::Fetch { playlist, json } => {
            let service = PlaylistService::from_config(&config)?;
            run_fetch(&service, playlist, *json).await
        }
        Commands::Resolve {
            playlist,
            title,
            slug,
            catalog,
            keys,
            hq_thumbs,
            json,
        } => {
            let args = ResolveArgs {
                playlist,
                title: title.as_deref(),
                slug: slug.as_deref(),
                catalog: catalog.as_deref(),
                keys,
                hq_thumbs,
                json: *json,
            };
            run_resolve(&config, args).await
        }
        #[cfg(feature = "http")]
        Commands::Serve { .. } => {
            info!("启动 HTTP 服务");
            playlist_resolver::server::serve(config).await
        }
        #[cfg(not(feature = "http"))]
        Commands::Serve { .. } => Err(anyhow!("未启用 http 功能，无法启动服务")),
    };

    if let Err(e) = &result {
        error!("执行失败: {:#}", e);
        log_error!("{}", e);
    }
    result
}
