// bozor - marketplace command line
//
// Usage:
//   bozor search <query> [--scope all|malls|stores|products]
//   bozor status
//   bozor view <stores|products> <id>
//   bozor rewards

use anyhow::{Context, Result};
use bozor_engine::utils::time::{millis_to_local, now_in};
use bozor_engine::{AppError, Config, Engine, ErrorCode, SearchScope, init_logger_with_file};
use clap::{Parser, Subcommand};
use serde_json::json;
use shared::types::ItemKind;

/// Points granted the first time a user opens an item page
const VIEW_REWARD_POINTS: i64 = 5;

/// Samarkand malls marketplace
#[derive(Parser)]
#[command(name = "bozor", version, about = "Search and browse Samarkand malls")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ranked search across malls, stores and products
    Search {
        query: String,
        /// all, malls, stores or products
        #[arg(long, default_value = "all", value_parser = parse_scope)]
        scope: SearchScope,
    },

    /// Open/closed status of every mall right now
    Status,

    /// Show a store or product and record the visit
    View {
        /// stores or products
        #[arg(value_parser = parse_kind)]
        kind: ItemKind,
        id: String,
    },

    /// Points, tier and last reward of the current user
    Rewards,
}

fn parse_scope(s: &str) -> Result<SearchScope, String> {
    SearchScope::parse(s).ok_or_else(|| format!("unknown scope '{s}'"))
}

fn parse_kind(s: &str) -> Result<ItemKind, String> {
    ItemKind::parse(s).ok_or_else(|| format!("unknown kind '{s}', expected stores or products"))
}

fn main() -> Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // 2. 加载配置
    let config = Config::from_env().context("invalid configuration")?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    // 3. 初始化引擎
    let mut engine = Engine::initialize(config).context("failed to initialize engine")?;

    let output = match cli.command {
        Commands::Search { query, scope } => {
            engine.search(&query, scope, |results| serde_json::to_value(&results))?
        }
        Commands::Status => {
            let now = now_in(engine.config.timezone);
            json!({
                "at": now.to_rfc3339(),
                "malls": engine.mall_statuses(now),
            })
        }
        Commands::View { kind, id } => view(&mut engine, kind, &id)?,
        Commands::Rewards => {
            let store = &engine.store;
            let last_reward = store.last_reward();
            json!({
                "userId": store.user_id(),
                "points": store.points(),
                "tier": store.tier().name(),
                "nextThreshold": store.tier().next_threshold(),
                "lastReward": last_reward,
                "lastRewardLocal": last_reward
                    .and_then(|r| millis_to_local(r.at, engine.config.timezone))
                    .map(|t| t.to_rfc3339()),
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn not_found(code: ErrorCode, id: &str) -> AppError {
    AppError::with_message(code, format!("{}: {id}", code.message()))
        .with_detail("id", id)
}

fn view(engine: &mut Engine, kind: ItemKind, id: &str) -> Result<serde_json::Value> {
    let item = match kind {
        ItemKind::Stores => {
            let store = engine
                .store
                .store_by_id(id)
                .ok_or_else(|| not_found(ErrorCode::StoreNotFound, id))?;
            let mall = engine.catalog.mall_of_store(store);
            json!({ "store": store, "mall": mall })
        }
        ItemKind::Products => {
            let product = engine
                .store
                .product_by_id(id)
                .ok_or_else(|| not_found(ErrorCode::ProductNotFound, id))?;
            let store = engine.catalog.store(&product.store_id);
            json!({
                "product": product,
                "store": store,
                "rating": engine.store.average_rating(id),
            })
        }
    };

    let store = &mut engine.store;
    store.add_recently_viewed(kind, id);
    let rewarded = store.award_points_once(
        &format!("view:{kind}:{id}"),
        VIEW_REWARD_POINTS,
        &format!("Viewed {kind}"),
    );
    tracing::debug!(%kind, id, rewarded, "Item viewed");

    Ok(json!({
        "item": item,
        "favorite": store.is_favorite(kind, id),
        "points": store.points(),
    }))
}
