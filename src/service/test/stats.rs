use crate::{
    model::api::DataSource,
    service::{bot_api::BotApiClient, stats::StatsService},
};

/// Tests that an unreachable bot API yields simulated stats instead of an error.
///
/// The client points at an unroutable port so every request fails immediately.
///
/// Expected: a plausible payload tagged as simulated.
#[tokio::test]
async fn substitutes_simulated_stats_when_bot_api_is_down() {
    let bot_api = BotApiClient::new(
        reqwest::Client::new(),
        "http://127.0.0.1:1".to_string(),
        None,
    );

    let service = StatsService::new(&bot_api);
    let (stats, source) = service.overview().await;

    assert_eq!(source, DataSource::Simulated);
    assert!(!stats.shards.is_empty());
    assert!(stats.guilds > 0);
    assert!(stats.users > 0);

    // Shard guild counts add up to the total
    let shard_total: u64 = stats.shards.iter().map(|shard| shard.guilds).sum();
    assert_eq!(shard_total, stats.guilds);
}

/// Tests that simulated shards all report healthy with plausible latencies.
#[tokio::test]
async fn simulated_shards_look_healthy() {
    let bot_api = BotApiClient::new(
        reqwest::Client::new(),
        "http://127.0.0.1:1".to_string(),
        None,
    );

    let service = StatsService::new(&bot_api);
    let (stats, _) = service.overview().await;

    for shard in &stats.shards {
        assert_eq!(shard.status, "healthy");
        assert!(shard.latency_ms > 0);
    }
}
