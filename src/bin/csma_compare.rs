//! CSMA 网络对比实验
//!
//! 两个镜像 CSMA 段分别承载可靠流与尽力而为流，以相同的恒定
//! 应用速率发送；运行期间周期采样写入 CSV，结束后输出对比报告。

use clap::Parser;
use csmasim_rs::app::{OnOffConfig, SendAppPacket};
use csmasim_rs::config::RunConfig;
use csmasim_rs::metrics::{FlowKind, MetricsCsv, SampleTick, SamplerConfig};
use csmasim_rs::report::ComparisonReport;
use csmasim_rs::sim::{SimTime, Simulator};
use csmasim_rs::topo::build_compare_topology;
use csmasim_rs::world::CompareWorld;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "csma-compare",
    about = "CSMA 对比仿真：可靠流 vs 尽力而为流（同速率 OnOff 应用）"
)]
struct Args {
    /// 每段接入的主机数
    #[arg(long, default_value_t = 5)]
    nodes: u32,

    /// 信道速率（Mbps）
    #[arg(long, default_value_t = 100)]
    data_rate_mbps: u64,

    /// 信道传播时延（微秒）
    #[arg(long, default_value_t = 2)]
    delay_us: u64,

    /// 仿真时长（秒）
    #[arg(long, default_value_t = 10)]
    sim_time_secs: u64,

    /// 应用分组大小（字节）
    #[arg(long, default_value_t = 1024)]
    packet_bytes: u32,

    /// 应用发送速率（Mbps，两条流相同）
    #[arg(long, default_value_t = 50)]
    app_rate_mbps: u64,

    /// 可靠流线路分段载荷上限（字节）
    #[arg(long, default_value_t = 536)]
    mss_bytes: u32,

    /// 采样 CSV 输出路径
    #[arg(long, default_value = "csma_metrics.csv")]
    csv: PathBuf,

    /// 最终报告的 JSON 输出路径；不填则不生成
    #[arg(long)]
    report_json: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let cfg = RunConfig {
        nodes: args.nodes,
        data_rate_mbps: args.data_rate_mbps,
        delay_us: args.delay_us,
        sim_time_secs: args.sim_time_secs,
        packet_bytes: args.packet_bytes,
        app_rate_mbps: args.app_rate_mbps,
        mss_bytes: args.mss_bytes,
    };
    if let Err(e) = cfg.validate() {
        eprintln!("invalid run parameters: {e}");
        return ExitCode::from(2);
    }

    // Sink 建档失败必须在时间线启动前拦截。
    let csv = match MetricsCsv::create(&args.csv) {
        Ok(csv) => csv,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let mut sim = Simulator::default();
    let mut world = CompareWorld {
        csv: Some(csv),
        ..CompareWorld::default()
    };

    let (reliable, best_effort) = build_compare_topology(&mut world, &cfg);

    println!();
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║   CSMA NETWORK CONFIGURATION: RELIABLE vs BEST-EFFORT FLOW     ║");
    println!("╚════════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Nodes per Segment:       {}", cfg.nodes);
    println!("  Channel Data Rate:       {} Mbps", cfg.data_rate_mbps);
    println!("  Propagation Delay:       {} microseconds", cfg.delay_us);
    println!("  Packet Size:             {} bytes", cfg.packet_bytes);
    println!(
        "  Application Data Rate:   {} Mbps (same for both)",
        cfg.app_rate_mbps
    );
    println!("  Segment Payload (MSS):   {} bytes", cfg.mss_bytes);
    println!("  Simulation Time:         {} seconds", cfg.sim_time_secs);
    println!();
    println!("  Starting simulation...");
    println!();

    let horizon = cfg.horizon();
    let app_start = SimTime::from_secs(1);
    for (ep, flow) in [
        (reliable, FlowKind::Reliable),
        (best_effort, FlowKind::BestEffort),
    ] {
        let app = OnOffConfig {
            flow,
            seg: ep.seg,
            src: ep.sender,
            dst: ep.sink,
            packet_bytes: cfg.packet_bytes,
            rate_bps: cfg.app_rate_bps(),
            mss_bytes: cfg.mss_bytes,
            stop_at: horizon,
        };
        sim.schedule(app_start, SendAppPacket { cfg: app });
    }

    SampleTick::schedule_first(&mut sim, &mut world, SamplerConfig::for_horizon(horizon));

    sim.run_until(horizon, &mut world);

    let csv_path = args.csv.clone();
    let report = ComparisonReport::build(cfg, &world.metrics);
    println!("{report}");
    println!("  ✓ CSV file saved: {}", csv_path.display());

    if let Some(path) = args.report_json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, json) {
                    eprintln!("write report json {}: {e}", path.display());
                    return ExitCode::from(2);
                }
                eprintln!("wrote report json to {}", path.display());
            }
            Err(e) => {
                eprintln!("serialize report: {e}");
                return ExitCode::from(2);
            }
        }
    }

    ExitCode::SUCCESS
}
