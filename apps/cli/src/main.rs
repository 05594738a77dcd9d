//! # Door CLI
//!
//! 门阻力控制器的命令行工具：查看力曲线、计算阻力、回放角度序列。
//!
//! ```bash
//! # 列出内置力曲线
//! door-cli profiles
//!
//! # 单点计算
//! door-cli force --profile "Sudden Ramp" --side CCW --angle 42.5
//!
//! # 扫描角度区间
//! door-cli sweep --profile "Wind Ramp" --side CW --from 0 --to 120 --step 5 --json
//!
//! # 回放角度序列并录制轨迹
//! door-cli replay --angles angles.txt --params params.json --output trace.bin
//! door-cli inspect --input trace.bin
//! ```
//!
//! 日志级别通过 `RUST_LOG` 控制，默认 `door_cli=info`。

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod utils;

use commands::{
    ConfigCommand, ForceCommand, InspectCommand, ProfilesCommand, ReplayCommand, SweepCommand,
};

/// Door CLI - 门阻力控制器命令行工具
#[derive(Parser, Debug)]
#[command(name = "door-cli")]
#[command(about = "Inspect and replay the door force controller", long_about = None)]
#[command(version)]
struct Cli {
    /// 配置文件（默认 `<config_dir>/door/config.toml`）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 配置管理
    #[command(subcommand)]
    Config(ConfigCommand),

    /// 列出内置力曲线
    Profiles {
        #[command(flatten)]
        args: ProfilesCommand,
    },

    /// 计算单个角度的阻力
    Force {
        #[command(flatten)]
        args: ForceCommand,
    },

    /// 扫描角度区间
    Sweep {
        #[command(flatten)]
        args: SweepCommand,
    },

    /// 把角度序列送入控制器回放
    Replay {
        #[command(flatten)]
        args: ReplayCommand,
    },

    /// 查看轨迹文件
    Inspect {
        #[command(flatten)]
        args: InspectCommand,
    },
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("door_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config;

    match cli.command {
        Commands::Config(cmd) => cmd.execute(config_path.as_deref()),
        Commands::Profiles { args } => args.execute(),
        Commands::Force { args } => args.execute(),
        Commands::Sweep { args } => args.execute(),
        Commands::Replay { args } => {
            let config = utils::load_config(config_path.as_deref())?;
            args.execute(&config)
        },
        Commands::Inspect { args } => args.execute(),
    }
}
