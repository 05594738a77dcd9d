//! 配置管理命令

use crate::utils;
use anyhow::Result;
use clap::Subcommand;
use door_tools::DoorConfig;
use std::path::Path;

/// 配置命令
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// 写入默认配置文件
    Init {
        /// 覆盖已存在的文件
        #[arg(long)]
        force: bool,
    },

    /// 显示当前生效的配置
    Show,

    /// 显示配置文件路径
    Path,
}

impl ConfigCommand {
    pub fn execute(self, explicit: Option<&Path>) -> Result<()> {
        match self {
            ConfigCommand::Init { force } => Self::init_(explicit, force),
            ConfigCommand::Show => Self::show_(explicit),
            ConfigCommand::Path => {
                println!("{}", utils::config_path(explicit)?.display());
                Ok(())
            },
        }
    }

    fn init_(explicit: Option<&Path>, force: bool) -> Result<()> {
        let path = utils::config_path(explicit)?;
        if path.exists() && !force {
            anyhow::bail!("配置文件已存在: {}（使用 --force 覆盖）", path.display());
        }

        DoorConfig::default().save(&path)?;
        println!("✅ 已写入默认配置: {}", path.display());
        Ok(())
    }

    fn show_(explicit: Option<&Path>) -> Result<()> {
        let path = utils::config_path(explicit)?;
        let config = utils::load_config(explicit)?;

        if path.exists() {
            println!("# {}", path.display());
        } else {
            println!("# {}（不存在，使用默认配置）", path.display());
        }
        print!("{}", config.to_toml()?);
        Ok(())
    }
}
