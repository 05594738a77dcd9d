//! 命令共用的辅助函数

use anyhow::{Context, Result};
use door_protocol::BenchmarkParams;
use door_tools::DoorConfig;
use door_tools::config::CONFIG_FILE_NAME;
use std::fs;
use std::path::{Path, PathBuf};

/// 默认配置文件路径：`<config_dir>/door/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法确定配置目录"))?;
    path.push("door");
    path.push(CONFIG_FILE_NAME);
    Ok(path)
}

/// 解析配置文件路径（命令行优先）
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// 加载配置
///
/// 显式指定的文件必须存在；默认路径不存在时使用默认配置。
pub fn load_config(explicit: Option<&Path>) -> Result<DoorConfig> {
    match explicit {
        Some(path) => DoorConfig::load(path),
        None => DoorConfig::load_or_default(default_config_path()?),
    }
}

/// 由命令行字符串构造参数（不做校验，未识别的值交给控制器处理）
pub fn raw_params(benchmark_type: &str, door_opening_side: &str) -> BenchmarkParams {
    BenchmarkParams {
        benchmark_type: benchmark_type.to_string(),
        door_opening_side: door_opening_side.to_string(),
        robot_approach_side: String::new(),
    }
}

/// 解析角度序列文本
///
/// 以空白或逗号分隔，`#` 之后为注释。
pub fn parse_angles(content: &str) -> Result<Vec<f64>> {
    let mut angles = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        for token in line.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }
            let angle: f64 = token
                .parse()
                .with_context(|| format!("第 {} 行: 无效的角度 {:?}", line_no + 1, token))?;
            angles.push(angle);
        }
    }

    Ok(angles)
}

/// 读取角度序列文件
pub fn read_angles(path: &Path) -> Result<Vec<f64>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("读取角度文件失败: {}", path.display()))?;
    parse_angles(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_angles() {
        let angles = parse_angles("0 1.5, 2\n# comment\n-3 # trailing\n\n").unwrap();
        assert_eq!(angles, vec![0.0, 1.5, 2.0, -3.0]);
    }

    #[test]
    fn test_parse_angles_invalid() {
        let err = parse_angles("1\n2 abc\n").unwrap_err();
        assert!(format!("{}", err).contains("第 2 行"));
    }

    #[test]
    fn test_raw_params() {
        let params = raw_params("Gusty", "up");
        assert_eq!(params.benchmark_type, "Gusty");
        assert_eq!(params.door_opening_side, "up");
        assert!(params.robot_approach_side.is_empty());
    }

    #[test]
    fn test_explicit_config_path() {
        let path = config_path(Some(Path::new("/tmp/door.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/door.toml"));
    }
}
