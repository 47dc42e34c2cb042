// ==========================================
// 装箱排产系统 - 文件解析器实现
// ==========================================
// 支持: 场景文件 (.json) / 物品清单 (.csv)
// ==========================================

use crate::importer::error::ImportError;
use crate::importer::scenario::{ItemSpec, Scenario};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// 检查文件存在且扩展名匹配
fn check_file(path: &Path, expected_ext: &str) -> Result<(), ImportError> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !ext.eq_ignore_ascii_case(expected_ext) {
        return Err(ImportError::UnsupportedFormat(ext.to_string()));
    }
    Ok(())
}

// ==========================================
// JSON 场景解析
// ==========================================
pub struct ScenarioParser;

impl ScenarioParser {
    pub fn parse_file(&self, path: &Path) -> Result<Scenario, ImportError> {
        check_file(path, "json")?;

        let file = File::open(path)?;
        let scenario: Scenario = serde_json::from_reader(file)?;
        info!(
            path = %path.display(),
            containers = scenario.containers.len(),
            items = scenario.items.len(),
            "已读取场景文件"
        );
        Ok(scenario)
    }
}

// ==========================================
// CSV 物品清单解析
// ==========================================
// 表头: name,volume（顺序不限，大小写不敏感）
pub struct CsvItemParser;

impl CsvItemParser {
    pub fn parse_file(&self, path: &Path) -> Result<Vec<ItemSpec>, ImportError> {
        check_file(path, "csv")?;
        let file = File::open(path)?;
        self.parse_reader(file)
    }

    pub fn parse_reader<R: std::io::Read>(&self, reader: R) -> Result<Vec<ItemSpec>, ImportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .trim(Trim::All)
            .from_reader(reader);

        // 定位列
        let headers = reader.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| ImportError::MissingColumn(name.to_string()))
        };
        let name_idx = column("name")?;
        let volume_idx = column("volume")?;

        let mut items = Vec::new();
        for result in reader.records() {
            let record = result?;

            // 跳过完全空白的行
            if record.iter().all(|v| v.is_empty()) {
                continue;
            }

            let row = record.position().map(|p| p.line()).unwrap_or(0);
            let name = record.get(name_idx).unwrap_or("").to_string();
            let raw_volume = record.get(volume_idx).unwrap_or("");
            let volume: f64 = raw_volume.parse().map_err(|_| ImportError::FieldMappingError {
                row,
                message: format!("volume 不是数字: '{}'", raw_volume),
            })?;

            items.push(ItemSpec { name, volume });
        }

        debug!(count = items.len(), "已解析 CSV 物品清单");
        Ok(items)
    }
}
