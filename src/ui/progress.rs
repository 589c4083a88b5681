use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub struct ProgressManager {
    mp: MultiProgress,
    bars: Arc<Mutex<HashMap<String, ProgressBar>>>,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            mp: MultiProgress::new(),
            bars: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Manager that never draws anything (`--no_progress`)
    pub fn hidden() -> Self {
        Self {
            mp: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            bars: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// 创建新的进度条
    /// - `id`: 进度条唯一标识
    /// - `total`: 总进度值
    /// - `template`: 进度条模板
    /// - `message`: 初始消息
    pub fn create_bar(
        &self,
        id: &str,
        total: u64,
        template: &str,
        message: &str,
    ) -> Result<(), String> {
        let mut bars = self
            .bars
            .lock()
            .map_err(|e| format!("Lock error: {}", e))?;

        if bars.contains_key(id) {
            return Err(format!("Progress bar '{}' already exists", id));
        }

        let style = ProgressStyle::default_bar()
            .template(template)
            .map_err(|e| format!("Template error: {}", e))?
            .progress_chars("█▉▊▋▌▍▎▏ ");

        let pb = self
            .mp
            .add(ProgressBar::new(total));
        pb.set_style(style);
        pb.set_message(message.to_string());

        bars.insert(id.to_string(), pb);
        Ok(())
    }

    /// 增加进度条位置
    pub fn inc(&self, id: &str, value: u64) -> Result<(), String> {
        let bars = self
            .bars
            .lock()
            .map_err(|e| format!("Lock error: {}", e))?;
        if let Some(pb) = bars.get(id) {
            pb.inc(value);
            Ok(())
        } else {
            Err(format!("Progress bar '{}' not found", id))
        }
    }

    /// 完成进度条（保留显示）
    pub fn finish(&self, id: &str, message: &str) -> Result<(), String> {
        let mut bars = self
            .bars
            .lock()
            .map_err(|e| format!("Lock error: {}", e))?;
        if let Some(pb) = bars.remove(id) {
            pb.finish_with_message(message.to_string());
            Ok(())
        } else {
            Err(format!("Progress bar '{}' not found", id))
        }
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

pub mod templates {
    pub const VOTING: &str =
        "VOTE [{bar:30.cyan}] {percent}% ({pos}/{len} positions) {msg}";
}
