use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    /// 執行整個轉換流程，回傳合併後的 Ghost JSON 文件
    pub async fn run(&self) -> Result<String> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        tracing::info!("Starting conversion...");

        // Extract
        tracing::info!("Reading markdown posts...");
        let documents = self.pipeline.extract().await?;
        tracing::info!("Parsed {} markdown files", documents.len());
        monitor.record_phase("Extract");

        // Transform
        tracing::info!("Building Ghost records...");
        let records = self.pipeline.transform(documents).await?;
        tracing::info!(
            "Built {} posts, {} tags, {} post-tag links",
            records.posts.len(),
            records.tags.len(),
            records.posts_tags.len()
        );
        monitor.record_phase("Transform");

        // Load
        tracing::info!("Merging into Ghost export...");
        let output = self.pipeline.load(records).await?;
        tracing::info!("Merged document is {} bytes", output.len());
        monitor.record_phase("Load");

        monitor.log_final_stats();
        Ok(output)
    }
}
