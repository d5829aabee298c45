//! 采样 CSV Sink
//!
//! 追加式表格日志：建档时写表头，之后每个样本一行并立即落盘，
//! 中途被打断的运行仍保留合法的样本前缀。

use super::accumulator::Snapshot;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 建档失败：必须在时间线启动前作为致命错误处理。
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("create sample log {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// 列序固定：时间列之后先是可靠流，再是尽力而为流。
const HEADER: &str = "time_seconds,reliable_packets_sent,reliable_packets_received,\
reliable_bytes_received,reliable_throughput_mbps,reliable_delivery_ratio_pct,\
best_effort_packets_sent,best_effort_packets_received,best_effort_bytes_received,\
best_effort_throughput_mbps,best_effort_delivery_ratio_pct";

/// 追加式采样日志
#[derive(Debug)]
pub struct MetricsCsv {
    w: BufWriter<File>,
}

impl MetricsCsv {
    /// 建档并写入表头
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let wrap = |source| SinkError::Create {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(wrap)?;
        let mut w = BufWriter::new(file);
        writeln!(w, "{HEADER}").map_err(wrap)?;
        w.flush().map_err(wrap)?;
        Ok(Self { w })
    }

    /// 表头行（测试与文档使用）
    pub fn header() -> &'static str {
        HEADER
    }

    /// 追加一行样本并立即落盘。时间列取自快照时刻。
    pub fn append(&mut self, reliable: &Snapshot, best_effort: &Snapshot) -> io::Result<()> {
        writeln!(
            self.w,
            "{:.6},{},{},{},{:.6},{:.6},{},{},{},{:.6},{:.6}",
            reliable.t_secs,
            reliable.packets_sent,
            reliable.packets_received,
            reliable.bytes_received,
            reliable.throughput_mbps,
            reliable.delivery_ratio_pct,
            best_effort.packets_sent,
            best_effort.packets_received,
            best_effort.bytes_received,
            best_effort.throughput_mbps,
            best_effort.delivery_ratio_pct,
        )?;
        self.w.flush()
    }
}

impl Drop for MetricsCsv {
    fn drop(&mut self) {
        let _ = self.w.flush();
    }
}
