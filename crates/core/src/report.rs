//! Text reports over a whole snapshot.

use std::fmt::Write;

use crate::model::{StatusSnapshot, SuspensionRecord};

/// Whether a status announces anything other than business as usual.
///
/// "停止" always counts; otherwise anything that is neither "照常" (normal)
/// nor "尚未" (not yet announced) counts, which catches partial suspensions.
pub fn is_suspended(status: &str) -> bool {
    status.contains("停止") || (!status.contains("照常") && !status.contains("尚未"))
}

/// Summary of announced suspensions, or a note that there are none.
pub fn format_summary(snapshot: &StatusSnapshot) -> String {
    if let Some(error) = &snapshot.error {
        return format!("Error: {error}");
    }

    let suspended: Vec<&SuspensionRecord> = snapshot.records.iter().filter(|r| is_suspended(&r.status)).collect();

    if suspended.is_empty() {
        return format!(
            "目前全台無停班停課公告 (更新: {})。\n大部分縣市狀態為: 尚未宣布消息 或 照常上班上課。",
            snapshot.updated_at
        );
    }

    let mut text = format!("【停班停課資訊】(更新: {})\n", snapshot.updated_at);
    push_lines(&mut text, suspended);
    text.push_str("\n其他縣市目前無特別公告或照常上班上課。");
    text
}

/// Every record, one per line.
pub fn format_listing(snapshot: &StatusSnapshot) -> String {
    if let Some(error) = &snapshot.error {
        return format!("Error: {error}");
    }

    let mut text = format!("全台停班停課情形 (更新: {}):\n", snapshot.updated_at);
    push_lines(&mut text, &snapshot.records);
    text
}

fn push_lines<'a>(text: &mut String, records: impl IntoIterator<Item = &'a SuspensionRecord>) {
    for record in records {
        let _ = writeln!(text, "- {}: {}", record.city, record.status);
    }
}
