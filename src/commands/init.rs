//! Init command implementation

use crate::{
    storage::{BootstrapReport, ConnectionManager},
    Result,
};

/// One line per bootstrap step; skipped steps carry the server's reason since
/// a lenient bootstrap also skips genuine failures.
pub fn format_bootstrap_report(report: &BootstrapReport) -> Vec<String> {
    let completed = report
        .completed
        .iter()
        .map(|step| format!("  created: {}", step));
    let skipped = report
        .skipped
        .iter()
        .map(|s| format!("  skipped: {} ({})", s.step, s.reason));
    completed.chain(skipped).collect()
}

/// Connect and bootstrap, then print what the bootstrap did.
pub async fn handle_init(manager: &ConnectionManager) -> Result<()> {
    let db = manager.get_instance().await?;

    println!("✓ Connected to database '{}'", db.database_name());
    for line in format_bootstrap_report(db.bootstrap_report()) {
        println!("{}", line);
    }

    Ok(())
}
