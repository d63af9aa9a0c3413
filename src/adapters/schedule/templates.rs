use std::path::Path;

use super::{DailyJob, CRON_MARKER};

pub fn systemd_service(job: &DailyJob, home: &Path) -> String {
    format!(
        "[Unit]\n\
         Description=Skyforge Daily Alignment Report\n\
         After=network.target\n\
         \n\
         [Service]\n\
         Type=oneshot\n\
         ExecStart={}\n\
         Environment=HOME={}\n",
        job.command_line(),
        home.display()
    )
}

pub fn systemd_timer(job: &DailyJob) -> String {
    format!(
        "[Unit]\n\
         Description=Skyforge Daily Alignment Timer\n\
         \n\
         [Timer]\n\
         OnCalendar=*-*-* {}\n\
         Persistent=true\n\
         \n\
         [Install]\n\
         WantedBy=timers.target\n",
        job.time.format("%H:%M:00")
    )
}

pub fn cron_line(job: &DailyJob) -> String {
    format!(
        "{} {} * * * {} {}",
        job.time.format("%M"),
        job.time.format("%H"),
        job.command_line(),
        CRON_MARKER
    )
}

/// Drops any previous entry of ours, keeping every other line.
pub fn strip_crontab(existing: &str) -> String {
    let kept: Vec<&str> = existing
        .lines()
        .filter(|line| !line.contains(CRON_MARKER))
        .collect();
    let mut out = kept.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Existing crontab with our entry replaced by `line`.
pub fn merge_crontab(existing: &str, line: &str) -> String {
    let mut out = strip_crontab(existing);
    out.push_str(line);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn job() -> DailyJob {
        DailyJob::new(PathBuf::from("/bin/skyforge"), "default", "markdown", "file", "08:00")
            .unwrap()
    }

    #[test]
    fn service_unit() {
        let unit = systemd_service(&job(), Path::new("/home/me"));
        assert!(unit.starts_with("[Unit]\nDescription=Skyforge Daily Alignment Report\n"));
        assert!(unit.contains("Type=oneshot\n"));
        assert!(unit.contains(
            "ExecStart=/bin/skyforge daily --profile default --format markdown --output file\n"
        ));
        assert!(unit.contains("Environment=HOME=/home/me\n"));
    }

    #[test]
    fn timer_unit() {
        let unit = systemd_timer(&job());
        assert!(unit.contains("OnCalendar=*-*-* 08:00:00\n"));
        assert!(unit.contains("Persistent=true\n"));
        assert!(unit.ends_with("WantedBy=timers.target\n"));
    }

    #[test]
    fn cron_entry_is_minute_hour() {
        let line = cron_line(&job());
        assert!(line.starts_with("00 08 * * * /bin/skyforge daily"));
        assert!(line.ends_with(CRON_MARKER));
    }

    #[test]
    fn merge_replaces_previous_entry() {
        let existing = format!("0 1 * * * backup\n5 5 * * * old {}\n", CRON_MARKER);
        let merged = merge_crontab(&existing, "new line");
        assert_eq!(merged, "0 1 * * * backup\nnew line\n");
    }

    #[test]
    fn merge_into_empty_crontab() {
        assert_eq!(merge_crontab("", "x"), "x\n");
    }

    #[test]
    fn strip_keeps_foreign_lines() {
        let existing = format!("a\nb {}\nc\n", CRON_MARKER);
        assert_eq!(strip_crontab(&existing), "a\nc\n");
        assert_eq!(strip_crontab(&format!("only {}\n", CRON_MARKER)), "");
    }
}
