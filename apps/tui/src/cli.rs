use clap::{CommandFactory, Parser};

use crate::config::{ENV_API_URL, ENV_DEBUG, ENV_LOG_DIR, ENV_PAGE_SIZE};
use crate::domain::BookingTab;

#[derive(Debug, Parser)]
#[command(name = "salesdesk", version, about = "Sales agent bookings dashboard")]
pub struct CliArgs {
    /// Print tab counts and one page of bookings, then exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the bookings API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the number of bookings per page
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// Override the log directory
    #[arg(long = "log-dir", value_name = "PATH")]
    pub log_dir: Option<String>,

    /// Headless: tab to list (all, today, upcoming, completed, cancelled)
    #[arg(long, value_name = "TAB", value_parser = parse_tab, default_value = "all")]
    pub tab: BookingTab,

    /// Headless: search term
    #[arg(long, value_name = "TERM", default_value = "")]
    pub search: String,

    /// Headless: 1-based page number
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub page: usize,

    /// Headless: date to treat as today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub today: Option<String>,

    /// Headless: log in as this admin user before loading
    #[arg(long, value_name = "USER", requires = "password")]
    pub username: Option<String>,

    /// Headless: admin password
    #[arg(long, value_name = "PASSWORD", requires = "username")]
    pub password: Option<String>,
}

fn parse_tab(value: &str) -> Result<BookingTab, String> {
    BookingTab::parse(value).ok_or_else(|| format!("unknown tab: {value}"))
}

fn parse_date(value: &str) -> Result<String, String> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var(ENV_API_URL, url);
        }
        if let Some(size) = self.page_size {
            std::env::set_var(ENV_PAGE_SIZE, size.to_string());
        }
        if let Some(dir) = &self.log_dir {
            std::env::set_var(ENV_LOG_DIR, dir);
        }
        if self.debug {
            std::env::set_var(ENV_DEBUG, "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_flags_parse() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from([
            "salesdesk",
            "--headless",
            "--tab",
            "upcoming",
            "--search",
            "john",
            "--page",
            "2",
            "--today",
            "2025-07-05",
        ])?;

        assert!(args.headless);
        assert_eq!(args.tab, BookingTab::Upcoming);
        assert_eq!(args.search, "john");
        assert_eq!(args.page, 2);
        assert_eq!(args.today.as_deref(), Some("2025-07-05"));
        Ok(())
    }

    #[test]
    fn bad_tab_and_date_are_rejected() {
        assert!(CliArgs::try_parse_from(["salesdesk", "--tab", "archived"]).is_err());
        assert!(CliArgs::try_parse_from(["salesdesk", "--today", "05/07/2025"]).is_err());
    }

    #[test]
    fn username_requires_password() {
        assert!(CliArgs::try_parse_from(["salesdesk", "--username", "admin"]).is_err());
    }

    #[test]
    fn help_mentions_headless() {
        assert!(CliArgs::help_text().contains("--headless"));
    }
}
