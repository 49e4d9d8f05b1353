use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Installs the global `tracing` subscriber. A second call is a no-op.
///
/// Diagnostics go to stderr: stdout carries only the button output lines.
pub fn init_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(std::io::stderr)
        .try_init();
}

/// `RUST_LOG`-style directives, falling back to `warn` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

/// Size and border of the two session buttons, in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlGeometry {
    pub width: f32,
    pub height: f32,
    pub region_padding: u16,
    pub border_width: f32,
}

impl Default for ControlGeometry {
    fn default() -> Self {
        Self {
            width: 208.0,
            height: 72.0,
            region_padding: 24,
            border_width: 4.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub resizable: bool,
    pub control: ControlGeometry,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "PeersChat GUI Test".to_string(),
            window_width: 512.0,
            window_height: 128.0,
            resizable: false,
            control: ControlGeometry::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_matches_launcher_layout() {
        let config = AppConfig::default();
        assert_eq!(config.title, "PeersChat GUI Test");
        assert_eq!(config.window_width, 512.0);
        assert_eq!(config.window_height, 128.0);
        assert!(!config.resizable);
    }

    #[test]
    fn both_regions_fit_inside_the_window() {
        let config = AppConfig::default();
        let control = config.control;
        let regions_width = 2.0 * (control.width + 2.0 * f32::from(control.region_padding));
        assert!(regions_width <= config.window_width);
        assert!(control.height < config.window_height);
    }

    #[test]
    fn warnings_pass_the_filter_without_rust_log() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn rust_log_directives_override_the_default() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn init_logging_twice_installs_one_subscriber() {
        init_logging();
        init_logging();
        assert!(tracing::dispatcher::has_been_set());
    }
}
