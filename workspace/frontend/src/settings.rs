use common::DisplayLocale;
use log::Level;
use std::fmt;
use studio_admin::AdminConfig;
use web_sys::window;

/// Admin API function used when no base URL is configured at build time.
pub const DEFAULT_API_BASE: &str =
    "https://functions.poehali.dev/3163a024-78e4-404e-a9ae-b215ace0c6b2";

/// Global application settings
#[derive(Clone)]
pub struct AppSettings {
    /// Admin API endpoint, every request goes here
    pub api_base: String,

    /// Value for the admin key header, baked in at build time
    pub admin_key: Option<String>,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Locale for dates, taken from the browser language
    pub locale: DisplayLocale,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            admin_key: None,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
            locale: DisplayLocale::default(),
        }
    }
}

impl AppSettings {
    /// Create settings from build-time variables and the window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(api_base) = option_env!("STUDIO_ADMIN_API_BASE").filter(|v| !v.trim().is_empty()) {
            settings.api_base = api_base.trim().to_string();
        }
        settings.admin_key = option_env!("STUDIO_ADMIN_KEY").map(str::to_string);

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Some(language) = window.navigator().language() {
                settings.locale = DisplayLocale::from_tag(&language);
            }
        }

        settings
    }

    /// Connection settings handed to the dashboard controller
    pub fn admin_config(&self) -> AdminConfig {
        AdminConfig::new(self.api_base.clone(), self.admin_key.clone())
    }
}

// The admin key never reaches the console
impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("api_base", &self.api_base)
            .field("admin_key_set", &self.admin_key.is_some())
            .field("log_level", &self.log_level)
            .field("debug_mode", &self.debug_mode)
            .field("toast_duration_ms", &self.toast_duration_ms)
            .field("locale", &self.locale)
            .finish()
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
