//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Plan Configurator";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "plan-configurator";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "PlanConfigurator";

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "PLAN_CONFIGURATOR_LOG";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV_VAR: &str = "PLAN_CONFIGURATOR_CONFIG_DIR";
