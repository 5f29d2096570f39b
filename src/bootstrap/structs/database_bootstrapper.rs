use crate::bootstrap::structs::bootstrap_settings::BootstrapSettings;

#[derive(Debug, Clone)]
pub struct DatabaseBootstrapper {
    pub settings: BootstrapSettings,
}
