/// Optional fields a caller may set at account creation time. Anything left
/// `None` falls back to the factory's defaults.
#[derive(Debug, Clone, Default)]
pub struct AccountOverrides {
    pub email: Option<String>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
}
