//! Well-known store keys.

/// Session token
pub const TOKEN: &str = "token";
/// JSON-serialized [`dash_core::User`]
pub const USER: &str = "user";
/// Shop cart state owned by another feature; only cleared on logout
pub const SHOP_STORAGE: &str = "shop-storage";
/// Theme preference
pub const THEME: &str = "theme";
