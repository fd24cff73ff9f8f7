//! Application-wide constants

pub const CODE_SUCCESS: i32 = 200;
pub const CODE_UNAUTHORIZED: i32 = 401;
pub const CODE_INTERNAL_ERROR: i32 = 500;

pub const DEFAULT_FAILURE_MESSAGE: &str = "Server error";
pub const USER_INFO_FAILURE_MESSAGE: &str = "Failed to fetch user info";

pub const PATH_SEPARATOR: char = '/';
pub const ROOT_PATH: &str = "/";

pub const DEFAULT_NOT_FOUND_ROUTE: &str = "404";
pub const DEFAULT_FORBIDDEN_ROUTE: &str = "403";
pub const DEFAULT_MENU_ENDPOINT: &str = "/api/v1/menus";
pub const LOGIN_ENDPOINT: &str = "/api/v1/users/login";
pub const USER_INFO_ENDPOINT: &str = "/api/v1/users/getUserInfo";
