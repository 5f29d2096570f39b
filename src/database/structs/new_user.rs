/// A user row ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub role: i32,
    pub status: i32,
    pub access_token: String,
    pub quota: i64,
}
